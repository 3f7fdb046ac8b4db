use once_cell::sync::Lazy;
use regex::Regex;

// Grammar accepted by the portal's content editor: paragraphs, `**Heading**`
// lines, `- ` bullets, `N. ` numbered items, and inline `**bold**`.
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("numbered item pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

/// One parsed block. Produced and consumed inside a single `render` call,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
enum TextBlock {
    Paragraph(String),
    Heading(String),
    List(Vec<String>),
    Blank,
}

/// Render the portal's restricted text grammar to HTML.
///
/// Literal text is escaped and only recognized constructs emit markup, so
/// the output is safe to inject even when a body slips past editorial
/// review. Any input terminates and returns a string; malformed lines just
/// become paragraphs.
pub fn render(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let blocks = parse_blocks(content);
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_blocks(content: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut list_items: Vec<String> = Vec::new();

    for line in content.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            close_list(&mut list_items, &mut blocks);
            blocks.push(TextBlock::Blank);
        } else if trimmed.starts_with("**") && trimmed.ends_with("**") {
            close_list(&mut list_items, &mut blocks);
            let inner = if trimmed.len() >= 4 {
                &trimmed[2..trimmed.len() - 2]
            } else {
                ""
            };
            blocks.push(TextBlock::Heading(inner.to_string()));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            list_items.push(item.to_string());
        } else if let Some(caps) = NUMBERED_ITEM.captures(trimmed) {
            // numbered items join the open bulleted list and lose their
            // numbering; screens have depended on this grouping for years
            list_items.push(caps[2].to_string());
        } else {
            close_list(&mut list_items, &mut blocks);
            blocks.push(TextBlock::Paragraph(trimmed.to_string()));
        }
    }

    close_list(&mut list_items, &mut blocks);
    blocks
}

fn close_list(items: &mut Vec<String>, blocks: &mut Vec<TextBlock>) {
    if !items.is_empty() {
        blocks.push(TextBlock::List(std::mem::take(items)));
    }
}

fn render_block(block: &TextBlock) -> String {
    match block {
        TextBlock::Paragraph(text) => format!("<p>{}</p>", render_inline(text)),
        TextBlock::Heading(text) => format!("<h3>{}</h3>", escape_html(text)),
        TextBlock::List(items) => {
            let body: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inline(item)))
                .collect();
            format!("<ul>{body}</ul>")
        }
        TextBlock::Blank => "<br />".to_string(),
    }
}

/// Escape literal text and wrap recognized `**bold**` runs in `<strong>`.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for hit in BOLD.find_iter(text) {
        out.push_str(&escape_html(&text[last..hit.start()]));
        out.push_str("<strong>");
        out.push_str(&escape_html(&text[hit.start() + 2..hit.end() - 2]));
        out.push_str("</strong>");
        last = hit.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

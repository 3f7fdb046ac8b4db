use std::collections::{HashMap, HashSet};

use uniview_types::{
    niveau_label, CatalogFile, CatalogFolder, CatalogNode, CourseRecord, FALLBACK_FILIERE,
    FALLBACK_NIVEAU,
};

struct NiveauGroup {
    code: String,
    files: Vec<CatalogFile>,
}

struct FiliereGroup {
    name: String,
    niveau_index: HashMap<String, usize>,
    niveaux: Vec<NiveauGroup>,
}

/// Build the filière → niveau → course tree. Folders appear in the order
/// their filière/niveau was first seen, mirroring how the backend returns
/// course lists. Missing fields fall back to the "Autre"/"autre" buckets.
pub fn build_tree(records: &[CourseRecord]) -> Vec<CatalogNode> {
    let mut filiere_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<FiliereGroup> = Vec::new();

    for record in records {
        let filiere = record
            .filiere
            .clone()
            .unwrap_or_else(|| FALLBACK_FILIERE.to_string());
        let niveau = record
            .niveau
            .clone()
            .unwrap_or_else(|| FALLBACK_NIVEAU.to_string());

        let fi = *filiere_index.entry(filiere.clone()).or_insert_with(|| {
            groups.push(FiliereGroup {
                name: filiere.clone(),
                niveau_index: HashMap::new(),
                niveaux: Vec::new(),
            });
            groups.len() - 1
        });

        let FiliereGroup {
            niveau_index,
            niveaux,
            ..
        } = &mut groups[fi];
        let ni = *niveau_index.entry(niveau.clone()).or_insert_with(|| {
            niveaux.push(NiveauGroup {
                code: niveau.clone(),
                files: Vec::new(),
            });
            niveaux.len() - 1
        });

        niveaux[ni].files.push(CatalogFile {
            id: record.id.clone(),
            name: record.title.clone(),
            description: record.description.clone(),
            filiere: filiere.clone(),
            niveau,
        });
    }

    groups
        .into_iter()
        .map(|group| {
            let children = group
                .niveaux
                .into_iter()
                .map(|niveau| {
                    CatalogNode::Folder(CatalogFolder {
                        id: format!("{}/{}", group.name, niveau.code),
                        name: niveau_label(&niveau.code),
                        children: niveau.files.into_iter().map(CatalogNode::File).collect(),
                    })
                })
                .collect();
            CatalogNode::Folder(CatalogFolder {
                id: group.name.clone(),
                name: group.name,
                children,
            })
        })
        .collect()
}

/// Keep only leaves whose niveau matches `level`; a folder survives only
/// while it still holds something after its own children are filtered, so
/// empty folders never appear, even transitively.
pub fn filter_by_level(nodes: &[CatalogNode], level: &str) -> Vec<CatalogNode> {
    nodes
        .iter()
        .filter_map(|node| match node {
            CatalogNode::File(file) => {
                (file.niveau == level).then(|| CatalogNode::File(file.clone()))
            }
            CatalogNode::Folder(folder) => {
                let children = filter_by_level(&folder.children, level);
                (!children.is_empty()).then(|| {
                    CatalogNode::Folder(CatalogFolder {
                        id: folder.id.clone(),
                        name: folder.name.clone(),
                        children,
                    })
                })
            }
        })
        .collect()
}

/// Pre-order traversal: each folder before its children, children in
/// original order.
pub fn flatten(nodes: &[CatalogNode]) -> Vec<&CatalogNode> {
    let mut out = Vec::new();
    for node in nodes {
        push_preorder(node, &mut out);
    }
    out
}

fn push_preorder<'a>(node: &'a CatalogNode, out: &mut Vec<&'a CatalogNode>) {
    out.push(node);
    if let CatalogNode::Folder(folder) = node {
        for child in &folder.children {
            push_preorder(child, out);
        }
    }
}

/// Number of course leaves under `nodes`.
pub fn leaf_count(nodes: &[CatalogNode]) -> usize {
    flatten(nodes)
        .iter()
        .filter(|node| !node.is_folder())
        .count()
}

/// Pre-order walk that only descends into folders the caller has expanded.
/// The expanded set lives with the presentation layer and is passed in on
/// every call; the tree itself holds no UI state.
pub fn visible_nodes<'a>(
    nodes: &'a [CatalogNode],
    expanded: &HashSet<String>,
) -> Vec<&'a CatalogNode> {
    let mut out = Vec::new();
    for node in nodes {
        push_visible(node, expanded, &mut out);
    }
    out
}

fn push_visible<'a>(
    node: &'a CatalogNode,
    expanded: &HashSet<String>,
    out: &mut Vec<&'a CatalogNode>,
) {
    out.push(node);
    if let CatalogNode::Folder(folder) = node {
        if expanded.contains(&folder.id) {
            for child in &folder.children {
                push_visible(child, expanded, out);
            }
        }
    }
}

/// Case-insensitive substring search over title and description. A blank
/// query keeps everything.
pub fn search_courses(records: &[CourseRecord], query: &str) -> Vec<CourseRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

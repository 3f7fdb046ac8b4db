use serde::{Deserialize, Serialize};

/// Node of the course catalog tree: two folder levels (filière, then
/// niveau) above course leaves. The tree is small and ephemeral, so
/// children are owned directly and there are no parent back-references;
/// breadcrumbs are reconstructed from the traversal path by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogNode {
    Folder(CatalogFolder),
    File(CatalogFile),
}

impl CatalogNode {
    pub fn id(&self) -> &str {
        match self {
            CatalogNode::Folder(folder) => &folder.id,
            CatalogNode::File(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogNode::Folder(folder) => &folder.name,
            CatalogNode::File(file) => &file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, CatalogNode::Folder(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFolder {
    pub id: String,
    pub name: String,
    pub children: Vec<CatalogNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub filiere: String,
    pub niveau: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let node = CatalogNode::Folder(CatalogFolder {
            id: "Informatique".to_string(),
            name: "Informatique".to_string(),
            children: vec![CatalogNode::File(CatalogFile {
                id: "c1".to_string(),
                name: "Algorithmique".to_string(),
                description: None,
                filiere: "Informatique".to_string(),
                niveau: "licence1".to_string(),
            })],
        });

        assert!(node.is_folder());
        assert_eq!(node.id(), "Informatique");
        assert_eq!(node.name(), "Informatique");
    }

    #[test]
    fn test_node_is_tagged_by_kind() {
        let file = CatalogNode::File(CatalogFile {
            id: "c1".to_string(),
            name: "Analyse".to_string(),
            description: None,
            filiere: "Maths".to_string(),
            niveau: "licence2".to_string(),
        });

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["kind"], "file");
        assert_eq!(value["niveau"], "licence2");
    }
}

use serde::Deserialize;

/// Node of the project's area classification tree.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassificationNode {
    pub path: String,
    #[serde(default)]
    pub children: Vec<ClassificationNode>,
}

impl ClassificationNode {
    pub fn new(path: impl ToString, children: Vec<ClassificationNode>) -> Self {
        Self {
            path: path.to_string(),
            children,
        }
    }

    pub fn leaf(path: impl ToString) -> Self {
        Self::new(path, vec![])
    }
}

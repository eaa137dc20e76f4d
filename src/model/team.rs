use crate::model::Result;
use indexmap::IndexMap;
use serde_json::{from_str, Value};
use std::fs;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Team {
    /// Identifier used against the team settings API.
    pub name: String,
    /// Shown in the stat title.
    pub label: String,
}

// Create
impl Team {
    pub fn from_config(path: &str) -> Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(name: impl ToString) -> Self {
        let name = name.to_string();
        Self {
            label: name.clone(),
            name,
        }
    }

    pub fn with_label(name: impl ToString, label: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

// Parser
impl Team {
    fn parse(json_str: &str) -> Result<Vec<Self>> {
        let elements: IndexMap<String, Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for (name, details) in elements {
            let new = match &details["label"] {
                Value::Null => Self::new(name),
                Value::String(label) => Self::with_label(name, label),
                _ => return Err(format!("Field 'label' of team `{}` is not a string", name).into()),
            };
            result.push(new);
        }
        Ok(result)
    }
}

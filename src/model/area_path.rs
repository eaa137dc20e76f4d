use std::fmt;

const SEPARATOR: char = '\\';
const AREA_SEGMENT: &str = "Area";

/// Backslash delimited path of a node in the project's area hierarchy,
/// e.g. `\Project\Area\Team\Sub`.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct AreaPath(String);

impl AreaPath {
    pub fn new(path: impl ToString) -> Self {
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form accepted by the `[System.AreaPath]` clause of a work item query:
    /// leading backslashes stripped, doubled backslashes collapsed and the
    /// structural `Area` segment removed.
    pub fn query_form(&self) -> String {
        let mut path = self.0.trim_start_matches(SEPARATOR).to_string();
        while path.contains("\\\\") {
            path = path.replace("\\\\", "\\");
        }

        let mut segments = path.split(SEPARATOR).collect::<Vec<_>>();
        if segments.first() == Some(&AREA_SEGMENT) {
            segments.remove(0);
        } else if segments.get(1) == Some(&AREA_SEGMENT) {
            segments.remove(1);
        }
        segments.join("\\")
    }
}

impl fmt::Display for AreaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AreaPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

use crate::model::AreaPath;

pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum WorkItemType {
    UserStory,
    Bug,
    Issue,
    Other(String),
}

impl WorkItemType {
    /// Types a sprint completion query asks for, as named by the tracker.
    pub const TRACKED: [WorkItemType; 3] = [
        WorkItemType::UserStory,
        WorkItemType::Bug,
        WorkItemType::Issue,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "User Story" => Self::UserStory,
            "Bug" => Self::Bug,
            "Issue" => Self::Issue,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::UserStory => "User Story",
            Self::Bug => "Bug",
            Self::Issue => "Issue",
            Self::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub id: u64,
    pub work_item_type: WorkItemType,
    pub assignee: Option<String>,
    pub area_path: AreaPath,
    pub story_points: Option<f64>,
    pub state: String,
}

impl WorkItem {
    pub fn new(
        id: u64,
        work_item_type: WorkItemType,
        assignee: Option<impl ToString>,
        area_path: impl ToString,
        story_points: Option<f64>,
        state: impl ToString,
    ) -> Self {
        Self {
            id,
            work_item_type,
            assignee: assignee.map(|a| a.to_string()),
            area_path: AreaPath::new(area_path),
            story_points,
            state: state.to_string(),
        }
    }

    /// Display name credited with the item.
    pub fn completed_by(&self) -> &str {
        self.assignee.as_deref().unwrap_or(UNASSIGNED)
    }
}

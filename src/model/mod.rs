mod area_path;
mod classification;
mod sprint;
mod team;
mod work_item;

pub use area_path::AreaPath;
pub use classification::ClassificationNode;
pub use sprint::Sprint;
pub use team::Team;
pub use work_item::{WorkItem, WorkItemType, UNASSIGNED};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mod progress_style;
mod team_progress;

pub use progress_style::ProgressStyleTemplate;
pub use team_progress::TeamProgress;

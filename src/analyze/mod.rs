pub mod aggregator;
pub mod analyzer;
pub mod area_paths;
mod model;
pub mod sprint;
pub mod work_items;

pub use aggregator::aggregate;
pub use analyzer::{AnalyzerConfig, SprintAnalyzer, StageProgress, DEFAULT_CALL_TIMEOUT};
pub use model::{ContributorStat, PipelineStage, SprintSelector, SprintStat, TeamOutcome};

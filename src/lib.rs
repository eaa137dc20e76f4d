//! Sprint completion analytics for teams of an Azure DevOps project.
//!
//! [`SprintAnalyzer`] resolves a sprint, then for every team resolves its area
//! path scope, locates the closed work items of that scope in the sprint and
//! aggregates them into a [`SprintStat`].

pub mod analyze;
pub mod devops;
pub mod error;
pub mod model;
pub mod report;

pub use analyze::{
    AnalyzerConfig, ContributorStat, PipelineStage, SprintAnalyzer, SprintSelector, SprintStat,
    TeamOutcome,
};
pub use devops::{AzureDevOpsClient, DevOpsApi, DevOpsConfig};
pub use error::{AnalyticsError, Result};
pub use model::{AreaPath, Sprint, Team, WorkItem, WorkItemType};

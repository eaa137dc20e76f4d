use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Failures surfaced by the analytics engine.
///
/// Aggregation itself never fails; every variant comes from resolving data
/// against the issue tracker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Transport, authentication, server or decoding failure of the external API.
    #[error("Azure DevOps unavailable while trying to {operation}: {reason}")]
    UpstreamUnavailable {
        operation: &'static str,
        reason: String,
    },

    /// A named sprint (or a current one) does not exist in the iteration list.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A team resolved to zero area paths, so no work item query can be built.
    #[error("Team `{0}` has no area paths")]
    EmptyScope(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalyticsError {
    pub fn upstream(operation: &'static str, reason: impl ToString) -> Self {
        Self::UpstreamUnavailable {
            operation,
            reason: reason.to_string(),
        }
    }
}

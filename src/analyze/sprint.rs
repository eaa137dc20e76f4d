use crate::devops::DevOpsApi;
use crate::error::{AnalyticsError, Result};
use crate::model::Sprint;
use chrono::{DateTime, Utc};

pub async fn list_sprints<A: DevOpsApi>(api: &A, project: &str) -> Result<Vec<Sprint>> {
    api.list_iterations(project).await
}

pub async fn resolve_sprint_by_name<A: DevOpsApi>(
    api: &A,
    project: &str,
    name: &str,
) -> Result<Sprint> {
    let sprints = list_sprints(api, project).await?;
    find_by_name(&sprints, name)
        .cloned()
        .ok_or_else(|| AnalyticsError::NotFound(format!("sprint `{}` in `{}`", name, project)))
}

pub async fn resolve_current_sprint<A: DevOpsApi>(
    api: &A,
    project: &str,
    now: &DateTime<Utc>,
) -> Result<Sprint> {
    let sprints = list_sprints(api, project).await?;
    find_current(&sprints, now).cloned().ok_or_else(|| {
        AnalyticsError::NotFound(format!("sprint running at {} in `{}`", now, project))
    })
}

pub fn find_by_name<'a>(sprints: &'a [Sprint], name: &str) -> Option<&'a Sprint> {
    sprints.iter().find(|sprint| sprint.name == name)
}

/// Overlapping sprints are not disambiguated: the first in source order wins.
pub fn find_current<'a>(sprints: &'a [Sprint], now: &DateTime<Utc>) -> Option<&'a Sprint> {
    sprints.iter().find(|sprint| sprint.contains(now))
}

use crate::devops::DevOpsApi;
use crate::error::{AnalyticsError, Result};
use crate::model::{AreaPath, WorkItem, WorkItemType};
use itertools::Itertools;
use tracing::{debug, warn};

pub const CLOSED_STATE: &str = "Closed";

pub async fn find_completed_work_items<A: DevOpsApi>(
    api: &A,
    project: &str,
    team: &str,
    sprint_name: &str,
    area_paths: &[AreaPath],
) -> Result<Vec<u64>> {
    let Some(query) = build_closed_items_query(project, sprint_name, area_paths) else {
        return Err(AnalyticsError::EmptyScope(team.to_string()));
    };
    debug!("Work item query for `{}`: {}", team, query);

    match api.query_work_item_ids(project, &query).await {
        Ok(ids) => Ok(ids),
        Err(e) => {
            warn!("Work item query for `{}` failed, reporting no items: {}", team, e);
            Ok(vec![])
        }
    }
}

pub async fn fetch_details<A: DevOpsApi>(
    api: &A,
    project: &str,
    ids: &[u64],
) -> Result<Vec<WorkItem>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    api.get_work_items_by_ids(project, ids).await
}

/// WIQL selecting the closed tracked items of a sprint, or `None` when there
/// is no area path to filter on.
pub fn build_closed_items_query(
    project: &str,
    sprint_name: &str,
    area_paths: &[AreaPath],
) -> Option<String> {
    if area_paths.is_empty() {
        return None;
    }
    let area_filter = area_paths
        .iter()
        .map(AreaPath::query_form)
        .unique()
        .map(|path| quote(&path))
        .join(", ");
    let type_filter = WorkItemType::TRACKED
        .iter()
        .map(|kind| quote(kind.name()))
        .join(", ");
    let iteration_path = format!("{}\\{}", project, sprint_name);

    Some(format!(
        "SELECT [System.Id] \
         FROM WorkItems \
         WHERE [System.TeamProject] = @project \
         AND [System.AreaPath] IN ({}) \
         AND [System.WorkItemType] IN ({}) \
         AND [System.State] = {} \
         AND [System.IterationPath] = {}",
        area_filter,
        type_filter,
        quote(CLOSED_STATE),
        quote(&iteration_path),
    ))
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

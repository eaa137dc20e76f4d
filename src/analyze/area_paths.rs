use crate::devops::DevOpsApi;
use crate::error::Result;
use crate::model::{AreaPath, ClassificationNode};
use tracing::debug;

/// Depth always requested from the classification API. Real hierarchies
/// routinely go deeper than the API default.
pub const MIN_CLASSIFICATION_DEPTH: u32 = 10;

pub async fn resolve_area_paths<A: DevOpsApi>(
    api: &A,
    project: &str,
    depth: u32,
) -> Result<Vec<AreaPath>> {
    let root = api
        .list_classification_tree(project, depth.max(MIN_CLASSIFICATION_DEPTH))
        .await?;
    let paths = flatten_tree(&root);
    debug!("Project `{}` has {} area paths", project, paths.len());
    Ok(paths)
}

pub async fn resolve_team_area_paths<A: DevOpsApi>(
    api: &A,
    project: &str,
    team: &str,
    depth: u32,
) -> Result<Vec<AreaPath>> {
    let (field_values, all_paths) = futures::try_join!(
        api.get_team_field_values(project, team),
        resolve_area_paths(api, project, depth),
    )?;
    let paths = team_scope(project, &field_values, &all_paths);
    debug!(
        "Team `{}` owns {} area paths from {} field values",
        team,
        paths.len(),
        field_values.len()
    );
    Ok(paths)
}

pub fn flatten_tree(root: &ClassificationNode) -> Vec<AreaPath> {
    let mut paths = vec![];
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        paths.push(AreaPath::new(&node.path));
        pending.extend(node.children.iter().rev());
    }
    paths
}

/// Matching is by substring rather than by hierarchy, so a value also selects
/// every node below it and any path that merely embeds the candidate.
pub fn team_scope(project: &str, field_values: &[String], all_paths: &[AreaPath]) -> Vec<AreaPath> {
    field_values
        .iter()
        .flat_map(|value| {
            let candidate = format!("\\{}\\Area{}", project, normalize_field_value(value));
            all_paths
                .iter()
                .filter(move |path| path.as_str().contains(&candidate))
                .cloned()
        })
        .collect()
}

/// `Project\Team\Sub` -> `\Team\Sub`. A value without a separator is kept
/// as is and so matches no tree path.
fn normalize_field_value(value: &str) -> String {
    match value.split_once('\\') {
        Some((_, rest)) => format!("\\{}", rest),
        None => value.to_string(),
    }
}

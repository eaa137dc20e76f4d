use crate::error::Result;
use crate::model::{ClassificationNode, Sprint, WorkItem};

/// Operations the analytics engine needs from the issue tracker.
///
/// Implementations are already authorized; every call names the project it
/// works on so no connection state is shared between resolvers.
#[allow(async_fn_in_trait)]
pub trait DevOpsApi {
    async fn list_teams(&self, project: &str) -> Result<Vec<String>>;

    async fn list_iterations(&self, project: &str) -> Result<Vec<Sprint>>;

    async fn list_classification_tree(
        &self,
        project: &str,
        depth: u32,
    ) -> Result<ClassificationNode>;

    /// Raw team field values (area paths the team owns, tracker formatted).
    async fn get_team_field_values(&self, project: &str, team: &str) -> Result<Vec<String>>;

    async fn query_work_item_ids(&self, project: &str, wiql: &str) -> Result<Vec<u64>>;

    async fn get_work_items_by_ids(&self, project: &str, ids: &[u64]) -> Result<Vec<WorkItem>>;
}

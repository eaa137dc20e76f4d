use crate::devops::DevOpsApi;
use crate::error::{AnalyticsError, Result};
use crate::model::{ClassificationNode, Sprint, WorkItem};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Bounds every call of the wrapped API by `timeout`. An elapsed call is
/// reported as the upstream being unavailable.
#[derive(Debug, Clone)]
pub struct TimeoutApi<A> {
    inner: A,
    timeout: Duration,
}

impl<A> TimeoutApi<A> {
    pub fn new(inner: A, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    async fn within<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!("No answer to {} within {:?}", operation, self.timeout);
                Err(AnalyticsError::upstream(
                    operation,
                    format!("no response within {:?}", self.timeout),
                ))
            }
        }
    }
}

impl<A: DevOpsApi> DevOpsApi for TimeoutApi<A> {
    async fn list_teams(&self, project: &str) -> Result<Vec<String>> {
        self.within("list teams", self.inner.list_teams(project))
            .await
    }

    async fn list_iterations(&self, project: &str) -> Result<Vec<Sprint>> {
        self.within("list iterations", self.inner.list_iterations(project))
            .await
    }

    async fn list_classification_tree(
        &self,
        project: &str,
        depth: u32,
    ) -> Result<ClassificationNode> {
        self.within(
            "list area paths",
            self.inner.list_classification_tree(project, depth),
        )
        .await
    }

    async fn get_team_field_values(&self, project: &str, team: &str) -> Result<Vec<String>> {
        self.within(
            "fetch team field values",
            self.inner.get_team_field_values(project, team),
        )
        .await
    }

    async fn query_work_item_ids(&self, project: &str, wiql: &str) -> Result<Vec<u64>> {
        self.within("query work items", self.inner.query_work_item_ids(project, wiql))
            .await
    }

    async fn get_work_items_by_ids(&self, project: &str, ids: &[u64]) -> Result<Vec<WorkItem>> {
        self.within(
            "fetch work item details",
            self.inner.get_work_items_by_ids(project, ids),
        )
        .await
    }
}

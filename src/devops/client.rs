use crate::devops::dto::{
    IterationDto, ListResponse, RootNodeDto, TeamDto, TeamFieldValuesDto, WiqlRequest,
    WiqlResponse, WorkItemDto,
};
use crate::devops::{DevOpsApi, DevOpsConfig};
use crate::error::{AnalyticsError, Result};
use crate::model::{ClassificationNode, Sprint, WorkItem};
use itertools::Itertools;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Upper bound of ids the work items endpoint accepts per request.
pub const MAX_WORK_ITEMS_PER_REQUEST: usize = 200;

const AREA_STRUCTURE: &str = "area";

#[derive(Debug, Clone)]
pub struct AzureDevOpsClient {
    http: Client,
    config: DevOpsConfig,
    base_url: Url,
}

impl AzureDevOpsClient {
    pub fn new(config: DevOpsConfig) -> Result<Self> {
        if config.organization.is_empty() {
            return Err(AnalyticsError::InvalidConfig(
                "Azure DevOps organization is required".to_string(),
            ));
        }
        if config.personal_access_token.is_empty() {
            return Err(AnalyticsError::InvalidConfig(
                "Azure DevOps personal access token is required".to_string(),
            ));
        }
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AnalyticsError::InvalidConfig(format!("Bad base url `{}`: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AnalyticsError::InvalidConfig(format!(
                "Base url `{}` cannot carry a path",
                config.base_url
            )));
        }
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AnalyticsError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &DevOpsConfig {
        &self.config
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .push(&self.config.organization)
                .extend(segments);
        }
        url.query_pairs_mut()
            .append_pair("api-version", &self.config.api_version);
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .basic_auth("", Some(&self.config.personal_access_token))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to {}: {}", operation, e);
                AnalyticsError::upstream(operation, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            error!("Failed to {}: {} {}", operation, status, details);
            return Err(AnalyticsError::upstream(
                operation,
                format!("{} {}", status, details).trim_end(),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to decode response to {}: {}", operation, e);
            AnalyticsError::upstream(operation, e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, operation: &'static str, url: Url) -> Result<T> {
        debug!("GET {}", url);
        self.send(operation, self.http.get(url)).await
    }
}

impl DevOpsApi for AzureDevOpsClient {
    async fn list_teams(&self, project: &str) -> Result<Vec<String>> {
        let url = self.url(&["_apis", "projects", project, "teams"]);
        let teams: ListResponse<TeamDto> = self.get("list teams", url).await?;
        Ok(teams.value.into_iter().map(|team| team.name).collect())
    }

    async fn list_iterations(&self, project: &str) -> Result<Vec<Sprint>> {
        let url = self.url(&[project, "_apis", "work", "teamsettings", "iterations"]);
        let iterations: ListResponse<IterationDto> = self.get("list iterations", url).await?;
        let sprints = iterations
            .value
            .into_iter()
            .filter_map(|iteration| match iteration.into_sprint() {
                Ok(sprint) => Some(sprint),
                Err(reason) => {
                    debug!("Skip iteration: {}", reason);
                    None
                }
            })
            .collect();
        Ok(sprints)
    }

    async fn list_classification_tree(
        &self,
        project: &str,
        depth: u32,
    ) -> Result<ClassificationNode> {
        let mut url = self.url(&[project, "_apis", "wit", "classificationnodes"]);
        url.query_pairs_mut()
            .append_pair("$depth", &depth.to_string())
            .append_pair("$expand", "all");
        let roots: ListResponse<RootNodeDto> = self.get("list area paths", url).await?;

        let mut roots = roots.value.into_iter().peekable();
        let Some(first) = roots.peek().map(|root| root.node.clone()) else {
            return Err(AnalyticsError::upstream(
                "list area paths",
                "classification tree is empty",
            ));
        };
        let area_root = roots
            .find(|root| root.structure_type.as_deref() == Some(AREA_STRUCTURE))
            .map(|root| root.node)
            .unwrap_or(first);
        Ok(area_root)
    }

    async fn get_team_field_values(&self, project: &str, team: &str) -> Result<Vec<String>> {
        let url = self.url(&[
            project,
            team,
            "_apis",
            "work",
            "teamsettings",
            "teamfieldvalues",
        ]);
        let values: TeamFieldValuesDto = self.get("fetch team field values", url).await?;
        Ok(values.values.into_iter().map(|v| v.value).collect())
    }

    async fn query_work_item_ids(&self, project: &str, wiql: &str) -> Result<Vec<u64>> {
        let url = self.url(&[project, "_apis", "wit", "wiql"]);
        debug!("POST {}", url);
        let request = self.http.post(url).json(&WiqlRequest { query: wiql });
        let response: WiqlResponse = self.send("query work items", request).await?;
        Ok(response.work_items.into_iter().map(|item| item.id).collect())
    }

    async fn get_work_items_by_ids(&self, project: &str, ids: &[u64]) -> Result<Vec<WorkItem>> {
        let batches = ids
            .chunks(MAX_WORK_ITEMS_PER_REQUEST)
            .map(|batch| async move {
                let mut url = self.url(&[project, "_apis", "wit", "workitems"]);
                url.query_pairs_mut()
                    .append_pair("ids", &batch.iter().join(","));
                let items: ListResponse<WorkItemDto> =
                    self.get("fetch work item details", url).await?;
                Ok::<_, AnalyticsError>(items.value)
            });
        let batches = futures::future::try_join_all(batches).await?;
        Ok(batches
            .into_iter()
            .flatten()
            .map(WorkItem::from)
            .collect())
    }
}

#![allow(dead_code)]

use sprint_analytics::error::{AnalyticsError, Result};
use sprint_analytics::model::{ClassificationNode, Sprint, WorkItem, WorkItemType};
use sprint_analytics::DevOpsApi;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const PROJECT: &str = "Proj";

/// In-memory tracker with a small area tree and two teams (`Core`, `Web`).
pub struct FakeDevOps {
    pub sprints: Vec<Sprint>,
    pub tree: ClassificationNode,
    pub team_values: HashMap<String, Vec<String>>,
    /// Ids per query-form area path.
    pub ids_by_area: HashMap<String, Vec<u64>>,
    pub items: HashMap<u64, WorkItem>,
    pub failing_query: bool,
    /// Delay of the team field value lookup per team.
    pub scope_delays: HashMap<String, Duration>,
    /// Teams whose field value lookup never answers.
    pub hanging_teams: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeDevOps {
    pub fn new() -> Self {
        let tree = ClassificationNode::new(
            r"\Proj\Area",
            vec![
                ClassificationNode::new(
                    r"\Proj\Area\Core",
                    vec![ClassificationNode::leaf(r"\Proj\Area\Core\Api")],
                ),
                ClassificationNode::leaf(r"\Proj\Area\Web"),
                ClassificationNode::leaf(r"\Proj\Area\Ops"),
            ],
        );
        let team_values = HashMap::from([
            ("Core".to_string(), vec![r"Proj\Core".to_string()]),
            ("Web".to_string(), vec![r"Proj\Web".to_string()]),
            ("Ops".to_string(), vec![r"Proj\Ops".to_string()]),
            ("Idle".to_string(), vec![]),
        ]);
        let ids_by_area = HashMap::from([
            (r"Proj\Core".to_string(), vec![1, 2]),
            (r"Proj\Core\Api".to_string(), vec![3]),
            (r"Proj\Web".to_string(), vec![4, 5]),
        ]);
        let items = [
            item(1, WorkItemType::UserStory, Some("Ann"), r"Proj\Core", Some(3.0)),
            item(2, WorkItemType::Bug, Some("Ann"), r"Proj\Core", None),
            item(3, WorkItemType::Bug, Some("Bob"), r"Proj\Core\Api", None),
            item(4, WorkItemType::Issue, None, r"Proj\Web", None),
            item(5, WorkItemType::UserStory, Some("Cid"), r"Proj\Web", None),
        ]
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

        Self {
            sprints: vec![
                Sprint::parse("s1", "2024-05-01T00:00:00Z", "2024-05-10T23:59:59Z").unwrap(),
                Sprint::parse("s2", "2024-05-11T00:00:00Z", "2024-05-20T23:59:59Z").unwrap(),
            ],
            tree,
            team_values,
            ids_by_area,
            items,
            failing_query: false,
            scope_delays: HashMap::new(),
            hanging_teams: vec![],
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl ToString) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

pub fn item(
    id: u64,
    kind: WorkItemType,
    assignee: Option<&str>,
    area_path: &str,
    story_points: Option<f64>,
) -> WorkItem {
    WorkItem::new(id, kind, assignee, area_path, story_points, "Closed")
}

impl DevOpsApi for FakeDevOps {
    async fn list_teams(&self, _project: &str) -> Result<Vec<String>> {
        self.record("list_teams");
        let mut teams = self.team_values.keys().cloned().collect::<Vec<_>>();
        teams.sort();
        Ok(teams)
    }

    async fn list_iterations(&self, _project: &str) -> Result<Vec<Sprint>> {
        self.record("list_iterations");
        Ok(self.sprints.clone())
    }

    async fn list_classification_tree(
        &self,
        _project: &str,
        depth: u32,
    ) -> Result<ClassificationNode> {
        self.record(format!("list_classification_tree depth={}", depth));
        Ok(self.tree.clone())
    }

    async fn get_team_field_values(&self, _project: &str, team: &str) -> Result<Vec<String>> {
        self.record(format!("get_team_field_values {}", team));
        if self.hanging_teams.iter().any(|t| t == team) {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.scope_delays.get(team) {
            tokio::time::sleep(*delay).await;
        }
        self.team_values
            .get(team)
            .cloned()
            .ok_or_else(|| AnalyticsError::upstream("fetch team field values", "404 Not Found"))
    }

    async fn query_work_item_ids(&self, _project: &str, wiql: &str) -> Result<Vec<u64>> {
        self.record("query_work_item_ids");
        if self.failing_query {
            return Err(AnalyticsError::upstream("query work items", "400 Bad Request"));
        }
        let mut ids = self
            .ids_by_area
            .iter()
            .filter(|(path, _)| wiql.contains(&format!("'{}'", path)))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect::<Vec<_>>();
        ids.sort();
        Ok(ids)
    }

    async fn get_work_items_by_ids(&self, _project: &str, ids: &[u64]) -> Result<Vec<WorkItem>> {
        self.record(format!("get_work_items_by_ids {:?}", ids));
        Ok(ids
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect())
    }
}

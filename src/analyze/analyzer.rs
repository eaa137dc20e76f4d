use crate::analyze::aggregator::aggregate;
use crate::analyze::area_paths::{resolve_team_area_paths, MIN_CLASSIFICATION_DEPTH};
use crate::analyze::sprint::{list_sprints, resolve_current_sprint, resolve_sprint_by_name};
use crate::analyze::work_items::{fetch_details, find_completed_work_items};
use crate::analyze::{PipelineStage, SprintSelector, SprintStat, TeamOutcome};
use crate::devops::{DevOpsApi, TimeoutApi};
use crate::error::Result;
use crate::model::{Sprint, Team};
use chrono::{DateTime, Utc};
use futures::future;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

pub type StageProgress<'a> = &'a dyn Fn(&Team, PipelineStage);

fn no_progress(_: &Team, _: PipelineStage) {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AnalyzerConfig {
    pub project: String,
    pub classification_depth: u32,
    pub call_timeout: Duration,
}

impl AnalyzerConfig {
    pub fn new(project: impl ToString) -> Self {
        Self {
            project: project.to_string(),
            classification_depth: MIN_CLASSIFICATION_DEPTH,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_classification_depth(mut self, depth: u32) -> Self {
        self.classification_depth = depth;
        self
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }
}

/// Sprint completion analytics for a set of teams of one project.
///
/// Team pipelines run concurrently on the caller's task; dropping the future
/// returned by an `analyze*` method abandons every pipeline still in flight.
pub struct SprintAnalyzer<A> {
    api: TimeoutApi<A>,
    config: AnalyzerConfig,
}

impl<A: DevOpsApi> SprintAnalyzer<A> {
    pub fn new(api: A, config: AnalyzerConfig) -> Self {
        Self {
            api: TimeoutApi::new(api, config.call_timeout),
            config,
        }
    }

    pub fn api(&self) -> &A {
        self.api.inner()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub async fn list_teams(&self) -> Result<Vec<String>> {
        self.api.list_teams(&self.config.project).await
    }

    pub async fn list_sprints(&self) -> Result<Vec<Sprint>> {
        list_sprints(&self.api, &self.config.project).await
    }

    pub async fn resolve_sprint(
        &self,
        selector: &SprintSelector,
        now: &DateTime<Utc>,
    ) -> Result<Sprint> {
        match selector {
            SprintSelector::Current => {
                resolve_current_sprint(&self.api, &self.config.project, now).await
            }
            SprintSelector::Named(name) => {
                resolve_sprint_by_name(&self.api, &self.config.project, name).await
            }
        }
    }

    pub async fn analyze_current_sprint(&self, teams: &[Team]) -> Result<Vec<TeamOutcome>> {
        self.analyze(&SprintSelector::Current, teams).await
    }

    pub async fn analyze_sprint_by_name(
        &self,
        sprint_name: &str,
        teams: &[Team],
    ) -> Result<Vec<TeamOutcome>> {
        self.analyze(&SprintSelector::Named(sprint_name.to_string()), teams)
            .await
    }

    pub async fn analyze(
        &self,
        selector: &SprintSelector,
        teams: &[Team],
    ) -> Result<Vec<TeamOutcome>> {
        self.analyze_with_progress(selector, teams, &no_progress)
            .await
    }

    pub async fn analyze_with_progress(
        &self,
        selector: &SprintSelector,
        teams: &[Team],
        progress: StageProgress<'_>,
    ) -> Result<Vec<TeamOutcome>> {
        self.analyze_at(selector, teams, &Utc::now(), progress)
            .await
    }

    pub async fn analyze_at(
        &self,
        selector: &SprintSelector,
        teams: &[Team],
        now: &DateTime<Utc>,
        progress: StageProgress<'_>,
    ) -> Result<Vec<TeamOutcome>> {
        let sprint = self.resolve_sprint(selector, now).await?;
        info!(
            "Analyzing sprint `{}` for {} teams",
            sprint.name,
            teams.len()
        );

        let sprint = &sprint;
        let pipelines = teams.iter().map(|team| async move {
            let result = self.analyze_team(sprint, team, progress).await;
            match &result {
                Ok(stat) => {
                    info!(
                        "Team `{}` completed {} work items",
                        team.name, stat.work_items_completed
                    );
                    progress(team, PipelineStage::Completed);
                }
                Err(e) => {
                    warn!("Team `{}` failed: {}", team.name, e);
                    progress(team, PipelineStage::Failed);
                }
            }
            TeamOutcome::new(team.clone(), result)
        });
        // Outcomes keep the order of `teams`.
        Ok(future::join_all(pipelines).await)
    }

    async fn analyze_team(
        &self,
        sprint: &Sprint,
        team: &Team,
        progress: StageProgress<'_>,
    ) -> Result<SprintStat> {
        let project = self.config.project.as_str();

        progress(team, PipelineStage::ResolvingScope);
        let area_paths = resolve_team_area_paths(
            &self.api,
            project,
            &team.name,
            self.config.classification_depth,
        )
        .await?;

        progress(team, PipelineStage::LocatingWorkItems);
        let ids =
            find_completed_work_items(&self.api, project, &team.name, &sprint.name, &area_paths)
                .await?;

        progress(team, PipelineStage::FetchingDetails);
        let items = fetch_details(&self.api, project, &ids).await?;

        progress(team, PipelineStage::Aggregating);
        Ok(aggregate(sprint, &items, &team.label))
    }
}

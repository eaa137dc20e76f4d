use crate::error::Result;
use crate::model::{AreaPath, Sprint, Team};
use chrono::{DateTime, FixedOffset};
use indexmap::IndexSet;

#[derive(Debug, Clone)]
pub enum SprintSelector {
    Current,
    Named(String),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PipelineStage {
    ResolvingScope,
    LocatingWorkItems,
    FetchingDetails,
    Aggregating,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContributorStat {
    pub display_name: String,
    pub user_stories: usize,
    pub bugs: usize,
    pub issues: usize,
    pub story_points: f64,
}

impl ContributorStat {
    pub fn new(display_name: impl ToString) -> Self {
        Self {
            display_name: display_name.to_string(),
            user_stories: 0,
            bugs: 0,
            issues: 0,
            story_points: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SprintStat {
    pub title: String,
    pub sprint_name: String,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
    pub area_paths: IndexSet<AreaPath>,
    pub work_items_completed: usize,
    pub velocity: f64,
    pub user_stories: usize,
    pub bugs: usize,
    pub issues: usize,
    pub top_performer: String,
    pub bug_basher: String,
    pub contributor_stats: Vec<ContributorStat>,
}

impl SprintStat {
    pub fn new(sprint: &Sprint, team_label: &str) -> Self {
        Self {
            // The missing closing quote is part of the published title format.
            title: format!("Sprint Stats for '{}", team_label),
            sprint_name: sprint.name.clone(),
            start_date: sprint.start_date,
            end_date: sprint.end_date,
            area_paths: IndexSet::new(),
            work_items_completed: 0,
            velocity: 0.0,
            user_stories: 0,
            bugs: 0,
            issues: 0,
            top_performer: String::new(),
            bug_basher: String::new(),
            contributor_stats: vec![],
        }
    }
}

/// Result of one team's pipeline. A failed team does not fail its siblings.
#[derive(Debug, Clone)]
pub struct TeamOutcome {
    pub team: Team,
    pub result: Result<SprintStat>,
}

impl TeamOutcome {
    pub fn new(team: Team, result: Result<SprintStat>) -> Self {
        Self { team, result }
    }
}

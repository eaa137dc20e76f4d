use crate::utils::ProgressStyleTemplate;
use indexmap::IndexMap;
use indicatif::{MultiProgress, ProgressBar};
use sprint_analytics::{PipelineStage, Team};
use std::time::Duration;

/// One spinner per analyzed team, driven by pipeline stage reports.
pub struct TeamProgress {
    bars: IndexMap<String, ProgressBar>,
}

impl TeamProgress {
    pub fn new(multi_progress: &MultiProgress, teams: &[Team]) -> Self {
        let bars = teams
            .iter()
            .map(|team| {
                let pb = multi_progress.add(ProgressBar::new_spinner());
                pb.set_style(ProgressStyleTemplate::team_stage());
                pb.enable_steady_tick(Duration::from_millis(100));
                pb.set_prefix(team.label.clone());
                pb.set_message("Waiting sprint");
                (team.name.clone(), pb)
            })
            .collect();
        Self { bars }
    }

    pub fn report(&self, team: &Team, stage: PipelineStage) {
        let Some(pb) = self.bars.get(&team.name) else {
            return;
        };
        match stage {
            PipelineStage::ResolvingScope => pb.set_message("Resolve area paths ..."),
            PipelineStage::LocatingWorkItems => pb.set_message("Query closed work items ..."),
            PipelineStage::FetchingDetails => pb.set_message("Fetch work item details ..."),
            PipelineStage::Aggregating => pb.set_message("Aggregate ..."),
            PipelineStage::Completed => pb.finish_with_message("✅ Completed"),
            PipelineStage::Failed => pb.finish_with_message("❌ Failed"),
        }
    }

    /// Stops spinners of pipelines that never reported an end.
    pub fn abandon(&self, message: &'static str) {
        for pb in self.bars.values().filter(|pb| !pb.is_finished()) {
            pb.abandon_with_message(message);
        }
    }
}

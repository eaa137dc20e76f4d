use crate::analyze::{ContributorStat, SprintStat};
use crate::model::{Sprint, WorkItem, WorkItemType};
use indexmap::IndexMap;

/// Reduces the closed work items of one team into its sprint summary.
///
/// Items are trusted to be closed already. A user story without story points
/// adds 0 to velocity. Superlatives go to the strictly highest count; on a tie
/// the contributor seen first in `items` keeps the title.
pub fn aggregate(sprint: &Sprint, items: &[WorkItem], team_label: &str) -> SprintStat {
    let mut stat = SprintStat::new(sprint, team_label);
    let mut contributors: IndexMap<String, ContributorStat> = IndexMap::new();

    for item in items {
        let completed_by = item.completed_by();
        let contributor = contributors
            .entry(completed_by.to_string())
            .or_insert_with(|| ContributorStat::new(completed_by));

        match item.work_item_type {
            WorkItemType::UserStory => {
                let points = item.story_points.unwrap_or(0.0);
                stat.user_stories += 1;
                stat.velocity += points;
                contributor.user_stories += 1;
                contributor.story_points += points;
            }
            WorkItemType::Bug => {
                stat.bugs += 1;
                contributor.bugs += 1;
            }
            WorkItemType::Issue => {
                stat.issues += 1;
                contributor.issues += 1;
            }
            WorkItemType::Other(_) => {}
        }
        stat.area_paths.insert(item.area_path.clone());
    }

    stat.work_items_completed = items.len();
    stat.top_performer = superlative(contributors.values(), |c| c.user_stories);
    stat.bug_basher = superlative(contributors.values(), |c| c.bugs);
    stat.contributor_stats = contributors.into_values().collect();
    stat
}

fn superlative<'a, F>(contributors: impl Iterator<Item = &'a ContributorStat>, count: F) -> String
where
    F: Fn(&ContributorStat) -> usize,
{
    let (name, best) = contributors.fold(("", 0), |(name, best), contributor| {
        let current = count(contributor);
        if current > best {
            (contributor.display_name.as_str(), current)
        } else {
            (name, best)
        }
    });
    format!("{}: {}", name, best)
}

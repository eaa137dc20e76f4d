use crate::analyze::{SprintStat, TeamOutcome};
use crate::model::{Result, Sprint};
use markdown_builder::{List, ListItem, Markdown};
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

const DATE_FORMAT: &str = "%d.%m.%Y";

pub trait MarkdownReport {
    fn report_render(&self) -> Result<String>;
}

impl MarkdownReport for [TeamOutcome] {
    fn report_render(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.header1("Sprint Stats");
        for outcome in self {
            match &outcome.result {
                Ok(stat) => doc.add_sprint_stat(stat)?,
                Err(e) => doc.add_failure(&outcome.team.label, &e.to_string()),
            }
        }
        Ok(doc.render())
    }
}

impl MarkdownReport for [Sprint] {
    fn report_render(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.header1("Sprints");
        let rows = self
            .iter()
            .map(|sprint| {
                vec![
                    sprint.name.clone(),
                    sprint.start_date.format(DATE_FORMAT).to_string(),
                    sprint.end_date.format(DATE_FORMAT).to_string(),
                ]
            })
            .collect::<Vec<_>>();
        if !rows.is_empty() {
            let header = ["Sprint", "Start Date", "End Date"]
                .into_iter()
                .map(|s| Heading::new(s.to_string(), None))
                .collect::<Vec<_>>();
            doc.block(table(rows, header)?);
        }
        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_sprint_stat(&mut self, stat: &SprintStat) -> Result<()>;
    fn add_failure(&mut self, team: &str, reason: &str);
    fn block(&mut self, text: String);
}

impl MarkdownExt for Markdown {
    fn add_sprint_stat(&mut self, stat: &SprintStat) -> Result<()> {
        self.header2(stat.title.clone());

        self.block("**Area Paths:**\n".to_string());
        let area_paths = stat
            .area_paths
            .iter()
            .map(|path| ListItem::from(path.to_string()))
            .collect::<Vec<_>>();
        self.list(List::unordered_with(area_paths));

        let summary = [
            format!("**Sprint:** {}", stat.sprint_name),
            format!("**Start Date:** {}", stat.start_date.format(DATE_FORMAT)),
            format!("**End Date:** {}", stat.end_date.format(DATE_FORMAT)),
            format!("**Work Items Completed:** {}", stat.work_items_completed),
            format!("**Velocity:** {}", stat.velocity),
            format!("**User Stories:** {}", stat.user_stories),
            format!("**Bugs:** {}", stat.bugs),
            format!("**Issues:** {}", stat.issues),
            format!("**Top Performer:** {}", stat.top_performer),
            format!("**Bug Basher:** {}", stat.bug_basher),
        ]
        .join("  \n");
        self.block(format!("{}\n", summary));

        if stat.contributor_stats.is_empty() {
            return Ok(());
        }
        let header = ["User", "User Stories", "Bugs", "Issues", "Story Points"]
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                let alignment = (index > 0).then_some(HeadingAlignment::Center);
                Heading::new(s.to_string(), alignment)
            })
            .collect::<Vec<_>>();
        let rows = stat
            .contributor_stats
            .iter()
            .map(|c| {
                vec![
                    c.display_name.clone(),
                    c.user_stories.to_string(),
                    c.bugs.to_string(),
                    c.issues.to_string(),
                    c.story_points.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        self.block(table(rows, header)?);
        Ok(())
    }

    fn add_failure(&mut self, team: &str, reason: &str) {
        self.header2(format!("Sprint Stats for '{}", team));
        self.block(format!("❌ Analysis failed: {}\n", reason));
    }

    // `paragraph` wraps at 80 columns, which splits stat lines and table rows.
    fn block(&mut self, text: String) {
        self.elements.push(Box::new(text));
    }
}

fn table(rows: Vec<Vec<String>>, header: Vec<Heading>) -> Result<String> {
    let mut md_table = MarkdownTable::new(rows);
    md_table.with_headings(header);
    md_table
        .as_markdown()
        .map_err(|e| format!("Failed to render table: {:?}", e).into())
}

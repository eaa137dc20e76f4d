mod utils;

use crate::utils::{ProgressStyleTemplate, TeamProgress};
use clap::{Parser, Subcommand};
use indicatif::{MultiProgress, ProgressBar};
use itertools::Itertools;
use sprint_analytics::analyze::area_paths::MIN_CLASSIFICATION_DEPTH;
use sprint_analytics::analyze::DEFAULT_CALL_TIMEOUT;
use sprint_analytics::devops::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
use sprint_analytics::model::Result;
use sprint_analytics::report::MarkdownReport;
use sprint_analytics::{
    AnalyzerConfig, AzureDevOpsClient, DevOpsConfig, PipelineStage, SprintAnalyzer,
    SprintSelector, Team,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(about = "Sprint completion stats of Azure DevOps teams")]
struct Args {
    #[arg(long = "organization", env = "AZURE_DEVOPS_ORG")]
    organization: String,
    #[arg(long = "project", env = "AZURE_DEVOPS_PROJECT")]
    project: String,
    #[arg(long = "pat", env = "AZURE_DEVOPS_PAT", hide_env_values = true)]
    personal_access_token: String,
    #[arg(long = "base_url", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long = "request_timeout", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    request_timeout_secs: u64,
    #[arg(long = "call_timeout", default_value_t = DEFAULT_CALL_TIMEOUT.as_secs())]
    call_timeout_secs: u64,
    #[arg(long = "depth", default_value_t = MIN_CLASSIFICATION_DEPTH)]
    classification_depth: u32,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List the teams of the project.
    Teams,
    /// List the dated sprints of the project.
    Sprints,
    /// Analyze a sprint (the current one unless `--sprint` is given).
    Analyze {
        #[arg(long = "sprint")]
        sprint: Option<String>,
        #[arg(long = "team")]
        teams: Vec<String>,
        #[arg(long = "teams")]
        teams_path: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing();
    if let Err(e) = run(&args).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> Result<()> {
    let analyzer = build_analyzer(args)?;

    match &args.command {
        Command::Teams => {
            let pb = spinner("Fetch teams ...");
            let teams = analyzer.list_teams().await;
            pb.finish_and_clear();
            for team in teams? {
                println!("{}", team);
            }
        }
        Command::Sprints => {
            let pb = spinner("Fetch sprints ...");
            let sprints = analyzer.list_sprints().await;
            pb.finish_and_clear();
            let sprints = sprints?;
            print!("{}", sprints.report_render()?);
        }
        Command::Analyze {
            sprint,
            teams,
            teams_path,
        } => {
            let teams = collect_teams(teams, teams_path.as_deref())?;
            if teams.is_empty() {
                return Err("No teams to analyze, pass `--team` or `--teams`".into());
            }
            let selector = match sprint {
                Some(name) => SprintSelector::Named(name.clone()),
                None => SprintSelector::Current,
            };

            let multi_progress = MultiProgress::new();
            let progress = TeamProgress::new(&multi_progress, &teams);
            let outcomes = analyzer
                .analyze_with_progress(&selector, &teams, &|team: &Team, stage: PipelineStage| {
                    progress.report(team, stage)
                })
                .await;
            progress.abandon("Sprint not resolved");

            let outcomes = outcomes?;
            print!("{}", outcomes.report_render()?);
        }
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyleTemplate::only_message());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

fn build_analyzer(args: &Args) -> Result<SprintAnalyzer<AzureDevOpsClient>> {
    let config = DevOpsConfig::new(&args.organization, &args.personal_access_token)
        .with_base_url(&args.base_url)
        .with_request_timeout(Duration::from_secs(args.request_timeout_secs));
    let client = AzureDevOpsClient::new(config)?;
    let config = AnalyzerConfig::new(&args.project)
        .with_classification_depth(args.classification_depth)
        .with_call_timeout(Duration::from_secs(args.call_timeout_secs));
    Ok(SprintAnalyzer::new(client, config))
}

/// Teams from flags first, then from the teams file; a name given twice is
/// analyzed once.
fn collect_teams(names: &[String], teams_path: Option<&str>) -> Result<Vec<Team>> {
    let from_file = match teams_path {
        Some(path) => Team::from_config(path)?,
        None => vec![],
    };
    let teams = names
        .iter()
        .map(Team::new)
        .chain(from_file)
        .unique_by(|team| team.name.clone())
        .collect();
    Ok(teams)
}

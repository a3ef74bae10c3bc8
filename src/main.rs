//! Wallestars command-line interface.

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::io::{self, Write};
use wallestars::logging;
use wallestars::suggestion::config::{API_KEY_VAR, SuggestionConfig};
use wallestars::suggestion::ports::SuggestionProvider;
use wallestars::tracker::domain::{
    Project, ProjectSummary, Task, TaskPriority, TaskStatus,
};
use wallestars::tracker::services::ProjectManager;

const DEMO_SUGGESTION_PROMPT: &str = "Build a machine learning pipeline";
const DEMO_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "wallestars", version, about = "Project and task tracker with AI suggestions")]
struct Cli {
    /// Ignore any configured language-model credential.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk through creating projects, tasks and a summary.
    Demo,
    /// Suggest tasks for a project description.
    Suggest {
        /// Project description.
        description: String,
    },
    /// Analyse progress from task counts.
    Analyze {
        /// Total number of tasks.
        #[arg(long)]
        total: usize,
        /// Number of completed tasks.
        #[arg(long)]
        completed: usize,
    },
}

fn main() -> Result<()> {
    if let Err(err) = dotenv::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
    logging::init_logging(logging::default_directive());

    let cli = Cli::parse();
    let mut config = SuggestionConfig::from_env();
    if cli.offline {
        config = config.offline();
    }
    let provider = config.build_provider();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Demo => run_demo(&mut out, &*provider),
        Command::Suggest { description } => run_suggest(&mut out, &*provider, &description),
        Command::Analyze { total, completed } => {
            if completed > total {
                eyre::bail!("completed ({completed}) cannot exceed total ({total})");
            }
            let summary = ProjectSummary {
                total_projects: 0,
                total_tasks: total,
                completed_tasks: completed,
                pending_tasks: total - completed,
            };
            writeln!(out, "{}", provider.analyze(&summary))?;
            Ok(())
        }
    }
}

fn run_suggest(out: &mut impl Write, provider: &dyn SuggestionProvider, description: &str) -> Result<()> {
    let suggestions = provider.suggest_tasks(description);
    if suggestions.is_empty() {
        writeln!(out, "No suggestions.")?;
        return Ok(());
    }
    writeln!(out, "Suggested tasks:")?;
    for (position, suggestion) in suggestions.iter().enumerate() {
        writeln!(out, "  {}. {suggestion}", position + 1)?;
    }
    Ok(())
}

fn run_demo(out: &mut impl Write, provider: &dyn SuggestionProvider) -> Result<()> {
    let mut pm = ProjectManager::new();
    let plan: [(&str, &str, &[(&str, &str, TaskPriority)]); 2] = [
        (
            "Website Redesign",
            "Redesign company website with modern UI",
            &[
                ("Design new mockups", "Create modern UI designs", TaskPriority::High),
                ("Implement responsive layout", "Make site mobile-friendly", TaskPriority::High),
                ("Update content", "Refresh all website copy", TaskPriority::Medium),
                ("SEO optimization", "Improve search rankings", TaskPriority::Medium),
                ("Performance testing", "Test load times", TaskPriority::Low),
            ],
        ),
        (
            "Mobile App",
            "Develop iOS and Android mobile application",
            &[
                ("Setup development environment", "Configure React Native", TaskPriority::High),
                ("Implement authentication", "Add login/signup", TaskPriority::High),
                ("Design app screens", "Create UI mockups", TaskPriority::Medium),
            ],
        ),
    ];

    for (name, description, tasks) in plan {
        pm.create_project(name, description)
            .wrap_err_with(|| format!("create project {name}"))?;
        writeln!(out, "Created project: {name}")?;
        for (title, details, priority) in tasks {
            let task = Task::new(*title, pm.clock())?
                .with_description(*details)
                .with_priority(*priority);
            pm.add_task(name, task);
            writeln!(out, "  + {title} [{priority}]")?;
        }
    }

    for (project, index) in [("Website Redesign", 0), ("Website Redesign", 1), ("Mobile App", 0)] {
        pm.complete_task(project, index);
    }

    writeln!(out, "\nProjects:")?;
    for name in pm.list_projects() {
        writeln!(out, "  - {name}")?;
    }

    if let Some(project) = pm.get_project("Website Redesign") {
        write_project(out, project)?;
    }

    let summary = pm.get_summary();
    writeln!(out, "\nSummary:")?;
    writeln!(out, "  Total projects: {}", summary.total_projects)?;
    writeln!(out, "  Total tasks: {}", summary.total_tasks)?;
    writeln!(out, "  Completed: {}", summary.completed_tasks)?;
    writeln!(out, "  Pending: {}", summary.pending_tasks)?;
    if let Some(percent) = summary.completion_percent() {
        writeln!(out, "  Completion rate: {percent}%")?;
    }

    writeln!(out, "\nAssistant available: {}", provider.available())?;
    if !provider.available() {
        writeln!(out, "  Set {API_KEY_VAR} to enable language-model suggestions.")?;
    }
    writeln!(out, "Analysis: {}", provider.analyze(&summary))?;

    writeln!(out, "\nTask suggestions for a new project:")?;
    let suggestions = provider.suggest_tasks(DEMO_SUGGESTION_PROMPT);
    for (position, suggestion) in suggestions.iter().take(DEMO_SUGGESTION_LIMIT).enumerate() {
        writeln!(out, "  {}. {suggestion}", position + 1)?;
    }

    if let Some(pending) = pm.pending_tasks("Website Redesign").filter(|tasks| !tasks.is_empty()) {
        writeln!(out, "\nNext step for Website Redesign: {}", provider.next_step(&pending))?;
    }
    Ok(())
}

fn write_project(out: &mut impl Write, project: &Project) -> Result<()> {
    writeln!(out, "\nProject: {}", project.name())?;
    writeln!(out, "  Description: {}", project.description())?;
    writeln!(out, "  Created: {}", project.created_at().format("%Y-%m-%d %H:%M"))?;
    writeln!(
        out,
        "  Completed: {}  Pending: {}",
        project.tasks_by_status(Some(TaskStatus::Completed)).len(),
        project.tasks_by_status(Some(TaskStatus::Pending)).len()
    )?;
    for task in project.tasks() {
        let marker = if task.is_completed() { "x" } else { " " };
        writeln!(out, "  [{marker}] [{:>6}] {}", task.priority().as_str(), task.title())?;
        if !task.description().is_empty() {
            writeln!(out, "        {}", task.description())?;
        }
    }
    Ok(())
}

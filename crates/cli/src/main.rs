use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use folio_engine::ProjectFilter;
use folio_types::{Portfolio, SectionRegistry};
use folio_util::{Settings, UserPreferences, load_portfolio, open_log_file, read_portfolio, resolve_log_path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Terminal portfolio viewer.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Portfolio content file (JSON or YAML). Defaults to the embedded document.
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Theme id or alias (see `folio themes`).
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Skip the loading screen.
    #[arg(long)]
    no_splash: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the page sections in order.
    Sections,
    /// Check a content file and list every problem found.
    Validate {
        /// File to check. Defaults to `--data`, then the embedded document.
        file: Option<PathBuf>,
    },
    /// Print project titles, optionally filtered.
    Projects {
        #[arg(long, short, default_value = "all", value_name = "FILTER")]
        filter: ProjectFilter,
    },
    /// List the bundled themes.
    Themes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => run_viewer(cli.data.as_deref(), cli.theme, !cli.no_splash).await,
        Some(command) => {
            init_tracing(TraceTarget::Stderr)?;
            let mut stdout = io::stdout().lock();
            run_command(command, cli.data.as_deref(), &mut stdout)
        }
    }
}

enum TraceTarget {
    Stderr,
    LogFile(PathBuf),
}

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
fn init_tracing(target: TraceTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        TraceTarget::Stderr => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
        TraceTarget::LogFile(path) => {
            let file = open_log_file(&path).with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
    }
    Ok(())
}

async fn run_viewer(data: Option<&Path>, theme_override: Option<String>, show_splash: bool) -> Result<()> {
    // The terminal belongs to the TUI; logs go to a file.
    init_tracing(TraceTarget::LogFile(resolve_log_path()))?;

    let portfolio = load_portfolio(data).context("failed to load portfolio content")?;
    let settings = Settings::load();
    let preferences = UserPreferences::load().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; theme changes will not be saved");
        UserPreferences::ephemeral()
    });
    info!(name = %portfolio.name, projects = portfolio.projects.len(), "portfolio loaded");

    folio_tui::run(folio_tui::TuiOptions {
        portfolio,
        settings,
        preferences,
        theme_override,
        show_splash,
    })
    .await
}

fn run_command(command: Command, data: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Sections => {
            for (index, section) in SectionRegistry::try_portfolio()?.iter().enumerate() {
                writeln!(out, "{}  {:<16}{}", index + 1, section.id.as_str(), section.label)?;
            }
        }
        Command::Validate { file } => {
            let path = file.as_deref().or(data);
            let portfolio = match path {
                Some(path) => read_portfolio(path)?,
                None => Portfolio::embedded().context("embedded portfolio is unreadable")?,
            };
            let problems = portfolio.problems();
            let source = path.map_or_else(|| "embedded portfolio".to_string(), |path| path.display().to_string());
            if problems.is_empty() {
                writeln!(out, "{source}: ok")?;
            } else {
                for problem in &problems {
                    writeln!(out, "{source}: {problem}")?;
                }
                bail!("{} problem(s) found in {source}", problems.len());
            }
        }
        Command::Projects { filter } => {
            let portfolio = load_portfolio(data).context("failed to load portfolio content")?;
            let projects = filter.apply(&portfolio.projects);
            if projects.is_empty() {
                writeln!(out, "No projects match the \"{}\" filter.", filter.label())?;
            }
            for project in projects {
                let marker = if project.featured { "*" } else { " " };
                writeln!(out, "{marker} {}", project.title)?;
            }
        }
        Command::Themes => {
            for (id, label) in folio_tui::themes() {
                writeln!(out, "{id:<10}{label}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn run(args: &[&str]) -> (Result<()>, String) {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        let mut out = Vec::new();
        let result = run_command(cli.command.expect("subcommand"), cli.data.as_deref(), &mut out);
        (result, String::from_utf8(out).expect("utf-8"))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn viewer_flags_parse_without_a_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--theme", "nord", "--no-splash"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        assert!(cli.no_splash);
    }

    #[test]
    fn sections_are_listed_in_page_order() {
        let (result, output) = run(&["folio", "sections"]);
        result.expect("sections");
        let ids: Vec<&str> = output.lines().filter_map(|line| line.split_whitespace().nth(1)).collect();
        assert_eq!(ids, ["home", "about", "projects", "cinematography", "skills", "startups", "contact"]);
    }

    #[test]
    fn embedded_content_validates() {
        let (result, output) = run(&["folio", "validate"]);
        result.expect("valid");
        assert_eq!(output, "embedded portfolio: ok\n");
    }

    #[test]
    fn unknown_filters_are_rejected() {
        assert!(Cli::try_parse_from(["folio", "projects", "--filter", "desktop"]).is_err());
    }

    #[test]
    fn empty_filters_print_a_notice() {
        let (result, output) = run(&["folio", "projects", "--filter", "mobile"]);
        result.expect("projects");
        assert_eq!(output, "No projects match the \"Mobile\" filter.\n");
    }

    #[test]
    fn featured_projects_are_marked() {
        let (result, output) = run(&["folio", "projects"]);
        result.expect("projects");
        assert!(output.lines().any(|line| line.starts_with("* ")));
    }

    #[test]
    fn themes_are_listed() {
        let (result, output) = run(&["folio", "themes"]);
        result.expect("themes");
        assert!(output.starts_with("midnight"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn invalid_files_fail_with_every_problem_listed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(
            &path,
            "name: Ada\nskills:\n  programming:\n    - name: Rust\n      level: 150\nprojects:\n  - id: 1\n    title: A\n  - id: 1\n    title: B\n",
        )
        .expect("write");

        let path_arg = path.to_str().expect("utf-8 path");
        let (result, output) = run(&["folio", "validate", path_arg]);
        assert!(result.is_err());
        assert!(output.lines().count() >= 2, "{output}");
        assert!(output.contains("skills"));
        assert!(output.contains("projects"));
    }
}

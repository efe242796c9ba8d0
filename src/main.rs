//! careerfit - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;

use careerfit::{
    assessment::AssessmentSession,
    catalog::{QuestionCatalog, Section},
    cli::{Args, Commands, Verbosity},
    config::Config,
    execution,
    logging,
    presenter::Report,
    repl::{DisplayManager, ReplConfig, ReplSession},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    let default_verbosity =
        Verbosity::from_name(&config.display.default_verbosity).unwrap_or(Verbosity::Normal);
    let verbosity = args.verbosity_or(default_verbosity);

    let color = config.display.color_output && !args.no_color;
    if !color {
        colored::control::set_override(false);
    }
    logging::init(verbosity, color);

    let catalog = Arc::new(QuestionCatalog::builtin());

    match &args.command {
        None | Some(Commands::Start) => run_repl(&args, &config, verbosity, catalog),
        Some(Commands::Questions { json }) => list_questions(&catalog, *json),
        Some(Commands::Score { answers, json }) => {
            run_score(&args, &config, catalog, answers, *json)
        }
    }
}

/// Run the assessment interactively
fn run_repl(
    args: &Args,
    config: &Config,
    verbosity: Verbosity,
    catalog: Arc<QuestionCatalog>,
) -> Result<()> {
    let repl_config = ReplConfig {
        history_file: Some(config.history_path()),
        show_progress_bar: config.display.show_progress_bar && verbosity.show_progress(),
        verbose: verbosity.show_details(),
        session: config.session_options(),
        display: config.display_options(),
        report_path: args.report.clone(),
    };

    let mut repl_session = ReplSession::new(catalog, repl_config)?;
    repl_session.run(VERSION)
}

/// Print the catalog
fn list_questions(catalog: &QuestionCatalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    let display = DisplayManager::new();
    println!("{}", catalog.title().bold().cyan());

    for section in Section::ALL {
        display.show_section(section.label());
        for item in catalog.section_items(section) {
            println!(
                "  {:<10} {} {}",
                item.id.green(),
                item.prompt,
                format!("[{}]", item.answer_type.kind_name()).dimmed()
            );
            for (i, option) in item.options().iter().enumerate() {
                println!("             {}. {}", i + 1, option.dimmed());
            }
        }
    }
    println!();
    Ok(())
}

/// Score an answer list given on the command line
fn run_score(
    args: &Args,
    config: &Config,
    catalog: Arc<QuestionCatalog>,
    inputs: &[String],
    json: bool,
) -> Result<()> {
    let answers = execution::parse_assignments(&catalog, inputs)?;
    let mut session = AssessmentSession::start(catalog, config.session_options());
    execution::complete_session(&mut session, &answers)?;

    let report = Report::from_session(&session, &config.display_options())
        .context("Assessment did not produce a result")?;

    if json {
        println!("{}", report.to_json_pretty()?);
    } else {
        DisplayManager::new().show_report(&report);
    }

    if let Some(path) = &args.report {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if !json {
            DisplayManager::new().show_info(&format!("Report saved to {}", path.display()));
        }
    }

    Ok(())
}

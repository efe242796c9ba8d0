//! REPL (Read-Eval-Print Loop) module for the interactive assessment
//!
//! Ties together line input, command handling, the assessment session and
//! the terminal display.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::assessment::{AssessmentSession, SessionOptions};
use crate::catalog::QuestionCatalog;
use crate::presenter::{DisplayOptions, Report};
pub use crate::repl::commands::{Command, CommandHandler, CommandOutcome};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputEvent, InputHandler};

/// Configuration for REPL mode
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub history_file: Option<PathBuf>,
    pub show_progress_bar: bool,
    pub verbose: bool,
    pub session: SessionOptions,
    pub display: DisplayOptions,
    /// Write the JSON report here on completion
    pub report_path: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            history_file: None,
            show_progress_bar: true,
            verbose: false,
            session: SessionOptions::default(),
            display: DisplayOptions::default(),
            report_path: None,
        }
    }
}

impl ReplConfig {
    /// Create config with history file
    pub fn with_history(path: PathBuf) -> Self {
        ReplConfig {
            history_file: Some(path),
            ..Default::default()
        }
    }
}

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    display_manager: DisplayManager,
    session: AssessmentSession,
    display_options: DisplayOptions,
    report_path: Option<PathBuf>,
}

impl ReplSession {
    /// Create a REPL over a shared catalog
    pub fn new(catalog: Arc<QuestionCatalog>, config: ReplConfig) -> Result<Self> {
        let input_handler = match config.history_file {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        let mut command_handler = CommandHandler::new();
        command_handler.set_verbose(config.verbose);

        Ok(ReplSession {
            input_handler,
            command_handler,
            display_manager: DisplayManager::new().with_progress_bar(config.show_progress_bar),
            session: AssessmentSession::start(catalog, config.session),
            display_options: config.display,
            report_path: config.report_path,
        })
    }

    /// Show welcome banner and the first question
    pub fn show_welcome(&self, version: &str) {
        let catalog = self.session.catalog();
        self.display_manager
            .show_banner(version, catalog.title(), catalog.len());
        self.display_manager
            .show_question(&self.session, self.command_handler.is_verbose());
    }

    /// Run until exit or end of input
    pub fn run(&mut self, version: &str) -> Result<()> {
        self.show_welcome(version);

        loop {
            self.refresh_prompt();
            match self.input_handler.read_line()? {
                InputEvent::Line(line) => {
                    if !self.handle_input(&line)? {
                        break;
                    }
                }
                InputEvent::Interrupted => {
                    self.display_manager
                        .show_warning("Interrupted. Type /exit or press Ctrl-D to quit.");
                }
                InputEvent::Eof => break,
            }
        }

        self.save()
    }

    /// Handle one line of input
    ///
    /// Returns true if the session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        let command = self.command_handler.parse(input);
        let outcome = self.command_handler.execute(command, &mut self.session)?;
        self.render(outcome)
    }

    fn render(&mut self, outcome: CommandOutcome) -> Result<bool> {
        let verbose = self.command_handler.is_verbose();
        match outcome {
            CommandOutcome::Continue => {}
            CommandOutcome::ShowQuestion => {
                self.display_manager.show_question(&self.session, verbose);
            }
            CommandOutcome::ShowAbout => self.display_manager.show_about(),
            CommandOutcome::ClearScreen => {
                self.display_manager.clear_screen()?;
                match self.report() {
                    Some(report) => self.display_manager.show_report(&report),
                    None => self.display_manager.show_question(&self.session, verbose),
                }
            }
            CommandOutcome::Completed => self.complete(),
            CommandOutcome::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn complete(&self) {
        let Some(report) = self.report() else {
            return;
        };
        self.display_manager.show_report(&report);

        if let Some(path) = &self.report_path {
            match report.write_json(path) {
                Ok(()) => {
                    info!(path = %path.display(), "report written");
                    self.display_manager
                        .show_info(&format!("Report saved to {}", path.display()));
                }
                Err(err) => {
                    warn!(error = %err, "failed to write report");
                    self.display_manager
                        .show_error(&format!("Could not save report: {}", err));
                }
            }
        }
    }

    fn refresh_prompt(&mut self) {
        let prompt = if self.session.state().is_terminal() {
            "done> ".to_string()
        } else {
            let progress = self.session.progress();
            format!("[{}/{}]> ", progress.current, progress.total)
        };
        self.input_handler.set_prompt(prompt);
    }

    /// Report for the completed session, if any
    pub fn report(&self) -> Option<Report> {
        Report::from_session(&self.session, &self.display_options)
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Save line-editor history
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }
}

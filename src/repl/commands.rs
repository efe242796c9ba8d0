//! Command handler for the assessment REPL
//!
//! Plain input answers the current question; `/` commands navigate and
//! inspect the session.

use anyhow::Result;
use colored::*;

use crate::assessment::{AssessmentSession, SessionState, Step};
use crate::errors::AssessmentError;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Typed answer for the current question
    Answer { input: String },
    Next,
    Previous,
    Restart,
    Status,
    About,
    Help,
    Verbose { enable: bool },
    Clear,
    Exit,
    Unknown { input: String },
}

/// What the coordinator should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing further to render
    Continue,
    /// Render the current question
    ShowQuestion,
    /// Render the role overview
    ShowAbout,
    /// Clear the terminal, then render the current view
    ClearScreen,
    /// The session just produced (or already holds) its result
    Completed,
    Exit,
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    ///
    /// An empty line means "next", so a previously recorded answer can be
    /// kept with a single Enter.
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Command::Next;
        }

        if !trimmed.starts_with('/') {
            return Command::Answer {
                input: trimmed.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        let Some(name) = parts.first() else {
            return Command::Unknown {
                input: input.to_string(),
            };
        };

        match name.to_lowercase().as_str() {
            "next" | "n" => Command::Next,
            "prev" | "previous" | "back" | "p" => Command::Previous,
            "restart" | "retake" => Command::Restart,
            "status" => Command::Status,
            "about" => Command::About,
            "help" | "h" => Command::Help,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || *s == "1" || *s == "true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            "exit" | "quit" | "q" => Command::Exit,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command against the session
    pub fn execute(
        &mut self,
        command: Command,
        session: &mut AssessmentSession,
    ) -> Result<CommandOutcome> {
        match command {
            Command::Answer { input } => Ok(self.answer(&input, session)),
            Command::Next => Ok(self.next(session)),
            Command::Previous => {
                if session.state().is_terminal() {
                    println!(
                        "{}",
                        "Assessment complete. Use /restart to take it again.".yellow()
                    );
                    Ok(CommandOutcome::Continue)
                } else if session.go_previous() {
                    Ok(CommandOutcome::ShowQuestion)
                } else {
                    println!("{}", "Already at the first question.".yellow());
                    Ok(CommandOutcome::Continue)
                }
            }
            Command::Restart => {
                session.restart();
                println!("{}", "Assessment restarted. All answers cleared.".yellow());
                Ok(CommandOutcome::ShowQuestion)
            }
            Command::Status => {
                self.show_status(session);
                Ok(CommandOutcome::Continue)
            }
            Command::About => Ok(CommandOutcome::ShowAbout),
            Command::Help => {
                self.show_help();
                Ok(CommandOutcome::Continue)
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
                Ok(CommandOutcome::Continue)
            }
            Command::Clear => Ok(CommandOutcome::ClearScreen),
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(CommandOutcome::Exit)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(CommandOutcome::Continue)
            }
        }
    }

    /// Record a typed answer and move on
    fn answer(&self, input: &str, session: &mut AssessmentSession) -> CommandOutcome {
        if session.state().is_terminal() {
            println!(
                "{}",
                "Assessment complete. Use /restart to take it again.".yellow()
            );
            return CommandOutcome::Continue;
        }

        let question = session.current_question().clone();
        let value = match question.parse_response(input) {
            Ok(value) => value,
            Err(err) => {
                self.warn(&err);
                return CommandOutcome::Continue;
            }
        };

        if let Err(err) = session.submit_answer(&question.id, value) {
            self.warn(&err);
            return CommandOutcome::Continue;
        }

        self.next(session)
    }

    fn next(&self, session: &mut AssessmentSession) -> CommandOutcome {
        match session.go_next() {
            Ok(Step::Question(_)) => CommandOutcome::ShowQuestion,
            Ok(Step::Completed(_)) => CommandOutcome::Completed,
            Err(AssessmentError::NoAnswerRecorded { .. }) => {
                println!(
                    "{}",
                    "Please answer this question before moving on.".yellow()
                );
                CommandOutcome::Continue
            }
            Err(err) => {
                self.warn(&err);
                CommandOutcome::Continue
            }
        }
    }

    fn warn(&self, err: &AssessmentError) {
        println!("{} {}", "Warning:".yellow().bold(), err.to_string().yellow());
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("<number>", "Answer the current question and continue"),
            ("<Enter>, /next, /n", "Keep the recorded answer and continue"),
            ("/prev, /back, /p", "Go back to the previous question"),
            ("/restart", "Discard all answers and start over"),
            ("/status", "Show assessment progress"),
            ("/about", "Show what the role involves"),
            ("/verbose [on|off]", "Toggle recorded-value details"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Options are numbered from 1");
        println!("  - Agreement questions take 1 (Strongly Disagree) to 5 (Strongly Agree)");
        println!("  - Press {} or type {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display session status
    fn show_status(&self, session: &AssessmentSession) {
        println!("\n{}", "Assessment Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let progress = session.progress();
        let state = match session.state() {
            SessionState::InProgress => "In progress".yellow(),
            SessionState::Completed => "Completed".green(),
        };

        println!("  Session:          {}", session.id().to_string().dimmed());
        println!("  State:            {}", state);
        println!(
            "  Question:         {}",
            format!("{} of {}", progress.current, progress.total).green()
        );
        println!(
            "  Answered:         {}",
            format!("{}/{}", progress.answered, progress.total).green()
        );
        println!(
            "  Started:          {}",
            session.started_at().format("%Y-%m-%d %H:%M:%S UTC").to_string().green()
        );
        println!(
            "  Verbose Mode:     {}",
            if self.verbose { "On".green() } else { "Off".red() }
        );
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

//! Display manager for the assessment terminal UI
//!
//! Renders the banner, questions with a progress bar, and the results screen.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;

use crate::assessment::{AssessmentSession, Recommendation};
use crate::catalog::{AnswerType, QuestionItem, AGREEMENT_LABELS};
use crate::presenter::{Report, ScoreRow, ROLE_OVERVIEW};

const RULE_WIDTH: usize = 64;
const METER_WIDTH: usize = 30;

/// Fixed-width text meter for a fraction in [0, 1]
pub fn meter(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Display manager for the REPL UI
pub struct DisplayManager {
    show_progress_bar: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            show_progress_bar: true,
        }
    }

    pub fn with_progress_bar(mut self, enabled: bool) -> Self {
        self.show_progress_bar = enabled;
        self
    }

    /// Show welcome banner with the role overview
    pub fn show_banner(&self, version: &str, title: &str, questions: usize) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule.cyan());
        println!("{}", format!("  careerfit {} - {}", version, title).bold().cyan());
        println!(
            "{}",
            format!("  {} questions | ~15 minutes | Mode: Interactive", questions).dimmed()
        );
        println!("{}\n", rule.cyan());
        println!("{}", ROLE_OVERVIEW.headline.bold());
        println!("{}\n", ROLE_OVERVIEW.summary);
        println!(
            "Type a number to answer ({} for commands, {} to quit)",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Show what the role involves and what the assessment covers
    pub fn show_about(&self) {
        self.show_section(ROLE_OVERVIEW.headline);
        println!("{}\n", ROLE_OVERVIEW.summary);
        for item in ROLE_OVERVIEW.responsibilities {
            self.show_bullet(item);
        }
        self.show_section("What This Assessment Covers");
        for (name, description) in ROLE_OVERVIEW.coverage {
            println!("  {} {}", format!("{}:", name).bold(), description);
        }
        println!();
    }

    /// Render the current question of a session
    pub fn show_question(&self, session: &AssessmentSession, show_details: bool) {
        let question = session.current_question();
        let progress = session.progress();

        println!();
        if self.show_progress_bar {
            let pb = ProgressBar::new(progress.total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            pb.set_message(format!("Question {} of {}", progress.current, progress.total));
            pb.set_position(progress.current as u64);
            pb.abandon();
        } else {
            println!(
                "{}",
                format!(
                    "Question {} of {} ({}%)",
                    progress.current,
                    progress.total,
                    progress.percent.round()
                )
                .dimmed()
            );
        }

        println!(
            "{} {} {}",
            question.section.label().bold().cyan(),
            "·".dimmed(),
            question.category.cyan()
        );
        println!("\n{}\n", question.prompt.bold());

        self.show_choices(question);

        if let Some(value) = session.current_answer() {
            let mut note = format!("Current answer: {}", question.display_number(value));
            if show_details {
                note.push_str(&format!(" (recorded value {})", value));
            }
            println!("\n  {} {}", "✓".green(), note.dimmed());
        }

        let hint = if session.is_last() {
            "Answer to complete the assessment"
        } else {
            "Answer to continue"
        };
        println!("\n{}", hint.dimmed());
    }

    fn show_choices(&self, question: &QuestionItem) {
        match &question.answer_type {
            AnswerType::SingleChoice { options } => {
                for (i, option) in options.iter().enumerate() {
                    self.show_numbered(i + 1, option);
                }
            }
            AnswerType::Agreement => {
                for (i, label) in AGREEMENT_LABELS.iter().enumerate() {
                    self.show_numbered(i + 1, label);
                }
            }
            AnswerType::Intensity {
                low_label,
                high_label,
            } => {
                println!(
                    "  {} {}  ...  {} {}",
                    "1".cyan(),
                    low_label,
                    "10".cyan(),
                    high_label
                );
            }
        }
    }

    /// Render the results screen
    pub fn show_report(&self, report: &Report) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule.cyan());
        println!("{}", "  Assessment Results".bold().cyan());
        if let Some(name) = &report.assessment {
            println!("{}", format!("  {}", name).dimmed());
        }
        println!("{}", rule.cyan());

        let (icon, title) = match report.recommendation {
            Recommendation::Accept => ("✓".green(), report.guidance.title.green()),
            Recommendation::Conditional => ("!".yellow(), report.guidance.title.yellow()),
            Recommendation::Reject => ("✗".red(), report.guidance.title.red()),
        };
        println!("\n{} {}", icon.bold(), title.bold());
        println!("{}", report.guidance.description);
        println!(
            "\n  Overall Score: {}   [{}]",
            format!("{}%", report.overall_percent).bold(),
            report.badge
        );

        self.show_section("Scores");
        for row in &report.sections {
            self.show_score_row(row);
        }

        self.show_section("Detailed Analysis (WISCAR Framework)");
        for row in &report.wiscar {
            self.show_score_row(row);
        }

        self.show_section("Recommended Next Steps");
        for (i, step) in report.guidance.next_steps.iter().enumerate() {
            self.show_numbered(i + 1, step);
        }

        self.show_section("Learning Resources");
        for resource in &report.learning_resources {
            println!(
                "  {} {} {} {}",
                "•".cyan(),
                resource.title,
                format!("({})", resource.provider).dimmed(),
                format!("[{}]", resource.kind).dimmed()
            );
        }

        if !report.alternative_careers.is_empty() {
            self.show_section("Alternative Career Paths");
            for career in &report.alternative_careers {
                println!("  {} {}", "•".cyan(), career.title.bold());
                println!("    {}", career.description.dimmed());
            }
        }

        println!(
            "\nType {} to retake the assessment or {} to quit.\n",
            "/restart".green(),
            "/exit".green()
        );
    }

    fn show_score_row(&self, row: &ScoreRow) {
        let label = if row.detail.is_empty() {
            row.label.to_string()
        } else {
            format!("{} ({})", row.label, row.detail)
        };
        println!(
            "  {:<38} {} {:>4}%",
            label,
            meter(row.fraction(), METER_WIDTH).cyan(),
            row.percent
        );
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("  {} {}", "•".cyan(), text);
    }

    /// Show numbered item
    pub fn show_numbered(&self, index: usize, text: &str) {
        println!("  {}. {}", index.to_string().cyan(), text);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

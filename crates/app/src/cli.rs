use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_QUESTIONS_FILE: &str = "qcm.json";

#[derive(Debug, Parser)]
#[command(name = "quiz")]
#[command(about = "Multiple-choice revision quiz with AI explanations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Question file (JSON list; `#` comment lines and blank lines are ignored)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "QUIZ_QUESTIONS",
        default_value = DEFAULT_QUESTIONS_FILE,
        global = true
    )]
    pub questions: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Launch the desktop quiz (default)
    Ui,
    /// Validate the question file and list its courses
    Check,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ui() {
        let cli = Cli::try_parse_from(["quiz", "--questions", "bank.json"]).unwrap();
        assert_eq!(cli.command(), Command::Ui);
        assert_eq!(cli.questions, PathBuf::from("bank.json"));
    }

    #[test]
    fn check_accepts_questions_after_subcommand() {
        let cli = Cli::try_parse_from(["quiz", "check", "-q", "hr.json"]).unwrap();
        assert_eq!(cli.command(), Command::Check);
        assert_eq!(cli.questions, PathBuf::from("hr.json"));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["quiz", "seed"]).is_err());
    }
}

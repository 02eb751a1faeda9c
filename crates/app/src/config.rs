use std::fmt;

use phono_core::model::{NotationSystem, QuizSettings};
use ui::{Tab, UnknownTab};

pub const ENV_QUESTIONS: &str = "PHONOLAB_QUESTIONS";
pub const ENV_START_TAB: &str = "PHONOLAB_START_TAB";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidQuestions { raw: String },
    InvalidTab(UnknownTab),
    InvalidNotation { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidQuestions { raw } => {
                write!(f, "invalid question count (expected 1 or more): {raw}")
            }
            ArgsError::InvalidTab(err) => write!(f, "{err}"),
            ArgsError::InvalidNotation { raw } => write!(f, "unknown notation system: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_questions(raw: &str) -> Result<QuizSettings, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(|total| QuizSettings::new(total).ok())
        .ok_or_else(|| ArgsError::InvalidQuestions {
            raw: raw.to_string(),
        })
}

fn parse_notation(raw: &str) -> Result<NotationSystem, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidNotation {
        raw: raw.to_string(),
    })
}

/// Launch settings for the desktop UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub quiz: QuizSettings,
    pub start_tab: Tab,
}

impl AppConfig {
    /// Defaults overridden by whatever `env` returns for the `PHONOLAB_*` keys.
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let mut config = Self::default();
        if let Some(raw) = env(ENV_QUESTIONS) {
            config.quiz = parse_questions(&raw)?;
        }
        if let Some(raw) = env(ENV_START_TAB) {
            config.start_tab = raw.parse().map_err(ArgsError::InvalidTab)?;
        }
        Ok(config)
    }

    /// Apply `--questions` and `--tab` flags on top of `self`.
    pub fn apply_flags(
        mut self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    self.quiz = parse_questions(&value)?;
                }
                "--tab" => {
                    let value = require_value(args, "--tab")?;
                    self.start_tab = value.parse().map_err(ArgsError::InvalidTab)?;
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(AppConfig),
    Table {
        query: String,
    },
    Convert {
        from: NotationSystem,
        value: String,
        to: NotationSystem,
    },
    Help,
}

impl Command {
    /// Parse `argv` (without the program name). No subcommand means `ui`.
    pub fn parse(argv: Vec<String>, base: AppConfig) -> Result<Self, ArgsError> {
        let mut args = argv.into_iter().peekable();
        let first = args.peek().cloned();
        match first.as_deref() {
            None => Ok(Self::Ui(base)),
            Some("--help" | "-h" | "help") => Ok(Self::Help),
            Some(flag) if flag.starts_with("--") => Ok(Self::Ui(base.apply_flags(&mut args)?)),
            Some("ui") => {
                args.next();
                Ok(Self::Ui(base.apply_flags(&mut args)?))
            }
            Some("table") => {
                args.next();
                let query = args.next().unwrap_or_default();
                if let Some(extra) = args.next() {
                    return Err(ArgsError::UnknownArg(extra));
                }
                Ok(Self::Table { query })
            }
            Some("convert") => {
                args.next();
                let from = parse_notation(&require_value(&mut args, "convert <from>")?)?;
                let value = require_value(&mut args, "convert <value>")?;
                let to = parse_notation(&require_value(&mut args, "convert <to>")?)?;
                if let Some(extra) = args.next() {
                    return Err(ArgsError::UnknownArg(extra));
                }
                Ok(Self::Convert { from, value, to })
            }
            Some(other) => Err(ArgsError::UnknownCommand(other.to_string())),
        }
    }
}

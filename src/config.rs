//! Command-line and environment configuration.

use std::fs::OpenOptions;
use std::path::PathBuf;

use clap::Args;
use env_logger::{Builder, Env, Target};

use crate::data::{Limits, DEFAULT_MAX_INPUT_LENGTH, DEFAULT_MAX_JSON_SIZE_KB, DEFAULT_MAX_NAME_LENGTH};
use crate::QuizError;

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Maximum length of a question, answer, key or header
    #[arg(long, env = "QUIZ_MAX_INPUT_LENGTH", default_value_t = DEFAULT_MAX_INPUT_LENGTH, global = true)]
    pub max_input_length: usize,

    /// Maximum size of the quiz data, in KiB
    #[arg(long, env = "QUIZ_MAX_JSON_FILE_SIZE_KB", default_value_t = DEFAULT_MAX_JSON_SIZE_KB, global = true)]
    pub max_json_size_kb: usize,

    /// Append log output to this file
    #[arg(long, env = "QUIZ_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            max_json_size_kb: DEFAULT_MAX_JSON_SIZE_KB,
            log_file: None,
        }
    }
}

impl Config {
    pub fn limits(&self) -> Limits {
        Limits {
            max_input_length: self.max_input_length,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_json_size_kb: self.max_json_size_kb,
        }
    }

    /// Filter used when `RUST_LOG` is unset. The interactive player owns the
    /// terminal, so it stays silent unless logs go to a file.
    pub fn default_log_filter(&self, interactive: bool) -> &'static str {
        match (&self.log_file, interactive) {
            (Some(_), _) => "info",
            (None, true) => "off",
            (None, false) => "warn",
        }
    }

    /// Install the global logger. `RUST_LOG` overrides the default filter.
    pub fn init_logging(&self, interactive: bool) -> Result<(), QuizError> {
        let mut builder =
            Builder::from_env(Env::default().default_filter_or(self.default_log_filter(interactive)));

        if let Some(path) = &self.log_file {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }

        builder.try_init()?;
        Ok(())
    }
}

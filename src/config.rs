use std::env;

use anyhow::Result;

/// Default number of characters of the subject shown in the terminal table.
pub const DEFAULT_SUBJECT_WIDTH: usize = 48;

/// How reports are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal table (default)
    Table,
    /// Pretty-printed JSON document
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!(
                "Unknown output format {other:?}. Set SUBJECTLINE_FORMAT to \"table\" or \"json\"."
            ),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_format: OutputFormat,
    /// Subjects longer than this are truncated in the terminal table
    pub subject_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            subject_width: DEFAULT_SUBJECT_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the environment;
    /// tests pass a closure over fixed values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup("SUBJECTLINE_FORMAT") {
            Some(value) => OutputFormat::parse(&value)?,
            None => OutputFormat::Table,
        };

        let subject_width = match lookup("SUBJECTLINE_SUBJECT_WIDTH") {
            Some(value) => {
                let width: usize = value.trim().parse().map_err(|_| {
                    anyhow::anyhow!(
                        "SUBJECTLINE_SUBJECT_WIDTH must be a positive whole number, got {value:?}"
                    )
                })?;
                anyhow::ensure!(width > 0, "SUBJECTLINE_SUBJECT_WIDTH must be at least 1");
                width
            }
            None => DEFAULT_SUBJECT_WIDTH,
        };

        Ok(Self {
            output_format,
            subject_width,
        })
    }
}

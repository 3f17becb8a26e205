// ============================================================
// Layer 1 — key=value Settings
// ============================================================
// The three run settings are passed as positional `key=value`
// pairs:
//
//   clean=true|false      (default false, case-insensitive)
//   split=<0..1>          (default 0.8)
//   random_state=<u64>    (default 42)
//
// At most three pairs are accepted; a repeated key keeps the last
// value. Everything is validated here, before the dataset is
// opened, and turned into a typed `Settings` value.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use thiserror::Error;

/// Maximum number of key=value pairs on the command line
pub const MAX_SETTINGS: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Too many arguments: expected at most {max}, got {got}")]
    TooManyArguments { got: usize, max: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("clean: Invalid clean value '{0}'")]
    InvalidClean(String),

    #[error("split: Invalid split value '{0}'")]
    InvalidSplit(String),

    #[error("random_state: Invalid random_state value '{0}'")]
    InvalidRandomState(String),
}

/// Validated run settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub clean:        bool,
    pub split:        f64,
    pub random_state: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { clean: false, split: 0.8, random_state: 42 }
    }
}

impl Settings {
    /// Parse and validate `key=value` pairs.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() > MAX_SETTINGS {
            return Err(ConfigError::TooManyArguments { got: args.len(), max: MAX_SETTINGS });
        }

        let mut clean        = None;
        let mut split        = None;
        let mut random_state = None;

        for arg in &args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                return Err(ConfigError::InvalidArgument(arg.to_string()));
            };
            match key {
                "clean"        => clean        = Some(value),
                "split"        => split        = Some(value),
                "random_state" => random_state = Some(value),
                other          => return Err(ConfigError::InvalidArgument(other.to_string())),
            }
        }

        let defaults = Settings::default();
        Ok(Self {
            split:        split.map(parse_split).transpose()?.unwrap_or(defaults.split),
            clean:        clean.map(parse_clean).transpose()?.unwrap_or(defaults.clean),
            random_state: random_state
                .map(parse_random_state)
                .transpose()?
                .unwrap_or(defaults.random_state),
        })
    }
}

fn parse_split(value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err(ConfigError::InvalidSplit(value.to_string())),
    }
}

// An empty value counts as false.
fn parse_clean(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true"        => Ok(true),
        "false" | ""  => Ok(false),
        _             => Err(ConfigError::InvalidClean(value.to_string())),
    }
}

fn parse_random_state(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidRandomState(value.to_string()))
}

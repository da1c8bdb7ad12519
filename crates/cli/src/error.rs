//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: noise error (unknown preset, bad configuration, sizing defect)
//! - 11: I/O error (PNG write)
//! - 12: input error (bad palette, bad JSON params or bands)
//! - 13: serialization error

use perlin_field_core::NoiseError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A generation-level error (unknown preset, invalid configuration).
    Noise(NoiseError),
    /// An I/O error (snapshot write).
    Io(String),
    /// A user input error (bad palette name, bad JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Noise(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Noise(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<NoiseError> for CliError {
    fn from(e: NoiseError) -> Self {
        match e {
            NoiseError::Io(msg) => CliError::Io(msg),
            e @ (NoiseError::InvalidColor(_) | NoiseError::InvalidPalette(_)) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Noise(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_error_exit_code_is_10() {
        let err = CliError::Noise(NoiseError::UnknownPreset("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad palette".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn from_noise_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(NoiseError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_noise_error_palette_routes_to_cli_input() {
        let cli_err = CliError::from(NoiseError::InvalidPalette("unknown palette 'x'".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("unknown palette"));
    }

    #[test]
    fn from_noise_error_other_routes_to_cli_noise() {
        let cli_err = CliError::from(NoiseError::InvalidConfiguration("cell_size".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("cell_size"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}

use std::fmt;
use std::path::PathBuf;

use crate::inference::PredictError;

#[derive(Debug, PartialEq)]
pub enum CliError {
    MissingInputArg(String),
    InvalidValue(String, String),
    FileNotFound(String),
    FileIsDirectory(String),
    NotADirectory(String),
}

impl std::error::Error for CliError {}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self {
            CliError::MissingInputArg(arg) => write!(f, "Missing input argument: {}.", arg),
            CliError::InvalidValue(arg, value) => write!(f, "Invalid value \"{}\" for {}.", value, arg),
            CliError::FileNotFound(arg) => write!(f, "Could not find file \"{}\".", arg),
            CliError::FileIsDirectory(arg) => write!(f, "Provided file \"{}\" is a directory.", arg),
            CliError::NotADirectory(arg) => write!(f, "Provided path \"{}\" is not a directory.", arg),
        }
    }
}

pub fn parse_input_file(input: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(input);

    if !path.exists() {
        Err(CliError::FileNotFound(input.to_string()))
    } else if path.is_dir() {
        Err(CliError::FileIsDirectory(input.to_string()))
    } else {
        Ok(path)
    }
}

pub fn parse_input_dir(input: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(input);

    if !path.exists() {
        Err(CliError::FileNotFound(input.to_string()))
    } else if !path.is_dir() {
        Err(CliError::NotADirectory(input.to_string()))
    } else {
        Ok(path)
    }
}

/// Year bounds of the input surface, inclusive.
pub fn parse_year(input: &str, min: i32, max: i32) -> Result<i32, CliError> {
    match input.trim().parse::<i32>() {
        Ok(year) if year >= min && year <= max => Ok(year),
        _ => Err(CliError::InvalidValue("year".to_string(), input.to_string())),
    }
}

/// User-facing line for a prediction outcome.
pub fn render_outcome(outcome: &Result<f64, PredictError>) -> String {
    match outcome {
        Ok(prediction) => format!("Predicted Yield: {:.2} hg/ha", prediction),
        Err(e) => e.to_string(),
    }
}

/// Decorative output goes to stderr so stdout only carries the outcome.
pub fn print_output(msg: String, quiet: bool) {
    if !quiet { eprint!("{}", msg); }
}

pub fn exit_with_error(e: Box<dyn std::error::Error>) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1)
}

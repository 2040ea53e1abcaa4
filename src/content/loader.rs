//! Loader for the arena tuning RON file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ArenaTuning;

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `file` is only used for error reporting.
pub fn parse_tuning(contents: &str, file: &str) -> Result<ArenaTuning, TuningLoadError> {
    let tuning: ArenaTuning = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    super::validation::validate_tuning(&tuning).map_err(|e| TuningLoadError {
        file: file.to_string(),
        message: format!("Invalid tuning: {}", e),
    })?;

    Ok(tuning)
}

/// Load and validate tuning from a RON file on disk.
pub fn load_tuning(path: &Path) -> Result<ArenaTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

//! Optional `.env` loading
//!
//! Values already present in the process environment are never overridden.

use std::path::{Path, PathBuf};

const DOTENV_FILE: &str = ".env";

/// Outcome of trying to load a `.env` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    /// File found and applied
    Loaded(PathBuf),
    /// No file; the process environment is used as-is
    NotFound,
    /// File found but could not be read or parsed
    Invalid(String),
}

impl DotenvStatus {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl From<Result<PathBuf, dotenvy::Error>> for DotenvStatus {
    fn from(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::NotFound,
            Err(e) => Self::Invalid(e.to_string()),
        }
    }
}

/// Load `.env` from the current directory. Parent directories are not searched.
pub fn load_dotenv() -> DotenvStatus {
    load_dotenv_from(DOTENV_FILE)
}

/// Load a specific env file
pub fn load_dotenv_from(path: impl AsRef<Path>) -> DotenvStatus {
    let path = path.as_ref();
    dotenvy::from_path(path)
        .map(|()| path.to_path_buf())
        .into()
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;
use tokio::sync::oneshot;

use crate::models::FetchedQuiz;

/// Reasons a quiz file could not be fetched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("loading was aborted")]
    Aborted,
}

/// Read and parse a quiz file.
pub fn load_quiz_from_path<P: AsRef<Path>>(path: P) -> Result<FetchedQuiz, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_quiz(path, &json_content)
}

/// Read and parse a quiz file without blocking, giving up as soon as `abort`
/// fires or its sender is dropped.
pub async fn fetch_quiz<P: AsRef<Path>>(
    path: P,
    abort: oneshot::Receiver<()>,
) -> Result<FetchedQuiz, LoadError> {
    let path = path.as_ref();

    let read = tokio::select! {
        biased;
        _ = abort => {
            warn!("aborted loading {}", path.display());
            return Err(LoadError::Aborted);
        }
        read = tokio::fs::read_to_string(path) => read,
    };

    let json_content = read.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_quiz(path, &json_content)
}

fn parse_quiz(path: &Path, json_content: &str) -> Result<FetchedQuiz, LoadError> {
    let mut quiz: FetchedQuiz =
        serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if quiz.id.is_none() {
        quiz.id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    info!(
        "loaded {} `{}` from {}",
        quiz.kind.label(),
        quiz.name,
        path.display()
    );
    Ok(quiz)
}

use std::path::PathBuf;

use thiserror::Error;

/// Describes the potential error conditions that might arise from rsvcs
/// `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied worktree root does not exist or is not a directory.
    #[error("{} is not a worktree directory", .0.display())]
    NotAWorktree(PathBuf),

    /// The control directory exists and already contains files.
    /// Initialization never merges into or overwrites an existing
    /// repository.
    #[error("{} already exists and is not empty", .0.display())]
    AlreadyInitialized(PathBuf),

    /// No control directory was found at the expected location.
    #[error("no repository found at {}", .0.display())]
    NotARepository(PathBuf),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for rsvcs `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;

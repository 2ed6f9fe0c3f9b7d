use std::path::PathBuf;

use thiserror::Error;

/// Library error type for background generation.
#[derive(Debug, Error)]
pub enum Error {
    /// The image directory is missing or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A transition was requested from an image to itself.
    #[error("cannot transition from an image to itself: {}", .0.display())]
    SelfTransition(PathBuf),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory listing error.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// XML writer error.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}

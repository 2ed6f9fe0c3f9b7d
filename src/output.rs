//! Where the rendered background is written.

use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Output sink: standard output for `-`, otherwise a file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Open the sink for writing, truncating an existing file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        let out: Box<dyn Write> = match self {
            Self::Stdout => Box::new(BufWriter::new(io::stdout().lock())),
            Self::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        };
        Ok(out)
    }
}

impl FromStr for Destination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

//! In-memory model of a GNOME timed background.

use std::path::PathBuf;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::Error;

/// Seconds an image stays on screen when no duration is given.
///
/// Together with [`DEFAULT_TRANSITION_SECS`] this adds up to fifteen minutes
/// per image.
pub const DEFAULT_IMAGE_SECS: u64 = 895;
/// Seconds a cross-fade lasts when no duration is given.
pub const DEFAULT_TRANSITION_SECS: u64 = 5;

/// UTC wall-clock moment at which playback nominally starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl StartTime {
    /// Snapshot of the current UTC clock.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Utc::now())
    }
}

impl From<DateTime<Utc>> for StartTime {
    fn from(t: DateTime<Utc>) -> Self {
        Self {
            year: t.year(),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

/// One element of the playback sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Show `file` for `duration` seconds.
    Static { duration: u64, file: PathBuf },
    /// Cross-fade from `from` to `to` over `duration` seconds.
    Transition {
        duration: u64,
        from: PathBuf,
        to: PathBuf,
    },
}

/// A background document: a start time followed by ordered entries.
#[derive(Debug, Clone)]
pub struct Background {
    start: StartTime,
    entries: Vec<Entry>,
}

impl Background {
    /// Create an empty background starting now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(StartTime::now())
    }

    /// Create an empty background with a fixed start time.
    #[must_use]
    pub const fn starting_at(start: StartTime) -> Self {
        Self {
            start,
            entries: Vec::new(),
        }
    }

    /// Append a static image shown for `duration` seconds.
    pub fn add_image(&mut self, file: impl Into<PathBuf>, duration: u64) {
        self.entries.push(Entry::Static {
            duration,
            file: file.into(),
        });
    }

    /// Append a cross-fade between two different images.
    ///
    /// # Errors
    /// Returns [`Error::SelfTransition`] if `from` and `to` are the same path.
    pub fn add_transition(
        &mut self,
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        duration: u64,
    ) -> Result<(), Error> {
        let (from, to) = (from.into(), to.into());
        if from == to {
            return Err(Error::SelfTransition(from));
        }
        self.entries.push(Entry::Transition { duration, from, to });
        Ok(())
    }

    #[must_use]
    pub const fn start_time(&self) -> &StartTime {
        &self.start
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Render the document as indented XML text.
    ///
    /// # Errors
    /// Returns an error if the XML writer fails.
    pub fn to_xml(self) -> Result<String, Error> {
        crate::xml::to_string(&self)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

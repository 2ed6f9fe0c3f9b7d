//! Build GNOME timed slideshow backgrounds from a directory of images.
//!
//! The pipeline is: [`scan`] a directory for `.jpg`/`.png` files, pair them
//! cyclically with [`transitions`], record each pair into a
//! [`Background`](background::Background) and render it with [`xml`].

pub mod background;
pub mod config;
pub mod error;
pub mod output;
pub mod scan;
pub mod transitions;
pub mod xml;

use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use background::Background;
use config::Settings;
pub use error::Error;
use output::Destination;

/// RNG used for the shuffle: seeded when `shuffle-seed` is set.
#[must_use]
pub fn shuffle_rng(settings: &Settings) -> StdRng {
    settings
        .shuffle_seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Scan `dir` and record a looping slideshow of its images.
///
/// Each image is shown for `duration - transition` seconds and then fades
/// into its successor over `transition` seconds. The last image fades back
/// into the first.
///
/// # Errors
/// Returns [`Error::NotADirectory`] if `dir` is not a directory, and
/// [`Error::SelfTransition`] if two consecutive images resolve to one path.
pub fn build_background<R: Rng + ?Sized>(
    dir: &Path,
    settings: &Settings,
    rng: &mut R,
) -> Result<Background, Error> {
    let pairs = transitions::transitions(dir, settings.shuffle, rng)?;
    info!(dir = %dir.display(), images = pairs.image_count(), "scanned images");

    let mut bg = Background::new();
    for pair in pairs {
        debug!(from = %pair.from.display(), to = ?pair.to, "adding image");
        if let Some(to) = pair.to {
            bg.add_image(pair.from.clone(), settings.static_secs());
            bg.add_transition(pair.from, to, settings.transition_secs())?;
        } else {
            bg.add_image(pair.from, settings.static_secs());
        }
    }
    Ok(bg)
}

/// Render `bg` to `dest`.
///
/// # Errors
/// Returns [`Error::Io`] if the destination cannot be opened or written.
pub fn write_background(bg: &Background, dest: &Destination) -> Result<(), Error> {
    let mut out = dest.open()?;
    xml::write(bg, &mut out)?;
    out.flush()?;
    info!(dest = %dest, entries = bg.entries().len(), "wrote background");
    Ok(())
}

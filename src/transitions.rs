//! Cyclic pairing of images so the slideshow loops back to its first image.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::Error;
use crate::scan::image_files;

/// One step of the slideshow: show `from`, then fade to `to` if present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPair {
    pub from: PathBuf,
    pub to: Option<PathBuf>,
}

/// Single-pass iterator over the cyclic pairs of a list of images.
///
/// `n >= 2` images yield `n` pairs, the last one wrapping back to the first
/// image. A single image yields one pair with no successor, and an empty list
/// yields nothing.
#[derive(Debug, Clone)]
pub struct Transitions {
    items: Vec<PathBuf>,
    idx: usize,
}

impl Transitions {
    /// Build the pair sequence over `items` in their given order.
    #[must_use]
    pub const fn new(items: Vec<PathBuf>) -> Self {
        Self { items, idx: 0 }
    }

    /// Number of images the sequence cycles over.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no images at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Iterator for Transitions {
    type Item = TransitionPair;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.items.get(self.idx)?.clone();
        let to = if self.items.len() == 1 {
            None
        } else {
            Some(self.items[(self.idx + 1) % self.items.len()].clone())
        };
        self.idx += 1;
        Some(TransitionPair { from, to })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.idx);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Transitions {}

/// Scan `dir` and pair up its images cyclically.
///
/// # Errors
/// Propagates any error from [`image_files`].
pub fn transitions<R: Rng + ?Sized>(
    dir: &Path,
    shuffle: bool,
    rng: &mut R,
) -> Result<Transitions, Error> {
    image_files(dir, shuffle, rng).map(Transitions::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn pair(from: &str, to: Option<&str>) -> TransitionPair {
        TransitionPair {
            from: PathBuf::from(from),
            to: to.map(PathBuf::from),
        }
    }

    #[test]
    fn three_images_wrap_to_first() {
        let got: Vec<_> = Transitions::new(paths(&["i0", "i1", "i2"])).collect();
        assert_eq!(
            got,
            vec![
                pair("i0", Some("i1")),
                pair("i1", Some("i2")),
                pair("i2", Some("i0")),
            ]
        );
    }

    #[test]
    fn two_images_form_a_loop() {
        let got: Vec<_> = Transitions::new(paths(&["a", "b"])).collect();
        assert_eq!(got, vec![pair("a", Some("b")), pair("b", Some("a"))]);
    }

    #[test]
    fn single_image_has_no_successor() {
        let got: Vec<_> = Transitions::new(paths(&["only"])).collect();
        assert_eq!(got, vec![pair("only", None)]);
    }

    #[test]
    fn no_images_yield_nothing() {
        let mut it = Transitions::new(Vec::new());
        assert!(it.is_empty());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn sequence_is_single_pass() {
        let mut it = Transitions::new(paths(&["a", "b"]));
        assert_eq!(it.image_count(), 2);
        assert_eq!(it.len(), 2);
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next();
        it.next();
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}

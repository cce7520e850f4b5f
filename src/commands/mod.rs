//! Presentation-layer collaborators for the diff engine
//!
//! The engine itself only produces values; rendering them belongs
//! here:
//!
//! - `diff`: unified-style rendering of a two-way `DiffResult`
//! - `merge`: conflict-marker rendering of a `ThreeWayDiffResult`
//! - `pager`: paged stdout for long diff output
//!
//! Everything writes through a caller-supplied writer so tests can
//! capture output.

pub mod diff;
pub mod merge;
pub mod pager;

use std::cell::{RefCell, RefMut};

/// Rendering context owning the output writer.
pub struct Printer {
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Printer {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}

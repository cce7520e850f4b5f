//! Line diff and three-way merge engine
//!
//! This module implements the comparison pipeline:
//!
//! - `options`: comparison options and line normalization
//! - `myers`: Myers' shortest edit script over two line sequences
//! - `chunk`: grouping of edit scripts into reviewable change chunks
//! - `diff`: two-way diff assembly (`diff`)
//! - `merge`: three-way classification against a common base (`diff3`)
//!
//! Every entry point is a pure function of its inputs: no state is
//! retained between invocations and no I/O is performed. Line sources
//! (files, clipboard, editor buffers) live with the caller.

pub mod chunk;
pub mod diff;
pub mod merge;
pub(crate) mod myers;
pub mod options;

pub use chunk::{DiffChunk, DiffOperation};
pub use diff::{DiffResult, LineSet, diff};
pub use merge::{ThreeWayChunk, ThreeWayDiffResult, ThreeWayStatus, diff3};
pub use options::ComparisonOptions;

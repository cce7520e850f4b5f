//! Three-way merge classification against a common base
//!
//! Two base-anchored pairwise diffs (base↔left and base↔right) are
//! walked in lockstep, one base line at a time. Each base position is
//! classified purely from two booleans (did the left side change here,
//! did the right side change here); the competing contents are never
//! compared, so two sides making the same independent change still
//! classify as a conflict. `ThreeWayStatus::BothChanged` exists in the
//! data model for an auto-merge of identical changes but is never
//! produced by this classifier.
//!
//! The walk does not coalesce runs of the same status: it emits one
//! chunk per base line, with the side ranges absorbing any insertions
//! anchored at that position. Coalescing happens at display time.
//!
//! ## Debug Logging
//!
//! Build with the `debug_diff` feature to trace the walk:
//!
//! ```toml
//! [features]
//! debug_diff = []
//! ```

use crate::engine::chunk::{DiffChunk, DiffOperation};
use crate::engine::diff::{DiffResult, LineSet, diff};
use crate::engine::options::ComparisonOptions;
use derive_new::new;
use std::ops::Range;

/// Macro for debug logging, enabled with the debug_diff feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Classification of a base-aligned region of a three-way merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreeWayStatus {
    Unchanged,
    LeftChanged,
    RightChanged,
    /// Both sides made the same change. Declared for completeness;
    /// the current classifier never emits it (see module docs).
    BothChanged,
    Conflict,
}

/// One base-aligned region with its counterpart ranges on both sides.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ThreeWayChunk {
    pub status: ThreeWayStatus,
    pub base_range: Range<usize>,
    pub left_range: Range<usize>,
    pub right_range: Range<usize>,
}

/// Immutable outcome of a three-way merge classification.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ThreeWayDiffResult {
    pub chunks: Vec<ThreeWayChunk>,
    pub base_lines: LineSet,
    pub left_lines: LineSet,
    pub right_lines: LineSet,
}

impl ThreeWayDiffResult {
    pub fn has_conflicts(&self) -> bool {
        self.chunks
            .iter()
            .any(|chunk| chunk.status == ThreeWayStatus::Conflict)
    }

    pub fn conflict_count(&self) -> usize {
        self.chunks
            .iter()
            .filter(|chunk| chunk.status == ThreeWayStatus::Conflict)
            .count()
    }
}

/// Classifies every base-aligned region of `left` and `right` against
/// their common ancestor `base`.
///
/// Runs two pairwise diffs and walks them in lockstep. Total over any
/// three inputs, like [`diff`].
pub fn diff3(
    base: &[String],
    left: &[String],
    right: &[String],
    options: &ComparisonOptions,
) -> ThreeWayDiffResult {
    let diff_left = diff(base, left, options);
    let diff_right = diff(base, right, options);

    let mut chunks = Vec::with_capacity(base.len() + 1);
    let mut left_walk = SideWalk::new(&diff_left);
    let mut right_walk = SideWalk::new(&diff_right);
    let (mut left_pos, mut right_pos) = (0, 0);

    for base_pos in 0..base.len() {
        left_walk.advance(base_pos);
        right_walk.advance(base_pos);

        let status = classify(
            left_walk.changed_at(base_pos),
            right_walk.changed_at(base_pos),
        );
        let next_left = left_walk.position_after(base_pos, left.len());
        let next_right = right_walk.position_after(base_pos, right.len());

        debug_log!(
            "base {}: {:?} left {}..{} right {}..{}",
            base_pos,
            status,
            left_pos,
            next_left,
            right_pos,
            next_right
        );

        chunks.push(ThreeWayChunk::new(
            status,
            base_pos..base_pos + 1,
            left_pos..next_left,
            right_pos..next_right,
        ));
        left_pos = next_left;
        right_pos = next_right;
    }

    // Insertions anchored past the end of the base
    if left_pos < left.len() || right_pos < right.len() {
        let status = classify(left_pos < left.len(), right_pos < right.len());
        chunks.push(ThreeWayChunk::new(
            status,
            base.len()..base.len(),
            left_pos..left.len(),
            right_pos..right.len(),
        ));
    }

    ThreeWayDiffResult::new(chunks, base.to_vec(), left.to_vec(), right.to_vec())
}

/// Pure per-position classification from change co-occurrence.
fn classify(left_changed: bool, right_changed: bool) -> ThreeWayStatus {
    match (left_changed, right_changed) {
        (false, false) => ThreeWayStatus::Unchanged,
        (true, false) => ThreeWayStatus::LeftChanged,
        (false, true) => ThreeWayStatus::RightChanged,
        (true, true) => ThreeWayStatus::Conflict,
    }
}

/// Cursor over the chunks of one base-anchored pairwise diff.
///
/// The left side of every chunk indexes the base sequence; the right
/// side indexes the divergent sequence.
struct SideWalk<'d> {
    chunks: &'d [DiffChunk],
    cursor: usize,
}

impl<'d> SideWalk<'d> {
    fn new(result: &'d DiffResult) -> Self {
        Self {
            chunks: &result.chunks,
            cursor: 0,
        }
    }

    /// Moves the cursor past every chunk that ends before `base_pos`.
    /// Insert chunks anchored at `base_pos` stay current.
    fn advance(&mut self, base_pos: usize) {
        while let Some(chunk) = self.chunks.get(self.cursor) {
            let past = if chunk.left_range.is_empty() {
                chunk.left_range.start < base_pos
            } else {
                chunk.left_range.end <= base_pos
            };
            if !past {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Whether a non-equal chunk covers `base_pos`. Insertions anchored
    /// at `base_pos` count as a change at that position.
    fn changed_at(&self, base_pos: usize) -> bool {
        self.chunks[self.cursor..]
            .iter()
            .take_while(|chunk| chunk.left_range.start <= base_pos)
            .any(|chunk| {
                chunk.operation != DiffOperation::Equal
                    && (chunk.left_range.contains(&base_pos)
                        || (chunk.left_range.is_empty() && chunk.left_range.start == base_pos))
            })
    }

    /// The side position aligned with `base_pos + 1`, counting every
    /// side line anchored at or before `base_pos` as consumed.
    fn position_after(&self, base_pos: usize, side_len: usize) -> usize {
        let next = base_pos + 1;

        for chunk in &self.chunks[self.cursor..] {
            if chunk.left_range.is_empty() {
                if chunk.left_range.start >= next {
                    return chunk.right_range.start;
                }
                continue;
            }
            if chunk.left_range.contains(&next) {
                let offset = next - chunk.left_range.start;
                return (chunk.right_range.start + offset).min(chunk.right_range.end);
            }
            if chunk.left_range.start >= next {
                return chunk.right_range.start;
            }
        }

        side_len
    }
}

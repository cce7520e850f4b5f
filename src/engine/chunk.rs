use crate::engine::myers::{Edit, EditKind};
use derive_new::new;
use std::ops::Range;

/// Classification of a contiguous region between two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOperation {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// A contiguous change region of a two-way diff.
///
/// Chunks partition `[0, left_count)` and `[0, right_count)` exactly
/// and in order: for any two adjacent chunks the end of one range is
/// the start of the next, on both sides. `Insert` chunks have an empty
/// left range, `Delete` chunks an empty right range, and `Replace`
/// chunks have non-empty ranges on both sides that need not be of
/// equal length.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffChunk {
    pub operation: DiffOperation,
    pub left_range: Range<usize>,
    pub right_range: Range<usize>,
}

impl DiffChunk {
    pub fn left_len(&self) -> usize {
        self.left_range.len()
    }

    pub fn right_len(&self) -> usize {
        self.right_range.len()
    }
}

/// Groups an edit script and the untouched spans around it into
/// contiguous chunks.
///
/// Adjacent edits at the same cursor collapse into a single chunk: a
/// run containing both deletes and inserts becomes one `Replace`, a
/// one-sided run becomes `Delete` or `Insert`. Gaps between runs and
/// the common suffix are emitted as `Equal` chunks, and a final merge
/// pass guarantees no two consecutive chunks share an operation.
pub(crate) fn build_chunks(
    edits: &[Edit],
    left_count: usize,
    right_count: usize,
) -> Vec<DiffChunk> {
    if edits.is_empty() {
        if left_count == 0 && right_count == 0 {
            return Vec::new();
        }
        return vec![DiffChunk::new(
            DiffOperation::Equal,
            0..left_count,
            0..right_count,
        )];
    }

    let mut chunks = Vec::new();
    let (mut left_pos, mut right_pos) = (0, 0);
    let mut i = 0;

    while i < edits.len() {
        let edit = &edits[i];

        // Untouched span before the next edit
        if edit.left_index > left_pos || edit.right_index > right_pos {
            chunks.push(DiffChunk::new(
                DiffOperation::Equal,
                left_pos..edit.left_index,
                right_pos..edit.right_index,
            ));
            left_pos = edit.left_index;
            right_pos = edit.right_index;
        }

        // Maximal run of consecutive edits at the current cursor
        let (mut deletes, mut inserts) = (0, 0);
        while i < edits.len() {
            let edit = &edits[i];
            if edit.left_index != left_pos + deletes || edit.right_index != right_pos + inserts {
                break;
            }
            match edit.kind {
                EditKind::Delete => deletes += 1,
                EditKind::Insert => inserts += 1,
            }
            i += 1;
        }

        let operation = if deletes > 0 && inserts > 0 {
            DiffOperation::Replace
        } else if deletes > 0 {
            DiffOperation::Delete
        } else {
            DiffOperation::Insert
        };

        chunks.push(DiffChunk::new(
            operation,
            left_pos..left_pos + deletes,
            right_pos..right_pos + inserts,
        ));
        left_pos += deletes;
        right_pos += inserts;
    }

    // Common suffix
    if left_pos < left_count || right_pos < right_count {
        chunks.push(DiffChunk::new(
            DiffOperation::Equal,
            left_pos..left_count,
            right_pos..right_count,
        ));
    }

    merge_adjacent(chunks)
}

fn merge_adjacent(chunks: Vec<DiffChunk>) -> Vec<DiffChunk> {
    let mut merged: Vec<DiffChunk> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if let Some(last) = merged.last_mut()
            && last.operation == chunk.operation
            && last.left_range.end == chunk.left_range.start
            && last.right_range.end == chunk.right_range.start
        {
            last.left_range.end = chunk.left_range.end;
            last.right_range.end = chunk.right_range.end;
            continue;
        }
        merged.push(chunk);
    }

    merged
}

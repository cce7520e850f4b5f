use crate::commands::Printer;
use crate::engine::merge::{ThreeWayChunk, ThreeWayDiffResult, ThreeWayStatus};
use std::io::Write;

const CONFLICT_LEFT_MARKER: &str = "<<<<<<<";
const CONFLICT_SEPARATOR: &str = "=======";
const CONFLICT_RIGHT_MARKER: &str = ">>>>>>>";

impl Printer {
    /// Renders the merged content of a three-way diff: the changed
    /// side's lines where exactly one side changed, the base where
    /// nothing changed, and git-style conflict markers elsewhere.
    ///
    /// The engine emits one chunk per base line; adjacent chunks with
    /// the same status are coalesced here so each conflict produces a
    /// single marker block.
    pub fn print_merge(
        &self,
        result: &ThreeWayDiffResult,
        left_name: &str,
        right_name: &str,
    ) -> anyhow::Result<()> {
        for chunk in coalesce(&result.chunks) {
            match chunk.status {
                ThreeWayStatus::Unchanged => {
                    for line in &result.base_lines[chunk.base_range.clone()] {
                        writeln!(self.writer(), "{line}")?;
                    }
                }
                ThreeWayStatus::LeftChanged | ThreeWayStatus::BothChanged => {
                    for line in &result.left_lines[chunk.left_range.clone()] {
                        writeln!(self.writer(), "{line}")?;
                    }
                }
                ThreeWayStatus::RightChanged => {
                    for line in &result.right_lines[chunk.right_range.clone()] {
                        writeln!(self.writer(), "{line}")?;
                    }
                }
                ThreeWayStatus::Conflict => {
                    writeln!(self.writer(), "{CONFLICT_LEFT_MARKER} {left_name}")?;
                    for line in &result.left_lines[chunk.left_range.clone()] {
                        writeln!(self.writer(), "{line}")?;
                    }
                    writeln!(self.writer(), "{CONFLICT_SEPARATOR}")?;
                    for line in &result.right_lines[chunk.right_range.clone()] {
                        writeln!(self.writer(), "{line}")?;
                    }
                    writeln!(self.writer(), "{CONFLICT_RIGHT_MARKER} {right_name}")?;
                }
            }
        }

        Ok(())
    }
}

/// Merges adjacent chunks with the same status; ranges are contiguous
/// by construction, so extending the previous chunk suffices.
fn coalesce(chunks: &[ThreeWayChunk]) -> Vec<ThreeWayChunk> {
    let mut coalesced: Vec<ThreeWayChunk> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if let Some(last) = coalesced.last_mut()
            && last.status == chunk.status
        {
            last.base_range.end = chunk.base_range.end;
            last.left_range.end = chunk.left_range.end;
            last.right_range.end = chunk.right_range.end;
            continue;
        }
        coalesced.push(chunk.clone());
    }

    coalesced
}

use crate::commands::Printer;
use crate::engine::chunk::{DiffChunk, DiffOperation};
use crate::engine::diff::DiffResult;
use colored::Colorize;
use std::io::Write;
use std::ops::Range;

impl Printer {
    /// Renders a diff in unified style: bold file headers, cyan hunk
    /// headers, one hunk per non-equal chunk.
    pub fn print_diff(
        &self,
        result: &DiffResult,
        left_name: &str,
        right_name: &str,
    ) -> anyhow::Result<()> {
        if !result.has_changes() {
            return Ok(());
        }

        writeln!(self.writer(), "{}", format!("--- a/{left_name}").bold())?;
        writeln!(self.writer(), "{}", format!("+++ b/{right_name}").bold())?;

        for chunk in result
            .chunks
            .iter()
            .filter(|chunk| chunk.operation != DiffOperation::Equal)
        {
            self.print_diff_chunk(result, chunk)?;
        }

        Ok(())
    }

    /// Prints the `N insertions, M deletions, K modifications` summary.
    pub fn print_diff_stat(&self, result: &DiffResult) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} insertions(+), {} deletions(-), {} modifications(~)",
            result.insertions(),
            result.deletions(),
            result.modifications()
        )?;

        Ok(())
    }

    fn print_diff_chunk(&self, result: &DiffResult, chunk: &DiffChunk) -> anyhow::Result<()> {
        let left_offset = pretty_range(&chunk.left_range);
        let right_offset = pretty_range(&chunk.right_range);

        writeln!(
            self.writer(),
            "{}",
            format!("@@ -{left_offset} +{right_offset} @@").cyan()
        )?;

        for line in &result.left_lines[chunk.left_range.clone()] {
            writeln!(self.writer(), "{}", format!("-{line}").red())?;
        }
        for line in &result.right_lines[chunk.right_range.clone()] {
            writeln!(self.writer(), "{}", format!("+{line}").green())?;
        }

        Ok(())
    }
}

/// Formats a line range the way unified diff headers do: 1-based start
/// and length, with the 0-based anchor for empty ranges.
fn pretty_range(range: &Range<usize>) -> String {
    if range.is_empty() {
        format!("{},0", range.start)
    } else {
        format!("{},{}", range.start + 1, range.len())
    }
}

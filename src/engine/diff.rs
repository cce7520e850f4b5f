use crate::engine::chunk::{DiffChunk, DiffOperation, build_chunks};
use crate::engine::myers::MyersDiff;
use crate::engine::options::{ComparisonOptions, normalize};
use derive_new::new;

pub type LineSet = Vec<String>;

/// Immutable outcome of a two-way diff.
///
/// Carries the original, non-normalized line text of both sides, so
/// display always shows source content even when whitespace or case
/// was ignored for comparison. Counts are derived from the chunk list,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffResult {
    pub chunks: Vec<DiffChunk>,
    pub left_lines: LineSet,
    pub right_lines: LineSet,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.chunks
            .iter()
            .any(|chunk| chunk.operation != DiffOperation::Equal)
    }

    /// Number of lines added by `Insert` chunks.
    pub fn insertions(&self) -> usize {
        self.chunks
            .iter()
            .filter(|chunk| chunk.operation == DiffOperation::Insert)
            .map(DiffChunk::right_len)
            .sum()
    }

    /// Number of lines removed by `Delete` chunks.
    pub fn deletions(&self) -> usize {
        self.chunks
            .iter()
            .filter(|chunk| chunk.operation == DiffOperation::Delete)
            .map(DiffChunk::left_len)
            .sum()
    }

    /// Number of `Replace` chunks.
    pub fn modifications(&self) -> usize {
        self.chunks
            .iter()
            .filter(|chunk| chunk.operation == DiffOperation::Replace)
            .count()
    }
}

/// Computes the line diff between `left` and `right`.
///
/// Both sides are normalized according to `options` for comparison
/// only; the result wraps the original lines. Total over any pair of
/// inputs.
pub fn diff(left: &[String], right: &[String], options: &ComparisonOptions) -> DiffResult {
    let a = normalize(left, options);
    let b = normalize(right, options);

    let edits = MyersDiff::new(&a, &b).edit_script();
    let chunks = build_chunks(&edits, left.len(), right.len());

    DiffResult::new(chunks, left.to_vec(), right.to_vec())
}

#[cfg(test)]
mod tests {
    use super::{DiffResult, diff};
    use crate::engine::chunk::DiffOperation;
    use crate::engine::options::ComparisonOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    /// Applies the chunk operations to the left side: copy `Equal` and
    /// `Insert`/`Replace` spans from the right, drop `Delete` spans.
    fn reconstruct_right(result: &DiffResult) -> Vec<String> {
        result
            .chunks
            .iter()
            .flat_map(|chunk| result.right_lines[chunk.right_range.clone()].to_vec())
            .collect()
    }

    #[rstest]
    fn original_lines_are_kept_verbatim() {
        let left = lines(&["  Mixed Case  ", "two"]);
        let right = lines(&["mixed case", "two"]);
        let options = ComparisonOptions::new(true, true, false);

        let result = diff(&left, &right, &options);

        assert_eq!(result.left_lines, left);
        assert_eq!(result.right_lines, right);
        assert!(!result.has_changes());
    }

    #[rstest]
    fn identical_inputs_yield_a_single_equal_chunk() {
        let left = lines(&["one", "two", "three"]);

        let result = diff(&left, &left, &ComparisonOptions::default());

        assert!(!result.has_changes());
        assert_eq!(result.chunks.len(), 1);
        assert_eq!(result.chunks[0].operation, DiffOperation::Equal);
        assert_eq!(result.chunks[0].left_range, 0..3);
        assert_eq!(result.chunks[0].right_range, 0..3);
    }

    #[rstest]
    fn empty_inputs_yield_no_chunks() {
        let result = diff(&[], &[], &ComparisonOptions::default());

        assert!(!result.has_changes());
        assert_eq!(result.chunks, Vec::new());
    }

    #[rstest]
    fn single_insertion_is_counted_once() {
        let left = lines(&["line 1", "line 3"]);
        let right = lines(&["line 1", "line 2", "line 3"]);

        let result = diff(&left, &right, &ComparisonOptions::default());

        let inserts = result
            .chunks
            .iter()
            .filter(|c| c.operation == DiffOperation::Insert)
            .count();
        assert_eq!(inserts, 1);
        assert_eq!(result.insertions(), 1);
        assert_eq!(result.deletions(), 0);
    }

    #[rstest]
    fn disjoint_inputs_are_a_full_replace() {
        let left = lines(&["a", "b", "c"]);
        let right = lines(&["x", "y", "z"]);

        let result = diff(&left, &right, &ComparisonOptions::default());

        assert!(result.has_changes());
        assert_eq!(result.modifications(), 1);
        assert_eq!(result.chunks.len(), 1);
        assert_eq!(result.chunks[0].operation, DiffOperation::Replace);
    }

    #[rstest]
    fn whitespace_only_differences_vanish_under_ignore_whitespace() {
        let left = lines(&["  line 1  ", "line 2"]);
        let right = lines(&["line 1", "line 2"]);
        let options = ComparisonOptions::new(true, false, false);

        let result = diff(&left, &right, &options);

        assert!(!result.has_changes());
    }

    // Blank-line removal shortens the comparison sequence, so the
    // spanning chunk keeps the original extents on each side
    #[rstest]
    fn ignore_blank_lines_allows_unequal_equal_extents() {
        let left = lines(&["", "a"]);
        let right = lines(&["a"]);
        let options = ComparisonOptions::new(false, false, true);

        let result = diff(&left, &right, &options);

        assert!(!result.has_changes());
        assert_eq!(result.chunks.len(), 1);
        assert_eq!(result.chunks[0].operation, DiffOperation::Equal);
        assert_eq!(result.chunks[0].left_range, 0..2);
        assert_eq!(result.chunks[0].right_range, 0..1);
        assert_eq!(result.left_lines, left);
        assert_eq!(result.right_lines, right);
    }

    #[rstest]
    fn deletion_and_insertion_counts_are_independent() {
        let left = lines(&["keep", "drop me", "keep 2"]);
        let right = lines(&["keep", "keep 2", "added"]);

        let result = diff(&left, &right, &ComparisonOptions::default());

        assert_eq!(result.deletions(), 1);
        assert_eq!(result.insertions(), 1);
        assert_eq!(result.modifications(), 0);
    }

    #[rstest]
    fn chunk_ranges_reconstruct_the_right_side() {
        let left = lines(&["a", "b", "c", "d", "e"]);
        let right = lines(&["a", "x", "c", "e", "f"]);

        let result = diff(&left, &right, &ComparisonOptions::default());

        assert_eq!(reconstruct_right(&result), right);
    }

    mod properties {
        use super::{diff, lines, reconstruct_right};
        use crate::engine::options::ComparisonOptions;
        use proptest::prelude::*;

        fn line_soup() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-d]{0,2}", 0..12)
        }

        proptest! {
            #[test]
            fn chunks_partition_both_sides(left in line_soup(), right in line_soup()) {
                let result = diff(&left, &right, &ComparisonOptions::default());

                let mut left_pos = 0;
                let mut right_pos = 0;
                for chunk in &result.chunks {
                    prop_assert_eq!(chunk.left_range.start, left_pos);
                    prop_assert_eq!(chunk.right_range.start, right_pos);
                    left_pos = chunk.left_range.end;
                    right_pos = chunk.right_range.end;
                }
                prop_assert_eq!(left_pos, left.len());
                prop_assert_eq!(right_pos, right.len());
            }

            #[test]
            fn right_side_is_reconstructible(left in line_soup(), right in line_soup()) {
                let result = diff(&left, &right, &ComparisonOptions::default());

                prop_assert_eq!(reconstruct_right(&result), right);
            }

            #[test]
            fn input_lines_pass_through(left in line_soup(), right in line_soup()) {
                let result = diff(&left, &right, &ComparisonOptions::default());

                prop_assert_eq!(result.left_lines, left);
                prop_assert_eq!(result.right_lines, right);
            }

            #[test]
            fn equal_inputs_never_report_changes(input in line_soup()) {
                let result = diff(&input, &input, &ComparisonOptions::default());

                prop_assert!(!result.has_changes());
            }
        }

        #[test]
        fn reconstruction_also_holds_for_the_sample_inputs() {
            let left = lines(&["one", "two", "three", "four"]);
            let right = lines(&["two", "three fixed", "four", "five"]);

            let result = diff(&left, &right, &ComparisonOptions::default());

            assert_eq!(reconstruct_right(&result), right);
        }
    }
}

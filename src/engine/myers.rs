use derive_new::new;

/// A single unit move in the edit graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditKind {
    Insert,
    Delete,
}

/// One edit of the shortest edit script, addressed by position.
///
/// `left_index` is the cursor into the left sequence and `right_index`
/// the cursor into the right sequence at the moment the edit applies:
/// a `Delete` removes `left[left_index]`, an `Insert` inserts
/// `right[right_index]` before `left[left_index]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub(crate) struct Edit {
    pub(crate) kind: EditKind,
    pub(crate) left_index: usize,
    pub(crate) right_index: usize,
}

/// Myers' O((N+M)·D) shortest edit script computation.
///
/// The forward pass records the furthest-reaching x-coordinate per
/// diagonal `k` for each edit distance `d` in a trace; the backtrack
/// walks the trace from the end point and emits exactly one edit per
/// distance step. The diagonal map is a flat array indexed by
/// `k + offset` with `offset = n + m`, so negative diagonals need no
/// map allocation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub(crate) struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    /// Computes the shortest edit script, in ascending index order.
    pub(crate) fn edit_script(&self) -> Vec<Edit> {
        let (n, m) = (self.a.len(), self.b.len());

        // Degenerate inputs skip the graph search entirely
        if n == 0 {
            return (0..m)
                .map(|y| Edit::new(EditKind::Insert, 0, y))
                .collect();
        }
        if m == 0 {
            return (0..n)
                .map(|x| Edit::new(EditKind::Delete, x, 0))
                .collect();
        }
        if self.a == self.b {
            return Vec::new();
        }

        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }

    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // we could have only come from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    // we could have come from either k-1 (deletion) or k+1 (insertion)
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self, trace: &[Vec<isize>]) -> Vec<Edit> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edits = Vec::new();

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            // Same tie-break as the forward pass, so the reconstructed
            // path is the one actually taken
            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            // Diagonal run between the edit and the current point
            while x > prev_x && y > prev_y {
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                let kind = if x == prev_x {
                    EditKind::Insert
                } else {
                    EditKind::Delete
                };
                edits.push(Edit::new(kind, prev_x as usize, prev_y as usize));
            }

            (x, y) = (prev_x, prev_y);
        }

        edits.reverse();
        edits
    }
}

#[cfg(test)]
mod tests {
    use super::{Edit, EditKind, MyersDiff};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn file_inputs() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            vec!["line1", "line2", "line3", "line4"],
            vec!["line2", "line3_modified", "line4", "line5"],
        )
    }

    #[rstest]
    fn empty_inputs_produce_empty_script() {
        let a: Vec<&str> = Vec::new();
        let b: Vec<&str> = Vec::new();

        assert_eq!(MyersDiff::new(&a, &b).edit_script(), Vec::new());
    }

    #[rstest]
    fn identical_inputs_produce_empty_script() {
        let a = vec!["same", "lines"];

        assert_eq!(MyersDiff::new(&a, &a).edit_script(), Vec::new());
    }

    #[rstest]
    fn empty_left_side_produces_all_inserts() {
        let a: Vec<&str> = Vec::new();
        let b = vec!["one", "two"];

        let script = MyersDiff::new(&a, &b).edit_script();

        assert_eq!(
            script,
            vec![
                Edit::new(EditKind::Insert, 0, 0),
                Edit::new(EditKind::Insert, 0, 1),
            ]
        );
    }

    #[rstest]
    fn empty_right_side_produces_all_deletes() {
        let a = vec!["one", "two"];
        let b: Vec<&str> = Vec::new();

        let script = MyersDiff::new(&a, &b).edit_script();

        assert_eq!(
            script,
            vec![
                Edit::new(EditKind::Delete, 0, 0),
                Edit::new(EditKind::Delete, 1, 0),
            ]
        );
    }

    #[rstest]
    fn edit_script_matches_known_trace(file_inputs: (Vec<&'static str>, Vec<&'static str>)) {
        let (a, b) = file_inputs;

        let script = MyersDiff::new(&a, &b).edit_script();

        assert_eq!(
            script,
            vec![
                Edit::new(EditKind::Delete, 0, 0),
                Edit::new(EditKind::Delete, 2, 1),
                Edit::new(EditKind::Insert, 3, 1),
                Edit::new(EditKind::Insert, 4, 3),
            ]
        );
    }

    #[rstest]
    fn fully_disjoint_inputs_replace_everything() {
        let a = vec!["a", "b", "c"];
        let b = vec!["x", "y", "z"];

        let script = MyersDiff::new(&a, &b).edit_script();

        assert_eq!(script.len(), 6);
        let deletes = script
            .iter()
            .filter(|e| e.kind == EditKind::Delete)
            .count();
        assert_eq!(deletes, 3);
    }

    #[rstest]
    fn edits_are_in_ascending_index_order() {
        let a: Vec<char> = "abcabba".chars().collect();
        let b: Vec<char> = "cbabac".chars().collect();

        let script = MyersDiff::new(&a, &b).edit_script();

        let mut sorted = script.clone();
        sorted.sort_by_key(|e| (e.left_index, e.right_index));
        assert_eq!(script, sorted);
    }

    #[rstest]
    fn single_insertion_in_the_middle() {
        let a = vec!["line 1", "line 3"];
        let b = vec!["line 1", "line 2", "line 3"];

        let script = MyersDiff::new(&a, &b).edit_script();

        assert_eq!(script, vec![Edit::new(EditKind::Insert, 1, 1)]);
    }
}

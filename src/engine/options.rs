use derive_new::new;

/// Options controlling how two lines are considered equal.
///
/// All options default to `false` and compose freely. They only affect
/// the comparison view of each line; the original text is always kept
/// for display.
///
/// Note that `ignore_blank_lines` removes lines from the comparison
/// view, so the comparison sequence is shorter than the original one
/// and chunk ranges under this option are best-effort with respect to
/// original line numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct ComparisonOptions {
    /// Trim leading and trailing whitespace before comparing.
    pub ignore_whitespace: bool,
    /// Lowercase lines before comparing.
    pub ignore_case: bool,
    /// Drop lines that are blank after whitespace trimming.
    pub ignore_blank_lines: bool,
}

/// Produces the comparison view of `lines` under `options`.
///
/// Total over any input, including the empty sequence. With all
/// options off this is a plain copy.
pub fn normalize(lines: &[String], options: &ComparisonOptions) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !(options.ignore_blank_lines && line.trim().is_empty()))
        .map(|line| {
            let mut line = if options.ignore_whitespace {
                line.trim().to_string()
            } else {
                line.clone()
            };

            if options.ignore_case {
                line = line.to_lowercase();
            }

            line
        })
        .collect()
}

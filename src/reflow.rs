/// Measures rendered text width in logical pixels for the active editor
/// font. Injected so the wrapping algorithm is testable without a window;
/// the production implementation shapes through the gpui text system, which
/// is what keeps mixed Latin/CJK content honest (a character-count
/// heuristic is not).
pub trait TextMeasure {
    fn text_width(&mut self, text: &str, font_size: f32) -> f32;
}

/// Fixed horizontal reservations inside the editor pane, subtracted from
/// the pane width before wrapping: the line-number gutter, its gap, the
/// content padding on both sides, and a trailing reserve so wrapped lines
/// never kiss the right edge.
pub const GUTTER_WIDTH: f32 = 48.0;
pub const GUTTER_GAP: f32 = 8.0;
pub const CONTENT_PADDING: f32 = 16.0;
pub const TRAILING_RESERVE: f32 = 90.0;

/// Lower bound for the estimated pane width, so a not-yet-laid-out window
/// never produces a degenerate wrap.
pub const MIN_ESTIMATED_WIDTH: f32 = 600.0;

pub fn usable_text_width(pane_width: f32) -> f32 {
    pane_width - CONTENT_PADDING * 2.0 - GUTTER_WIDTH - GUTTER_GAP - TRAILING_RESERVE
}

/// Word-wraps logical lines into physical lines no wider than
/// `usable_width`, breaking only at whitespace. Blank lines pass through
/// untouched and are never merged with neighbors. Committed lines are
/// trimmed of trailing whitespace. A tie (exact fit) counts as fitting.
pub fn reflow(
    lines: &[&str],
    usable_width: f32,
    font_size: f32,
    measure: &mut dyn TextMeasure,
) -> Vec<String> {
    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        if line.trim().is_empty() {
            wrapped.push((*line).to_string());
        } else {
            wrapped.extend(split_long_line(line, usable_width, font_size, measure));
        }
    }
    wrapped
}

fn split_long_line(
    line: &str,
    usable_width: f32,
    font_size: f32,
    measure: &mut dyn TextMeasure,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for token in split_keeping_whitespace(line) {
        let mut candidate = current.clone();
        candidate.push_str(token);
        let width = measure.text_width(&candidate, font_size);
        if width > usable_width && !current.is_empty() {
            out.push(current.trim_end().to_string());
            current = token.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.trim().is_empty() {
        out.push(current.trim_end().to_string());
    }

    if out.is_empty() {
        // Nothing committed (e.g. a single token wider than the pane on an
        // empty candidate): emit the original line unsplit.
        out.push(line.to_string());
    }
    out
}

/// Splits into alternating word/whitespace runs, keeping the separators so
/// re-joined candidates preserve the author's spacing.
fn split_keeping_whitespace(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_is_space: Option<bool> = None;

    for (index, ch) in line.char_indices() {
        let is_space = ch.is_whitespace();
        match run_is_space {
            Some(current) if current == is_space => {}
            Some(_) => {
                tokens.push(&line[run_start..index]);
                run_start = index;
                run_is_space = Some(is_space);
            }
            None => run_is_space = Some(is_space),
        }
    }
    if run_start < line.len() {
        tokens.push(&line[run_start..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for font metrics: ASCII glyphs are 10px,
    /// everything else (CJK and friends) 20px.
    struct FakeMeasure;

    impl TextMeasure for FakeMeasure {
        fn text_width(&mut self, text: &str, _font_size: f32) -> f32 {
            text.chars()
                .map(|ch| if ch.is_ascii() { 10.0 } else { 20.0 })
                .sum()
        }
    }

    fn wrap(lines: &[&str], usable_width: f32) -> Vec<String> {
        reflow(lines, usable_width, 16.0, &mut FakeMeasure)
    }

    #[test]
    fn fits_two_words_per_line() {
        // "hello world" is 110px, "hello world foo" is 150px.
        assert_eq!(
            wrap(&["hello world foo"], 120.0),
            vec!["hello world", "foo"]
        );
    }

    #[test]
    fn committed_lines_have_no_trailing_whitespace() {
        for line in wrap(&["alpha beta gamma delta"], 120.0) {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn exact_fit_counts_as_fitting() {
        // "ab cd" measures exactly 50px.
        assert_eq!(wrap(&["ab cd"], 50.0), vec!["ab cd"]);
        assert_eq!(wrap(&["ab cd"], 49.0), vec!["ab", "cd"]);
    }

    #[test]
    fn blank_lines_pass_through_unmerged() {
        assert_eq!(
            wrap(&["aaaa bbbb", "", "cccc"], 50.0),
            vec!["aaaa", "bbbb", "", "cccc"]
        );
    }

    #[test]
    fn whitespace_only_lines_are_preserved_verbatim() {
        assert_eq!(wrap(&["  "], 40.0), vec!["  "]);
    }

    #[test]
    fn an_oversized_word_still_emits_a_line() {
        // The separator run that overflowed starts the next candidate.
        assert_eq!(
            wrap(&["abcdefghij klm"], 60.0),
            vec!["abcdefghij", " klm"]
        );
        // A single token wider than the pane is emitted unsplit.
        assert_eq!(wrap(&["abcdefghij"], 30.0), vec!["abcdefghij"]);
    }

    #[test]
    fn wide_glyphs_wrap_earlier() {
        // Three CJK glyphs measure 60px; an ASCII run of three is 30px.
        assert_eq!(wrap(&["她是 工程师"], 70.0), vec!["她是", "工程师"]);
    }

    #[test]
    fn inner_whitespace_runs_are_kept() {
        assert_eq!(wrap(&["a  b"], 100.0), vec!["a  b"]);
    }

    #[test]
    fn reflow_is_idempotent_for_unchanged_inputs() {
        let lines = ["hello world foo bar", "", "短句 和 长长的句子"];
        let first = wrap(&lines, 120.0);
        let second = wrap(&lines, 120.0);
        assert_eq!(first, second);
    }

    #[test]
    fn usable_width_subtracts_the_reservations() {
        let usable = usable_text_width(800.0);
        assert!(usable < 800.0 - GUTTER_WIDTH);
        assert_eq!(
            usable,
            800.0 - CONTENT_PADDING * 2.0 - GUTTER_WIDTH - GUTTER_GAP - TRAILING_RESERVE
        );
    }

    #[test]
    fn split_keeps_separators() {
        assert_eq!(
            split_keeping_whitespace("a b  c"),
            vec!["a", " ", "b", "  ", "c"]
        );
        assert_eq!(split_keeping_whitespace(""), Vec::<&str>::new());
        assert_eq!(split_keeping_whitespace(" x"), vec![" ", "x"]);
    }
}

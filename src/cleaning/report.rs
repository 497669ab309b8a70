use super::checksum::{check_cnpj, Verdict};
use super::normalize::{normalize_line, split_lines};
use std::fmt;

/// Options for a cleaning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Run the checksum on every non-empty token.
    pub validate: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// Result for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    pub cleaned_token: String,
    /// `None` for blank lines and when validation is off.
    pub verdict: Option<Verdict>,
}

impl LineResult {
    fn from_line(line: &str, options: CleanOptions) -> Self {
        let cleaned_token = normalize_line(line);
        let verdict = if options.validate && !cleaned_token.is_empty() {
            Some(check_cnpj(&cleaned_token))
        } else {
            None
        };

        Self {
            cleaned_token,
            verdict,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cleaned_token.is_empty()
    }

    /// Blank lines count as valid.
    pub fn is_valid(&self) -> bool {
        self.verdict.map_or(true, |v| v.is_valid())
    }
}

/// An invalid line and its 1-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLine<'a> {
    pub line_number: usize,
    pub token: &'a str,
    pub verdict: Verdict,
}

impl fmt::Display for InvalidLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line_number, self.token, self.verdict)
    }
}

/// Per-line results for a whole paste, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanReport {
    lines: Vec<LineResult>,
}

impl CleanReport {
    pub fn lines(&self) -> &[LineResult] {
        &self.lines
    }

    /// Non-empty tokens joined with `\n`, no trailing separator.
    pub fn cleaned_output(&self) -> String {
        self.tokens().collect::<Vec<_>>().join("\n")
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|l| !l.is_blank())
            .map(|l| l.cleaned_token.as_str())
    }

    /// One flag per line of [`cleaned_output`](Self::cleaned_output).
    pub fn validity_flags(&self) -> Vec<bool> {
        self.lines
            .iter()
            .filter(|l| !l.is_blank())
            .map(LineResult::is_valid)
            .collect()
    }

    pub fn invalid_lines(&self) -> impl Iterator<Item = InvalidLine<'_>> {
        self.lines.iter().enumerate().filter_map(|(i, l)| match l.verdict {
            Some(verdict) if !verdict.is_valid() => Some(InvalidLine {
                line_number: i + 1,
                token: l.cleaned_token.as_str(),
                verdict,
            }),
            _ => None,
        })
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_lines().count()
    }

    pub fn has_output(&self) -> bool {
        self.lines.iter().any(|l| !l.is_blank())
    }

    /// Warning for the user, or `None` when every line passed.
    pub fn warning(&self) -> Option<String> {
        invalid_warning(self.invalid_count())
    }
}

/// Singular/plural warning text for `count` invalid lines.
pub fn invalid_warning(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 invalid CNPJ detected".to_string()),
        n => Some(format!("{} invalid CNPJs detected", n)),
    }
}

/// Clean and validate raw pasted text.
pub fn clean_text(text: &str) -> CleanReport {
    clean_text_with(text, CleanOptions::default())
}

pub fn clean_text_with(text: &str, options: CleanOptions) -> CleanReport {
    let lines = split_lines(text)
        .map(|line| LineResult::from_line(line, options))
        .collect();
    CleanReport { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_line_paste() {
        let report = clean_text("12.345.678/0001-90\n\n11.444.777/0001-61");

        assert_eq!(report.lines().len(), 3);
        assert_eq!(
            report.cleaned_output(),
            "cgc 12345678000190\ncgc 11444777000161"
        );
        assert_eq!(report.validity_flags(), vec![false, true]);
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.warning().as_deref(), Some("1 invalid CNPJ detected"));
    }

    #[test]
    fn test_empty_input() {
        let report = clean_text("");
        assert_eq!(report.lines().len(), 1);
        assert_eq!(report.cleaned_output(), "");
        assert_eq!(report.invalid_count(), 0);
        assert!(report.warning().is_none());
        assert!(!report.has_output());
    }

    #[test]
    fn test_blank_lines_are_valid() {
        let report = clean_text("\n  \n");
        assert!(report.lines().iter().all(LineResult::is_valid));
        assert!(report.validity_flags().is_empty());
    }

    #[test]
    fn test_line_count_matches_input() {
        let report = clean_text("a\n\n\nb\n");
        assert_eq!(report.lines().len(), 5);
    }

    #[test]
    fn test_invalid_lines_keep_input_positions() {
        let report = clean_text("\n11444777000161\nabc\n\n1234");
        let invalid: Vec<_> = report.invalid_lines().collect();

        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].line_number, 3);
        assert_eq!(invalid[0].token, "cgc abc");
        assert_eq!(invalid[0].verdict, Verdict::WrongLength(0));
        assert_eq!(invalid[1].line_number, 5);
        assert_eq!(invalid[1].verdict, Verdict::WrongLength(4));
    }

    #[test]
    fn test_invalid_line_display() {
        let report = clean_text("11.444.777/0001-62");
        let line = report.invalid_lines().next().unwrap();
        assert_eq!(
            line.to_string(),
            "line 1: cgc 11444777000162 (second check digit is 2, expected 1)"
        );
    }

    #[test]
    fn test_plural_warning() {
        let report = clean_text("1\n2\n3");
        assert_eq!(report.warning().as_deref(), Some("3 invalid CNPJs detected"));
    }

    #[test]
    fn test_validation_disabled() {
        let options = CleanOptions { validate: false };
        let report = clean_text_with("1234\n11111111111111", options);

        assert_eq!(report.cleaned_output(), "cgc 1234\ncgc 11111111111111");
        assert_eq!(report.invalid_count(), 0);
        assert_eq!(report.validity_flags(), vec![true, true]);
        assert!(report.lines().iter().all(|l| l.verdict.is_none()));
    }

    #[test]
    fn test_crlf_paste_matches_lf_paste() {
        assert_eq!(
            clean_text("11.444.777/0001-61\r\n11.222.333/0001-81\r\n"),
            clean_text("11.444.777/0001-61\n11.222.333/0001-81\n")
        );
    }

    #[test]
    fn test_invalid_warning_counts() {
        assert_eq!(invalid_warning(0), None);
        assert_eq!(invalid_warning(2).as_deref(), Some("2 invalid CNPJs detected"));
    }
}

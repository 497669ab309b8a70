//! Non-interactive mode: clean a whole paste and print it.
//!
//! The cleaned text goes to `out` so it can be piped on unchanged. The
//! warning and the per-line reasons go to `err`.

use crate::cleaning::{clean_text_with, CleanOptions, CleanReport};
use crate::error::CleanerError;
use crate::input::ClipboardBackend;
use std::io::Write;
use tracing::{debug, info};

pub fn write_report<O: Write, E: Write>(
    report: &CleanReport,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    if report.has_output() {
        writeln!(out, "{}", report.cleaned_output())?;
    }
    out.flush()?;

    if let Some(warning) = report.warning() {
        writeln!(err, "warning: {}", warning)?;
        for line in report.invalid_lines() {
            writeln!(err, "  {}", line)?;
        }
    }
    Ok(())
}

/// Clean `text`, print it, optionally copy it, and return the report.
pub fn run<O: Write, E: Write>(
    text: &str,
    options: CleanOptions,
    clipboard: Option<&mut dyn ClipboardBackend>,
    out: &mut O,
    err: &mut E,
) -> Result<CleanReport, CleanerError> {
    let report = clean_text_with(text, options);
    debug!(
        lines = report.lines().len(),
        invalid = report.invalid_count(),
        "cleaned input"
    );

    write_report(&report, out, err)?;

    if let Some(clipboard) = clipboard {
        if report.has_output() {
            clipboard.set_text(&report.cleaned_output())?;
            info!("copied cleaned result to clipboard");
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MemoryClipboard;

    fn run_to_strings(text: &str, options: CleanOptions) -> (String, String, CleanReport) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = run(text, options, None, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            report,
        )
    }

    #[test]
    fn test_batch_prints_cleaned_text_and_warning() {
        let (out, err, report) = run_to_strings(
            "12.345.678/0001-90\n\n11.444.777/0001-61\n",
            CleanOptions::default(),
        );

        assert_eq!(out, "cgc 12345678000190\ncgc 11444777000161\n");
        assert_eq!(
            err,
            "warning: 1 invalid CNPJ detected\n  line 1: cgc 12345678000190 (second check digit is 0, expected 5)\n"
        );
        assert_eq!(report.invalid_count(), 1);
    }

    #[test]
    fn test_batch_empty_input_prints_nothing() {
        let (out, err, _) = run_to_strings("", CleanOptions::default());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_batch_without_validation_has_no_warning() {
        let (out, err, _) = run_to_strings("1234", CleanOptions { validate: false });
        assert_eq!(out, "cgc 1234\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_batch_copies_to_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        let mut err = Vec::new();

        run(
            "11.444.777/0001-61",
            CleanOptions::default(),
            Some(&mut clipboard),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("cgc 11444777000161"));
    }

    #[test]
    fn test_batch_copy_failure_is_reported() {
        let mut clipboard = MemoryClipboard::failing("no display");
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = run(
            "11.444.777/0001-61",
            CleanOptions::default(),
            Some(&mut clipboard),
            &mut out,
            &mut err,
        );

        assert!(matches!(result, Err(CleanerError::Input(_))));
        // The cleaned text was already printed before the copy failed.
        assert_eq!(String::from_utf8(out).unwrap(), "cgc 11444777000161\n");
    }
}

/// Literal prefix applied to every non-empty cleaned line.
pub const TAG: &str = "cgc ";

/// Formatting characters removed from a pasted line.
pub const STRIPPED_CHARS: [char; 5] = ['.', ',', '/', '-', ' '];

fn is_formatting(c: char) -> bool {
    STRIPPED_CHARS.contains(&c)
}

/// Remove the formatting characters from a line, keeping everything else.
///
/// Letters and other stray characters survive on purpose so the checksum
/// step can flag the line instead of the text being silently altered.
pub fn strip_formatting(line: &str) -> String {
    line.chars().filter(|&c| !is_formatting(c)).collect()
}

/// Turn one raw line into its canonical token.
///
/// Returns an empty string when nothing is left after stripping,
/// otherwise [`TAG`] followed by the stripped remainder.
pub fn normalize_line(line: &str) -> String {
    let stripped = strip_formatting(line);
    if stripped.is_empty() {
        return String::new();
    }

    let mut token = String::with_capacity(TAG.len() + stripped.len());
    token.push_str(TAG);
    token.push_str(&stripped);
    token
}

/// Split raw input into lines on `\n`, dropping one trailing `\r` per line.
///
/// Always yields at least one line, so an empty input is a single blank line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

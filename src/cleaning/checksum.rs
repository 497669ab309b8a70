use std::fmt;

/// Number of digits in a CNPJ, check digits included.
pub const CNPJ_LENGTH: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Outcome of checking one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Digit count after stripping non-digits.
    WrongLength(usize),
    RepeatedDigits,
    FirstCheckDigit { expected: u8, found: u8 },
    SecondCheckDigit { expected: u8, found: u8 },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::WrongLength(n) => {
                write!(f, "expected {} digits, found {}", CNPJ_LENGTH, n)
            }
            Verdict::RepeatedDigits => write!(f, "all digits identical"),
            Verdict::FirstCheckDigit { expected, found } => {
                write!(f, "first check digit is {}, expected {}", found, expected)
            }
            Verdict::SecondCheckDigit { expected, found } => {
                write!(f, "second check digit is {}, expected {}", found, expected)
            }
        }
    }
}

/// Keep only ASCII digits, as numeric values.
fn digits_of(token: &str) -> Vec<u8> {
    token
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Weighted mod-11 check digit over `digits`.
fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| d as u32 * w)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Check a token and report why it fails, if it does.
///
/// Every non-digit is ignored first, so the `cgc ` tag and leftover
/// punctuation are tolerated. The second check digit is only computed
/// once the first one matches.
pub fn check_cnpj(token: &str) -> Verdict {
    let digits = digits_of(token);
    if digits.len() != CNPJ_LENGTH {
        return Verdict::WrongLength(digits.len());
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return Verdict::RepeatedDigits;
    }

    let first = check_digit(&digits[..12], &FIRST_WEIGHTS);
    if first != digits[12] {
        return Verdict::FirstCheckDigit {
            expected: first,
            found: digits[12],
        };
    }

    let second = check_digit(&digits[..13], &SECOND_WEIGHTS);
    if second != digits[13] {
        return Verdict::SecondCheckDigit {
            expected: second,
            found: digits[13],
        };
    }

    Verdict::Valid
}

pub fn is_valid_cnpj(token: &str) -> bool {
    check_cnpj(token).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cnpj() {
        assert_eq!(check_cnpj("11444777000161"), Verdict::Valid);
        assert!(is_valid_cnpj("11222333000181"));
        assert!(is_valid_cnpj("12345678000195"));
    }

    #[test]
    fn test_tag_and_punctuation_are_tolerated() {
        assert!(is_valid_cnpj("cgc 11444777000161"));
        assert!(is_valid_cnpj("11.444.777/0001-61"));
    }

    #[test]
    fn test_letters_are_ignored_by_digit_mask() {
        assert!(is_valid_cnpj("cgc CNPJ11444777000161"));
    }

    #[test]
    fn test_last_digit_mutation_fails_second_check() {
        assert_eq!(
            check_cnpj("11.444.777/0001-62"),
            Verdict::SecondCheckDigit {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_thirteenth_digit_mutation_short_circuits() {
        assert_eq!(
            check_cnpj("11444777000171"),
            Verdict::FirstCheckDigit {
                expected: 6,
                found: 7
            }
        );
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert_eq!(check_cnpj(""), Verdict::WrongLength(0));
        assert_eq!(check_cnpj("1144477700016"), Verdict::WrongLength(13));
        assert_eq!(check_cnpj("114447770001610"), Verdict::WrongLength(15));
    }

    #[test]
    fn test_repeated_digits_are_invalid() {
        for d in 0..=9u8 {
            let token: String = std::iter::repeat((b'0' + d) as char)
                .take(CNPJ_LENGTH)
                .collect();
            assert_eq!(check_cnpj(&token), Verdict::RepeatedDigits, "{}", token);
        }
    }

    #[test]
    fn test_first_remainder_below_two_gives_zero() {
        // First weighted sum is a multiple of 11.
        assert!(is_valid_cnpj("10000008000101"));
    }

    #[test]
    fn test_second_remainder_below_two_gives_zero() {
        assert!(is_valid_cnpj("10000001000190"));
        assert!(is_valid_cnpj("10000010000180"));
    }

    #[test]
    fn test_check_digit_rule() {
        assert_eq!(check_digit(&[1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1], &FIRST_WEIGHTS), 6);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            Verdict::WrongLength(3).to_string(),
            "expected 14 digits, found 3"
        );
        assert_eq!(
            Verdict::SecondCheckDigit {
                expected: 1,
                found: 2
            }
            .to_string(),
            "second check digit is 2, expected 1"
        );
    }
}

//! Rupee amount to English words conversion
//!
//! Uses the Indian numbering system (thousand, lakh) rather than the Western
//! million/billion ladder. The conversion covers whole rupees only; paise are
//! dropped before converting.

use crate::models::Money;

/// Sentinel returned for amounts of one crore (1e7 rupees) or more
pub const AMOUNT_TOO_LARGE: &str = "Amount too large";

/// Upper bound (exclusive) for a words expansion, in rupees
pub const WORDS_LIMIT: u64 = 10_000_000;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a money amount to English words
///
/// The amount is truncated toward zero to whole rupees first; negative
/// amounts clamp to zero. Zero produces the empty string, which callers
/// treat as "not yet computed" rather than rendering a zero amount.
pub fn amount_in_words(amount: Money) -> String {
    rupees_in_words(amount.rupees().max(0) as u64)
}

/// Convert a whole rupee count to English words
///
/// Non-empty results always end with "Only". At or above [`WORDS_LIMIT`]
/// the fixed [`AMOUNT_TOO_LARGE`] sentinel is returned instead of an
/// expansion, with no suffix.
pub fn rupees_in_words(rupees: u64) -> String {
    if rupees >= WORDS_LIMIT {
        return AMOUNT_TOO_LARGE.to_string();
    }
    if rupees == 0 {
        return String::new();
    }

    let mut words = Vec::new();
    collect_words(rupees, &mut words);
    words.push("Only");
    words.join(" ")
}

/// Recursively break a number into place-value bands, pushing one word per
/// token
fn collect_words(n: u64, out: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=19 => out.push(ONES[n as usize]),
        20..=99 => {
            out.push(TENS[(n / 10) as usize]);
            collect_words(n % 10, out);
        }
        100..=999 => {
            out.push(ONES[(n / 100) as usize]);
            out.push("Hundred");
            collect_words(n % 100, out);
        }
        1_000..=99_999 => {
            collect_words(n / 1_000, out);
            out.push("Thousand");
            collect_words(n % 1_000, out);
        }
        _ => {
            collect_words(n / 100_000, out);
            out.push("Lakh");
            collect_words(n % 100_000, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(rupees_in_words(0), "");
        assert_eq!(amount_in_words(Money::zero()), "");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(rupees_in_words(1), "One Only");
        assert_eq!(rupees_in_words(13), "Thirteen Only");
        assert_eq!(rupees_in_words(20), "Twenty Only");
        assert_eq!(rupees_in_words(45), "Forty Five Only");
        assert_eq!(rupees_in_words(99), "Ninety Nine Only");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(rupees_in_words(100), "One Hundred Only");
        assert_eq!(rupees_in_words(205), "Two Hundred Five Only");
        assert_eq!(rupees_in_words(999), "Nine Hundred Ninety Nine Only");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(
            rupees_in_words(1234),
            "One Thousand Two Hundred Thirty Four Only"
        );
        assert_eq!(rupees_in_words(10_000), "Ten Thousand Only");
        assert_eq!(
            rupees_in_words(99_999),
            "Ninety Nine Thousand Nine Hundred Ninety Nine Only"
        );
    }

    #[test]
    fn test_lakhs() {
        assert_eq!(rupees_in_words(100_000), "One Lakh Only");
        assert_eq!(
            rupees_in_words(1_50_000),
            "One Lakh Fifty Thousand Only"
        );
        assert_eq!(
            rupees_in_words(9_999_999),
            "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Only"
        );
    }

    #[test]
    fn test_too_large() {
        assert_eq!(rupees_in_words(10_000_000), AMOUNT_TOO_LARGE);
        assert_eq!(rupees_in_words(u64::MAX), AMOUNT_TOO_LARGE);
    }

    #[test]
    fn test_paise_truncated() {
        assert_eq!(amount_in_words(Money::from_paise(1299)), "Twelve Only");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(amount_in_words(Money::from_paise(-5000)), "");
    }
}

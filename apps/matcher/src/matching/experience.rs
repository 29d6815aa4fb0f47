//! Experience extraction — largest "N years" figure stated in a text.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<number>[.<number>] [+] year[s]`, case-insensitive.
static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*\+?\s*years?").expect("years pattern compiles"));

/// Returns the maximum years value mentioned, or 0.0 when none is found.
///
/// Purely lexical: "1000 years" is accepted as-is.
pub fn extract_experience_years(text: &str) -> f64 {
    YEARS_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .fold(0.0_f64, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_of_plus_and_decimal() {
        assert_eq!(extract_experience_years("3+ years, then 1.5 years"), 3.0);
    }

    #[test]
    fn test_no_mention_is_zero() {
        assert_eq!(extract_experience_years("no experience mentioned"), 0.0);
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(extract_experience_years(""), 0.0);
    }

    #[test]
    fn test_singular_year_and_case() {
        assert_eq!(extract_experience_years("1 YEAR as intern"), 1.0);
    }

    #[test]
    fn test_decimal_parsed() {
        assert_eq!(extract_experience_years("about 2.5 years in data"), 2.5);
    }

    #[test]
    fn test_spacing_around_plus() {
        assert_eq!(extract_experience_years("7 + years leading teams"), 7.0);
        assert_eq!(extract_experience_years("4+years"), 4.0);
    }

    #[test]
    fn test_implausible_values_not_filtered() {
        assert_eq!(extract_experience_years("1000 years of history"), 1000.0);
    }

    #[test]
    fn test_number_without_unit_ignored() {
        assert_eq!(extract_experience_years("managed 12 engineers for 2 years"), 2.0);
    }

    #[test]
    fn test_idempotent() {
        let text = "5 years backend, 3 years frontend";
        assert_eq!(
            extract_experience_years(text),
            extract_experience_years(text)
        );
    }
}

//! Short code generation and validation utilities.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Accepted short code shape: 6 to 8 ASCII letters or digits.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code regex is valid"));

/// Generates a random short code.
///
/// Draws [`GENERATED_CODE_LENGTH`] characters uniformly, with replacement,
/// from `[A-Za-z0-9]` using the thread-local RNG. The result always passes
/// [`is_valid_code`]. Uniqueness is not checked here; a collision is reported
/// by the store when the link is inserted.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::{generate_code, is_valid_code};
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Checks a candidate short code.
///
/// Valid codes are 6-8 characters long and consist only of ASCII letters and
/// digits. Case is preserved and both cases are accepted.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::is_valid_code;
///
/// assert!(is_valid_code("abc123"));
/// assert!(is_valid_code("ABCd1234"));
/// assert!(!is_valid_code("ab"));
/// assert!(!is_valid_code("test@123"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_always_valid() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_valid_code(&code), "generated invalid code {code:?}");
        }
    }

    #[test]
    fn test_generate_code_spread() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() >= 90, "only {} distinct codes", codes.len());
    }

    #[test]
    fn test_generate_code_uses_mixed_alphabet() {
        let joined: String = (0..200).map(|_| generate_code()).collect();
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_validate_accepts_boundary_lengths() {
        assert!(is_valid_code("abc123"));
        assert!(is_valid_code("abcd123"));
        assert!(is_valid_code("abcd1234"));
    }

    #[test]
    fn test_validate_accepts_mixed_case() {
        assert!(is_valid_code("AbCdEf"));
        assert!(is_valid_code("ZZZZZZZZ"));
        assert!(is_valid_code("123456"));
    }

    #[test]
    fn test_validate_too_short() {
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("a"));
        assert!(!is_valid_code("abc12"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(!is_valid_code("abcd12345"));
        assert!(!is_valid_code("abcdefghijklmnop"));
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(!is_valid_code("test@123"));
        assert!(!is_valid_code("my-code1"));
        assert!(!is_valid_code("my_code1"));
        assert!(!is_valid_code("abc.123"));
    }

    #[test]
    fn test_validate_whitespace() {
        assert!(!is_valid_code("abc 123"));
        assert!(!is_valid_code(" abc123"));
        assert!(!is_valid_code("abc123\n"));
    }

    #[test]
    fn test_validate_non_ascii() {
        assert!(!is_valid_code("abcdéf"));
        assert!(!is_valid_code("ａｂｃ１２３"));
        assert!(!is_valid_code("abc١٢٣"));
    }
}

//! Text tokenizer and token validator.
//!
//! Pipeline: split on ASCII space runs → validate (reject control bytes).
//!
//! Unlike a Unicode-aware tokenizer, this is a byte-oriented split on 0x20;
//! it does not lowercase, stem, or strip punctuation. That keeps indexing
//! and query parsing symmetric: the same `split`/`validate` pair is used by
//! both `AddDocument` and the query parser.

use kwsearch_core::SearchError;

/// Split `text` on runs of ASCII space (0x20). Empty runs are suppressed;
/// tokens preserve all non-space bytes as-is.
///
/// # Example
///
/// ```
/// use kwsearch_engine::tokenizer::split;
///
/// assert_eq!(split("cat  in the  city"), vec!["cat", "in", "the", "city"]);
/// ```
pub fn split(text: &str) -> Vec<&str> {
    text.split(' ').filter(|s| !s.is_empty()).collect()
}

/// Reject a token containing a control character (any byte `b` with
/// `0x00 <= b < 0x20`).
///
/// # Example
///
/// ```
/// use kwsearch_engine::tokenizer::validate;
///
/// assert!(validate("city").is_ok());
/// assert!(validate("city\t").is_err());
/// ```
pub fn validate(token: &str) -> Result<(), SearchError> {
    if token.bytes().any(|b| b < 0x20) {
        return Err(SearchError::InvalidToken(token.to_string()));
    }
    Ok(())
}

/// Split and validate in one pass; fails on the first invalid token.
pub fn split_and_validate(text: &str) -> Result<Vec<&str>, SearchError> {
    let tokens = split(text);
    for t in &tokens {
        validate(t)?;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_space_runs() {
        assert_eq!(split("one  two   three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn leading_trailing_spaces_suppressed() {
        assert_eq!(split("  cat  "), vec!["cat"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(split("").is_empty());
        assert!(split("    ").is_empty());
    }

    #[test]
    fn preserves_non_space_bytes_as_is() {
        assert_eq!(split("CamelCase -minus punct!"), vec!["CamelCase", "-minus", "punct!"]);
    }

    #[test]
    fn validate_rejects_control_bytes() {
        assert!(validate("tab\ttab").is_err());
        assert!(validate("newline\nhere").is_err());
        assert!(validate("\u{0}null").is_err());
    }

    #[test]
    fn validate_accepts_printable_ascii_and_utf8() {
        assert!(validate("hello").is_ok());
        assert!(validate("caf\u{e9}").is_ok());
    }

    #[test]
    fn split_and_validate_fails_on_first_bad_token() {
        assert!(split_and_validate("good bad\ttoken").is_err());
    }
}

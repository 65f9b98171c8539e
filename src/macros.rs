//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without an annotation
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$annotation` - Optional comment text; omit for non-comment tokens
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumericLiteral, "42".to_string());
/// let comment = MK_TOKEN!(TokenKind::Comment, text.clone(), Some(text));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
            annotation: None,
        }
    };
    ($kind:expr, $value:expr, $annotation:expr) => {
        Token {
            kind: $kind,
            value: $value,
            annotation: $annotation,
        }
    };
}

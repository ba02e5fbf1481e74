//! Error types for JSON decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a JSON document.
///
/// Decoding is fail-fast: the first error encountered anywhere in the
/// recursive descent is returned immediately and any partially built tree is
/// discarded. Variants carry the offending character or token where one
/// exists; there is no line/column tracking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document was empty or contained only whitespace.
    #[error("document is empty or contains only whitespace")]
    InvalidInput,

    /// A character that matches no grammar production at this position.
    /// Also raised for root-level bare scalars: only objects and arrays are
    /// accepted at the document root.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// Input ran out while a token, string, or structure was still open.
    #[error("input ended unexpectedly")]
    UnexpectedEnd,

    /// An object member did not start with a quoted key.
    #[error("expected '\"' to open an object key, found '{0}'")]
    ExpectedString(char),

    /// An object key was not followed by ':'.
    #[error("expected ':' after object key")]
    MissingColon,

    /// A backslash escape other than `\\`, `\n`, `\r`, `\t`, `\"`.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// A bare token starting with `t`/`f`/`n` that is not exactly `true`,
    /// `false`, or `null`.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),

    /// A numeric token with more than one decimal point, or one that does
    /// not fit the target representation.
    #[error("malformed number")]
    MalformedNumber,

    /// Nesting exceeded the configured depth limit.
    #[error("nesting depth exceeds the limit of {0}")]
    NestingTooDeep(usize),
}

/// Convenience alias used throughout lax-json.
pub type Result<T> = std::result::Result<T, ParseError>;

//! # hslight Syntax
//!
//! Haskell language support for syntax highlighting.
//!
//! ## Pipeline
//!
//! ```text
//! source text ──► HaskellLexer ──► Token { kind, span }
//!                                        │
//!                                        ▼
//!                       HaskellSyntaxHighlighter::token_highlights
//!                                        │
//!                                        ▼
//!                              Option<HighlightKey>
//! ```
//!
//! The lexer works over Haskell 2010 lexical syntax and never fails; the
//! classifier is a pure function from token kind to highlight key. Turning
//! keys into actual colors is left to the consumer (see `hslight-core`).
//!
//! ## Example
//!
//! ```
//! use hslight_syntax::{HaskellSyntaxHighlighter, HighlightKey};
//!
//! let spans = HaskellSyntaxHighlighter::new().highlight("x = 42");
//! assert_eq!(spans[2].key, HighlightKey::Number);
//! ```

mod highlighter;
mod language;
mod lexer;
mod token;

pub use highlighter::{
    DefaultColor, HaskellSyntaxHighlighter, HighlightKey, HighlightSpan, SyntaxHighlighter,
};
pub use language::{FileType, HASKELL, HASKELL_FILE, Language};
pub use lexer::{HaskellLexer, LexerState, Tokens};
pub use token::{
    COMMENTS, RESERVED_IDS, RESERVED_OPS, SPECIAL_RESERVED_OPS, Span, Token, TokenKind, TokenSet,
};

/// Errors raised by the syntax crate.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unknown highlight key: {0}")]
    UnknownHighlightKey(String),
}

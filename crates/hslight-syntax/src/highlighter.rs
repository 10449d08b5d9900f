//! Token classification for syntax highlighting.
//!
//! ## How Classification Works
//!
//! [`HaskellSyntaxHighlighter::token_highlights`] runs an ordered chain of
//! checks against the constant token sets; the first match wins and an
//! unmatched kind yields `None` (no highlighting). Every [`HighlightKey`]
//! names a [`DefaultColor`] it falls back to when a color scheme does not
//! override it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::lexer::HaskellLexer;
use crate::token::{COMMENTS, RESERVED_IDS, RESERVED_OPS, SPECIAL_RESERVED_OPS, Token, TokenKind};
use crate::SyntaxError;

/// Display-color category assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HighlightKey {
    #[serde(rename = "HS_ILLEGAL")]
    Illegal,
    #[serde(rename = "HS_COMMENT")]
    Comment,
    #[serde(rename = "HS_STRING")]
    String,
    #[serde(rename = "HS_NUMBER")]
    Number,
    #[serde(rename = "HS_KEYWORD")]
    Keyword,
    #[serde(rename = "HS_OPERATOR")]
    Operator,
    #[serde(rename = "HS_PARENTHESES")]
    Parentheses,
    #[serde(rename = "HS_BRACE")]
    Brace,
    #[serde(rename = "HS_BRACKET")]
    Bracket,
    #[serde(rename = "HS_SYMBOL")]
    Symbol,
    #[serde(rename = "HS_CONSTRUCTOR")]
    Constructor,
}

impl HighlightKey {
    pub const ALL: &'static [HighlightKey] = &[
        HighlightKey::Illegal,
        HighlightKey::Comment,
        HighlightKey::String,
        HighlightKey::Number,
        HighlightKey::Keyword,
        HighlightKey::Operator,
        HighlightKey::Parentheses,
        HighlightKey::Brace,
        HighlightKey::Bracket,
        HighlightKey::Symbol,
        HighlightKey::Constructor,
    ];

    /// Stable name used in color-scheme configuration.
    pub fn external_name(self) -> &'static str {
        match self {
            HighlightKey::Illegal => "HS_ILLEGAL",
            HighlightKey::Comment => "HS_COMMENT",
            HighlightKey::String => "HS_STRING",
            HighlightKey::Number => "HS_NUMBER",
            HighlightKey::Keyword => "HS_KEYWORD",
            HighlightKey::Operator => "HS_OPERATOR",
            HighlightKey::Parentheses => "HS_PARENTHESES",
            HighlightKey::Brace => "HS_BRACE",
            HighlightKey::Bracket => "HS_BRACKET",
            HighlightKey::Symbol => "HS_SYMBOL",
            HighlightKey::Constructor => "HS_CONSTRUCTOR",
        }
    }

    /// The generic editor color this key inherits by default.
    pub fn fallback(self) -> DefaultColor {
        match self {
            HighlightKey::Illegal => DefaultColor::InvalidStringEscape,
            HighlightKey::Comment => DefaultColor::LineComment,
            HighlightKey::String => DefaultColor::String,
            HighlightKey::Number => DefaultColor::Number,
            HighlightKey::Keyword => DefaultColor::Keyword,
            HighlightKey::Operator => DefaultColor::OperationSign,
            HighlightKey::Parentheses => DefaultColor::Parentheses,
            HighlightKey::Brace => DefaultColor::Braces,
            HighlightKey::Bracket => DefaultColor::Brackets,
            HighlightKey::Symbol => DefaultColor::Identifier,
            HighlightKey::Constructor => DefaultColor::FunctionDeclaration,
        }
    }
}

impl fmt::Display for HighlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.external_name())
    }
}

impl FromStr for HighlightKey {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HighlightKey::ALL
            .iter()
            .copied()
            .find(|key| key.external_name() == s)
            .ok_or_else(|| SyntaxError::UnknownHighlightKey(s.to_string()))
    }
}

/// Language-independent editor colors that highlight keys inherit from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultColor {
    InvalidStringEscape,
    LineComment,
    String,
    Number,
    Keyword,
    OperationSign,
    Parentheses,
    Braces,
    Brackets,
    Identifier,
    FunctionDeclaration,
}

impl DefaultColor {
    pub const ALL: &'static [DefaultColor] = &[
        DefaultColor::InvalidStringEscape,
        DefaultColor::LineComment,
        DefaultColor::String,
        DefaultColor::Number,
        DefaultColor::Keyword,
        DefaultColor::OperationSign,
        DefaultColor::Parentheses,
        DefaultColor::Braces,
        DefaultColor::Brackets,
        DefaultColor::Identifier,
        DefaultColor::FunctionDeclaration,
    ];
}

/// A highlighter for one language.
///
/// ## Learning: Associated Types
///
/// `type Lexer` lets each implementation hand out its own concrete lexer
/// without boxing, while callers still program against the trait.
pub trait SyntaxHighlighter {
    type Lexer;

    /// Returns a fresh lexer producing the tokens this highlighter classifies.
    fn highlighting_lexer(&self) -> Self::Lexer;

    /// Returns the highlight for a token kind, or `None` to leave it plain.
    fn token_highlights(&self, kind: TokenKind) -> Option<HighlightKey>;
}

/// A highlighted range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
    pub key: HighlightKey,
}

/// Syntax highlighter for Haskell.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaskellSyntaxHighlighter;

impl HaskellSyntaxHighlighter {
    pub fn new() -> Self {
        Self
    }

    /// Lexes and classifies `text`, merging adjacent spans with equal keys.
    pub fn highlight(&self, text: &str) -> Vec<HighlightSpan> {
        self.highlight_tokens(self.highlighting_lexer().tokenize(text), true)
    }

    /// Classifies an already lexed token stream.
    ///
    /// Unhighlighted tokens are dropped. With `merge_adjacent`, a span that
    /// starts where the previous one ended and has the same key extends it.
    pub fn highlight_tokens(
        &self,
        tokens: impl IntoIterator<Item = Token>,
        merge_adjacent: bool,
    ) -> Vec<HighlightSpan> {
        let mut spans: Vec<HighlightSpan> = Vec::new();
        for token in tokens {
            let Some(key) = self.token_highlights(token.kind) else {
                continue;
            };
            if merge_adjacent {
                if let Some(last) = spans.last_mut() {
                    if last.key == key && last.end == token.span.start {
                        last.end = token.span.end;
                        continue;
                    }
                }
            }
            spans.push(HighlightSpan {
                start: token.span.start,
                end: token.span.end,
                key,
            });
        }
        spans
    }
}

impl SyntaxHighlighter for HaskellSyntaxHighlighter {
    type Lexer = HaskellLexer;

    fn highlighting_lexer(&self) -> HaskellLexer {
        HaskellLexer::new()
    }

    fn token_highlights(&self, kind: TokenKind) -> Option<HighlightKey> {
        use TokenKind as T;

        if kind == T::BadCharacter {
            return Some(HighlightKey::Illegal);
        }
        if COMMENTS.contains(kind) {
            return Some(HighlightKey::Comment);
        }
        if matches!(kind, T::StringLiteral | T::CharacterLiteral) {
            return Some(HighlightKey::String);
        }
        if matches!(kind, T::Decimal | T::Float | T::Hexadecimal | T::Octal) {
            return Some(HighlightKey::Number);
        }
        if RESERVED_IDS.contains(kind) {
            return Some(HighlightKey::Keyword);
        }
        if RESERVED_OPS.contains(kind) || SPECIAL_RESERVED_OPS.contains(kind) {
            return Some(HighlightKey::Operator);
        }
        if matches!(kind, T::LeftParen | T::RightParen) {
            return Some(HighlightKey::Parentheses);
        }
        if matches!(kind, T::LeftBrace | T::RightBrace) {
            return Some(HighlightKey::Brace);
        }
        if matches!(kind, T::LeftBracket | T::RightBracket) {
            return Some(HighlightKey::Bracket);
        }
        if kind == T::VarId {
            return Some(HighlightKey::Symbol);
        }
        if kind == T::ConId {
            return Some(HighlightKey::Constructor);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn classify(kind: TokenKind) -> Option<HighlightKey> {
        HaskellSyntaxHighlighter::new().token_highlights(kind)
    }

    #[test]
    fn test_reserved_ids_are_keywords() {
        for kind in RESERVED_IDS.iter() {
            assert_eq!(classify(kind), Some(HighlightKey::Keyword), "{kind}");
        }
    }

    #[test]
    fn test_reserved_ops_are_operators() {
        for kind in RESERVED_OPS.iter().chain(SPECIAL_RESERVED_OPS.iter()) {
            assert_eq!(classify(kind), Some(HighlightKey::Operator), "{kind}");
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(classify(TokenKind::StringLiteral), Some(HighlightKey::String));
        assert_eq!(classify(TokenKind::CharacterLiteral), Some(HighlightKey::String));
        for kind in [
            TokenKind::Decimal,
            TokenKind::Float,
            TokenKind::Hexadecimal,
            TokenKind::Octal,
        ] {
            assert_eq!(classify(kind), Some(HighlightKey::Number), "{kind}");
        }
    }

    #[test]
    fn test_explicit_checks() {
        assert_eq!(classify(TokenKind::BadCharacter), Some(HighlightKey::Illegal));
        assert_eq!(classify(TokenKind::LineComment), Some(HighlightKey::Comment));
        assert_eq!(classify(TokenKind::BlockComment), Some(HighlightKey::Comment));
        assert_eq!(classify(TokenKind::LeftParen), Some(HighlightKey::Parentheses));
        assert_eq!(classify(TokenKind::RightBrace), Some(HighlightKey::Brace));
        assert_eq!(classify(TokenKind::LeftBracket), Some(HighlightKey::Bracket));
        assert_eq!(classify(TokenKind::VarId), Some(HighlightKey::Symbol));
        assert_eq!(classify(TokenKind::ConId), Some(HighlightKey::Constructor));
    }

    #[test]
    fn test_unrecognized_kinds_are_plain() {
        let plain: HashSet<_> = TokenKind::ALL
            .iter()
            .copied()
            .filter(|&kind| classify(kind).is_none())
            .collect();
        let expected: HashSet<_> = [
            TokenKind::VarSym,
            TokenKind::ConSym,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Backquote,
            TokenKind::Whitespace,
            TokenKind::Newline,
        ]
        .into_iter()
        .collect();
        assert_eq!(plain, expected);
    }

    #[test]
    fn test_external_names_round_trip() {
        for &key in HighlightKey::ALL {
            assert_eq!(key.external_name().parse::<HighlightKey>().unwrap(), key);
        }
        assert!("HS_UNKNOWN".parse::<HighlightKey>().is_err());
        assert!("hs_keyword".parse::<HighlightKey>().is_err());
    }

    #[test]
    fn test_serialized_key_matches_external_name() {
        for &key in HighlightKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.external_name()));
        }
    }

    #[test]
    fn test_fallbacks_are_distinct() {
        let fallbacks: HashSet<_> = HighlightKey::ALL.iter().map(|k| k.fallback()).collect();
        assert_eq!(fallbacks.len(), DefaultColor::ALL.len());
    }

    #[test]
    fn test_highlight_source() {
        let source = "main :: IO ()\nmain = putStrLn \"hi\" -- greet";
        let spans = HaskellSyntaxHighlighter::new().highlight(source);
        let described: Vec<_> = spans
            .iter()
            .map(|s| (&source[s.start..s.end], s.key))
            .collect();
        assert_eq!(
            described,
            vec![
                ("main", HighlightKey::Symbol),
                ("::", HighlightKey::Operator),
                ("IO", HighlightKey::Constructor),
                ("()", HighlightKey::Parentheses),
                ("main", HighlightKey::Symbol),
                ("=", HighlightKey::Operator),
                ("putStrLn", HighlightKey::Symbol),
                ("\"hi\"", HighlightKey::String),
                ("-- greet", HighlightKey::Comment),
            ]
        );
    }

    #[test]
    fn test_highlight_without_merging() {
        let highlighter = HaskellSyntaxHighlighter::new();
        let tokens = highlighter.highlighting_lexer().tokenize("[]");
        let spans = highlighter.highlight_tokens(tokens, false);
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.key == HighlightKey::Bracket));
    }
}

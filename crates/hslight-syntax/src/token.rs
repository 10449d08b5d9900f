//! Token kinds produced by the Haskell highlighting lexer.
//!
//! ## Learning: Closed Enums as Token Types
//!
//! A `Copy` enum gives every lexical unit a distinct, cheap-to-compare
//! identity. Grouping kinds into constant [`TokenSet`]s keeps the
//! classification rules declarative: the highlighter asks "is this kind in
//! the reserved-operator set?" instead of repeating long `match` arms.

use std::fmt;

/// A lexical unit recognized by the Haskell lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved identifiers
    Case,
    Class,
    Data,
    Default,
    Deriving,
    Do,
    Else,
    Foreign,
    If,
    Import,
    In,
    Infix,
    Infixl,
    Infixr,
    Instance,
    Let,
    Module,
    Newtype,
    Of,
    Then,
    Type,
    Where,
    Underscore,

    // Reserved operators
    /// `..`
    DotDot,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `=`
    Equals,
    /// `\`
    Backslash,
    /// `|`
    VerticalBar,
    /// `<-`
    LeftArrow,
    /// `->`
    RightArrow,
    /// `@`
    At,
    /// `~`
    Tilde,
    /// `=>`
    DoubleRightArrow,

    // Context keywords, only special inside import declarations
    As,
    Qualified,
    Hiding,

    // Literals
    StringLiteral,
    CharacterLiteral,
    Decimal,
    Float,
    Hexadecimal,
    Octal,

    // Names
    VarId,
    ConId,
    VarSym,
    ConSym,
    /// Module qualifier separator, or a lone `.` operator
    Dot,

    // Special characters
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Semicolon,
    Backquote,

    // Trivia
    LineComment,
    BlockComment,
    Whitespace,
    Newline,

    /// Input the lexer could not assign to any other kind.
    BadCharacter,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Case,
        TokenKind::Class,
        TokenKind::Data,
        TokenKind::Default,
        TokenKind::Deriving,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::Foreign,
        TokenKind::If,
        TokenKind::Import,
        TokenKind::In,
        TokenKind::Infix,
        TokenKind::Infixl,
        TokenKind::Infixr,
        TokenKind::Instance,
        TokenKind::Let,
        TokenKind::Module,
        TokenKind::Newtype,
        TokenKind::Of,
        TokenKind::Then,
        TokenKind::Type,
        TokenKind::Where,
        TokenKind::Underscore,
        TokenKind::DotDot,
        TokenKind::Colon,
        TokenKind::ColonColon,
        TokenKind::Equals,
        TokenKind::Backslash,
        TokenKind::VerticalBar,
        TokenKind::LeftArrow,
        TokenKind::RightArrow,
        TokenKind::At,
        TokenKind::Tilde,
        TokenKind::DoubleRightArrow,
        TokenKind::As,
        TokenKind::Qualified,
        TokenKind::Hiding,
        TokenKind::StringLiteral,
        TokenKind::CharacterLiteral,
        TokenKind::Decimal,
        TokenKind::Float,
        TokenKind::Hexadecimal,
        TokenKind::Octal,
        TokenKind::VarId,
        TokenKind::ConId,
        TokenKind::VarSym,
        TokenKind::ConSym,
        TokenKind::Dot,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Backquote,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::BadCharacter,
    ];

    /// Whether this token carries no meaning for the program text.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    /// Maps a lexed identifier to its reserved kind, if it has one.
    ///
    /// Covers both the reserved identifiers and the context keywords
    /// `as`, `qualified` and `hiding`.
    pub fn reserved_word(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "case" => TokenKind::Case,
            "class" => TokenKind::Class,
            "data" => TokenKind::Data,
            "default" => TokenKind::Default,
            "deriving" => TokenKind::Deriving,
            "do" => TokenKind::Do,
            "else" => TokenKind::Else,
            "foreign" => TokenKind::Foreign,
            "if" => TokenKind::If,
            "import" => TokenKind::Import,
            "in" => TokenKind::In,
            "infix" => TokenKind::Infix,
            "infixl" => TokenKind::Infixl,
            "infixr" => TokenKind::Infixr,
            "instance" => TokenKind::Instance,
            "let" => TokenKind::Let,
            "module" => TokenKind::Module,
            "newtype" => TokenKind::Newtype,
            "of" => TokenKind::Of,
            "then" => TokenKind::Then,
            "type" => TokenKind::Type,
            "where" => TokenKind::Where,
            "_" => TokenKind::Underscore,
            "as" => TokenKind::As,
            "qualified" => TokenKind::Qualified,
            "hiding" => TokenKind::Hiding,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps a complete symbol run to its reserved operator kind.
    pub fn reserved_op(text: &str) -> Option<TokenKind> {
        let kind = match text {
            ".." => TokenKind::DotDot,
            ":" => TokenKind::Colon,
            "::" => TokenKind::ColonColon,
            "=" => TokenKind::Equals,
            "\\" => TokenKind::Backslash,
            "|" => TokenKind::VerticalBar,
            "<-" => TokenKind::LeftArrow,
            "->" => TokenKind::RightArrow,
            "@" => TokenKind::At,
            "~" => TokenKind::Tilde,
            "=>" => TokenKind::DoubleRightArrow,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps a single special character to its kind.
    pub fn special(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '`' => TokenKind::Backquote,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An immutable set of token kinds.
#[derive(Debug, Clone, Copy)]
pub struct TokenSet(&'static [TokenKind]);

impl TokenSet {
    pub const fn new(kinds: &'static [TokenKind]) -> Self {
        Self(kinds)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.0.iter().copied()
    }
}

/// Reserved identifiers of Haskell 2010.
pub const RESERVED_IDS: TokenSet = TokenSet::new(&[
    TokenKind::Case,
    TokenKind::Class,
    TokenKind::Data,
    TokenKind::Default,
    TokenKind::Deriving,
    TokenKind::Do,
    TokenKind::Else,
    TokenKind::Foreign,
    TokenKind::If,
    TokenKind::Import,
    TokenKind::In,
    TokenKind::Infix,
    TokenKind::Infixl,
    TokenKind::Infixr,
    TokenKind::Instance,
    TokenKind::Let,
    TokenKind::Module,
    TokenKind::Newtype,
    TokenKind::Of,
    TokenKind::Then,
    TokenKind::Type,
    TokenKind::Where,
    TokenKind::Underscore,
]);

/// Reserved operators of Haskell 2010.
pub const RESERVED_OPS: TokenSet = TokenSet::new(&[
    TokenKind::DotDot,
    TokenKind::Colon,
    TokenKind::ColonColon,
    TokenKind::Equals,
    TokenKind::Backslash,
    TokenKind::VerticalBar,
    TokenKind::LeftArrow,
    TokenKind::RightArrow,
    TokenKind::At,
    TokenKind::Tilde,
    TokenKind::DoubleRightArrow,
]);

/// Identifiers with a reserved meaning in import declarations.
pub const SPECIAL_RESERVED_OPS: TokenSet =
    TokenSet::new(&[TokenKind::As, TokenKind::Qualified, TokenKind::Hiding]);

pub const COMMENTS: TokenSet = TokenSet::new(&[TokenKind::LineComment, TokenKind::BlockComment]);

/// A byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the start (inclusive)
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the source text covered by this span.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// A lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

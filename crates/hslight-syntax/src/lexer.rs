//! Highlighting lexer for Haskell 2010 lexical syntax.
//!
//! The lexer is total: every input, valid Haskell or not, is split into
//! contiguous non-empty tokens that cover it exactly. Anything that cannot be
//! classified becomes a [`TokenKind::BadCharacter`] token one character wide.
//!
//! ## Learning: Iterators with Borrowed Input
//!
//! [`Tokens`] borrows the source text (`&'a str`) and yields owned `Token`
//! values that only store byte offsets. No token text is copied; callers
//! slice the source with [`Span::slice`](crate::Span::slice) when needed.
//!
//! ## Restarting
//!
//! Nested block comments are the only construct tracked across restarts.
//! An editor relexing from a line boundary passes the [`LexerState`]
//! observed at the end of the previous line to [`HaskellLexer::tokenize_from`].

use crate::token::{Token, TokenKind};

/// Resumable lexer condition at a token boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerState {
    #[default]
    Initial,
    /// Inside `depth` levels of `{- ... -}`.
    BlockComment { depth: u32 },
}

/// Haskell highlighting lexer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaskellLexer;

impl HaskellLexer {
    pub fn new() -> Self {
        Self
    }

    /// Lexes `text` from the start of a document.
    pub fn tokenize<'a>(&self, text: &'a str) -> Tokens<'a> {
        self.tokenize_from(text, LexerState::Initial)
    }

    /// Lexes `text` as a continuation, starting in `state`.
    pub fn tokenize_from<'a>(&self, text: &'a str, state: LexerState) -> Tokens<'a> {
        let state = match state {
            LexerState::BlockComment { depth: 0 } => LexerState::Initial,
            state => state,
        };
        Tokens {
            source: text,
            pos: 0,
            state,
            qualifier_dot: false,
        }
    }
}

/// Iterator over the tokens of a source text.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    pos: usize,
    state: LexerState,
    /// Set after a constructor id that qualifies the following name.
    qualifier_dot: bool,
}

impl<'a> Tokens<'a> {
    /// The lexer state after the most recently returned token.
    pub fn state(&self) -> LexerState {
        self.state
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn lex_token(&mut self) -> TokenKind {
        if self.qualifier_dot {
            self.qualifier_dot = false;
            self.bump();
            return TokenKind::Dot;
        }

        let Some(c) = self.peek() else {
            return TokenKind::BadCharacter;
        };

        if let Some(kind) = TokenKind::special(c) {
            if c == '{' && self.rest().starts_with("{-") {
                self.pos += 2;
                return self.block_comment(1);
            }
            self.bump();
            return kind;
        }

        match c {
            '\n' => {
                self.bump();
                TokenKind::Newline
            }
            '\r' => {
                self.bump();
                if self.peek() == Some('\n') {
                    self.bump();
                }
                TokenKind::Newline
            }
            c if is_space(c) => {
                self.eat_while(is_space);
                TokenKind::Whitespace
            }
            '"' => self.string_literal(),
            '\'' => self.char_literal(),
            '0'..='9' => self.number(),
            c if is_small(c) => self.var_id(),
            c if c.is_uppercase() => self.con_id(),
            c if is_symbol(c) => self.symbol(),
            _ => {
                self.bump();
                TokenKind::BadCharacter
            }
        }
    }

    /// Consumes a block comment body, the opening `{-` already consumed.
    fn block_comment(&mut self, mut depth: u32) -> TokenKind {
        loop {
            let rest = self.rest();
            if rest.starts_with("{-") {
                depth += 1;
                self.pos += 2;
            } else if rest.starts_with("-}") {
                self.pos += 2;
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.state = LexerState::Initial;
                    return TokenKind::BlockComment;
                }
            } else if self.bump().is_none() {
                tracing::trace!(depth, "input ended inside block comment");
                self.state = LexerState::BlockComment { depth };
                return TokenKind::BlockComment;
            }
        }
    }

    fn string_literal(&mut self) -> TokenKind {
        self.bump();
        while let Some(c) = self.peek() {
            match c {
                '"' => {
                    self.bump();
                    return TokenKind::StringLiteral;
                }
                '\n' | '\r' => break,
                '\\' => {
                    self.bump();
                    match self.peek() {
                        // String gap: `\` whitespace `\`
                        Some(c) if c.is_whitespace() => {
                            self.eat_while(char::is_whitespace);
                            if self.peek() == Some('\\') {
                                self.bump();
                            }
                        }
                        Some(_) => {
                            if !self.control_escape() {
                                self.bump();
                            }
                        }
                        None => break,
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }
        TokenKind::StringLiteral
    }

    fn char_literal(&mut self) -> TokenKind {
        let start = self.pos;
        self.bump();
        match self.peek() {
            Some('\\') => {
                self.bump();
                if !self.control_escape() {
                    if matches!(self.peek(), Some(c) if !is_line_break(c)) {
                        self.bump();
                    }
                    // Named and numeric escapes: \NUL, \x41, \123
                    self.eat_while(|c| c.is_ascii_alphanumeric());
                }
            }
            Some(c) if c != '\'' && !is_line_break(c) => {
                self.bump();
            }
            _ => return TokenKind::BadCharacter,
        }
        if self.peek() == Some('\'') {
            self.bump();
            TokenKind::CharacterLiteral
        } else {
            self.pos = start + 1;
            TokenKind::BadCharacter
        }
    }

    /// Consumes `^c` after a backslash, where `c` is one of `@[\]^_` or
    /// an upper-case ASCII letter.
    fn control_escape(&mut self) -> bool {
        let is_control = self.peek() == Some('^')
            && self
                .peek_nth(1)
                .is_some_and(|c| c.is_ascii_uppercase() || "@[\\]^_".contains(c));
        if is_control {
            self.bump();
            self.bump();
        }
        is_control
    }

    fn number(&mut self) -> TokenKind {
        let rest = self.rest();
        if rest.starts_with("0x") || rest.starts_with("0X") {
            if self.peek_nth(2).is_some_and(|c| c.is_ascii_hexdigit()) {
                self.pos += 2;
                self.eat_while(|c| c.is_ascii_hexdigit());
                return TokenKind::Hexadecimal;
            }
        } else if (rest.starts_with("0o") || rest.starts_with("0O"))
            && self.peek_nth(2).is_some_and(|c| c.is_digit(8))
        {
            self.pos += 2;
            self.eat_while(|c| c.is_digit(8));
            return TokenKind::Octal;
        }

        self.eat_while(|c| c.is_ascii_digit());
        let mut kind = TokenKind::Decimal;

        if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
            kind = TokenKind::Float;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = match self.peek_nth(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_nth(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digits_at {
                    self.bump();
                }
                self.eat_while(|c| c.is_ascii_digit());
                kind = TokenKind::Float;
            }
        }

        kind
    }

    fn var_id(&mut self) -> TokenKind {
        let start = self.pos;
        self.eat_while(is_ident_char);
        TokenKind::reserved_word(&self.source[start..self.pos]).unwrap_or(TokenKind::VarId)
    }

    fn con_id(&mut self) -> TokenKind {
        self.eat_while(is_ident_char);
        if self.peek() == Some('.') {
            self.qualifier_dot = match self.peek_nth(1) {
                Some('.') => false,
                Some(c) => is_small(c) || c.is_uppercase() || is_symbol(c),
                None => false,
            };
        }
        TokenKind::ConId
    }

    fn symbol(&mut self) -> TokenKind {
        let start = self.pos;
        self.eat_while(is_symbol);
        let text = &self.source[start..self.pos];

        if text.len() >= 2 && text.bytes().all(|b| b == b'-') {
            self.eat_while(|c| !is_line_break(c));
            return TokenKind::LineComment;
        }
        if let Some(kind) = TokenKind::reserved_op(text) {
            return kind;
        }
        if text == "." {
            return TokenKind::Dot;
        }
        if text.starts_with(':') {
            TokenKind::ConSym
        } else {
            TokenKind::VarSym
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos >= self.source.len() {
            return None;
        }
        let start = self.pos;
        let kind = match self.state {
            LexerState::BlockComment { depth } => self.block_comment(depth),
            LexerState::Initial => self.lex_token(),
        };
        debug_assert!(self.pos > start, "lexer made no progress at {start}");
        Some(Token::new(kind, start, self.pos))
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_space(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

/// Start of a variable identifier. Caseless letters count as small.
fn is_small(c: char) -> bool {
    c == '_' || (c.is_alphabetic() && !c.is_uppercase())
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// ASCII operator characters plus any non-ASCII character that is neither
/// alphanumeric nor whitespace (Unicode symbols and punctuation).
fn is_symbol(c: char) -> bool {
    if c.is_ascii() {
        "!#$%&*+./<=>?@\\^|-~:".contains(c)
    } else {
        !c.is_alphanumeric() && !c.is_whitespace()
    }
}

//! Lexer for the spec DSL.
//!
//! The lexer converts spec text into a stream of typed tokens. It never
//! fails; anything unexpected surfaces as a token the compiler rejects.

use crate::span::Span;
use crate::token::{Quantifier, Token, TokenKind};

/// Lexer for spec text.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// True when the previous token was a word ending at `position`.
    after_word: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            after_word: false,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;
        let after_word = std::mem::take(&mut self.after_word);

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        if let Some(quantifier) = Quantifier::from_suffix(c).filter(|_| after_word) {
            self.advance();
            return Token::new(
                TokenKind::Quantifier(quantifier),
                Span::new(start, self.position, start_line, start_column),
            );
        }

        let kind = match c {
            c if c.is_whitespace() => {
                while self.peek_char().is_some_and(char::is_whitespace) {
                    self.advance();
                }
                TokenKind::Space
            }
            '[' => {
                self.advance();
                TokenKind::LBracket
            }
            ']' => {
                self.advance();
                TokenKind::RBracket
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '-' => TokenKind::Name(self.scan_text(false)),
            _ => {
                let text = self.scan_text(true);
                self.after_word = true;
                TokenKind::Word(text)
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Scans a run of non-delimiter characters.
    ///
    /// With `split_suffix`, a trailing quantifier character is left for the
    /// next token, provided the run is longer than that one character.
    fn scan_text(&mut self, split_suffix: bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if is_delimiter(c) {
                break;
            }
            if split_suffix
                && !text.is_empty()
                && Quantifier::from_suffix(c).is_some()
                && self.peek_char_n(1).is_none_or(is_delimiter)
            {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Characters that end a name or word.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '[' | ']' | ',')
}

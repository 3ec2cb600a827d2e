//! Token cursor consumed by the parser
//!
//! The parser never looks at characters. It pulls tokens through the
//! [`TokenSource`] trait, which offers lookahead over significant tokens,
//! raw consumption (trivia included, so the tree stays lossless) and
//! mark/reset for speculative parsing.

use super::syntax_kind::SyntaxKind;
use crate::base::LineCol;
use rowan::TextRange;
use smol_str::SmolStr;
use thiserror::Error;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub text: SmolStr,
    pub range: TextRange,
    pub line_col: LineCol,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: impl Into<SmolStr>, range: TextRange, line_col: LineCol) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
            line_col,
        }
    }
}

/// A saved cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Raw token index the mark points at
    pub fn position(self) -> usize {
        self.0
    }
}

/// Pull-based cursor over a pre-lexed token sequence
pub trait TokenSource {
    /// Kind of the `k`-th significant (non-trivia) token ahead; 0 is the next one.
    /// Past the end this keeps answering [`SyntaxKind::EOF`].
    fn peek(&self, k: usize) -> SyntaxKind;

    /// The `k`-th significant token ahead
    fn token(&self, k: usize) -> Option<&Token>;

    /// Consume the next raw token if it is trivia
    fn consume_trivia(&mut self) -> Option<Token>;

    /// Consume the next raw token, trivia included
    fn consume(&mut self) -> Option<Token>;

    fn mark(&self) -> Mark;

    fn reset(&mut self, mark: Mark);

    /// True once only the end-of-input token (and trivia before it) remains
    fn is_at_end(&self) -> bool {
        self.peek(0) == SyntaxKind::EOF
    }
}

/// Fatal problems with the input stream itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStreamError {
    #[error("token stream has no end-of-input token")]
    MissingEndOfInput,
    #[error("{count} token(s) follow the end-of-input token at {range:?}")]
    TrailingTokens { count: usize, range: TextRange },
}

/// Standard [`TokenSource`] over a materialized token vector
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// Indices of non-trivia tokens, in order
    significant: Vec<usize>,
    pos: usize,
    /// Index into `significant` of the first significant token at or after `pos`
    next_significant: usize,
}

impl TokenStream {
    /// Validate and wrap a token sequence. It must end with exactly one `EOF`.
    pub fn new(tokens: Vec<Token>) -> Result<Self, TokenStreamError> {
        let eof = tokens
            .iter()
            .position(|t| t.kind == SyntaxKind::EOF)
            .ok_or(TokenStreamError::MissingEndOfInput)?;
        if eof + 1 != tokens.len() {
            return Err(TokenStreamError::TrailingTokens {
                count: tokens.len() - eof - 1,
                range: tokens[eof].range,
            });
        }
        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .map(|(i, _)| i)
            .collect();
        Ok(Self {
            tokens,
            significant,
            pos: 0,
            next_significant: 0,
        })
    }

    /// All tokens, trivia included
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn sync_next_significant(&mut self) {
        self.next_significant = self.significant.partition_point(|&i| i < self.pos);
    }
}

impl TokenSource for TokenStream {
    fn peek(&self, k: usize) -> SyntaxKind {
        self.token(k).map_or(SyntaxKind::EOF, |t| t.kind)
    }

    fn token(&self, k: usize) -> Option<&Token> {
        let idx = *self.significant.get(self.next_significant + k)?;
        self.tokens.get(idx)
    }

    fn consume_trivia(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?;
        if !token.kind.is_trivia() {
            return None;
        }
        self.pos += 1;
        Some(token.clone())
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        if !token.kind.is_trivia() {
            self.next_significant += 1;
        }
        Some(token)
    }

    fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    fn reset(&mut self, mark: Mark) {
        self.pos = mark.0.min(self.tokens.len());
        self.sync_next_significant();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    #[test]
    fn test_requires_eof() {
        let mut tokens = tokenize("a b");
        tokens.pop();
        assert_eq!(
            TokenStream::new(tokens).unwrap_err(),
            TokenStreamError::MissingEndOfInput
        );
    }

    #[test]
    fn test_rejects_tokens_after_eof() {
        let mut tokens = tokenize("a");
        let extra = tokens[0].clone();
        tokens.push(extra);
        assert!(matches!(
            TokenStream::new(tokens),
            Err(TokenStreamError::TrailingTokens { count: 1, .. })
        ));
    }

    #[test]
    fn test_peek_skips_trivia() {
        let stream = TokenStream::new(tokenize("a /* c */ b")).unwrap();
        assert_eq!(stream.peek(0), SyntaxKind::IDENT);
        assert_eq!(stream.peek(1), SyntaxKind::IDENT);
        assert_eq!(stream.peek(2), SyntaxKind::EOF);
        assert_eq!(stream.peek(7), SyntaxKind::EOF);
    }

    #[test]
    fn test_consume_and_reset() {
        let mut stream = TokenStream::new(tokenize("a b c")).unwrap();
        let mark = stream.mark();
        assert_eq!(stream.consume().unwrap().text, "a");
        assert!(stream.consume_trivia().is_some());
        assert_eq!(stream.peek(0), SyntaxKind::IDENT);
        assert_eq!(stream.token(0).unwrap().text, "b");
        stream.reset(mark);
        assert_eq!(stream.token(0).unwrap().text, "a");
        assert!(!stream.is_at_end());
    }

    #[test]
    fn test_at_end_with_trailing_trivia() {
        let mut stream = TokenStream::new(tokenize("a  ")).unwrap();
        stream.consume();
        assert!(stream.is_at_end());
    }
}

//! Recursive descent parser core
//!
//! Grammar rules emit events (start node, token, finish node) which are
//! replayed into a rowan GreenNode tree once parsing is done. Buffering the
//! events lets the parser wrap already-parsed operands in a new node
//! (left-associative operators) and throw away speculative work on reset.

use super::errors::{ErrorCode, ErrorKind, ParseContext, SyntaxError, describe_expected};
use super::grammar;
use super::lexer::tokenize;
use super::syntax_kind::SyntaxKind;
use super::token_set::{CLOSING_DELIMITERS, TokenSet};
use super::token_source::{Mark, Token, TokenSource, TokenStream, TokenStreamError};
use rayon::prelude::*;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Stack kept free before a nested rule runs
const RED_ZONE: usize = 128 * 1024;
/// Stack segment allocated when the red zone is reached
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
    /// The parse was cancelled and the tail of the input sits in an ERROR node
    pub cancelled: bool,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Knobs for a single parse
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Checked at statement and member boundaries
    pub cancel: Option<CancellationToken>,
    /// Upper bound, in significant tokens, for token-level lookahead scans
    pub lookahead_limit: usize,
    /// Remember speculation outcomes per (decision, position)
    pub memoize: bool,
    /// Deepest nesting of expressions, statements, bodies and patterns
    /// before the rest of a construct is skipped with E0208
    pub nesting_limit: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            cancel: None,
            lookahead_limit: 64,
            memoize: true,
            nesting_limit: 512,
        }
    }
}

impl ParseConfig {
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_lookahead_limit(mut self, limit: usize) -> Self {
        self.lookahead_limit = limit.max(1);
        self
    }

    pub fn without_memo(mut self) -> Self {
        self.memoize = false;
        self
    }

    pub fn with_nesting_limit(mut self, limit: usize) -> Self {
        self.nesting_limit = limit.max(1);
        self
    }
}

/// Parse a compilation unit from any token source
pub fn parse_compilation_unit(source: &mut dyn TokenSource, config: &ParseConfig) -> Parse {
    let mut parser = Parser::new(source, config);
    grammar::compilation_unit(&mut parser);
    parser.finish()
}

/// Parse a compilation unit from a materialized token sequence
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Parse, TokenStreamError> {
    parse_tokens_with(tokens, &ParseConfig::default())
}

pub fn parse_tokens_with(tokens: Vec<Token>, config: &ParseConfig) -> Result<Parse, TokenStreamError> {
    let mut stream = TokenStream::new(tokens)?;
    debug!(tokens = stream.tokens().len(), "parsing token stream");
    Ok(parse_compilation_unit(&mut stream, config))
}

/// Lex and parse source text
pub fn parse_source(text: &str) -> Parse {
    parse_source_with(text, &ParseConfig::default())
}

pub fn parse_source_with(text: &str, config: &ParseConfig) -> Parse {
    // The lexer always terminates the stream with a single EOF token.
    let mut stream = match TokenStream::new(tokenize(text)) {
        Ok(stream) => stream,
        Err(err) => unreachable!("lexer produced an invalid stream: {err}"),
    };
    debug!(bytes = text.len(), tokens = stream.tokens().len(), "parsing source");
    parse_compilation_unit(&mut stream, config)
}

/// Parse independent sources in parallel
pub fn parse_many(texts: &[&str]) -> Vec<Parse> {
    parse_many_with(texts, &ParseConfig::default())
}

pub fn parse_many_with(texts: &[&str], config: &ParseConfig) -> Vec<Parse> {
    texts
        .par_iter()
        .map(|text| parse_source_with(text, config))
        .collect()
}

#[derive(Debug, Clone)]
enum Event {
    Start(SyntaxKind),
    Token { kind: SyntaxKind, text: SmolStr },
    Finish,
}

/// Position in the event buffer where a node may later be started
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    events: usize,
    wraps: usize,
}

/// A node start requested after its content was emitted. Wraps are kept
/// out of the event buffer and spliced in once, by [`Parser::finish`].
#[derive(Debug, Clone, Copy)]
struct Wrap {
    at: usize,
    /// Wraps recorded before the checkpoint was taken end up outside this one
    before: usize,
    kind: SyntaxKind,
}

/// Decisions resolved by speculative parsing; keys of the memo table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Speculation {
    Cast,
    LocalVarDecl,
    ForEach,
}

/// Everything speculation has to roll back
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    mark: Mark,
    events: usize,
    wraps: usize,
    errors: usize,
    error_count: usize,
    panicking: bool,
    last_significant: SyntaxKind,
    last_end: TextSize,
    last_line: u32,
    open_nodes: usize,
}

/// The parser state
pub(crate) struct Parser<'a> {
    source: &'a mut dyn TokenSource,
    config: &'a ParseConfig,
    events: Vec<Event>,
    wraps: Vec<Wrap>,
    errors: Vec<SyntaxError>,
    /// Counts every error, including suppressed ones; speculation compares it
    error_count: usize,
    /// Set after a desynchronizing error until the next recovery point
    panicking: bool,
    cancelled: bool,
    last_significant: SyntaxKind,
    last_end: TextSize,
    last_line: u32,
    open_nodes: usize,
    /// Current nesting of guarded rules
    depth: usize,
    speculation_depth: usize,
    memo: FxHashMap<(Speculation, usize), bool>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a mut dyn TokenSource, config: &'a ParseConfig) -> Self {
        Self {
            source,
            config,
            events: Vec::new(),
            wraps: Vec::new(),
            errors: Vec::new(),
            error_count: 0,
            panicking: false,
            cancelled: false,
            last_significant: SyntaxKind::EOF,
            last_end: TextSize::new(0),
            last_line: 0,
            open_nodes: 0,
            depth: 0,
            speculation_depth: 0,
            memo: FxHashMap::default(),
        }
    }

    pub(crate) fn finish(mut self) -> Parse {
        while self.open_nodes > 0 {
            self.finish_node();
        }
        let mut builder = GreenNodeBuilder::new();
        let mut wraps = order_wraps(&self.wraps).into_iter().peekable();
        for (index, event) in self.events.into_iter().enumerate() {
            if let Some((_, kinds)) = wraps.next_if(|(at, _)| *at == index) {
                for kind in kinds {
                    builder.start_node(kind.into());
                }
            }
            match event {
                Event::Start(kind) => builder.start_node(kind.into()),
                Event::Token { kind, text } => builder.token(kind.into(), &text),
                Event::Finish => builder.finish_node(),
            }
        }
        debug!(
            errors = self.errors.len(),
            cancelled = self.cancelled,
            memo_entries = self.memo.len(),
            "parse finished"
        );
        Parse {
            green: builder.finish(),
            errors: self.errors,
            cancelled: self.cancelled,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(crate) fn current(&self) -> SyntaxKind {
        self.source.peek(0)
    }

    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.source.peek(n)
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(crate) fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.nth(n) == kind
    }

    pub(crate) fn at_any(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Identifier or aspect keyword
    pub(crate) fn at_name(&self) -> bool {
        self.current().is_name()
    }

    pub(crate) fn nth_at_name(&self, n: usize) -> bool {
        self.nth(n).is_name()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.is_at_end()
    }

    pub(crate) fn nth_text(&self, n: usize) -> &str {
        self.source.token(n).map_or("", |t| t.text.as_str())
    }

    /// No trivia between significant tokens `n` and `n + 1`
    pub(crate) fn nth_joined(&self, n: usize) -> bool {
        match (self.source.token(n), self.source.token(n + 1)) {
            (Some(a), Some(b)) => a.range.end() == b.range.start(),
            _ => false,
        }
    }

    /// No trivia between the last consumed token and the current one
    pub(crate) fn at_joined(&self) -> bool {
        self.source
            .token(0)
            .is_some_and(|t| t.range.start() == self.last_end)
    }

    pub(crate) fn current_range(&self) -> TextRange {
        self.source
            .token(0)
            .map_or_else(|| TextRange::empty(TextSize::new(0)), |t| t.range)
    }

    /// Raw cursor position, used for progress checks
    pub(crate) fn pos(&self) -> usize {
        self.source.mark().position()
    }

    pub(crate) fn lookahead_limit(&self) -> usize {
        self.config.lookahead_limit
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn flush_trivia(&mut self) {
        if self.open_nodes == 0 {
            return;
        }
        while let Some(token) = self.source.consume_trivia() {
            self.events.push(Event::Token {
                kind: token.kind,
                text: token.text,
            });
        }
    }

    /// Consume the current significant token. End of input is only consumed by [`Parser::bump_eof`].
    pub(crate) fn bump(&mut self) {
        if self.at(SyntaxKind::EOF) {
            return;
        }
        self.bump_raw();
    }

    pub(crate) fn bump_eof(&mut self) {
        if self.at(SyntaxKind::EOF) {
            self.bump_raw();
        }
    }

    fn bump_raw(&mut self) {
        self.flush_trivia();
        if let Some(token) = self.source.consume() {
            self.last_significant = token.kind;
            self.last_end = token.range.end();
            self.last_line = token.line_col.line;
            self.events.push(Event::Token {
                kind: token.kind,
                text: token.text,
            });
        }
    }

    /// Consume the current token and return its range
    pub(crate) fn bump_range(&mut self) -> TextRange {
        let range = self.current_range();
        self.bump();
        range
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error_expected(&[kind]);
            false
        }
    }

    /// Expect the `;` ending a statement or declaration.
    ///
    /// When the next token starts a new line the `;` is taken as simply
    /// missing: the error is reported at the end of the previous token and the
    /// parser stays synchronized, so the next line parses normally.
    pub(crate) fn expect_semicolon(&mut self) -> bool {
        if self.eat(SyntaxKind::SEMICOLON) {
            return true;
        }
        let on_new_line = self
            .source
            .token(0)
            .is_some_and(|t| t.line_col.line > self.last_line && t.kind != SyntaxKind::EOF);
        if on_new_line && !self.panicking {
            let err = self
                .error_builder(ErrorCode::E0201)
                .message(format!("expected ';', found {}", self.found_description()))
                .expected(SyntaxKind::SEMICOLON)
                .range(TextRange::empty(self.last_end))
                .hint("add ';' at the end of the previous line")
                .build();
            self.push_error(err, false);
        } else {
            self.error_expected(&[SyntaxKind::SEMICOLON]);
        }
        false
    }

    /// Expect a closing delimiter, pointing back at the opening one if missing
    pub(crate) fn expect_closing(&mut self, kind: SyntaxKind, opened: TextRange) -> bool {
        if self.eat(kind) {
            return true;
        }
        let code = match kind {
            SyntaxKind::R_BRACE => ErrorCode::E0202,
            SyntaxKind::R_PAREN => ErrorCode::E0203,
            SyntaxKind::R_BRACKET => ErrorCode::E0204,
            _ => ErrorCode::E0901,
        };
        let err = self
            .error_builder(code)
            .message(format!(
                "expected {}, found {}",
                kind.display_name(),
                self.current().display_name()
            ))
            .expected(kind)
            .related("opened here", opened)
            .build();
        self.push_error(err, true);
        false
    }

    // =========================================================================
    // Node building
    // =========================================================================

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.events.push(Event::Start(kind));
        self.open_nodes += 1;
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
        self.open_nodes = self.open_nodes.saturating_sub(1);
    }

    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        Checkpoint {
            events: self.events.len(),
            wraps: self.wraps.len(),
        }
    }

    /// Start a node that encloses everything emitted since `checkpoint`
    pub(crate) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.wraps.push(Wrap {
            at: checkpoint.events.min(self.events.len()),
            before: checkpoint.wraps.min(self.wraps.len()),
            kind,
        });
        self.open_nodes += 1;
    }

    /// Emit an empty ERROR node marking a missing subtree
    pub(crate) fn missing(&mut self) {
        self.start_node(SyntaxKind::ERROR);
        self.finish_node();
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// Builder pre-filled with the current token's position
    pub(crate) fn error_builder(&self, code: ErrorCode) -> super::errors::SyntaxErrorBuilder {
        let found = self.current();
        let mut builder = SyntaxError::builder(code).found(found);
        if let Some(token) = self.source.token(0) {
            builder = builder.range(token.range).line_col(token.line_col);
        }
        if found == SyntaxKind::EOF {
            builder = builder.kind(ErrorKind::UnexpectedEndOfInput);
        }
        builder
    }

    /// Record an error. Desynchronizing errors start panic mode and are
    /// suppressed while the parser is already panicking.
    pub(crate) fn push_error(&mut self, err: SyntaxError, desync: bool) {
        if self.cancelled {
            return;
        }
        self.error_count += 1;
        if desync {
            if self.panicking {
                return;
            }
            self.panicking = true;
        }
        if self.speculation_depth == 0 {
            trace!(code = %err.code, message = %err.message, "syntax error");
        }
        self.errors.push(err);
    }

    /// Report a mismatch at the current token
    pub(crate) fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let code = self.refine_code(code);
        let err = self.error_builder(code).message(message).build();
        self.push_error(err, true);
    }

    /// Report that none of `expected` was found
    pub(crate) fn error_expected(&mut self, expected: &[SyntaxKind]) {
        let code = match expected {
            [SyntaxKind::SEMICOLON] => ErrorCode::E0201,
            [SyntaxKind::R_BRACE] => ErrorCode::E0202,
            [SyntaxKind::R_PAREN] => ErrorCode::E0203,
            [SyntaxKind::R_BRACKET] => ErrorCode::E0204,
            [SyntaxKind::GT] => ErrorCode::E0206,
            [SyntaxKind::IDENT] => ErrorCode::E0301,
            _ => ErrorCode::E0901,
        };
        let code = self.refine_code(code);
        let message = format!(
            "expected {}, found {}",
            describe_expected(expected),
            self.found_description()
        );
        let err = self
            .error_builder(code)
            .message(message)
            .expected_all(expected.iter().copied())
            .build();
        self.push_error(err, true);
    }

    /// Record a well-formedness error that does not desynchronize the parser
    pub(crate) fn report(&mut self, code: ErrorCode, message: impl Into<String>, range: TextRange) {
        let err = self.error_builder(code).message(message).range(range).build();
        self.push_error(err, false);
    }

    /// Report an error and wrap the current token in an ERROR node
    pub(crate) fn err_and_bump(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.error(code, message);
        if !self.at(SyntaxKind::EOF) {
            self.start_node(SyntaxKind::ERROR);
            self.bump();
            self.finish_node();
        }
    }

    /// Invalid tokens and end of input get their own codes regardless of the rule
    fn refine_code(&self, code: ErrorCode) -> ErrorCode {
        match self.current() {
            SyntaxKind::EOF => ErrorCode::E0902,
            SyntaxKind::ERROR => {
                let text = self.nth_text(0);
                if text.starts_with("/*") {
                    ErrorCode::E0103
                } else if text.starts_with('"') || text.starts_with('\'') {
                    ErrorCode::E0102
                } else if text.starts_with(|c: char| c.is_ascii_digit()) {
                    ErrorCode::E0104
                } else {
                    ErrorCode::E0101
                }
            }
            _ => code,
        }
    }

    pub(crate) fn found_description(&self) -> String {
        match self.current() {
            SyntaxKind::EOF => "end of input".to_string(),
            SyntaxKind::IDENT => format!("identifier '{}'", self.nth_text(0)),
            SyntaxKind::ERROR => format!("invalid token '{}'", self.nth_text(0)),
            kind => kind.display_name().to_string(),
        }
    }

    /// Panic-mode recovery: leave panic mode at the next synchronizing token.
    /// Tokens skipped on the way go into an ERROR node; a `;` that ends the
    /// skipped run is consumed with it.
    pub(crate) fn recover(&mut self, context: ParseContext) {
        if !self.panicking {
            return;
        }
        self.panicking = false;
        if matches!(
            self.last_significant,
            SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE | SyntaxKind::L_BRACE
        ) {
            return;
        }
        let sync = context.recovery_tokens();
        if self.at_any(sync) && !self.at(SyntaxKind::SEMICOLON) {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        let mut skipped = 0usize;
        while !self.at_any(sync) {
            self.bump();
            skipped += 1;
        }
        self.eat(SyntaxKind::SEMICOLON);
        self.finish_node();
        trace!(
            context = ?context,
            skipped,
            sync = ?self.current(),
            "recovered"
        );
    }

    /// Leave panic mode at the current token without skipping anything
    pub(crate) fn resume(&mut self) {
        if self.panicking {
            trace!(at = ?self.current(), "resumed");
            self.panicking = false;
        }
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Run a recursive rule one level deeper.
    ///
    /// Below the limit the rule runs on a stack that grows on demand. At the
    /// limit E0208 is reported once per run, the construct at the cursor is
    /// skipped into an ERROR node and `on_limit` is returned.
    pub(crate) fn nested<T>(&mut self, on_limit: T, f: impl FnOnce(&mut Self) -> T) -> T {
        if self.depth >= self.config.nesting_limit {
            self.skip_too_deep();
            return on_limit;
        }
        self.depth += 1;
        let result = stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || f(self));
        self.depth -= 1;
        result
    }

    /// Skip the rest of the construct at the cursor: up to a `;` or a
    /// closed brace group, and never past a closer it did not open
    fn skip_too_deep(&mut self) {
        let message = format!(
            "nesting exceeds the limit of {} levels",
            self.config.nesting_limit
        );
        let err = self.error_builder(ErrorCode::E0208).message(message).build();
        self.push_error(err, true);
        if self.at(SyntaxKind::EOF) || self.at_any(CLOSING_DELIMITERS) {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        let mut open = 0usize;
        loop {
            let kind = self.current();
            if kind == SyntaxKind::EOF || (open == 0 && CLOSING_DELIMITERS.contains(kind)) {
                break;
            }
            self.bump();
            match kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => open += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => open -= 1,
                SyntaxKind::R_BRACE => {
                    open -= 1;
                    if open == 0 {
                        break;
                    }
                }
                SyntaxKind::SEMICOLON if open == 0 => break,
                _ => {}
            }
        }
        self.finish_node();
        debug!(depth = self.depth, at = ?self.current_range(), "nesting limit reached");
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Poll the cancellation token. On cancellation the rest of the input is
    /// wrapped in a single ERROR node and `true` is returned.
    pub(crate) fn check_cancelled(&mut self) -> bool {
        if self.cancelled {
            return true;
        }
        if self.speculation_depth > 0 {
            return false;
        }
        let Some(token) = &self.config.cancel else {
            return false;
        };
        if !token.is_cancelled() {
            return false;
        }
        let err = self
            .error_builder(ErrorCode::E0903)
            .kind(ErrorKind::Cancelled)
            .message("parse cancelled; remaining input was not parsed")
            .build();
        self.errors.push(err);
        self.cancelled = true;
        self.panicking = false;
        self.start_node(SyntaxKind::ERROR);
        while !self.at(SyntaxKind::EOF) {
            self.bump();
        }
        self.finish_node();
        debug!(at = ?self.current_range(), "parse cancelled");
        true
    }

    // =========================================================================
    // Speculation
    // =========================================================================

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            mark: self.source.mark(),
            events: self.events.len(),
            wraps: self.wraps.len(),
            errors: self.errors.len(),
            error_count: self.error_count,
            panicking: self.panicking,
            last_significant: self.last_significant,
            last_end: self.last_end,
            last_line: self.last_line,
            open_nodes: self.open_nodes,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.source.reset(snapshot.mark);
        self.events.truncate(snapshot.events);
        self.wraps.truncate(snapshot.wraps);
        self.errors.truncate(snapshot.errors);
        self.error_count = snapshot.error_count;
        self.panicking = snapshot.panicking;
        self.last_significant = snapshot.last_significant;
        self.last_end = snapshot.last_end;
        self.last_line = snapshot.last_line;
        self.open_nodes = snapshot.open_nodes;
    }

    /// Run `f` as a trial parse and roll everything back afterwards.
    /// The trial succeeds when `f` returns true without reporting any error.
    pub(crate) fn speculate(&mut self, what: Speculation, f: impl FnOnce(&mut Self) -> bool) -> bool {
        let key = (what, self.pos());
        if self.config.memoize {
            if let Some(&hit) = self.memo.get(&key) {
                trace!(?what, pos = key.1, hit, "speculation memo hit");
                return hit;
            }
        }
        let snapshot = self.snapshot();
        self.speculation_depth += 1;
        self.panicking = false;
        let ok = f(self) && self.error_count == snapshot.error_count;
        self.speculation_depth -= 1;
        self.restore(snapshot);
        if self.config.memoize {
            self.memo.insert(key, ok);
        }
        trace!(?what, pos = key.1, ok, "speculation");
        ok
    }

    /// Run `f` against the token stream and roll back, returning its answer
    pub(crate) fn lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        self.speculation_depth += 1;
        let result = f(self);
        self.speculation_depth -= 1;
        self.restore(snapshot);
        result
    }
}

/// Group wraps by event index, outermost first
fn order_wraps(wraps: &[Wrap]) -> Vec<(usize, Vec<SyntaxKind>)> {
    let mut order: Vec<usize> = (0..wraps.len()).collect();
    order.sort_by_key(|&seq| wraps[seq].at);
    let mut grouped: Vec<(usize, Vec<(usize, SyntaxKind)>)> = Vec::new();
    for seq in order {
        let wrap = wraps[seq];
        if grouped.last().is_none_or(|(at, _)| *at != wrap.at) {
            grouped.push((wrap.at, Vec::new()));
        }
        if let Some((_, starts)) = grouped.last_mut() {
            let pos = starts
                .iter()
                .rposition(|&(earlier, _)| earlier < wrap.before)
                .map_or(0, |i| i + 1);
            starts.insert(pos, (seq, wrap.kind));
        }
    }
    grouped
        .into_iter()
        .map(|(at, starts)| (at, starts.into_iter().map(|(_, kind)| kind).collect()))
        .collect()
}

//! Streaming tokenizer
//!
//! A [`Tokenizer`] pulls chars from a reader into a fixed-capacity
//! [`Window`], runs the matcher chain at every position of the window and
//! resolves the candidates with the mode filter. Tokens are handed out in
//! ascending end order, one at a time. A token ending past the point where a
//! pass stopped is held back until the following pass, so the order holds
//! across window refills.
//!
//! When a match runs into the window edge with more input pending, the pass
//! stops before that position and the window is refilled so the position
//! becomes its first char. A match is therefore only cut when it is longer
//! than the whole window.

use crate::buffer::{CharReader, Window};
use crate::config::TokenizerConfig;
use crate::context::SessionContext;
use crate::error::Result;
use crate::filter::{self, Mode, Resolved};
use crate::matcher::{Candidates, Matcher, Reach, Scan};
use crate::token::Token;
use dmseg_dict::TrieDictionary;
use log::{debug, trace};
use std::collections::VecDeque;
use std::io::Read;
use std::sync::Arc;

/// Lifecycle of a tokenizer session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerState {
    /// Nothing read yet
    Uninitialized,
    /// The window holds input; no token handed out yet
    Ready,
    /// At least one token handed out
    Producing,
    /// The stream is fully tokenized
    Exhausted,
    /// A read or decode failure ended the session
    Failed,
}

/// Pull-based tokenizer over one input stream
pub struct Tokenizer<R> {
    mode: Mode,
    reader: CharReader<R>,
    window: Window,
    matchers: Vec<Matcher>,
    context: SessionContext,
    /// Next absolute position to scan
    cursor: usize,
    /// Verdicts ending past the cursor, released by a later pass
    held: Vec<Resolved>,
    pending: VecDeque<Token>,
    state: TokenizerState,
}

impl<R: Read> Tokenizer<R> {
    /// Create a tokenizer over `reader` matching against `dictionaries`
    pub fn new(
        mode: Mode,
        reader: R,
        dictionaries: Vec<Arc<TrieDictionary>>,
        config: &TokenizerConfig,
    ) -> Self {
        Self {
            mode,
            reader: CharReader::new(reader),
            window: Window::new(config.buffer_size(), config.normalizer()),
            matchers: Matcher::chain(dictionaries),
            context: SessionContext::new(),
            cursor: 0,
            held: Vec::new(),
            pending: VecDeque::new(),
            state: TokenizerState::Uninitialized,
        }
    }

    /// Emission policy of this session
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current lifecycle state
    pub fn state(&self) -> TokenizerState {
        self.state
    }

    /// Matching cursors of the session
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Whether another token is available, reading input as needed
    pub fn has_next_token(&mut self) -> Result<bool> {
        loop {
            if !self.pending.is_empty() {
                return Ok(true);
            }
            if matches!(
                self.state,
                TokenizerState::Exhausted | TokenizerState::Failed
            ) {
                return Ok(false);
            }
            if let Err(err) = self.advance() {
                debug!("tokenizer failed at char {}: {err}", self.cursor);
                self.state = TokenizerState::Failed;
                return Err(err);
            }
        }
    }

    /// The next token, or `None` once the stream is exhausted.
    ///
    /// After an error the session is [`TokenizerState::Failed`] and yields
    /// no further tokens.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if !self.has_next_token()? {
            return Ok(None);
        }
        let token = self.pending.pop_front();
        if token.is_some() {
            self.state = TokenizerState::Producing;
        }
        Ok(token)
    }

    /// Refill the window from the cursor and run one scan pass
    fn advance(&mut self) -> Result<()> {
        let read = self.window.refill(self.cursor, &mut self.reader)?;
        trace!(
            "window [{}, {}) after reading {read} chars",
            self.window.start(),
            self.window.end()
        );
        if self.cursor >= self.window.end() {
            debug!("tokenizer exhausted after {} chars", self.cursor);
            self.state = TokenizerState::Exhausted;
            return Ok(());
        }
        if self.state == TokenizerState::Uninitialized {
            self.state = TokenizerState::Ready;
        }
        self.scan_pass();
        Ok(())
    }

    /// Scan from the cursor to the window end, or up to the first position
    /// whose match needs more input than the window holds.
    fn scan_pass(&mut self) {
        let mut resolved = std::mem::take(&mut self.held);
        while self.cursor < self.window.end() {
            let pos = self.cursor;
            let mut candidates = Candidates::new();
            let mut reach = Reach::Complete;
            for matcher in &self.matchers {
                reach = reach.or(matcher.scan(&self.window, pos, &self.context, &mut candidates));
            }

            if reach == Reach::Edge && pos > self.window.start() {
                debug!("match at char {pos} reaches the window edge, sliding window");
                break;
            }

            self.context.claim(&candidates);
            filter::apply(self.mode, pos, candidates, &mut self.context, &mut resolved);
            self.cursor += 1;
        }

        // Later passes only produce tokens ending after the cursor
        resolved.sort_by_key(|r| r.token.end);
        let ready = resolved.partition_point(|r| r.token.end <= self.cursor);
        self.held = resolved.split_off(ready);
        self.release(resolved);
    }

    /// Queue kept tokens, stamping position increments in emission order
    fn release(&mut self, resolved: Vec<Resolved>) {
        for Resolved { token, kept } in resolved {
            if kept {
                self.pending.push_back(self.context.keep(token));
            } else {
                self.context.suppress();
            }
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

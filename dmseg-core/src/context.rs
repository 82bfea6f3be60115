//! Per-session matching state

use crate::token::{Token, TokenType};

/// Cursors a tokenizer session carries from one scan position to the next.
///
/// All offsets are absolute char offsets; a cursor "covers" position `p` when
/// its end is greater than `p`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub(crate) alnum_end: usize,
    pub(crate) decimal_end: usize,
    pub(crate) frontier: usize,
    pub(crate) claimed_end: usize,
    pub(crate) suppressed: usize,
}

impl SessionContext {
    /// Create a fresh context with every cursor at the stream start
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last accepted ALPHANUM token
    pub fn alnum_end(&self) -> usize {
        self.alnum_end
    }

    /// End of the last accepted DECIMAL token
    pub fn decimal_end(&self) -> usize {
        self.decimal_end
    }

    /// End of the longest accepted dictionary word (query mode)
    pub fn frontier(&self) -> usize {
        self.frontier
    }

    /// End of the furthest dictionary match seen so far
    pub fn claimed_end(&self) -> usize {
        self.claimed_end
    }

    /// Dropped candidates counted since the last emitted token
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Whether an accepted run or a dictionary match spans `pos`
    pub fn covers(&self, pos: usize) -> bool {
        self.alnum_end > pos || self.decimal_end > pos || self.claimed_end > pos
    }

    /// Extend the dictionary-claimed frontier with this position's word matches
    pub(crate) fn claim<'a>(&mut self, candidates: impl IntoIterator<Item = &'a Token>) {
        for token in candidates {
            if token.kind == TokenType::Word {
                self.claimed_end = self.claimed_end.max(token.end);
            }
        }
    }

    /// Stamp a token with its position increment as it is emitted
    pub(crate) fn keep(&mut self, mut token: Token) -> Token {
        token.position_increment = 1 + self.suppressed;
        self.suppressed = 0;
        token
    }

    /// Count a dropped candidate at its place in emission order
    pub(crate) fn suppress(&mut self) {
        self.suppressed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_only_counts_words() {
        let mut ctx = SessionContext::new();
        let tokens = [
            Token::new(TokenType::Word, "button", 3, 9),
            Token::new(TokenType::AlphaNum, "buttonhole", 3, 13),
            Token::new(TokenType::Word, "but", 3, 6),
        ];
        ctx.claim(&tokens);
        assert_eq!(ctx.claimed_end(), 9);
        assert!(ctx.covers(8));
        assert!(!ctx.covers(9));
    }

    #[test]
    fn test_position_increment_counts_suppressed() {
        let mut ctx = SessionContext::new();
        ctx.suppress();
        ctx.suppress();
        let token = ctx.keep(Token::new(TokenType::Cn, "中", 0, 1));
        assert_eq!(token.position_increment, 3);
        assert_eq!(ctx.suppressed(), 0);

        let token = ctx.keep(Token::new(TokenType::Cn, "文", 1, 2));
        assert_eq!(token.position_increment, 1);
    }
}

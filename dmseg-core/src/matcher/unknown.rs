use super::{Candidates, Reach, Scan};
use crate::buffer::Window;
use crate::chars::is_separator;
use crate::context::SessionContext;
use crate::token::{Token, TokenType};

/// Single-char fallback for whatever no other matcher claimed.
///
/// Separators never become tokens, and a char spanned by an accepted run or
/// a dictionary match is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownMatcher;

impl Scan for UnknownMatcher {
    fn scan(
        &self,
        window: &Window,
        pos: usize,
        ctx: &SessionContext,
        out: &mut Candidates,
    ) -> Reach {
        if let Some(ch) = window.char_at(pos) {
            if !is_separator(ch) && out.is_empty() && !ctx.covers(pos) {
                out.push(Token::new(TokenType::Unknown, ch.to_string(), pos, pos + 1));
            }
        }
        Reach::Complete
    }
}

use super::{Candidates, Reach, Scan};
use crate::buffer::Window;
use crate::context::SessionContext;
use crate::numeral::{chinese_num_to_int, is_numeral, is_numeral_digit, unit_value};
use crate::token::{Token, TokenType};
use log::debug;

/// Numeral literals, Arabic, Chinese or mixed (`2015`, `二十三`, `3千`).
///
/// A literal starts at a digit or at a leading ten (`十`, `拾`) and runs
/// greedily over digit and unit chars. Runs that do not convert yield no
/// candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalMatcher;

fn starts_numeral(ch: char) -> bool {
    is_numeral_digit(ch) || unit_value(ch) == Some(10)
}

impl Scan for DecimalMatcher {
    fn scan(
        &self,
        window: &Window,
        pos: usize,
        ctx: &SessionContext,
        out: &mut Candidates,
    ) -> Reach {
        match window.char_at(pos) {
            Some(ch) if starts_numeral(ch) && ctx.decimal_end <= pos => {}
            _ => return Reach::Complete,
        }

        let tail = window.tail(pos);
        let len = tail.iter().take_while(|&&ch| is_numeral(ch)).count();
        let end = pos + len;
        match chinese_num_to_int(&tail[..len]) {
            Ok(value) => out.push(
                Token::new(TokenType::Decimal, window.text(pos, end), pos, end).with_number(value),
            ),
            Err(err) => debug!("skipping numeral run at {pos}: {err}"),
        }
        Reach::at(window, end)
    }
}

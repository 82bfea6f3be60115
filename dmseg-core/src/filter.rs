//! Candidate resolution for index and query mode

use crate::context::SessionContext;
use crate::matcher::Candidates;
use crate::numeral::is_number;
use crate::token::{Token, TokenType};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Emission policy of a tokenizer session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Exhaustive: every dictionary word plus every non-redundant run
    #[default]
    Index,
    /// Forward maximum matching: the single best reading of the input
    Query,
}

impl Mode {
    /// Lowercase name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Index => "index",
            Mode::Query => "query",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" => Ok(Mode::Index),
            "query" => Ok(Mode::Query),
            other => Err(format!("unknown mode '{other}', expected 'index' or 'query'")),
        }
    }
}

/// A candidate with the filter's verdict.
///
/// Dropped candidates are kept until emission so that position increments
/// can be counted in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub(crate) token: Token,
    pub(crate) kept: bool,
}

/// Resolve the candidates of scan position `pos`, appending verdicts to `out`
pub(crate) fn apply(
    mode: Mode,
    pos: usize,
    candidates: Candidates,
    ctx: &mut SessionContext,
    out: &mut Vec<Resolved>,
) {
    match mode {
        Mode::Index => index(candidates, ctx, out),
        Mode::Query => query(pos, candidates, ctx, out),
    }
}

/// Candidates are taken in the order the matchers produced them.
fn index(candidates: Candidates, ctx: &mut SessionContext, out: &mut Vec<Resolved>) {
    for token in candidates {
        let keep = match token.kind {
            TokenType::Word | TokenType::Cn | TokenType::Unknown => true,
            TokenType::AlphaNum => {
                let number = is_number(&token.value);
                if token.end <= ctx.alnum_end || (number && token.end <= ctx.decimal_end) {
                    false
                } else {
                    ctx.alnum_end = token.end;
                    if number {
                        ctx.decimal_end = token.end;
                    }
                    true
                }
            }
            TokenType::Decimal => {
                if token.end <= ctx.decimal_end {
                    false
                } else {
                    ctx.decimal_end = token.end;
                    true
                }
            }
        };
        out.push(Resolved { token, kept: keep });
    }
}

/// Words first, longest first; then the rest longest first.
fn query(pos: usize, mut candidates: Candidates, ctx: &mut SessionContext, out: &mut Vec<Resolved>) {
    candidates.sort_by_key(|t| (t.kind != TokenType::Word, Reverse(t.end)));

    for token in candidates {
        let keep = if token.end <= ctx.frontier {
            false
        } else {
            match token.kind {
                TokenType::Word => {
                    ctx.frontier = token.end;
                    true
                }
                // An accepted word spans this position
                _ if ctx.frontier > pos => false,
                TokenType::AlphaNum => {
                    let number = is_number(&token.value);
                    if ctx.alnum_end > pos || (number && token.end <= ctx.decimal_end) {
                        false
                    } else {
                        ctx.alnum_end = token.end;
                        if number {
                            ctx.decimal_end = token.end;
                        }
                        true
                    }
                }
                TokenType::Decimal => {
                    if ctx.decimal_end > pos {
                        false
                    } else {
                        ctx.decimal_end = token.end;
                        true
                    }
                }
                TokenType::Cn | TokenType::Unknown => {
                    ctx.alnum_end <= pos && ctx.decimal_end <= pos
                }
            }
        };
        out.push(Resolved { token, kept: keep });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenType, value: &str, start: usize) -> Token {
        Token::new(kind, value, start, start + value.chars().count())
    }

    fn values(out: &[Resolved]) -> Vec<&str> {
        out.iter()
            .filter(|r| r.kept)
            .map(|r| r.token.value.as_str())
            .collect()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Query".parse::<Mode>(), Ok(Mode::Query));
        assert_eq!("index".parse::<Mode>(), Ok(Mode::Index));
        assert!("fast".parse::<Mode>().is_err());
        assert_eq!(Mode::default().to_string(), "index");
    }

    #[test]
    fn test_index_keeps_all_words() {
        let mut ctx = SessionContext::new();
        let mut out = Vec::new();
        let candidates: Candidates = [
            tok(TokenType::AlphaNum, "button", 0),
            tok(TokenType::Word, "but", 0),
            tok(TokenType::Word, "button", 0),
        ]
        .into_iter()
        .collect();
        apply(Mode::Index, 0, candidates, &mut ctx, &mut out);
        assert_eq!(values(&out), ["button", "but", "button"]);
        assert_eq!(ctx.alnum_end(), 6);
    }

    #[test]
    fn test_index_drops_nested_runs() {
        let mut ctx = SessionContext {
            alnum_end: 6,
            decimal_end: 4,
            ..SessionContext::default()
        };
        let mut out = Vec::new();
        let candidates: Candidates = [
            tok(TokenType::AlphaNum, "tton", 2),
            tok(TokenType::Decimal, "二十", 2),
            tok(TokenType::Cn, "中", 2),
        ]
        .into_iter()
        .collect();
        apply(Mode::Index, 2, candidates, &mut ctx, &mut out);
        assert_eq!(values(&out), ["中"]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_index_pure_number_sets_both_cursors() {
        let mut ctx = SessionContext::new();
        let mut out = Vec::new();
        let candidates: Candidates = [
            tok(TokenType::AlphaNum, "2015", 0),
            tok(TokenType::Decimal, "2015", 0).with_number(2015),
        ]
        .into_iter()
        .collect();
        apply(Mode::Index, 0, candidates, &mut ctx, &mut out);
        assert_eq!(values(&out), ["2015"]);
        assert_eq!(out[0].token.kind, TokenType::AlphaNum);
        assert!(!out[1].kept);
        assert_eq!((ctx.alnum_end(), ctx.decimal_end()), (4, 4));
    }

    #[test]
    fn test_query_prefers_longest_word() {
        let mut ctx = SessionContext::new();
        let mut out = Vec::new();
        let candidates: Candidates = [
            tok(TokenType::AlphaNum, "button", 3),
            tok(TokenType::Word, "but", 3),
            tok(TokenType::Word, "button", 3),
        ]
        .into_iter()
        .collect();
        apply(Mode::Query, 3, candidates, &mut ctx, &mut out);
        assert_eq!(values(&out), ["button"]);
        assert_eq!(ctx.frontier(), 9);
        assert_eq!(out.iter().filter(|r| !r.kept).count(), 2);
    }

    #[test]
    fn test_query_drops_candidates_under_a_word() {
        let mut ctx = SessionContext {
            frontier: 3,
            ..SessionContext::default()
        };
        let mut out = Vec::new();
        let candidates: Candidates = [
            tok(TokenType::AlphaNum, "ntbutton", 1),
            tok(TokenType::Cn, "中", 1),
        ]
        .into_iter()
        .collect();
        apply(Mode::Query, 1, candidates, &mut ctx, &mut out);
        assert!(values(&out).is_empty());
    }

    #[test]
    fn test_query_longer_numeral_wins() {
        let mut ctx = SessionContext::new();
        let mut out = Vec::new();
        let candidates: Candidates = [
            tok(TokenType::AlphaNum, "3", 0),
            tok(TokenType::Decimal, "3千", 0).with_number(3000),
        ]
        .into_iter()
        .collect();
        apply(Mode::Query, 0, candidates, &mut ctx, &mut out);
        assert_eq!(values(&out), ["3千"]);
        assert_eq!(out[0].token.number, Some(3000));
        assert_eq!(ctx.decimal_end(), 2);
    }

    #[test]
    fn test_query_single_chars_yield_to_runs() {
        let mut ctx = SessionContext {
            decimal_end: 2,
            ..SessionContext::default()
        };
        let mut out = Vec::new();
        let candidates: Candidates = [tok(TokenType::Cn, "千", 1)].into_iter().collect();
        apply(Mode::Query, 1, candidates, &mut ctx, &mut out);
        assert!(values(&out).is_empty());
    }
}

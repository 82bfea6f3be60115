use super::{Candidates, Reach, Scan};
use crate::buffer::Window;
use crate::chars::{is_connector, is_latin_alnum};
use crate::context::SessionContext;
use crate::token::{Token, TokenType};

/// Greedy runs of Latin letters and digits.
///
/// A connector (`#&+-.@_`) joins the run only when a letter or digit follows
/// it, so `c-3po` and `3.14` stay whole while `end.` stops before the dot.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaNumMatcher;

impl Scan for AlphaNumMatcher {
    fn scan(
        &self,
        window: &Window,
        pos: usize,
        ctx: &SessionContext,
        out: &mut Candidates,
    ) -> Reach {
        match window.char_at(pos) {
            Some(ch) if is_latin_alnum(ch) && ctx.alnum_end <= pos => {}
            _ => return Reach::Complete,
        }

        let tail = window.tail(pos);
        let mut len = 1;
        // A trailing connector at the window edge may still join the run
        let mut lookahead = 0;
        while let Some(&ch) = tail.get(len) {
            if is_latin_alnum(ch) {
                len += 1;
            } else if is_connector(ch) {
                match tail.get(len + 1) {
                    Some(&next) if is_latin_alnum(next) => len += 2,
                    Some(_) => break,
                    None => {
                        lookahead = 1;
                        break;
                    }
                }
            } else {
                break;
            }
        }

        let end = pos + len;
        out.push(Token::new(
            TokenType::AlphaNum,
            window.text(pos, end),
            pos,
            end,
        ));
        Reach::at(window, end + lookahead)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_plain_run() {
        let w = window("hello world", 32);
        let (seen, reach) = run(&AlphaNumMatcher, &w, 0, &SessionContext::new());
        assert_eq!(seen, ["ALPHANUM hello"]);
        assert_eq!(reach, Reach::Complete);
    }

    #[test]
    fn test_connectors_need_following_alnum() {
        let w = window("c-3po, v1.2.3. e@mail", 32);
        let ctx = SessionContext::new();
        assert_eq!(run(&AlphaNumMatcher, &w, 0, &ctx).0, ["ALPHANUM c-3po"]);
        assert_eq!(run(&AlphaNumMatcher, &w, 7, &ctx).0, ["ALPHANUM v1.2.3"]);
        assert_eq!(run(&AlphaNumMatcher, &w, 15, &ctx).0, ["ALPHANUM e@mail"]);
    }

    #[test]
    fn test_ignores_non_latin_start() {
        let w = window("中abc", 32);
        let (seen, _) = run(&AlphaNumMatcher, &w, 0, &SessionContext::new());
        assert!(seen.is_empty());
    }

    #[test]
    fn test_skips_inside_accepted_run() {
        let w = window("abcdef", 32);
        let ctx = SessionContext {
            alnum_end: 6,
            ..SessionContext::default()
        };
        assert!(run(&AlphaNumMatcher, &w, 2, &ctx).0.is_empty());
    }

    #[test]
    fn test_reports_window_edge() {
        let w = window("abcdefgh", 4);
        let (seen, reach) = run(&AlphaNumMatcher, &w, 1, &SessionContext::new());
        assert_eq!(seen, ["ALPHANUM bcd"]);
        assert_eq!(reach, Reach::Edge);

        // Connector as the last char in the window
        let w = window("ab-cd", 3);
        let (seen, reach) = run(&AlphaNumMatcher, &w, 0, &SessionContext::new());
        assert_eq!(seen, ["ALPHANUM ab"]);
        assert_eq!(reach, Reach::Edge);
    }

    #[test]
    fn test_run_ending_at_stream_end() {
        let w = window("abc", 4);
        let (_, reach) = run(&AlphaNumMatcher, &w, 0, &SessionContext::new());
        assert_eq!(reach, Reach::Complete);
    }
}

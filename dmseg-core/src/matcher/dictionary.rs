use super::{Candidates, Reach, Scan};
use crate::buffer::Window;
use crate::chars::is_chinese;
use crate::context::SessionContext;
use crate::token::{Token, TokenType};
use dmseg_dict::TrieDictionary;
use std::sync::Arc;

/// Dictionary words, with a single-char fallback for Chinese text.
///
/// Every word of every dictionary that starts at the scan position becomes a
/// WORD candidate; dictionaries are consulted in order and a span already
/// matched by an earlier dictionary is not repeated. A Chinese char that no
/// dictionary match spans becomes a CN candidate.
#[derive(Debug, Clone, Default)]
pub struct DictionaryMatcher {
    dictionaries: Vec<Arc<TrieDictionary>>,
}

impl DictionaryMatcher {
    /// Match against `dictionaries`, earliest first
    pub fn new(dictionaries: Vec<Arc<TrieDictionary>>) -> Self {
        Self { dictionaries }
    }

    /// The attached dictionaries
    pub fn dictionaries(&self) -> &[Arc<TrieDictionary>] {
        &self.dictionaries
    }
}

impl Scan for DictionaryMatcher {
    fn scan(
        &self,
        window: &Window,
        pos: usize,
        ctx: &SessionContext,
        out: &mut Candidates,
    ) -> Reach {
        let Some(ch) = window.char_at(pos) else {
            return Reach::Complete;
        };

        let tail = window.tail(pos);
        let mut reach = Reach::Complete;
        let mut covered = ctx.claimed_end > pos;
        for dict in &self.dictionaries {
            let found = dict.match_prefixes(tail);
            if found.truncated && !window.is_eof() {
                reach = Reach::Edge;
            }
            for (len, word) in found.words {
                let end = pos + len;
                covered = true;
                let seen = out
                    .iter()
                    .any(|t| t.kind == TokenType::Word && t.end == end);
                if !seen {
                    out.push(Token::new(TokenType::Word, word.value(), pos, end));
                }
            }
        }

        if !covered && is_chinese(ch) {
            out.push(Token::new(TokenType::Cn, ch.to_string(), pos, pos + 1));
        }
        reach
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn matcher(words: &[&str]) -> DictionaryMatcher {
        DictionaryMatcher::new(vec![Arc::new(TrieDictionary::from_words(
            words.iter().copied(),
        ))])
    }

    #[test]
    fn test_all_prefix_words() {
        let m = matcher(&["but", "button", "cute"]);
        let w = window("buttonhole", 32);
        let (seen, reach) = run(&m, &w, 0, &SessionContext::new());
        assert_eq!(seen, ["WORD but", "WORD button"]);
        assert_eq!(reach, Reach::Complete);
    }

    #[test]
    fn test_cn_fallback_for_unclaimed_chinese() {
        let m = matcher(&["北京"]);
        let w = window("我在北京", 32);
        assert_eq!(run(&m, &w, 0, &SessionContext::new()).0, ["CN 我"]);
        assert_eq!(run(&m, &w, 2, &SessionContext::new()).0, ["WORD 北京"]);

        // 京 is spanned by the match at position 2
        let ctx = SessionContext {
            claimed_end: 4,
            ..SessionContext::default()
        };
        assert!(run(&m, &w, 3, &ctx).0.is_empty());
    }

    #[test]
    fn test_no_fallback_for_latin() {
        let m = matcher(&["ant"]);
        let w = window("xyz", 32);
        assert!(run(&m, &w, 0, &SessionContext::new()).0.is_empty());
    }

    #[test]
    fn test_dictionaries_in_order_without_repeats() {
        let first = Arc::new(TrieDictionary::from_words(["中国"]));
        let second = Arc::new(TrieDictionary::from_words(["中国", "中国人"]));
        let m = DictionaryMatcher::new(vec![first, second]);
        let w = window("中国人民", 32);
        assert_eq!(
            run(&m, &w, 0, &SessionContext::new()).0,
            ["WORD 中国", "WORD 中国人"]
        );
        assert_eq!(m.dictionaries().len(), 2);
    }

    #[test]
    fn test_truncated_match_reports_edge() {
        let m = matcher(&["but", "button"]);
        let w = window("buttonhole", 4);
        let (seen, reach) = run(&m, &w, 0, &SessionContext::new());
        assert_eq!(seen, ["WORD but"]);
        assert_eq!(reach, Reach::Edge);
    }
}

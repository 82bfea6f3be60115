//! Candidate token matchers
//!
//! Each matcher looks at one scan position of the window and pushes the
//! candidate tokens starting there. The tokenizer runs the chain in the
//! order [`Matcher::AlphaNum`], [`Matcher::Decimal`], [`Matcher::Dictionary`],
//! [`Matcher::Unknown`], pooling the candidates of one position before
//! handing them to the mode filter.

mod alphanum;
mod decimal;
mod dictionary;
mod unknown;

pub use alphanum::AlphaNumMatcher;
pub use decimal::DecimalMatcher;
pub use dictionary::DictionaryMatcher;
pub use unknown::UnknownMatcher;

use crate::buffer::Window;
use crate::context::SessionContext;
use crate::token::Token;
use dmseg_dict::TrieDictionary;
use smallvec::SmallVec;
use std::sync::Arc;

/// Candidates collected at one scan position
pub type Candidates = SmallVec<[Token; 4]>;

/// How far a scan got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// The match ended inside the window or at the end of the stream
    Complete,
    /// The match ran into the window edge while more input is pending
    Edge,
}

impl Reach {
    /// `Edge` if either scan hit the window edge
    pub fn or(self, other: Reach) -> Reach {
        if self == Reach::Edge || other == Reach::Edge {
            Reach::Edge
        } else {
            Reach::Complete
        }
    }

    /// Edge when the scan consumed the whole window and input is pending
    pub(crate) fn at(window: &Window, end: usize) -> Reach {
        if end >= window.end() && !window.is_eof() {
            Reach::Edge
        } else {
            Reach::Complete
        }
    }
}

/// A recognizer run at every scan position
pub trait Scan {
    /// Push the candidates starting at `pos` onto `out`.
    ///
    /// `out` already holds the candidates earlier matchers produced at the
    /// same position.
    fn scan(&self, window: &Window, pos: usize, ctx: &SessionContext, out: &mut Candidates)
        -> Reach;
}

/// The closed set of matchers a tokenizer chains
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Latin letter and digit runs
    AlphaNum(AlphaNumMatcher),
    /// Arabic and Chinese numerals
    Decimal(DecimalMatcher),
    /// Dictionary words and single Chinese chars
    Dictionary(DictionaryMatcher),
    /// Fallback for anything left unclaimed
    Unknown(UnknownMatcher),
}

impl Matcher {
    /// The standard chain over `dictionaries`
    pub fn chain(dictionaries: Vec<Arc<TrieDictionary>>) -> Vec<Matcher> {
        vec![
            Matcher::AlphaNum(AlphaNumMatcher),
            Matcher::Decimal(DecimalMatcher),
            Matcher::Dictionary(DictionaryMatcher::new(dictionaries)),
            Matcher::Unknown(UnknownMatcher),
        ]
    }
}

impl Scan for Matcher {
    fn scan(
        &self,
        window: &Window,
        pos: usize,
        ctx: &SessionContext,
        out: &mut Candidates,
    ) -> Reach {
        match self {
            Matcher::AlphaNum(m) => m.scan(window, pos, ctx, out),
            Matcher::Decimal(m) => m.scan(window, pos, ctx, out),
            Matcher::Dictionary(m) => m.scan(window, pos, ctx, out),
            Matcher::Unknown(m) => m.scan(window, pos, ctx, out),
        }
    }
}

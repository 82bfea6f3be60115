//! Character classes and input normalization

/// Chars allowed inside an alphanumeric run when followed by a letter or digit
pub const CONNECTORS: [char; 7] = ['#', '&', '+', '-', '.', '@', '_'];

/// Latin letter or Arabic digit
#[inline]
pub fn is_latin_alnum(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Connector symbol inside alphanumeric runs (`C++`, `e-mail`, `3.14`)
#[inline]
pub fn is_connector(ch: char) -> bool {
    CONNECTORS.contains(&ch)
}

/// Chinese ideograph, including the ideographic zero `〇`
pub fn is_chinese(ch: char) -> bool {
    matches!(ch,
        '\u{3007}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{2F800}'..='\u{2FA1F}'
    )
}

/// Whitespace and control chars never become tokens
#[inline]
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control()
}

/// Per-char normalization applied as input enters the buffer.
///
/// Every step maps one char to exactly one char, so token offsets keep
/// pointing into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Fold full-width ASCII forms and the ideographic space to half-width
    pub fullwidth_to_halfwidth: bool,
    /// Lowercase chars whose lowercase form is a single char
    pub lowercase: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            fullwidth_to_halfwidth: true,
            lowercase: true,
        }
    }
}

impl Normalizer {
    /// Normalize one char
    pub fn apply(&self, ch: char) -> char {
        let ch = if self.fullwidth_to_halfwidth {
            to_halfwidth(ch)
        } else {
            ch
        };
        if self.lowercase {
            to_single_lowercase(ch)
        } else {
            ch
        }
    }
}

fn to_halfwidth(ch: char) -> char {
    match ch {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
        _ => ch,
    }
}

fn to_single_lowercase(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

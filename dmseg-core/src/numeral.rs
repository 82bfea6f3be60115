//! Chinese numeral recognition and conversion
//!
//! Arabic digits count as numeral digits too, so mixed literals such as
//! `3千` convert as well.

use thiserror::Error;

/// Errors raised while converting a numeral literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// A char outside the digit and unit tables
    #[error("'{ch}' is not a numeral char in {literal:?}")]
    InvalidChar {
        /// The offending char
        ch: char,
        /// The whole literal being converted
        literal: String,
    },

    /// The value does not fit in 64 bits
    #[error("numeral {literal:?} overflows")]
    Overflow {
        /// The whole literal being converted
        literal: String,
    },
}

/// Value of a numeral digit char
pub fn digit_value(ch: char) -> Option<u64> {
    let value = match ch {
        '0' | '〇' | '零' => 0,
        '1' | '一' | '壹' => 1,
        '2' | '二' | '两' | '贰' => 2,
        '3' | '三' | '叁' => 3,
        '4' | '四' | '肆' => 4,
        '5' | '五' | '伍' => 5,
        '6' | '六' | '陆' => 6,
        '7' | '七' | '柒' => 7,
        '8' | '八' | '捌' => 8,
        '9' | '九' | '玖' => 9,
        _ => return None,
    };
    Some(value)
}

/// Multiplier of a numeral unit char
pub fn unit_value(ch: char) -> Option<u64> {
    let value = match ch {
        '十' | '拾' => 10,
        '百' | '佰' => 100,
        '千' | '仟' => 1_000,
        '万' | '萬' => 10_000,
        '亿' | '億' => 100_000_000,
        _ => return None,
    };
    Some(value)
}

/// Digit char (Arabic or Chinese)
#[inline]
pub fn is_numeral_digit(ch: char) -> bool {
    digit_value(ch).is_some()
}

/// Unit char
#[inline]
pub fn is_numeral_unit(ch: char) -> bool {
    unit_value(ch).is_some()
}

/// Digit or unit char
#[inline]
pub fn is_numeral(ch: char) -> bool {
    is_numeral_digit(ch) || is_numeral_unit(ch)
}

/// Convert a numeral literal to its integer value.
///
/// Digits accumulate; a digit directly after a non-zero digit shifts the
/// accumulator one decimal place first, so plain digit runs (`二〇一五`) read
/// positionally. A unit multiplies the accumulator, except that a leading `十`
/// (or `拾`) stands for ten itself. The result is only meaningful for well-formed
/// literals.
pub fn chinese_num_to_int(chars: &[char]) -> Result<u64, NumeralError> {
    let overflow = || NumeralError::Overflow {
        literal: chars.iter().collect(),
    };

    let mut result: u64 = 0;
    let mut after_digit = false;
    for (at, &ch) in chars.iter().enumerate() {
        if let Some(digit) = digit_value(ch) {
            if after_digit {
                result = result.checked_mul(10).ok_or_else(overflow)?;
            }
            result = result.checked_add(digit).ok_or_else(overflow)?;
            if digit != 0 {
                after_digit = true;
            }
        } else if let Some(unit) = unit_value(ch) {
            if at == 0 && unit == 10 {
                result += 1;
            }
            result = result.checked_mul(unit).ok_or_else(overflow)?;
            after_digit = false;
        } else {
            return Err(NumeralError::InvalidChar {
                ch,
                literal: chars.iter().collect(),
            });
        }
    }
    Ok(result)
}

/// Convenience wrapper over [`chinese_num_to_int`] for string literals
pub fn parse_numeral(literal: &str) -> Result<u64, NumeralError> {
    let chars: Vec<char> = literal.chars().collect();
    chinese_num_to_int(&chars)
}

/// Arabic number syntax: digits with at most one interior decimal point
pub fn is_number(text: &str) -> bool {
    let mut parts = text.split('.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    if parts.next().is_some() {
        return false;
    }
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

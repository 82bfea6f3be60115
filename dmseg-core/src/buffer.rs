//! Buffered char window over a byte stream

use crate::chars::Normalizer;
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::io::Read;

/// Bytes requested from the underlying reader per read call
const READ_CHUNK: usize = 4096;

/// Incremental UTF-8 decoder over a reader.
///
/// A multi-byte sequence split across two reads is carried over and completed
/// by the next read.
pub struct CharReader<R> {
    reader: R,
    /// Undecoded bytes, at most one incomplete sequence between reads
    pending: Vec<u8>,
    decoded: VecDeque<char>,
    /// Absolute byte offset of `pending[0]`
    byte_offset: usize,
    eof: bool,
}

impl<R: Read> CharReader<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            decoded: VecDeque::new(),
            byte_offset: 0,
            eof: false,
        }
    }

    /// Next char of the stream, `None` once the stream is exhausted
    pub fn next_char(&mut self) -> Result<Option<char>> {
        loop {
            if let Some(ch) = self.decoded.pop_front() {
                return Ok(Some(ch));
            }
            if self.eof {
                return Ok(None);
            }
            self.read_chunk()?;
        }
    }

    /// Absolute byte offset of the first byte not yet decoded
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    fn read_chunk(&mut self) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK];
        let read = self.reader.read(&mut chunk)?;
        if read == 0 {
            self.eof = true;
            if !self.pending.is_empty() {
                // Stream ended inside a multi-byte sequence
                return Err(Error::InvalidUtf8 {
                    offset: self.byte_offset,
                });
            }
            return Ok(());
        }

        self.pending.extend_from_slice(&chunk[..read]);
        let valid = match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                self.decoded.extend(text.chars());
                self.pending.len()
            }
            Err(err) if err.error_len().is_some() => {
                return Err(Error::InvalidUtf8 {
                    offset: self.byte_offset + err.valid_up_to(),
                });
            }
            Err(err) => {
                let valid = err.valid_up_to();
                if let Ok(text) = std::str::from_utf8(&self.pending[..valid]) {
                    self.decoded.extend(text.chars());
                }
                valid
            }
        };
        self.pending.drain(..valid);
        self.byte_offset += valid;
        Ok(())
    }
}

/// The slice of input the matchers scan in one pass.
///
/// Positions are absolute char offsets into the stream. The window holds the
/// chars `[start, start + len)`, normalized as they were read.
#[derive(Debug)]
pub struct Window {
    chars: Vec<char>,
    capacity: usize,
    start: usize,
    eof: bool,
    normalizer: Normalizer,
}

impl Window {
    /// Create an empty window holding at most `capacity` chars
    pub fn new(capacity: usize, normalizer: Normalizer) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            capacity,
            start: 0,
            eof: false,
            normalizer,
        }
    }

    /// Drop the chars before `from` and top the window up from `reader`.
    ///
    /// Returns the number of chars read.
    pub fn refill<R: Read>(&mut self, from: usize, reader: &mut CharReader<R>) -> Result<usize> {
        let consumed = from.saturating_sub(self.start).min(self.chars.len());
        self.chars.drain(..consumed);
        self.start += consumed;

        let mut read = 0;
        while self.chars.len() < self.capacity && !self.eof {
            match reader.next_char()? {
                Some(ch) => {
                    self.chars.push(self.normalizer.apply(ch));
                    read += 1;
                }
                None => self.eof = true,
            }
        }
        Ok(read)
    }

    /// Absolute offset of the first char in the window
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute offset one past the last char in the window
    pub fn end(&self) -> usize {
        self.start + self.chars.len()
    }

    /// Number of chars in the window
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check whether the window holds no chars
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Maximum number of chars the window holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The stream has no chars beyond this window
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Char at absolute position `pos`
    pub fn char_at(&self, pos: usize) -> Option<char> {
        pos.checked_sub(self.start)
            .and_then(|at| self.chars.get(at))
            .copied()
    }

    /// Chars from absolute position `pos` to the end of the window
    pub fn tail(&self, pos: usize) -> &[char] {
        let at = pos.saturating_sub(self.start).min(self.chars.len());
        &self.chars[at..]
    }

    /// Text of the absolute range `[start, end)`
    pub fn text(&self, start: usize, end: usize) -> String {
        let from = start.saturating_sub(self.start).min(self.chars.len());
        let to = end.saturating_sub(self.start).min(self.chars.len());
        self.chars[from..to.max(from)].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Hands out at most `step` bytes per read
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn drain<R: Read>(reader: &mut CharReader<R>) -> Result<String> {
        let mut out = String::new();
        while let Some(ch) = reader.next_char()? {
            out.push(ch);
        }
        Ok(out)
    }

    #[test]
    fn test_decodes_split_sequences() {
        let text = "中文abc分词";
        for step in 1..=4 {
            let mut reader = CharReader::new(Trickle {
                data: text.as_bytes(),
                step,
            });
            assert_eq!(drain(&mut reader).unwrap(), text);
            assert_eq!(reader.byte_offset(), text.len());
        }
    }

    #[test]
    fn test_invalid_utf8_reports_offset() {
        let bytes = [b'a', b'b', 0xFF, b'c'];
        let mut reader = CharReader::new(Cursor::new(bytes));
        match drain(&mut reader) {
            Err(Error::InvalidUtf8 { offset }) => assert_eq!(offset, 2),
            other => panic!("expected invalid UTF-8, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_sequence_at_eof() {
        let bytes = "ab中".as_bytes();
        let mut reader = CharReader::new(Cursor::new(&bytes[..bytes.len() - 1]));
        match drain(&mut reader) {
            Err(Error::InvalidUtf8 { offset }) => assert_eq!(offset, 2),
            other => panic!("expected invalid UTF-8, got {other:?}"),
        }
    }

    #[test]
    fn test_window_fill_and_slide() {
        let mut reader = CharReader::new(Cursor::new("abcdefgh"));
        let mut window = Window::new(4, Normalizer::default());

        assert_eq!(window.refill(0, &mut reader).unwrap(), 4);
        assert_eq!(window.text(0, 4), "abcd");
        assert!(!window.is_eof());

        // Keep "cd", pull two more
        assert_eq!(window.refill(2, &mut reader).unwrap(), 2);
        assert_eq!(window.start(), 2);
        assert_eq!(window.end(), 6);
        assert_eq!(window.tail(3), &['d', 'e', 'f']);
        assert_eq!(window.char_at(1), None);
        assert_eq!(window.char_at(5), Some('f'));

        assert_eq!(window.refill(6, &mut reader).unwrap(), 2);
        assert_eq!(window.text(6, 8), "gh");
        assert!(window.is_eof());
    }

    #[test]
    fn test_window_normalizes_input() {
        let mut reader = CharReader::new(Cursor::new("ＡBｃ"));
        let mut window = Window::new(8, Normalizer::default());
        window.refill(0, &mut reader).unwrap();
        assert_eq!(window.text(0, 3), "abc");
        assert!(window.is_eof());
    }
}

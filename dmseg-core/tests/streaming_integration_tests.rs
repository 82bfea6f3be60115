//! Integration tests for streaming tokenization over chunked readers

use dmseg_core::{Error, Mode, Segmenter, Token, TokenizerConfig, TokenizerState};
use dmseg_dict::TrieDictionary;
use std::io::{self, Read};

/// Mock reader that provides data in small chunks
struct ChunkedReader {
    data: Vec<u8>,
    position: usize,
    chunk_size: usize,
}

impl ChunkedReader {
    fn new(data: &[u8], chunk_size: usize) -> Self {
        Self {
            data: data.to_vec(),
            position: 0,
            chunk_size,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.data.len() {
            return Ok(0);
        }

        let remaining = self.data.len() - self.position;
        let to_read = remaining.min(self.chunk_size).min(buf.len());

        buf[..to_read].copy_from_slice(&self.data[self.position..self.position + to_read]);
        self.position += to_read;

        Ok(to_read)
    }
}

/// Serves its data, then fails every further read
struct FailingReader {
    inner: ChunkedReader,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away")),
            n => Ok(n),
        }
    }
}

const TEXT: &str = "我在北京大学读书, 用iPhone 13拍了二〇一五年的照片. C++ and e-mail!";

fn segmenter(buffer: usize) -> Segmenter {
    Segmenter::builder()
        .dictionary(TrieDictionary::from_words([
            "北京", "北京大学", "大学", "读书", "照片", "iphone", "and", "ant",
        ]))
        .config(TokenizerConfig::builder().buffer_size(buffer).build().unwrap())
        .build()
}

fn ends(tokens: &[Token]) -> Vec<usize> {
    tokens.iter().map(|t| t.end).collect()
}

fn assert_ascending_ends(tokens: &[Token], label: &str) {
    assert!(
        tokens.windows(2).all(|pair| pair[0].end <= pair[1].end),
        "{label}: end offsets go backward: {:?}",
        ends(tokens)
    );
}

#[test]
fn test_small_windows_find_the_same_tokens() {
    // Every match in TEXT fits in 8 chars with a char of lookahead
    for mode in [Mode::Index, Mode::Query] {
        let expected = segmenter(128).segment_str(mode, TEXT);
        assert_ascending_ends(&expected, "buffer 128");
        for buffer in [8, 9, 13, 32] {
            let tokens = segmenter(buffer).segment_str(mode, TEXT);
            assert_eq!(tokens, expected, "{mode} mode, buffer {buffer}");
        }
    }
}

#[test]
fn test_order_holds_across_refills() {
    // 丙丁戊 runs past the first 4-char window while 甲乙丙丁 fills it
    let segmenter = |buffer| {
        Segmenter::builder()
            .dictionary(TrieDictionary::from_words(["甲乙丙丁", "丙", "丙丁戊"]))
            .config(TokenizerConfig::builder().buffer_size(buffer).build().unwrap())
            .build()
    };
    let expected = segmenter(128).segment_str(Mode::Index, "甲乙丙丁戊己");
    let values: Vec<&str> = expected.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, ["丙", "甲乙丙丁", "丙丁戊", "己"]);

    for buffer in 4..8 {
        let tokens = segmenter(buffer).segment_str(Mode::Index, "甲乙丙丁戊己");
        assert_ascending_ends(&tokens, &format!("buffer {buffer}"));
        assert_eq!(tokens, expected, "buffer {buffer}");
    }
}

#[test]
fn test_increments_follow_emission_order() {
    let segmenter = |buffer| {
        Segmenter::builder()
            .dictionary(TrieDictionary::from_words(["北京", "北京大学", "大学", "学生"]))
            .config(TokenizerConfig::builder().buffer_size(buffer).build().unwrap())
            .build()
    };
    for buffer in [4, 5, 128] {
        let tokens = segmenter(buffer).segment_str(Mode::Query, "北京大学生");
        let summary: Vec<(&str, usize)> = tokens
            .iter()
            .map(|t| (t.value.as_str(), t.position_increment))
            .collect();
        // 北京 ends before 北京大学, 大学 ends with it; both precede 学生
        assert_eq!(summary, [("北京大学", 2), ("学生", 2)], "buffer {buffer}");
    }
}

#[test]
fn test_window_smaller_than_word_splits_it() {
    let segmenter = Segmenter::builder()
        .dictionary(TrieDictionary::from_words(["北京大学"]))
        .config(TokenizerConfig::builder().buffer_size(3).build().unwrap())
        .build();
    let values: Vec<String> = segmenter
        .query_tokens("北京大学".as_bytes())
        .map(|t| t.value)
        .collect();
    // The word never fits in the window, so its chars surface one by one
    assert_eq!(values, ["北", "京", "大", "学"]);
}

#[test]
fn test_read_failure_ends_stream_with_error() {
    // The first window holds exactly 北京大学
    let segmenter = segmenter(4);
    let reader = FailingReader {
        inner: ChunkedReader::new("北京大学 and".as_bytes(), 5),
    };
    let mut stream = segmenter.query_tokens(reader);
    let tokens: Vec<Token> = stream.by_ref().collect();

    // Tokens completed before the failure are still delivered
    assert!(tokens.iter().any(|t| t.value == "北京大学"));
    assert!(matches!(stream.error(), Some(Error::Io(_))));
    assert!(matches!(stream.finish(), Err(Error::Io(_))));
}

#[test]
fn test_invalid_utf8_reports_byte_offset() {
    let mut bytes = "北京 ".as_bytes().to_vec();
    bytes.push(0xC0);
    bytes.extend_from_slice(b"ant");

    let stream = segmenter(16).index_tokens(ChunkedReader::new(&bytes, 3));
    match stream.finish() {
        Err(Error::InvalidUtf8 { offset }) => assert_eq!(offset, 7),
        other => panic!("expected invalid UTF-8, got {other:?}"),
    }
}

#[test]
fn test_tokenizer_propagates_errors() {
    let reader = FailingReader {
        inner: ChunkedReader::new(b"", 4),
    };
    let mut tokenizer = segmenter(16).tokenizer(Mode::Index, reader);
    assert!(matches!(tokenizer.next_token(), Err(Error::Io(_))));
    assert_eq!(tokenizer.state(), TokenizerState::Failed);
    assert!(matches!(tokenizer.next_token(), Ok(None)));
}

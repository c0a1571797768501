use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::{SHARED_METRIC, UINT64};

lazy_static! {
    pub static ref ATTRIBUTE_RX:   Regex = Regex::new(r"#\[").unwrap();
    pub static ref DOC_COMMENT_RX: Regex = Regex::new(r"///(.*)$").unwrap();
    pub static ref COMMENT_RX:     Regex = Regex::new(r"//").unwrap();
}

/// What a single input line means to the parsers.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Attribute such as `#[derive(Default)]`.
    Skip,
    DocComment {
        help: String,
    },
    /// A plain `//` comment.
    Comment,
    BlockEnd,
    /// `pub struct Name {` or `type Name struct {`, the latter marking the aggregate.
    Header {
        type_name:    String,
        is_aggregate: bool,
    },
    /// `pub field_name: Type,`; `SharedMetric` is already rewritten to `uint64`.
    Field {
        name:      String,
        type_name: String,
    },
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    /// Raw line with trailing whitespace removed.
    pub text:   String,
    pub kind:   LineKind,
}

/// Classifies one line by its markers and, failing those, by its whitespace
/// token count.
pub fn classify_line(raw: &str) -> LineKind {
    let line = raw.trim_end();

    if ATTRIBUTE_RX.is_match(line) {
        return LineKind::Skip;
    }
    if let Some(caps) = DOC_COMMENT_RX.captures(line) {
        return LineKind::DocComment {
            help: caps[1].trim().to_string(),
        };
    }
    if COMMENT_RX.is_match(line) {
        return LineKind::Comment;
    }
    if line == "}" {
        return LineKind::BlockEnd;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["type", name, _, _] => LineKind::Header {
            type_name:    name.to_string(),
            is_aggregate: true,
        },
        [_, _, name, _] => LineKind::Header {
            type_name:    name.to_string(),
            is_aggregate: false,
        },
        [_, name, type_name] => {
            let type_name = match type_name.trim_end_matches(',') {
                SHARED_METRIC => UINT64,
                other => other,
            };
            LineKind::Field {
                name:      name.trim_end_matches(':').to_string(),
                type_name: type_name.to_string(),
            }
        }
        _ => LineKind::Other,
    }
}

/// Splits `text` into classified lines, numbered from 1.
pub fn tokenize_lines(text: &str) -> Vec<Line> {
    text.lines()
        .enumerate()
        .map(|(index, raw)| Line {
            number: index + 1,
            text:   raw.trim_end().to_string(),
            kind:   classify_line(raw),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_attribute() {
        assert_eq!(classify_line("#[derive(Default, Serialize)]"), LineKind::Skip);
        assert_eq!(classify_line("    #[serde(skip)]"), LineKind::Skip);
    }

    #[test]
    fn test_classify_doc_comment() {
        assert_eq!(
            classify_line("/// Metmds metrics"),
            LineKind::DocComment { help: "Metmds metrics".into() }
        );
        assert_eq!(
            classify_line("    /// Number of accepted packets.   "),
            LineKind::DocComment { help: "Number of accepted packets.".into() }
        );
        assert_eq!(classify_line("///"), LineKind::DocComment { help: "".into() });
    }

    #[test]
    fn test_classify_plain_comment() {
        assert_eq!(classify_line("// see the device model"), LineKind::Comment);
        assert_eq!(classify_line("    // a b"), LineKind::Comment);
    }

    #[test]
    fn test_classify_block_end() {
        assert_eq!(classify_line("}"), LineKind::BlockEnd);
        assert_eq!(classify_line("}   "), LineKind::BlockEnd);
        // only a brace in the first column closes a block
        assert_eq!(classify_line("    }"), LineKind::Other);
    }

    #[test]
    fn test_classify_headers() {
        assert_eq!(
            classify_line("pub struct MmdsMetrics {"),
            LineKind::Header { type_name: "MmdsMetrics".into(), is_aggregate: false }
        );
        assert_eq!(
            classify_line("type FirecrackerMetrics struct {"),
            LineKind::Header { type_name: "FirecrackerMetrics".into(), is_aggregate: true }
        );
    }

    #[test]
    fn test_classify_fields() {
        assert_eq!(
            classify_line("    pub rx_accepted: SharedMetric,"),
            LineKind::Field { name: "rx_accepted".into(), type_name: "uint64".into() }
        );
        assert_eq!(
            classify_line("    pub mmds: MmdsMetrics,"),
            LineKind::Field { name: "mmds".into(), type_name: "MmdsMetrics".into() }
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify_line(""), LineKind::Other);
        assert_eq!(classify_line("pub struct"), LineKind::Other);
        assert_eq!(classify_line("a b c d e"), LineKind::Other);
    }

    #[test]
    fn test_tokenize_lines_numbers_and_trims() {
        let lines = tokenize_lines("/// Help\npub struct A {  \n}\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[1].text, "pub struct A {");
        assert_eq!(lines[2].kind, LineKind::BlockEnd);
    }
}

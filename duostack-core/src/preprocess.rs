//! 字符串字面量预处理
//!
//! 把 `"..."` 展开为每个字符的十进制码点加 `_` 分隔符，
//! 紧贴在引号前的 `i` 表示反转内容。引号和 `i` 标记本身被移除。
//!
//! ```
//! use duostack_core::preprocess;
//!
//! assert_eq!(preprocess("\"Hi\""), "72_105_");
//! assert_eq!(preprocess("i\"Hi\""), "105_72_");
//! ```

use duostack_log::{debug, warn, Logger};

const QUOTE: char = '"';
const REVERSE_MARKER: char = 'i';

/// 预处理源码
pub fn preprocess(source: &str) -> String {
    preprocess_with_logger(source, &Logger::noop())
}

/// 预处理源码，并记录每次展开
pub fn preprocess_with_logger(source: &str, logger: &Logger) -> String {
    let mut output = String::with_capacity(source.len());
    // 在引号内时保存已读取的内容
    let mut literal: Option<String> = None;
    let mut marker_pending = false;
    let mut reverse = false;

    for c in source.chars() {
        if let Some(content) = literal.as_mut() {
            if c == QUOTE {
                expand(&mut output, content, reverse, logger);
                literal = None;
                reverse = false;
            } else {
                content.push(c);
            }
            continue;
        }

        match c {
            QUOTE => {
                reverse = marker_pending;
                marker_pending = false;
                literal = Some(String::new());
            }
            REVERSE_MARKER => {
                // 连续的 `i` 只有最后一个可能是标记
                if marker_pending {
                    output.push(REVERSE_MARKER);
                }
                marker_pending = true;
            }
            _ => {
                if marker_pending {
                    output.push(REVERSE_MARKER);
                    marker_pending = false;
                }
                output.push(c);
            }
        }
    }

    if marker_pending {
        output.push(REVERSE_MARKER);
    }
    if let Some(content) = literal {
        warn!(
            logger,
            "Unterminated string literal dropped ({} chars)",
            content.chars().count()
        );
    }

    output
}

fn expand(output: &mut String, content: &str, reverse: bool, logger: &Logger) {
    let start = output.len();
    let mut push_code = |c: char| {
        output.push_str(&u32::from(c).to_string());
        output.push('_');
    };
    if reverse {
        content.chars().rev().for_each(&mut push_code);
    } else {
        content.chars().for_each(&mut push_code);
    }
    debug!(
        logger,
        "Expanded {:?}{} into {:?}",
        content,
        if reverse { " (reversed)" } else { "" },
        &output[start..]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use duostack_log::{Level, LogRingBuffer};

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(preprocess("3 4+."), "3 4+.");
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn test_expand_literal() {
        assert_eq!(preprocess("\"AB\"[,]"), "65_66_[,]");
    }

    #[test]
    fn test_reverse_marker_removed() {
        assert_eq!(preprocess("i\"AB\""), "66_65_");
    }

    #[test]
    fn test_marker_not_before_quote_kept() {
        assert_eq!(preprocess("i1"), "i1");
        assert_eq!(preprocess("1i"), "1i");
        assert_eq!(preprocess("ii\"A\""), "i65_");
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(preprocess("1\"\"2"), "12");
    }

    #[test]
    fn test_literal_keeps_special_chars() {
        // 引号内的 `i` 和其他符号都只是内容
        assert_eq!(preprocess("\"i.\""), "105_46_");
    }

    #[test]
    fn test_non_ascii_code_points() {
        assert_eq!(preprocess("\"é\""), "233_");
    }

    #[test]
    fn test_unterminated_literal_dropped() {
        let ring = LogRingBuffer::new(16);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        assert_eq!(preprocess_with_logger("5.\"abc", &logger), "5.");
        assert!(ring.contains("Unterminated string literal"));
    }

    #[test]
    fn test_expansion_logged() {
        let ring = LogRingBuffer::new(16);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        preprocess_with_logger("i\"ab\"", &logger);
        assert!(ring.contains("(reversed)"));
        assert!(ring.contains("98_97_"));
    }
}

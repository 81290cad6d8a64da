//! 文本分段
//!
//! Google 翻译 TTS 单次请求最多 100 个字符，长文本需要先按标点切分，
//! 再把超长的片段按空格折成多段

use crate::error::TtsError;

/// 单次请求的最大字符数
pub const MAX_CHARS: usize = 100;

/// 断句标点（'.' 和 ',' 另行处理）
const PUNCTUATION: &str = "?!？！¡()[]¿…‥،;:—。，、：‧\n";

/// 将文本切分为可以逐段发送的片段
pub fn tokenize(text: &str) -> Result<Vec<String>, TtsError> {
    if text.trim().is_empty() {
        return Err(TtsError::EmptyText);
    }

    let tokens: Vec<String> = split_on_punctuation(text)
        .into_iter()
        .map(str::trim)
        .filter(|token| has_speakable_char(token))
        .flat_map(|token| minimize(token, MAX_CHARS))
        .collect();

    if tokens.is_empty() {
        return Err(TtsError::NoTokens);
    }

    Ok(tokens)
}

/// 按标点切分。'.' 和 ',' 只有后面是空白或文本结尾时才断句，
/// 避免切开 3.14、1,000 这类数字
fn split_on_punctuation(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_break = if c == '.' || c == ',' {
            chars.peek().map_or(true, |&(_, next)| next.is_whitespace())
        } else {
            PUNCTUATION.contains(c)
        };

        if is_break {
            tokens.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    tokens.push(&text[start..]);

    tokens
}

fn has_speakable_char(token: &str) -> bool {
    token.chars().any(|c| {
        !c.is_whitespace() && !c.is_ascii_punctuation() && !PUNCTUATION.contains(c)
    })
}

/// 把超过 max_chars 的片段在最后一个空格处折断，没有空格则硬切
fn minimize(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text.trim_start_matches(' ');

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let cut = match rest[..limit].rfind(' ') {
            Some(i) if i > 0 => i,
            _ => limit,
        };

        let chunk = rest[..cut].trim_end();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        rest = rest[cut..].trim_start_matches(' ');
    }

    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_token() {
        assert_eq!(tokenize("Guten Tag").unwrap(), vec!["Guten Tag"]);
    }

    #[test]
    fn test_split_on_sentence_punctuation() {
        let tokens = tokenize("Guten Morgen! Wie geht es dir? Gut, danke.").unwrap();
        assert_eq!(tokens, vec!["Guten Morgen", "Wie geht es dir", "Gut", "danke"]);
    }

    #[test]
    fn test_numbers_are_not_split() {
        let tokens = tokenize("Pi ist 3.14 und 1,000 ist tausend").unwrap();
        assert_eq!(tokens, vec!["Pi ist 3.14 und 1,000 ist tausend"]);
    }

    #[test]
    fn test_cjk_punctuation() {
        let tokens = tokenize("你好。今天天气很好，我们去公园吧！").unwrap();
        assert_eq!(tokens, vec!["你好", "今天天气很好", "我们去公园吧"]);
    }

    #[test]
    fn test_long_token_breaks_on_space() {
        let word = "abcdefghi";
        let text = vec![word; 25].join(" ");
        let tokens = tokenize(&text).unwrap();

        assert!(tokens.len() > 1);
        for token in &tokens {
            assert!(token.chars().count() <= MAX_CHARS);
            assert!(!token.starts_with(' ') && !token.ends_with(' '));
        }
        assert_eq!(tokens.join(" "), text);
    }

    #[test]
    fn test_long_token_without_spaces_is_hard_cut() {
        let text = "ä".repeat(250);
        let tokens = tokenize(&text).unwrap();
        let lengths: Vec<usize> = tokens.iter().map(|t| t.chars().count()).collect();
        assert_eq!(lengths, vec![100, 100, 50]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(matches!(tokenize(""), Err(TtsError::EmptyText)));
        assert!(matches!(tokenize("   \n "), Err(TtsError::EmptyText)));
        assert!(matches!(tokenize("?!... ,"), Err(TtsError::NoTokens)));
    }
}

//! 말투(반말/존댓말) 보정
//!
//! 외부 다듬기 단계가 어떤 문장을 돌려주든 마지막에 요청한 말투의 어미로 맞춥니다.
//! 실패하지 않으며 항상 `.`, `!`, `?` 중 하나로 끝나는 문장을 돌려줍니다.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::corrector::normalize_spaces;
use crate::error::ParseSpeechLevelError;

/// 말투
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechLevel {
    /// 반말 (해체)
    #[default]
    Banmal,
    /// 존댓말 (해요체/합니다체)
    Jondaetmal,
}

impl SpeechLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SpeechLevel::Banmal => "banmal",
            SpeechLevel::Jondaetmal => "jondaetmal",
        }
    }
}

impl fmt::Display for SpeechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeechLevel {
    type Err = ParseSpeechLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "banmal" | "반말" => Ok(SpeechLevel::Banmal),
            "jondaetmal" | "존댓말" => Ok(SpeechLevel::Jondaetmal),
            other => Err(ParseSpeechLevelError(other.to_string())),
        }
    }
}

/// 끝 어미 치환 규칙
struct EndingRule {
    pattern: Regex,
    replacement: &'static str,
}

fn ending_rules(table: &[(&str, &'static str)]) -> Vec<EndingRule> {
    table
        .iter()
        .map(|&(pattern, replacement)| EndingRule {
            pattern: Regex::new(pattern).expect("invalid ending pattern"),
            replacement,
        })
        .collect()
}

static POLITE_RULES: LazyLock<Vec<EndingRule>> = LazyLock::new(|| {
    ending_rules(&[
        (r"것이다([.!?])?$", "거예요${1}"),
        (r"거다([.!?])?$", "거예요${1}"),
        (r"했다([.!?])?$", "했어요${1}"),
        (r"한다([.!?])?$", "해요${1}"),
        (r"갔다([.!?])?$", "갔어요${1}"),
    ])
});

static PLAIN_RULES: LazyLock<Vec<EndingRule>> = LazyLock::new(|| {
    ending_rules(&[
        (r"것이다([.!?])?$", "거야${1}"),
        (r"거다([.!?])?$", "거야${1}"),
        (r"거예요([.!?])?$", "거야${1}"),
        (r"했어요([.!?])?$", "했어${1}"),
        (r"해요([.!?])?$", "해${1}"),
        (r"합니다([.!?])?$", "한다${1}"),
        // 남은 '요' 제거
        (r"요([.!?])$", "${1}"),
    ])
});

static QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[“”"]"#).expect("invalid quote pattern"));
static POLITE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(요|니다)[.!?]$").expect("invalid polite pattern"));
static BARE_DA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"다([.!?])$").expect("invalid ending pattern"));

/// 문장 끝이 `.`, `!`, `?` 인지
pub fn has_terminal_mark(s: &str) -> bool {
    s.ends_with(['.', '!', '?'])
}

fn apply(rules: &[EndingRule], text: String) -> String {
    rules.iter().fold(text, |acc, rule| {
        rule.pattern.replace(&acc, rule.replacement).into_owned()
    })
}

fn normalize(candidate: &str) -> String {
    let mut t = normalize_spaces(&QUOTES.replace_all(candidate, ""));
    if !has_terminal_mark(&t) {
        t.push('.');
    }
    t.replace("거에요", "거예요")
}

fn enforce_once(candidate: &str, level: SpeechLevel) -> String {
    let t = normalize(candidate);
    match level {
        SpeechLevel::Jondaetmal => {
            let t = apply(&POLITE_RULES, t);
            if POLITE_ENDING.is_match(&t) {
                t
            } else {
                // 최후 수단: 끝의 '다'를 '요'로 (불규칙 어미는 어색할 수 있음)
                BARE_DA.replace(&t, "요${1}").into_owned()
            }
        }
        SpeechLevel::Banmal => apply(&PLAIN_RULES, t),
    }
}

/// 후보 문장을 요청한 말투로 보정
///
/// 한 번의 보정이 다음 보정 대상을 드러낼 수 있어 (예: '요' 제거 후 남는 '해요') 바뀌지 않을 때까지 반복합니다.
/// 반말 규칙은 문장을 늘리지 않고, 존댓말 규칙은 한 번 만에 고정되므로 반복은 끝납니다.
pub fn enforce_register(candidate: &str, level: SpeechLevel) -> String {
    let mut current = enforce_once(candidate, level);
    loop {
        let next = enforce_once(&current, level);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speech_level() {
        assert_eq!("banmal".parse::<SpeechLevel>().unwrap(), SpeechLevel::Banmal);
        assert_eq!("존댓말".parse::<SpeechLevel>().unwrap(), SpeechLevel::Jondaetmal);
        assert!("formal".parse::<SpeechLevel>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SpeechLevel::Jondaetmal).unwrap();
        assert_eq!(json, "\"jondaetmal\"");
        let parsed: SpeechLevel = serde_json::from_str("\"banmal\"").unwrap();
        assert_eq!(parsed, SpeechLevel::Banmal);
    }

    #[test]
    fn test_polite_rewrites() {
        assert_eq!(enforce_register("내일 갈 거다", SpeechLevel::Jondaetmal), "내일 갈 거예요.");
        assert_eq!(enforce_register("숙제를 했다.", SpeechLevel::Jondaetmal), "숙제를 했어요.");
        assert_eq!(enforce_register("운동을 한다!", SpeechLevel::Jondaetmal), "운동을 해요!");
        assert_eq!(
            enforce_register("어제 학교 갔다", SpeechLevel::Jondaetmal),
            "어제 학교 갔어요."
        );
        assert_eq!(enforce_register("비가 올 것이다.", SpeechLevel::Jondaetmal), "비가 올 거예요.");
    }

    #[test]
    fn test_polite_fallback() {
        assert_eq!(enforce_register("가야겠다.", SpeechLevel::Jondaetmal), "가야겠요.");
        // 이미 존댓말이면 그대로
        assert_eq!(enforce_register("감사합니다.", SpeechLevel::Jondaetmal), "감사합니다.");
        assert_eq!(enforce_register("좋아요?", SpeechLevel::Jondaetmal), "좋아요?");
    }

    #[test]
    fn test_plain_rewrites() {
        assert_eq!(enforce_register("내일 갈 거예요.", SpeechLevel::Banmal), "내일 갈 거야.");
        assert_eq!(enforce_register("내일 갈 거에요", SpeechLevel::Banmal), "내일 갈 거야.");
        assert_eq!(enforce_register("숙제를 했어요!", SpeechLevel::Banmal), "숙제를 했어!");
        assert_eq!(enforce_register("운동을 해요.", SpeechLevel::Banmal), "운동을 해.");
        assert_eq!(enforce_register("운동을 합니다.", SpeechLevel::Banmal), "운동을 한다.");
        assert_eq!(enforce_register("어제 갔어요.", SpeechLevel::Banmal), "어제 갔어.");
    }

    #[test]
    fn test_cleanup() {
        assert_eq!(
            enforce_register("  \"어제   학교 갔어 .\"  ", SpeechLevel::Banmal),
            "어제 학교 갔어."
        );
        assert_eq!(enforce_register("“좋아”", SpeechLevel::Banmal), "좋아.");
    }

    #[test]
    fn test_repeated_yo_stripped_completely() {
        assert_eq!(enforce_register("요요요요요요.", SpeechLevel::Banmal), ".");
        assert_eq!(enforce_register("좋아요요요요요요?", SpeechLevel::Banmal), "좋아?");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(enforce_register("", SpeechLevel::Banmal), ".");
        assert_eq!(enforce_register("", SpeechLevel::Jondaetmal), ".");
        assert_eq!(enforce_register("   ", SpeechLevel::Banmal), ".");
        assert_eq!(enforce_register("?!", SpeechLevel::Jondaetmal), "?!");
        assert_eq!(enforce_register("\"\"", SpeechLevel::Banmal), ".");
    }

    #[test]
    fn test_totality_and_idempotence() {
        let samples = [
            "",
            ".",
            "요.",
            "해요요.",
            "hello 요.",
            "a \" .",
            "내일 갈 거에요",
            "감사합니다",
            "가야겠다.",
            "어제 학교 갔다",
            "  \"따옴표\" 안의 문장이다 ",
            "abc",
            "요요요요요요.",
            "거예요요요!",
        ];
        for level in [SpeechLevel::Banmal, SpeechLevel::Jondaetmal] {
            for s in samples {
                let once = enforce_register(s, level);
                assert!(has_terminal_mark(&once), "{:?} / {} -> {:?}", s, level, once);
                assert_eq!(enforce_register(&once, level), once, "{:?} / {}", s, level);
            }
        }
    }
}

//! 시간 부사 기반 시제 일치
//!
//! 어제/내일 같은 시간 부사로 문장의 시간대를 추정하고, 동사 어미를 그 시간대에 맞춥니다.
//! 어미 치환표는 '가다' 활용형만 다룹니다. 일반적인 형태소 분석기가 아닙니다.
//!
//! 과거 → 미래 순서로 적용해도 원문이 복원되지 않습니다 (간다 → 갔다 → 갈 거다).

use std::fmt;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// 문장의 시간대
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeHint {
    Past,
    Present,
    Future,
    Neutral,
}

impl fmt::Display for TimeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeHint::Past => "past",
            TimeHint::Present => "present",
            TimeHint::Future => "future",
            TimeHint::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

static PAST_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"어제|아까|방금|지난\s*\w+").expect("invalid past pattern"));
static FUTURE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"내일|모레|곧|훗날|\d+\s*일\s*후|\d+\s*시간\s*후").expect("invalid future pattern")
});
static PRESENT_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"지금|현재|요즘").expect("invalid present pattern"));

/// 시간 부사로 시간대 판정 (과거 > 미래 > 현재 > 중립 순)
pub fn classify_time(sentence: &str) -> TimeHint {
    if PAST_MARKERS.is_match(sentence) {
        TimeHint::Past
    } else if FUTURE_MARKERS.is_match(sentence) {
        TimeHint::Future
    } else if PRESENT_MARKERS.is_match(sentence) {
        TimeHint::Present
    } else {
        TimeHint::Neutral
    }
}

/// 어미 치환 규칙
struct TenseRule {
    /// 이 규칙이 적용되는 시간대
    hint: TimeHint,
    pattern: Regex,
    replacement: &'static str,
}

static TENSE_RULES: LazyLock<Vec<TenseRule>> = LazyLock::new(|| {
    let rule = |hint, pattern: &str, replacement| TenseRule {
        hint,
        pattern: Regex::new(pattern).expect("invalid tense pattern"),
        replacement,
    };
    vec![
        // 미래/현재 → 과거
        rule(TimeHint::Past, r"갈\s?거(야|다|예요|에요)", "갔다"),
        rule(TimeHint::Past, r"가겠(다|어요|습니다)", "갔다"),
        rule(TimeHint::Past, r"간다", "갔다"),
        rule(TimeHint::Past, r"가요", "갔어요"),
        // 과거 → 미래
        rule(TimeHint::Future, r"갔었?다", "갈 거다"),
        rule(TimeHint::Future, r"갔어요", "갈 거예요"),
        rule(TimeHint::Future, r"갔다", "갈 거다"),
    ]
});

/// 시간대에 맞게 동사 어미 치환 (현재/중립은 그대로)
pub fn enforce_tense(sentence: &str, hint: TimeHint) -> String {
    let mut out = sentence.to_string();
    for rule in TENSE_RULES.iter().filter(|r| r.hint == hint) {
        out = rule
            .pattern
            .replace_all(&out, NoExpand(rule.replacement))
            .into_owned();
    }
    out
}

//! 규칙 기반 1차 교정
//!
//! 공백 정리 → 조사 교정 → 시간 부사 기반 시제 일치 → 끝 문장부호 순서로 적용하고,
//! 실제로 문장을 바꾼 규칙마다 설명(노트)을 하나씩 남깁니다.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::particle::correct_particles;
use super::register::has_terminal_mark;
use super::tense::{classify_time, enforce_tense, TimeHint};
use crate::config::RuleConfig;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));
static SPACE_BEFORE_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([,.!?])").expect("invalid punctuation pattern"));

/// 연속 공백을 하나로, 문장부호 앞 공백 제거, 양끝 공백 제거
pub fn normalize_spaces(s: &str) -> String {
    let s = WHITESPACE.replace_all(s, " ");
    SPACE_BEFORE_MARK.replace_all(&s, "${1}").trim().to_string()
}

/// 교정 노트 (규칙 종류마다 하나)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionNote {
    /// 조사 받침 규칙
    Particles,
    /// 과거 시간 부사에 맞춘 시제
    PastTense,
    /// 미래 시간 부사에 맞춘 시제
    FutureTense,
}

impl CorrectionNote {
    pub fn message(self) -> &'static str {
        match self {
            CorrectionNote::Particles => "조사를 받침 규칙에 맞게 수정했어요.",
            CorrectionNote::PastTense => "시간 부사(예: 어제)에 맞춰 과거 시제로 바꿨어요.",
            CorrectionNote::FutureTense => "시간 부사(예: 내일)에 맞춰 미래 시제로 바꿨어요.",
        }
    }

    fn for_tense(hint: TimeHint) -> Option<Self> {
        match hint {
            TimeHint::Past => Some(CorrectionNote::PastTense),
            TimeHint::Future => Some(CorrectionNote::FutureTense),
            TimeHint::Present | TimeHint::Neutral => None,
        }
    }
}

impl fmt::Display for CorrectionNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for CorrectionNote {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// 교정 결과
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CorrectionResult {
    /// 교정된 문장
    pub corrected: String,
    /// 적용 순서대로의 노트 (조사 → 시제)
    pub notes: Vec<CorrectionNote>,
}

impl CorrectionResult {
    /// 노트 문구 목록
    pub fn note_messages(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.message().to_string()).collect()
    }
}

/// 규칙 기반 교정기
#[derive(Debug, Clone, Default)]
pub struct Corrector {
    rules: RuleConfig,
}

impl Corrector {
    /// 모든 규칙을 켠 교정기
    pub fn new() -> Self {
        Self::default()
    }

    /// 규칙 설정을 지정하여 생성
    pub fn with_rules(rules: RuleConfig) -> Self {
        Self { rules }
    }

    /// 공백/조사/시제 교정 (끝 문장부호는 붙이지 않음)
    fn apply_rules(&self, text: &str) -> CorrectionResult {
        let mut notes = Vec::new();
        let mut s = normalize_spaces(text);

        if self.rules.particles {
            let fixed = correct_particles(&s);
            if fixed != s {
                log::debug!("조사 교정: '{}' -> '{}'", s, fixed);
                notes.push(CorrectionNote::Particles);
                s = fixed;
            }
        }

        if self.rules.tense {
            let hint = classify_time(&s);
            let fixed = enforce_tense(&s, hint);
            if fixed != s {
                log::debug!("시제 교정({}): '{}' -> '{}'", hint, s, fixed);
                notes.extend(CorrectionNote::for_tense(hint));
                s = fixed;
            }
        }

        CorrectionResult { corrected: s, notes }
    }

    /// 문장 교정
    ///
    /// 빈 입력(공백만 있는 입력 포함)은 노트 없는 빈 결과를 돌려주고 문장부호도 붙이지 않습니다.
    pub fn correct(&self, text: &str) -> CorrectionResult {
        let mut result = self.apply_rules(text);
        if !result.corrected.is_empty() && !has_terminal_mark(&result.corrected) {
            result.corrected.push('.');
        }
        result
    }

    /// 노트만 생성 (교정 문장 없이 설명만 보여줄 때)
    pub fn notes_for(&self, text: &str) -> Vec<CorrectionNote> {
        self.apply_rules(text).notes
    }
}

/// 기본 규칙으로 문장 교정
pub fn correct(text: &str) -> CorrectionResult {
    Corrector::new().correct(text)
}

/// 기본 규칙으로 노트만 생성
pub fn notes_for(text: &str) -> Vec<CorrectionNote> {
    Corrector::new().notes_for(text)
}

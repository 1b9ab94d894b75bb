//! 교정 요청 처리 흐름
//!
//! 입력 → 규칙 기반 교정 → (선택) 외부 다듬기 → 말투 보정 → 결과.
//! 외부 다듬기가 실패하면 규칙 기반 결과를 그대로 말투 보정에 넘깁니다.

use serde::{Deserialize, Serialize};

use crate::core::corrector::Corrector;
use crate::core::register::{enforce_register, SpeechLevel};
use crate::error::SmoothError;

/// 교정 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRequest {
    pub text: String,
    #[serde(default)]
    pub speech_level: SpeechLevel,
}

/// 교정 응답
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorrectionResponse {
    /// 최종 문장
    pub result: String,
    /// 규칙 기반 교정 노트
    pub notes: Vec<String>,
}

/// 외부 문장 다듬기 (예: 언어 모델)
///
/// 구현체는 네트워크/캐시 등을 스스로 관리합니다. 엔진은 상태를 갖지 않습니다.
pub trait Smoother {
    fn smooth(&self, sentence: &str, level: SpeechLevel) -> Result<String, SmoothError>;
}

/// 다듬기 결과가 공백뿐이면 실패로 취급
fn smooth_checked(
    smoother: &dyn Smoother,
    sentence: &str,
    level: SpeechLevel,
) -> Result<String, SmoothError> {
    let text = smoother.smooth(sentence, level)?;
    if text.trim().is_empty() {
        return Err(SmoothError::EmptyOutput);
    }
    Ok(text)
}

/// 요청 하나를 처리
pub fn process(
    corrector: &Corrector,
    request: &CorrectionRequest,
    smoother: Option<&dyn Smoother>,
) -> CorrectionResponse {
    let input = request.text.trim();
    if input.is_empty() {
        return CorrectionResponse::default();
    }

    let base = corrector.correct(input);

    let smoothed = smoother.map(|s| smooth_checked(s, &base.corrected, request.speech_level));
    let candidate = match smoothed {
        Some(Ok(text)) => text,
        Some(Err(e)) => {
            log::warn!("다듬기 실패, 규칙 기반 결과 사용: {}", e);
            base.corrected.clone()
        }
        None => base.corrected.clone(),
    };

    CorrectionResponse {
        result: enforce_register(&candidate, request.speech_level),
        notes: base.note_messages(),
    }
}

//! 규칙 기반 교정 엔진
//!
//! 모든 함수는 상태가 없는 순수 문자열 변환입니다.

pub mod corrector;
pub mod particle;
pub mod register;
pub mod tense;
pub mod unicode;

//! 에러 타입

use thiserror::Error;

/// 설정 파일 로드/저장 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 파싱/직렬화 실패
    #[error("설정 JSON 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 외부 다듬기 단계 실패
///
/// 파이프라인은 이 에러를 호출자에게 넘기지 않고 규칙 기반 결과로 대체합니다.
#[derive(Debug, Error)]
pub enum SmoothError {
    /// 빈 응답
    #[error("다듬기 결과가 비어 있음")]
    EmptyOutput,
    /// 상위 서비스 오류 (할당량 초과, 네트워크 등)
    #[error("다듬기 서비스 오류: {0}")]
    Upstream(String),
}

/// 알 수 없는 말투 이름
#[derive(Debug, Error, PartialEq, Eq)]
#[error("알 수 없는 말투: '{0}' (banmal 또는 jondaetmal)")]
pub struct ParseSpeechLevelError(pub String);

//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::register::SpeechLevel;
use crate::error::ConfigError;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "MATCHUM_CONFIG";

/// 교정 규칙 켜기/끄기
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RuleConfig {
    /// 조사 받침 규칙
    #[serde(default = "default_true")]
    pub particles: bool,
    /// 시간 부사 기반 시제 일치
    #[serde(default = "default_true")]
    pub tense: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            particles: true,
            tense: true,
        }
    }
}

/// Matchum 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchumConfig {
    /// 요청에 말투가 없을 때 쓰는 기본 말투
    #[serde(default)]
    pub speech_level: SpeechLevel,
    #[serde(default)]
    pub rules: RuleConfig,
}

fn default_true() -> bool {
    true
}

/// 설정 파일 경로: $MATCHUM_CONFIG 또는 ~/.config/matchum/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("matchum").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<MatchumConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> MatchumConfig {
    let path = config_path();
    if !path.exists() {
        return MatchumConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|e| {
        log::warn!("설정 로드 실패 ({}), 기본값 사용: {}", path.display(), e);
        MatchumConfig::default()
    })
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &MatchumConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(config: &MatchumConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

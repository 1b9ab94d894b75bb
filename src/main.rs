//! Matchum - 한국어 규칙 기반 문장 교정기
//!
//! 표준 입력의 각 줄을 교정해 JSON 한 줄로 출력합니다.
//! 사용법: matchum [banmal|jondaetmal]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use matchum::config::load_config;
use matchum::{process, CorrectionRequest, Corrector, SpeechLevel};

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    let speech_level = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<SpeechLevel>() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("사용법: matchum [banmal|jondaetmal]");
                return ExitCode::from(2);
            }
        },
        None => config.speech_level,
    };
    log::info!("말투: {}", speech_level);

    let corrector = Corrector::with_rules(config.rules);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let text = match line {
            Ok(text) => text,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let request = CorrectionRequest { text, speech_level };
        let response = process(&corrector, &request, None);
        let written = serde_json::to_string(&response)
            .map_err(io::Error::from)
            .and_then(|json| writeln!(stdout, "{}", json));
        if let Err(e) = written {
            log::error!("출력 실패: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

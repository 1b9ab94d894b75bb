//! 조사 교정 (받침 유무에 따른 이형태 선택)
//!
//! 앞말의 마지막 음절 받침을 기준으로 조사를 다시 고릅니다.
//! 이미 맞는 조사도 같은 형태로 다시 쓰기 때문에 여러 번 적용해도 결과가 같습니다.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::unicode::{final_consonant_index, has_final_consonant, JONGSEONG_RIEUL};

/// 조사 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleClass {
    /// 주격 이/가
    Subject,
    /// 목적격 을/를
    Object,
    /// 보조사 은/는
    Topic,
    /// 접속 와/과
    Conjunctive,
    /// 방향/도구 로/으로
    Directional,
    /// 호격 아/야
    Vocative,
}

impl ParticleClass {
    /// 앞말에 맞는 조사 형태
    pub fn allomorph_for(self, word: &str) -> &'static str {
        // (받침 없을 때, 받침 있을 때)
        let (open, closed) = match self {
            ParticleClass::Subject => ("가", "이"),
            ParticleClass::Object => ("를", "을"),
            ParticleClass::Topic => ("는", "은"),
            ParticleClass::Conjunctive => ("와", "과"),
            ParticleClass::Vocative => ("야", "아"),
            ParticleClass::Directional => {
                // ㄹ 받침은 받침이 있어도 '로'
                return match final_consonant_index(word) {
                    0 | JONGSEONG_RIEUL => "로",
                    _ => "으로",
                };
            }
        };
        if has_final_consonant(word) {
            closed
        } else {
            open
        }
    }
}

/// 조사 교정 규칙 (적용 순서대로)
struct ParticleRule {
    class: ParticleClass,
    /// 1: 앞말, 2: 조사, 3: (호격만) 뒤따르는 공백/문장부호
    pattern: Regex,
}

static PARTICLE_RULES: LazyLock<Vec<ParticleRule>> = LazyLock::new(|| {
    let rule = |class, pattern: &str| ParticleRule {
        class,
        pattern: Regex::new(pattern).expect("invalid particle pattern"),
    };
    vec![
        rule(ParticleClass::Subject, r"([가-힣]+)([이가])\b"),
        rule(ParticleClass::Object, r"([가-힣]+)([을를])\b"),
        rule(ParticleClass::Topic, r"([가-힣]+)([은는])\b"),
        rule(ParticleClass::Conjunctive, r"([가-힣]+)([와과])\b"),
        // 앞말을 최소로 잡고 '으'는 몇 개든 조사 쪽에 포함 (길으으로 → 길로)
        rule(ParticleClass::Directional, r"([가-힣]+?)(으*로)\b"),
        // 호격은 단어 경계가 아니라 공백/문장부호가 뒤따라야 함
        rule(ParticleClass::Vocative, r"([가-힣]+)([아야])([\s,!?.])"),
    ]
});

/// 문장의 조사를 앞말 받침에 맞게 교정
pub fn correct_particles(sentence: &str) -> String {
    let mut out = sentence.to_string();
    for rule in PARTICLE_RULES.iter() {
        let replaced = rule.pattern.replace_all(&out, |caps: &Captures| {
            let word = &caps[1];
            let tail = caps.get(3).map_or("", |m| m.as_str());
            format!("{}{}{}", word, rule.class.allomorph_for(word), tail)
        });
        if let std::borrow::Cow::Owned(s) = replaced {
            out = s;
        }
    }
    out
}

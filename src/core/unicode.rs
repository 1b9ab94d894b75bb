//! 유니코드 한글 음절 분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 종성 ㄹ 인덱스 (로/으로 예외)
pub const JONGSEONG_RIEUL: u32 = 8;

/// 완성형 한글 음절인지 확인 (U+AC00 ~ U+D7A3)
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 단어 끝에서부터 거슬러 올라가 처음 만나는 한글 음절
///
/// 뒤에 붙은 문장부호나 영문 등 한글이 아닌 문자는 건너뜁니다.
fn last_syllable(word: &str) -> Option<char> {
    word.chars().rev().find(|&c| is_syllable(c))
}

/// 마지막 한글 음절의 종성 인덱스 (0~27)
///
/// 한글 음절이 없으면 0 (종성 없음으로 취급)
pub fn final_consonant_index(word: &str) -> u32 {
    last_syllable(word)
        .and_then(decompose_syllable)
        .map_or(0, |(_, _, jong)| jong)
}

/// 마지막 한글 음절에 받침이 있는지 확인
///
/// 한글 음절이 없으면 false
pub fn has_final_consonant(word: &str) -> bool {
    final_consonant_index(word) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_syllable() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(!is_syllable('ㄱ')); // 호환용 자모는 음절이 아님
        assert!(!is_syllable('a'));
        assert!(!is_syllable('.'));
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('각'), Some((0, 0, 1)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('1'), None);
    }

    #[test]
    fn test_final_consonant_index() {
        assert_eq!(final_consonant_index("사과"), 0);
        assert_eq!(final_consonant_index("밥"), 17); // ㅂ
        assert_eq!(final_consonant_index("길"), JONGSEONG_RIEUL);
        assert_eq!(final_consonant_index("학교"), 0);
    }

    #[test]
    fn test_skips_trailing_non_hangul() {
        // 뒤쪽 문장부호/영문은 건너뛰고 마지막 음절 기준
        assert!(has_final_consonant("밥!"));
        assert!(has_final_consonant("책abc"));
        assert!(!has_final_consonant("나?!"));
        assert_eq!(final_consonant_index("서울..."), JONGSEONG_RIEUL);
    }

    #[test]
    fn test_no_syllable() {
        assert!(!has_final_consonant(""));
        assert!(!has_final_consonant("abc"));
        assert_eq!(final_consonant_index("123"), 0);
    }

    #[test]
    fn test_every_syllable_matches_modulo_rule() {
        for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let expected = (code - HANGUL_SYLLABLE_BASE) % JONGSEONG_COUNT;
            assert_eq!(final_consonant_index(&c.to_string()), expected);
        }
    }
}

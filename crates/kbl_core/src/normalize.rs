//! 텍스트 정규화 헬퍼
//!
//! 선수 이름, 팀 이름, 선수 구분 라벨을 비교 가능한 형태로 바꾸고
//! 숫자 필드를 방어적으로 파싱한다. 모든 함수는 total: 어떤 입력에도 panic 없이 값을 돌려준다.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// 팀 별칭 → 짧은 정식 팀명.
///
/// 키는 `compact_key` 형태(공백 제거 + 대문자)로 비교한다.
const TEAM_ALIASES: &[(&str, &str)] = &[
    ("원주DB", "DB"),
    ("원주DB프로미", "DB"),
    ("DB프로미", "DB"),
    ("서울SK", "SK"),
    ("서울SK나이츠", "SK"),
    ("SK나이츠", "SK"),
    ("창원LG", "LG"),
    ("창원LG세이커스", "LG"),
    ("LG세이커스", "LG"),
    ("수원KT", "KT"),
    ("수원KT소닉붐", "KT"),
    ("KT소닉붐", "KT"),
    ("울산현대모비스", "현대모비스"),
    ("울산현대모비스피버스", "현대모비스"),
    ("현대모비스피버스", "현대모비스"),
    ("안양정관장", "정관장"),
    ("안양정관장레드부스터스", "정관장"),
    ("정관장레드부스터스", "정관장"),
    ("안양KGC", "정관장"),
    ("KGC", "정관장"),
    ("KGC인삼공사", "정관장"),
    ("부산KCC", "KCC"),
    ("부산KCC이지스", "KCC"),
    ("KCC이지스", "KCC"),
    ("고양소노", "소노"),
    ("고양소노스카이거너스", "소노"),
    ("소노스카이거너스", "소노"),
    ("대구한국가스공사", "한국가스공사"),
    ("대구한국가스공사페가수스", "한국가스공사"),
    ("한국가스공사페가수스", "한국가스공사"),
    ("서울삼성", "삼성"),
    ("서울삼성썬더스", "삼성"),
    ("삼성썬더스", "삼성"),
];

/// 리그 전체를 뜻하는 scope 별칭 (`compact_key` 형태).
const ALL_SCOPE_ALIASES: &[&str] = &["ALL", "전체", "전체팀", "KBL", "리그전체", "KBL전체"];

/// 선수 구분 라벨 별칭 (소문자 + 공백 제거 형태) → 정식 라벨.
const PLAYER_TYPE_ALIASES: &[(&str, &str)] = &[
    ("국내", "국내선수"),
    ("국내선수", "국내선수"),
    ("domestic", "국내선수"),
    ("local", "국내선수"),
    ("외국", "외국선수"),
    ("외국인", "외국선수"),
    ("외국선수", "외국선수"),
    ("외국인선수", "외국선수"),
    ("foreign", "외국선수"),
    ("foreignplayer", "외국선수"),
    ("import", "외국선수"),
    ("아시아쿼터", "아시아쿼터"),
    ("아시아", "아시아쿼터"),
    ("asiaquota", "아시아쿼터"),
    ("asianquota", "아시아쿼터"),
];

/// Aliases plus every canonical name itself, so bare short names match in any case.
static TEAM_ALIAS_MAP: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    TEAM_ALIASES
        .iter()
        .flat_map(|&(alias, canonical)| [(alias, canonical), (canonical, canonical)])
        .map(|(key, canonical)| (compact_key(key), canonical))
        .collect()
});

static PLAYER_TYPE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PLAYER_TYPE_ALIASES.iter().copied().collect());

/// First embedded run of ASCII digits, e.g. `"#7"` → 7, `"198cm"` → 198.
///
/// Signs and decimals are ignored; overflow yields `None`.
pub fn parse_int(raw: &str) -> Option<i32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = &raw[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok()
}

/// NFC, 모든 공백 제거, 소문자.
pub fn normalize_name(raw: &str) -> String {
    raw.nfc()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// NFKC 후 공백 제거 + 대문자. 별칭 테이블 조회용 키.
pub fn compact_key(raw: &str) -> String {
    raw.nfkc()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// trim → NFKC → 별칭 테이블. 테이블에 없는 이름은 NFKC 결과 그대로.
pub fn canonical_team(raw: &str) -> String {
    let trimmed: String = raw.trim().nfkc().collect();
    let trimmed = trimmed.trim();
    match TEAM_ALIAS_MAP.get(&compact_key(trimmed)) {
        Some(canonical) => (*canonical).to_string(),
        None => trimmed.to_string(),
    }
}

/// blank / ALL / 전체 / KBL ... → true
pub fn is_all_scope(raw: &str) -> bool {
    let key = compact_key(raw);
    key.is_empty() || ALL_SCOPE_ALIASES.contains(&key.as_str())
}

/// 선수 구분 라벨 정규화. 빈 값은 빈 문자열로 남는다.
pub fn canonical_player_type(raw: &str) -> String {
    let key: String = raw
        .nfkc()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    match PLAYER_TYPE_MAP.get(key.as_str()) {
        Some(label) => (*label).to_string(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_extracts_first_number() {
        assert_eq!(parse_int("7"), Some(7));
        assert_eq!(parse_int(" #12 "), Some(12));
        assert_eq!(parse_int("198cm"), Some(198));
        assert_eq!(parse_int("No.3 / 5"), Some(3));
        assert_eq!(parse_int("201.5"), Some(201));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("미정"), None);
        assert_eq!(parse_int("99999999999"), None);
    }

    #[test]
    fn normalize_name_strips_space_and_case() {
        assert_eq!(normalize_name(" 허 웅 "), "허웅");
        assert_eq!(normalize_name("Rafael  Hunter"), "rafaelhunter");
        // decomposed jamo compose to the same syllables
        let decomposed: String = "허훈".nfd().collect();
        assert_eq!(normalize_name(&decomposed), normalize_name("허훈"));
    }

    #[test]
    fn canonical_team_collapses_sponsor_names() {
        assert_eq!(canonical_team("부산 KCC 이지스"), "KCC");
        assert_eq!(canonical_team(" 부산KCC"), "KCC");
        assert_eq!(canonical_team("KCC"), "KCC");
        assert_eq!(canonical_team("안양 KGC"), "정관장");
        // full-width latin folds under NFKC
        assert_eq!(canonical_team("ＫＣＣ"), "KCC");
        assert_eq!(canonical_team("Unknown Club "), "Unknown Club");
    }

    #[test]
    fn bare_team_names_ignore_case() {
        assert_eq!(canonical_team("sk"), canonical_team("서울 SK"));
        assert_eq!(canonical_team("kcc"), "KCC");
        assert_eq!(canonical_team(" Db "), "DB");
        assert_eq!(canonical_team("kgc"), "정관장");
        assert_eq!(canonical_team("현대모비스"), "현대모비스");
    }

    #[test]
    fn all_scope_aliases() {
        for raw in ["", "  ", "ALL", "all", "전체", "KBL", "kbl", "전체 팀"] {
            assert!(is_all_scope(raw), "{raw:?} should be the ALL scope");
        }
        assert!(!is_all_scope("KCC"));
        assert!(!is_all_scope("삼성"));
    }

    #[test]
    fn player_type_aliases() {
        assert_eq!(
            canonical_player_type("foreign"),
            canonical_player_type("Foreign Player")
        );
        assert_eq!(canonical_player_type("외국인"), "외국선수");
        assert_eq!(canonical_player_type("국내"), "국내선수");
        assert_eq!(canonical_player_type("아시아 쿼터"), "아시아쿼터");
        assert_eq!(canonical_player_type(""), "");
        assert_eq!(canonical_player_type("귀화"), "귀화");
    }
}

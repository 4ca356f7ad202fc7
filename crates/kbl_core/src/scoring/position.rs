//! 포지션 텍스트 → 역할 코드 집합
//!
//! "가드", "포워드-센터", "G/F", "PF/C" 같은 자유 텍스트를 {G, F, C} 부분집합으로 바꾼다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleCode {
    G,
    F,
    C,
}

impl RoleCode {
    pub fn letter(&self) -> char {
        match self {
            RoleCode::G => 'G',
            RoleCode::F => 'F',
            RoleCode::C => 'C',
        }
    }

    fn korean(&self) -> &'static str {
        match self {
            RoleCode::G => "가드",
            RoleCode::F => "포워드",
            RoleCode::C => "센터",
        }
    }
}

const ROLES: [RoleCode; 3] = [RoleCode::G, RoleCode::F, RoleCode::C];

/// Canonically ordered role set.
pub type RoleSet = BTreeSet<RoleCode>;

/// Scan NFKD-uppercased text for the Korean role words and the letters G/F/C.
pub fn role_set(position: &str) -> RoleSet {
    let text: String = position.nfkd().flat_map(char::to_uppercase).collect();
    ROLES
        .iter()
        .copied()
        .filter(|role| {
            let word: String = role.korean().nfkd().collect();
            text.contains(role.letter()) || text.contains(word.as_str())
        })
        .collect()
}

/// `"F/C"` style label, empty when no role is recognised.
pub fn role_label(roles: &RoleSet) -> String {
    roles
        .iter()
        .map(|r| r.letter().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(position: &str) -> String {
        role_label(&role_set(position))
    }

    #[test]
    fn korean_words() {
        assert_eq!(codes("가드"), "G");
        assert_eq!(codes("포워드"), "F");
        assert_eq!(codes("센터"), "C");
        assert_eq!(codes("포워드-센터"), "F/C");
        assert_eq!(codes("가드/포워드"), "G/F");
    }

    #[test]
    fn latin_letters() {
        assert_eq!(codes("G"), "G");
        assert_eq!(codes("f/c"), "F/C");
        assert_eq!(codes("C/F"), "F/C");
        assert_eq!(codes("ＰＧ"), "G");
    }

    #[test]
    fn mixed_and_empty() {
        assert_eq!(codes("가드(G)"), "G");
        assert_eq!(codes("센터 F"), "F/C");
        assert!(role_set("").is_empty());
        assert!(role_set("미정").is_empty());
    }
}

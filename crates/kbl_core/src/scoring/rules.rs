//! Per-attribute comparison rules
//!
//! Every function is total: missing or malformed data resolves to
//! [`Signal::Black`], never to an error.

use super::position::role_set;
use super::signal::{AttributeSignals, Signal};
use crate::models::PlayerRecord;
use crate::normalize::{canonical_player_type, compact_key, parse_int};

/// Jersey number yellow window: `0 < |g - a| <= 2`
pub const NUMBER_TOLERANCE: i32 = 2;

/// Height yellow window: `1 <= |g - a| <= 3` (cm)
pub const HEIGHT_TOLERANCE: i32 = 3;

/// Green when both canonical teams are non-empty and equal. No yellow tier.
pub fn compare_team(guess: &PlayerRecord, answer: &PlayerRecord) -> Signal {
    if !guess.team_key.is_empty() && guess.team_key == answer.team_key {
        Signal::Green
    } else {
        Signal::Black
    }
}

/// Integer comparison with a yellow window of `tolerance`.
pub fn compare_within(guess: Option<i32>, answer: Option<i32>, tolerance: i32) -> Signal {
    match (guess, answer) {
        (Some(g), Some(a)) if g == a => Signal::Green,
        (Some(g), Some(a)) if (g - a).abs() <= tolerance => Signal::Yellow,
        _ => Signal::Black,
    }
}

pub fn compare_number(guess: &PlayerRecord, answer: &PlayerRecord) -> Signal {
    compare_within(guess.number_value, answer.number_value, NUMBER_TOLERANCE)
}

pub fn compare_height(guess: &PlayerRecord, answer: &PlayerRecord) -> Signal {
    compare_within(guess.height_value, answer.height_value, HEIGHT_TOLERANCE)
}

/// Green only for identical non-empty role sets. Overlap alone is black.
pub fn compare_position(guess: &PlayerRecord, answer: &PlayerRecord) -> Signal {
    let g = role_set(&guess.position);
    let a = role_set(&answer.position);
    if !g.is_empty() && g == a {
        Signal::Green
    } else {
        Signal::Black
    }
}

pub fn compare_player_type(guess: &PlayerRecord, answer: &PlayerRecord) -> Signal {
    let g = canonical_player_type(&guess.player_type);
    if !g.is_empty() && g == canonical_player_type(&answer.player_type) {
        Signal::Green
    } else {
        Signal::Black
    }
}

/// Draft round key: the number when one is embedded ("1", "1R", "1라운드"),
/// otherwise the compacted text ("특별").
fn draft_round_key(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(match parse_int(raw) {
        Some(round) => round.to_string(),
        None => compact_key(raw),
    })
}

/// Year and round only; draft type and overall pick never count.
///
/// | year | round | signal |
/// |------|-------|--------|
/// | same | same  | green  |
/// | diff | same  | yellow |
/// | any  | diff  | black  |
pub fn compare_draft(guess: &PlayerRecord, answer: &PlayerRecord) -> Signal {
    let key = |p: &PlayerRecord| -> Option<(i32, String)> {
        Some((parse_int(&p.draft_year)?, draft_round_key(&p.draft_round)?))
    };

    match (key(guess), key(answer)) {
        (Some((gy, gr)), Some((ay, ar))) if gr == ar => {
            if gy == ay {
                Signal::Green
            } else {
                Signal::Yellow
            }
        }
        _ => Signal::Black,
    }
}

/// Compare every attribute; the same identity forces all green.
pub fn compare_fields(guess: &PlayerRecord, answer: &PlayerRecord) -> AttributeSignals {
    if guess.same_identity(answer) {
        return AttributeSignals::all(Signal::Green);
    }
    AttributeSignals {
        team: compare_team(guess, answer),
        number: compare_number(guess, answer),
        position: compare_position(guess, answer),
        height_cm: compare_height(guess, answer),
        player_type: compare_player_type(guess, answer),
        draft: compare_draft(guess, answer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, team: &str) -> PlayerRecord {
        PlayerRecord::new(name, team)
    }

    #[test]
    fn team_has_no_yellow() {
        let team = |g: &str, a: &str| compare_team(&p("a", g), &p("b", a));
        assert_eq!(team("KCC", "부산 KCC"), Signal::Green);
        assert_eq!(team("KCC", "SK"), Signal::Black);
        assert_eq!(team("", ""), Signal::Black);
    }

    #[test]
    fn team_short_names_ignore_case() {
        let team = |g: &str, a: &str| compare_team(&p("a", g), &p("b", a));
        assert_eq!(team("kcc", "KCC"), Signal::Green);
        assert_eq!(team("sk", "서울 SK"), Signal::Green);
        assert_eq!(team("kt", "LG"), Signal::Black);
    }

    #[test]
    fn number_examples() {
        let n = |v: &str| p("x", "T").with_number(v);
        let number = |g: &str, a: &str| compare_number(&n(g), &n(a));
        assert_eq!(number("7", "7"), Signal::Green);
        assert_eq!(number("7", "9"), Signal::Yellow);
        assert_eq!(number("7", "10"), Signal::Black);
        assert_eq!(number("#7", "6"), Signal::Yellow);
        assert_eq!(number("", "7"), Signal::Black);
        assert_eq!(number("없음", "없음"), Signal::Black);
    }

    #[test]
    fn height_examples() {
        let h = |v: &str| p("x", "T").with_height(v);
        let height = |g: &str, a: &str| compare_height(&h(g), &h(a));
        assert_eq!(height("198", "198"), Signal::Green);
        assert_eq!(height("198", "200"), Signal::Yellow);
        assert_eq!(height("198", "201"), Signal::Yellow);
        assert_eq!(height("198", "202"), Signal::Black);
        assert_eq!(height("198cm", "197"), Signal::Yellow);
        assert_eq!(height("", ""), Signal::Black);
    }

    #[test]
    fn position_is_strict_set_equality() {
        let pos = |v: &str| p("x", "T").with_position(v);
        let position = |g: &str, a: &str| compare_position(&pos(g), &pos(a));
        assert_eq!(position("포워드-센터", "F/C"), Signal::Green);
        assert_eq!(position("가드", "G"), Signal::Green);
        assert_eq!(position("포워드", "포워드-센터"), Signal::Black);
        assert_eq!(position("", ""), Signal::Black);
        assert_eq!(position("미정", "미정"), Signal::Black);
    }

    #[test]
    fn player_type_uses_aliases() {
        let t = |v: &str| p("x", "T").with_player_type(v);
        let kind = |g: &str, a: &str| compare_player_type(&t(g), &t(a));
        assert_eq!(kind("foreign", "Foreign Player"), Signal::Green);
        assert_eq!(kind("외국인", "외국선수"), Signal::Green);
        assert_eq!(kind("국내", "외국"), Signal::Black);
        assert_eq!(kind("", ""), Signal::Black);
    }

    #[test]
    fn draft_examples() {
        let d = |year: &str, round: &str| p("x", "T").with_draft(year, "신인", round, "3");
        let draft = |gy, gr, ay, ar| compare_draft(&d(gy, gr), &d(ay, ar));
        assert_eq!(draft("2020", "1", "2020", "1"), Signal::Green);
        assert_eq!(draft("2019", "1", "2020", "1"), Signal::Yellow);
        assert_eq!(draft("2019", "2", "2020", "1"), Signal::Black);
        assert_eq!(draft("2020", "2", "2020", "1"), Signal::Black);
        assert_eq!(draft("2020", "1R", "2020", "1라운드"), Signal::Green);
        assert_eq!(draft("", "1", "2020", "1"), Signal::Black);
        assert_eq!(draft("2020", "", "2020", ""), Signal::Black);
    }

    #[test]
    fn draft_ignores_type_and_overall() {
        let a = p("x", "T").with_draft("2018", "신인", "1", "1");
        let b = p("y", "T").with_draft("2018", "귀화", "1", "9");
        assert_eq!(compare_draft(&a, &b), Signal::Green);
    }

    #[test]
    fn identity_override_forces_green() {
        let answer = p("허훈", "KT")
            .with_number("5")
            .with_height("180")
            .with_position("가드")
            .with_player_type("국내")
            .with_draft("2017", "신인", "1", "1");
        // same player with corrupted fields
        let guess = p("허 훈", "수원 KT 소닉붐")
            .with_number("??")
            .with_height("")
            .with_position("")
            .with_draft("", "", "", "");

        assert!(compare_fields(&guess, &answer).all_green());
    }

    #[test]
    fn same_name_other_team_is_scored_normally() {
        let answer = p("김민수", "SK").with_number("3");
        let guess = p("김민수", "LG").with_number("3");
        let signals = compare_fields(&guess, &answer);

        assert_eq!(signals.team, Signal::Black);
        assert_eq!(signals.number, Signal::Green);
        assert!(!signals.all_green());
    }
}

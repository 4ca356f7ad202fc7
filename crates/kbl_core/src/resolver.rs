//! Name resolver
//!
//! 자유 입력 이름(+ 선택적 팀 힌트)을 로스터 인덱스 하나로 바꾼다.
//! 동명이인은 팀 힌트 → 현재 scope 팀 → 첫 번째 후보 순서로 결정한다.

use crate::error::{GameError, Result};
use crate::normalize::{canonical_team, normalize_name};
use crate::roster::RosterStore;
use crate::selector::Scope;
use tracing::debug;

pub struct NameResolver<'a> {
    roster: &'a RosterStore,
}

impl<'a> NameResolver<'a> {
    pub fn new(roster: &'a RosterStore) -> Self {
        Self { roster }
    }

    /// Resolve a guess to one roster index.
    ///
    /// With a non-blank `team_hint` only players whose normalized name and
    /// canonical team both match are candidates. Fails with
    /// [`GameError::NotFound`] when nothing matches. The returned index is
    /// always valid for this roster.
    pub fn resolve(&self, name: &str, team_hint: Option<&str>, scope: &Scope) -> Result<usize> {
        let name = name.trim();
        let name_key = normalize_name(name);
        let team_hint = team_hint.map(str::trim).filter(|t| !t.is_empty());

        let not_found = || GameError::NotFound {
            name: name.to_string(),
            team: team_hint.map(str::to_string),
        };

        if name_key.is_empty() {
            return Err(not_found());
        }

        if let Some(hint) = team_hint {
            let team_key = canonical_team(hint);
            return self
                .roster
                .normalized_name_matches(&name_key)
                .iter()
                .copied()
                .find(|&idx| self.team_key(idx) == Some(team_key.as_str()))
                .ok_or_else(not_found);
        }

        let exact = self.roster.exact_name_matches(name);
        let candidates = if exact.is_empty() {
            self.roster.normalized_name_matches(&name_key)
        } else {
            exact
        };

        let first = *candidates.first().ok_or_else(not_found)?;
        if candidates.len() > 1 {
            if let Scope::Team(team) = scope {
                let in_scope = candidates
                    .iter()
                    .copied()
                    .find(|&idx| self.team_key(idx) == Some(team.as_str()));
                if let Some(idx) = in_scope {
                    debug!("{:?} resolved by scope {} → #{}", name, team, idx);
                    return Ok(idx);
                }
            }
            debug!("Ambiguous name {:?}, using first", name);
        }
        Ok(first)
    }

    fn team_key(&self, idx: usize) -> Option<&str> {
        self.roster.get(idx).map(|p| p.team_key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerRecord;

    fn roster() -> RosterStore {
        RosterStore::from_players(vec![
            PlayerRecord::new("김민수", "SK"),
            PlayerRecord::new("허웅", "KCC"),
            PlayerRecord::new("김민수", "LG"),
            PlayerRecord::new("Jarell Martin", "KT"),
        ])
    }

    fn find(name: &str, hint: Option<&str>, scope: &str) -> Result<usize> {
        let roster = roster();
        let scope = Scope::parse(scope);
        NameResolver::new(&roster).resolve(name, hint, &scope)
    }

    #[test]
    fn exact_and_normalized_lookup() {
        assert_eq!(find("허웅", None, "").unwrap(), 1);
        assert_eq!(find(" 허 웅 ", None, "").unwrap(), 1);
        assert_eq!(find("jarell martin", None, "").unwrap(), 3);
    }

    #[test]
    fn duplicate_name_defaults_to_first() {
        assert_eq!(find("김민수", None, "").unwrap(), 0);
    }

    #[test]
    fn duplicate_name_prefers_scope_team() {
        assert_eq!(find("김민수", None, "창원 LG 세이커스").unwrap(), 2);
        assert_eq!(find("김민수", None, "lg").unwrap(), 2);
        // scope team without that name falls back to the first candidate
        assert_eq!(find("김민수", None, "KCC").unwrap(), 0);
    }

    #[test]
    fn team_hint_is_strict() {
        assert_eq!(find("김민수", Some("LG"), "").unwrap(), 2);
        assert_eq!(find("김민수", Some("lg"), "").unwrap(), 2);
        assert_eq!(find("김민수", Some("서울 SK"), "LG").unwrap(), 0);
        assert!(matches!(
            find("김민수", Some("KCC"), ""),
            Err(GameError::NotFound { .. })
        ));
        // blank hint behaves like no hint
        assert_eq!(find("허웅", Some("  "), "").unwrap(), 1);
    }

    #[test]
    fn unknown_or_blank_names_are_not_found() {
        assert!(find("", None, "").is_err());
        assert!(find("   ", None, "").is_err());
        let err = find("마이클 조던", None, "").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }
}

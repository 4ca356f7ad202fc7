//! KBL guess CLI library
//!
//! 터미널 플레이 루프와 출력 포맷. 바이너리(`kbl`)는 인자 파싱만 하고
//! 실제 라운드 진행은 여기서 한다.

use anyhow::Result;
use kbl_core::scoring::Attribute;
use kbl_core::{AttributeSignals, DisplayRecord, GameError, GameState, ScoreResult};
use std::io::{BufRead, Write};
use tracing::debug;

/// One parsed input line: `이름` or `이름/팀`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessInput {
    pub name: String,
    pub team: Option<String>,
}

/// `None` for a blank line.
pub fn parse_guess_line(line: &str) -> Option<GuessInput> {
    let (name, team) = match line.split_once('/') {
        Some((name, team)) => (name.trim(), Some(team.trim())),
        None => (line.trim(), None),
    };
    if name.is_empty() {
        return None;
    }
    Some(GuessInput {
        name: name.to_string(),
        team: team.filter(|t| !t.is_empty()).map(str::to_string),
    })
}

/// `🟩🟨⬛⬛🟩🟩`
pub fn signal_row(signals: &AttributeSignals) -> String {
    signals.iter().map(|(_, signal)| signal.emoji()).collect()
}

fn display_value(values: &DisplayRecord, attribute: Attribute) -> &str {
    let value = match attribute {
        Attribute::Team => &values.team,
        Attribute::Number => &values.number,
        Attribute::Position => &values.position,
        Attribute::HeightCm => &values.height_cm,
        Attribute::PlayerType => &values.player_type,
        Attribute::Draft => &values.draft,
    };
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Signal row plus each attribute's value, one guess per line.
pub fn format_guess(result: &ScoreResult) -> String {
    let details: Vec<String> = result
        .signals
        .iter()
        .map(|(attribute, signal)| {
            let value = display_value(&result.values, attribute);
            format!("{}{} {}", signal.emoji(), attribute.label(), value)
        })
        .collect();
    format!(
        "{}  {}  {}",
        signal_row(&result.signals),
        result.name,
        details.join(" | ")
    )
}

pub fn format_player(values: &DisplayRecord) -> String {
    Attribute::ALL
        .iter()
        .map(|&attribute| {
            let value = display_value(values, attribute);
            format!("{} {}", attribute.label(), value)
        })
        .fold(values.name.clone(), |acc, part| format!("{acc} | {part}"))
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub solved: bool,
    /// Counted guesses (unregistered names don't count)
    pub guesses: u32,
    pub answer: DisplayRecord,
}

/// Play one round over line-based input until solved, out of guesses, or EOF.
///
/// Fails up front when the scope has no players.
pub fn play_round<R: BufRead, W: Write>(
    state: &GameState,
    team_filter: Option<&str>,
    max_guesses: u32,
    input: R,
    out: &mut W,
) -> Result<RoundOutcome> {
    let answer = state.get_answer_display(team_filter)?;

    writeln!(
        out,
        "🏀 {}번 안에 선수를 맞혀 보세요. 입력: 이름 또는 이름/팀",
        max_guesses
    )?;

    let mut guesses = 0;
    let mut solved = false;
    let mut lines = input.lines();

    while guesses < max_guesses {
        write!(out, "[{}/{}] > ", guesses + 1, max_guesses)?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let Some(guess) = parse_guess_line(&line?) else {
            continue;
        };

        match state.resolve_and_score(&guess.name, team_filter, guess.team.as_deref()) {
            Ok(result) => {
                guesses += 1;
                writeln!(out, "{}", format_guess(&result))?;
                if result.is_correct {
                    solved = true;
                    break;
                }
            }
            Err(e @ GameError::NotRegistered { .. }) => {
                debug!("Uncounted guess: {}", e);
                writeln!(out, "❌ {}", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if solved {
        writeln!(out, "\n✅ 정답! {}번 만에 맞혔습니다.", guesses)?;
    } else {
        writeln!(out, "\n🔚 정답은 {} 였습니다.", answer.name)?;
    }
    writeln!(out, "   {}", format_player(&answer))?;

    Ok(RoundOutcome {
        solved,
        guesses,
        answer,
    })
}

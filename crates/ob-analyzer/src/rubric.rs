//! The scoring rubric: pure functions from measured results to scores,
//! strengths, weaknesses and recommendations.

use ob_sim::ScoreEvent;
use tracing::info;

use crate::{
    AnalyzerConfig, AnalyzerError, AnalyzerResult, Evaluation, EvaluationReport, GameComparison,
    MonotonousResults, PlayerResults, Rating,
};

// ── Sub-scores ────────────────────────────────────────────────────────────────

/// -3..=3 from the expert's average survival time.
pub fn duration_score(config: &AnalyzerConfig, expert_secs: f64) -> i32 {
    config
        .duration_thresholds_secs
        .iter()
        .position(|&threshold| expert_secs >= threshold)
        .map_or(-3, |i| 3 - i as i32)
}

/// Expert average score over beginner average score, with the beginner
/// clamped to at least 1 point.
pub fn skill_gap(expert_average: f64, beginner_average: f64) -> f64 {
    expert_average / beginner_average.max(1.0)
}

/// 0..=3 from the expert/beginner score ratio.
pub fn skill_gap_score(config: &AnalyzerConfig, skill_gap: f64) -> i32 {
    config
        .skill_gap_thresholds
        .iter()
        .position(|&threshold| skill_gap >= threshold)
        .map_or(0, |i| 3 - i as i32)
}

/// How steadily points arrive, in `[0, 1]`.
///
/// Rates are `points / Δtick` between consecutive events; pairs whose tick
/// does not advance (same tick, or a later run restarting at zero) are
/// skipped.  Returns 1.0 when there are fewer than `min_events` events or no
/// usable pairs, and 0.0 when the mean rate is not positive.
pub fn score_consistency(events: &[ScoreEvent], min_events: usize) -> f64 {
    if events.len() < min_events {
        return 1.0;
    }

    let rates: Vec<f64> = events
        .windows(2)
        .filter_map(|w| match w[1].tick.checked_since(w[0].tick) {
            Some(dt) if dt > 0 => Some(w[1].points / dt as f64),
            _ => None,
        })
        .collect();

    if rates.is_empty() {
        return 1.0;
    }

    let n = rates.len() as f64;
    let mean = rates.iter().sum::<f64>() / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = rates.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    1.0 - (variance.sqrt() / mean).min(1.0)
}

/// Difficulty score with the two measurements behind it.
struct Difficulty {
    score:       i32,
    progression: f64,
    consistency: f64,
}

fn difficulty(config: &AnalyzerConfig, players: &PlayerResults) -> Difficulty {
    let beginner = &players.beginner;
    let expert = &players.expert;

    let expert_rate = expert.average_score / expert.average_duration.max(1.0);
    let beginner_rate = beginner.average_score / beginner.average_duration.max(1.0);
    let progression = expert_rate / beginner_rate.max(1.0);
    let consistency = score_consistency(&expert.score_events, config.min_consistency_events);

    let score = [
        beginner.average_duration >= config.beginner_min_secs,
        progression >= config.progression_ratio,
        consistency >= config.consistency_threshold,
    ]
    .iter()
    .filter(|&&met| met)
    .count() as i32;

    Difficulty { score, progression, consistency }
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Score a game from its player and monotonous results.
pub fn evaluate_game(
    config: &AnalyzerConfig,
    players: &PlayerResults,
    monotonous: &MonotonousResults,
) -> Evaluation {
    let duration_score = duration_score(config, players.expert.average_duration);
    let skill_gap_score = skill_gap_score(config, players.skill_gap);
    let difficulty = difficulty(config, players);
    let monotonous_input_score = monotonous.vulnerability_score;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    match duration_score {
        s if s >= 2 => strengths
            .push("Excellent game duration - provides extended satisfying gameplay".to_owned()),
        1 => strengths.push("Good game duration - satisfying length for players".to_owned()),
        _ => weaknesses.push("Short game duration - difficulty needs rebalancing".to_owned()),
    }

    match skill_gap_score {
        s if s >= 2 => strengths
            .push("Excellent skill gap - significant rewards for player improvement".to_owned()),
        1 => strengths.push("Good skill gap - rewards player improvement".to_owned()),
        _ => weaknesses.push(
            "Small skill gap - player skill differences don't significantly impact results"
                .to_owned(),
        ),
    }

    match difficulty.score {
        s if s >= 2 => strengths.push(
            "Excellent difficulty progression - fair and challenging for all skill levels"
                .to_owned(),
        ),
        1 => strengths.push(
            "Good difficulty progression - generally balanced for different skill levels"
                .to_owned(),
        ),
        _ => weaknesses.push(
            "Poor difficulty progression - game is too easy or too hard too quickly".to_owned(),
        ),
    }

    if monotonous_input_score == 3 {
        strengths.push("Game is resistant to monotonous input patterns".to_owned());
    } else if monotonous.is_moderately_vulnerable {
        weaknesses.push("Game is vulnerable to monotonous input patterns".to_owned());
        weaknesses.extend(
            monotonous
                .vulnerable_patterns
                .iter()
                .map(|p| format!("Player can survive by using the {p} pattern")),
        );
    }

    let total_score =
        duration_score.max(0) + skill_gap_score + difficulty.score + monotonous_input_score;

    Evaluation {
        duration_score,
        skill_gap_score,
        difficulty_score: difficulty.score,
        monotonous_input_score,
        total_score,
        rating: Rating::from_total(total_score),
        progression_ratio: difficulty.progression,
        score_consistency: difficulty.consistency,
        strengths,
        weaknesses,
    }
}

const DURATION_ADVICE: [&str; 3] = [
    "Lower initial difficulty to extend gameplay duration",
    "Make difficulty curve more gradual",
    "Add mechanics that reward skilled play without ending the game too quickly",
];

const SKILL_GAP_ADVICE: [&str; 3] = [
    "Add bonus elements that reward advanced techniques",
    "Introduce risk-reward choices for expert players",
    "Create opportunities for score multipliers that require precise timing",
];

const DIFFICULTY_ADVICE: [&str; 3] = [
    "Ensure game is playable for at least 8 seconds by beginners",
    "Create a smoother difficulty curve with gradual increases",
    "Add consistent scoring opportunities throughout gameplay",
];

const MONOTONOUS_ADVICE: [&str; 4] = [
    "Add penalties for monotonous input patterns",
    "Strengthen difficulty escalation over time",
    "Add mechanics that require rhythmic or varied player actions",
    "Ensure button mashing doesn't provide an advantage",
];

/// Fixed advice for every sub-score below 2, in rubric order.
pub fn generate_recommendations(evaluation: &Evaluation) -> Vec<String> {
    let groups: [(i32, &[&str]); 4] = [
        (evaluation.duration_score, &DURATION_ADVICE),
        (evaluation.skill_gap_score, &SKILL_GAP_ADVICE),
        (evaluation.difficulty_score, &DIFFICULTY_ADVICE),
        (evaluation.monotonous_input_score, &MONOTONOUS_ADVICE),
    ];

    groups
        .iter()
        .filter(|(score, _)| *score < 2)
        .flat_map(|(_, advice)| advice.iter().map(|s| (*s).to_owned()))
        .collect()
}

// ── Comparison ────────────────────────────────────────────────────────────────

/// Pick the report with the strictly greatest total score.  Ties go to the
/// earliest report.
pub fn compare_games(reports: &[EvaluationReport]) -> AnalyzerResult<GameComparison> {
    let (first, rest) = reports.split_first().ok_or(AnalyzerError::NoGames)?;

    let (best_index, best) = rest.iter().enumerate().fold((0, first), |(bi, best), (i, r)| {
        if r.evaluation.total_score > best.evaluation.total_score {
            (i + 1, r)
        } else {
            (bi, best)
        }
    });

    info!(
        games = reports.len(),
        best = %best.game_name,
        total = best.evaluation.total_score,
        "game comparison finished"
    );

    Ok(GameComparison {
        best_index,
        best_game: best.game_name.clone(),
        reasons:   best.evaluation.strengths.clone(),
    })
}

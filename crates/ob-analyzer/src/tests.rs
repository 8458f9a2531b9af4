//! Tests for ob-analyzer.

use ob_core::{SimConfig, Tick};
use ob_pattern::Archetype;
use ob_sim::{FnGame, GameAdapter, ScoreEvent, Simulator};

use crate::{
    AnalyzerConfig, ArchetypeResult, EvaluationReport, GameAnalyzer, MonotonousResults,
    PatternResult, PlayerResults,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn archetype(archetype: Archetype, average_score: f64, average_duration: f64) -> ArchetypeResult {
    ArchetypeResult { archetype, runs: 3, average_score, average_duration, score_events: Vec::new() }
}

fn players(beginner: (f64, f64), expert: (f64, f64)) -> PlayerResults {
    let beginner = archetype(Archetype::Beginner, beginner.0, beginner.1);
    let expert = archetype(Archetype::Expert, expert.0, expert.1);
    let skill_gap = crate::skill_gap(expert.average_score, beginner.average_score);
    PlayerResults { beginner, expert, skill_gap }
}

fn pattern_result(name: &str, secs: f64, vulnerable: bool) -> PatternResult {
    PatternResult {
        pattern:          name.to_owned(),
        survival_seconds: secs,
        score:            0.0,
        ticks:            (secs * 60.0) as u64,
        is_vulnerable:    vulnerable,
    }
}

fn monotonous(vulnerable: &[bool]) -> MonotonousResults {
    let names = ["NoInput", "HoldOnly", "RegularSpam"];
    MonotonousResults::from_results(
        vulnerable.iter().zip(names).map(|(&v, n)| pattern_result(n, 5.0, v)).collect(),
    )
}

fn score_events(ticks_points: &[(u64, f64)]) -> Vec<ScoreEvent> {
    ticks_points
        .iter()
        .map(|&(t, points)| ScoreEvent { points, position: None, tick: Tick(t) })
        .collect()
}

fn report(name: &str, total: i32) -> EvaluationReport {
    let config = AnalyzerConfig::default();
    let mut evaluation =
        crate::evaluate_game(&config, &players((0.0, 0.0), (0.0, 0.0)), &monotonous(&[]));
    evaluation.total_score = total;
    evaluation.strengths = vec![format!("{name} strength")];
    EvaluationReport {
        game_name: name.to_owned(),
        monotonous: monotonous(&[]),
        players: players((0.0, 0.0), (0.0, 0.0)),
        evaluation,
        recommendations: Vec::new(),
    }
}

fn analyzer() -> GameAnalyzer {
    GameAnalyzer::new(AnalyzerConfig::default()).unwrap()
}

/// Never ends, never scores.
fn idle_game() -> impl GameAdapter<Context = ()> {
    FnGame::new("idle", |_s: &mut Simulator| (), |_s: &mut Simulator, _c: &mut ()| {})
}

/// Ends after `patience` consecutive ticks without a fresh press; scores one
/// point per press.
fn tapping_game(patience: u32) -> impl GameAdapter<Context = u32> {
    FnGame::new(
        "tapper",
        |_s: &mut Simulator| 0u32,
        move |s: &mut Simulator, idle: &mut u32| {
            if s.input().just_pressed {
                *idle = 0;
                s.add_score(1.0);
            } else {
                *idle += 1;
                if *idle > patience {
                    s.end();
                }
            }
        },
    )
}

// ── Rating & sub-scores ───────────────────────────────────────────────────────

#[cfg(test)]
mod rubric_tests {
    use super::*;
    use crate::{Rating, rubric};

    #[test]
    fn rating_boundaries() {
        assert_eq!(Rating::from_total(12), Rating::Outstanding);
        assert_eq!(Rating::from_total(10), Rating::Outstanding);
        assert_eq!(Rating::from_total(9), Rating::Excellent);
        assert_eq!(Rating::from_total(8), Rating::Excellent);
        assert_eq!(Rating::from_total(7), Rating::Good);
        assert_eq!(Rating::from_total(6), Rating::Good);
        assert_eq!(Rating::from_total(3), Rating::Average);
        assert_eq!(Rating::from_total(2), Rating::NeedsImprovement);
        assert_eq!(Rating::NeedsImprovement.to_string(), "NEEDS IMPROVEMENT");
    }

    #[test]
    fn duration_cut_points() {
        let c = AnalyzerConfig::default();
        let cases = [
            (60.0, 3), (30.0, 3), (29.9, 2), (20.0, 2), (15.0, 1), (10.0, 0),
            (5.0, -1), (2.0, -2), (1.99, -3), (0.0, -3),
        ];
        for (secs, expected) in cases {
            assert_eq!(rubric::duration_score(&c, secs), expected, "{secs}s");
        }
    }

    #[test]
    fn skill_gap_cut_points() {
        let c = AnalyzerConfig::default();
        assert_eq!(rubric::skill_gap_score(&c, 3.0), 3);
        assert_eq!(rubric::skill_gap_score(&c, 2.5), 2);
        assert_eq!(rubric::skill_gap_score(&c, 1.5), 1);
        assert_eq!(rubric::skill_gap_score(&c, 1.49), 0);
    }

    #[test]
    fn skill_gap_clamps_beginner_to_one() {
        assert_eq!(crate::skill_gap(300.0, 0.0), 300.0);
        assert_eq!(crate::skill_gap(300.0, 0.5), 300.0);
        assert_eq!(crate::skill_gap(300.0, 100.0), 3.0);
    }

    #[test]
    fn consistency_of_steady_scoring_is_one() {
        let events = score_events(&[(0, 1.0), (10, 1.0), (20, 1.0), (30, 1.0), (40, 1.0), (50, 1.0)]);
        assert!((crate::score_consistency(&events, 5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn consistency_defaults_to_one_with_few_events() {
        let events = score_events(&[(0, 1.0), (1, 100.0), (2, 1.0), (3, 50.0)]);
        assert_eq!(crate::score_consistency(&events, 5), 1.0);
    }

    #[test]
    fn consistency_skips_run_boundaries() {
        // Two runs concatenated: the tick drops back at the boundary.
        let events = score_events(&[(10, 1.0), (20, 1.0), (30, 1.0), (10, 1.0), (20, 1.0), (30, 1.0)]);
        assert!((crate::score_consistency(&events, 5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn consistency_with_zero_points_is_zero() {
        let events = score_events(&[(0, 0.0), (1, 0.0), (2, 0.0), (3, 0.0), (4, 0.0)]);
        assert_eq!(crate::score_consistency(&events, 5), 0.0);
    }

    #[test]
    fn erratic_scoring_is_inconsistent() {
        let events = score_events(&[(0, 1.0), (1, 50.0), (100, 1.0), (101, 80.0), (400, 1.0), (401, 60.0)]);
        assert!(crate::score_consistency(&events, 5) < 0.7);
    }

    #[test]
    fn vulnerability_levels() {
        let none = monotonous(&[false, false, false]);
        assert_eq!(none.vulnerability_score, 3);
        assert_eq!(none.vulnerability_level(), "Low");

        let one = monotonous(&[false, true, false]);
        assert_eq!(one.vulnerability_score, 1);
        assert!(one.is_moderately_vulnerable && !one.is_highly_vulnerable);
        assert_eq!(one.vulnerable_patterns, vec!["HoldOnly".to_owned()]);

        let two = monotonous(&[true, true, false]);
        assert_eq!(two.vulnerability_score, 0);
        assert_eq!(two.vulnerability_level(), "High");
    }

    #[test]
    fn strong_game_evaluation() {
        let c = AnalyzerConfig::default();
        let mut p = players((40.0, 12.0), (200.0, 35.0));
        p.expert.score_events =
            score_events(&[(0, 5.0), (60, 5.0), (120, 5.0), (180, 5.0), (240, 5.0), (300, 5.0)]);

        let e = crate::evaluate_game(&c, &p, &monotonous(&[false, false, false]));
        assert_eq!(e.duration_score, 3);
        assert_eq!(e.skill_gap_score, 3);
        assert_eq!(e.difficulty_score, 3, "progression ratio {}", e.progression_ratio);
        assert_eq!(e.monotonous_input_score, 3);
        assert_eq!(e.total_score, 12);
        assert_eq!(e.rating, Rating::Outstanding);
        assert!(e.weaknesses.is_empty());
        assert_eq!(e.strengths.len(), 4);
        assert!(crate::generate_recommendations(&e).is_empty());
    }

    #[test]
    fn weak_game_evaluation() {
        let c = AnalyzerConfig::default();
        let p = players((10.0, 3.0), (11.0, 3.0));
        let m = monotonous(&[true, false, true]);

        let e = crate::evaluate_game(&c, &p, &m);
        assert_eq!(e.duration_score, -2);
        assert_eq!(e.skill_gap_score, 0);
        // Beginner too short, no progression, consistency defaults to 1.0.
        assert_eq!(e.difficulty_score, 1);
        assert_eq!(e.monotonous_input_score, 0);
        assert_eq!(e.total_score, 1);
        assert_eq!(e.rating, Rating::NeedsImprovement);

        assert_eq!(
            e.weaknesses,
            vec![
                "Short game duration - difficulty needs rebalancing",
                "Small skill gap - player skill differences don't significantly impact results",
                "Game is vulnerable to monotonous input patterns",
                "Player can survive by using the NoInput pattern",
                "Player can survive by using the RegularSpam pattern",
            ]
        );
        assert_eq!(
            e.strengths,
            vec!["Good difficulty progression - generally balanced for different skill levels"]
        );

        let recs = crate::generate_recommendations(&e);
        assert_eq!(recs.len(), 13);
        assert_eq!(recs[0], "Lower initial difficulty to extend gameplay duration");
        assert_eq!(recs[12], "Ensure button mashing doesn't provide an advantage");
    }

    #[test]
    fn moderate_vulnerability_still_recommends() {
        let c = AnalyzerConfig::default();
        let e = crate::evaluate_game(&c, &players((40.0, 12.0), (200.0, 35.0)), &monotonous(&[true]));
        assert_eq!(e.monotonous_input_score, 1);
        let recs = crate::generate_recommendations(&e);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0], "Add penalties for monotonous input patterns");
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compare_tests {
    use super::*;
    use crate::{AnalyzerError, compare_games};

    #[test]
    fn ties_go_to_first_maximum() {
        let reports = vec![report("a", 5), report("b", 9), report("c", 9)];
        let cmp = compare_games(&reports).unwrap();
        assert_eq!(cmp.best_index, 1);
        assert_eq!(cmp.best_game, "b");
        assert_eq!(cmp.reasons, vec!["b strength".to_owned()]);
    }

    #[test]
    fn single_report_wins() {
        let cmp = compare_games(&[report("solo", 0)]).unwrap();
        assert_eq!(cmp.best_index, 0);
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(compare_games(&[]), Err(AnalyzerError::NoGames)));
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn tick_rate_rescales_tick_values_only() {
        let c = AnalyzerConfig::for_tick_rate(120);
        assert_eq!(c.max_ticks, 7200);
        assert_eq!(c.monotonous_duration_ticks, 1200);
        assert_eq!(c.spam_press_ticks, 6);
        assert_eq!(c.vulnerable_above_secs, 10.0);

        let same = AnalyzerConfig::for_tick_rate(60);
        assert_eq!(same, AnalyzerConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c: AnalyzerConfig = toml::from_str("max_ticks = 1800\nplayer_runs = 5\n").unwrap();
        assert_eq!(c.max_ticks, 1800);
        assert_eq!(c.player_runs, 5);
        assert_eq!(c.beginner_min_secs, 8.0);
    }

    #[test]
    fn invalid_configs_rejected() {
        let zero_runs = AnalyzerConfig { player_runs: 0, ..AnalyzerConfig::default() };
        assert!(GameAnalyzer::new(zero_runs).is_err());

        let zero_spam = AnalyzerConfig { spam_press_ticks: 0, ..AnalyzerConfig::default() };
        assert!(GameAnalyzer::new(zero_spam).is_err());

        let unordered = AnalyzerConfig {
            skill_gap_thresholds: [1.0, 2.0, 3.0],
            ..AnalyzerConfig::default()
        };
        assert!(unordered.validate().is_err());
    }
}

// ── End-to-end analysis ───────────────────────────────────────────────────────

#[cfg(test)]
mod analyzer_tests {
    use ob_pattern::{NamedPattern, regular_spam};

    use super::*;

    #[test]
    fn idle_game_is_highly_vulnerable() {
        let a = analyzer();
        let mut sim = Simulator::default();
        let m = a.test_monotonous_patterns(&mut sim, &idle_game());

        let names: Vec<&str> = m.pattern_results.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(names, ["NoInput", "HoldOnly", "RegularSpam"]);
        for r in &m.pattern_results {
            assert_eq!(r.ticks, 3600);
            assert!((r.survival_seconds - 60.0).abs() < 1e-9);
            assert!(r.is_vulnerable);
        }
        assert!(m.is_highly_vulnerable);
        assert_eq!(m.vulnerability_score, 0);
    }

    #[test]
    fn instant_death_is_vulnerable_too() {
        let game = FnGame::new("glass", |_s: &mut Simulator| (), |s: &mut Simulator, _c: &mut ()| s.end());
        let m = analyzer().test_monotonous_patterns(&mut Simulator::default(), &game);
        assert!(m.pattern_results.iter().all(|r| r.ticks == 1 && r.is_vulnerable));
    }

    #[test]
    fn tapping_game_punishes_monotony() {
        // Dies after half a second without a fresh press.
        let game = tapping_game(30);
        let m = analyzer().test_monotonous_patterns(&mut Simulator::default(), &game);

        let by_name = |n: &str| m.pattern_results.iter().find(|r| r.pattern == n).unwrap();
        assert!(by_name("NoInput").is_vulnerable, "dies in under a second");
        assert!(by_name("HoldOnly").is_vulnerable, "one press, then dies");
        // 200 spam actions of four ticks each (the first only three) last
        // about 13 s; afterwards the release holds and the game ends.
        let spam = by_name("RegularSpam");
        assert!(spam.survival_seconds > 13.0 && spam.survival_seconds < 14.0);
        assert!(spam.is_vulnerable);
    }

    #[test]
    fn extra_monotonous_pattern_is_tested() {
        let slow = NamedPattern::new("SlowSpam", regular_spam(10, 50, 5).unwrap());
        let a = analyzer().with_monotonous_pattern(slow);
        assert_eq!(a.monotonous_patterns().len(), 4);

        let m = a.test_monotonous_patterns(&mut Simulator::default(), &tapping_game(30));
        assert_eq!(m.pattern_results[3].pattern, "SlowSpam");
    }

    #[test]
    fn player_comparison_averages_runs() {
        let mut a = analyzer();
        let mut sim = Simulator::default();
        // Beginner waits are never shorter than 60 ticks; expert gaps stay under 40.
        let p = a.compare_player_patterns(&mut sim, &tapping_game(40));

        assert_eq!(p.beginner.runs, 3);
        assert_eq!(p.expert.archetype, Archetype::Expert);
        assert_eq!(sim.runs_started(), 6);

        assert_eq!(p.beginner.average_score, 0.0);
        assert_eq!(p.expert.average_score, 20.0);
        assert_eq!(p.expert.score_events.len(), 60);
        assert_eq!(p.skill_gap, 20.0);
    }

    #[test]
    fn comprehensive_report_is_reproducible() {
        let game = tapping_game(45);
        let first = analyzer().evaluate_game_comprehensive(&mut Simulator::default(), &game);
        let second = analyzer().evaluate_game_comprehensive(&mut Simulator::default(), &game);

        assert_eq!(first, second);
        assert_eq!(first.game_name, "tapper");
        assert_eq!(first.recommendations, crate::generate_recommendations(&first.evaluation));
        let e = &first.evaluation;
        assert_eq!(
            e.total_score,
            e.duration_score.max(0) + e.skill_gap_score + e.difficulty_score + e.monotonous_input_score
        );
    }

    #[test]
    fn slower_tick_rate_with_rescaled_config() {
        let sim_config = SimConfig { ticks_per_second: 30, ..SimConfig::default() };
        let mut sim = Simulator::new(sim_config).unwrap();
        let a = GameAnalyzer::new(AnalyzerConfig::for_tick_rate(30)).unwrap();

        let m = a.test_monotonous_patterns(&mut sim, &idle_game());
        assert!(m.pattern_results.iter().all(|r| r.ticks == 1800));
        assert!((m.pattern_results[0].survival_seconds - 60.0).abs() < 1e-9);
    }
}

//! `GameAnalyzer` — drives a game through the analysis runs.

use ob_core::SimRng;
use ob_pattern::{
    Archetype, NamedPattern, Pattern, beginner, expert, hold_only, no_input, regular_spam,
};
use ob_sim::{GameAdapter, Simulator};
use tracing::{debug, info};

use crate::rubric;
use crate::{
    AnalyzerConfig, AnalyzerResult, ArchetypeResult, Evaluation, EvaluationReport,
    MonotonousResults, PatternResult, PlayerResults,
};

/// Runs the monotonous-input and player-skill tests against a game and
/// scores the results.
///
/// The analyzer owns only its configuration, the monotonous pattern set and
/// an RNG for generating Beginner/Expert patterns.  All game state lives in
/// the [`Simulator`] passed to each call, which is re-initialised before
/// every run.
pub struct GameAnalyzer {
    config:     AnalyzerConfig,
    monotonous: Vec<NamedPattern>,
    rng:        SimRng,
}

impl GameAnalyzer {
    /// Build an analyzer with the three standard monotonous patterns.
    pub fn new(config: AnalyzerConfig) -> AnalyzerResult<Self> {
        config.validate()?;

        let duration = config.monotonous_duration_ticks;
        let monotonous = vec![
            NamedPattern::new(Archetype::NoInput.name(), no_input(duration)?),
            NamedPattern::new(Archetype::HoldOnly.name(), hold_only(duration)?),
            NamedPattern::new(
                Archetype::RegularSpam.name(),
                regular_spam(config.spam_press_ticks, config.spam_release_ticks, config.spam_cycles)?,
            ),
        ];
        let rng = SimRng::new(config.pattern_seed);

        Ok(Self { config, monotonous, rng })
    }

    /// Add an extra pattern to the monotonous test set.
    pub fn with_monotonous_pattern(mut self, pattern: NamedPattern) -> Self {
        self.monotonous.push(pattern);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The monotonous patterns in test order.
    pub fn monotonous_patterns(&self) -> &[NamedPattern] {
        &self.monotonous
    }

    // ── Tests ─────────────────────────────────────────────────────────────

    /// Run each monotonous pattern once from a fresh init.
    pub fn test_monotonous_patterns<G>(&self, sim: &mut Simulator, game: &G) -> MonotonousResults
    where
        G: GameAdapter + ?Sized,
    {
        let results = self
            .monotonous
            .iter()
            .map(|named| {
                let run = sim.run_fresh(game, self.config.max_ticks, &named.pattern);
                let survival_seconds = run.duration_seconds;
                PatternResult {
                    pattern: named.name.clone(),
                    survival_seconds,
                    score: run.score,
                    ticks: run.ticks,
                    is_vulnerable: survival_seconds > self.config.vulnerable_above_secs
                        || survival_seconds < self.config.vulnerable_below_secs,
                }
            })
            .collect();

        MonotonousResults::from_results(results)
    }

    /// Generate one Beginner and one Expert pattern and run each
    /// `player_runs` times from a fresh init.
    pub fn compare_player_patterns<G>(&mut self, sim: &mut Simulator, game: &G) -> PlayerResults
    where
        G: GameAdapter + ?Sized,
    {
        let cycles = self.config.pattern_cycles;
        let beginner_pattern = beginner(&mut self.rng, cycles);
        let expert_pattern = expert(&mut self.rng, cycles);

        let beginner = self.run_archetype(sim, game, Archetype::Beginner, &beginner_pattern);
        let expert = self.run_archetype(sim, game, Archetype::Expert, &expert_pattern);
        let skill_gap = rubric::skill_gap(expert.average_score, beginner.average_score);

        PlayerResults { beginner, expert, skill_gap }
    }

    fn run_archetype<G>(
        &self,
        sim: &mut Simulator,
        game: &G,
        archetype: Archetype,
        pattern: &Pattern,
    ) -> ArchetypeResult
    where
        G: GameAdapter + ?Sized,
    {
        let runs = self.config.player_runs;
        let mut total_score = 0.0;
        let mut total_duration = 0.0;
        let mut score_events = Vec::new();

        for _ in 0..runs {
            let run = sim.run_fresh(game, self.config.max_ticks, pattern);
            total_score += run.score;
            total_duration += run.duration_seconds;
            score_events.extend(run.score_events().copied());
        }

        debug!(
            game = game.name(),
            %archetype,
            runs,
            average_score = total_score / runs as f64,
            "archetype runs finished"
        );

        ArchetypeResult {
            archetype,
            runs,
            average_score: total_score / runs as f64,
            average_duration: total_duration / runs as f64,
            score_events,
        }
    }

    // ── Scoring ───────────────────────────────────────────────────────────

    /// See [`rubric::evaluate_game`].
    pub fn evaluate_game(
        &self,
        players: &PlayerResults,
        monotonous: &MonotonousResults,
    ) -> Evaluation {
        rubric::evaluate_game(&self.config, players, monotonous)
    }

    /// Run every test on `game` and assemble the full report.
    pub fn evaluate_game_comprehensive<G>(
        &mut self,
        sim: &mut Simulator,
        game: &G,
    ) -> EvaluationReport
    where
        G: GameAdapter + ?Sized,
    {
        let monotonous = self.test_monotonous_patterns(sim, game);
        let players = self.compare_player_patterns(sim, game);
        let evaluation = self.evaluate_game(&players, &monotonous);
        let recommendations = rubric::generate_recommendations(&evaluation);

        info!(
            game = game.name(),
            total = evaluation.total_score,
            rating = %evaluation.rating,
            vulnerability = monotonous.vulnerability_level(),
            skill_gap = players.skill_gap,
            "game evaluated"
        );

        EvaluationReport {
            game_name: game.name().to_owned(),
            monotonous,
            players,
            evaluation,
            recommendations,
        }
    }
}


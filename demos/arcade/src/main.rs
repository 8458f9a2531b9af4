//! arcade — evaluate three one-button arcade games and pick the best design.
//!
//! Usage: `arcade [CONFIG.toml]`.  Without a config the library defaults are
//! used and only the console summary is printed.  Set `RUST_LOG=debug` to
//! see every individual run.

mod config;
mod games;


use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ob_analyzer::{EvaluationReport, GameAnalyzer, compare_games};
use ob_core::SimRng;
use ob_output::{
    CsvReportWriter, JsonReportWriter, ReportWriter, TickTraceObserver, render_comparison,
    render_report,
};
use ob_pattern::{expert, load_patterns_csv};
use ob_sim::{GameAdapter, Simulator};

use config::{ArcadeConfig, OutputConfig};
use games::{BurgerStack, LavaSurfing, OrbitJumper};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ArcadeConfig::load(config_path.as_deref())?;

    // 2. Simulator and analyzer.
    let mut sim = Simulator::new(config.sim.clone())?;
    let mut analyzer = GameAnalyzer::new(config.analyzer.clone())?;
    if let Some(path) = &config.patterns {
        let extra = load_patterns_csv(path)
            .with_context(|| format!("loading patterns from {}", path.display()))?;
        info!(count = extra.len(), "loaded extra monotonous patterns");
        for pattern in extra {
            analyzer = analyzer.with_monotonous_pattern(pattern);
        }
    }

    if let Some(dir) = &config.output.dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    // 3. Evaluate every game.
    let t0 = Instant::now();
    let reports = vec![
        evaluate(&mut sim, &mut analyzer, &config, &LavaSurfing)?,
        evaluate(&mut sim, &mut analyzer, &config, &OrbitJumper)?,
        evaluate(&mut sim, &mut analyzer, &config, &BurgerStack)?,
    ];

    // 4. Compare.
    let comparison = compare_games(&reports)?;
    println!("{}", render_comparison(&reports, &comparison));
    info!(
        games = reports.len(),
        elapsed_secs = t0.elapsed().as_secs_f64(),
        best = %comparison.best_game,
        "evaluation complete"
    );

    // 5. Files.
    if let Some(dir) = &config.output.dir {
        write_reports(dir, &config.output, &reports, &comparison)?;
    }

    Ok(())
}

/// Analyze one game, print its report and optionally trace an Expert run.
fn evaluate<G: GameAdapter>(
    sim: &mut Simulator,
    analyzer: &mut GameAnalyzer,
    config: &ArcadeConfig,
    game: &G,
) -> Result<EvaluationReport> {
    let report = analyzer.evaluate_game_comprehensive(sim, game);
    println!("{}", render_report(&report));

    if let (Some(dir), true) = (&config.output.dir, config.output.trace) {
        trace_expert_run(config, game, dir)?;
    }
    Ok(report)
}

/// Trace one Expert run of `game` on a simulator of its own; the
/// evaluation simulator's run count is left untouched.
fn trace_expert_run<G: GameAdapter>(config: &ArcadeConfig, game: &G, dir: &Path) -> Result<()> {
    let mut sim = Simulator::new(config.sim.clone())?;
    let path = dir.join(format!("{}_trace.csv", game.name()));
    let mut rng = SimRng::new(config.analyzer.pattern_seed);
    let pattern = expert(&mut rng, config.analyzer.pattern_cycles);

    let mut obs = TickTraceObserver::create(&path)?;
    let mut ctx = sim.init_game(game);
    let result =
        sim.simulate_game_observed(game, &mut ctx, config.analyzer.max_ticks, &pattern, &mut obs);

    if let Some(e) = obs.take_error() {
        warn!(path = %path.display(), error = %e, "tick trace incomplete");
    }
    info!(
        game = game.name(),
        rows = obs.rows(),
        score = result.score,
        path = %path.display(),
        "expert run traced"
    );
    Ok(())
}

fn write_reports(
    dir: &Path,
    output: &OutputConfig,
    reports: &[EvaluationReport],
    comparison: &ob_analyzer::GameComparison,
) -> Result<()> {
    let mut writers: Vec<Box<dyn ReportWriter>> = Vec::new();
    if output.csv {
        writers.push(Box::new(CsvReportWriter::new(dir)?));
    }
    if output.json {
        writers.push(Box::new(JsonReportWriter::new(dir)));
    }

    for writer in &mut writers {
        for report in reports {
            writer.write_report(report)?;
        }
        writer.write_comparison(comparison)?;
        writer.finish()?;
    }
    info!(dir = %dir.display(), writers = writers.len(), "reports written");
    Ok(())
}

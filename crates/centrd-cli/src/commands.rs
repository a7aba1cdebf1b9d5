use std::io::{BufRead, Write};

use centrd_core::{Difficulty, DistanceMetric, Puzzle};
use centrd_game::{GameEngine, LogTelemetry, new_daily_puzzles};
use centrd_generator::{PuzzleGenerator, PuzzleSeed};
use centrd_ledger::{Clock, ScoreLedger, Store};
use centrd_solver::find_optimal_points;

use crate::{
    Args, CliError, DailyArgs, GenerateArgs, PlayArgs, SeedArgs, SolveArgs, play, render,
};

fn engine<S, C>(args: &Args, store: S, clock: C) -> GameEngine<S>
where
    S: Store,
    C: Clock + 'static,
{
    let mut engine = GameEngine::new(store, clock).with_telemetry(LogTelemetry);
    engine.set_metric(args.metric.into());
    engine
}

fn seed(args: &SeedArgs) -> Result<PuzzleSeed, CliError> {
    let seed = match (&args.seed, &args.seed_phrase) {
        (Some(hex), _) => hex.parse()?,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };
    Ok(seed)
}

pub(crate) fn play<S, C>(
    args: &Args,
    play_args: &PlayArgs,
    store: S,
    clock: C,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError>
where
    S: Store,
    C: Clock + 'static,
{
    let difficulty = Difficulty::from(play_args.difficulty);
    let seed = seed(&play_args.seed)?;
    let mut engine = engine(args, store, clock);

    writeln!(output, "Zen run: {difficulty}, seed {seed}")?;
    engine.start_zen_seeded(difficulty, seed);
    if play::drive(&mut engine, input, output)?.is_some()
        && let Some(best) = engine.ledger().best_for(difficulty)
    {
        writeln!(output, "Best {difficulty} average: {best:.2}")?;
    }
    Ok(())
}

pub(crate) fn daily<S, C>(
    args: &Args,
    daily_args: &DailyArgs,
    store: S,
    clock: C,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError>
where
    S: Store,
    C: Clock + 'static,
{
    if daily_args.show {
        let date = daily_args.date.unwrap_or_else(|| clock.today());
        writeln!(output, "Daily puzzles for {date}")?;
        for puzzle in new_daily_puzzles(date) {
            print_puzzle(output, &puzzle, args.metric.into())?;
        }
        return Ok(());
    }

    let mut engine = engine(args, store, clock);
    let date = engine.ledger().today();
    match engine.start_daily().map(|_| ()) {
        Ok(()) => writeln!(output, "Daily challenge for {date}")?,
        Err(reason) => {
            writeln!(output, "Come back tomorrow: {reason}.")?;
            if let Some(record) = engine.ledger().daily_record(date) {
                writeln!(
                    output,
                    "Today's total: {:.2} ({} perfect)",
                    record.total_score, record.perfect_count
                )?;
            }
            return Ok(());
        }
    }
    if play::drive(&mut engine, input, output)?.is_some() {
        writeln!(output, "Daily streak: {}", engine.ledger().streak())?;
    }
    Ok(())
}

pub(crate) fn solve(
    args: &Args,
    solve_args: &SolveArgs,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let grid_size = solve_args.grid_size;
    if let Some(&dot) = solve_args.dots.iter().find(|dot| !dot.is_within(grid_size)) {
        return Err(CliError::DotOutsideGrid { dot, grid_size });
    }
    let metric = DistanceMetric::from(args.metric);
    let optimal = find_optimal_points(grid_size, &solve_args.dots, metric);
    writeln!(
        output,
        "{} optimal cell(s) under {metric} distance, total {}:",
        optimal.points().len(),
        render::score(metric, optimal.total_distance())
    )?;
    for pos in optimal.points() {
        writeln!(output, "  {pos}")?;
    }
    Ok(())
}

pub(crate) fn generate(
    generate_args: &GenerateArgs,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let mut generator = PuzzleGenerator::with_seed(seed(&generate_args.seed)?);
    writeln!(output, "Seed: {}", generator.seed())?;
    for puzzle in generator.generate_many(generate_args.difficulty.into(), generate_args.count) {
        print_puzzle(output, &puzzle, DistanceMetric::Euclidean)?;
        for metric in [DistanceMetric::Manhattan, DistanceMetric::Chebyshev] {
            print_answer(output, &puzzle, metric)?;
        }
    }
    Ok(())
}

pub(crate) fn scores<S, C>(store: S, clock: C, output: &mut dyn Write) -> Result<(), CliError>
where
    S: Store,
    C: Clock + 'static,
{
    let ledger = ScoreLedger::load(store, clock);
    writeln!(output, "High scores (average distance, lower is better)")?;
    for difficulty in Difficulty::ALL {
        let scores = ledger.top_n_for(difficulty);
        if scores.is_empty() {
            writeln!(output, "  {difficulty}: none yet")?;
        } else {
            let scores: Vec<String> = scores.iter().map(|s| format!("{s:.2}")).collect();
            writeln!(output, "  {difficulty}: {}", scores.join(", "))?;
        }
    }
    let today = ledger.today();
    writeln!(output, "Daily streak: {}", ledger.streak())?;
    match ledger.daily_record(today) {
        Some(record) if record.completed => writeln!(
            output,
            "Today's challenge: done, total {:.2}, {} perfect",
            record.total_score, record.perfect_count
        )?,
        _ => writeln!(output, "Today's challenge: not played yet")?,
    }
    Ok(())
}

fn print_puzzle(
    output: &mut dyn Write,
    puzzle: &Puzzle,
    metric: DistanceMetric,
) -> Result<(), CliError> {
    let size = puzzle.grid_size();
    writeln!(
        output,
        "\nPuzzle {} ({size}x{size} grid, {} dots)",
        puzzle.id(),
        puzzle.dots().len()
    )?;
    render::grid(output, puzzle)?;
    print_answer(output, puzzle, metric)
}

fn print_answer(
    output: &mut dyn Write,
    puzzle: &Puzzle,
    metric: DistanceMetric,
) -> Result<(), CliError> {
    let optimal = find_optimal_points(puzzle.grid_size(), puzzle.dots(), metric);
    writeln!(
        output,
        "  {metric}: answer {} (total {}, {} optimal cell(s))",
        optimal.canonical(),
        render::score(metric, optimal.total_distance()),
        optimal.points().len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use centrd_ledger::{FixedClock, HIGH_SCORES_KEY, MemoryStore};
    use chrono::NaiveDate;
    use clap::Parser as _;

    use crate::run_with;

    use super::*;

    fn today() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    fn run(argv: &[&str], store: MemoryStore, input: &str) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let mut output = Vec::new();
        run_with(&args, store, today(), &mut Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_solve_prints_optimal_cells() {
        let text = run(
            &[
                "centrd", "-m", "manhattan", "solve", "-g", "3", "--dot", "0,0", "--dot", "2,0",
                "--dot", "1,2",
            ],
            MemoryStore::new(),
            "",
        );
        assert!(text.starts_with("1 optimal cell(s) under manhattan distance, total 4:"));
        assert!(text.contains("(1, 0)"));
    }

    #[test]
    fn test_solve_rejects_dot_outside_grid() {
        let args = Args::try_parse_from(["centrd", "solve", "-g", "3", "--dot", "3,0"]).unwrap();
        let result = run_with(
            &args,
            MemoryStore::new(),
            today(),
            &mut Cursor::new(""),
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(CliError::DotOutsideGrid { grid_size: 3, .. })));
    }

    #[test]
    fn test_zen_run_from_scripted_input() {
        let mut input = String::from("s\n");
        for _ in 0..centrd_game::ZEN_PUZZLE_COUNT {
            input.push_str("nonsense\n0 0\n\n");
        }
        let text = run(
            &["centrd", "play", "--seed-phrase", "scripted"],
            MemoryStore::new(),
            &input,
        );
        assert!(text.contains("Enter a cell as `x y`."));
        assert!(text.contains("Run complete!"));
        assert!(text.contains("Best easy average"));
    }

    #[test]
    fn test_quitting_leaves_no_score() {
        let args = Args::try_parse_from(["centrd", "play"]).unwrap();
        let mut output = Vec::new();
        let mut engine_store = MemoryStore::new();
        run_with(
            &args,
            &mut engine_store,
            today(),
            &mut Cursor::new("\nq\n"),
            &mut output,
        )
        .unwrap();
        assert_eq!(engine_store.get(HIGH_SCORES_KEY), None);
        assert_eq!(engine_store.get("has-played"), Some("true"));
    }

    #[test]
    fn test_daily_is_blocked_after_completion() {
        let store = MemoryStore::with_documents([(
            "daily-ledger",
            r#"{"scores":{"2024-01-15":{"date":"2024-01-15","totalScore":2.0,"averageScore":0.33,"perfectCount":4,"completed":true}},"currentStreak":1}"#,
        )]);
        let text = run(&["centrd", "daily"], store, "");
        assert!(text.contains("Come back tomorrow"));
        assert!(text.contains("Today's total: 2.00 (4 perfect)"));
    }

    #[test]
    fn test_daily_show_prints_six_puzzles() {
        let text = run(
            &["centrd", "daily", "--show", "--date", "2024-01-15"],
            MemoryStore::new(),
            "",
        );
        assert_eq!(text.matches("\nPuzzle daily-").count(), 6);
        assert!(text.contains("daily-x4jf946qy"));
    }

    #[test]
    fn test_scores_summary() {
        let store = MemoryStore::with_documents([(
            HIGH_SCORES_KEY,
            r#"{"easy":[0.5,1.25],"medium":[],"hard":[]}"#,
        )]);
        let text = run(&["centrd", "scores"], store, "");
        assert!(text.contains("easy: 0.50, 1.25"));
        assert!(text.contains("medium: none yet"));
        assert!(text.contains("Daily streak: 0"));
        assert!(text.contains("Today's challenge: not played yet"));
    }
}

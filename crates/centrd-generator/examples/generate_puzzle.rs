//! Example printing generated centrd puzzles together with their answers.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Replay a free-play puzzle from a seed phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed-phrase "monday"
//! ```
//!
//! Print the daily set for a date:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --daily 2024-01-15
//! ```

use centrd_core::{Difficulty, DistanceMetric, Puzzle};
use centrd_generator::{PuzzleGenerator, PuzzleSeed, generate_daily_puzzles};
use centrd_solver::find_optimal_points;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of free-play puzzles.
    #[arg(short, long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Number of free-play puzzles to generate.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Derive the free-play seed from this phrase.
    #[arg(long, value_name = "PHRASE")]
    seed_phrase: Option<String>,

    /// Print the daily set for this date instead of free-play puzzles.
    #[arg(long, value_name = "YYYY-MM-DD")]
    daily: Option<NaiveDate>,
}

fn main() {
    let args = Args::parse();

    let puzzles = if let Some(date) = args.daily {
        println!("Daily puzzles for {date}");
        generate_daily_puzzles(date)
    } else {
        let mut generator = match &args.seed_phrase {
            Some(phrase) => PuzzleGenerator::with_seed(PuzzleSeed::from_phrase(phrase)),
            None => PuzzleGenerator::new(),
        };
        println!("Seed: {}", generator.seed());
        generator.generate_many(args.difficulty.into(), args.count)
    };

    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &Puzzle) {
    println!();
    let size = puzzle.grid_size();
    println!(
        "Puzzle {} ({size}x{size} grid, {} dots)",
        puzzle.id(),
        puzzle.dots().len()
    );
    for y in 0..puzzle.grid_size() {
        let row: String = (0..puzzle.grid_size())
            .map(|x| {
                if puzzle.dots().iter().any(|d| d.x() == x && d.y() == y) {
                    '●'
                } else {
                    '·'
                }
            })
            .collect();
        println!("  {row}");
    }
    for metric in DistanceMetric::ALL {
        let optimal = find_optimal_points(puzzle.grid_size(), puzzle.dots(), metric);
        println!(
            "  {metric}: answer {} (total {:.3}, {} optimal cell(s))",
            optimal.canonical(),
            optimal.total_distance(),
            optimal.points().len()
        );
    }
}

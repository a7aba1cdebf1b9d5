use std::path::PathBuf;

use centrd_core::{Difficulty, DistanceMetric, Position};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Find the cell closest to every dot.
#[derive(Debug, Parser)]
#[command(name = "centrd", author, version, about)]
pub struct Args {
    /// Directory holding high scores, daily results and the tutorial flag.
    #[arg(long, value_name = "DIR", env = "CENTRD_DATA_DIR", default_value = ".centrd")]
    pub data_dir: PathBuf,

    /// Distance used to score guesses.
    #[arg(short, long, value_name = "METRIC", default_value = "euclidean", global = true)]
    pub metric: MetricArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a zen run of five puzzles.
    Play(PlayArgs),
    /// Play today's daily challenge, or show the puzzles of a date.
    Daily(DailyArgs),
    /// Print every optimal cell for a set of dots.
    Solve(SolveArgs),
    /// Print free-play puzzles with their answers.
    Generate(GenerateArgs),
    /// Show high scores and the daily streak.
    Scores,
}

#[derive(Debug, ClapArgs)]
pub struct PlayArgs {
    /// Puzzle difficulty.
    #[arg(short, long, value_name = "LEVEL", default_value = "easy")]
    pub difficulty: DifficultyArg,

    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Debug, ClapArgs)]
pub struct DailyArgs {
    /// Print the daily puzzles with their answers instead of playing.
    #[arg(long)]
    pub show: bool,

    /// Challenge date to show; defaults to today.
    #[arg(long, value_name = "YYYY-MM-DD", requires = "show")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, ClapArgs)]
pub struct SolveArgs {
    /// Side length of the square grid.
    #[arg(short, long, value_name = "SIZE", value_parser = clap::value_parser!(u8).range(1..))]
    pub grid_size: u8,

    /// Dot position as `x,y`; repeat for every dot.
    #[arg(long = "dot", value_name = "X,Y", value_parser = parse_dot, required = true)]
    pub dots: Vec<Position>,
}

#[derive(Debug, ClapArgs)]
pub struct GenerateArgs {
    /// Puzzle difficulty.
    #[arg(short, long, value_name = "LEVEL", default_value = "medium")]
    pub difficulty: DifficultyArg,

    /// Number of puzzles to print.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    pub count: usize,

    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Debug, Default, ClapArgs)]
#[group(multiple = false)]
pub struct SeedArgs {
    /// Replay the puzzles of a 64-digit hex seed.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<String>,

    /// Replay the puzzles derived from a phrase.
    #[arg(long, value_name = "PHRASE")]
    pub seed_phrase: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl From<MetricArg> for DistanceMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Euclidean => DistanceMetric::Euclidean,
            MetricArg::Manhattan => DistanceMetric::Manhattan,
            MetricArg::Chebyshev => DistanceMetric::Chebyshev,
        }
    }
}

/// Parses a position written as `x,y` or `x y`.
pub(crate) fn parse_position(s: &str) -> Option<Position> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(x, y))
}

fn parse_dot(s: &str) -> Result<Position, String> {
    parse_position(s).ok_or_else(|| format!("expected `x,y` with coordinates 0-255, got `{s}`"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3,4"), Some(Position::new(3, 4)));
        assert_eq!(parse_position(" 3  4 "), Some(Position::new(3, 4)));
        assert_eq!(parse_position("3, 4"), Some(Position::new(3, 4)));
        assert_eq!(parse_position("3"), None);
        assert_eq!(parse_position("3,4,5"), None);
        assert_eq!(parse_position("-1,4"), None);
        assert_eq!(parse_position("x,y"), None);
    }

    #[test]
    fn test_parse_solve() {
        let args = Args::try_parse_from([
            "centrd", "--metric", "manhattan", "solve", "-g", "3", "--dot", "0,0", "--dot", "2,0",
            "--dot", "1,2",
        ])
        .unwrap();
        assert_eq!(args.metric, MetricArg::Manhattan);
        let Command::Solve(solve) = args.command else {
            panic!("expected solve, got {:?}", args.command);
        };
        assert_eq!(solve.grid_size, 3);
        assert_eq!(solve.dots.len(), 3);
    }

    #[test]
    fn test_seed_options_conflict() {
        let result = Args::try_parse_from([
            "centrd",
            "play",
            "--seed-phrase",
            "a",
            "--seed",
            "00",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_date_requires_show() {
        assert!(Args::try_parse_from(["centrd", "daily", "--date", "2024-01-15"]).is_err());
        let args =
            Args::try_parse_from(["centrd", "daily", "--show", "--date", "2024-01-15"]).unwrap();
        let Command::Daily(daily) = args.command else {
            panic!("expected daily");
        };
        assert_eq!(daily.date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }
}

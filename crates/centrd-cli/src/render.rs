use std::io::{self, Write};

use centrd_core::{DistanceMetric, Position, Puzzle};

const DOT: char = '●';
const GUESS: char = '×';
const ANSWER: char = '◎';
const HIT: char = '★';
const EMPTY: char = '·';

fn cell(puzzle: &Puzzle, pos: Position) -> char {
    let guess = puzzle.user_guess();
    let answer = puzzle.correct_answer();
    match (Some(pos) == guess, Some(pos) == answer) {
        (true, true) => HIT,
        (true, false) => GUESS,
        (false, true) => ANSWER,
        (false, false) if puzzle.dots().contains(&pos) => DOT,
        (false, false) => EMPTY,
    }
}

/// Draws the grid with x along the top and y down the side.
pub(crate) fn grid(output: &mut dyn Write, puzzle: &Puzzle) -> io::Result<()> {
    let size = puzzle.grid_size();
    write!(output, "   ")?;
    for x in 0..size {
        write!(output, "{x:>3}")?;
    }
    writeln!(output)?;
    for y in 0..size {
        write!(output, "{y:>3}")?;
        for x in 0..size {
            write!(output, "{:>3}", cell(puzzle, Position::new(x, y)))?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub(crate) fn score(metric: DistanceMetric, value: f64) -> String {
    if metric.is_integral() {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use centrd_core::Reveal;

    use super::*;

    #[test]
    fn test_grid_marks_dots_guess_and_answer() {
        let mut puzzle = Puzzle::new("t", 3, vec![Position::new(0, 0), Position::new(2, 2)]);
        let mut out = Vec::new();
        grid(&mut out, &puzzle).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.matches(DOT).count(), 2);

        puzzle.record_reveal(Reveal {
            user_guess: Position::new(1, 0),
            correct_answer: Position::new(1, 1),
            score: 1.0,
        });
        let mut out = Vec::new();
        grid(&mut out, &puzzle).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(GUESS).count(), 1);
        assert_eq!(text.matches(ANSWER).count(), 1);
    }

    #[test]
    fn test_score_precision() {
        assert_eq!(score(DistanceMetric::Manhattan, 3.0), "3");
        assert_eq!(score(DistanceMetric::Euclidean, 2.236_067), "2.24");
    }
}

use std::io::{self, BufRead, Write};

use centrd_game::{GameEngine, Phase, RunSummary, Transition, TutorialOutcome};
use centrd_ledger::Store;

use crate::{args::parse_position, render};

const TUTORIAL: &str = "\
Each puzzle shows a few dots on a square grid.
Pick the cell whose total distance to every dot is as small as possible.
Your score is how far your guess lands from the best cell: 0 is perfect, lower is better.
Enter guesses as `x y` (or `x,y`). Type `q` to quit.";

/// Drives the live session of `engine` from `input` until it completes or
/// the player quits.
///
/// Returns the run summary if the run was completed.
pub(crate) fn drive<S>(
    engine: &mut GameEngine<S>,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> io::Result<Option<RunSummary>>
where
    S: Store,
{
    loop {
        let Some(session) = engine.session() else {
            return Ok(None);
        };
        let metric = session.metric();
        let index = session.current_index();
        let count = session.puzzles().len();

        match session.phase() {
            Phase::Complete => return Ok(session.summary()),
            Phase::Tutorial => {
                writeln!(output, "{TUTORIAL}")?;
                write!(output, "Press enter to start, or `s` to skip: ")?;
                output.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                let outcome = if line.eq_ignore_ascii_case("s") {
                    TutorialOutcome::Skipped
                } else {
                    TutorialOutcome::Completed
                };
                engine.close_tutorial(outcome);
            }
            Phase::Playing => {
                if let Some(puzzle) = session.current_puzzle() {
                    writeln!(
                        output,
                        "\nPuzzle {} of {count} ({metric} distance)",
                        index + 1
                    )?;
                    render::grid(output, puzzle)?;
                }
                write!(output, "Your guess: ")?;
                output.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                if is_quit(&line) {
                    return Ok(None);
                }
                let Some(pos) = parse_position(&line) else {
                    writeln!(output, "Enter a cell as `x y`.")?;
                    continue;
                };
                match engine.guess(pos) {
                    Transition::Scored { reveal, .. } => {
                        if let Some(puzzle) = engine.session().and_then(|s| s.puzzles().get(index)) {
                            render::grid(output, puzzle)?;
                        }
                        if reveal.is_perfect() {
                            writeln!(output, "Perfect! {} is the best cell.", reveal.correct_answer)?;
                        } else {
                            writeln!(
                                output,
                                "The best cell was {}. Score: {}",
                                reveal.correct_answer,
                                render::score(metric, reveal.score)
                            )?;
                        }
                    }
                    Transition::Ignored(reason) => writeln!(output, "Guess ignored: {reason}.")?,
                    other => log::debug!("unexpected transition after guess: {other:?}"),
                }
            }
            Phase::Revealing => {
                write!(output, "Press enter to continue: ")?;
                output.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                if is_quit(&line) {
                    return Ok(None);
                }
                if let Transition::Completed(summary) = engine.advance() {
                    print_summary(output, &summary, metric)?;
                }
            }
        }
    }
}

fn print_summary(
    output: &mut dyn Write,
    summary: &RunSummary,
    metric: centrd_core::DistanceMetric,
) -> io::Result<()> {
    writeln!(output, "\nRun complete!")?;
    writeln!(
        output,
        "Total score: {}, average {} over {} puzzles, {} perfect",
        render::score(metric, summary.total_score),
        render::score(centrd_core::DistanceMetric::Euclidean, summary.average_score),
        summary.scores.len(),
        summary.perfect_count
    )?;
    Ok(())
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

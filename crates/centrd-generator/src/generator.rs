use centrd_core::{Difficulty, MIN_DOT_SPACING, Position, Puzzle};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{EntropySource, PuzzleSeed, UnitSource};

/// Upper bound on dot placement draws per puzzle.
///
/// Every draw counts, accepted or not. When the bound runs out the puzzle
/// keeps however many dots were placed; the first draw is always accepted,
/// so a puzzle never ends up empty.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

const ID_LENGTH: usize = 9;

/// Generates one puzzle of `difficulty` from `source`.
///
/// Draws are consumed in a fixed order: grid size, target dot count, the
/// puzzle identifier, then two draws (x, y) per placement attempt. The daily
/// challenge depends on this order; changing it changes every daily puzzle.
pub fn generate_puzzle<S>(difficulty: Difficulty, source: &mut S, id_prefix: &str) -> Puzzle
where
    S: UnitSource + ?Sized,
{
    let band = difficulty.band();
    let grid_size = source.draw_in(band.grid_size);
    let target = usize::from(source.draw_in(band.dot_count));
    let id = format_id(id_prefix, source.next_unit());
    let dots = place_dots(grid_size, target, source);

    if dots.len() < target {
        log::debug!(
            "placed {} of {target} dots on {grid_size}x{grid_size} grid for puzzle {id}",
            dots.len()
        );
    }

    Puzzle::new(id, grid_size, dots)
}

/// Places up to `target` dots, each at least [`MIN_DOT_SPACING`] from the others.
///
/// Gives up after [`MAX_PLACEMENT_ATTEMPTS`] draws and returns the dots placed
/// so far.
pub fn place_dots<S>(grid_size: u8, target: usize, source: &mut S) -> Vec<Position>
where
    S: UnitSource + ?Sized,
{
    let mut dots: Vec<Position> = Vec::with_capacity(target);
    if grid_size == 0 {
        return dots;
    }

    let mut attempts = 0;
    while dots.len() < target && attempts < MAX_PLACEMENT_ATTEMPTS {
        let x = source.draw_in(0..=grid_size - 1);
        let y = source.draw_in(0..=grid_size - 1);
        let candidate = Position::new(x, y);
        if is_valid_dot(candidate, &dots) {
            dots.push(candidate);
        }
        attempts += 1;
    }
    dots
}

// A taken cell has Chebyshev distance 0 to itself, so the spacing test
// also rejects duplicates.
fn is_valid_dot(candidate: Position, dots: &[Position]) -> bool {
    dots.iter().all(|&dot| {
        let (dx, dy) = candidate.abs_diff(dot);
        dx.max(dy) >= MIN_DOT_SPACING
    })
}

/// Formats a puzzle id from the first [`ID_LENGTH`] base-36 fraction digits
/// of `unit`.
///
/// The digits are the shortest base-36 expansion that reads back as the same
/// `f64`, with the last digit rounded. Such an expansion may be shorter than
/// [`ID_LENGTH`], and the id is then shorter too.
fn format_id(prefix: &str, unit: f64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut id = String::with_capacity(prefix.len() + ID_LENGTH);
    id.push_str(prefix);
    id.extend(
        shortest_fraction_digits(unit, 36)
            .into_iter()
            .take(ID_LENGTH)
            .map(|d| char::from(DIGITS[usize::from(d)])),
    );
    id
}

/// Shortest digit expansion of `unit` in `radix` that still identifies the
/// `f64` uniquely.
///
/// Digits are generated until the remainder drops below half the gap to the
/// next representable value. The final digit is rounded half to even; a
/// round-up that carries past the radix point yields no digits.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shortest_fraction_digits(unit: f64, radix: u8) -> Vec<u8> {
    debug_assert!((0.0..1.0).contains(&unit));

    let base = f64::from(radix);
    let next = f64::from_bits(unit.to_bits() + 1);
    let mut delta = (0.5 * (next - unit)).max(f64::from_bits(1));
    let mut fraction = unit;
    let mut digits = Vec::new();
    while fraction >= delta {
        fraction *= base;
        delta *= base;
        let digit = fraction as u8;
        digits.push(digit);
        fraction -= f64::from(digit);
        let past_half = fraction > 0.5 || (fraction.total_cmp(&0.5).is_eq() && digit % 2 == 1);
        if past_half && fraction + delta > 1.0 {
            while let Some(last) = digits.pop() {
                if last + 1 < radix {
                    digits.push(last + 1);
                    break;
                }
            }
            break;
        }
    }
    digits
}

/// A free-play puzzle generator.
///
/// Every generator is backed by a [`PuzzleSeed`]; two generators built from
/// the same seed produce the same sequence of puzzles.
///
/// # Examples
///
/// ```
/// use centrd_core::Difficulty;
/// use centrd_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let seed = PuzzleSeed::from_phrase("replay");
/// let a = PuzzleGenerator::with_seed(seed).generate_many(Difficulty::Hard, 5);
/// let b = PuzzleGenerator::with_seed(seed).generate_many(Difficulty::Hard, 5);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    seed: PuzzleSeed,
    source: EntropySource,
}

impl PuzzleGenerator {
    /// Creates a generator with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(PuzzleSeed::random())
    }

    /// Creates a generator from a known seed.
    #[must_use]
    pub fn with_seed(seed: PuzzleSeed) -> Self {
        let rng = Pcg64::from_seed(seed.bytes());
        Self {
            seed,
            source: EntropySource::new(rng),
        }
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Generates the next puzzle.
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        generate_puzzle(difficulty, &mut self.source, "")
    }

    /// Generates the next `count` puzzles.
    pub fn generate_many(&mut self, difficulty: Difficulty, count: usize) -> Vec<Puzzle> {
        (0..count).map(|_| self.generate(difficulty)).collect()
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates one free-play puzzle from fresh entropy.
#[must_use]
pub fn generate_free_puzzle(difficulty: Difficulty) -> Puzzle {
    PuzzleGenerator::new().generate(difficulty)
}

/// Generates `count` free-play puzzles from fresh entropy.
#[must_use]
pub fn generate_free_puzzles(difficulty: Difficulty, count: usize) -> Vec<Puzzle> {
    let mut generator = PuzzleGenerator::new();
    log::debug!("generating {count} {difficulty} puzzles with seed {}", generator.seed());
    generator.generate_many(difficulty, count)
}

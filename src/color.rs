//! Palette handling and series color distribution.
//!
//! Charts pick their colors from a fixed palette of same-shade hues. For a
//! given series count the engine greedily selects the palette indices that
//! maximize mutual circular distance, so adjacent series never land on
//! visually adjacent hues. The starting index comes either from a numeric
//! seed (deterministic renders) or from an injected random source.

use once_cell::sync::Lazy;
use rand::Rng;

/// Background-shade palette used when the host does not supply one.
/// One entry per hue family, all at the same light shade.
pub static DEFAULT_PALETTE: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "#ffc9c9", // red
        "#fcc2d7", // pink
        "#eebefa", // grape
        "#d0bfff", // violet
        "#a5d8ff", // blue
        "#99e9f2", // cyan
        "#96f2d7", // teal
        "#b2f2bb", // green
        "#ffec99", // yellow
        "#ffd8a8", // orange
        "#eaddd0", // bronze
    ]
    .iter()
    .map(|color| color.to_string())
    .collect()
});

/// Source of uniform random indices.
///
/// Injected into the engine so that production renders vary while tests
/// stay deterministic; the color selection itself is a pure function of
/// the offset this produces.
pub trait RandomSource {
    /// A uniform index in `0..bound` (`bound` is at least 1)
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Production random source backed by the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Test double that always returns the same index (clamped to the bound)
#[derive(Clone, Copy, Debug)]
pub struct FixedRandomSource(pub usize);

impl RandomSource for FixedRandomSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.min(bound.saturating_sub(1))
    }
}

/// Distance between two palette indices on a ring that wraps at
/// `palette_size`
fn circular_distance(first: usize, second: usize, palette_size: usize) -> usize {
    let absolute = first.abs_diff(second);
    absolute.min(palette_size - absolute)
}

/// Starting palette index for a render.
///
/// A finite numeric seed folds its decimal representation into a hash so
/// equal seeds always map to the same index; without a seed one uniform
/// index is drawn from `random`.
pub fn color_offset(
    palette_size: usize,
    color_seed: Option<f64>,
    random: &mut dyn RandomSource,
) -> usize {
    if palette_size == 0 {
        return 0;
    }

    match color_seed {
        Some(seed) if seed.is_finite() => {
            let mut hash: i32 = 0;
            for byte in seed.to_string().bytes() {
                hash = hash.wrapping_mul(31).wrapping_add(byte as i32);
            }
            hash.unsigned_abs() as usize % palette_size
        }
        _ => random.next_index(palette_size),
    }
}

/// Pick `count` colors from `palette`, starting at `offset`.
///
/// Greedy max-min selection: starting from the offset index, repeatedly
/// add the unused index whose minimum circular distance to the chosen set
/// is largest, breaking ties by the larger average distance. Once
/// `min(count, palette len)` indices are chosen, colors repeat cyclically.
/// This is an approximation of optimal spread, which is fine at palette
/// sizes this small.
pub fn series_colors(palette: &[String], count: usize, offset: usize) -> Vec<String> {
    if count == 0 || palette.is_empty() {
        return Vec::new();
    }

    let palette_size = palette.len();
    let start_index = offset % palette_size;
    let mut selected = vec![start_index];
    let max_unique = count.min(palette_size);
    let mut available: Vec<usize> = (0..palette_size).filter(|&i| i != start_index).collect();

    while selected.len() < max_unique {
        let mut best: Option<(usize, usize, f64)> = None;
        for (position, &candidate) in available.iter().enumerate() {
            let distances: Vec<usize> = selected
                .iter()
                .map(|&chosen| circular_distance(candidate, chosen, palette_size))
                .collect();
            let min_distance = *distances.iter().min().unwrap_or(&0);
            let average_distance =
                distances.iter().sum::<usize>() as f64 / distances.len() as f64;

            let improves = match best {
                None => true,
                Some((_, best_min, best_average)) => {
                    min_distance > best_min
                        || (min_distance == best_min && average_distance > best_average)
                }
            };
            if improves {
                best = Some((position, min_distance, average_distance));
            }
        }

        // `available` is non-empty while selected < max_unique <= palette.
        let (position, _, _) = best.unwrap_or((0, 0, 0.0));
        selected.push(available.remove(position));
    }

    (0..count)
        .map(|index| palette[selected[index % selected.len()]].clone())
        .collect()
}

//! Color distribution tests: seeded determinism and palette spread.

use chartboard::color::{color_offset, series_colors};
use chartboard::{FixedRandomSource, DEFAULT_PALETTE};

use crate::helpers::{min_circular_distance, palette_indices};

#[test]
fn seeded_offsets_are_reproducible() {
    let mut random = FixedRandomSource(0);
    let palette_size = DEFAULT_PALETTE.len();

    let first = color_offset(palette_size, Some(0.125), &mut random);
    let second = color_offset(palette_size, Some(0.125), &mut random);
    assert_eq!(first, second);

    let other = color_offset(palette_size, Some(0.875), &mut random);
    assert_ne!(first, other);
}

#[test]
fn unseeded_offset_comes_from_the_random_source() {
    let mut random = FixedRandomSource(3);
    assert_eq!(color_offset(DEFAULT_PALETTE.len(), None, &mut random), 3);
    // Non-finite seeds behave like no seed at all.
    assert_eq!(
        color_offset(DEFAULT_PALETTE.len(), Some(f64::INFINITY), &mut random),
        3
    );
}

#[test]
fn default_palette_spread_avoids_adjacent_hues() {
    for offset in 0..DEFAULT_PALETTE.len() {
        let colors = series_colors(&DEFAULT_PALETTE, 4, offset);
        let color_refs: Vec<&str> = colors.iter().map(String::as_str).collect();
        let indices = palette_indices(&DEFAULT_PALETTE, &color_refs);
        assert!(
            min_circular_distance(&indices, DEFAULT_PALETTE.len()) > 1,
            "offset {offset} picked adjacent palette entries: {indices:?}"
        );
    }
}

#[test]
fn color_count_matches_request_even_past_palette_size() {
    let colors = series_colors(&DEFAULT_PALETTE, DEFAULT_PALETTE.len() + 4, 2);
    assert_eq!(colors.len(), DEFAULT_PALETTE.len() + 4);
    // Reuse cycles through the chosen set.
    assert_eq!(colors[0], colors[DEFAULT_PALETTE.len()]);
}

//! Fitting labels into width budgets.
//!
//! Three escalating strategies: render as-is when the text fits, wrap at
//! whitespace when every word fits on some line, else trim trailing
//! characters and append `"..."`. Rotated x-axis labels add a second search
//! dimension over candidate wrap widths, ranked to keep as much readable
//! text as possible.

use crate::constants::{
    CARTESIAN_LABEL_MIN_WIDTH, CARTESIAN_LABEL_OVERFLOW_PREFERENCE_BUFFER,
    CARTESIAN_LABEL_ROTATION, CARTESIAN_LABEL_WIDTH_STEP,
};
use crate::element::FontSpec;
use crate::text::{TextMetrics, TextMeasurer};

/// A label after width fitting
#[derive(Clone, Debug, PartialEq)]
pub struct FittedText {
    pub text: String,
    /// True when the text was wrapped (and the caller should keep the
    /// original for downstream consumers)
    pub wrapped: bool,
}

/// Whether a fitted label was ellipsified
pub fn is_ellipsified(text: &str) -> bool {
    text.contains("...")
}

/// Trim trailing characters and append `"..."` until the result fits
/// `max_width`, keeping at least one leading character.
pub fn ellipsify_to_width(
    text: &str,
    max_width: f64,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> String {
    if measurer.measure(text, font).width <= max_width {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut end = chars.len();
    while end > 1 {
        let mut candidate: String = chars[..end].iter().collect();
        candidate.push_str("...");
        if measurer.measure(&candidate, font).width <= max_width {
            return candidate;
        }
        end -= 1;
    }

    match chars.first() {
        Some(first) => format!("{first}..."),
        None => text.to_string(),
    }
}

/// Fit `text` into `max_width`: unchanged if it fits, wrapped when it has
/// multiple words that each fit and the budget allows at least one glyph
/// per line, ellipsified otherwise.
pub fn wrap_or_ellipsify_to_width(
    text: &str,
    max_width: f64,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> FittedText {
    if measurer.measure(text, font).width <= max_width {
        return FittedText {
            text: text.to_string(),
            wrapped: false,
        };
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > 1 {
        let has_long_word = words
            .iter()
            .any(|word| measurer.measure(word, font).width > max_width);
        if !has_long_word && max_width >= measurer.min_line_width(font) {
            return FittedText {
                text: measurer.wrap(text, font, max_width),
                wrapped: true,
            };
        }
    }

    FittedText {
        text: ellipsify_to_width(text, max_width, font, measurer),
        wrapped: false,
    }
}

/// Axis-aligned bounding box of a `width` x `height` box rotated by
/// `angle` radians
pub fn rotated_bounding_box(width: f64, height: f64, angle: f64) -> (f64, f64) {
    let cos = angle.cos().abs();
    let sin = angle.sin().abs();
    (width * cos + height * sin, width * sin + height * cos)
}

/// A rotated axis label candidate selected by [`fit_axis_label`]
#[derive(Clone, Debug)]
pub struct AxisLabelFit {
    pub text: String,
    pub wrapped: bool,
    pub metrics: TextMetrics,
    /// Bounding box of the label at the axis rotation angle
    pub rotated_width: f64,
    pub rotated_height: f64,
}

struct LabelRank {
    ellipsified: bool,
    visible_chars: usize,
    line_count: usize,
}

fn rank(fit: &AxisLabelFit) -> LabelRank {
    let visible: usize = fit
        .text
        .replace("...", "")
        .chars()
        .filter(|&c| c != '\n')
        .count();
    LabelRank {
        ellipsified: is_ellipsified(&fit.text),
        visible_chars: visible,
        line_count: fit.text.split('\n').count(),
    }
}

/// Strict preference between two candidates: non-ellipsified beats
/// ellipsified, then more visible characters, then fewer lines, then the
/// smaller rotated height.
fn prefers(candidate: &AxisLabelFit, current: &AxisLabelFit) -> bool {
    let candidate_rank = rank(candidate);
    let current_rank = rank(current);
    if candidate_rank.ellipsified != current_rank.ellipsified {
        return !candidate_rank.ellipsified;
    }
    if candidate_rank.visible_chars != current_rank.visible_chars {
        return candidate_rank.visible_chars > current_rank.visible_chars;
    }
    if candidate_rank.line_count != current_rank.line_count {
        return candidate_rank.line_count < current_rank.line_count;
    }
    candidate.rotated_height < current.rotated_height
}

/// Fit a rotated x-axis label.
///
/// Tries candidate wrap widths from `max_label_width` down to the minimum
/// sensible width in fixed decrements, measuring the rotated bounding box
/// of each fitted text against `max_rotated_width`. Returns the
/// best-ranked candidate that does not overflow; when none fits, the
/// least-overflowing one, preferring a non-ellipsified result whose
/// overflow is within a fixed buffer of the best overall.
pub fn fit_axis_label(
    label: &str,
    max_label_width: f64,
    max_rotated_width: f64,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> AxisLabelFit {
    let min_width = CARTESIAN_LABEL_MIN_WIDTH.max(measurer.min_line_width(font).ceil()) as i64;
    let max_width = min_width.max(max_label_width.floor() as i64);
    let step = CARTESIAN_LABEL_WIDTH_STEP as i64;

    let mut candidate_widths: Vec<i64> = (min_width..=max_width).rev().step_by(step as usize).collect();
    if candidate_widths.last() != Some(&min_width) {
        candidate_widths.push(min_width);
    }

    let mut best_fit: Option<AxisLabelFit> = None;
    let mut best_overflow_any: Option<(f64, AxisLabelFit)> = None;
    let mut best_overflow_plain: Option<(f64, AxisLabelFit)> = None;

    fn improves(best: &Option<(f64, AxisLabelFit)>, overflow: f64, candidate: &AxisLabelFit) -> bool {
        match best {
            None => true,
            Some((best_overflow, best)) => {
                overflow < *best_overflow
                    || (overflow == *best_overflow && prefers(candidate, best))
            }
        }
    }

    for width in candidate_widths {
        let fitted = wrap_or_ellipsify_to_width(label, width as f64, font, measurer);
        let metrics = measurer.measure(&fitted.text, font);
        let (rotated_width, rotated_height) =
            rotated_bounding_box(metrics.width, metrics.height, CARTESIAN_LABEL_ROTATION);
        let candidate = AxisLabelFit {
            text: fitted.text,
            wrapped: fitted.wrapped,
            metrics,
            rotated_width,
            rotated_height,
        };

        let overflow = rotated_width - max_rotated_width;
        if overflow <= 0.0 {
            if best_fit.as_ref().is_none_or(|best| prefers(&candidate, best)) {
                best_fit = Some(candidate);
            }
            continue;
        }

        if improves(&best_overflow_any, overflow, &candidate) {
            best_overflow_any = Some((overflow, candidate.clone()));
        }
        if !is_ellipsified(&candidate.text) && improves(&best_overflow_plain, overflow, &candidate)
        {
            best_overflow_plain = Some((overflow, candidate));
        }
    }

    if let Some(best) = best_fit {
        return best;
    }

    match (best_overflow_plain, best_overflow_any) {
        (Some((plain_overflow, plain)), Some((any_overflow, _)))
            if plain_overflow <= any_overflow + CARTESIAN_LABEL_OVERFLOW_PREFERENCE_BUFFER =>
        {
            plain
        }
        (_, Some((_, any))) => any,
        // The candidate list is never empty, so an overflow entry exists
        // whenever no candidate fit outright.
        _ => unreachable!("label fitting produced no candidates"),
    }
}

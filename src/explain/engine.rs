//! Rationale generation from classifier contributions.

use std::cmp::Ordering;

use crate::model::{Contribution, ScoreTerm};

/// Number of top-ranked features rendered as rationale lines.
pub const RATIONALE_LINES: usize = 3;

/// Ranks feature contributions by absolute magnitude and phrases the
/// top [`RATIONALE_LINES`] as evidentiary sentences.
///
/// The bias term carries no feature semantics and is excluded from
/// ranking. The sort is stable, so equal magnitudes keep canonical
/// feature order and the output is identical across repeated calls on
/// the same input. Returns a fully materialized list, never a stream.
pub fn explain(contributions: &[Contribution], probability: f64) -> Vec<String> {
    let mut ranked: Vec<&Contribution> = contributions
        .iter()
        .filter(|c| !matches!(c.feature, ScoreTerm::Bias))
        .collect();

    ranked.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(Ordering::Equal)
    });

    ranked
        .iter()
        .take(RATIONALE_LINES)
        .map(|c| phrase(c, probability))
        .collect()
}

/// One sentence: feature name, raw value, evidentiary direction.
/// Positive contribution reads as CT evidence, negative as MRI.
fn phrase(c: &Contribution, probability: f64) -> String {
    let display = match c.feature {
        ScoreTerm::Feature(f) => f.display_name(),
        ScoreTerm::Bias => "bias",
    };
    let side = if c.contribution >= 0.0 { "CT" } else { "MRI" };
    let agrees = (c.contribution >= 0.0) == (probability >= 0.5);
    let verb = if agrees { "supports" } else { "points toward" };
    format!(
        "{} of {:.3} {} {} (effect {:+.3})",
        capitalize(display),
        c.value,
        verb,
        side,
        c.contribution
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Feature;

    fn term(feature: Feature, value: f64, contribution: f64) -> Contribution {
        Contribution {
            feature: ScoreTerm::Feature(feature),
            value,
            contribution,
        }
    }

    fn bias(contribution: f64) -> Contribution {
        Contribution {
            feature: ScoreTerm::Bias,
            value: 0.0,
            contribution,
        }
    }

    #[test]
    fn test_ranks_by_absolute_magnitude() {
        let contributions = vec![
            bias(-1.1),
            term(Feature::MeanBrightness, 0.4, -0.36),
            term(Feature::ContrastVariance, 0.2, 1.12),
            term(Feature::EdgeDensity, 0.9, 2.79),
            term(Feature::Entropy, 0.8, -1.76),
        ];
        let rationale = explain(&contributions, 0.7);

        assert_eq!(rationale.len(), RATIONALE_LINES);
        assert!(rationale[0].starts_with("Edge density"));
        assert!(rationale[1].starts_with("Intensity entropy"));
        assert!(rationale[2].starts_with("Contrast variance"));
    }

    #[test]
    fn test_bias_never_appears() {
        let contributions = vec![bias(100.0), term(Feature::Skewness, 1.5, 1.05)];
        let rationale = explain(&contributions, 0.9);
        assert_eq!(rationale.len(), 1);
        assert!(rationale[0].starts_with("Intensity skewness"));
    }

    #[test]
    fn test_direction_wording() {
        let contributions = vec![
            term(Feature::EdgeDensity, 0.9, 2.79),
            term(Feature::Entropy, 0.8, -1.76),
        ];
        let rationale = explain(&contributions, 0.7);
        assert!(rationale[0].contains("supports CT"));
        assert!(rationale[1].contains("points toward MRI"));
    }

    #[test]
    fn test_raw_value_is_included() {
        let contributions = vec![term(Feature::MeanBrightness, 0.512, -0.461)];
        let rationale = explain(&contributions, 0.3);
        assert!(rationale[0].contains("0.512"));
    }

    #[test]
    fn test_equal_magnitudes_keep_canonical_order() {
        let contributions = vec![
            term(Feature::MeanBrightness, 0.5, 0.5),
            term(Feature::ContrastVariance, 0.5, -0.5),
            term(Feature::EdgeDensity, 0.5, 0.5),
        ];
        let rationale = explain(&contributions, 0.6);
        assert!(rationale[0].starts_with("Mean brightness"));
        assert!(rationale[1].starts_with("Contrast variance"));
        assert!(rationale[2].starts_with("Edge density"));
    }

    #[test]
    fn test_output_is_stable_across_calls() {
        let contributions = vec![
            bias(-1.1),
            term(Feature::MeanBrightness, 0.4, -0.36),
            term(Feature::HighFrequencyEnergy, 0.6, 1.44),
            term(Feature::Skewness, 2.1, 1.47),
        ];
        let first = explain(&contributions, 0.62);
        for _ in 0..10 {
            assert_eq!(explain(&contributions, 0.62), first);
        }
    }
}

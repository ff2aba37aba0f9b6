//! Linear scoring over the feature vector.
//!
//! Every probability comes with its full additive breakdown so the
//! explanation layer can rank evidence without re-deriving it: the sum
//! of all contribution terms (bias included) is exactly the pre-sigmoid
//! linear score.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::weights::ClassifierModel;
use crate::error::AnalysisError;
use crate::features::{Feature, FeatureVector};

/// One additive term of the linear score: the bias intercept or a
/// weighted feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTerm {
    Bias,
    Feature(Feature),
}

impl ScoreTerm {
    /// Wire name; the presentation layer filters contribution rows on
    /// the literal `"bias"`.
    pub fn name(self) -> &'static str {
        match self {
            ScoreTerm::Bias => "bias",
            ScoreTerm::Feature(f) => f.name(),
        }
    }
}

impl Serialize for ScoreTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ScoreTerm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == "bias" {
            return Ok(ScoreTerm::Bias);
        }
        Feature::from_name(&name)
            .map(ScoreTerm::Feature)
            .ok_or_else(|| de::Error::custom(format!("unknown score term: {name}")))
    }
}

/// A feature's signed share of the pre-sigmoid linear score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: ScoreTerm,
    /// Raw descriptor value; 0 for the bias pseudo-feature.
    pub value: f64,
    /// weight * value, or the bias constant itself.
    pub contribution: f64,
}

/// Classifier output: CT-class probability plus the additive breakdown,
/// bias first then the six features in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub probability: f64,
    pub linear_score: f64,
    pub contributions: Vec<Contribution>,
}

/// Scores against the process-wide model.
pub fn score(features: &FeatureVector) -> Result<Prediction, AnalysisError> {
    Ok(score_with(super::current()?, features))
}

/// Scores against an explicit model. Pure and deterministic; no
/// integer truncation anywhere in the pipeline.
pub fn score_with(model: &ClassifierModel, features: &FeatureVector) -> Prediction {
    let mut contributions = Vec::with_capacity(1 + Feature::ALL.len());
    contributions.push(Contribution {
        feature: ScoreTerm::Bias,
        value: 0.0,
        contribution: model.bias,
    });

    let mut linear_score = model.bias;
    for (feature, value) in features.iter() {
        let term = model.weight(feature) * value;
        linear_score += term;
        contributions.push(Contribution {
            feature: ScoreTerm::Feature(feature),
            value,
            contribution: term,
        });
    }

    Prediction {
        probability: logistic(linear_score),
        linear_score,
        contributions,
    }
}

/// Numerically stable logistic function: branches on sign so the
/// exponential never overflows for large |x|.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

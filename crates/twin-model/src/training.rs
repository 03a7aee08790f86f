//! Offline training pipeline: dataset loading, split, and fit.
//!
//! # Pipeline
//!
//! 1. Load labeled rows from the generated CSV (only the four contract
//!    features and the label are read; extra columns such as `timestamp`
//!    are ignored).
//! 2. Seeded shuffle, then an 80/20 train/test split.
//! 3. Standardize features with train-split statistics.
//! 4. Full-batch gradient descent on the class-weight-balanced logistic
//!    loss.  Balancing matters because irrigation hours are a small
//!    minority of the series.
//! 5. Evaluate on the held-out split and return the artifact.
//!
//! The same seed always produces the identical artifact — the framework
//! rule that determinism comes from explicit seeds, never ambient entropy.

use std::io::Read;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;

use twin_core::{FeatureVector, Hour, IrrigationDecision};

use crate::{LinearModel, ModelError, ModelResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DatasetRecord {
    hour_of_day: u8,
    temperature: f64,
    soil_moisture: f64,
    irrigation_decision: u8,
    moisture_change_last_hour: f64,
}

// ── Public types ──────────────────────────────────────────────────────────────

/// One labeled training example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledExample {
    pub features: FeatureVector,
    pub label: IrrigationDecision,
}

/// Hyperparameters for [`fit`].
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    /// Gradient-descent step size on the mean gradient.
    pub learning_rate: f64,
    /// Number of full-batch passes over the training split.
    pub epochs: usize,
    /// Fraction of examples held out for evaluation, in `(0, 1)`.
    pub test_fraction: f64,
    /// Seed for the shuffle split.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            epochs: 500,
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Held-out metrics reported by [`fit`].
///
/// Precision and recall are for the irrigate class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub train_size: usize,
    pub test_size: usize,
}

// ── Dataset loading ───────────────────────────────────────────────────────────

/// Load labeled examples from a dataset CSV file.
pub fn load_examples(path: &Path) -> ModelResult<Vec<LabeledExample>> {
    let file = std::fs::File::open(path)?;
    load_examples_reader(file)
}

/// Like [`load_examples`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_examples_reader<R: Read>(reader: R) -> ModelResult<Vec<LabeledExample>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut examples = Vec::new();

    for result in csv_reader.deserialize::<DatasetRecord>() {
        let row = result.map_err(|e| ModelError::Parse(e.to_string()))?;
        let hour = Hour::try_from(row.hour_of_day)?;
        examples.push(LabeledExample {
            features: FeatureVector {
                hour: f64::from(hour.value()),
                temperature: row.temperature,
                soil_moisture: row.soil_moisture,
                moisture_change_last_hour: row.moisture_change_last_hour,
            },
            label: IrrigationDecision::from_label(row.irrigation_decision),
        });
    }

    Ok(examples)
}

// ── Fit ───────────────────────────────────────────────────────────────────────

/// Fit a [`LinearModel`] by balanced logistic regression and evaluate it on
/// the held-out split.
pub fn fit(
    examples: &[LabeledExample],
    opts: &TrainOptions,
) -> ModelResult<(LinearModel, Evaluation)> {
    if examples.len() < 10 {
        return Err(ModelError::Training(format!(
            "need at least 10 examples, got {}",
            examples.len()
        )));
    }
    if !(0.0..1.0).contains(&opts.test_fraction) || opts.test_fraction == 0.0 {
        return Err(ModelError::Training(format!(
            "test_fraction must be in (0, 1), got {}",
            opts.test_fraction
        )));
    }

    // ── Shuffle and split ─────────────────────────────────────────────────
    let mut indices: Vec<usize> = (0..examples.len()).collect();
    let mut rng = StdRng::seed_from_u64(opts.seed);
    indices.shuffle(&mut rng);

    let test_len = ((examples.len() as f64 * opts.test_fraction).round() as usize)
        .clamp(1, examples.len() - 1);
    let (test_idx, train_idx) = indices.split_at(test_len);

    let positives = train_idx
        .iter()
        .filter(|&&i| examples[i].label.is_on())
        .count();
    let negatives = train_idx.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(ModelError::Training(
            "training split contains a single class".into(),
        ));
    }

    // ── Standardization statistics from the train split ───────────────────
    let (means, stds) = feature_stats(examples, train_idx);
    let standardized: Vec<[f64; FeatureVector::LEN]> = examples
        .iter()
        .map(|ex| {
            let x = ex.features.to_array();
            std::array::from_fn(|j| (x[j] - means[j]) / stds[j])
        })
        .collect();

    // Balanced class weights: each class contributes half the total loss.
    let n_train = train_idx.len() as f64;
    let weight_pos = n_train / (2.0 * positives as f64);
    let weight_neg = n_train / (2.0 * negatives as f64);

    // ── Full-batch gradient descent on the logistic loss ──────────────────
    let mut weights = [0.0; FeatureVector::LEN];
    let mut bias = 0.0;

    for _ in 0..opts.epochs {
        let mut grad_w = [0.0; FeatureVector::LEN];
        let mut grad_b = 0.0;

        for &i in train_idx {
            let x = &standardized[i];
            let y = f64::from(examples[i].label.label());
            let class_weight = if examples[i].label.is_on() { weight_pos } else { weight_neg };

            let mut z = bias;
            for j in 0..FeatureVector::LEN {
                z += weights[j] * x[j];
            }
            let err = (sigmoid(z) - y) * class_weight;

            for j in 0..FeatureVector::LEN {
                grad_w[j] += err * x[j];
            }
            grad_b += err;
        }

        for j in 0..FeatureVector::LEN {
            weights[j] -= opts.learning_rate * grad_w[j] / n_train;
        }
        bias -= opts.learning_rate * grad_b / n_train;
    }

    let model = LinearModel { means, stds, weights, bias };
    let eval = evaluate(&model, examples, test_idx, train_idx.len());
    Ok((model, eval))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn feature_stats(
    examples: &[LabeledExample],
    train_idx: &[usize],
) -> ([f64; FeatureVector::LEN], [f64; FeatureVector::LEN]) {
    let n = train_idx.len() as f64;
    let mut means = [0.0; FeatureVector::LEN];
    for &i in train_idx {
        let x = examples[i].features.to_array();
        for j in 0..FeatureVector::LEN {
            means[j] += x[j];
        }
    }
    for m in &mut means {
        *m /= n;
    }

    let mut vars = [0.0; FeatureVector::LEN];
    for &i in train_idx {
        let x = examples[i].features.to_array();
        for j in 0..FeatureVector::LEN {
            let d = x[j] - means[j];
            vars[j] += d * d;
        }
    }
    let stds = std::array::from_fn(|j| {
        let s = (vars[j] / n).sqrt();
        // Constant features carry no signal; std 1.0 keeps them harmless.
        if s < 1e-12 { 1.0 } else { s }
    });

    (means, stds)
}

fn evaluate(
    model: &LinearModel,
    examples: &[LabeledExample],
    test_idx: &[usize],
    train_size: usize,
) -> Evaluation {
    let mut correct = 0usize;
    let mut true_pos = 0usize;
    let mut pred_pos = 0usize;
    let mut actual_pos = 0usize;

    for &i in test_idx {
        let predicted = model.decision_value(&examples[i].features) >= 0.0;
        let actual = examples[i].label.is_on();
        if predicted == actual {
            correct += 1;
        }
        if predicted {
            pred_pos += 1;
            if actual {
                true_pos += 1;
            }
        }
        if actual {
            actual_pos += 1;
        }
    }

    let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };
    Evaluation {
        accuracy: ratio(correct, test_idx.len()),
        precision: ratio(true_pos, pred_pos),
        recall: ratio(true_pos, actual_pos),
        train_size,
        test_size: test_idx.len(),
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

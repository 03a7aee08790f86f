//! `twin-model` — irrigation predictors for the soil-moisture digital twin.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`predictor`] | `Predictor` trait — the engine's extension point               |
//! | [`threshold`] | `ThresholdPredictor` — the fixed ground-truth rule             |
//! | [`linear`]    | `LinearModel` — trainable classifier with a JSON artifact      |
//! | [`training`]  | Dataset loading, train/test split, logistic-regression fit     |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                                 |
//!
//! # Design notes
//!
//! The engine only ever sees `dyn Predictor`: a pure function from the fixed
//! 4-feature vector to a binary decision.  The threshold rule generates the
//! ground truth the trainable model learns from; at runtime the trained
//! artifact replaces the rule, closing the loop.

pub mod error;
pub mod linear;
pub mod predictor;
pub mod threshold;
pub mod training;


pub use error::{ModelError, ModelResult};
pub use linear::LinearModel;
pub use predictor::Predictor;
pub use threshold::ThresholdPredictor;
pub use training::{
    fit, load_examples, load_examples_reader, Evaluation, LabeledExample, TrainOptions,
};

//! `twin-dataset` — ground-truth training data for the irrigation predictor.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`row`]       | `DatasetRow` — one labeled hour of the series       |
//! | [`generator`] | `GeneratorConfig`, `generate`                       |
//! | [`csv`]       | `DatasetCsvWriter`                                  |
//! | [`error`]     | `DatasetError`, `DatasetResult<T>`                  |
//!
//! # Design notes
//!
//! The generator runs the *same* plot physics as the online engine
//! (`twin_engine::state`), with the fixed threshold rule as the decision
//! source instead of a learned predictor.  Each row records the state
//! *before* the hourly update, so low moisture is associated with the
//! decision to irrigate — the association the trained model must learn.

pub mod csv;
pub mod error;
pub mod generator;
pub mod row;


pub use csv::{write_dataset, DatasetCsvWriter};
pub use error::{DatasetError, DatasetResult};
pub use generator::{generate, GeneratorConfig};
pub use row::DatasetRow;

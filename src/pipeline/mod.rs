//! Training and evaluation pipeline
//!
//! Composable match runner: serial games between two [`crate::players::Player`]
//! implementations, with observers for progress reporting and a JSON-exportable
//! result summary.

pub mod observers;
pub mod training;

pub use observers::{Observer, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

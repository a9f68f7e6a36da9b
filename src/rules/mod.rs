//! Deterministic training-adjustment rules: the request/response model and
//! the pure evaluator that maps one to the other.

mod engine;
mod model;

pub use engine::adjust;
pub use model::{
    CyclePhase, Difficulty, TrainingAdjustmentRequest, TrainingAdjustmentResponse, ValidationError,
};

use serde::{Deserialize, Serialize};

/// Stage of the physiological training cycle used as a rule-selection key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Follicular,
    Ovulatory,
    Luteal,
    Menstrual,
}

/// Perceived difficulty reported for the most recent workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    TooEasy,
    JustRight,
    TooHard,
}

/// Validation errors raised when a request field falls outside its domain.
///
/// Enum variants that the wire format enumerates (`cycle_phase`,
/// `in_workout_difficulty`) are already enforced during deserialization;
/// these cover the numeric bounds the type system cannot express.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("energy_level must be between 1 and 5, found {found}")]
    EnergyLevelOutOfRange { found: i32 },
    #[error("last_workout_success must be between 0.0 and 1.0, found {found}")]
    WorkoutSuccessOutOfRange { found: f64 },
}

/// Snapshot of a lifter's state for a single adjustment decision.
///
/// Immutable once constructed; lives only for the duration of one
/// evaluation call and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAdjustmentRequest {
    pub cycle_phase: CyclePhase,
    /// Self-reported energy, 1 (exhausted) to 5 (fresh).
    pub energy_level: i32,
    /// Ratio of prescribed work completed last session, 0.0 to 1.0.
    pub last_workout_success: f64,
    pub in_workout_difficulty: Difficulty,
}

impl TrainingAdjustmentRequest {
    /// Checks the numeric bounds. All-or-nothing: the first violated
    /// constraint is reported and nothing downstream runs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.energy_level) {
            return Err(ValidationError::EnergyLevelOutOfRange {
                found: self.energy_level,
            });
        }
        if !(0.0..=1.0).contains(&self.last_workout_success) {
            return Err(ValidationError::WorkoutSuccessOutOfRange {
                found: self.last_workout_success,
            });
        }
        Ok(())
    }
}

/// Adjustment recommendation returned to the client.
///
/// Field names, the two-decimal `load_delta_pct` precision, and the fixed
/// `rep_target` string are part of the wire contract consumed by the mobile
/// client; `substitution` is serialized as an explicit null until exercise
/// substitution logic lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAdjustmentResponse {
    pub load_delta_pct: f64,
    pub set_delta: i32,
    pub rep_target: String,
    pub rest_seconds: u32,
    pub deload: bool,
    pub substitution: Option<String>,
    pub explanation: String,
}

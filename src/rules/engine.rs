use super::model::{CyclePhase, Difficulty, TrainingAdjustmentRequest, TrainingAdjustmentResponse};

const REP_TARGET: &str = "5-8";
const BASELINE_EXPLANATION: &str = "Baseline adjustment.";

/// Computes an adjustment recommendation from a validated request.
///
/// Rules run in a fixed order and accumulate into local state, so the same
/// input always produces the same response. The evaluator cannot fail and
/// performs no I/O; callers are responsible for running
/// [`TrainingAdjustmentRequest::validate`] first.
pub fn adjust(request: &TrainingAdjustmentRequest) -> TrainingAdjustmentResponse {
    let mut load_delta = 0.0_f64;
    let mut set_delta = 0_i32;
    let mut deload = false;
    let mut explanation_bits: Vec<&str> = Vec::new();

    // Phase-based rest default.
    let rest_seconds = match request.cycle_phase {
        CyclePhase::Luteal | CyclePhase::Menstrual => {
            explanation_bits.push("Later-phase default: slightly more rest.");
            150
        }
        CyclePhase::Follicular | CyclePhase::Ovulatory => 120,
    };

    // Energy.
    if request.energy_level <= 2 {
        load_delta -= 5.0;
        set_delta -= 1;
        explanation_bits.push("Low energy: reduce load and volume.");
    } else if request.energy_level >= 4 {
        load_delta += 2.5;
        explanation_bits.push("High energy: small load increase.");
    }

    // Last session performance.
    if request.last_workout_success < 0.7 {
        load_delta -= 2.5;
        explanation_bits.push("Last session struggled: back off slightly.");
    }

    // In-workout difficulty. The set reduction clamps any prior positive
    // delta to zero before subtracting, so it always removes at least one set.
    match request.in_workout_difficulty {
        Difficulty::TooHard => {
            load_delta -= 2.5;
            set_delta = set_delta.min(0) - 1;
            explanation_bits.push("Felt too hard: reduce load/sets.");
        }
        Difficulty::TooEasy => {
            load_delta += 2.5;
            explanation_bits.push("Felt too easy: nudge load up.");
        }
        Difficulty::JustRight => {}
    }

    // Deload trigger, evaluated on top of the energy and performance rules.
    if request.energy_level <= 2 && request.last_workout_success < 0.7 {
        deload = true;
        explanation_bits.push("Low energy + poor performance: suggest deload.");
    }

    let explanation = if explanation_bits.is_empty() {
        BASELINE_EXPLANATION.to_string()
    } else {
        explanation_bits.join(" ")
    };

    TrainingAdjustmentResponse {
        load_delta_pct: round_to_cents(load_delta),
        set_delta,
        rep_target: REP_TARGET.to_string(),
        rest_seconds,
        deload,
        substitution: None,
        explanation,
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        cycle_phase: CyclePhase,
        energy_level: i32,
        last_workout_success: f64,
        in_workout_difficulty: Difficulty,
    ) -> TrainingAdjustmentRequest {
        TrainingAdjustmentRequest {
            cycle_phase,
            energy_level,
            last_workout_success,
            in_workout_difficulty,
        }
    }

    #[test]
    fn baseline_when_no_rule_fires() {
        let response = adjust(&request(CyclePhase::Follicular, 3, 0.9, Difficulty::JustRight));

        assert_eq!(response.load_delta_pct, 0.0);
        assert_eq!(response.set_delta, 0);
        assert_eq!(response.rest_seconds, 120);
        assert!(!response.deload);
        assert_eq!(response.rep_target, "5-8");
        assert_eq!(response.substitution, None);
        assert_eq!(response.explanation, "Baseline adjustment.");
    }

    #[test]
    fn struggling_session_stacks_every_reduction() {
        let response = adjust(&request(CyclePhase::Menstrual, 2, 0.5, Difficulty::TooHard));

        assert_eq!(response.load_delta_pct, -10.0);
        assert_eq!(response.set_delta, -2);
        assert_eq!(response.rest_seconds, 150);
        assert!(response.deload);
        assert_eq!(
            response.explanation,
            "Later-phase default: slightly more rest. \
             Low energy: reduce load and volume. \
             Last session struggled: back off slightly. \
             Felt too hard: reduce load/sets. \
             Low energy + poor performance: suggest deload."
        );
    }

    #[test]
    fn strong_session_nudges_load_up() {
        let response = adjust(&request(CyclePhase::Ovulatory, 5, 1.0, Difficulty::TooEasy));

        assert_eq!(response.load_delta_pct, 5.0);
        assert_eq!(response.set_delta, 0);
        assert_eq!(response.rest_seconds, 120);
        assert!(!response.deload);
    }

    #[test]
    fn later_phases_extend_rest() {
        for phase in [CyclePhase::Luteal, CyclePhase::Menstrual] {
            let response = adjust(&request(phase, 3, 0.9, Difficulty::JustRight));
            assert_eq!(response.rest_seconds, 150);
            assert_eq!(
                response.explanation,
                "Later-phase default: slightly more rest."
            );
        }
        for phase in [CyclePhase::Follicular, CyclePhase::Ovulatory] {
            let response = adjust(&request(phase, 3, 0.9, Difficulty::JustRight));
            assert_eq!(response.rest_seconds, 120);
        }
    }

    #[test]
    fn too_hard_clamps_before_reducing_sets() {
        // No prior set change: min(0, 0) - 1.
        let alone = adjust(&request(CyclePhase::Follicular, 3, 0.9, Difficulty::TooHard));
        assert_eq!(alone.set_delta, -1);

        // Low energy already removed a set: min(-1, 0) - 1.
        let stacked = adjust(&request(CyclePhase::Follicular, 1, 0.9, Difficulty::TooHard));
        assert_eq!(stacked.set_delta, -2);
        assert_eq!(stacked.load_delta_pct, -7.5);
    }

    #[test]
    fn deload_requires_both_low_energy_and_poor_performance() {
        let low_energy_only = adjust(&request(CyclePhase::Follicular, 2, 0.9, Difficulty::JustRight));
        assert!(!low_energy_only.deload);

        let poor_performance_only =
            adjust(&request(CyclePhase::Follicular, 3, 0.5, Difficulty::JustRight));
        assert!(!poor_performance_only.deload);

        let both = adjust(&request(CyclePhase::Follicular, 2, 0.5, Difficulty::JustRight));
        assert!(both.deload);
        assert!(response_mentions_deload(&both));
    }

    #[test]
    fn deload_is_independent_of_phase_and_difficulty() {
        for phase in [
            CyclePhase::Follicular,
            CyclePhase::Ovulatory,
            CyclePhase::Luteal,
            CyclePhase::Menstrual,
        ] {
            for difficulty in [Difficulty::TooEasy, Difficulty::JustRight, Difficulty::TooHard] {
                let response = adjust(&request(phase, 1, 0.2, difficulty));
                assert!(response.deload);
            }
        }
    }

    #[test]
    fn energy_three_triggers_neither_energy_branch() {
        let response = adjust(&request(CyclePhase::Follicular, 3, 0.9, Difficulty::TooEasy));
        assert_eq!(response.load_delta_pct, 2.5);
        assert_eq!(response.set_delta, 0);
        assert_eq!(response.explanation, "Felt too easy: nudge load up.");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let input = request(CyclePhase::Luteal, 4, 0.65, Difficulty::TooEasy);
        let first = adjust(&input);
        let second = adjust(&input);
        assert_eq!(first, second);
        // +2.5 energy, -2.5 performance, +2.5 difficulty.
        assert_eq!(first.load_delta_pct, 2.5);
    }

    fn response_mentions_deload(response: &TrainingAdjustmentResponse) -> bool {
        response
            .explanation
            .contains("Low energy + poor performance: suggest deload.")
    }
}

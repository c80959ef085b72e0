//! Derived case-state classification.
//!
//! The case's lifecycle position is not stored anywhere: it is
//! reconstructed on every request by walking a priority-ordered table of
//! guarded states against the snapshot. A state joins the history when its
//! guard holds and every prerequisite state already made it in, so the
//! history is monotonic by construction; the last entry is the current
//! state.

use shared_types::{CaseData, EngineError, FlowStateName, StateFlow};

mod transitions;

use transitions::FLOW_STATES;

/// Classify a snapshot into its transition history and current state.
///
/// A snapshot that satisfies no guard is a hard error, never a default
/// state: it means the case record is malformed and needs investigation.
pub fn classify(case: &CaseData) -> Result<StateFlow, EngineError> {
    let mut history: Vec<FlowStateName> = Vec::new();

    for def in FLOW_STATES {
        if (def.guard)(case) && def.requires.iter().all(|r| history.contains(r)) {
            history.push(def.name);
        }
    }

    let Some(&current) = history.last() else {
        return Err(EngineError::unclassifiable_state(
            "No determinable flow state for the supplied case data",
        ));
    };

    tracing::debug!(current = %current, transitions = history.len(), "Case classified");
    Ok(StateFlow { current, history })
}

/// Whether the case has passed through `target` at any point, regardless
/// of whether it has since moved on. Used to gate notifications.
pub fn has_transitioned_to(case: &CaseData, target: FlowStateName) -> Result<bool, EngineError> {
    Ok(classify(case)?.has_transitioned_to(target))
}

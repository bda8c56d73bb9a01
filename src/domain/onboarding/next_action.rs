//! Deciding what the workflow does after a turn.

use serde::{Deserialize, Serialize};

use super::{is_step_complete, OnboardingStage};
use crate::domain::profile::ProfileSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    UpdateProfile,
    NextStep,
    ConfirmationRequired,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub step: OnboardingStage,
    pub message: String,
}

/// Signals from the turn that drive the decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnSignals {
    pub fields_updated: bool,
    pub next_step_requested: bool,
    pub confirmation_requested: bool,
}

/// First match wins: extracted fields, then a requested step change whose
/// predicate holds on `profile`, then a confirmation request.
pub fn decide_next_action(profile: &ProfileSnapshot, signals: TurnSignals) -> NextAction {
    let stage = profile.stage();

    if signals.fields_updated {
        return NextAction {
            action_type: ActionType::UpdateProfile,
            step: stage,
            message: "Updating profile with extracted information".to_string(),
        };
    }

    if signals.next_step_requested {
        if let Some(step) = stage.step() {
            if is_step_complete(profile, step) {
                return NextAction {
                    action_type: ActionType::NextStep,
                    step: OnboardingStage::after(step),
                    message: "Moving to next step".to_string(),
                };
            }
        }
    }

    if signals.confirmation_requested {
        return NextAction {
            action_type: ActionType::ConfirmationRequired,
            step: stage,
            message: "Waiting for user confirmation".to_string(),
        };
    }

    NextAction {
        action_type: ActionType::Continue,
        step: stage,
        message: "Continue with current step".to_string(),
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::case::CaseState;

/// A named node in the case lifecycle, inferred from the snapshot rather
/// than stored. Declaration order here is documentation only; evaluation
/// order lives in the classifier's transition table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStateName {
    Draft,
    ClaimSubmitted,
    ClaimIssuedPaymentFailed,
    ClaimIssuedPaymentSuccessful,
    PendingClaimIssued,
    ClaimIssued,
    ClaimNotified,
    ClaimDetailsNotified,
    ClaimDetailsNotifiedTimeExtension,
    NotificationAcknowledged,
    NotificationAcknowledgedTimeExtension,
    FullDefence,
    FullAdmission,
    PartAdmission,
    CounterClaim,
    FullDefenceProceed,
    FullDefenceNotProceed,
    InMediation,
    DefaultJudgment,
    InHearingReadiness,
    TrialReady,
    ClaimDismissedPastClaimNotificationDeadline,
    ClaimDismissedPastClaimDetailsNotificationDeadline,
    ClaimDismissedPastClaimDismissedDeadline,
    TakenOfflinePastApplicantResponseDeadline,
    TakenOfflineByStaff,
    ClaimDiscontinued,
    ClaimWithdrawn,
}

impl FlowStateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::ClaimSubmitted => "CLAIM_SUBMITTED",
            Self::ClaimIssuedPaymentFailed => "CLAIM_ISSUED_PAYMENT_FAILED",
            Self::ClaimIssuedPaymentSuccessful => "CLAIM_ISSUED_PAYMENT_SUCCESSFUL",
            Self::PendingClaimIssued => "PENDING_CLAIM_ISSUED",
            Self::ClaimIssued => "CLAIM_ISSUED",
            Self::ClaimNotified => "CLAIM_NOTIFIED",
            Self::ClaimDetailsNotified => "CLAIM_DETAILS_NOTIFIED",
            Self::ClaimDetailsNotifiedTimeExtension => "CLAIM_DETAILS_NOTIFIED_TIME_EXTENSION",
            Self::NotificationAcknowledged => "NOTIFICATION_ACKNOWLEDGED",
            Self::NotificationAcknowledgedTimeExtension => {
                "NOTIFICATION_ACKNOWLEDGED_TIME_EXTENSION"
            }
            Self::FullDefence => "FULL_DEFENCE",
            Self::FullAdmission => "FULL_ADMISSION",
            Self::PartAdmission => "PART_ADMISSION",
            Self::CounterClaim => "COUNTER_CLAIM",
            Self::FullDefenceProceed => "FULL_DEFENCE_PROCEED",
            Self::FullDefenceNotProceed => "FULL_DEFENCE_NOT_PROCEED",
            Self::InMediation => "IN_MEDIATION",
            Self::DefaultJudgment => "DEFAULT_JUDGMENT",
            Self::InHearingReadiness => "IN_HEARING_READINESS",
            Self::TrialReady => "TRIAL_READY",
            Self::ClaimDismissedPastClaimNotificationDeadline => {
                "CLAIM_DISMISSED_PAST_CLAIM_NOTIFICATION_DEADLINE"
            }
            Self::ClaimDismissedPastClaimDetailsNotificationDeadline => {
                "CLAIM_DISMISSED_PAST_CLAIM_DETAILS_NOTIFICATION_DEADLINE"
            }
            Self::ClaimDismissedPastClaimDismissedDeadline => {
                "CLAIM_DISMISSED_PAST_CLAIM_DISMISSED_DEADLINE"
            }
            Self::TakenOfflinePastApplicantResponseDeadline => {
                "TAKEN_OFFLINE_PAST_APPLICANT_RESPONSE_DEADLINE"
            }
            Self::TakenOfflineByStaff => "TAKEN_OFFLINE_BY_STAFF",
            Self::ClaimDiscontinued => "CLAIM_DISCONTINUED",
            Self::ClaimWithdrawn => "CLAIM_WITHDRAWN",
        }
    }

    /// The coarse state the management platform persists for a case whose
    /// lifecycle position is this flow state. `None` for pre-submission
    /// states the platform does not track.
    pub fn case_state(&self) -> Option<CaseState> {
        match self {
            Self::Draft => None,
            Self::ClaimSubmitted
            | Self::ClaimIssuedPaymentFailed
            | Self::ClaimIssuedPaymentSuccessful
            | Self::PendingClaimIssued => Some(CaseState::PendingCaseIssued),
            Self::ClaimIssued => Some(CaseState::CaseIssued),
            Self::ClaimNotified => Some(CaseState::AwaitingCaseDetailsNotification),
            Self::ClaimDetailsNotified
            | Self::ClaimDetailsNotifiedTimeExtension
            | Self::NotificationAcknowledged
            | Self::NotificationAcknowledgedTimeExtension => {
                Some(CaseState::AwaitingRespondentAcknowledgement)
            }
            Self::FullDefence | Self::FullAdmission | Self::PartAdmission => {
                Some(CaseState::AwaitingApplicantIntention)
            }
            Self::FullDefenceProceed | Self::InMediation => Some(CaseState::JudicialReferral),
            Self::InHearingReadiness | Self::TrialReady => Some(CaseState::CaseProgression),
            Self::CounterClaim
            | Self::DefaultJudgment
            | Self::TakenOfflinePastApplicantResponseDeadline
            | Self::TakenOfflineByStaff => Some(CaseState::ProceedsInHeritageSystem),
            Self::FullDefenceNotProceed
            | Self::ClaimDismissedPastClaimNotificationDeadline
            | Self::ClaimDismissedPastClaimDetailsNotificationDeadline
            | Self::ClaimDismissedPastClaimDismissedDeadline
            | Self::ClaimDiscontinued
            | Self::ClaimWithdrawn => Some(CaseState::CaseDismissed),
        }
    }
}

impl fmt::Display for FlowStateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classifier result for one snapshot: the transition history inferred
/// from the current field values, oldest first, and the single current
/// (terminal) state. Built only by the classifier, which guarantees the
/// history is non-empty and that `current` is its last entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateFlow {
    pub current: FlowStateName,
    pub history: Vec<FlowStateName>,
}

impl StateFlow {
    /// Whether the case has passed through `state` at any point, not just
    /// whether it is the current state.
    pub fn has_transitioned_to(&self, state: FlowStateName) -> bool {
        self.history.contains(&state)
    }
}

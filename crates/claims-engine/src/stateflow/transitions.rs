//! The ordered flow-state table and its guard predicates.
//!
//! Each entry is (name, prerequisite states, guard). Table order is
//! evaluation order and is significant: later guards may rely on earlier
//! ones having run (negative conditions such as "extension requested but
//! not yet acknowledged"), and terminal/offline states sit at the end so
//! that when they match they win the current-state slot.

use shared_types::{
    CaseData, CaseState, FlowStateName, PaymentStatus, RespondentResponseType, YesOrNo,
};

use FlowStateName::*;

pub(super) struct FlowStateDefinition {
    pub name: FlowStateName,
    pub requires: &'static [FlowStateName],
    pub guard: fn(&CaseData) -> bool,
}

pub(super) static FLOW_STATES: &[FlowStateDefinition] = &[
    FlowStateDefinition { name: Draft, requires: &[], guard: claim_drafted },
    FlowStateDefinition { name: ClaimSubmitted, requires: &[], guard: claim_submitted },
    FlowStateDefinition {
        name: ClaimIssuedPaymentFailed,
        requires: &[ClaimSubmitted],
        guard: payment_failed,
    },
    FlowStateDefinition {
        name: ClaimIssuedPaymentSuccessful,
        requires: &[ClaimSubmitted],
        guard: payment_successful,
    },
    FlowStateDefinition {
        name: PendingClaimIssued,
        requires: &[ClaimIssuedPaymentSuccessful],
        guard: pending_claim_issued,
    },
    FlowStateDefinition { name: ClaimIssued, requires: &[], guard: claim_issued },
    FlowStateDefinition { name: ClaimNotified, requires: &[ClaimIssued], guard: claim_notified },
    FlowStateDefinition {
        name: ClaimDetailsNotified,
        requires: &[ClaimNotified],
        guard: claim_details_notified,
    },
    FlowStateDefinition {
        name: ClaimDetailsNotifiedTimeExtension,
        requires: &[ClaimDetailsNotified],
        guard: time_extension_before_acknowledgement,
    },
    FlowStateDefinition {
        name: NotificationAcknowledged,
        requires: &[ClaimDetailsNotified],
        guard: notification_acknowledged,
    },
    FlowStateDefinition {
        name: NotificationAcknowledgedTimeExtension,
        requires: &[NotificationAcknowledged],
        guard: time_extension_after_acknowledgement,
    },
    FlowStateDefinition { name: FullDefence, requires: &[ClaimDetailsNotified], guard: full_defence },
    FlowStateDefinition {
        name: FullAdmission,
        requires: &[ClaimDetailsNotified],
        guard: full_admission,
    },
    FlowStateDefinition {
        name: PartAdmission,
        requires: &[ClaimDetailsNotified],
        guard: part_admission,
    },
    FlowStateDefinition {
        name: CounterClaim,
        requires: &[ClaimDetailsNotified],
        guard: counter_claim,
    },
    FlowStateDefinition {
        name: FullDefenceProceed,
        requires: &[FullDefence],
        guard: applicant_proceeds,
    },
    FlowStateDefinition {
        name: FullDefenceNotProceed,
        requires: &[FullDefence],
        guard: applicant_does_not_proceed,
    },
    FlowStateDefinition { name: InMediation, requires: &[FullDefenceProceed], guard: in_mediation },
    FlowStateDefinition {
        name: DefaultJudgment,
        requires: &[ClaimNotified],
        guard: default_judgment_entered,
    },
    FlowStateDefinition {
        name: InHearingReadiness,
        requires: &[FullDefenceProceed],
        guard: in_hearing_readiness,
    },
    FlowStateDefinition { name: TrialReady, requires: &[InHearingReadiness], guard: trial_ready },
    FlowStateDefinition {
        name: ClaimDismissedPastClaimNotificationDeadline,
        requires: &[ClaimIssued],
        guard: dismissed_before_notification,
    },
    FlowStateDefinition {
        name: ClaimDismissedPastClaimDetailsNotificationDeadline,
        requires: &[ClaimNotified],
        guard: dismissed_before_details_notification,
    },
    FlowStateDefinition {
        name: ClaimDismissedPastClaimDismissedDeadline,
        requires: &[ClaimDetailsNotified],
        guard: claim_dismissed,
    },
    FlowStateDefinition {
        name: TakenOfflinePastApplicantResponseDeadline,
        requires: &[FullDefence],
        guard: taken_offline_past_applicant_response_deadline,
    },
    FlowStateDefinition {
        name: TakenOfflineByStaff,
        requires: &[],
        guard: taken_offline_by_staff,
    },
    FlowStateDefinition {
        name: ClaimDiscontinued,
        requires: &[ClaimIssued],
        guard: claim_discontinued,
    },
    FlowStateDefinition { name: ClaimWithdrawn, requires: &[ClaimIssued], guard: claim_withdrawn },
];

// ── Guard predicates ────────────────────────────────────────────────
// Pure functions of the snapshot; no I/O, no clock.

fn claim_drafted(case: &CaseData) -> bool {
    case.case_reference.is_some() && case.submitted_date.is_none()
}

fn claim_submitted(case: &CaseData) -> bool {
    case.submitted_date.is_some()
}

fn payment_failed(case: &CaseData) -> bool {
    matches!(&case.claim_issue_payment, Some(p) if p.status == PaymentStatus::Failed)
}

fn payment_successful(case: &CaseData) -> bool {
    matches!(&case.claim_issue_payment, Some(p) if p.status == PaymentStatus::Success)
}

fn pending_claim_issued(case: &CaseData) -> bool {
    payment_successful(case) && case.issue_date.is_none()
}

fn claim_issued(case: &CaseData) -> bool {
    case.issue_date.is_some()
}

fn claim_notified(case: &CaseData) -> bool {
    case.claim_notification_date.is_some()
}

fn claim_details_notified(case: &CaseData) -> bool {
    case.claim_details_notification_date.is_some()
}

fn time_extension_before_acknowledgement(case: &CaseData) -> bool {
    case.respondent_time_extension_date.is_some()
        && case.respondent_acknowledge_notification_date.is_none()
}

fn notification_acknowledged(case: &CaseData) -> bool {
    case.respondent_acknowledge_notification_date.is_some()
}

fn time_extension_after_acknowledgement(case: &CaseData) -> bool {
    case.respondent_time_extension_date.is_some()
        && case.respondent_acknowledge_notification_date.is_some()
}

fn responded_with(case: &CaseData, response: RespondentResponseType) -> bool {
    case.respondent_response_date.is_some() && case.respondent_response_type == Some(response)
}

fn full_defence(case: &CaseData) -> bool {
    responded_with(case, RespondentResponseType::FullDefence)
}

fn full_admission(case: &CaseData) -> bool {
    responded_with(case, RespondentResponseType::FullAdmission)
}

fn part_admission(case: &CaseData) -> bool {
    responded_with(case, RespondentResponseType::PartAdmission)
}

fn counter_claim(case: &CaseData) -> bool {
    responded_with(case, RespondentResponseType::CounterClaim)
}

fn applicant_proceeds(case: &CaseData) -> bool {
    case.applicant_response_date.is_some()
        && case.applicant_proceeds_with_claim == Some(YesOrNo::Yes)
}

fn applicant_does_not_proceed(case: &CaseData) -> bool {
    case.applicant_response_date.is_some()
        && case.applicant_proceeds_with_claim == Some(YesOrNo::No)
}

fn in_mediation(case: &CaseData) -> bool {
    case.mediation_started_date.is_some()
}

fn default_judgment_entered(case: &CaseData) -> bool {
    case.default_judgment_date.is_some()
}

fn in_hearing_readiness(case: &CaseData) -> bool {
    case.hearing_date.is_some() || case.case_state == Some(CaseState::CaseProgression)
}

fn trial_ready(case: &CaseData) -> bool {
    case.trial_ready_confirmation == Some(YesOrNo::Yes)
}

fn dismissed_before_notification(case: &CaseData) -> bool {
    case.claim_dismissed_date.is_some() && case.claim_notification_date.is_none()
}

fn dismissed_before_details_notification(case: &CaseData) -> bool {
    case.claim_dismissed_date.is_some() && case.claim_details_notification_date.is_none()
}

fn claim_dismissed(case: &CaseData) -> bool {
    case.claim_dismissed_date.is_some()
}

fn taken_offline_past_applicant_response_deadline(case: &CaseData) -> bool {
    case.taken_offline_date.is_some()
        && case.applicant_response_date.is_none()
        && case.applicant_response_deadline.is_some()
}

fn taken_offline_by_staff(case: &CaseData) -> bool {
    case.taken_offline_by_staff_date.is_some()
}

fn claim_discontinued(case: &CaseData) -> bool {
    case.claim_discontinued_date.is_some()
}

fn claim_withdrawn(case: &CaseData) -> bool {
    case.claim_withdrawn_date.is_some()
}

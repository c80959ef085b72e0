//! Classifier scenarios: one per lifecycle branch, plus the gating and
//! error contracts.

use claims_engine::stateflow::{classify, has_transitioned_to};
use pretty_assertions::assert_eq;
use shared_types::{
    AllocatedTrack, CaseData, CaseState, EngineErrorKind, FlowStateName, PaymentDetails,
    PaymentStatus, RespondentResponseType, YesOrNo,
};

use crate::common::{date, datetime};
use FlowStateName::*;

// Snapshot builders, accumulating fields the way a live case does.

fn drafted_case() -> CaseData {
    CaseData {
        case_reference: Some(1_594_901_956_117_591),
        ..Default::default()
    }
}

fn submitted_case() -> CaseData {
    CaseData {
        submitted_date: Some(datetime(2020, 8, 1, 12, 0)),
        ..drafted_case()
    }
}

fn paid_case() -> CaseData {
    CaseData {
        claim_issue_payment: Some(PaymentDetails {
            status: PaymentStatus::Success,
            reference: Some("RC-1604-0971-2431-9976".to_string()),
        }),
        ..submitted_case()
    }
}

fn issued_case() -> CaseData {
    CaseData {
        issue_date: Some(date(2020, 8, 5)),
        claim_notification_deadline: Some(datetime(2020, 12, 7, 0, 0)),
        ..paid_case()
    }
}

fn notified_case() -> CaseData {
    CaseData {
        claim_notification_date: Some(datetime(2020, 8, 10, 12, 0)),
        claim_details_notification_deadline: Some(datetime(2020, 8, 24, 16, 0)),
        ..issued_case()
    }
}

fn details_notified_case() -> CaseData {
    CaseData {
        claim_details_notification_date: Some(datetime(2020, 8, 12, 12, 0)),
        respondent_response_deadline: Some(datetime(2020, 8, 26, 16, 0)),
        ..notified_case()
    }
}

fn full_defence_case() -> CaseData {
    CaseData {
        respondent_response_type: Some(RespondentResponseType::FullDefence),
        respondent_response_date: Some(datetime(2020, 8, 20, 12, 0)),
        applicant_response_deadline: Some(datetime(2020, 9, 3, 16, 0)),
        ..details_notified_case()
    }
}

fn proceeding_case() -> CaseData {
    CaseData {
        applicant_proceeds_with_claim: Some(YesOrNo::Yes),
        applicant_response_date: Some(datetime(2020, 8, 25, 12, 0)),
        allocated_track: Some(AllocatedTrack::SmallClaim),
        ..full_defence_case()
    }
}

// ── Progression ─────────────────────────────────────────────────────

#[test]
fn empty_snapshot_is_unclassifiable() {
    let err = classify(&CaseData::default()).unwrap_err();
    assert_eq!(err.kind, EngineErrorKind::UnclassifiableState);
    assert_eq!(err.message, "No determinable flow state for the supplied case data");
}

#[test]
fn drafted_case_is_draft() {
    let flow = classify(&drafted_case()).unwrap();
    assert_eq!(flow.history, vec![Draft]);
    assert_eq!(flow.current, Draft);
}

#[test]
fn submitted_case_leaves_draft_behind() {
    let flow = classify(&submitted_case()).unwrap();
    assert_eq!(flow.history, vec![ClaimSubmitted]);
}

#[test]
fn successful_payment_is_pending_issue() {
    let flow = classify(&paid_case()).unwrap();
    assert_eq!(
        flow.history,
        vec![ClaimSubmitted, ClaimIssuedPaymentSuccessful, PendingClaimIssued]
    );
    assert_eq!(flow.current, PendingClaimIssued);
}

#[test]
fn failed_payment_is_terminal_until_resubmission() {
    let case = CaseData {
        claim_issue_payment: Some(PaymentDetails {
            status: PaymentStatus::Failed,
            reference: None,
        }),
        ..submitted_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, ClaimIssuedPaymentFailed);
    assert!(!flow.has_transitioned_to(ClaimIssuedPaymentSuccessful));
}

#[test]
fn issued_case_drops_the_pending_state() {
    let flow = classify(&issued_case()).unwrap();
    assert_eq!(
        flow.history,
        vec![ClaimSubmitted, ClaimIssuedPaymentSuccessful, ClaimIssued]
    );
    assert_eq!(flow.current, ClaimIssued);
}

#[test]
fn issue_date_alone_classifies_as_claim_issued() {
    let case = CaseData {
        issue_date: Some(date(2020, 8, 5)),
        ..Default::default()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.history, vec![ClaimIssued]);
    assert!(!has_transitioned_to(&case, ClaimNotified).unwrap());
}

#[test]
fn notified_case_reaches_claim_notified() {
    let flow = classify(&notified_case()).unwrap();
    assert_eq!(flow.current, ClaimNotified);
    assert!(flow.has_transitioned_to(ClaimIssued));
}

#[test]
fn details_notified_case_reaches_details_notified() {
    let flow = classify(&details_notified_case()).unwrap();
    assert_eq!(flow.current, ClaimDetailsNotified);
}

// ── Acknowledgement and extensions ──────────────────────────────────

#[test]
fn time_extension_before_acknowledgement() {
    let case = CaseData {
        respondent_time_extension_date: Some(datetime(2020, 8, 14, 12, 0)),
        ..details_notified_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, ClaimDetailsNotifiedTimeExtension);
}

#[test]
fn acknowledgement_supersedes_the_extension_state() {
    let case = CaseData {
        respondent_time_extension_date: Some(datetime(2020, 8, 14, 12, 0)),
        respondent_acknowledge_notification_date: Some(datetime(2020, 8, 15, 12, 0)),
        ..details_notified_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, NotificationAcknowledgedTimeExtension);
    assert!(flow.has_transitioned_to(NotificationAcknowledged));
    assert!(!flow.has_transitioned_to(ClaimDetailsNotifiedTimeExtension));
}

#[test]
fn acknowledgement_without_extension() {
    let case = CaseData {
        respondent_acknowledge_notification_date: Some(datetime(2020, 8, 15, 12, 0)),
        ..details_notified_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, NotificationAcknowledged);
    assert!(!flow.has_transitioned_to(NotificationAcknowledgedTimeExtension));
}

// ── Respondent response branches ────────────────────────────────────

#[test]
fn full_defence_response() {
    let flow = classify(&full_defence_case()).unwrap();
    assert_eq!(flow.current, FullDefence);
}

#[test]
fn admission_and_counter_claim_responses() {
    for (response, expected) in [
        (RespondentResponseType::FullAdmission, FullAdmission),
        (RespondentResponseType::PartAdmission, PartAdmission),
        (RespondentResponseType::CounterClaim, CounterClaim),
    ] {
        let case = CaseData {
            respondent_response_type: Some(response),
            respondent_response_date: Some(datetime(2020, 8, 20, 12, 0)),
            ..details_notified_case()
        };
        let flow = classify(&case).unwrap();
        assert_eq!(flow.current, expected);
        assert!(!flow.has_transitioned_to(FullDefence));
    }
}

#[test]
fn response_without_a_date_does_not_count() {
    let case = CaseData {
        respondent_response_type: Some(RespondentResponseType::FullDefence),
        ..details_notified_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, ClaimDetailsNotified);
}

// ── Applicant intention and beyond ──────────────────────────────────

#[test]
fn applicant_proceeding_with_the_claim() {
    let flow = classify(&proceeding_case()).unwrap();
    assert_eq!(flow.current, FullDefenceProceed);
}

#[test]
fn applicant_not_proceeding_with_the_claim() {
    let case = CaseData {
        applicant_proceeds_with_claim: Some(YesOrNo::No),
        applicant_response_date: Some(datetime(2020, 8, 25, 12, 0)),
        ..full_defence_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, FullDefenceNotProceed);
    assert!(!flow.has_transitioned_to(FullDefenceProceed));
}

#[test]
fn mediation_follows_a_proceeding_small_claim() {
    let case = CaseData {
        mediation_started_date: Some(date(2020, 9, 1)),
        ..proceeding_case()
    };
    assert_eq!(classify(&case).unwrap().current, InMediation);
}

#[test]
fn hearing_date_moves_the_case_into_hearing_readiness() {
    let case = CaseData {
        hearing_date: Some(date(2020, 11, 2)),
        ..proceeding_case()
    };
    assert_eq!(classify(&case).unwrap().current, InHearingReadiness);
}

#[test]
fn platform_case_progression_state_also_counts_as_hearing_readiness() {
    let case = CaseData {
        case_state: Some(CaseState::CaseProgression),
        ..proceeding_case()
    };
    assert_eq!(classify(&case).unwrap().current, InHearingReadiness);
}

#[test]
fn trial_ready_confirmation_follows_hearing_readiness() {
    let case = CaseData {
        hearing_date: Some(date(2020, 11, 2)),
        trial_ready_confirmation: Some(YesOrNo::Yes),
        ..proceeding_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, TrialReady);
    assert!(flow.has_transitioned_to(InHearingReadiness));
}

#[test]
fn default_judgment_after_no_response() {
    let case = CaseData {
        default_judgment_date: Some(date(2020, 9, 10)),
        ..details_notified_case()
    };
    assert_eq!(classify(&case).unwrap().current, DefaultJudgment);
}

// ── Dismissal and offline branches ──────────────────────────────────

#[test]
fn dismissal_before_notification() {
    let case = CaseData {
        claim_dismissed_date: Some(datetime(2020, 12, 8, 0, 0)),
        ..issued_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, ClaimDismissedPastClaimNotificationDeadline);
}

#[test]
fn dismissal_before_details_notification() {
    let case = CaseData {
        claim_dismissed_date: Some(datetime(2020, 8, 25, 16, 0)),
        ..notified_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, ClaimDismissedPastClaimDetailsNotificationDeadline);
    assert!(!flow.has_transitioned_to(ClaimDismissedPastClaimNotificationDeadline));
}

#[test]
fn dismissal_after_details_notification() {
    let case = CaseData {
        claim_dismissed_date: Some(datetime(2021, 2, 15, 16, 0)),
        ..details_notified_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, ClaimDismissedPastClaimDismissedDeadline);
}

#[test]
fn taken_offline_past_applicant_response_deadline() {
    let case = CaseData {
        taken_offline_date: Some(datetime(2020, 9, 4, 10, 0)),
        ..full_defence_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, TakenOfflinePastApplicantResponseDeadline);
}

#[test]
fn taken_offline_by_staff_wins_the_current_slot() {
    let case = CaseData {
        taken_offline_by_staff_date: Some(datetime(2020, 8, 21, 9, 0)),
        ..full_defence_case()
    };
    let flow = classify(&case).unwrap();
    assert_eq!(flow.current, TakenOfflineByStaff);
    // The progression history stays available for notification gating.
    assert!(flow.has_transitioned_to(FullDefence));
    assert!(flow.has_transitioned_to(ClaimNotified));
}

#[test]
fn discontinued_and_withdrawn_claims() {
    let discontinued = CaseData {
        claim_discontinued_date: Some(datetime(2020, 8, 30, 11, 0)),
        ..notified_case()
    };
    assert_eq!(classify(&discontinued).unwrap().current, ClaimDiscontinued);

    let withdrawn = CaseData {
        claim_withdrawn_date: Some(datetime(2020, 8, 30, 11, 0)),
        ..notified_case()
    };
    assert_eq!(classify(&withdrawn).unwrap().current, ClaimWithdrawn);
}

// ── Invariants ──────────────────────────────────────────────────────

#[test]
fn history_is_monotonic_along_the_happy_path() {
    let snapshots = [
        submitted_case(),
        paid_case(),
        issued_case(),
        notified_case(),
        details_notified_case(),
        full_defence_case(),
        proceeding_case(),
    ];
    let mut previous_len = 0;
    for snapshot in &snapshots {
        let flow = classify(snapshot).unwrap();
        // Each accumulated snapshot extends the history; nothing vanishes.
        assert!(flow.history.len() >= previous_len);
        assert_eq!(flow.history.last(), Some(&flow.current));
        previous_len = flow.history.len();
    }
}

#[test]
fn gating_checks_history_not_just_current() {
    let case = proceeding_case();
    assert!(has_transitioned_to(&case, ClaimDetailsNotified).unwrap());
    assert!(has_transitioned_to(&case, FullDefence).unwrap());
    assert!(has_transitioned_to(&case, FullDefenceProceed).unwrap());
    assert!(!has_transitioned_to(&case, FullDefenceNotProceed).unwrap());
    assert!(!has_transitioned_to(&case, TrialReady).unwrap());
}

#[test]
fn gating_on_an_unclassifiable_snapshot_is_an_error() {
    let err = has_transitioned_to(&CaseData::default(), ClaimIssued).unwrap_err();
    assert_eq!(err.kind, EngineErrorKind::UnclassifiableState);
}

#[test]
fn current_state_maps_to_a_platform_state() {
    let flow = classify(&issued_case()).unwrap();
    assert_eq!(flow.current.case_state(), Some(CaseState::CaseIssued));

    let flow = classify(&full_defence_case()).unwrap();
    assert_eq!(
        flow.current.case_state(),
        Some(CaseState::AwaitingApplicantIntention)
    );
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::track::AllocatedTrack;

// ── Field enums ─────────────────────────────────────────────────────

/// Two-valued answer recorded on case fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YesOrNo {
    Yes,
    No,
}

/// Outcome of the claim-issue fee payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failed,
}

/// Payment record attached to the claim at issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDetails {
    pub status: PaymentStatus,
    #[serde(default)]
    pub reference: Option<String>,
}

/// The respondent's answer to the claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RespondentResponseType {
    FullDefence,
    FullAdmission,
    PartAdmission,
    CounterClaim,
}

/// Coarse case state persisted by the surrounding management platform.
///
/// Distinct from the derived flow state: the platform stores one of these
/// nine values, while the classifier reconstructs the finer-grained
/// lifecycle position from the raw fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseState {
    PendingCaseIssued,
    CaseIssued,
    AwaitingCaseDetailsNotification,
    AwaitingRespondentAcknowledgement,
    CaseDismissed,
    AwaitingApplicantIntention,
    ProceedsInHeritageSystem,
    JudicialReferral,
    CaseProgression,
}

// ── Case snapshot ───────────────────────────────────────────────────

/// Immutable snapshot of a single claim, produced fresh per request by the
/// surrounding case-data-conversion layer. The classifier and the deadline
/// calculator only read from it.
///
/// Every field is optional: a snapshot accumulates values as the case moves
/// through its lifecycle, and the guards key off which fields are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaseData {
    pub case_reference: Option<i64>,
    pub submitted_date: Option<NaiveDateTime>,
    pub issue_date: Option<NaiveDate>,
    pub claim_issue_payment: Option<PaymentDetails>,

    pub claim_notification_date: Option<NaiveDateTime>,
    pub claim_notification_deadline: Option<NaiveDateTime>,
    pub claim_details_notification_date: Option<NaiveDateTime>,
    pub claim_details_notification_deadline: Option<NaiveDateTime>,

    pub respondent_acknowledge_notification_date: Option<NaiveDateTime>,
    pub respondent_time_extension_date: Option<NaiveDateTime>,
    pub respondent_response_type: Option<RespondentResponseType>,
    pub respondent_response_date: Option<NaiveDateTime>,
    pub respondent_response_deadline: Option<NaiveDateTime>,

    pub applicant_proceeds_with_claim: Option<YesOrNo>,
    pub applicant_response_date: Option<NaiveDateTime>,
    pub applicant_response_deadline: Option<NaiveDateTime>,

    pub allocated_track: Option<AllocatedTrack>,
    /// Track as captured on the response journey; parsed into an
    /// [`AllocatedTrack`] when `allocated_track` is absent.
    pub response_claim_track: Option<String>,

    pub mediation_started_date: Option<NaiveDate>,
    pub hearing_date: Option<NaiveDate>,
    pub trial_ready_confirmation: Option<YesOrNo>,
    pub default_judgment_date: Option<NaiveDate>,

    pub taken_offline_date: Option<NaiveDateTime>,
    pub taken_offline_by_staff_date: Option<NaiveDateTime>,
    pub claim_dismissed_date: Option<NaiveDateTime>,
    pub claim_discontinued_date: Option<NaiveDateTime>,
    pub claim_withdrawn_date: Option<NaiveDateTime>,

    pub case_state: Option<CaseState>,
}

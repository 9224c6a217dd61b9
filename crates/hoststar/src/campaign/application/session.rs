use serde_json::Value;
use tracing::{info, warn};

use super::domain::{ApplicationDraft, Category, IntakeResponse, SubmissionPayload};
use super::gate::{self, GateDecision, GateRequirement};
use super::store::{DraftStore, DraftStoreError, SnapshotBackend};

/// One field mutation applied to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Phone(String),
    Instagram(String),
    Location(String),
    Languages(String),
    Category(Category),
    Title(String),
    Description(String),
    /// Replace the selected file names. Names only; no bytes are ever held.
    SelectFiles(Vec<String>),
    ClearFiles,
}

/// Submission flow phase. `Submitting` is the in-flight flag: it blocks
/// re-entrant submissions until `finish_submission` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Why `begin_submission` refused to start.
#[derive(Debug, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("submission requirements unmet")]
    Gate { missing: Vec<GateRequirement> },
}

/// Transport-level delivery failure (the request never completed).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("intake endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Delivery seam between the session and the intake endpoint, so the state
/// machine can be exercised with fakes.
pub trait IntakeTransport {
    fn deliver(&self, payload: &SubmissionPayload) -> Result<IntakeResponse, TransportError>;
}

/// Terminal outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The endpoint acknowledged the submission; `receipt` is the echoed
    /// payload including the server receipt timestamp.
    Delivered { receipt: Value },
    /// The endpoint was reachable but did not acknowledge.
    Rejected,
    /// The request itself failed.
    Unreachable,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered { .. })
    }

    /// User-facing status line, matching the campaign page copy.
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Delivered { .. } => {
                "Application submitted! Check the intake service logs."
            }
            SubmitOutcome::Rejected => "Something went wrong. Please try again.",
            SubmitOutcome::Unreachable => "Network error. Please try again.",
        }
    }
}

/// A single applicant's editing session: the draft, the selected file names,
/// the FAQ accordion state, and the submission phase machine.
///
/// Every draft mutation is persisted through the store immediately, so a
/// reload resumes where the applicant left off. File selections and the
/// accordion index are session-only and do not survive a reload.
pub struct DraftSession<B> {
    store: DraftStore<B>,
    draft: ApplicationDraft,
    file_names: Vec<String>,
    faq_open: Option<usize>,
    phase: SubmitPhase,
    last_outcome: Option<SubmitOutcome>,
}

impl<B: SnapshotBackend> DraftSession<B> {
    /// Start a session, rehydrating the draft from the store when a prior
    /// snapshot exists.
    pub fn resume(store: DraftStore<B>) -> Result<Self, DraftStoreError> {
        let draft = store.load()?.unwrap_or_default();
        Ok(Self {
            store,
            draft,
            file_names: Vec::new(),
            faq_open: None,
            phase: SubmitPhase::Idle,
            last_outcome: None,
        })
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn faq_open(&self) -> Option<usize> {
        self.faq_open
    }

    /// Toggle the accordion: opening one entry closes the previous; toggling
    /// the open entry closes it.
    pub fn toggle_faq(&mut self, index: usize) {
        self.faq_open = if self.faq_open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn gate(&self) -> GateDecision {
        gate::evaluate(&self.draft)
    }

    /// The submit action is enabled iff the gate is satisfied and no
    /// submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle && self.gate().permits_submission()
    }

    /// Apply one field edit and persist the updated snapshot.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), DraftStoreError> {
        match edit {
            FieldEdit::Name(value) => self.draft.name = value,
            FieldEdit::Email(value) => self.draft.email = value,
            FieldEdit::Phone(value) => self.draft.phone = value,
            FieldEdit::Instagram(value) => self.draft.instagram = value,
            FieldEdit::Location(value) => self.draft.location = value,
            FieldEdit::Languages(value) => self.draft.languages = value,
            FieldEdit::Category(value) => self.draft.category = value,
            FieldEdit::Title(value) => self.draft.title = value,
            FieldEdit::Description(value) => self.draft.set_description(value),
            FieldEdit::SelectFiles(names) => self.file_names = names,
            FieldEdit::ClearFiles => self.file_names.clear(),
        }
        self.store.save(&self.draft)
    }

    /// Transition `idle -> submitting` and produce the wire payload: the
    /// full draft merged with the file-name list.
    pub fn begin_submission(&mut self) -> Result<SubmissionPayload, SubmitBlocked> {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let decision = self.gate();
        if !decision.permits_submission() {
            return Err(SubmitBlocked::Gate {
                missing: decision.missing,
            });
        }

        self.phase = SubmitPhase::Submitting;
        Ok(SubmissionPayload {
            draft: self.draft.clone(),
            file_names: self.file_names.clone(),
        })
    }

    /// Transition `submitting -> {success, failure} -> idle`.
    ///
    /// On acknowledgment the store entry is cleared and the
    /// title/description/file fields reset while every other field is
    /// retained. On failure the draft is left untouched so the applicant can
    /// retry.
    pub fn finish_submission(
        &mut self,
        result: Result<IntakeResponse, TransportError>,
    ) -> &SubmitOutcome {
        self.phase = SubmitPhase::Idle;

        let outcome = match result {
            Ok(response) if response.ok => {
                if let Err(err) = self.store.clear() {
                    warn!(%err, "failed to clear draft snapshot after acknowledgment");
                }
                self.draft.reset_submission_fields();
                self.file_names.clear();
                info!("application acknowledged by intake endpoint");
                SubmitOutcome::Delivered {
                    receipt: result_receipt(response),
                }
            }
            Ok(response) => {
                warn!(message = response.message.as_deref(), "intake endpoint did not acknowledge");
                SubmitOutcome::Rejected
            }
            Err(err) => {
                warn!(%err, "submission request failed");
                SubmitOutcome::Unreachable
            }
        };

        self.last_outcome.insert(outcome)
    }

    /// Run one full submission attempt against a transport. Blocks at the
    /// gate or in-flight flag like the UI submit button does.
    pub fn submit(
        &mut self,
        transport: &impl IntakeTransport,
    ) -> Result<&SubmitOutcome, SubmitBlocked> {
        let payload = self.begin_submission()?;
        let result = transport.deliver(&payload);
        Ok(self.finish_submission(result))
    }
}

fn result_receipt(response: IntakeResponse) -> Value {
    response.received.unwrap_or(Value::Null)
}

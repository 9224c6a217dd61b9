//! Application intake for the HostStar contest campaign.
//!
//! Three collaborators make up the workflow: the [`store::DraftStore`]
//! persists the in-progress draft across sessions under a single fixed key,
//! the [`gate`] derives the "can submit" signal from required-field presence,
//! and the [`session::DraftSession`] drives the
//! `idle -> submitting -> {success, failure} -> idle` submission machine.
//! The [`router`] module exposes the intake endpoint the payload is delivered
//! to.

pub mod domain;
pub mod gate;
pub mod router;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationDraft, Category, IntakeResponse, SubmissionPayload, DESCRIPTION_MAX_CHARS,
    DESCRIPTION_MIN_CHARS,
};
pub use gate::{evaluate, GateDecision, GateRequirement};
pub use router::{intake_router, LoopbackTransport};
pub use session::{
    DraftSession, FieldEdit, IntakeTransport, SubmitBlocked, SubmitOutcome, SubmitPhase,
    TransportError,
};
pub use store::{
    DraftStore, DraftStoreError, FileBackend, InMemoryBackend, SnapshotBackend, DRAFT_STORE_KEY,
};

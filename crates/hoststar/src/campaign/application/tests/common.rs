use std::sync::Mutex;

use crate::campaign::application::{
    ApplicationDraft, Category, DraftSession, DraftStore, InMemoryBackend, IntakeResponse,
    IntakeTransport, SubmissionPayload, TransportError,
};

/// The concrete scenario draft from the campaign brief.
pub(super) fn filled_draft() -> ApplicationDraft {
    ApplicationDraft {
        name: "Renu Thakur".to_string(),
        email: "r@x.com".to_string(),
        phone: "+911234567890".to_string(),
        instagram: String::new(),
        location: "Manali, HP".to_string(),
        languages: "Hindi, English".to_string(),
        category: Category::AdventureNature,
        title: "Tea Walk".to_string(),
        description: "A slow morning walk through the tea gardens with chai stops.".to_string(),
    }
}

pub(super) fn fresh_session() -> DraftSession<InMemoryBackend> {
    DraftSession::resume(DraftStore::new(InMemoryBackend::default())).expect("session resumes")
}

pub(super) fn session_with(draft: &ApplicationDraft) -> DraftSession<InMemoryBackend> {
    let store = DraftStore::new(InMemoryBackend::default());
    store.save(draft).expect("seed draft saves");
    DraftSession::resume(store).expect("session resumes")
}

/// Transport fake returning scripted results and recording every payload it
/// was asked to deliver.
pub(super) struct ScriptedTransport {
    results: Mutex<Vec<Result<IntakeResponse, TransportError>>>,
    pub(super) deliveries: Mutex<Vec<SubmissionPayload>>,
}

impl ScriptedTransport {
    pub(super) fn new(results: Vec<Result<IntakeResponse, TransportError>>) -> Self {
        Self {
            results: Mutex::new(results),
            deliveries: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn acknowledging() -> Self {
        Self::new(vec![Ok(IntakeResponse {
            ok: true,
            received: Some(serde_json::json!({ "receivedAt": "2025-09-01T00:00:00.000Z" })),
            message: None,
        })])
    }

    pub(super) fn rejecting() -> Self {
        Self::new(vec![Ok(IntakeResponse {
            ok: false,
            received: None,
            message: Some("Method not allowed".to_string()),
        })])
    }

    pub(super) fn unreachable() -> Self {
        Self::new(vec![Err(TransportError::Unreachable(
            "connection refused".to_string(),
        ))])
    }
}

impl IntakeTransport for ScriptedTransport {
    fn deliver(&self, payload: &SubmissionPayload) -> Result<IntakeResponse, TransportError> {
        self.deliveries
            .lock()
            .expect("delivery log poisoned")
            .push(payload.clone());
        self.results
            .lock()
            .expect("script poisoned")
            .pop()
            .unwrap_or_else(|| Err(TransportError::Unreachable("script exhausted".to_string())))
    }
}

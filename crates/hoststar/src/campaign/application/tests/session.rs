use super::common::{filled_draft, fresh_session, session_with, ScriptedTransport};
use crate::campaign::application::{
    Category, DraftSession, DraftStore, FieldEdit, GateRequirement, InMemoryBackend,
    SubmitBlocked, SubmitOutcome, SubmitPhase, DESCRIPTION_MAX_CHARS,
};

#[test]
fn resume_rehydrates_prior_snapshot() {
    let session = session_with(&filled_draft());
    assert_eq!(session.draft(), &filled_draft());
    assert_eq!(session.phase(), SubmitPhase::Idle);
    assert!(session.file_names().is_empty());
}

#[test]
fn edits_persist_on_every_mutation() {
    let backend = InMemoryBackend::default();
    let mut session =
        DraftSession::resume(DraftStore::new(backend.clone())).expect("session resumes");
    session
        .apply(FieldEdit::Name("Renu Thakur".to_string()))
        .expect("edit applies");
    session
        .apply(FieldEdit::Category(Category::CultureArts))
        .expect("edit applies");

    // A reload over the same backend resumes the persisted state.
    let reloaded =
        DraftSession::resume(DraftStore::new(backend)).expect("second session resumes");
    assert_eq!(reloaded.draft().name, "Renu Thakur");
    assert_eq!(reloaded.draft().category, Category::CultureArts);
}

#[test]
fn description_edits_clamp_to_cap() {
    let mut session = fresh_session();
    session
        .apply(FieldEdit::Description("d".repeat(DESCRIPTION_MAX_CHARS * 2)))
        .expect("edit applies");
    assert_eq!(
        session.draft().description.chars().count(),
        DESCRIPTION_MAX_CHARS
    );
    assert_eq!(session.draft().description_remaining(), 0);
}

#[test]
fn file_selection_stays_out_of_the_draft() {
    let mut session = fresh_session();
    session
        .apply(FieldEdit::SelectFiles(vec![
            "porch.jpg".to_string(),
            "walkthrough.mp4".to_string(),
        ]))
        .expect("edit applies");
    assert_eq!(session.file_names().len(), 2);

    session.apply(FieldEdit::ClearFiles).expect("edit applies");
    assert!(session.file_names().is_empty());
}

#[test]
fn gate_blocks_incomplete_draft() {
    let mut session = fresh_session();
    assert!(!session.can_submit());

    match session.begin_submission() {
        Err(SubmitBlocked::Gate { missing }) => {
            assert!(missing.contains(&GateRequirement::Name));
            assert!(missing.contains(&GateRequirement::DescriptionLength));
        }
        other => panic!("expected gate block, got {other:?}"),
    }
    assert_eq!(session.phase(), SubmitPhase::Idle);
}

#[test]
fn in_flight_submission_refuses_reentry() {
    let mut session = session_with(&filled_draft());
    let payload = session.begin_submission().expect("first submission starts");
    assert_eq!(payload.draft, filled_draft());
    assert_eq!(session.phase(), SubmitPhase::Submitting);
    assert!(!session.can_submit());

    assert!(matches!(
        session.begin_submission(),
        Err(SubmitBlocked::InFlight)
    ));
}

#[test]
fn acknowledged_submission_resets_and_clears() {
    let mut session = session_with(&filled_draft());
    session
        .apply(FieldEdit::SelectFiles(vec!["walk.mp4".to_string()]))
        .expect("edit applies");

    let transport = ScriptedTransport::acknowledging();
    let outcome = session.submit(&transport).expect("submission runs");
    assert!(outcome.is_success());

    let delivered = transport.deliveries.lock().expect("deliveries");
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].file_names, vec!["walk.mp4".to_string()]);

    // Title, description, and files reset; everything else retained.
    let draft = session.draft();
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert!(session.file_names().is_empty());
    assert_eq!(draft.name, "Renu Thakur");
    assert_eq!(draft.email, "r@x.com");
    assert_eq!(draft.phone, "+911234567890");
    assert_eq!(draft.location, "Manali, HP");
    assert_eq!(draft.languages, "Hindi, English");
    assert_eq!(draft.category, Category::AdventureNature);

    assert_eq!(session.phase(), SubmitPhase::Idle);
}

#[test]
fn rejected_submission_preserves_draft_for_retry() {
    let mut session = session_with(&filled_draft());
    let transport = ScriptedTransport::rejecting();

    let outcome = session.submit(&transport).expect("submission runs");
    assert_eq!(outcome, &SubmitOutcome::Rejected);
    assert_eq!(outcome.message(), "Something went wrong. Please try again.");

    assert_eq!(session.draft(), &filled_draft());
    assert_eq!(session.phase(), SubmitPhase::Idle);
    assert!(session.can_submit(), "retry stays available");
}

#[test]
fn transport_failure_preserves_draft_for_retry() {
    let mut session = session_with(&filled_draft());
    let transport = ScriptedTransport::unreachable();

    let outcome = session.submit(&transport).expect("submission runs");
    assert_eq!(outcome, &SubmitOutcome::Unreachable);
    assert_eq!(outcome.message(), "Network error. Please try again.");
    assert_eq!(session.draft(), &filled_draft());
    assert!(session.can_submit());
}

#[test]
fn faq_toggle_opens_switches_and_closes() {
    let mut session = fresh_session();
    assert_eq!(session.faq_open(), None);

    session.toggle_faq(0);
    assert_eq!(session.faq_open(), Some(0));

    session.toggle_faq(3);
    assert_eq!(session.faq_open(), Some(3));

    session.toggle_faq(3);
    assert_eq!(session.faq_open(), None);
}

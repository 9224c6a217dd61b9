use clap::Args;
use hoststar::campaign::application::{
    Category, DraftSession, DraftStore, FieldEdit, FileBackend, IntakeResponse, IntakeTransport,
    LoopbackTransport, SnapshotBackend, SubmissionPayload, SubmitOutcome, TransportError,
    DRAFT_STORE_KEY,
};
use hoststar::config::AppConfig;
use hoststar::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory holding the persisted draft snapshot (defaults to the
    /// configured HOSTSTAR_DRAFT_DIR)
    #[arg(long)]
    pub(crate) draft_dir: Option<PathBuf>,
    /// Simulate a network failure instead of delivering the submission
    #[arg(long)]
    pub(crate) fail_delivery: bool,
}

/// Transport that never reaches the endpoint, for demonstrating the failure
/// path: the draft must survive for a retry.
struct UnreachableTransport;

impl IntakeTransport for UnreachableTransport {
    fn deliver(&self, _payload: &SubmissionPayload) -> Result<IntakeResponse, TransportError> {
        Err(TransportError::Unreachable(
            "simulated network failure".to_string(),
        ))
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let dir = args.draft_dir.unwrap_or(config.drafts.dir);

    println!("HostStar intake demo");
    println!("Draft storage: {}", dir.display());

    let store = DraftStore::new(FileBackend::new(&dir));
    let mut session = DraftSession::resume(store)?;

    if session.draft().name.is_empty() {
        println!("No resumable draft found; filling the sample application");
    } else {
        println!("Resumed saved draft for {}", session.draft().name);
    }

    if !session.gate().permits_submission() {
        for edit in sample_edits() {
            session.apply(edit)?;
        }
    }
    session.apply(FieldEdit::SelectFiles(vec![
        "courtyard.jpg".to_string(),
        "tea-walk.mp4".to_string(),
    ]))?;

    let draft = session.draft();
    println!("Applicant: {} ({}, {})", draft.name, draft.location, draft.category.label());
    println!(
        "Description: {} characters used, {} remaining",
        draft.description.chars().count(),
        draft.description_remaining()
    );

    let decision = session.gate();
    if decision.permits_submission() {
        println!("Submission gate: open");
    } else {
        println!("Submission gate: blocked");
        for requirement in &decision.missing {
            println!("  - missing {}", requirement.label());
        }
        return Ok(());
    }

    let outcome = if args.fail_delivery {
        session.submit(&UnreachableTransport)
    } else {
        session.submit(&LoopbackTransport)
    };

    match outcome {
        Ok(outcome) => {
            println!("Status: {}", outcome.message());
            if let SubmitOutcome::Delivered { receipt } = outcome {
                match serde_json::to_string_pretty(receipt) {
                    Ok(json) => println!("Echoed receipt:\n{json}"),
                    Err(err) => println!("Echoed receipt unavailable: {err}"),
                }
            }
        }
        Err(blocked) => println!("Submission blocked: {blocked}"),
    }

    let snapshot = FileBackend::new(&dir).read(DRAFT_STORE_KEY)?;
    match snapshot {
        Some(_) => println!("Draft snapshot retained at {}", dir.display()),
        None => println!("Draft snapshot cleared"),
    }

    Ok(())
}

fn sample_edits() -> Vec<FieldEdit> {
    vec![
        FieldEdit::Name("Renu Thakur".to_string()),
        FieldEdit::Email("r@x.com".to_string()),
        FieldEdit::Phone("+911234567890".to_string()),
        FieldEdit::Location("Manali, HP".to_string()),
        FieldEdit::Languages("Hindi, English".to_string()),
        FieldEdit::Category(Category::AdventureNature),
        FieldEdit::Title("Tea Walk".to_string()),
        FieldEdit::Description(
            "A slow morning walk through the tea gardens with chai stops.".to_string(),
        ),
    ]
}

use super::domain::{ApplicationDraft, DESCRIPTION_MIN_CHARS};

/// A single unmet submission requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRequirement {
    Name,
    Email,
    Phone,
    Location,
    Languages,
    Title,
    DescriptionLength,
}

impl GateRequirement {
    pub const fn label(self) -> &'static str {
        match self {
            GateRequirement::Name => "full name",
            GateRequirement::Email => "email",
            GateRequirement::Phone => "phone",
            GateRequirement::Location => "location",
            GateRequirement::Languages => "languages",
            GateRequirement::Title => "experience title",
            GateRequirement::DescriptionLength => "description of at least 50 characters",
        }
    }
}

/// Outcome of evaluating the submission gate against a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub missing: Vec<GateRequirement>,
}

impl GateDecision {
    pub fn permits_submission(&self) -> bool {
        self.missing.is_empty()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Derive the "can submit" signal from the current draft. Purely declarative:
/// the in-flight check lives on the session, not here.
pub fn evaluate(draft: &ApplicationDraft) -> GateDecision {
    let mut missing = Vec::new();

    if blank(&draft.name) {
        missing.push(GateRequirement::Name);
    }
    if blank(&draft.email) {
        missing.push(GateRequirement::Email);
    }
    if blank(&draft.phone) {
        missing.push(GateRequirement::Phone);
    }
    if blank(&draft.location) {
        missing.push(GateRequirement::Location);
    }
    if blank(&draft.languages) {
        missing.push(GateRequirement::Languages);
    }
    if blank(&draft.title) {
        missing.push(GateRequirement::Title);
    }
    if draft.description.chars().count() < DESCRIPTION_MIN_CHARS {
        missing.push(GateRequirement::DescriptionLength);
    }

    GateDecision { missing }
}

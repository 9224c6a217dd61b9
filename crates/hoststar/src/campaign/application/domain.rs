use serde::{Deserialize, Serialize};

/// Hard cap enforced at the input layer; edits beyond this are clamped.
pub const DESCRIPTION_MAX_CHARS: usize = 600;

/// Minimum description length the submission gate requires.
pub const DESCRIPTION_MIN_CHARS: usize = 50;

/// Contest categories. The wire representation is the public label shown on
/// the campaign page, so snapshots written by earlier campaign builds
/// rehydrate unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Adventure & Nature")]
    AdventureNature,
    #[serde(rename = "Homestays & Farmstays")]
    HomestaysFarmstays,
    #[serde(rename = "Food & Street Experiences")]
    FoodStreetExperiences,
    #[serde(rename = "Wellness & Spirituality")]
    WellnessSpirituality,
    #[serde(rename = "Culture & Arts")]
    CultureArts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::AdventureNature,
        Category::HomestaysFarmstays,
        Category::FoodStreetExperiences,
        Category::WellnessSpirituality,
        Category::CultureArts,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::AdventureNature => "Adventure & Nature",
            Category::HomestaysFarmstays => "Homestays & Farmstays",
            Category::FoodStreetExperiences => "Food & Street Experiences",
            Category::WellnessSpirituality => "Wellness & Spirituality",
            Category::CultureArts => "Culture & Arts",
        }
    }
}

/// The applicant's in-progress, unsubmitted form data.
///
/// File selections are deliberately absent: only names are ever captured, and
/// they live on the session, so a persisted draft can never leak file
/// contents or object references. Every field defaults so a partial snapshot
/// still rehydrates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
    pub location: String,
    pub languages: String,
    pub category: Category,
    pub title: String,
    pub description: String,
}

impl ApplicationDraft {
    /// Replace the description, clamping to [`DESCRIPTION_MAX_CHARS`]
    /// characters (not bytes).
    pub fn set_description(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if let Some((idx, _)) = text.char_indices().nth(DESCRIPTION_MAX_CHARS) {
            text.truncate(idx);
        }
        self.description = text;
    }

    /// Characters still available before the 600-char cap.
    pub fn description_remaining(&self) -> usize {
        DESCRIPTION_MAX_CHARS.saturating_sub(self.description.chars().count())
    }

    /// Reset the fields a successful submission consumes, retaining the rest
    /// for quick repeated submissions.
    pub fn reset_submission_fields(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Wire payload delivered to the intake endpoint: the full draft plus the
/// names (only the names) of any selected files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub draft: ApplicationDraft,
    #[serde(rename = "fileNames", default)]
    pub file_names: Vec<String>,
}

/// Acknowledgment returned by the intake endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IntakeResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

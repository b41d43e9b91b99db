use serde::{Deserialize, Serialize};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub profile_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceInsert {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub profile_id: Option<i64>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResponse {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(experience: Experience) -> Self {
        Self {
            id: experience.id,
            title: experience.title,
            company: experience.company,
            start_date: experience.start_date,
            end_date: experience.end_date,
        }
    }
}

// ───── Input ───────────────────────────────────────────────────────────

/// Dates are kept as the client sent them; no calendar checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<i64>,
}

impl NewExperience {
    pub fn prepare_for_insert(&self) -> ExperienceInsert {
        ExperienceInsert {
            title: self.title.clone(),
            company: self.company.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            profile_id: self.profile_id,
        }
    }
}

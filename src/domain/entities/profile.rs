use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::{
    education::{Education, EducationResponse},
    experience::{Experience, ExperienceResponse},
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInsert {
    pub name: String,
    pub bio: Option<String>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub experiences: Vec<ExperienceResponse>,
    pub educations: Vec<EducationResponse>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            bio: profile.bio,
            experiences: Vec::new(),
            educations: Vec::new(),
        }
    }
}

// ───── Input ───────────────────────────────────────────────────────────

/// Create payload for a profile.
///
/// `experience_id` and `education_id` must be present but are never stored:
/// there is no column for them on the profile table. Linking happens from the
/// child side through `profile_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,

    pub experience_id: i64,
    pub education_id: i64,
}

impl NewProfile {
    pub fn prepare_for_insert(&self) -> ProfileInsert {
        ProfileInsert {
            name: self.name.clone(),
            bio: self.bio.clone(),
        }
    }
}

// ───── Relationship Loading ─────────────────────────────────────────

/// Joins child rows onto their owning profiles.
///
/// Children whose `profile_id` is null or points at a profile outside
/// `profiles` are dropped. Each child list keeps ascending id order no matter
/// how the rows arrive.
pub fn attach_history(
    profiles: Vec<Profile>,
    experiences: Vec<Experience>,
    educations: Vec<Education>,
) -> Vec<ProfileResponse> {
    let mut experiences_by_owner: HashMap<i64, Vec<Experience>> = HashMap::new();
    for experience in experiences {
        if let Some(owner) = experience.profile_id {
            experiences_by_owner.entry(owner).or_default().push(experience);
        }
    }

    let mut educations_by_owner: HashMap<i64, Vec<Education>> = HashMap::new();
    for education in educations {
        if let Some(owner) = education.profile_id {
            educations_by_owner.entry(owner).or_default().push(education);
        }
    }

    profiles
        .into_iter()
        .map(|profile| {
            let mut experiences = experiences_by_owner.remove(&profile.id).unwrap_or_default();
            experiences.sort_by_key(|e| e.id);

            let mut educations = educations_by_owner.remove(&profile.id).unwrap_or_default();
            educations.sort_by_key(|e| e.id);

            let mut response = ProfileResponse::from(profile);
            response.experiences = experiences.into_iter().map(ExperienceResponse::from).collect();
            response.educations = educations.into_iter().map(EducationResponse::from).collect();
            response
        })
        .collect()
}

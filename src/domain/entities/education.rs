use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Education {
    pub id: i64,
    pub title: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub profile_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationInsert {
    pub title: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub profile_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationResponse {
    pub id: i64,
    pub title: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<Education> for EducationResponse {
    fn from(education: Education) -> Self {
        Self {
            id: education.id,
            title: education.title,
            institution: education.institution,
            degree: education.degree,
            start_date: education.start_date,
            end_date: education.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEducation {
    pub title: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<i64>,
}

impl NewEducation {
    pub fn prepare_for_insert(&self) -> EducationInsert {
        EducationInsert {
            title: self.title.clone(),
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            profile_id: self.profile_id,
        }
    }
}

//! Recommendation Data Types
//!
//! Defines the Data Transfer Objects (DTOs) returned by the recommendation
//! and detail endpoints.

use serde::{Deserialize, Serialize};

use crate::dataset::types::ScholarshipRecord;

/// Response body for `POST /predict`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub recommendations: Vec<RecommendationItem>,
}

/// One ranked recommendation: the categorical fields the caller filtered on
/// plus the similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub name: String,
    pub education_level: String,
    pub funding_type: String,
    pub continent: String,
    pub score: f32,
}

/// Full detail view returned by `GET /scholarship_details`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScholarshipDetails {
    pub name: String,
    pub education_level: String,
    pub funding_type: String,
    pub continent: String,
    pub country: String,
    pub deadline: String,
    pub description: String,
    pub link: String,
}

impl From<&ScholarshipRecord> for ScholarshipDetails {
    fn from(record: &ScholarshipRecord) -> Self {
        Self {
            name: record.name.clone(),
            education_level: record.education_level.clone(),
            funding_type: record.funding_type.clone(),
            continent: record.continent.clone(),
            country: record.country.clone(),
            deadline: record.deadline.clone(),
            description: record.description.clone(),
            link: record.link.clone(),
        }
    }
}

//! Recommendation HTTP Handlers
//!
//! Axum handlers for the two public endpoints. Both read the immutable
//! [`AppContext`] shared via an `Extension` layer; failures surface as
//! [`ApiError`] with a distinct status code per variant.

use std::sync::Arc;

use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;

use super::engine::{self, FilterQuery};
use super::types::{PredictResponse, RecommendationItem, ScholarshipDetails};
use crate::context::AppContext;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub funding_type: String,
    #[serde(default)]
    pub continent: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    #[serde(default)]
    pub scholarship_name: String,
}

pub async fn handle_predict(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let query = FilterQuery {
        education_level: req.education_level,
        funding_type: req.funding_type,
        continent: req.continent,
    };

    engine::validate(&query, &ctx.dataset).map_err(ApiError::Validation)?;

    let subset = engine::filter(&query, &ctx.dataset);
    let ranked = engine::rank(&subset, &ctx.dataset, &ctx.space);

    tracing::debug!(
        "predict: {} candidates, {} recommendations",
        subset.len(),
        ranked.len()
    );

    let recommendations = ranked
        .into_iter()
        .filter_map(|(index, score)| {
            ctx.dataset.get(index).map(|record| RecommendationItem {
                name: record.name.clone(),
                education_level: record.education_level.clone(),
                funding_type: record.funding_type.clone(),
                continent: record.continent.clone(),
                score,
            })
        })
        .collect();

    Ok(Json(PredictResponse { recommendations }))
}

pub async fn handle_scholarship_details(
    Extension(ctx): Extension<Arc<AppContext>>,
    Query(params): Query<DetailsParams>,
) -> Result<Json<ScholarshipDetails>, ApiError> {
    let name = params.scholarship_name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation(
            "scholarship_name is required".to_string(),
        ));
    }

    match engine::details(name, &ctx.dataset) {
        Some(record) => Ok(Json(ScholarshipDetails::from(record))),
        None => Err(ApiError::NotFound(format!(
            "no scholarship named {:?}",
            name
        ))),
    }
}

//! Recommendation Engine
//!
//! The filter, ranking and lookup stages of the pipeline. All three operate
//! on immutable references and are deterministic for identical inputs.

use crate::dataset::normalize;
use crate::dataset::types::{Dataset, ScholarshipRecord};
use crate::vectorizer::space::{cosine, VectorSpace};

/// Maximum number of recommendations returned per query.
pub const TOP_K: usize = 10;

/// The three categorical constraints of a recommendation query. An empty
/// string means "no constraint" on that dimension.
#[derive(Debug, Clone)]
pub struct FilterQuery {
    pub education_level: String,
    pub funding_type: String,
    pub continent: String,
}

impl FilterQuery {
    fn matches(&self, record: &ScholarshipRecord) -> bool {
        field_matches(&self.education_level, &record.education_level)
            && field_matches(&self.funding_type, &record.funding_type)
            && field_matches(&self.continent, &record.continent)
    }
}

fn field_matches(wanted: &str, actual: &str) -> bool {
    let wanted = normalize(wanted);
    wanted.is_empty() || wanted == normalize(actual)
}

/// Rejects non-empty filter values that appear nowhere in the corresponding
/// dataset column. The categorical fields form a small closed set, so an
/// unknown value is a malformed request rather than an empty result.
pub fn validate(query: &FilterQuery, dataset: &Dataset) -> Result<(), String> {
    let columns: [(&str, &str, fn(&ScholarshipRecord) -> &str); 3] = [
        ("education_level", &query.education_level, |r| {
            r.education_level.as_str()
        }),
        ("funding_type", &query.funding_type, |r| r.funding_type.as_str()),
        ("continent", &query.continent, |r| r.continent.as_str()),
    ];

    for (field, wanted, extract) in columns {
        let wanted = normalize(wanted);
        if wanted.is_empty() {
            continue;
        }
        let known = dataset
            .records()
            .iter()
            .any(|record| normalize(extract(record)) == wanted);
        if !known {
            return Err(format!("unknown {} value {:?}", field, wanted));
        }
    }

    Ok(())
}

/// Narrows the dataset to records matching every non-empty constraint.
///
/// Returns record indices in dataset order. An empty result is valid and
/// simply yields no recommendations downstream.
pub fn filter(query: &FilterQuery, dataset: &Dataset) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(record))
        .map(|(index, _)| index)
        .collect()
}

/// Ranks the filtered subset by cosine similarity to its own TF-IDF centroid.
///
/// The centroid acts as the representative query vector for the requested
/// category combination; records outside the subset are already filter
/// mismatches and are not candidates. The sort is stable and descending, so
/// ties keep dataset order, and the result is capped at [`TOP_K`].
pub fn rank(subset: &[usize], dataset: &Dataset, space: &VectorSpace) -> Vec<(usize, f32)> {
    let Some(query_vector) = space.centroid(subset) else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, f32)> = subset
        .iter()
        .filter(|&&index| dataset.get(index).is_some())
        .filter_map(|&index| {
            space
                .row(index)
                .map(|row| (index, cosine(&query_vector, row)))
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(TOP_K);
    scored
}

/// Resolves a scholarship name to its record, case-insensitively. A miss
/// maps to `NotFound` at the HTTP boundary.
pub fn details<'a>(name: &str, dataset: &'a Dataset) -> Option<&'a ScholarshipRecord> {
    dataset.find_by_name(name)
}

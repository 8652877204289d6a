//! Wire types for the jService trivia API.
//!
//! Only the two endpoints the board needs are covered: a one-category page of the category listing, used as a
//! random probe, and the full detail of a single category.

use jeopardito_core::{CategoryId, CategoryRecord, CategorySample, ClueRecord};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://jservice.io";

/// Random probes pick a listing offset in `0..SAMPLE_OFFSET_RANGE`.
pub const SAMPLE_OFFSET_RANGE: u32 = 100;

/// Entry of `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: u64,
    pub title: String,
    pub clues_count: usize,
}

/// Body of `GET /api/category`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub clues_count: usize,
    #[serde(default)]
    pub clues: Vec<ClueDetails>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueDetails {
    #[serde(default)]
    pub id: Option<u64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
    #[serde(default)]
    pub airdate: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
}

impl From<CategorySummary> for CategorySample {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: CategoryId(summary.id),
            clues_count: summary.clues_count,
        }
    }
}

impl From<ClueDetails> for ClueRecord {
    fn from(clue: ClueDetails) -> Self {
        Self {
            question: clue.question,
            answer: clue.answer,
        }
    }
}

impl From<CategoryDetails> for CategoryRecord {
    fn from(details: CategoryDetails) -> Self {
        Self {
            id: CategoryId(details.id),
            title: details.title,
            clues: details.clues.into_iter().map(Into::into).collect(),
        }
    }
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn categories_url(base: &str, offset: u32) -> String {
    format!("{}/api/categories?count=1&offset={}", trim_base(base), offset)
}

pub fn category_url(base: &str, id: CategoryId) -> String {
    format!("{}/api/category?id={}", trim_base(base), id.0)
}

/// Parses a category listing page, returning its first entry.
pub fn decode_sample(text: &str) -> serde_json::Result<Option<CategorySample>> {
    let page: Vec<CategorySummary> = serde_json::from_str(text)?;
    Ok(page.into_iter().next().map(Into::into))
}

pub fn decode_category(text: &str) -> serde_json::Result<CategoryRecord> {
    let details: CategoryDetails = serde_json::from_str(text)?;
    Ok(details.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[{"id":11531,"title":"mixed bag","clues_count":5}]"#;

    const CATEGORY: &str = r#"{
        "id": 11531,
        "title": "mixed bag",
        "clues_count": 2,
        "clues": [
            {"id": 87135, "answer": "Shakespeare", "question": "Hamlet author", "value": 200,
             "airdate": "2009-07-22T12:00:00.000Z", "category_id": 11531, "game_id": 3127, "invalid_count": null},
            {"id": 87136, "answer": "Plath", "question": "Bell Jar author", "value": null,
             "airdate": "2009-07-22T12:00:00.000Z", "category_id": 11531, "game_id": 3127, "invalid_count": null}
        ]
    }"#;

    #[test]
    fn listing_page_yields_first_sample() {
        let sample = decode_sample(LISTING).unwrap();

        assert_eq!(
            sample,
            Some(CategorySample {
                id: CategoryId(11531),
                clues_count: 5,
            })
        );
    }

    #[test]
    fn empty_listing_page_yields_nothing() {
        assert_eq!(decode_sample("[]").unwrap(), None);
    }

    #[test]
    fn category_details_convert_to_record() {
        let record = decode_category(CATEGORY).unwrap();

        assert_eq!(record.id, CategoryId(11531));
        assert_eq!(record.title, "mixed bag");
        assert_eq!(
            record.clues,
            vec![
                ClueRecord {
                    question: "Hamlet author".to_string(),
                    answer: "Shakespeare".to_string(),
                },
                ClueRecord {
                    question: "Bell Jar author".to_string(),
                    answer: "Plath".to_string(),
                },
            ]
        );
    }

    #[test]
    fn category_without_clues_field_is_empty() {
        let record = decode_category(r#"{"id": 1, "title": "none"}"#).unwrap();

        assert!(record.clues.is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(decode_category("<html>").is_err());
        assert!(decode_sample(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn urls_ignore_trailing_slash() {
        assert_eq!(
            categories_url("https://jservice.io/", 42),
            "https://jservice.io/api/categories?count=1&offset=42"
        );
        assert_eq!(
            category_url(DEFAULT_API_BASE, CategoryId(7)),
            "https://jservice.io/api/category?id=7"
        );
    }
}

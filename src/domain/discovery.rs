//! Data shapes exchanged with the library discovery service.
//!
//! These types mirror the service's JSON contract. The client treats them as
//! plain data: it never interprets the normalized query, it only displays the
//! candidates and notices.

use serde::{Deserialize, Serialize};

/// Body of a discovery call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query, already trimmed by the reducer.
    pub query: String,
}

impl SearchRequest {
    /// Creates a request for the given query text.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// The service's interpretation of a messy query.
///
/// Opaque to the client; carried along so it can be logged and shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedQueryDetail {
    #[serde(rename = "titleOpt", alias = "title", default)]
    pub title: Option<String>,

    #[serde(rename = "authorOpt", alias = "author", default)]
    pub author: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(rename = "yearOpt", alias = "year", default)]
    pub year: Option<i32>,

    #[serde(rename = "ambiguity", alias = "ambiguityNote", default)]
    pub ambiguity_note: Option<String>,
}

/// One ranked book match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub work_title: String,
    pub work_id: String,
    pub author: String,
    pub author_id: String,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Why the service ranked this work where it did.
    pub explanation: String,
}

/// Successful result of a discovery call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub normalized_query: ExtractedQueryDetail,

    /// Candidates in ranked order, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Human-readable notices (for example which AI provider answered).
    /// These are informational, never errors.
    #[serde(default)]
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_query_object() {
        let json = serde_json::to_string(&SearchRequest::new("tolkien hobbit")).unwrap();
        assert_eq!(json, r#"{"query":"tolkien hobbit"}"#);
    }

    #[test]
    fn response_decodes_service_payload() {
        let payload = r#"{
            "normalizedQuery": {
                "titleOpt": "The Hobbit",
                "authorOpt": "Tolkien",
                "keywords": ["illustrated"],
                "yearOpt": 1937,
                "ambiguity": null
            },
            "candidates": [{
                "workTitle": "The Hobbit",
                "workId": "/works/OL262758W",
                "author": "J.R.R. Tolkien",
                "authorId": "/authors/OL26320A",
                "firstPublishYear": 1937,
                "coverUrl": null,
                "explanation": "Exact title match."
            }],
            "messages": ["AI provider: Gemini"]
        }"#;

        let response: SearchResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(response.normalized_query.title.as_deref(), Some("The Hobbit"));
        assert_eq!(response.normalized_query.year, Some(1937));
        assert_eq!(response.normalized_query.keywords, vec!["illustrated"]);
        assert!(response.normalized_query.ambiguity_note.is_none());
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].work_id, "/works/OL262758W");
        assert!(response.candidates[0].cover_url.is_none());
        assert_eq!(response.messages, vec!["AI provider: Gemini"]);
    }

    #[test]
    fn response_tolerates_missing_lists_and_options() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"normalizedQuery": {}}"#).unwrap();
        assert_eq!(response, SearchResponse::default());
    }

    #[test]
    fn detail_accepts_spelled_out_field_names() {
        let detail: ExtractedQueryDetail = serde_json::from_str(
            r#"{"title": "Dune", "author": "Herbert", "year": 1965, "ambiguityNote": "two editions"}"#,
        )
        .unwrap();
        assert_eq!(detail.title.as_deref(), Some("Dune"));
        assert_eq!(detail.author.as_deref(), Some("Herbert"));
        assert_eq!(detail.year, Some(1965));
        assert_eq!(detail.ambiguity_note.as_deref(), Some("two editions"));
    }

    #[test]
    fn candidate_without_cover_or_year() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"workTitle":"X","workId":"W","author":"A","authorId":"A1","explanation":"x"}"#,
        )
        .unwrap();
        assert!(candidate.cover_url.is_none());
        assert!(candidate.first_publish_year.is_none());
    }
}

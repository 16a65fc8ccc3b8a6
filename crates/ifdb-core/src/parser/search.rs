//! Search results parser for IFDB
//!
//! Decodes the `search?json` payload into an ordered candidate list.

use crate::error::{IfdbError, Result};
use crate::types::{Candidate, SearchResponse};

/// Parses a search response body and returns the candidates in catalog order
///
/// # Arguments
/// * `body` - Raw JSON body from the search endpoint
///
/// # Returns
/// Vector of `Candidate` structs, empty if the catalog found nothing
///
/// # Errors
/// Returns `DecodeError` if the body is not a search document
pub fn parse_search_results(body: &str) -> Result<Vec<Candidate>> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| IfdbError::DecodeError(e.to_string()))?;

    Ok(response.games)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "games": [
            {"tuid": "0dbnusxunq7fw5ro", "title": "Zork I", "devsys": "ZIL",
             "starRating": 3.5, "numRatings": 412},
            {"tuid": "op0uw1gn1tjqmjt7", "title": "Zork II", "devsys": "ZIL",
             "starRating": 3.4, "numRatings": 150},
            {"tuid": "8ku5gn4tygmaxhvr", "title": "Zork: The Undiscovered Underground",
             "devsys": "Inform 6", "starRating": 3.0, "numRatings": 57}
        ]
    }"#;

    #[test]
    fn test_parse_preserves_order() {
        let results = parse_search_results(SAMPLE).expect("valid search body");
        let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Zork I", "Zork II", "Zork: The Undiscovered Underground"]
        );
        assert_eq!(results[2].devsys, "Inform 6");
    }

    #[test]
    fn test_parse_empty_games() {
        let results = parse_search_results(r#"{"games": []}"#).expect("valid");
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_missing_games_key() {
        let results = parse_search_results("{}").expect("valid");
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = r#"{"games": [{"tuid": "x", "title": "T", "coverArtLink": "https://a"}],
                       "searchTime": 0.2}"#;
        let results = parse_search_results(body).expect("valid");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_parse_html_is_decode_error() {
        let result = parse_search_results("<html><body>Maintenance</body></html>");
        match result {
            Err(IfdbError::DecodeError(_)) => {}
            other => panic!("Expected DecodeError, got {:?}", other),
        }
    }
}

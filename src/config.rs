//! JSON parameter files for the extractor.
//!
//! Missing keys fall back to [`LsrParams::default`]:
//!
//! ```json
//! { "magnitudeThreshold": 0.5, "connectivity": "eight" }
//! ```
use crate::error::LsrError;
use crate::extractor::LsrParams;
use std::fs;
use std::path::Path;

pub fn load_params(path: &Path) -> Result<LsrParams, LsrError> {
    let data = fs::read_to_string(path).map_err(|source| LsrError::ReadParams {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| LsrError::ParseParams {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::VoteIndexing;
    use crate::regions::Connectivity;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lsr-params-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = scratch_file(
            "partial.json",
            r#"{ "magnitudeThreshold": 1.25, "connectivity": "eight", "voteIndexing": "aliased" }"#,
        );
        let params = load_params(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(params.magnitude_threshold, 1.25);
        assert_eq!(params.connectivity, Connectivity::Eight);
        assert_eq!(params.vote_indexing, VoteIndexing::Aliased);
        assert_eq!(params.min_region_pixels, 5);
        assert!(params.ignore_numeric_warnings);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("lsr-params-does-not-exist.json");
        let err = load_params(&path).unwrap_err();
        assert!(matches!(err, LsrError::ReadParams { .. }));
        assert!(err.to_string().contains("lsr-params-does-not-exist.json"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = scratch_file("broken.json", "{ magnitudeThreshold: ");
        let err = load_params(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, LsrError::ParseParams { .. }));
    }
}

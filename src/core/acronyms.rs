use crate::core::{AcronymEntry, Storage};
use crate::utils::error::{ImpactError, Result};
use std::collections::HashMap;

/// Lowercased acronym -> canonical spelling.
#[derive(Debug, Clone, Default)]
pub struct AcronymIndex {
    canonical: HashMap<String, String>,
}

impl AcronymIndex {
    pub fn new(entries: &[AcronymEntry]) -> Self {
        let canonical = entries
            .iter()
            .map(|entry| (entry.acronym.to_lowercase(), entry.acronym.clone()))
            .collect();
        Self { canonical }
    }

    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.canonical.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

pub fn parse_acronyms(path: &str, data: &[u8]) -> Result<Vec<AcronymEntry>> {
    serde_json::from_slice(data).map_err(|e| ImpactError::AcronymLoadError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Reads the acronym list once at startup. Any failure is fatal to the caller.
pub async fn load_acronyms<S: Storage>(storage: &S, path: &str) -> Result<Vec<AcronymEntry>> {
    let data = storage
        .read_file(path)
        .await
        .map_err(|e| ImpactError::AcronymLoadError {
            path: storage.location(path),
            message: e.to_string(),
        })?;

    let entries = parse_acronyms(&storage.location(path), &data)?;
    tracing::debug!("Loaded {} acronyms from {}", entries.len(), storage.location(path));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(acronym: &str) -> AcronymEntry {
        AcronymEntry {
            acronym: acronym.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = AcronymIndex::new(&[entry("API"), entry("Node.js")]);

        assert_eq!(index.canonical("api"), Some("API"));
        assert_eq!(index.canonical("ApI"), Some("API"));
        assert_eq!(index.canonical("NODE.JS"), Some("Node.js"));
        assert_eq!(index.canonical("auth"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let index = AcronymIndex::new(&[entry("Poc"), entry("POC")]);
        assert_eq!(index.canonical("poc"), Some("POC"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_parse_acronyms() {
        let json = br#"[{"acronym": "EKS", "description": "Elastic Kubernetes Service"}]"#;
        let entries = parse_acronyms("acronyms.json", json).unwrap();
        assert_eq!(entries, vec![AcronymEntry {
            acronym: "EKS".to_string(),
            description: "Elastic Kubernetes Service".to_string(),
        }]);
    }

    #[test]
    fn test_parse_acronyms_rejects_malformed_json() {
        let err = parse_acronyms("acronyms.json", b"{not json").unwrap_err();
        match err {
            ImpactError::AcronymLoadError { path, .. } => assert_eq!(path, "acronyms.json"),
            other => panic!("expected AcronymLoadError, got {:?}", other),
        }
    }
}

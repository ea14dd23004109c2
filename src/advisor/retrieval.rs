use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRecord {
    pub source: String,
    pub title: String,
    pub content: String,
}

/// Stub retrieval: one placeholder record echoing the query.
pub fn retrieve_documents(query: &str) -> Vec<DocumentRecord> {
    vec![DocumentRecord {
        source: "stub".into(),
        title: "No retrieval backend configured".into(),
        content: format!("Placeholder retrieval result for query: {query}"),
    }]
}

use serde::{Deserialize, Serialize};

use crate::advisor::retrieval::DocumentRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub verified: bool,
    pub confidence: f64,
    pub notes: String,
    pub records_count: usize,
}

/// Stub verification: nothing is verified yet, only counted.
pub fn verify_information(records: &[DocumentRecord]) -> VerificationReport {
    VerificationReport {
        verified: false,
        confidence: 0.0,
        notes: "Verification pipeline is stubbed.".into(),
        records_count: records.len(),
    }
}

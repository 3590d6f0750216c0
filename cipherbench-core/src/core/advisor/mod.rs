//! Algorithm recommendation
//!
//! A fixed rule table mapping data characteristics to a suggested
//! algorithm. Deliberately simple; the intent is to replace this with a
//! trained model once enough benchmark data exists.

use serde::Serialize;

use crate::core::cipher::CipherAlgorithm;

/// A suggested algorithm with a human-readable justification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_algorithm: CipherAlgorithm,
    pub reason: String,
}

/// Recommend an algorithm for the given data size (KB) and type tag.
///
/// Pure function; the rules are evaluated in order, first match wins:
/// small payloads get AES, mid-size text gets Blowfish, everything else
/// gets AES as the all-around choice.
pub fn recommend(data_size_kb: f64, data_type: &str) -> Recommendation {
    let recommended_algorithm = if data_size_kb <= 10.0 {
        CipherAlgorithm::Aes
    } else if data_size_kb <= 50.0 {
        if data_type == "text" {
            CipherAlgorithm::Blowfish
        } else {
            CipherAlgorithm::Aes
        }
    } else {
        CipherAlgorithm::Aes
    };

    let reason = format!(
        "Based on your {}KB {} data, {} provides the best balance of security and performance.",
        data_size_kb,
        data_type,
        recommended_algorithm.id().to_uppercase()
    );

    Recommendation {
        recommended_algorithm,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        assert_eq!(recommend(5.0, "binary").recommended_algorithm, CipherAlgorithm::Aes);
        assert_eq!(recommend(30.0, "text").recommended_algorithm, CipherAlgorithm::Blowfish);
        assert_eq!(recommend(30.0, "binary").recommended_algorithm, CipherAlgorithm::Aes);
        assert_eq!(recommend(100.0, "text").recommended_algorithm, CipherAlgorithm::Aes);
    }

    #[test]
    fn test_rule_boundaries_are_inclusive() {
        // 10KB still counts as small, 50KB still counts as mid-size.
        assert_eq!(recommend(10.0, "text").recommended_algorithm, CipherAlgorithm::Aes);
        assert_eq!(recommend(50.0, "text").recommended_algorithm, CipherAlgorithm::Blowfish);
        assert_eq!(recommend(50.1, "text").recommended_algorithm, CipherAlgorithm::Aes);
    }

    #[test]
    fn test_reason_interpolates_inputs() {
        let recommendation = recommend(30.0, "text");

        assert!(recommendation.reason.contains("30KB"));
        assert!(recommendation.reason.contains("text"));
        assert!(recommendation.reason.contains("BLOWFISH"));
    }

    #[test]
    fn test_serializes_camel_case_with_wire_id() {
        let json = serde_json::to_value(recommend(5.0, "json"))
            .expect("Failed to serialize recommendation");

        assert_eq!(json["recommendedAlgorithm"], "aes");
        assert!(json["reason"].is_string());
    }
}

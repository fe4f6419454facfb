//! Response shapes returned by the prediction service.
//!
//! The service is an opaque collaborator: the client never re-derives
//! any of these fields (in particular the `not_in_database` flag, which
//! the service computes from its own confidence threshold). This module
//! only decodes what comes back and enforces one reading rule:
//! a response flagged `not_in_database` has no authoritative label.

use serde::{Deserialize, Serialize};

/// Maximum number of ranked alternatives shown to the user.
///
/// The service promises at most five entries in `all_predictions`;
/// [`PredictionResponse::top`] caps display at five regardless.
pub const MAX_RANKED: usize = 5;

/// Fallback text shown when a `not_in_database` response carries no
/// message of its own.
pub const FALLBACK_MESSAGE: &str = "รูปภาพนี้ไม่ตรงกับอาหารไทยที่อยู่ในระบบ";

/// One ranked `(label, confidence)` pair from `all_predictions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    /// Class label, as the service spells it (Thai dish names).
    pub class: String,
    /// Confidence in [0,1] for this label.
    pub confidence: f64,
}

/// JSON body of a successful `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Predicted label. Absent when the service found no confident match.
    #[serde(default)]
    pub prediction: Option<String>,

    /// Confidence in [0,1] for the top label.
    pub confidence: f64,

    /// Optional human-readable message from the service.
    #[serde(default)]
    pub message: Option<String>,

    /// Set when the input did not sufficiently match any known category.
    /// Absent on the wire means `false`.
    #[serde(default)]
    pub not_in_database: bool,

    /// Ranked alternatives, sorted by the service in descending
    /// confidence. The client preserves this order and never re-sorts.
    #[serde(default)]
    pub all_predictions: Vec<ClassScore>,
}

/// The client-side reading of a response.
///
/// Rendering code goes through this accessor instead of touching
/// `prediction` directly, so a `not_in_database` response can never be
/// presented as a confident match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict<'a> {
    /// The service matched a known dish.
    Match {
        /// The predicted label.
        label: &'a str,
        /// Confidence in [0,1].
        confidence: f64,
    },
    /// The input is not in the service's knowledge base (or the service
    /// returned no label at all). The label, if any, is not authoritative.
    NotInDatabase {
        /// Message to show instead of a label.
        message: &'a str,
        /// Highest confidence the service saw, still below its threshold.
        confidence: f64,
    },
}

impl PredictionResponse {
    /// How this response should be presented.
    ///
    /// A response with `not_in_database` set, or with no label at all,
    /// yields [`Verdict::NotInDatabase`] carrying the service's message
    /// (or [`FALLBACK_MESSAGE`] when it sent none).
    #[must_use]
    pub fn verdict(&self) -> Verdict<'_> {
        match (&self.prediction, self.not_in_database) {
            (Some(label), false) => Verdict::Match {
                label,
                confidence: self.confidence,
            },
            _ => Verdict::NotInDatabase {
                message: self.message.as_deref().unwrap_or(FALLBACK_MESSAGE),
                confidence: self.confidence,
            },
        }
    }

    /// The ranked alternatives to display, in the order the service
    /// supplied them, capped at [`MAX_RANKED`] entries.
    #[must_use]
    pub fn top(&self) -> &[ClassScore] {
        let n = self.all_predictions.len().min(MAX_RANKED);
        &self.all_predictions[..n]
    }
}

/// JSON body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status string, `"ok"` when healthy.
    pub status: String,
    /// Whether the classification model finished loading.
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthResponse {
    /// Whether the service reported itself ready to classify.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == "ok" && self.model_loaded
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_confident_match() {
        let body = r#"{
            "prediction": "ผัดไทย",
            "confidence": 0.87,
            "not_in_database": false,
            "all_predictions": [
                {"class": "ผัดไทย", "confidence": 0.87},
                {"class": "ผัดกะเพรา", "confidence": 0.07}
            ]
        }"#;
        let resp: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.prediction.as_deref(), Some("ผัดไทย"));
        assert!(!resp.not_in_database);
        assert_eq!(resp.all_predictions.len(), 2);
        assert!(matches!(
            resp.verdict(),
            Verdict::Match { label: "ผัดไทย", confidence } if (confidence - 0.87).abs() < 1e-9
        ));
    }

    #[test]
    fn decodes_with_optional_fields_absent() {
        // Minimal body: only `confidence` is required on the wire.
        let resp: PredictionResponse = serde_json::from_str(r#"{"confidence": 0.3}"#).unwrap();
        assert_eq!(resp.prediction, None);
        assert_eq!(resp.message, None);
        assert!(!resp.not_in_database);
        assert!(resp.all_predictions.is_empty());
    }

    #[test]
    fn not_in_database_overrides_label() {
        // Even if the service echoes a label alongside the flag, the
        // verdict must be the fallback, never the label.
        let body = r#"{
            "prediction": "ต้มยำ",
            "confidence": 0.42,
            "message": "ไม่พบอาหารนี้ในฐานความรู้",
            "not_in_database": true,
            "all_predictions": []
        }"#;
        let resp: PredictionResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            resp.verdict(),
            Verdict::NotInDatabase { message: "ไม่พบอาหารนี้ในฐานความรู้", confidence }
                if (confidence - 0.42).abs() < 1e-9
        ));
    }

    #[test]
    fn missing_label_falls_back_even_without_flag() {
        let resp: PredictionResponse =
            serde_json::from_str(r#"{"prediction": null, "confidence": 0.1}"#).unwrap();
        assert!(matches!(
            resp.verdict(),
            Verdict::NotInDatabase { message, .. } if message == FALLBACK_MESSAGE
        ));
    }

    #[test]
    fn top_preserves_order_and_caps_at_five() {
        let scores: Vec<ClassScore> = (0..7)
            .map(|i| ClassScore {
                class: format!("dish-{i}"),
                confidence: 1.0 - f64::from(i) * 0.1,
            })
            .collect();
        let resp = PredictionResponse {
            prediction: Some("dish-0".into()),
            confidence: 1.0,
            message: None,
            not_in_database: false,
            all_predictions: scores,
        };
        let top = resp.top();
        assert_eq!(top.len(), MAX_RANKED);
        for (i, entry) in top.iter().enumerate() {
            assert_eq!(entry.class, format!("dish-{i}"), "order must be preserved");
        }
    }

    #[test]
    fn top_with_fewer_than_five_entries() {
        let resp = PredictionResponse {
            prediction: None,
            confidence: 0.2,
            message: None,
            not_in_database: true,
            all_predictions: vec![ClassScore {
                class: "โรตี".into(),
                confidence: 0.2,
            }],
        };
        assert_eq!(resp.top().len(), 1);
    }

    #[test]
    fn health_readiness() {
        let healthy: HealthResponse =
            serde_json::from_str(r#"{"status": "ok", "model_loaded": true}"#).unwrap();
        assert!(healthy.is_ready());

        let loading: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(!loading.is_ready());
    }
}

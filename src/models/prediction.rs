use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Deserialize;

/// One crop's suitability entry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropScore {
    pub crop: String,
    pub suitability_score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: Vec<String>,
}

/// Wire shapes accepted from `/predict/`. Older backend revisions returned a
/// bare score array; newer ones wrap it in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictionPayload {
    Scores(Vec<CropScore>),
    Detailed {
        #[serde(default)]
        all_scores: Vec<CropScore>,
        #[serde(default)]
        recommended_crops: Vec<String>,
    },
}

/// Normalized prediction: scores de-duplicated and ranked once at the API
/// boundary, so rendering is a pure read.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    scores: Vec<CropScore>,
    recommended_crops: Vec<String>,
}

impl From<PredictionPayload> for Prediction {
    fn from(payload: PredictionPayload) -> Self {
        let (raw, recommended_crops) = match payload {
            PredictionPayload::Scores(scores) => (scores, Vec::new()),
            PredictionPayload::Detailed {
                all_scores,
                recommended_crops,
            } => (all_scores, recommended_crops),
        };

        Self {
            scores: rank(raw),
            recommended_crops,
        }
    }
}

/// De-duplicates by crop name keeping the first occurrence, then sorts by
/// confidence descending with ties broken by crop name ascending.
fn rank(raw: Vec<CropScore>) -> Vec<CropScore> {
    let mut seen = HashSet::new();
    let mut scores: Vec<CropScore> = raw
        .into_iter()
        .filter(|score| seen.insert(score.crop.clone()))
        .collect();

    scores.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.crop.cmp(&b.crop))
    });

    scores
}

impl Prediction {
    /// Ranked, de-duplicated scores.
    pub fn scores(&self) -> &[CropScore] {
        &self.scores
    }

    /// Crop names the backend itself flagged as recommended.
    pub fn recommended_crops(&self) -> &[String] {
        &self.recommended_crops
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Top-ranked score regardless of confidence.
    pub fn top(&self) -> Option<&CropScore> {
        self.scores.first()
    }

    /// The top-ranked crop, only if its confidence clears `threshold`.
    pub fn recommendation(&self, threshold: f64) -> Option<&CropScore> {
        self.top().filter(|score| score.confidence >= threshold)
    }

    /// Up to `limit` explanation strings for the top-ranked crop.
    pub fn explanations(&self, limit: usize) -> &[String] {
        self.top()
            .map_or(&[][..], |score| &score.explanation[..score.explanation.len().min(limit)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(crop: &str, confidence: f64) -> CropScore {
        CropScore {
            crop: crop.to_string(),
            suitability_score: confidence / 10.0,
            confidence,
            explanation: Vec::new(),
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let prediction = Prediction::from(PredictionPayload::Scores(vec![
            score("Rice", 80.0),
            score("Rice", 60.0),
            score("Maize", 90.0),
        ]));

        let ranked = prediction.scores();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].crop, "Maize");
        assert_eq!(ranked[0].confidence, 90.0);
        assert_eq!(ranked[1].crop, "Rice");
        assert_eq!(ranked[1].confidence, 80.0);
    }

    #[test]
    fn test_confidence_ties_break_by_crop_name() {
        let prediction = Prediction::from(PredictionPayload::Scores(vec![
            score("Mint", 75.0),
            score("Basil", 75.0),
        ]));

        let names: Vec<&str> = prediction.scores().iter().map(|s| s.crop.as_str()).collect();
        assert_eq!(names, vec!["Basil", "Mint"]);
    }

    #[test]
    fn test_recommendation_thresholding() {
        let high = Prediction::from(PredictionPayload::Scores(vec![score("Maize", 90.0)]));
        assert_eq!(high.recommendation(74.0).unwrap().crop, "Maize");

        let low = Prediction::from(PredictionPayload::Scores(vec![score("Maize", 50.0)]));
        assert!(low.recommendation(74.0).is_none());
    }

    #[test]
    fn test_boundary_confidence_is_recommended() {
        let prediction = Prediction::from(PredictionPayload::Scores(vec![score("Basil", 74.0)]));
        assert!(prediction.recommendation(74.0).is_some());
    }

    #[test]
    fn test_explanations_capped() {
        let mut entry = score("Lettuce", 88.0);
        entry.explanation = vec![
            "Performs well in moderate temperatures".into(),
            "Thrives in high humidity".into(),
            "Prefers controlled sunlight".into(),
            "Suitable under given environmental conditions".into(),
        ];
        let prediction = Prediction::from(PredictionPayload::Scores(vec![entry]));

        assert_eq!(prediction.explanations(3).len(), 3);
    }

    #[test]
    fn test_empty_payload() {
        let prediction = Prediction::from(PredictionPayload::Detailed {
            all_scores: Vec::new(),
            recommended_crops: Vec::new(),
        });
        assert!(prediction.is_empty());
        assert!(prediction.top().is_none());
        assert!(prediction.explanations(3).is_empty());
    }
}

use serde::Serialize;

use super::classify_error::ClassifyError;
use super::mask_label::{MaskLabel, LABELS};

/// Result of classifying one face: the top label and its raw model score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MaskClassification {
    #[serde(rename = "mask")]
    label: MaskLabel,
    #[serde(rename = "mask_probability")]
    probability: f32,
}

impl MaskClassification {
    /// Pick the arg-max of a model score vector.
    ///
    /// The score vector must hold one finite value per label. On ties the
    /// lowest index wins. The probability is the score itself, not
    /// renormalized.
    pub fn from_scores(scores: &[f32]) -> Result<Self, ClassifyError> {
        if scores.len() != LABELS.len() {
            return Err(ClassifyError::Inference(format!(
                "expected {} scores, got {}",
                LABELS.len(),
                scores.len()
            )));
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(ClassifyError::Inference(format!(
                "model produced non-finite score {bad}"
            )));
        }

        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }

        Ok(Self {
            label: LABELS[best],
            probability: scores[best],
        })
    }

    pub fn label(&self) -> MaskLabel {
        self.label
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::without_mask([0.8, 0.15, 0.05], MaskLabel::WithoutMask, 0.8)]
    #[case::with_mask([0.1, 0.7, 0.2], MaskLabel::WithMask, 0.7)]
    #[case::incorrect([0.2, 0.3, 0.5], MaskLabel::MaskWearedIncorrect, 0.5)]
    fn test_from_scores_picks_argmax(
        #[case] scores: [f32; 3],
        #[case] label: MaskLabel,
        #[case] probability: f32,
    ) {
        let result = MaskClassification::from_scores(&scores).unwrap();
        assert_eq!(result.label(), label);
        assert_relative_eq!(result.probability(), probability);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        let result = MaskClassification::from_scores(&[0.4, 0.4, 0.2]).unwrap();
        assert_eq!(result.label(), MaskLabel::WithoutMask);
    }

    #[test]
    fn test_probability_is_not_renormalized() {
        let result = MaskClassification::from_scores(&[2.0, 6.0, 2.0]).unwrap();
        assert_eq!(result.label(), MaskLabel::WithMask);
        assert_relative_eq!(result.probability(), 6.0);
    }

    #[rstest]
    #[case::too_few(vec![0.5, 0.5])]
    #[case::too_many(vec![0.25, 0.25, 0.25, 0.25])]
    #[case::empty(vec![])]
    fn test_wrong_score_count_is_inference_error(#[case] scores: Vec<f32>) {
        let err = MaskClassification::from_scores(&scores).unwrap_err();
        assert!(matches!(err, ClassifyError::Inference(_)));
    }

    #[test]
    fn test_nan_score_is_inference_error() {
        let err = MaskClassification::from_scores(&[f32::NAN, 0.2, 0.1]).unwrap_err();
        assert!(matches!(err, ClassifyError::Inference(_)));
    }

    #[test]
    fn test_serializes_as_mask_record() {
        let result = MaskClassification::from_scores(&[0.25, 0.5, 0.25]).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["mask"], "with_mask");
        assert_relative_eq!(json["mask_probability"].as_f64().unwrap(), 0.5);
    }
}

use crate::image_classifier::interface::Classification;
use tract_onnx::prelude::*;

/// Ranks a classifier output of shape `[N]` or `[1, N]`, optionally turning
/// logits into probabilities first.
pub fn rank_output(
    output: tract_ndarray::ArrayViewD<'_, f32>,
    labels: &[String],
    apply_softmax: bool,
) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
    let scores: Vec<f32> = match output.shape() {
        [_] | [1, _] => output.iter().copied().collect(),
        shape => return Err(format!("Unexpected output shape {:?}", shape).into()),
    };

    let scores = if apply_softmax {
        softmax(&scores)
    } else {
        scores
    };

    Ok(rank_scores(&scores, labels))
}

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return scores.to_vec();
    }

    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().filter(|e| e.is_finite()).sum();
    exps.iter().map(|e| e / sum).collect()
}

/// Pairs each score with its label and sorts best first. Indices past the end
/// of `labels` are named `class_<index>`.
pub fn rank_scores(scores: &[f32], labels: &[String]) -> Vec<Classification> {
    let mut classifications: Vec<Classification> = scores
        .iter()
        .enumerate()
        .map(|(idx, &confidence)| Classification {
            label: labels
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("class_{}", idx)),
            confidence,
        })
        .collect();

    classifications.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
    classifications
}

fn rank_key(classification: &Classification) -> f32 {
    if classification.confidence.is_nan() {
        f32::NEG_INFINITY
    } else {
        classification.confidence
    }
}

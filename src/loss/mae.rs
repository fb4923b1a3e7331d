use crate::error::{ensure_len, Result};

/// Mean absolute error.
pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted - expected|)
    pub fn loss(expected: &[f64], predicted: &[f64]) -> Result<f64> {
        ensure_len("mae", expected.len(), predicted.len())?;
        if predicted.is_empty() {
            return Ok(0.0);
        }
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected)
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n)
    }

    /// Per-output subgradient: sign(p - y) / n  (0 when equal)
    pub fn derivative(expected: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
        ensure_len("mae derivative", expected.len(), predicted.len())?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected)
            .map(|(p, y)| {
                let diff = p - y;
                if diff > 0.0 { 1.0 / n } else if diff < 0.0 { -1.0 / n } else { 0.0 }
            })
            .collect())
    }
}

use crate::error::{ensure_len, Result};

/// Mean-squared error.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(expected: &[f64], predicted: &[f64]) -> Result<f64> {
        ensure_len("mse", expected.len(), predicted.len())?;
        if predicted.is_empty() {
            return Ok(0.0);
        }
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected)
            .map(|(p, y)| (p - y).powi(2))
            .sum::<f64>() / n)
    }

    /// Per-output gradient of `loss` w.r.t. the prediction: 2·(predicted - expected) / n
    pub fn derivative(expected: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
        ensure_len("mse derivative", expected.len(), predicted.len())?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected)
            .map(|(p, y)| 2.0 * (p - y) / n)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_value() {
        let loss = MseLoss::loss(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 1.0, 4.0]).unwrap();
        assert_relative_eq!(loss, 1.5);
    }

    #[test]
    fn test_identical_vectors() {
        let x = [0.3, -1.2, 8.0];
        assert_eq!(MseLoss::loss(&x, &x).unwrap(), 0.0);
        assert_eq!(MseLoss::derivative(&x, &x).unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_symmetry() {
        let a = [1.0, -2.0, 0.5];
        let b = [0.0, 3.0, 0.25];
        assert_relative_eq!(MseLoss::loss(&a, &b).unwrap(), MseLoss::loss(&b, &a).unwrap());
        assert!(MseLoss::loss(&a, &b).unwrap() >= 0.0);

        let d_ab = MseLoss::derivative(&a, &b).unwrap();
        let d_ba = MseLoss::derivative(&b, &a).unwrap();
        for (x, y) in d_ab.iter().zip(&d_ba) {
            assert_relative_eq!(*x, -*y);
        }
    }

    #[test]
    fn test_derivative_is_gradient_of_loss() {
        let expected = [1.0, 2.0, 3.0, 4.0];
        let predicted = [2.0, 3.0, 1.0, 4.0];
        let grad = MseLoss::derivative(&expected, &predicted).unwrap();
        assert_eq!(grad, vec![0.5, 0.5, -1.0, 0.0]);

        let h = 1e-6;
        for i in 0..predicted.len() {
            let mut up = predicted;
            let mut down = predicted;
            up[i] += h;
            down[i] -= h;
            let numeric = (MseLoss::loss(&expected, &up).unwrap()
                - MseLoss::loss(&expected, &down).unwrap()) / (2.0 * h);
            assert_relative_eq!(grad[i], numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_mismatched_lengths() {
        assert!(MseLoss::loss(&[1.0, 2.0], &[1.0]).is_err());
        assert!(MseLoss::derivative(&[1.0], &[1.0, 2.0]).is_err());
    }
}

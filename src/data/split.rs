use rand::Rng;

use crate::data::set::Set;
use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// A train/test partition of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSet {
    pub train: Set,
    pub test: Set,
}

impl SplitSet {
    pub fn new(train: Set, test: Set) -> SplitSet {
        SplitSet { train, test }
    }

    /// Builds both partitions from four pre-separated column-major matrices.
    pub fn from_parts(
        train_data: Matrix,
        train_labels: Matrix,
        test_data: Matrix,
        test_labels: Matrix,
    ) -> Result<SplitSet> {
        Ok(SplitSet {
            train: Set::from_matrices(train_data, train_labels)?,
            test: Set::from_matrices(test_data, test_labels)?,
        })
    }
}

impl Set {
    /// Shuffles the samples and splits them, reserving `split_ratio` of the
    /// columns (rounded up) for the test partition.
    pub fn split_data_set(self, split_ratio: f64) -> Result<SplitSet> {
        self.split_with_rng(split_ratio, &mut rand::thread_rng())
    }

    pub fn split_with_rng<R: Rng + ?Sized>(mut self, split_ratio: f64, rng: &mut R) -> Result<SplitSet> {
        if !(split_ratio > 0.0 && split_ratio < 1.0) {
            return Err(NnError::InvalidRatio(split_ratio));
        }

        let n = self.len();
        for i in 0..n {
            let j = rng.gen_range(0..=i);
            self.swap_samples(i, j);
        }

        let test_count = (n as f64 * split_ratio).ceil() as usize;
        let split_index = n - test_count.min(n);
        tracing::debug!(samples = n, train = split_index, test = n - split_index, "split dataset");

        let (data, labels) = self.into_parts();
        Ok(SplitSet {
            train: Set::from_matrices(
                data.select_columns(0..split_index),
                labels.select_columns(0..split_index),
            )?,
            test: Set::from_matrices(
                data.select_columns(split_index..n),
                labels.select_columns(split_index..n),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered(n: usize) -> Set {
        let data = (0..n).map(|i| vec![i as f64, 10.0 * i as f64]).collect();
        let labels = (0..n).map(|i| vec![-(i as f64)]).collect();
        Set::new(data, labels).unwrap()
    }

    #[test]
    fn test_split_three_columns() {
        let split = numbered(3).split_data_set(0.2).unwrap();
        assert_eq!(split.train.len(), 2);
        assert_eq!(split.test.len(), 1);
        assert_eq!(split.train.feature_size(), 2);
        assert_eq!(split.test.feature_size(), 2);
        assert_eq!(split.train.label_size(), 1);
        assert_eq!(split.test.label_size(), 1);
    }

    #[test]
    fn test_split_preserves_pairs_and_samples() {
        let mut rng = StdRng::seed_from_u64(42);
        let split = numbered(8).split_with_rng(0.25, &mut rng).unwrap();
        assert_eq!(split.train.len(), 6);
        assert_eq!(split.test.len(), 2);

        let mut seen: Vec<f64> = Vec::new();
        for set in [&split.train, &split.test] {
            for (sample, label) in set.iter() {
                assert_eq!(sample[1], 10.0 * sample[0]);
                assert_eq!(label[0], -sample[0]);
                seen.push(sample[0]);
            }
        }
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, (0..8).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_follows_seeded_swap_permutation() {
        let n = 20;
        let split = numbered(n).split_with_rng(0.25, &mut StdRng::seed_from_u64(3)).unwrap();

        // Replay the same swaps on plain indices with an identically seeded rng.
        let mut rng = StdRng::seed_from_u64(3);
        let mut order: Vec<usize> = (0..n).collect();
        for i in 0..n {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }
        assert_ne!(order, (0..n).collect::<Vec<_>>());

        let got: Vec<usize> = split
            .train
            .iter()
            .chain(split.test.iter())
            .map(|(sample, label)| {
                assert_eq!(label[0], -sample[0]);
                sample[0] as usize
            })
            .collect();
        assert_eq!(got, order);
        assert_eq!(split.train.len(), 15);
    }

    #[test]
    fn test_split_is_reproducible_with_seed() {
        let a = numbered(8).split_with_rng(0.5, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = numbered(8).split_with_rng(0.5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_ratio() {
        for ratio in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(numbered(4).split_data_set(ratio), Err(NnError::InvalidRatio(_))));
        }
    }

    #[test]
    fn test_split_empty_set() {
        let split = numbered(0).split_data_set(0.5).unwrap();
        assert!(split.train.is_empty());
        assert!(split.test.is_empty());
    }

    #[test]
    fn test_from_parts() {
        let ok = SplitSet::from_parts(
            Matrix::zeros(2, 3),
            Matrix::zeros(1, 3),
            Matrix::zeros(2, 1),
            Matrix::zeros(1, 1),
        );
        assert!(ok.is_ok());

        let bad = SplitSet::from_parts(
            Matrix::zeros(2, 3),
            Matrix::zeros(1, 3),
            Matrix::zeros(2, 1),
            Matrix::zeros(1, 2),
        );
        assert!(bad.is_err());
    }
}

use rand::Rng;

use crate::data::set::Set;
use crate::error::{NnError, Result};
use crate::layers::{Activation, Dense, Layer};
use crate::loss::loss_type::LossType;
use crate::network::spec::{LayerSpec, NetworkSpec};
use crate::optim::sgd::Sgd;
use crate::train::{train_loop, EpochStats, TrainConfig};

/// An ordered stack of layers trained against one loss function.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    loss: LossType,
}

impl Network {
    /// Builds a network from `(input_size, output_size, activation_id)`
    /// triples. Each triple becomes a dense layer followed by an activation
    /// layer.
    pub fn new(layer_specs: &[(usize, usize, usize)], loss_id: usize) -> Result<Network> {
        let specs = layer_specs
            .iter()
            .map(|&(input_size, output_size, activation_id)| {
                LayerSpec::from_row(&[input_size, output_size, activation_id])
            })
            .collect::<Result<Vec<_>>>()?;
        Network::from_specs(&specs, LossType::from_id(loss_id)?)
    }

    /// Same as [`Network::new`] for triples held in variable-length rows, as
    /// they come out of a config file or CSV header. Rows that are not exactly
    /// three long are rejected.
    pub fn from_rows(rows: &[Vec<usize>], loss_id: usize) -> Result<Network> {
        let specs = rows
            .iter()
            .map(|row| LayerSpec::from_row(row))
            .collect::<Result<Vec<_>>>()?;
        Network::from_specs(&specs, LossType::from_id(loss_id)?)
    }

    pub fn from_spec(spec: &NetworkSpec) -> Result<Network> {
        Network::from_specs(&spec.layers, spec.loss)
    }

    pub fn from_specs(layer_specs: &[LayerSpec], loss: LossType) -> Result<Network> {
        Network::with_rng(layer_specs, loss, &mut rand::thread_rng())
    }

    /// Builds the network drawing initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        layer_specs: &[LayerSpec],
        loss: LossType,
        rng: &mut R,
    ) -> Result<Network> {
        if layer_specs.is_empty() {
            return Err(NnError::InvalidDimension(
                "network needs at least one layer".to_string(),
            ));
        }
        for pair in layer_specs.windows(2) {
            if pair[0].output_size != pair[1].input_size {
                return Err(NnError::DimensionMismatch {
                    context: "layer chaining",
                    expected: pair[0].output_size,
                    got: pair[1].input_size,
                });
            }
        }

        let mut layers: Vec<Layer> = Vec::with_capacity(layer_specs.len() * 2);
        for spec in layer_specs {
            layers.push(Dense::with_rng(spec.input_size, spec.output_size, &mut *rng)?.into());
            layers.push(Activation::new(spec.output_size, spec.activation)?.into());
        }
        tracing::debug!(layers = layers.len(), ?loss, "built network");

        Ok(Network { layers, loss })
    }

    /// Assembles a network from ready-made layers, checking that each layer's
    /// output width matches the next layer's input width.
    pub fn from_layers(layers: Vec<Layer>, loss: LossType) -> Result<Network> {
        if layers.is_empty() {
            return Err(NnError::InvalidDimension(
                "network needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[0].output_size() != pair[1].input_size() {
                return Err(NnError::DimensionMismatch {
                    context: "layer chaining",
                    expected: pair[0].output_size(),
                    got: pair[1].input_size(),
                });
            }
        }
        Ok(Network { layers, loss })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn loss(&self) -> LossType {
        self.loss
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::output_size)
    }

    /// Forward pass through every layer in order. Each layer keeps its
    /// input for the next backward pass.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Backward pass from the last layer to the first. Returns the gradient
    /// with respect to the network input.
    pub(crate) fn backward(&mut self, loss_gradient: Vec<f64>, learning_rate: f64) -> Result<Vec<f64>> {
        let mut gradient = loss_gradient;
        for layer in self.layers.iter_mut().rev() {
            gradient = layer.backward(&gradient, learning_rate)?;
        }
        Ok(gradient)
    }

    /// One SGD step on a single sample. Returns the sample's loss before the
    /// update.
    pub(crate) fn train_sample(&mut self, input: &[f64], expected: &[f64], learning_rate: f64) -> Result<f64> {
        let output = self.predict(input)?;
        let loss = self.loss.loss(expected, &output)?;
        let gradient = self.loss.derivative(expected, &output)?;
        self.backward(gradient, learning_rate)?;
        Ok(loss)
    }

    /// Trains for `epochs` passes over every sample of `train_set`, dividing
    /// `learning_rate` by the 1-based epoch number.
    pub fn train(&mut self, train_set: &Set, epochs: usize, learning_rate: f64) -> Result<()> {
        self.train_with(train_set, None, &Sgd::new(learning_rate), &TrainConfig::new(epochs))?;
        Ok(())
    }

    /// Full-control training entry point; returns one [`EpochStats`] per
    /// completed epoch.
    pub fn train_with(
        &mut self,
        train_set: &Set,
        validation: Option<&Set>,
        optimizer: &Sgd,
        config: &TrainConfig,
    ) -> Result<Vec<EpochStats>> {
        train_loop(self, train_set, validation, optimizer, config)
    }

    /// Fraction of samples whose predicted argmax equals the label argmax.
    ///
    /// Labels are expected to be one-hot; with any other encoding the result
    /// is not meaningful. An empty set scores 0.0.
    pub fn evaluate_one_hot(&mut self, test_set: &Set) -> Result<f64> {
        if test_set.is_empty() {
            return Ok(0.0);
        }
        let mut correct = 0usize;
        for (sample, label) in test_set.iter() {
            let output = self.predict(&sample)?;
            if argmax(&output) == argmax(&label) {
                correct += 1;
            }
        }
        Ok(correct as f64 / test_set.len() as f64)
    }

    /// Mean loss over every sample without touching the parameters.
    pub fn evaluate_loss(&mut self, set: &Set) -> Result<f64> {
        if set.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for (sample, label) in set.iter() {
            let output = self.predict(&sample)?;
            total += self.loss.loss(&label, &output)?;
        }
        Ok(total / set.len() as f64)
    }
}

/// Index of the maximum element in a slice; the first one wins ties.
fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, x) in v.iter().enumerate() {
        if *x > v[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::math::matrix::Matrix;
    use approx::assert_relative_eq;

    /// 2 → 2 network whose output is the identity-ish ReLU of its input.
    fn identity_relu() -> Network {
        let weights = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let dense = Dense::from_parameters(weights, vec![0.0, 0.0]).unwrap();
        let act = Activation::new(2, ActivationFunction::ReLU).unwrap();
        Network::from_layers(vec![dense.into(), act.into()], LossType::Mse).unwrap()
    }

    #[test]
    fn test_new_builds_two_layers_per_triple() {
        let net = Network::new(&[(2, 10, 2), (10, 2, 0)], 0).unwrap();
        assert_eq!(net.layers().len(), 4);
        assert!(matches!(net.layers()[0], Layer::Dense(_)));
        assert!(matches!(net.layers()[1], Layer::Activation(_)));
        assert_eq!(net.input_size(), 2);
        assert_eq!(net.output_size(), 2);
        assert_eq!(net.loss(), LossType::Mse);
    }

    #[test]
    fn test_new_errors() {
        assert!(matches!(
            Network::new(&[(2, 10, 2), (9, 2, 2)], 0),
            Err(NnError::DimensionMismatch { expected: 10, got: 9, .. })
        ));
        assert!(matches!(
            Network::new(&[(2, 3, 0)], 2),
            Err(NnError::InvalidSelector { kind: "loss", .. })
        ));
        assert!(matches!(
            Network::new(&[(2, 3, 5)], 0),
            Err(NnError::InvalidSelector { kind: "activation", .. })
        ));
        assert!(matches!(Network::new(&[(0, 3, 0)], 0), Err(NnError::InvalidDimension(_))));
        assert!(matches!(Network::new(&[], 0), Err(NnError::InvalidDimension(_))));
    }

    #[test]
    fn test_from_rows_rejects_bad_row_length() {
        assert!(Network::from_rows(&[vec![2, 3, 0], vec![3, 1, 1]], 1).is_ok());
        assert!(matches!(
            Network::from_rows(&[vec![2, 3, 0], vec![3, 1]], 0),
            Err(NnError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_from_layers_checks_chaining() {
        let dense = Dense::new(3, 2).unwrap();
        let act = Activation::new(4, ActivationFunction::Tanh).unwrap();
        assert!(Network::from_layers(vec![dense.into(), act.into()], LossType::Mse).is_err());
    }

    #[test]
    fn test_predict_output_length() {
        let mut net = Network::new(&[(4, 6, 1), (6, 3, 0)], 0).unwrap();
        assert_eq!(net.predict(&[1.0, 2.0, 3.0, 4.0]).unwrap().len(), 3);
        assert!(matches!(net.predict(&[1.0]), Err(NnError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_evaluate_one_hot_all_and_none() {
        let mut net = identity_relu();
        let matching = Set::new(
            vec![vec![3.0, 1.0], vec![0.5, 2.0]],
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        )
        .unwrap();
        assert_eq!(net.evaluate_one_hot(&matching).unwrap(), 1.0);

        let mismatching = Set::new(
            vec![vec![3.0, 1.0], vec![0.5, 2.0]],
            vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        )
        .unwrap();
        assert_eq!(net.evaluate_one_hot(&mismatching).unwrap(), 0.0);
    }

    #[test]
    fn test_evaluate_one_hot_partial() {
        let mut net = identity_relu();
        let set = Set::new(
            vec![vec![3.0, 1.0], vec![0.5, 2.0], vec![4.0, 0.0], vec![1.0, 5.0]],
            vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0]],
        )
        .unwrap();
        assert_relative_eq!(net.evaluate_one_hot(&set).unwrap(), 0.5);
    }

    #[test]
    fn test_evaluate_loss() {
        let mut net = identity_relu();
        let set = Set::new(vec![vec![1.0, 2.0], vec![0.0, 0.0]], vec![vec![1.0, 0.0], vec![0.0, 0.0]])
            .unwrap();
        // Sample losses: mean([0, 4]) = 2 and 0.
        assert_relative_eq!(net.evaluate_loss(&set).unwrap(), 1.0);
        assert_eq!(net.evaluate_loss(&Set::new(vec![], vec![]).unwrap()).unwrap(), 0.0);
    }

    #[test]
    fn test_argmax_first_wins_ties() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[0.5, 0.5, 0.0]), 0);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn test_train_sample_propagates_loss_error_without_updating() {
        let mut net = identity_relu();
        let before = match &net.layers()[0] {
            Layer::Dense(d) => d.weights().clone(),
            _ => unreachable!(),
        };
        let err = net.train_sample(&[1.0, 2.0], &[1.0], 0.5).unwrap_err();
        assert!(matches!(err, NnError::DimensionMismatch { .. }));
        match &net.layers()[0] {
            Layer::Dense(d) => assert_eq!(d.weights(), &before),
            _ => unreachable!(),
        }
    }
}

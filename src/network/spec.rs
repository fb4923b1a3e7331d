use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::loss::loss_type::LossType;

/// Describes one dense + activation pair in a network specification.
///
/// Fields:
/// - `input_size`  — width of the vector entering the dense layer (the
///                   previous pair's `output_size`, or the raw input dimension
///                   for the first pair)
/// - `output_size` — number of neurons in the dense layer
/// - `activation`  — nonlinearity applied after the affine transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub input_size: usize,
    pub output_size: usize,
    pub activation: ActivationFunction,
}

impl LayerSpec {
    pub fn new(input_size: usize, output_size: usize, activation: ActivationFunction) -> LayerSpec {
        LayerSpec { input_size, output_size, activation }
    }

    /// Parses the integer triple form `[input_size, output_size, activation_id]`.
    pub fn from_row(row: &[usize]) -> Result<LayerSpec> {
        match *row {
            [input_size, output_size, activation_id] => Ok(LayerSpec {
                input_size,
                output_size,
                activation: ActivationFunction::from_id(activation_id)?,
            }),
            _ => Err(NnError::InvalidDimension(format!(
                "layer spec must have exactly 3 entries, got {}",
                row.len()
            ))),
        }
    }
}

impl From<(usize, usize, ActivationFunction)> for LayerSpec {
    fn from((input_size, output_size, activation): (usize, usize, ActivationFunction)) -> Self {
        LayerSpec { input_size, output_size, activation }
    }
}

/// A serializable description of a network architecture plus its training
/// loss. Holds no weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name.
    pub name: String,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Loss function to pair with this network during training.
    pub loss: LossType,
}

impl NetworkSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

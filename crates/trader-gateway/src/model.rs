//! Small fully-connected scoring network.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trader_core::error::{TraderError, TraderResult};
use tracing::info;

use crate::local::ScoringModel;

/// Layer widths: `[ma, rsi]` in, two hidden layers, `[BUY, SELL, HOLD]` out.
pub const DEFAULT_LAYOUT: [usize; 4] = [2, 32, 16, 3];

/// Standard deviation of the initial weights.
pub const DEFAULT_WEIGHT_STD: f64 = 0.1;

/// Activation applied to a layer's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Softmax,
}

impl Activation {
    fn apply(&self, values: &mut [f64]) {
        match self {
            Activation::Relu => values.iter_mut().for_each(|v| *v = v.max(0.0)),
            Activation::Softmax => {
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let mut sum = 0.0;
                for v in values.iter_mut() {
                    *v = (*v - max).exp();
                    sum += *v;
                }
                values.iter_mut().for_each(|v| *v /= sum);
            }
        }
    }
}

/// Dense layer; `weights[o][i]` connects input `i` to output `o`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    pub activation: Activation,
}

impl DenseLayer {
    fn random<R: Rng + ?Sized>(
        inputs: usize,
        outputs: usize,
        activation: Activation,
        dist: &Normal<f64>,
        rng: &mut R,
    ) -> Self {
        let weights = (0..outputs)
            .map(|_| (0..inputs).map(|_| dist.sample(rng)).collect())
            .collect();
        let biases = (0..outputs).map(|_| dist.sample(rng)).collect();
        Self {
            weights,
            biases,
            activation,
        }
    }

    pub fn inputs(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    pub fn outputs(&self) -> usize {
        self.biases.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut out: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect();
        self.activation.apply(&mut out);
        out
    }
}

/// Feed-forward network with ReLU hidden layers and a softmax head.
///
/// Weights are random rather than trained; the network stands in for a
/// scoring function with the right shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Build a network with weights drawn from `Normal(0, std_dev)`.
    pub fn random<R: Rng + ?Sized>(layout: &[usize], std_dev: f64, rng: &mut R) -> TraderResult<Self> {
        if layout.len() < 2 || layout.contains(&0) {
            return Err(TraderError::Model(format!("invalid layout: {:?}", layout)));
        }
        let dist = Normal::new(0.0, std_dev).map_err(|e| TraderError::Model(e.to_string()))?;

        let last = layout.len() - 2;
        let layers = layout
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last {
                    Activation::Softmax
                } else {
                    Activation::Relu
                };
                DenseLayer::random(pair[0], pair[1], activation, &dist, rng)
            })
            .collect();

        Ok(Self { layers })
    }

    /// Default-shaped network, reproducible when `seed` is given.
    pub fn with_seed(seed: Option<u64>) -> TraderResult<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::random(&DEFAULT_LAYOUT, DEFAULT_WEIGHT_STD, &mut rng)
    }

    /// Build from explicit layers, checking that shapes chain up.
    pub fn from_layers(layers: Vec<DenseLayer>) -> TraderResult<Self> {
        let network = Self { layers };
        network.validate()?;
        Ok(network)
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Check the network maps 2 inputs to 3 probabilities.
    pub fn validate(&self) -> TraderResult<()> {
        let (Some(first), Some(last)) = (self.layers.first(), self.layers.last()) else {
            return Err(TraderError::Model("network has no layers".into()));
        };
        if first.inputs() != 2 || last.outputs() != 3 {
            return Err(TraderError::Model(format!(
                "expected 2 inputs and 3 outputs, got {} and {}",
                first.inputs(),
                last.outputs()
            )));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.weights.iter().any(|row| row.len() != layer.inputs())
                || layer.weights.len() != layer.outputs()
            {
                return Err(TraderError::Model(format!("layer {} is ragged", i)));
            }
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            if pair[0].outputs() != pair[1].inputs() {
                return Err(TraderError::Model(format!(
                    "layer {} outputs {} but layer {} takes {}",
                    i,
                    pair[0].outputs(),
                    i + 1,
                    pair[1].inputs()
                )));
            }
        }
        Ok(())
    }

    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.layers
            .iter()
            .fold(input.to_vec(), |acc, layer| layer.forward(&acc))
    }

    /// Load weights from a JSON file.
    pub fn load(path: &Path) -> TraderResult<Self> {
        let text = fs::read_to_string(path)?;
        let network: Self = serde_json::from_str(&text)?;
        network.validate()?;
        info!(path = %path.display(), layers = network.layers.len(), "loaded scoring model");
        Ok(network)
    }

    /// Save weights as JSON.
    pub fn save(&self, path: &Path) -> TraderResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

impl ScoringModel for DenseNetwork {
    fn predict(&self, features: [f64; 2]) -> [f64; 3] {
        let out = self.forward(&features);
        [out[0], out[1], out[2]]
    }
}

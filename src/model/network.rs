use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::model::layers::Activation;

/// One fully connected layer. `weights` is `(inputs, outputs)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Array2<f64>,
    pub bias: Array1<f64>,
}

impl DenseLayer {
    pub fn new(weights: Array2<f64>, bias: Array1<f64>) -> Self {
        DenseLayer { weights, bias }
    }

    pub fn inputs(&self) -> usize {
        self.weights.nrows()
    }

    pub fn outputs(&self) -> usize {
        self.weights.ncols()
    }

    fn forward(&self, x: &Array2<f64>) -> Array2<f64> {
        x.dot(&self.weights) + &self.bias.view().insert_axis(Axis(0))
    }
}

/// Feed-forward regression network. Hidden layers use `hidden_activation`,
/// the last layer is linear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuralNetwork {
    pub layers: Vec<DenseLayer>,
    pub hidden_activation: Activation,
}

impl NeuralNetwork {
    pub fn new(layers: Vec<DenseLayer>) -> Self {
        NeuralNetwork {
            layers,
            hidden_activation: Activation::Relu,
        }
    }

    pub fn with_hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn n_features(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, DenseLayer::outputs)
    }

    pub(crate) fn check_shape(&self) -> Result<(), String> {
        if self.layers.is_empty() {
            return Err("network has no layers".to_string());
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.bias.len() != layer.outputs() {
                return Err(format!(
                    "layer {i} has {} outputs but a bias of length {}",
                    layer.outputs(),
                    layer.bias.len()
                ));
            }
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            if pair[0].outputs() != pair[1].inputs() {
                return Err(format!(
                    "layer {i} produces {} values but layer {} expects {}",
                    pair[0].outputs(),
                    i + 1,
                    pair[1].inputs()
                ));
            }
        }
        Ok(())
    }

    pub fn forward(&self, x: &Array2<f64>) -> Array2<f64> {
        let last = self.layers.len().saturating_sub(1);
        let mut output = x.to_owned();
        for (i, layer) in self.layers.iter().enumerate() {
            let activation = if i == last {
                Activation::Identity
            } else {
                self.hidden_activation
            };
            output = activation.apply(layer.forward(&output));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn small_network() -> NeuralNetwork {
        // 2 -> 2 (relu) -> 1
        NeuralNetwork::new(vec![
            DenseLayer::new(array![[1.0, -1.0], [1.0, 1.0]], array![0.0, 0.5]),
            DenseLayer::new(array![[2.0], [3.0]], array![1.0]),
        ])
    }

    #[test]
    fn forward_applies_relu_between_layers() {
        let nn = small_network();
        // hidden = relu([1 + 2, -1 + 2 + 0.5]) = [3, 1.5]; out = 6 + 4.5 + 1
        let out = nn.forward(&array![[1.0, 2.0]]);
        assert_eq!(out, array![[11.5]]);

        // pre = [-3, 1.5] -> relu clamps the first unit; out = 4.5 + 1
        let out = nn.forward(&array![[-2.0, -1.0]]);
        assert_eq!(out, array![[5.5]]);
    }

    #[test]
    fn identity_hidden_activation_is_linear() {
        let nn = small_network().with_hidden_activation(Activation::Identity);
        // pre = [-3, 1.5]; out = -6 + 4.5 + 1
        assert_eq!(nn.forward(&array![[-2.0, -1.0]]), array![[-0.5]]);
    }

    #[test]
    fn shape_check_finds_broken_chains() {
        assert!(small_network().check_shape().is_ok());
        assert_eq!(small_network().n_features(), 2);
        assert_eq!(small_network().n_outputs(), 1);

        let broken = NeuralNetwork::new(vec![
            DenseLayer::new(Array2::zeros((2, 3)), Array1::zeros(3)),
            DenseLayer::new(Array2::zeros((2, 1)), Array1::zeros(1)),
        ]);
        assert!(broken.check_shape().is_err());

        let bad_bias = NeuralNetwork::new(vec![DenseLayer::new(
            Array2::zeros((2, 1)),
            Array1::zeros(2),
        )]);
        assert!(bad_bias.check_shape().is_err());
        assert!(NeuralNetwork::new(vec![]).check_shape().is_err());
    }
}

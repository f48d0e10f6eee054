use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub fn relu(x: &Array2<f64>) -> Array2<f64> {
    x.mapv(|v| if v > 0.0 { v } else { 0.0 })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Relu,
    Identity,
}

impl Activation {
    pub fn apply(self, x: Array2<f64>) -> Array2<f64> {
        match self {
            Activation::Relu => relu(&x),
            Activation::Identity => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(relu(&array![[-1.0, 0.0, 2.5]]), array![[0.0, 0.0, 2.5]]);
    }

    #[test]
    fn identity_is_a_no_op() {
        let x = array![[-1.0, 3.0]];
        assert_eq!(Activation::Identity.apply(x.clone()), x);
    }
}

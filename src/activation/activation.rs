use serde::{Serialize, Deserialize};
use std::f32::consts::E;

/// Fixed registry of scalar activation functions.
///
/// Each variant carries a pure function, its derivative, and a recommended
/// range for random weight initialization. New activations are added as new
/// variants; there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Hard threshold step: `f(x) = 1 if x >= 0 else 0`.
    Boolean,
    /// Logistic sigmoid: `f(x) = 1 / (1 + e^-x)`.
    Sigmoid,
}

impl Activation {
    pub fn function(&self, x: f32) -> f32 {
        match self {
            Activation::Boolean => {
                if x >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative of the activation.
    ///
    /// `Boolean` deliberately reports a constant `1.0` instead of the true
    /// step derivative (zero almost everywhere). A zero derivative would
    /// freeze every delta during backpropagation, so threshold neurons train
    /// with the raw error instead. This is an intentional design choice, not
    /// a bug.
    pub fn derivative(&self, x: f32) -> f32 {
        match self {
            Activation::Boolean => 1.0,
            Activation::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }

    /// Recommended `(min, max)` range for random weight initialization.
    pub fn init_range(&self) -> (f32, f32) {
        match self {
            Activation::Boolean => (-1.0, 1.0),
            Activation::Sigmoid => (-1.0, 1.0),
        }
    }

    /// Stable numeric id used by the binary model format.
    pub fn id(&self) -> u8 {
        match self {
            Activation::Boolean => 0,
            Activation::Sigmoid => 1,
        }
    }

    /// Inverse of [`Activation::id`]; `None` for ids no registry entry covers.
    pub fn from_id(id: u8) -> Option<Activation> {
        match id {
            0 => Some(Activation::Boolean),
            1 => Some(Activation::Sigmoid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_matches_closed_form() {
        assert_abs_diff_eq!(Activation::Sigmoid.function(0.0), 0.5);
        assert_abs_diff_eq!(Activation::Sigmoid.function(2.0), 0.880797, epsilon = 1e-5);
        assert_abs_diff_eq!(Activation::Sigmoid.derivative(0.0), 0.25);
    }

    #[test]
    fn boolean_thresholds_at_zero() {
        assert_eq!(Activation::Boolean.function(-0.001), 0.0);
        assert_eq!(Activation::Boolean.function(0.0), 1.0);
        assert_eq!(Activation::Boolean.function(3.5), 1.0);
    }

    #[test]
    fn ids_round_trip() {
        for act in [Activation::Boolean, Activation::Sigmoid] {
            assert_eq!(Activation::from_id(act.id()), Some(act));
        }
        assert_eq!(Activation::from_id(200), None);
    }
}

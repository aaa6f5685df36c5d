pub trait Activation {
    /// Returns activation function at x
    fn call(&self, x: f64) -> f64;
    /// Returns derivative of activation function with respect to the function at x.
    /// For sigmoid we express the derivative as `a_x * (1-a_x)`
    /// instead of `sigmoid(x)(1-sigmoid(x))`.
    fn derivative(&self, a_x: f64) -> f64;
}

/// The logistic function, `1 / (1 + e^-x)`.
/// Kept inside the open interval (0, 1) even where f64 would round to 0 or 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn call(&self, x: f64) -> f64 {
        (1.0 / (1.0 + (-x).exp())).clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON / 2.0)
    }

    fn derivative(&self, a_x: f64) -> f64 {
        a_x * (1.0 - a_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_range() {
        assert_eq!(Sigmoid.call(0.0), 0.5);
        for x in [-20.0, -3.5, -0.1, 0.1, 2.0, 20.0] {
            let y = Sigmoid.call(x);
            assert!(y > 0.0 && y < 1.0);
        }
    }

    #[test]
    fn sigmoid_saturates_inside_range() {
        for x in [37.0, 50.0, 1e3, f64::MAX, -710.0, -1e4, f64::MIN] {
            let y = Sigmoid.call(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn derivative_from_activation() {
        // peak slope at x = 0
        assert_eq!(Sigmoid.derivative(Sigmoid.call(0.0)), 0.25);

        let x = 1.3;
        let eps = 1e-6;
        let numeric = (Sigmoid.call(x + eps) - Sigmoid.call(x - eps)) / (2.0 * eps);
        assert!((Sigmoid.derivative(Sigmoid.call(x)) - numeric).abs() < 1e-8);
    }
}

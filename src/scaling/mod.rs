use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inference::PredictError;

#[derive(Debug, PartialEq)]
pub enum ScalerError {
    ShapeMismatch(usize, usize),
}

impl std::error::Error for ScalerError {}

impl fmt::Display for ScalerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalerError::ShapeMismatch(a, b) => write!(f, "Scaler parameter lengths differ ({} vs {}).", a, b),
        }
    }
}

/// Fitted per-column affine transform for the numerical block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl Scaler {
    pub fn standard(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ScalerError> {
        if mean.len() != scale.len() { return Err(ScalerError::ShapeMismatch(mean.len(), scale.len())); }
        Ok(Scaler::Standard { mean, scale })
    }

    pub fn min_max(min: Vec<f64>, scale: Vec<f64>) -> Result<Self, ScalerError> {
        if min.len() != scale.len() { return Err(ScalerError::ShapeMismatch(min.len(), scale.len())); }
        Ok(Scaler::MinMax { min, scale })
    }

    pub fn n_features(&self) -> usize {
        match self {
            Scaler::Standard { mean, .. } => mean.len(),
            Scaler::MinMax { min, .. } => min.len(),
        }
    }

    /// Parameter vectors agree in length (deserialized scalers skip the constructors).
    pub fn is_consistent(&self) -> bool {
        match self {
            Scaler::Standard { mean, scale } => mean.len() == scale.len(),
            Scaler::MinMax { min, scale } => min.len() == scale.len(),
        }
    }

    /// Apply the fitted transform position by position. No range checks on `values`.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>, PredictError> {
        if !self.is_consistent() {
            return Err(PredictError::Transform("scaler parameters are inconsistent".to_string()));
        }
        if values.len() != self.n_features() {
            return Err(PredictError::Transform(format!(
                "scaler expects {} features, got {}", self.n_features(), values.len()
            )));
        }

        let scaled = match self {
            Scaler::Standard { mean, scale } => values.iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(x, (m, s))| {
                    // Zero-variance column
                    let s = if *s == 0. { 1. } else { *s };
                    (x - m) / s
                })
                .collect(),
            Scaler::MinMax { min, scale } => values.iter()
                .zip(min.iter().zip(scale.iter()))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };

        Ok(scaled)
    }
}


#[cfg(test)]
mod tests {
    use crate::inference::PredictError;
    use crate::scaling::{Scaler, ScalerError};

    #[test]
    fn standard_transform() {
        let scaler = Scaler::standard(vec![2000.0, 1000.0, 0.0, 20.0], vec![10.0, 500.0, 1.0, 4.0]).unwrap();
        let out = scaler.transform(&[2010.0, 500.0, 3.0, 24.0]).unwrap();
        assert_eq!(vec![1.0, -1.0, 3.0, 1.0], out);
    }

    #[test]
    fn standard_zero_scale_is_identity_shift() {
        let scaler = Scaler::standard(vec![5.0], vec![0.0]).unwrap();
        assert_eq!(vec![2.0], scaler.transform(&[7.0]).unwrap());
    }

    #[test]
    fn min_max_transform() {
        let scaler = Scaler::min_max(vec![-1.0, 0.0], vec![0.5, 0.25]).unwrap();
        assert_eq!(vec![0.0, 1.0], scaler.transform(&[2.0, 4.0]).unwrap());
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let scaler = Scaler::standard(vec![1000.0], vec![500.0]).unwrap();
        assert_eq!(vec![-3.0], scaler.transform(&[-500.0]).unwrap());
    }

    #[test]
    fn wrong_width() {
        let scaler = Scaler::standard(vec![0.0; 4], vec![1.0; 4]).unwrap();
        match scaler.transform(&[1.0, 2.0]) {
            Err(PredictError::Transform(msg)) => assert!(msg.contains("expects 4")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn shape_mismatch() {
        assert_eq!(Err(ScalerError::ShapeMismatch(2, 1)), Scaler::standard(vec![0.0; 2], vec![1.0]));

        let broken = Scaler::MinMax { min: vec![0.0; 2], scale: vec![1.0] };
        assert!(!broken.is_consistent());
        assert!(broken.transform(&[1.0, 2.0]).is_err());
    }
}

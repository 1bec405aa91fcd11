use std::convert::TryInto;
use std::fmt;

use crate::artifacts::Artifacts;
use crate::feature_assembly::{assemble, FeatureVector};
use crate::model::Regressor;
use crate::shared_interface::PredictionRequest;

/// Why a single prediction failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// No fitted encoder for a categorical feature (artifacts do not match the schema).
    Configuration { feature: String },
    /// Categorical value outside the trained vocabulary. The user can pick another.
    UnknownCategory { feature: String, label: String },
    /// Scaling or model invocation failed.
    Transform(String),
}

impl std::error::Error for PredictError {}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Configuration { feature } => write!(f, "No encoder found for column '{}'", feature),
            PredictError::UnknownCategory { feature, label } => write!(f, "'{}' is not a known category for '{}'", label, feature),
            PredictError::Transform(cause) => write!(f, "Prediction failed: {}", cause),
        }
    }
}

impl PredictError {
    /// Whether a different input could succeed.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, PredictError::UnknownCategory { .. })
    }
}

/// Runs the encode -> scale -> assemble -> predict pipeline over loaded artifacts.
pub struct Predictor<M: Regressor> {
    artifacts: Artifacts<M>,
}

impl<M: Regressor> Predictor<M> {
    pub fn new(artifacts: Artifacts<M>) -> Self {
        Predictor { artifacts }
    }

    pub fn artifacts(&self) -> &Artifacts<M> {
        &self.artifacts
    }

    /// Build the model input for `request` without invoking the model.
    pub fn prepare(&self, request: &PredictionRequest) -> Result<FeatureVector, PredictError> {
        let encoders = &self.artifacts.encoders;

        // Encoder presence and vocabulary membership for both categoricals, in schema order
        let mut codes = [0u32; 2];
        for (slot, (feature, label)) in request.categorical().iter().enumerate() {
            codes[slot] = encoders.encode(feature, label)?;
            log::debug!("Encoded {}='{}' as {}", feature, label, codes[slot]);
        }

        let scaled: [f64; 4] = self.artifacts.scaler
            .transform(&request.numerical())?
            .as_slice()
            .try_into()
            .map_err(|_| PredictError::Transform("scaler returned wrong number of features".to_string()))?;
        log::debug!("Scaled numerical block: {:?}", scaled);

        Ok(assemble(codes[0], codes[1], &scaled))
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictError> {
        let features = match self.prepare(request) {
            Ok(fv) => fv,
            Err(e) => {
                log::warn!("Rejected {}: {}", request, e);
                return Err(e);
            }
        };
        log::debug!("Assembled {}", features);

        let prediction = self.artifacts.model.predict(&features)?;
        log::info!("Predicted {:.2} hg/ha for {}", prediction, request);

        Ok(prediction)
    }
}

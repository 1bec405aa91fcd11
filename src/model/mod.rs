use serde::{Deserialize, Serialize};

use crate::feature_assembly::FeatureVector;
use crate::inference::PredictError;
use crate::model::tree::DecisionTree;

pub mod tree;

/// Calling contract of a fitted regression model.
pub trait Regressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError>;

    /// Input width the model was fitted on, if it records one.
    fn expected_features(&self) -> Option<usize>;

    fn describe(&self) -> String {
        "opaque regressor".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum RegressionModel {
    Linear { coefficients: Vec<f64>, intercept: f64 },
    /// Averaged ensemble of regression trees.
    Forest { trees: Vec<DecisionTree> },
}

impl Regressor for RegressionModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let x = features.as_slice();

        match self {
            RegressionModel::Linear { coefficients, intercept } => {
                if coefficients.len() != x.len() {
                    return Err(PredictError::Transform(format!(
                        "model expects {} features, got {}", coefficients.len(), x.len()
                    )));
                }
                Ok(coefficients.iter().zip(x.iter()).map(|(w, v)| w * v).sum::<f64>() + intercept)
            }
            RegressionModel::Forest { trees } => {
                if trees.is_empty() {
                    return Err(PredictError::Transform("forest has no trees".to_string()));
                }
                let mut total = 0.;
                for tree in trees.iter() {
                    total += tree.predict(x)?;
                }
                Ok(total / trees.len() as f64)
            }
        }
    }

    fn expected_features(&self) -> Option<usize> {
        match self {
            RegressionModel::Linear { coefficients, .. } => Some(coefficients.len()),
            // Widest split feature only gives a lower bound
            RegressionModel::Forest { .. } => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            RegressionModel::Linear { coefficients, .. } => format!("linear model ({} coefficients)", coefficients.len()),
            RegressionModel::Forest { trees } => format!(
                "forest of {} trees ({} nodes)", trees.len(), trees.iter().map(DecisionTree::n_nodes).sum::<usize>()
            ),
        }
    }
}

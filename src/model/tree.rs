use serde::{Deserialize, Serialize};

use crate::inference::PredictError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Go `left` when `x[feature] <= threshold`, `right` otherwise.
    Split { feature: usize, threshold: f64, left: usize, right: usize },
    Leaf { value: f64 },
}

/// Flat regression tree, root at index 0.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        DecisionTree { nodes }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn predict(&self, x: &[f64]) -> Result<f64, PredictError> {
        let mut idx = 0;

        // A well-formed tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let v = x.get(*feature).ok_or_else(|| PredictError::Transform(format!(
                        "tree splits on feature {} but input has {}", feature, x.len()
                    )))?;
                    idx = if *v <= *threshold { *left } else { *right };
                }
                None => return Err(PredictError::Transform(format!("tree node {} does not exist", idx))),
            }
        }

        Err(PredictError::Transform("tree does not terminate in a leaf".to_string()))
    }
}

//! Small in-memory artifacts shared by the unit tests.

use crate::artifacts::Artifacts;
use crate::encoding::{EncoderBank, LabelEncoder};
use crate::model::RegressionModel;
use crate::model::tree::{DecisionTree, TreeNode};
use crate::scaling::Scaler;
use crate::shared_interface::{AREA, ITEM};
use crate::vocabulary::{AREAS, ITEMS};

pub fn area_encoder() -> LabelEncoder {
    LabelEncoder::fit(AREAS.iter().copied()).unwrap()
}

pub fn item_encoder() -> LabelEncoder {
    LabelEncoder::fit(ITEMS.iter().copied()).unwrap()
}

pub fn encoders() -> EncoderBank {
    let mut bank = EncoderBank::new();
    bank.insert(AREA, area_encoder());
    bank.insert(ITEM, item_encoder());
    bank
}

pub fn encoders_without(feature: &str) -> EncoderBank {
    let mut bank = EncoderBank::new();
    if feature != AREA { bank.insert(AREA, area_encoder()); }
    if feature != ITEM { bank.insert(ITEM, item_encoder()); }
    bank
}

pub fn scaler() -> Scaler {
    Scaler::standard(vec![2000.0, 1000.0, 0.0, 20.0], vec![10.0, 500.0, 1000.0, 4.0]).unwrap()
}

/// Two stumps: one on Area (France and earlier codes go left), one on scaled avg_temp.
pub fn model() -> RegressionModel {
    let france = area_encoder().transform("France").unwrap() as f64;

    RegressionModel::Forest {
        trees: vec![
            DecisionTree::new(vec![
                TreeNode::Split { feature: 0, threshold: france, left: 1, right: 2 },
                TreeNode::Leaf { value: 55000.0 },
                TreeNode::Leaf { value: 30000.0 },
            ]),
            DecisionTree::new(vec![
                TreeNode::Split { feature: 5, threshold: 0.5, left: 1, right: 2 },
                TreeNode::Leaf { value: 40000.0 },
                TreeNode::Leaf { value: 60000.0 },
            ]),
        ]
    }
}

/// Prediction of `model()` for France / Wheat / 2024 / 1000 / 1000 / 24.
pub fn expected_france_wheat() -> f64 {
    57500.0
}

pub fn artifacts() -> Artifacts<RegressionModel> {
    artifacts_with_model(model())
}

pub fn artifacts_with_model<M>(model: M) -> Artifacts<M> {
    Artifacts { encoders: encoders(), scaler: scaler(), model }
}

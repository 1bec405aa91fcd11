use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inference::PredictError;

#[derive(Debug, PartialEq)]
pub enum EncoderError {
    Empty,
    Unsorted(String),
    Duplicate(String),
}

impl std::error::Error for EncoderError {}

impl fmt::Display for EncoderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncoderError::Empty => write!(f, "Label encoder has no classes."),
            EncoderError::Unsorted(label) => write!(f, "Label encoder classes are not sorted at \"{}\".", label),
            EncoderError::Duplicate(label) => write!(f, "Label encoder class \"{}\" appears twice.", label),
        }
    }
}

/// Fitted label encoder. The code of a label is its index in `classes`,
/// which is kept strictly ascending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, EncoderError> {
        if classes.is_empty() { return Err(EncoderError::Empty); }

        for pair in classes.windows(2) {
            if pair[0] == pair[1] { return Err(EncoderError::Duplicate(pair[1].clone())); }
            if pair[0] > pair[1] { return Err(EncoderError::Unsorted(pair[1].clone())); }
        }

        Ok(LabelEncoder { classes })
    }

    /// Build an encoder from raw observed labels (sorted and de-duplicated).
    pub fn fit<I, S>(labels: I) -> Result<Self, EncoderError>
        where I: IntoIterator<Item=S>, S: Into<String>
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self::new(classes)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.transform(label).is_some()
    }

    pub fn transform(&self, label: &str) -> Option<u32> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .ok()
            .map(|idx| idx as u32)
    }

    pub fn inverse_transform(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }
}

impl std::convert::TryFrom<Vec<String>> for LabelEncoder {
    type Error = EncoderError;

    fn try_from(classes: Vec<String>) -> Result<Self, Self::Error> {
        LabelEncoder::new(classes)
    }
}

impl From<LabelEncoder> for Vec<String> {
    fn from(encoder: LabelEncoder) -> Self {
        encoder.classes
    }
}

/// Fitted encoders, one per categorical feature name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EncoderBank {
    encoders: HashMap<String, LabelEncoder>,
}

impl EncoderBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, feature: &str, encoder: LabelEncoder) -> Option<LabelEncoder> {
        self.encoders.insert(feature.to_string(), encoder)
    }

    pub fn get(&self, feature: &str) -> Option<&LabelEncoder> {
        self.encoders.get(feature)
    }

    pub fn contains_feature(&self, feature: &str) -> bool {
        self.encoders.contains_key(feature)
    }

    pub fn feature_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.encoders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up the trained code of `label` for `feature`. Never re-fits.
    pub fn encode(&self, feature: &str, label: &str) -> Result<u32, PredictError> {
        let encoder = self.get(feature)
            .ok_or_else(|| PredictError::Configuration { feature: feature.to_string() })?;

        encoder.transform(label)
            .ok_or_else(|| PredictError::UnknownCategory { feature: feature.to_string(), label: label.to_string() })
    }
}

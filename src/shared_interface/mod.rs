use std::fmt;

use serde::{Deserialize, Serialize};

pub const AREA: &str = "Area";
pub const ITEM: &str = "Item";

pub const CATEGORICAL_FEATURES: [&str; 2] = [AREA, ITEM];
pub const NUMERICAL_FEATURES: [&str; 4] = ["Year", "average_rain_fall_mm_per_year", "Pesticides_tonnes", "avg_temp"];

/// Column order the model was trained on. Categorical slots first, numerical after.
pub const FEATURE_COLUMNS: [&str; 6] = [
    AREA,
    ITEM,
    NUMERICAL_FEATURES[0],
    NUMERICAL_FEATURES[1],
    NUMERICAL_FEATURES[2],
    NUMERICAL_FEATURES[3],
];

// Input surface defaults and bounds
pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_RAINFALL: f64 = 1000.0;
pub const DEFAULT_PESTICIDES: f64 = 1000.0;
pub const DEFAULT_AVG_TEMP: f64 = 24.0;

/// One user submission. Built once per prediction and never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub area: String,
    pub item: String,
    pub year: i32,
    pub rainfall: f64,
    pub pesticides: f64,
    pub avg_temp: f64,
}

impl PredictionRequest {
    pub fn new(area: &str, item: &str, year: i32, rainfall: f64, pesticides: f64, avg_temp: f64) -> Self {
        PredictionRequest {
            area: area.to_owned(),
            item: item.to_owned(),
            year,
            rainfall,
            pesticides,
            avg_temp,
        }
    }

    /// Categorical values paired with their feature name, in schema order.
    pub fn categorical(&self) -> [(&'static str, &str); 2] {
        [(AREA, &self.area), (ITEM, &self.item)]
    }

    /// Numerical block in `NUMERICAL_FEATURES` order.
    pub fn numerical(&self) -> [f64; 4] {
        [self.year as f64, self.rainfall, self.pesticides, self.avg_temp]
    }
}

impl fmt::Display for PredictionRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PredictionRequest<area={}, item={}, year={}, rainfall={}, pesticides={}, avg_temp={}>",
            self.area, self.item, self.year, self.rainfall, self.pesticides, self.avg_temp
        )
    }
}


#[cfg(test)]
mod tests {
    use crate::shared_interface::{FEATURE_COLUMNS, PredictionRequest};

    #[test]
    fn numerical_block_order() {
        let req = PredictionRequest::new("France", "Wheat", 2024, 1000.0, 500.0, 24.0);
        assert_eq!([2024.0, 1000.0, 500.0, 24.0], req.numerical());
    }

    #[test]
    fn categorical_block_order() {
        let req = PredictionRequest::new("France", "Wheat", 2024, 1000.0, 500.0, 24.0);
        assert_eq!([("Area", "France"), ("Item", "Wheat")], req.categorical());
    }

    #[test]
    fn column_schema() {
        assert_eq!(
            ["Area", "Item", "Year", "average_rain_fall_mm_per_year", "Pesticides_tonnes", "avg_temp"],
            FEATURE_COLUMNS
        );
    }
}

use std::fmt;

use crate::shared_interface::FEATURE_COLUMNS;

/// One request in model space, laid out as `FEATURE_COLUMNS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; 6]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS.iter().position(|c| *c == column).map(|idx| self.0[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item=(&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.0.iter().copied())
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = self.iter().map(|(c, v)| format!("{}={}", c, v)).collect::<Vec<String>>();
        write!(f, "FeatureVector<{}>", fields.join(", "))
    }
}

/// Merge encoded categoricals and the scaled numerical block. No validation.
pub fn assemble(encoded_area: u32, encoded_item: u32, scaled: &[f64; 4]) -> FeatureVector {
    FeatureVector([
        encoded_area as f64,
        encoded_item as f64,
        scaled[0],
        scaled[1],
        scaled[2],
        scaled[3],
    ])
}


#[cfg(test)]
mod tests {
    use crate::feature_assembly::assemble;

    #[test]
    fn smoke_test() {
        let fv = assemble(32, 8, &[0.5, -1.25, 3.0, 0.0]);
        assert_eq!(&[32.0, 8.0, 0.5, -1.25, 3.0, 0.0], fv.as_slice());
        assert_eq!(6, fv.len());
    }

    #[test]
    fn named_columns() {
        let fv = assemble(1, 2, &[3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Some(1.0), fv.get("Area"));
        assert_eq!(Some(2.0), fv.get("Item"));
        assert_eq!(Some(3.0), fv.get("Year"));
        assert_eq!(Some(4.0), fv.get("average_rain_fall_mm_per_year"));
        assert_eq!(Some(5.0), fv.get("Pesticides_tonnes"));
        assert_eq!(Some(6.0), fv.get("avg_temp"));
        assert_eq!(None, fv.get("hg/ha_yield"));
    }

    #[test]
    fn display() {
        let fv = assemble(0, 1, &[0.0, 0.0, 0.0, 0.5]);
        assert_eq!(
            "FeatureVector<Area=0, Item=1, Year=0, average_rain_fall_mm_per_year=0, Pesticides_tonnes=0, avg_temp=0.5>",
            fv.to_string()
        );
    }
}

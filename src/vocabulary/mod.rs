use std::collections::HashSet;

use crate::inference::PredictError;
use crate::shared_interface::{AREA, ITEM, PredictionRequest};

pub const ITEMS: &[&str] = &[
    "Maize", "Potatoes", "Rice", "Sorghum", "Soybeans", "Wheat",
    "Cassava", "Sweet potatoes", "Yams",
];

pub const AREAS: &[&str] = &[
    "Albania", "Algeria", "Angola", "Argentina", "Armenia", "Australia",
    "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Belarus",
    "Belgium", "Botswana", "Brazil", "Bulgaria", "Burkina Faso", "Burundi",
    "Cameroon", "Canada", "Central African Republic", "Chile", "Colombia",
    "Croatia", "Denmark", "Dominican Republic", "Ecuador", "Egypt",
    "El Salvador", "Eritrea", "Estonia", "Finland", "France", "Germany",
    "Ghana", "Greece", "Guatemala", "Guinea", "Guyana", "Haiti", "Honduras",
    "Hungary", "India", "Indonesia", "Iraq", "Ireland", "Italy", "Jamaica",
    "Japan", "Kazakhstan", "Kenya", "Latvia", "Lebanon", "Lesotho", "Libya",
    "Lithuania", "Madagascar", "Malawi", "Malaysia", "Mali", "Mauritania",
    "Mauritius", "Mexico", "Montenegro", "Morocco", "Mozambique", "Namibia",
    "Nepal", "Netherlands", "New Zealand", "Nicaragua", "Niger", "Norway",
    "Pakistan", "Papua New Guinea", "Peru", "Poland", "Portugal", "Qatar",
    "Romania", "Rwanda", "Saudi Arabia", "Senegal", "Slovenia",
    "South Africa", "Spain", "Sri Lanka", "Sudan", "Suriname", "Sweden",
    "Switzerland", "Tajikistan", "Thailand", "Tunisia", "Turkey", "Uganda",
    "Ukraine", "United Kingdom", "Uruguay", "Zambia", "Zimbabwe",
];

lazy_static! {
    static ref AREA_SET: HashSet<&'static str> = AREAS.iter().copied().collect();
    static ref ITEM_SET: HashSet<&'static str> = ITEMS.iter().copied().collect();
}

pub fn is_valid_area(area: &str) -> bool {
    AREA_SET.contains(area)
}

pub fn is_valid_item(item: &str) -> bool {
    ITEM_SET.contains(item)
}

/// Gate a raw request on the reference vocabulary, before any encoder is touched.
pub fn check_request(request: &PredictionRequest) -> Result<(), PredictError> {
    if !is_valid_area(&request.area) {
        return Err(PredictError::UnknownCategory { feature: AREA.to_string(), label: request.area.clone() });
    }
    if !is_valid_item(&request.item) {
        return Err(PredictError::UnknownCategory { feature: ITEM.to_string(), label: request.item.clone() });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use crate::inference::PredictError;
    use crate::shared_interface::PredictionRequest;
    use crate::vocabulary::{AREAS, check_request, is_valid_area, is_valid_item, ITEMS};

    #[test]
    fn membership() {
        assert!(is_valid_area("France"));
        assert!(is_valid_area("Papua New Guinea"));
        assert!(!is_valid_area("Atlantis"));
        assert!(!is_valid_area("france"));

        assert!(is_valid_item("Sweet potatoes"));
        assert!(!is_valid_item("Barley"));
    }

    #[test]
    fn lists_have_no_duplicates() {
        let mut areas = AREAS.to_vec();
        areas.sort_unstable();
        areas.dedup();
        assert_eq!(AREAS.len(), areas.len());

        let mut items = ITEMS.to_vec();
        items.sort_unstable();
        items.dedup();
        assert_eq!(ITEMS.len(), items.len());
    }

    #[test]
    fn check_request_names_field() {
        let ok = PredictionRequest::new("France", "Wheat", 2024, 1000.0, 1000.0, 24.0);
        assert!(check_request(&ok).is_ok());

        let bad_area = PredictionRequest::new("Atlantis", "Wheat", 2024, 1000.0, 1000.0, 24.0);
        match check_request(&bad_area) {
            Err(PredictError::UnknownCategory { feature, label }) => {
                assert_eq!("Area", feature);
                assert_eq!("Atlantis", label);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let bad_item = PredictionRequest::new("France", "Barley", 2024, 1000.0, 1000.0, 24.0);
        match check_request(&bad_item) {
            Err(PredictError::UnknownCategory { feature, .. }) => assert_eq!("Item", feature),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use super::property::Address;

/// Geocoded coordinates for an address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lon: f64,
}

/// Cache identity of a geocoding lookup.
///
/// Properties sharing street, postal code and city share one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressKey {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl From<&Address> for AddressKey {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            postal_code: address.postal_code.clone(),
            city: address.city.clone(),
        }
    }
}

/// Nominatim reports coordinates as strings; other geocoders use numbers.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => Ok(value),
        Coordinate::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid coordinate '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_from_nominatim_strings() {
        let json = r#"[{ "place_id": 1, "lat": "55.7118", "lon": "13.2095", "display_name": "Lund" }]"#;
        let places: Vec<Place> = serde_json::from_str(json).unwrap();
        assert_eq!(places[0], Place { lat: 55.7118, lon: 13.2095 });
    }

    #[test]
    fn test_place_from_numbers() {
        let place: Place = serde_json::from_str(r#"{ "lat": 55.5, "lon": 13.0 }"#).unwrap();
        assert_eq!(place.lat, 55.5);
    }

    #[test]
    fn test_invalid_coordinate() {
        assert!(serde_json::from_str::<Place>(r#"{ "lat": "north", "lon": 1 }"#).is_err());
    }
}

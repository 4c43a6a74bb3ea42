use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub(crate) fn check_contact_number(contact_number: &str) -> Result<()> {
    let ten_digits = contact_number.len() == 10
        && contact_number.chars().all(|c| c.is_ascii_digit());
    if ten_digits {
        Ok(())
    } else {
        Err(Error::invalid_field(format!(
            "contact_number must be exactly 10 digits, got {contact_number:?}"
        )))
    }
}

fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_field(format!(
            "latitude {latitude} out of range [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_field(format!(
            "longitude {longitude} out of range [-180, 180]"
        )));
    }
    Ok(())
}

/// Pickup-leg address and contact. Validated at construction, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub name: String,
    pub contact_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationDetails {
    pub fn new(
        name: impl Into<String>,
        contact_number: impl Into<String>,
        address: impl Into<String>,
        landmark: Option<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let contact_number = contact_number.into();
        check_contact_number(&contact_number)?;
        check_coordinates(latitude, longitude)?;

        Ok(Self {
            name: name.into(),
            contact_number,
            address: address.into(),
            landmark,
            latitude,
            longitude,
        })
    }
}

/// Drop-leg address and contact. Same shape as [`LocationDetails`]; kept as a
/// distinct type so call sites cannot swap the two legs silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropLocationDetails {
    pub name: String,
    pub contact_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl DropLocationDetails {
    pub fn new(
        name: impl Into<String>,
        contact_number: impl Into<String>,
        address: impl Into<String>,
        landmark: Option<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let contact_number = contact_number.into();
        check_contact_number(&contact_number)?;
        check_coordinates(latitude, longitude)?;

        Ok(Self {
            name: name.into(),
            contact_number,
            address: address.into(),
            landmark,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DropLocationDetails, LocationDetails};
    use crate::error::Error;

    fn koramangala() -> Result<LocationDetails, Error> {
        LocationDetails::new(
            "John's Store",
            "9876543210",
            "Koramangala, Bangalore, Karnataka 560034",
            Some("Near Forum Mall".to_string()),
            12.9352,
            77.6245,
        )
    }

    #[test]
    fn valid_location_constructs() {
        let location = koramangala().unwrap();
        assert_eq!(location.latitude, 12.9352);
        assert_eq!(location.longitude, 77.6245);
    }

    #[test]
    fn latitude_out_of_range_fails_validation() {
        let result = LocationDetails::new(
            "John's Store",
            "9876543210",
            "Koramangala, Bangalore",
            None,
            999.0,
            77.6245,
        );
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn longitude_out_of_range_fails_validation() {
        let result = DropLocationDetails::new(
            "Jane Smith",
            "9876543211",
            "HSR Layout, Bangalore",
            None,
            12.9113,
            -180.5,
        );
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        let location =
            LocationDetails::new("Pole", "9876543210", "Edge of the map", None, -90.0, 180.0);
        assert!(location.is_ok());
    }

    #[test]
    fn short_contact_number_fails_validation() {
        let result =
            LocationDetails::new("John", "98765", "Somewhere", None, 12.9352, 77.6245);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn non_digit_contact_number_fails_validation() {
        let result =
            DropLocationDetails::new("Jane", "98765abcde", "Somewhere", None, 12.9113, 77.6475);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn landmark_is_omitted_from_wire_json_when_absent() {
        let location =
            LocationDetails::new("John", "9876543210", "Somewhere", None, 12.9352, 77.6245)
                .unwrap();
        let wire = serde_json::to_value(&location).unwrap();
        assert!(wire.get("landmark").is_none());
    }
}

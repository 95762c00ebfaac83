use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub type PropertyId = u32;

/// Kind of dwelling offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Dorm,
}

impl PropertyType {
    /// Returns the value used in filter controls
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Dorm => "Dorm",
        }
    }

    /// Returns human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Apartment => "Lägenhet",
            Self::Dorm => "Korridorrum",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Apartment, Self::Dorm]
    }
}

impl std::str::FromStr for PropertyType {
    type Err = super::error::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Apartment" => Ok(Self::Apartment),
            "Dorm" => Ok(Self::Dorm),
            _ => Err(super::error::AppError::DataError(format!(
                "Unknown property type: {s}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// The viewer's place in line for a property.
///
/// `position` is `None` when the viewer is not queued for the property
/// (always the case when signed out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuePosition {
    #[serde(default)]
    pub position: Option<u32>,
    pub total_in_queue: u32,
}

/// A vacant property as listed by `/vacancies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub property_type: PropertyType,
    pub area: String,
    pub description: String,
    pub short_description: String,
    pub address: Address,
    pub floor: i8,
    pub size_sqm: f32,
    pub reserved: bool,
    pub queue_position: QueuePosition,
    pub rent: u32,
    pub reserve_from: NaiveDate,
    pub reserve_until: NaiveDate,
    pub move_in: NaiveDate,
}

/// A single property as returned by `/vacancies/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: Property,
    #[serde(default)]
    pub facing: Option<String>,
}

impl Deref for PropertyDetail {
    type Target = Property;

    fn deref(&self) -> &Self::Target {
        &self.property
    }
}

/// Seeds a detail view from a list entry; list entries carry no orientation.
impl From<Property> for PropertyDetail {
    fn from(property: Property) -> Self {
        Self {
            property,
            facing: None,
        }
    }
}

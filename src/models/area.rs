use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Picture {
    /// Alt text for an `<img>`; empty when the API has none
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or_default()
    }
}

/// Area detail from `/areas/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

impl Area {
    /// The picture used as a thumbnail for properties in this area
    pub fn cover(&self) -> Option<&Picture> {
        self.pictures.first()
    }
}

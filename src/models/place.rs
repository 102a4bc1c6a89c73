use serde::{Deserialize, Serialize};

/// An amenity attached to a place. The API returns either a bare string
/// or an object with a `name` field depending on the endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Amenity {
    Name(String),
    Detailed { name: String },
}

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Amenity::Name(name) => name,
            Amenity::Detailed { name } => name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,           // Unique ID for the place
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>, // Older records carry `name` instead of `title`
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub price: f64,           // Price per night
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl Place {
    /// Display title, falling back from `title` to `name` to a placeholder.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Unnamed Place")
    }

    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("No description available")
    }

    /// Location line. The API only stores coordinates for most records,
    /// so fall back to them when no location string is set.
    pub fn location_text(&self) -> String {
        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            return location.to_string();
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => format!("{}, {}", lat, lon),
            _ => "Not specified".to_string(),
        }
    }
}

/// Returns the places priced at or under `max_price`, or the whole list
/// when no filter is set. The input list is never mutated.
pub fn filter_by_max_price(places: &[Place], max_price: Option<f64>) -> Vec<Place> {
    match max_price {
        Some(max) => places
            .iter()
            .filter(|place| place.price <= max)
            .cloned()
            .collect(),
        None => places.to_vec(),
    }
}

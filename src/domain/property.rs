// src/domain/property.rs

use serde::Deserialize;

text_enum! {
    /// What kind of real estate a listing is.
    pub enum PropertyType {
        Apartment => "apartment" : "Apartment",
        House => "house" : "House",
        Commercial => "commercial" : "Commercial",
        Land => "land" : "Land",
    }
}

text_enum! {
    /// Where a listing is in its sale/rent lifecycle.
    pub enum PropertyStatus {
        ForSale => "forSale" : "For sale",
        ForRent => "forRent" : "For rent",
        Sold => "sold" : "Sold",
        Rented => "rented" : "Rented",
    }
}

impl PropertyStatus {
    /// Listings that may appear in a public catalog.
    pub fn is_publicly_listed(self) -> bool {
        matches!(self, PropertyStatus::ForSale | PropertyStatus::ForRent)
    }
}

/// A catalog entry as the CRM knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub kind: PropertyType,
    pub status: PropertyStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub price: f64,
    pub area_m2: Option<f64>,
    /// Unix seconds.
    pub created_at: i64,
}

/// Fields submitted when an agent registers a listing by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub kind: PropertyType,
    pub status: PropertyStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub price: f64,
    pub area_m2: Option<f64>,
}

impl NewProperty {
    /// Checks the constraints the form widgets cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is required".into());
        }
        if self.city.trim().is_empty() {
            return Err("city is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a non-negative number".into());
        }
        if let Some(area) = self.area_m2 {
            if !area.is_finite() || area <= 0.0 {
                return Err("area must be a positive number".into());
            }
        }
        Ok(())
    }

    pub fn into_property(self, id: String, created_at: i64) -> Property {
        Property {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            kind: self.kind,
            status: self.status,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            price: self.price,
            area_m2: self.area_m2,
            created_at,
        }
    }
}

/// A property row as the hosted backend serves it.
/// Keeps the backend's column names and loose typing away from `Property`.
#[derive(Debug, Deserialize)]
pub struct RemoteProperty {
    pub id: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    pub price: f64,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl RemoteProperty {
    /// Converts the backend row, rejecting rows without a usable identifier.
    pub fn into_property(self) -> Result<Property, String> {
        let id = match &self.id {
            serde_json::Value::String(s) if !s.is_empty() => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => return Err(format!("property {:?} has no usable id", self.title)),
        };
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("property {id} has an invalid price: {}", self.price));
        }
        if let Some(area) = self.area {
            if !area.is_finite() || area <= 0.0 {
                return Err(format!("property {id} has an invalid area: {area}"));
            }
        }

        Ok(Property {
            id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            kind: self.kind,
            status: self.status,
            bedrooms: self.bedrooms.unwrap_or(0),
            bathrooms: self.bathrooms.unwrap_or(0),
            price: self.price,
            area_m2: self.area,
            created_at: self.created_at.map(|t| t.timestamp()).unwrap_or(0),
        })
    }
}

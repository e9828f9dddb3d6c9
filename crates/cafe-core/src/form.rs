//! New-cafe submission form and its validation

use crate::error::{CafeError, FieldErrors, Result};
use cafe_types::{column, ColumnKind, NewCafe, Seating};
use serde::Deserialize;
use url::Url;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_URL: &str = "Invalid URL.";
pub const INVALID_CHOICE: &str = "Not a valid choice.";

/// Raw form submission
///
/// Every field defaults so that a missing input surfaces as a field error
/// instead of a body rejection. Checkboxes are only sent when ticked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CafeForm {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: String,
}

impl CafeForm {
    /// Text value submitted for a field, empty when absent
    pub fn text(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "map_url" => &self.map_url,
            "img_url" => &self.img_url,
            "location" => &self.location,
            "seats" => &self.seats,
            "coffee_price" => &self.coffee_price,
            _ => "",
        }
    }

    /// Whether a checkbox field was ticked
    pub fn is_checked(&self, field: &str) -> bool {
        let value = match field {
            "has_toilet" => &self.has_toilet,
            "has_wifi" => &self.has_wifi,
            "has_sockets" => &self.has_sockets,
            "can_take_calls" => &self.can_take_calls,
            _ => return false,
        };
        // Browsers send "y"/"on"; only empty and "false" count as unticked
        matches!(value.as_deref(), Some(v) if !matches!(v, "" | "false"))
    }

    /// Check every field and build the entity
    ///
    /// Submitted text is kept exactly as sent; trimming only decides presence.
    pub fn validate(&self) -> Result<NewCafe> {
        let mut errors = FieldErrors::new();

        for field in ["name", "map_url", "img_url", "location", "seats", "coffee_price"] {
            let Some(meta) = column(field) else {
                continue;
            };
            let value = self.text(field);

            if value.trim().is_empty() {
                if meta.required {
                    errors.add(field, REQUIRED);
                }
                continue;
            }

            if let Some(max) = meta.max_len {
                if value.chars().count() > max {
                    errors.add(field, format!("Field cannot be longer than {} characters.", max));
                    continue;
                }
            }

            if meta.kind == ColumnKind::Url && !is_well_formed_url(value) {
                errors.add(field, INVALID_URL);
            }
        }

        let seats = match self.seats.parse::<Seating>() {
            Ok(seats) => Some(seats),
            Err(_) => {
                if !errors.contains("seats") {
                    errors.add("seats", INVALID_CHOICE);
                }
                None
            }
        };

        match seats {
            Some(seats) if errors.is_empty() => Ok(NewCafe {
                name: self.name.clone(),
                map_url: self.map_url.clone(),
                img_url: self.img_url.clone(),
                location: self.location.clone(),
                seats,
                has_toilet: self.is_checked("has_toilet"),
                has_wifi: self.is_checked("has_wifi"),
                has_sockets: self.is_checked("has_sockets"),
                can_take_calls: self.is_checked("can_take_calls"),
                coffee_price: if self.coffee_price.trim().is_empty() {
                    None
                } else {
                    Some(self.coffee_price.clone())
                },
            }),
            _ => Err(CafeError::Validation(errors)),
        }
    }
}

/// Absolute http(s) URL with a host
pub fn is_well_formed_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

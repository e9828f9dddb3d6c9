//! Cafe entity

use crate::column::{Column, CAFE_COLUMNS};
use crate::seating::Seating;
use serde::{Deserialize, Serialize};

/// A stored cafe
///
/// Field order matches [`CAFE_COLUMNS`]; both the JSON rendering and
/// [`Cafe::to_row`] rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: Seating,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// A fully populated cafe that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: Seating,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// A single serialized column value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Bool(bool),
    Null,
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Null => Ok(()),
        }
    }
}

impl Cafe {
    pub const COLUMNS: &'static [Column] = CAFE_COLUMNS;

    /// Attach a store-assigned identifier
    pub fn from_new(id: i64, new: NewCafe) -> Self {
        Self {
            id,
            name: new.name,
            map_url: new.map_url,
            img_url: new.img_url,
            location: new.location,
            seats: new.seats,
            has_toilet: new.has_toilet,
            has_wifi: new.has_wifi,
            has_sockets: new.has_sockets,
            can_take_calls: new.can_take_calls,
            coffee_price: new.coffee_price,
        }
    }

    /// Strip the identifier
    pub fn to_new(&self) -> NewCafe {
        NewCafe {
            name: self.name.clone(),
            map_url: self.map_url.clone(),
            img_url: self.img_url.clone(),
            location: self.location.clone(),
            seats: self.seats,
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls: self.can_take_calls,
            coffee_price: self.coffee_price.clone(),
        }
    }

    /// Serialize into an ordered column-name to value mapping
    pub fn to_row(&self) -> Vec<(&'static str, FieldValue)> {
        Self::COLUMNS
            .iter()
            .map(|column| (column.name, self.value_of(column.name)))
            .collect()
    }

    fn value_of(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "map_url" => FieldValue::Text(self.map_url.clone()),
            "img_url" => FieldValue::Text(self.img_url.clone()),
            "location" => FieldValue::Text(self.location.clone()),
            "seats" => FieldValue::Text(self.seats.label().to_string()),
            "has_toilet" => FieldValue::Bool(self.has_toilet),
            "has_wifi" => FieldValue::Bool(self.has_wifi),
            "has_sockets" => FieldValue::Bool(self.has_sockets),
            "can_take_calls" => FieldValue::Bool(self.can_take_calls),
            "coffee_price" => self
                .coffee_price
                .clone()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Null),
            _ => FieldValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cafe {
        Cafe::from_new(
            7,
            NewCafe {
                name: "Science Gallery London".to_string(),
                map_url: "https://g.page/scigallerylon".to_string(),
                img_url: "https://example.com/sci.jpg".to_string(),
                location: "London Bridge".to_string(),
                seats: Seating::FiveToTen,
                has_toilet: true,
                has_wifi: false,
                has_sockets: true,
                can_take_calls: false,
                coffee_price: Some("£2.40".to_string()),
            },
        )
    }

    #[test]
    fn test_row_follows_column_order() {
        let cafe = sample();
        let names: Vec<_> = cafe.to_row().into_iter().map(|(name, _)| name).collect();
        let expected: Vec<_> = CAFE_COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_row_values_are_not_coerced() {
        let row = sample().to_row();
        assert_eq!(row[0].1, FieldValue::Integer(7));
        assert_eq!(row[1].1, FieldValue::Text("Science Gallery London".into()));
        assert_eq!(row[5].1, FieldValue::Text("5 to 10".into()));
        assert_eq!(row[6].1, FieldValue::Bool(true));
        assert_eq!(row[7].1, FieldValue::Bool(false));
        assert_eq!(row[10].1, FieldValue::Text("£2.40".into()));
    }

    #[test]
    fn test_missing_price_is_null() {
        let mut cafe = sample();
        cafe.coffee_price = None;
        let row = cafe.to_row();
        assert_eq!(row.last().map(|(_, v)| v), Some(&FieldValue::Null));
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn test_json_keys_follow_declaration_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let mut last = 0;
        for column in CAFE_COLUMNS {
            let pos = json
                .find(&format!("\"{}\":", column.name))
                .unwrap_or_else(|| panic!("missing key {}", column.name));
            assert!(pos >= last, "{} out of order", column.name);
            last = pos;
        }
        assert!(json.contains("\"has_toilet\":true"));
        assert!(json.contains("\"seats\":\"5 to 10\""));
    }

    #[test]
    fn test_from_new_round_trip() {
        let cafe = sample();
        assert_eq!(Cafe::from_new(cafe.id, cafe.to_new()), cafe);
    }
}

//! Static column metadata
//!
//! Each stored field is described once, in declaration order. Listing views
//! and the store schema iterate this table instead of inspecting the entity
//! at runtime.

/// Primitive type of a stored column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Url,
    Boolean,
    Choice,
}

/// Field-to-column metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// Human readable label used by forms and table headers
    pub label: &'static str,
    pub kind: ColumnKind,
    pub required: bool,
    pub unique: bool,
    /// Maximum length in characters for text-like columns
    pub max_len: Option<usize>,
}

impl Column {
    const fn text(name: &'static str, label: &'static str, max_len: usize) -> Self {
        Self {
            name,
            label,
            kind: ColumnKind::Text,
            required: true,
            unique: false,
            max_len: Some(max_len),
        }
    }

    const fn url(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ColumnKind::Url,
            required: true,
            unique: false,
            max_len: Some(500),
        }
    }

    const fn flag(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ColumnKind::Boolean,
            required: true,
            unique: false,
            max_len: None,
        }
    }

    /// Whether this column is the store-assigned identifier
    pub fn is_identifier(&self) -> bool {
        self.kind == ColumnKind::Integer
    }
}

/// Cafe columns in declaration order
pub const CAFE_COLUMNS: &[Column] = &[
    Column {
        name: "id",
        label: "Id",
        kind: ColumnKind::Integer,
        required: true,
        unique: true,
        max_len: None,
    },
    Column {
        name: "name",
        label: "Cafe name",
        kind: ColumnKind::Text,
        required: true,
        unique: true,
        max_len: Some(250),
    },
    Column::url("map_url", "Cafe location on GoogleMaps URL"),
    Column::url("img_url", "Image URL"),
    Column::text("location", "Location of Cafe", 250),
    Column {
        name: "seats",
        label: "How many seats?",
        kind: ColumnKind::Choice,
        required: true,
        unique: false,
        max_len: Some(250),
    },
    Column::flag("has_toilet", "Does the cafe have toilet?"),
    Column::flag("has_wifi", "Does the cafe have wifi?"),
    Column::flag("has_sockets", "Does the cafe have sockets?"),
    Column::flag("can_take_calls", "Does the cafe allow to take calls?"),
    Column {
        name: "coffee_price",
        label: "Coffee price",
        kind: ColumnKind::Text,
        required: false,
        unique: false,
        max_len: Some(250),
    },
];

/// Look up a column by name
pub fn column(name: &str) -> Option<&'static Column> {
    CAFE_COLUMNS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_column_names_are_unique() {
        let names: HashSet<_> = CAFE_COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CAFE_COLUMNS.len());
    }

    #[test]
    fn test_only_coffee_price_is_optional() {
        let optional: Vec<_> = CAFE_COLUMNS
            .iter()
            .filter(|c| !c.required)
            .map(|c| c.name)
            .collect();
        assert_eq!(optional, vec!["coffee_price"]);
    }

    #[test]
    fn test_identifier_comes_first() {
        assert!(CAFE_COLUMNS[0].is_identifier());
        assert_eq!(CAFE_COLUMNS.iter().filter(|c| c.is_identifier()).count(), 1);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(column("img_url").map(|c| c.kind), Some(ColumnKind::Url));
        assert!(column("price").is_none());
    }
}

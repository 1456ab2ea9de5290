//! Category and subcategory records for the report generator
//!
//! These types mirror the input JSON document one to one. A subcategory
//! carries its own copy of the category it was decoded with; nothing is
//! normalized or deduplicated after load.
//!
//! # Decoding rules
//!
//! - Object keys match field names case-insensitively (`"ID"`, `"Name"`)
//! - A missing field, or one set to `null`, stays empty
//! - When a key appears twice the later non-null value wins
//! - Unknown keys are ignored
//! - A value of the wrong type (`"id": 1`) is an error

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Top-level grouping entity
///
/// Two records may carry categories with the same name but different ids.
/// Grouping only ever looks at `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    /// Category identifier as found in the input
    pub id: String,

    /// Display name, also the grouping key
    pub name: String,
}

/// Leaf record with an embedded category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subcategory {
    /// Subcategory identifier as found in the input
    pub id: String,

    /// Display name
    pub name: String,

    /// Owning category, embedded by value
    pub category: Category,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Subcategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Subcategory {
            id: id.into(),
            name: name.into(),
            category,
        }
    }
}

/// The full ordered collection of subcategories loaded from input
///
/// Input order is significant: it drives the `#N` numbering of the
/// per-record reports.
pub type RecordSet = Vec<Subcategory>;

/// Input object keys, matched ignoring ASCII case
enum Field {
    Id,
    Name,
    Category,
    Other,
}

impl Field {
    fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("id") {
            Field::Id
        } else if key.eq_ignore_ascii_case("name") {
            Field::Name
        } else if key.eq_ignore_ascii_case("category") {
            Field::Category
        } else {
            Field::Other
        }
    }
}

/// Overwrite `slot` unless the incoming value is `null`
fn assign<'de, A, T>(map: &mut A, slot: &mut T) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if let Some(value) = map.next_value::<Option<T>>()? {
        *slot = value;
    }
    Ok(())
}

struct CategoryVisitor;

impl<'de> Visitor<'de> for CategoryVisitor {
    type Value = Category;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a category object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Category, A::Error> {
        let mut category = Category::default();
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::Id => assign(&mut map, &mut category.id)?,
                Field::Name => assign(&mut map, &mut category.name)?,
                Field::Category | Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(category)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryVisitor)
    }
}

struct SubcategoryVisitor;

impl<'de> Visitor<'de> for SubcategoryVisitor {
    type Value = Subcategory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a subcategory object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Subcategory, A::Error> {
        let mut subcategory = Subcategory::default();
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::Id => assign(&mut map, &mut subcategory.id)?,
                Field::Name => assign(&mut map, &mut subcategory.name)?,
                Field::Category => assign(&mut map, &mut subcategory.category)?,
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(subcategory)
    }
}

impl<'de> Deserialize<'de> for Subcategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SubcategoryVisitor)
    }
}

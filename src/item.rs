//! Item - the record kind served by this crate.

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::repository::{Record, RecordId};
use crate::validation::{Validate, ValidationErrors};

/// Label used for items in logs, notifications and error messages.
pub const ITEM_LABEL: &str = "Item";

pub const NAME_MAX_CHARS: usize = 100;

/// Smallest accepted price: one cent.
pub fn min_price() -> Decimal {
    Decimal::new(1, 2)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the repository. Optional in request bodies; a value that
    /// is not a valid id decodes as 0.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: RecordId,
    /// `null` decodes as empty so the required-name rule reports it.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RecordId, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Valid(RecordId),
        Other(IgnoredAny),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Valid(id) => id,
        RawId::Other(_) => 0,
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn new(name: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
            price,
            stock,
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Record for Item {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required.");
        } else if self.name.chars().count() > NAME_MAX_CHARS {
            errors.add("name", "Name cannot exceed 100 characters.");
        }

        if self.price < min_price() {
            errors.add("price", "Price must be a positive value.");
        }

        errors.into_result()
    }
}

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity, stored in MongoDB with the id as `_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(rename = "_id", alias = "id", with = "id_string")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(url)]
    pub image_url: Option<String>,
}

/// DTO for updating an existing product; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[validate(url)]
    pub image_url: Option<String>,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive text matched against name or description
    pub search: Option<String>,
}

/// Body returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
        }
    }
}

impl Product {
    /// Build a new product with a fresh id and timestamps
    pub fn new(input: CreateProduct) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            category: input.category,
            price: input.price,
            stock: input.stock,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateProduct {
    /// `$set` document for the supplied fields plus `updated_at`
    pub fn to_set_document(&self, now: DateTime<Utc>) -> Document {
        let mut set = doc! { "updated_at": timestamp::format(&now) };

        if let Some(ref name) = self.name {
            set.insert("name", name.as_str());
        }
        if let Some(ref description) = self.description {
            set.insert("description", description.as_str());
        }
        if let Some(ref category) = self.category {
            set.insert("category", category.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(stock) = self.stock {
            set.insert("stock", stock);
        }
        if let Some(ref image_url) = self.image_url {
            set.insert("image_url", image_url.as_str());
        }

        set
    }
}

impl ProductFilter {
    /// Drop empty parameters so `?category=` behaves like no category at all
    pub fn normalized(self) -> Self {
        Self {
            category: self.category.filter(|c| !c.is_empty()),
            search: self.search.filter(|s| !s.is_empty()),
        }
    }
}

/// Ids are stored and rendered as hyphenated strings
mod id_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uuid::parse_str(&raw).map_err(D::Error::custom)
    }
}

/// Timestamps are RFC 3339 strings with fixed millisecond precision, so that
/// string order in the collection is chronological order.
pub mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer, de::Error};

    /// Current time truncated to what the stored format can represent
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

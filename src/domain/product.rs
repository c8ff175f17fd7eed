//! Product catalog records (read-only on the client)

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sales status of a product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Available,
    #[serde(alias = "out_of_stock")]
    SoldOut,
    Discontinued,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "판매 가능",
            ProductStatus::SoldOut => "품절",
            ProductStatus::Discontinued => "단종",
        }
    }
}

/// Category reference
///
/// The list endpoint sends the category primary key, the detail view of
/// newer deployments sends a name or a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(u64),
    Name(String),
    Detailed { id: u64, name: String },
}

impl CategoryRef {
    pub fn label(&self) -> String {
        match self {
            CategoryRef::Id(id) => format!("#{}", id),
            CategoryRef::Name(name) => name.clone(),
            CategoryRef::Detailed { name, .. } => name.clone(),
        }
    }

    /// Equality filter against a user-supplied category (id or name)
    pub fn matches(&self, wanted: &str) -> bool {
        match self {
            CategoryRef::Id(id) => wanted.parse::<u64>().map(|w| w == *id).unwrap_or(false),
            CategoryRef::Name(name) => name == wanted,
            CategoryRef::Detailed { id, name } => {
                name == wanted || wanted.parse::<u64>().map(|w| w == *id).unwrap_or(false)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_thumbnail: bool,
}

/// One block of the product description (features, components, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionBlock {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A product as served by `/products/` and `/products/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Decimal string from the backend, e.g. `"57200.00"`
    pub price: BigDecimal,
    pub category: CategoryRef,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_blocks: Vec<DescriptionBlock>,
    #[serde(default)]
    pub product_detail_info: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub status: ProductStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Product {
    /// Price rounded to the nearest won
    pub fn price_won(&self) -> i64 {
        self.price
            .with_scale_round(0, RoundingMode::HalfUp)
            .to_i64()
            .unwrap_or(0)
    }

    pub fn is_purchasable(&self) -> bool {
        self.status == ProductStatus::Available
    }

    /// Flagged thumbnail image, then the list thumbnail, then the first image
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.is_thumbnail && img.url.is_some())
            .and_then(|img| img.url.as_deref())
            .or(self.thumbnail.as_deref())
            .or_else(|| self.images.iter().find_map(|img| img.url.as_deref()))
    }
}

/// Sort orders the product list endpoint understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    Latest,
}

impl ProductSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSort::PriceAsc => "price_asc",
            ProductSort::PriceDesc => "price_desc",
            ProductSort::Latest => "latest",
        }
    }
}

impl FromStr for ProductSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "price_asc" => Ok(ProductSort::PriceAsc),
            "price_desc" => Ok(ProductSort::PriceDesc),
            "latest" | "newest" => Ok(ProductSort::Latest),
            other => Err(format!("unknown sort: {} (price_asc, price_desc, latest)", other)),
        }
    }
}

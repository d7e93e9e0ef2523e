use serde::{Deserialize, Serialize};

use pethouse_core::{Entity, ProductId};

/// Product price as it appears in catalog data.
///
/// Prices are usually numbers, but hand-edited catalogs also carry
/// numeric-like strings (`"12,50"`) or free text (`"по запросу"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Numeric value of the price, if it has one.
    ///
    /// Text prices are parsed strictly after mapping a decimal comma to a
    /// point; anything else has no numeric value.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(v) if v.is_finite() => Some(*v),
            Price::Amount(_) => None,
            Price::Text(s) => s
                .trim()
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Amount(value)
    }
}

/// Format a price for display: numbers with exactly two decimals, text verbatim.
pub fn format_price(price: &Price) -> String {
    match price {
        Price::Amount(v) => format!("{v:.2}"),
        Price::Text(s) => s.clone(),
    }
}

/// A catalog record.
///
/// Only `product_type`, `neck`, `standard`, `purpose`, `volume` and `price`
/// take part in filtering and sorting; the rest is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "type", default)]
    pub product_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub neck: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub pack: String,
    /// One or more `;`-separated tags.
    #[serde(default)]
    pub purpose: String,
    /// Textual volume (`"5 л"`, `"0,5"`); absent for caps and preforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default)]
    pub price: Price,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        product_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_type: product_type.into(),
            title: title.into(),
            image: String::new(),
            neck: String::new(),
            standard: String::new(),
            pack: String::new(),
            purpose: String::new(),
            volume: None,
            price: Price::default(),
        }
    }

    pub fn with_neck(mut self, neck: impl Into<String>, standard: impl Into<String>) -> Self {
        self.neck = neck.into();
        self.standard = standard.into();
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Price>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_pack(mut self, pack: impl Into<String>) -> Self {
        self.pack = pack.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Volume text, treating an empty or blank value as absent.
    pub fn volume(&self) -> Option<&str> {
        self.volume.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Labelled, non-empty detail lines in card order.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Горловина", self.neck.as_str()),
            ("Стандарт", self.standard.as_str()),
            ("Упаковка", self.pack.as_str()),
            ("Назначение", self.purpose.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

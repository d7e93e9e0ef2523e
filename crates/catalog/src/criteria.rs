//! Filter and sort selections coming from the catalog form.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pethouse_core::DomainError;

use crate::filter::parse_volume;

/// Ordering applied to the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep catalog order.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "priceAsc")]
    PriceAsc,
    #[serde(rename = "priceDesc")]
    PriceDesc,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "priceAsc",
            SortMode::PriceDesc => "priceDesc",
        }
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "default" => Ok(SortMode::Default),
            "priceAsc" => Ok(SortMode::PriceAsc),
            "priceDesc" => Ok(SortMode::PriceDesc),
            other => Err(DomainError::validation(format!("unknown sort mode: {other}"))),
        }
    }
}

impl core::fmt::Display for SortMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive volume interval parsed from a `"min-max"` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRange {
    pub min: f64,
    pub max: f64,
}

impl VolumeRange {
    /// Parse a `"min-max"` token. Bounds are read leniently (leading number,
    /// decimal comma allowed); a token with an unreadable bound yields `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split('-');
        let min = parse_volume(parts.next()?)?;
        let max = parse_volume(parts.next()?)?;
        Some(Self { min, max })
    }

    pub fn contains(&self, volume: f64) -> bool {
        volume >= self.min && volume <= self.max
    }
}

/// The current set of user selections driving catalog computation.
///
/// Every empty set or unset bound imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Criteria {
    pub types: BTreeSet<String>,
    pub necks: BTreeSet<String>,
    pub purposes: BTreeSet<String>,
    /// Raw `"min-max"` range tokens as submitted by the form.
    pub volumes: BTreeSet<String>,
    pub volume_from: Option<f64>,
    pub volume_to: Option<f64>,
    pub sort: SortMode,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_necks<I, S>(mut self, necks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.necks.extend(necks.into_iter().map(Into::into));
        self
    }

    pub fn with_purposes<I, S>(mut self, purposes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.purposes.extend(purposes.into_iter().map(Into::into));
        self
    }

    pub fn with_volumes<I, S>(mut self, volumes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.volumes.extend(volumes.into_iter().map(Into::into));
        self
    }

    pub fn with_volume_bounds(mut self, from: Option<f64>, to: Option<f64>) -> Self {
        self.volume_from = from;
        self.volume_to = to;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any volume constraint (range tokens or bounds) is active.
    pub fn has_volume_filter(&self) -> bool {
        !self.volumes.is_empty() || self.volume_from.is_some() || self.volume_to.is_some()
    }

    /// True when no filter constraint is active. Sort mode is not a filter.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.necks.is_empty()
            && self.purposes.is_empty()
            && !self.has_volume_filter()
    }

    /// Drop every selection, including the sort mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

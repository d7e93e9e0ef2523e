//! Result-count line ("Найдено 21 позиция").

use serde::{Deserialize, Serialize};

/// Grammatical number class of a count, by Russian pluralization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralClass {
    /// 1, 21, 101 … but not 11.
    One,
    /// 2–4, 22–24 … but not 12–14.
    Few,
    Many,
}

pub fn plural_class(n: u64) -> PluralClass {
    let rem10 = n % 10;
    let rem100 = n % 100;

    if rem10 == 1 && rem100 != 11 {
        PluralClass::One
    } else if (2..=4).contains(&rem10) && !(11..=19).contains(&rem100) {
        PluralClass::Few
    } else {
        PluralClass::Many
    }
}

/// Label words for each plural class plus the leading word of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountLabels {
    pub prefix: String,
    pub one: String,
    pub few: String,
    pub many: String,
}

impl Default for CountLabels {
    fn default() -> Self {
        Self {
            prefix: "Найдено".to_string(),
            one: "позиция".to_string(),
            few: "позиции".to_string(),
            many: "позиций".to_string(),
        }
    }
}

impl CountLabels {
    pub fn label(&self, class: PluralClass) -> &str {
        match class {
            PluralClass::One => &self.one,
            PluralClass::Few => &self.few,
            PluralClass::Many => &self.many,
        }
    }
}

pub fn format_count(n: u64, labels: &CountLabels) -> String {
    let label = labels.label(plural_class(n));
    if labels.prefix.is_empty() {
        format!("{n} {label}")
    } else {
        format!("{} {n} {label}", labels.prefix)
    }
}

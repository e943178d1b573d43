use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::parse_locale_number;
use crate::decimal::Money;

/// product condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// wire name: novo
    #[serde(rename = "novo")]
    New,
    /// wire name: seminovo
    #[serde(rename = "seminovo")]
    Used,
}

impl Condition {
    /// parse a free-form condition label from the import pipeline
    pub fn from_label(label: &str) -> Option<Condition> {
        match label.trim().to_lowercase().as_str() {
            "novo" => Some(Condition::New),
            "seminovo" => Some(Condition::Used),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "Novo",
            Condition::Used => "Seminovo",
        }
    }
}

/// one catalog row as delivered by the product source
///
/// The import pipeline owns normalization: whatever column naming the
/// upstream sheet used, records arrive here under this one schema. Price
/// fields stay as the original text; [`ProductRecord::listed_price`] and
/// [`ProductRecord::member_price`] run them through the locale parser so
/// the calculator only ever sees normalized numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Uuid,
    pub product_name: String,
    pub storage_variant: Option<String>,
    pub condition: Option<Condition>,
    pub color_options: Option<String>,
    pub reseller_name: Option<String>,
    pub listed_price_text: Option<String>,
    pub member_price_text: Option<String>,
    pub created_timestamp: Option<DateTime<Utc>>,
}

impl ProductRecord {
    /// name shown on the card, with the storage variant appended
    pub fn display_name(&self) -> String {
        let name = self.product_name.trim();
        let name = if name.is_empty() { "Produto sem nome" } else { name };

        match self.storage_variant.as_deref().map(str::trim) {
            Some(storage) if !storage.is_empty() => format!("{name} {storage}"),
            _ => name.to_string(),
        }
    }

    /// regular sticker price, zero when absent or garbled
    pub fn listed_price(&self) -> Money {
        self.listed_price_text
            .as_deref()
            .map(parse_locale_number)
            .unwrap_or(Money::ZERO)
    }

    /// club-member price, zero when absent or garbled
    pub fn member_price(&self) -> Money {
        self.member_price_text
            .as_deref()
            .map(parse_locale_number)
            .unwrap_or(Money::ZERO)
    }
}

/// catalog view filter
///
/// All criteria are conjunctive; an unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// case-insensitive match over name, colors, and reseller
    pub search_term: Option<String>,
    /// exact calendar day the record was created
    pub created_on: Option<NaiveDate>,
    pub condition: Option<Condition>,
}

impl CatalogFilter {
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.matches_search(record) && self.matches_date(record) && self.matches_condition(record)
    }

    fn matches_search(&self, record: &ProductRecord) -> bool {
        let term = match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        let haystacks = [
            Some(record.product_name.as_str()),
            record.color_options.as_deref(),
            record.reseller_name.as_deref(),
        ];

        haystacks
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_date(&self, record: &ProductRecord) -> bool {
        match self.created_on {
            None => true,
            // records without a timestamp never match a date filter
            Some(day) => record
                .created_timestamp
                .map(|ts| ts.date_naive() == day)
                .unwrap_or(false),
        }
    }

    fn matches_condition(&self, record: &ProductRecord) -> bool {
        match self.condition {
            None => true,
            Some(condition) => record.condition == Some(condition),
        }
    }
}

/// sort records into storefront display order
///
/// iPhones first, then iPads, then MacBooks, then everything else; within a
/// category ascending by the first number in the name (iPhone 13 before
/// iPhone 17); ties broken by most recently created.
pub fn sort_catalog(records: &mut [ProductRecord]) {
    records.sort_by(|a, b| {
        category_priority(&a.product_name)
            .cmp(&category_priority(&b.product_name))
            .then_with(|| model_number(&a.product_name).cmp(&model_number(&b.product_name)))
            .then_with(|| {
                let a_created = a.created_timestamp.map(|ts| ts.timestamp()).unwrap_or(0);
                let b_created = b.created_timestamp.map(|ts| ts.timestamp()).unwrap_or(0);
                b_created.cmp(&a_created)
            })
    });
}

fn category_priority(name: &str) -> u8 {
    let label = name.trim().to_lowercase();
    if label.starts_with("iphone") {
        0
    } else if label.starts_with("ipad") {
        1
    } else if label.starts_with("macbook") {
        2
    } else {
        3
    }
}

/// first run of digits in the name, unnumbered models sort last
fn model_number(name: &str) -> u64 {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(u64::MAX)
}

// src/domain/criteria.rs

use crate::errors::ServerError;
use std::fmt;
use std::str::FromStr;

/// Transaction status category a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingType {
    #[default]
    ForSale,
    ForRent,
    Sold,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::ForSale => "for_sale",
            ListingType::ForRent => "for_rent",
            ListingType::Sold => "sold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::ForSale => "For Sale",
            ListingType::ForRent => "For Rent",
            ListingType::Sold => "Sold",
        }
    }

    pub const ALL: [ListingType; 3] = [ListingType::ForSale, ListingType::ForRent, ListingType::Sold];
}

impl FromStr for ListingType {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "for_sale" => Ok(ListingType::ForSale),
            "for_rent" => Ok(ListingType::ForRent),
            "sold" => Ok(ListingType::Sold),
            other => Err(ServerError::Intake(format!(
                "unknown listing type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search parameters handed to the retrieval backend.
/// Built fresh from each form submission; never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    pub location: String,
    pub listing_type: ListingType,
    pub radius: Option<f64>,
    pub mls_only: bool,
    pub past_days: Option<i64>,
    /// Raw `YYYY-MM-DD` strings, not validated here.
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub foreclosure: bool,
    pub proxy: Option<String>,
}

/// Decoded `application/x-www-form-urlencoded` body, in submission order.
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(body: &[u8]) -> Self {
        let pairs = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Checkbox semantics: presence alone counts, whatever the value.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl SearchCriteria {
    pub fn from_form(form: &FormData) -> Result<Self, ServerError> {
        let listing_type = match form.get("listing_type") {
            Some(raw) => raw.parse()?,
            None => ListingType::default(),
        };

        let radius = form
            .non_empty("radius")
            .map(|raw| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| ServerError::Intake(format!("radius must be a number, got '{raw}'")))
            })
            .transpose()?;

        let past_days = form
            .non_empty("past_days")
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    ServerError::Intake(format!("past days must be a whole number, got '{raw}'"))
                })
            })
            .transpose()?;

        Ok(SearchCriteria {
            location: form.get("location").unwrap_or("").to_string(),
            listing_type,
            radius,
            mls_only: form.contains("mls_only"),
            past_days,
            date_from: form.non_empty("date_from").map(str::to_string),
            date_to: form.non_empty("date_to").map(str::to_string),
            foreclosure: form.contains("foreclosure"),
            proxy: form.non_empty("proxy").map(str::to_string),
        })
    }
}

// src/domain/listing.rs

use crate::domain::criteria::ListingType;
use crate::scraper::models::Property as ScraperProperty;
use chrono::{DateTime, NaiveDate};

const REALTOR_BASE_URL: &str = "https://www.realtor.com";

/// Column schema of a flattened listing, in output order.
/// `alt_photos` is kept last: it is internal and never shown or exported.
pub const LISTING_COLUMNS: [&str; 28] = [
    "property_url",
    "property_id",
    "listing_id",
    "mls",
    "mls_id",
    "status",
    "style",
    "street",
    "unit",
    "city",
    "state",
    "zip_code",
    "county",
    "beds",
    "full_baths",
    "half_baths",
    "sqft",
    "lot_sqft",
    "year_built",
    "list_price",
    "list_date",
    "sold_price",
    "last_sold_date",
    "latitude",
    "longitude",
    "is_foreclosure",
    "primary_photo",
    "alt_photos",
];

/// A scraped property flattened into display cells.
/// Sits between the nested source payload and the tabular result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingRow {
    pub property_url: Option<String>,
    pub property_id: Option<String>,
    pub listing_id: Option<String>,
    pub mls: Option<String>,
    pub mls_id: Option<String>,
    pub status: Option<String>,
    pub style: Option<String>,
    pub street: Option<String>,
    pub unit: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub county: Option<String>,
    pub beds: Option<i64>,
    pub full_baths: Option<i64>,
    pub half_baths: Option<i64>,
    pub sqft: Option<i64>,
    pub lot_sqft: Option<i64>,
    pub year_built: Option<i64>,
    pub list_price: Option<i64>,
    pub list_date: Option<NaiveDate>,
    pub sold_price: Option<i64>,
    pub last_sold_date: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_foreclosure: Option<bool>,
    pub primary_photo: Option<String>,
    pub alt_photos: Vec<String>,
}

/// Accepts both plain dates and RFC 3339 timestamps.
fn parse_listing_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
}

impl ListingRow {
    pub fn from_scraper_property(prop: &ScraperProperty) -> Self {
        let source = prop.source.as_ref();
        let location = prop.location.as_ref();
        let address = location.and_then(|l| l.address.as_ref());
        let description = prop.description.as_ref();
        let coordinate = address
            .and_then(|a| a.coordinate.as_ref())
            .or_else(|| location.and_then(|l| l.coordinate.as_ref()));

        let property_url = prop
            .href
            .clone()
            .or_else(|| {
                prop.permalink
                    .as_ref()
                    .map(|p| format!("{REALTOR_BASE_URL}/realestateandhomes-detail/{p}"))
            });

        let alt_photos = prop
            .photos
            .iter()
            .flatten()
            .filter_map(|p| p.href.clone())
            .collect();

        ListingRow {
            property_url,
            property_id: prop.property_id.clone(),
            listing_id: prop.listing_id.clone(),
            mls: source.and_then(|s| s.id.clone()),
            mls_id: source.and_then(|s| s.listing_id.clone()),
            status: prop.status.clone(),
            style: description.and_then(|d| d.property_type.clone()),
            street: address.and_then(|a| a.line.clone()),
            unit: address.and_then(|a| a.unit.clone()),
            city: address.and_then(|a| a.city.clone()),
            state: address.and_then(|a| a.state_code.clone()),
            zip_code: address.and_then(|a| a.postal_code.clone()),
            county: location
                .and_then(|l| l.county.as_ref())
                .and_then(|c| c.name.clone()),
            beds: description.and_then(|d| d.beds),
            full_baths: description.and_then(|d| d.baths_full),
            half_baths: description.and_then(|d| d.baths_half),
            sqft: description.and_then(|d| d.sqft),
            lot_sqft: description.and_then(|d| d.lot_sqft),
            year_built: description.and_then(|d| d.year_built),
            list_price: prop.list_price,
            list_date: parse_listing_date(prop.list_date.as_deref()),
            sold_price: description
                .and_then(|d| d.sold_price)
                .or(prop.last_sold_price),
            last_sold_date: parse_listing_date(
                prop.last_sold_date
                    .as_deref()
                    .or_else(|| description.and_then(|d| d.sold_date.as_deref())),
            ),
            latitude: coordinate.and_then(|c| c.lat),
            longitude: coordinate.and_then(|c| c.lon),
            is_foreclosure: prop.flags.as_ref().and_then(|f| f.is_foreclosure),
            primary_photo: prop.primary_photo.as_ref().and_then(|p| p.href.clone()),
            alt_photos,
        }
    }

    /// The date past-days and date-range filters compare against.
    pub fn relevant_date(&self, listing_type: ListingType) -> Option<NaiveDate> {
        match listing_type {
            ListingType::Sold => self.last_sold_date,
            ListingType::ForSale | ListingType::ForRent => self.list_date,
        }
    }

    pub fn has_mls(&self) -> bool {
        self.mls.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// Cells in `LISTING_COLUMNS` order; absent values become empty cells.
    pub fn into_cells(self) -> Vec<String> {
        fn cell<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }

        vec![
            cell(self.property_url),
            cell(self.property_id),
            cell(self.listing_id),
            cell(self.mls),
            cell(self.mls_id),
            cell(self.status),
            cell(self.style),
            cell(self.street),
            cell(self.unit),
            cell(self.city),
            cell(self.state),
            cell(self.zip_code),
            cell(self.county),
            cell(self.beds),
            cell(self.full_baths),
            cell(self.half_baths),
            cell(self.sqft),
            cell(self.lot_sqft),
            cell(self.year_built),
            cell(self.list_price),
            cell(self.list_date),
            cell(self.sold_price),
            cell(self.last_sold_date),
            cell(self.latitude),
            cell(self.longitude),
            cell(self.is_foreclosure),
            cell(self.primary_photo),
            self.alt_photos.join(", "),
        ]
    }
}

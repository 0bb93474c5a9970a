// realtor.rs
use crate::domain::{ListingRow, ListingType, PropertyTable, SearchCriteria, LISTING_COLUMNS};
use crate::scraper::models::Property;
use crate::scraper::{PropertySource, ScraperError};
use chrono::{Local, NaiveDate, TimeDelta};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::{Proxy, StatusCode};
use scraper::{Html, Selector};
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const REALTOR_BASE_URL: &str = "https://www.realtor.com/";
const ZENROWS_API_URL: &str = "https://api.zenrows.com/v1/";

// Where the search payload has lived in __NEXT_DATA__ over time.
const PROPERTY_PATHS: [&[&str]; 2] = [
    &["props", "pageProps", "properties"],
    &["props", "pageProps", "searchResults", "home_search", "results"],
];

/// Scrapes the first page of realtor.com search results for a location.
pub struct RealtorScraper {
    client: Client,
    timeout: Option<Duration>,
    zenrows_api_key: Option<String>,
}

impl RealtorScraper {
    pub fn new(
        timeout: Option<Duration>,
        zenrows_api_key: Option<String>,
    ) -> Result<Self, ScraperError> {
        let client = Self::build_client(timeout, None)?;

        Ok(Self {
            client,
            timeout,
            zenrows_api_key,
        })
    }

    fn build_client(timeout: Option<Duration>, proxy: Option<&str>) -> Result<Client, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout);

        if let Some(proxy) = proxy {
            let proxy = Proxy::all(proxy)
                .map_err(|e| ScraperError::InvalidCriteria(format!("bad proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }

    /// "San Francisco, CA" -> "San-Francisco_CA"
    pub fn location_slug(location: &str) -> String {
        location
            .trim()
            .replace(", ", "_")
            .replace(',', "_")
            .replace(' ', "-")
    }

    pub fn search_url(criteria: &SearchCriteria) -> Result<Url, ScraperError> {
        let slug = Self::location_slug(&criteria.location);
        if slug.is_empty() {
            return Err(ScraperError::InvalidCriteria("location is required".into()));
        }

        let mut url =
            Url::parse(REALTOR_BASE_URL).map_err(|e| ScraperError::Config(e.to_string()))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ScraperError::Config("realtor base URL cannot be a base".into()))?;
            segments.pop_if_empty();

            match criteria.listing_type {
                ListingType::ForSale => {
                    segments.push("realestateandhomes-search").push(&slug);
                }
                ListingType::ForRent => {
                    segments.push("apartments").push(&slug);
                }
                ListingType::Sold => {
                    segments
                        .push("realestateandhomes-search")
                        .push(&slug)
                        .push("show-recently-sold");
                }
            }

            if criteria.foreclosure {
                segments.push("show-foreclosure");
            }
            if let Some(radius) = criteria.radius {
                segments.push(&format!("radius-{radius}"));
            }
        }

        Ok(url)
    }

    fn fetch_html(&self, client: &Client, url: &Url) -> Result<String, ScraperError> {
        let resp = match &self.zenrows_api_key {
            Some(api_key) => client
                .get(ZENROWS_API_URL)
                .query(&[
                    ("url", url.as_str()),
                    ("apikey", api_key.as_str()),
                    ("original_status", "true"),
                    ("mode", "auto"),
                ])
                .send(),
            None => client.get(url.as_str()).send(),
        }
        .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ScraperError::Blocked(format!("HTTP {status} for {url}")));
        }
        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status} for {url}")));
        }

        if self.zenrows_api_key.is_some() {
            if let Some(err) = Self::zenrows_error(&text) {
                return Err(err);
            }
        }

        Ok(text)
    }

    /// ZenRows reports its own failures as a JSON body carrying a `code`.
    fn zenrows_error(body: &str) -> Option<ScraperError> {
        if !body.trim_start().starts_with('{') {
            return None;
        }
        let json = serde_json::from_str::<Value>(body).ok()?;
        json.get("code")
            .map(|_| ScraperError::Network(format!("ZenRows API error: {body}")))
    }

    pub fn extract_next_data(html: &str) -> Result<Value, ScraperError> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(r#"script[id="__NEXT_DATA__"]"#)
            .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        let element = document
            .select(&selector)
            .next()
            .ok_or(ScraperError::MissingNextData)?;

        let json_text: String = element.text().collect();
        serde_json::from_str(&json_text).map_err(|e| ScraperError::JsonParse(e.to_string()))
    }

    pub fn extract_properties(data: &Value) -> Result<Vec<Property>, ScraperError> {
        let arr = PROPERTY_PATHS
            .iter()
            .find_map(|path| path.iter().fold(data, |v, key| &v[*key]).as_array())
            .ok_or_else(|| ScraperError::UnexpectedShape("properties missing".to_string()))?;

        arr.iter()
            .map(|v| serde_json::from_value(v.clone()))
            .collect::<Result<Vec<Property>, _>>()
            .map_err(|e| ScraperError::Deserialize(e.to_string()))
    }

    fn parse_date_bound(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>, ScraperError> {
        raw.map(|s| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                ScraperError::InvalidCriteria(format!("{field} must be YYYY-MM-DD, got '{s}'"))
            })
        })
        .transpose()
    }

    /// Applies the filters the search URL cannot express.
    /// Listings without a relevant date are dropped once any date filter is set.
    pub fn filter_rows(
        rows: Vec<ListingRow>,
        criteria: &SearchCriteria,
        today: NaiveDate,
    ) -> Result<Vec<ListingRow>, ScraperError> {
        let date_from = Self::parse_date_bound(criteria.date_from.as_deref(), "date_from")?;
        let date_to = Self::parse_date_bound(criteria.date_to.as_deref(), "date_to")?;
        let cutoff = criteria
            .past_days
            .map(|days| {
                TimeDelta::try_days(days)
                    .and_then(|span| today.checked_sub_signed(span))
                    .ok_or_else(|| {
                        ScraperError::InvalidCriteria(format!("past_days out of range: {days}"))
                    })
            })
            .transpose()?;

        let filtered = rows
            .into_iter()
            .filter(|row| !criteria.mls_only || row.has_mls())
            .filter(|row| {
                if cutoff.is_none() && date_from.is_none() && date_to.is_none() {
                    return true;
                }
                let Some(date) = row.relevant_date(criteria.listing_type) else {
                    return false;
                };
                cutoff.map_or(true, |c| date >= c)
                    && date_from.map_or(true, |from| date >= from)
                    && date_to.map_or(true, |to| date <= to)
            })
            .collect();

        Ok(filtered)
    }

    pub fn into_table(rows: Vec<ListingRow>) -> PropertyTable {
        PropertyTable::new(
            LISTING_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows.into_iter().map(ListingRow::into_cells).collect(),
        )
    }
}

impl PropertySource for RealtorScraper {
    fn scrape_property(&self, criteria: &SearchCriteria) -> Result<PropertyTable, ScraperError> {
        let url = Self::search_url(criteria)?;

        let proxied;
        let client = match criteria.proxy.as_deref() {
            Some(proxy) => {
                proxied = Self::build_client(self.timeout, Some(proxy))?;
                &proxied
            }
            None => &self.client,
        };

        log::info!("🏠 Scraping {url}");
        let start = std::time::Instant::now();

        let html = self.fetch_html(client, &url)?;
        let data = Self::extract_next_data(&html)?;
        let properties = Self::extract_properties(&data)?;

        let rows = properties
            .iter()
            .map(ListingRow::from_scraper_property)
            .collect();
        let rows = Self::filter_rows(rows, criteria, Local::now().date_naive())?;

        log::info!(
            "✅ {} listings for '{}' ({} fetched) in {:?}",
            rows.len(),
            criteria.location,
            properties.len(),
            start.elapsed()
        );

        Ok(Self::into_table(rows))
    }
}

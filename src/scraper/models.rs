use serde::Deserialize;

// prop
//  ├── property_id / listing_id / permalink / href
//  ├── source
//  │    ├── id          (MLS)
//  │    └── listing_id  (MLS listing number)
//  ├── location
//  │    ├── address
//  │    │    ├── line / unit / city / state_code / postal_code
//  │    │    └── coordinate { lat, lon }
//  │    └── county { name }
//  ├── description
//  │    ├── beds / baths_full / baths_half / sqft / lot_sqft / year_built
//  │    ├── type / sold_price / sold_date
//  ├── status / list_price / list_date / last_sold_date
//  ├── flags { is_foreclosure }
//  └── primary_photo / photos

#[derive(Debug, Default, Deserialize)]
pub struct Property {
    pub property_id: Option<String>,
    pub listing_id: Option<String>,
    pub permalink: Option<String>,
    pub href: Option<String>,

    pub source: Option<Source>,
    pub location: Option<Location>,
    pub description: Option<Description>,

    pub status: Option<String>,
    pub list_price: Option<i64>,
    pub list_date: Option<String>,
    pub last_sold_price: Option<i64>,
    pub last_sold_date: Option<String>,

    pub flags: Option<Flags>,

    pub primary_photo: Option<Photo>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Source {
    pub id: Option<String>,
    pub listing_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Location {
    pub address: Option<Address>,
    pub county: Option<County>,
    // Older payloads put the coordinate here instead of under address.
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    pub line: Option<String>,
    pub unit: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct County {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Coordinate {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Description {
    pub beds: Option<i64>,
    pub baths_full: Option<i64>,
    pub baths_half: Option<i64>,
    pub sqft: Option<i64>,
    pub lot_sqft: Option<i64>,
    pub year_built: Option<i64>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub sold_price: Option<i64>,
    pub sold_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Flags {
    pub is_foreclosure: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Photo {
    pub href: Option<String>,
}

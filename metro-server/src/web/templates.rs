//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Station;

/// Home page with the source/destination form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOption>,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// One dropdown entry.
pub struct StationOption {
    pub id: String,
    pub name: String,
}

impl StationOption {
    /// Build from a domain station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
        }
    }
}

//! Station dataset loading.
//!
//! Fetches the stations JSON feed over HTTP (or reads it from a local file),
//! converts the feed's records into domain stations, and owns the current
//! graph behind a refreshable snapshot.

mod client;
mod error;
mod network;
mod parse;

pub use client::{DatasetClient, DatasetClientConfig};
pub use error::DatasetError;
pub use network::{MetroNetwork, choose_policy};
pub use parse::{StationDto, load_file, load_str};

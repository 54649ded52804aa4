//! Feed DTOs and conversion into domain stations.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::domain::{LineId, Station, StationId};

use super::error::DatasetError;

/// A coordinate as the feed serializes it: some feed versions use numbers,
/// others quote them as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Number(n) => Some(*n),
            Coordinate::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One station record as it appears in the feed.
///
/// The feed is an object keyed by station id; each value carries the display
/// name(s), line membership (`lines` list, or the scalar `line` in older feed
/// versions), optional coordinates, and optionally an explicit `relations`
/// adjacency list.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    /// Primary display name; the object key is used when absent.
    pub name: Option<String>,

    /// Localized names keyed by language tag.
    #[serde(default)]
    pub translations: HashMap<String, String>,

    /// Line membership, newer feed versions.
    #[serde(default)]
    pub lines: Vec<LineId>,

    /// Single-line membership, older feed versions.
    pub line: Option<LineId>,

    latitude: Option<Coordinate>,
    longitude: Option<Coordinate>,

    /// Explicit one-hop adjacency. Absent in feed versions that expect
    /// shared-line derivation; distinct from present-but-empty.
    pub relations: Option<Vec<String>>,

    /// Out-of-service marker.
    #[serde(default)]
    pub disabled: bool,
}

impl StationDto {
    fn into_station(self, key: &str) -> Result<Station, DatasetError> {
        let id = StationId::parse(key).map_err(|source| DatasetError::InvalidKey {
            key: key.to_string(),
            source,
        })?;

        let lines = if self.lines.is_empty() {
            self.line.into_iter().collect()
        } else {
            self.lines
        };

        let relations = self
            .relations
            .map(|targets| {
                targets
                    .into_iter()
                    .map(|target| {
                        StationId::parse(&target).map_err(|source| {
                            DatasetError::InvalidRelation {
                                station: key.to_string(),
                                target,
                                source,
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let coordinates = match (
            self.latitude.as_ref().and_then(Coordinate::as_f64),
            self.longitude.as_ref().and_then(Coordinate::as_f64),
        ) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        };

        Ok(Station {
            name: self.name.unwrap_or_else(|| id.as_str().to_string()),
            id,
            translations: self.translations,
            lines,
            coordinates,
            relations,
            disabled: self.disabled,
        })
    }
}

/// Parse a stations feed document into domain stations.
///
/// The feed object lands in a `BTreeMap`, so the returned order (and
/// everything downstream that inherits it, notably derived adjacency) is
/// sorted by key and reproducible across loads.
pub fn load_str(json: &str) -> Result<Vec<Station>, DatasetError> {
    let raw: BTreeMap<String, StationDto> =
        serde_json::from_str(json).map_err(|e| DatasetError::Json {
            message: e.to_string(),
        })?;

    raw.into_iter()
        .map(|(key, dto)| dto.into_station(&key))
        .collect()
}

/// Read and parse a stations feed document from a local file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Station>, DatasetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_str(&json)
}

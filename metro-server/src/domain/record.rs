//! The station record.

use std::collections::HashMap;

use super::{LineId, StationId};

/// One metro stop, as loaded from the dataset.
///
/// The record is immutable after loading; the graph layer owns adjacency
/// derived from `relations` or from shared line membership.
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique identifier, stable across the dataset.
    pub id: StationId,

    /// Primary human-readable label.
    pub name: String,

    /// Additional localized labels, keyed by language tag (e.g. "fa").
    pub translations: HashMap<String, String>,

    /// Lines this station belongs to, in dataset order. Non-empty for any
    /// station accepted into a graph.
    pub lines: Vec<LineId>,

    /// Latitude/longitude pair, passed through to renderers untouched.
    pub coordinates: Option<(f64, f64)>,

    /// Explicit one-hop adjacency, in dataset order. `None` when the dataset
    /// only supports shared-line derivation.
    pub relations: Option<Vec<StationId>>,

    /// Whether the dataset marks this station as out of service. Disabled
    /// stations still participate in routing.
    pub disabled: bool,
}

impl Station {
    /// Whether this station serves more than one line.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    /// Whether this station serves the given line.
    pub fn on_line(&self, line: LineId) -> bool {
        self.lines.contains(&line)
    }

    /// The first line in this station's `lines` order that the other station
    /// also serves, if any.
    ///
    /// The "first in self's order" tie-break is load-bearing: the direct-route
    /// walk keys off it, and callers rely on it being reproducible.
    pub fn common_line(&self, other: &Station) -> Option<LineId> {
        self.lines.iter().copied().find(|l| other.on_line(*l))
    }
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{GeoTableError, Result};
use crate::models::{Arc, Assignment, Node};

pub const NODES_COLUMNS: [&str; 13] = [
    "id",
    "lat",
    "lon",
    "altMeters",
    "nodeName",
    "nodeType",
    "leafletIconPrefix",
    "leafletIconType",
    "leafletColor",
    "leafletIconText",
    "cesiumIconType",
    "cesiumColor",
    "cesiumIconText",
];

pub const ARCS_COLUMNS: [&str; 14] = [
    "odID",
    "startLat",
    "startLon",
    "endLat",
    "endLon",
    "leafletColor",
    "leafletWeight",
    "leafletStyle",
    "leafletOpacity",
    "useArrows",
    "cesiumColor",
    "cesiumWeight",
    "cesiumStyle",
    "cesiumOpacity",
];

pub const ASSIGNMENTS_COLUMNS: [&str; 22] = [
    "odID",
    "objectID",
    "modelFile",
    "modelScale",
    "modelMinPxSize",
    "startTimeSec",
    "startLat",
    "startLon",
    "startAltMeters",
    "endTimeSec",
    "endLat",
    "endLon",
    "endAltMeters",
    "leafletColor",
    "leafletWeight",
    "leafletStyle",
    "leafletOpacity",
    "useArrows",
    "cesiumColor",
    "cesiumWeight",
    "cesiumStyle",
    "cesiumOpacity",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Nodes,
    Arcs,
    Assignments,
}

impl TableKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "nodes" => Some(TableKind::Nodes),
            "arcs" => Some(TableKind::Arcs),
            "assignments" => Some(TableKind::Assignments),
            _ => None,
        }
    }

    /// Column names in export order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Nodes => &NODES_COLUMNS,
            TableKind::Arcs => &ARCS_COLUMNS,
            TableKind::Assignments => &ASSIGNMENTS_COLUMNS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Nodes => "nodes",
            TableKind::Arcs => "arcs",
            TableKind::Assignments => "assignments",
        }
    }
}

impl FromStr for TableKind {
    type Err = GeoTableError;

    fn from_str(s: &str) -> Result<Self> {
        TableKind::parse(s).ok_or_else(|| GeoTableError::UnknownTableKind(s.to_string()))
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A record type that can live in a [`Table`]
pub trait TableRow: Clone + Serialize + DeserializeOwned {
    const KIND: TableKind;

    /// The sequence identifier (`id` for nodes, `odID` for arcs and assignments)
    fn row_id(&self) -> u32;

    /// Field values as text, in `KIND.columns()` order
    fn fields(&self) -> Vec<String>;
}

/// An ordered collection of rows sharing one schema.
///
/// Tables are never mutated once built: growing a table always produces a
/// new one with the old rows as prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: TableRow> Table<R> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// `prior` rows (if any) followed by `rows`
    pub fn appended(prior: Option<&Table<R>>, rows: Vec<R>) -> Self {
        match prior {
            Some(prior) => {
                let mut combined = Vec::with_capacity(prior.len() + rows.len());
                combined.extend_from_slice(&prior.rows);
                combined.extend(rows);
                Self { rows: combined }
            }
            None => Self { rows },
        }
    }

    pub fn concat(&self, other: &Table<R>) -> Self {
        Self::appended(Some(self), other.rows.clone())
    }

    pub fn kind(&self) -> TableKind {
        R::KIND
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::KIND.columns()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_id(&self) -> Option<u32> {
        self.rows.iter().map(TableRow::row_id).max()
    }

    /// First identifier for rows appended to `prior`: `start_id`, raised past
    /// every identifier already present
    pub fn next_id(prior: Option<&Table<R>>, start_id: u32) -> Result<u32> {
        if start_id == 0 {
            return Err(GeoTableError::InvalidStartId(start_id));
        }

        match prior.and_then(Table::max_id) {
            Some(max_id) => max_id
                .checked_add(1)
                .map(|next| start_id.max(next))
                .ok_or(GeoTableError::IdOverflow {
                    first: max_id,
                    count: 1,
                }),
            None => Ok(start_id),
        }
    }

    /// Like [`Table::next_id`], but also checks that `count` contiguous ids
    /// starting there fit in `u32`
    pub fn reserve_ids(prior: Option<&Table<R>>, start_id: u32, count: usize) -> Result<u32> {
        let first = Self::next_id(prior, start_id)?;
        if count > 0 {
            u32::try_from(count - 1)
                .ok()
                .and_then(|span| first.checked_add(span))
                .ok_or(GeoTableError::IdOverflow { first, count })?;
        }
        Ok(first)
    }
}

impl<R: TableRow> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A table whose kind is only known at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyTable {
    Nodes(Table<Node>),
    Arcs(Table<Arc>),
    Assignments(Table<Assignment>),
}

impl AnyTable {
    pub fn empty(kind: TableKind) -> Self {
        match kind {
            TableKind::Nodes => AnyTable::Nodes(Table::new()),
            TableKind::Arcs => AnyTable::Arcs(Table::new()),
            TableKind::Assignments => AnyTable::Assignments(Table::new()),
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            AnyTable::Nodes(_) => TableKind::Nodes,
            AnyTable::Arcs(_) => TableKind::Arcs,
            AnyTable::Assignments(_) => TableKind::Assignments,
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.kind().columns()
    }

    pub fn len(&self) -> usize {
        match self {
            AnyTable::Nodes(t) => t.len(),
            AnyTable::Arcs(t) => t.len(),
            AnyTable::Assignments(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Create an empty table for a case-insensitive kind token.
///
/// Unknown kinds fail with [`GeoTableError::UnknownTableKind`].
pub fn init_table(kind: &str) -> Result<AnyTable> {
    let kind: TableKind = kind.parse()?;
    Ok(AnyTable::empty(kind))
}

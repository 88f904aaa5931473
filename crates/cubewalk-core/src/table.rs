//! The fixed vertex-adjacency table of the cube graph.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, WalkError};

/// Identifier for one corner of the cube graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u8);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u8 {
        self.0
    }
}

/// Literal neighbor rows of the cube graph, index = vertex 0..7.
///
/// The rows list non-redundant neighbor entries exactly as the enumeration
/// consumes them. Row order and entry order are load-bearing: the walk
/// enumerator follows them verbatim, so the table is data, not logic.
const CUBE_ROWS: [&[u8]; 8] = [
    &[1, 4],
    &[0, 2, 5],
    &[1, 3, 6],
    &[2, 7],
    &[0, 5],
    &[4, 6, 1],
    &[5, 7, 2],
    &[6, 3],
];

/// Immutable, ordered mapping from vertex id to its ordered neighbor list.
///
/// Every public constructor yields a structurally valid table, so consumers
/// may index neighbor rows without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyTable {
    rows: Vec<Vec<VertexId>>,
}

impl AdjacencyTable {
    /// Returns the fixed adjacency table of the cube graph.
    pub fn cube() -> Self {
        let rows = CUBE_ROWS
            .iter()
            .map(|row| row.iter().copied().map(VertexId::from_raw).collect())
            .collect();
        Self { rows }
    }

    /// Builds a table from raw neighbor rows, rejecting malformed input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, WalkError> {
        let table = Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(VertexId::from_raw).collect())
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Re-checks the structural invariants of the table.
    ///
    /// A violation is a programming error in the table literal, caught by
    /// tests; it is never a runtime-recoverable condition.
    pub fn validate(&self) -> Result<(), WalkError> {
        if self.rows.is_empty() {
            return Err(WalkError::Table(ErrorInfo::new(
                "empty-table",
                "adjacency table requires at least one vertex",
            )));
        }
        if self.rows.len() > usize::from(u8::MAX) + 1 {
            return Err(WalkError::Table(
                ErrorInfo::new("table-too-large", "vertex ids must fit in a single byte")
                    .with_context("vertices", self.rows.len().to_string()),
            ));
        }
        let len = self.rows.len();
        for (vertex, row) in self.rows.iter().enumerate() {
            for (slot, neighbor) in row.iter().enumerate() {
                if usize::from(neighbor.as_raw()) >= len {
                    return Err(WalkError::Table(
                        ErrorInfo::new(
                            "vertex-out-of-range",
                            "neighbor entry names a vertex outside the table",
                        )
                        .with_context("vertex", vertex.to_string())
                        .with_context("neighbor", neighbor.as_raw().to_string()),
                    ));
                }
                if usize::from(neighbor.as_raw()) == vertex {
                    return Err(WalkError::Table(
                        ErrorInfo::new("self-loop", "vertex lists itself as a neighbor")
                            .with_context("vertex", vertex.to_string()),
                    ));
                }
                if row[..slot].contains(neighbor) {
                    return Err(WalkError::Table(
                        ErrorInfo::new("duplicate-neighbor", "neighbor row repeats an entry")
                            .with_context("vertex", vertex.to_string())
                            .with_context("neighbor", neighbor.as_raw().to_string()),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Returns the number of vertices in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no vertices.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all vertex identifiers in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.rows.len()).map(|raw| VertexId::from_raw(raw as u8))
    }

    /// Returns the ordered neighbor list of the provided vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this table. Ids obtained from
    /// [`vertices`](Self::vertices) or from neighbor rows are always valid.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.rows[usize::from(vertex.as_raw())]
    }

    /// Returns whether `to` appears in the neighbor row of `from`.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).contains(&to)
    }
}

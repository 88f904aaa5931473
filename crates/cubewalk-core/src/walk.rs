//! Walk tuples and the nested-loop enumerator that produces them.

use serde::{Deserialize, Serialize};

use crate::table::{AdjacencyTable, VertexId};

/// An ordered walk across four cube vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    /// Starting vertex.
    pub first: VertexId,
    /// Second vertex, a neighbor of the first.
    pub second: VertexId,
    /// Third vertex, a neighbor of the second.
    pub third: VertexId,
    /// Final vertex, a neighbor of the third.
    pub fourth: VertexId,
}

impl Walk {
    /// Builds a walk from its four vertices in order.
    pub fn from_vertices(vertices: [VertexId; 4]) -> Self {
        let [first, second, third, fourth] = vertices;
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    /// Returns the four vertices of the walk in order.
    pub fn vertices(&self) -> [VertexId; 4] {
        [self.first, self.second, self.third, self.fourth]
    }

    /// Returns whether the walk satisfies the enumeration constraints.
    ///
    /// Each consecutive pair must be an edge of the table, the third vertex
    /// must differ from the first, and the fourth must differ from the first
    /// two. These are exactly the constraints the enumerator enforces.
    pub fn is_admissible(&self, table: &AdjacencyTable) -> bool {
        table.has_edge(self.first, self.second)
            && table.has_edge(self.second, self.third)
            && table.has_edge(self.third, self.fourth)
            && self.third != self.first
            && self.fourth != self.second
            && self.fourth != self.first
    }
}

/// Enumerates every admissible four-vertex walk over the provided table.
///
/// The starting vertex ascends through the table and each later position
/// follows the stored neighbor order of the previous vertex. The third
/// vertex skips the start, the fourth skips the first two. No other check
/// is applied, and nothing is sorted or deduplicated afterwards: the
/// emission order is an observable contract.
pub fn enumerate_walks(table: &AdjacencyTable) -> Vec<Walk> {
    let mut walks = Vec::new();
    for first in table.vertices() {
        for &second in table.neighbors(first) {
            for &third in table.neighbors(second) {
                if third == first {
                    continue;
                }
                for &fourth in table.neighbors(third) {
                    if fourth == second || fourth == first {
                        continue;
                    }
                    walks.push(Walk {
                        first,
                        second,
                        third,
                        fourth,
                    });
                }
            }
        }
    }
    walks
}

//! Canonical hashing of walk sequences.

use sha2::{Digest, Sha256};

use crate::walk::Walk;

/// Computes the canonical structural hash of an ordered walk sequence.
///
/// The digest covers the walk count as a little-endian u64 followed by the
/// four vertex bytes of every walk in emission order, so any reordering or
/// mutation of the sequence changes the hash.
pub fn canonical_hash(walks: &[Walk]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((walks.len() as u64).to_le_bytes());
    for walk in walks {
        for vertex in walk.vertices() {
            hasher.update([vertex.as_raw()]);
        }
    }
    format!("{:x}", hasher.finalize())
}

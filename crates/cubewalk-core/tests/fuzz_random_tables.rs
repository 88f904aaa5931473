use cubewalk_core::{canonical_hash, enumerate_walks, AdjacencyTable};
use proptest::prelude::*;

fn table_strategy() -> impl Strategy<Value = AdjacencyTable> {
    (2usize..9).prop_flat_map(|vertices| {
        proptest::collection::vec(
            proptest::collection::btree_set(0..vertices as u8, 0..vertices),
            vertices,
        )
        .prop_map(move |rows| {
            let rows: Vec<Vec<u8>> = rows
                .into_iter()
                .enumerate()
                .map(|(vertex, neighbors)| {
                    neighbors
                        .into_iter()
                        .filter(|&neighbor| usize::from(neighbor) != vertex)
                        .collect()
                })
                .collect();
            AdjacencyTable::from_rows(rows).expect("generated rows are valid")
        })
    })
}

proptest! {
    #[test]
    fn random_tables_emit_only_admissible_walks(table in table_strategy()) {
        let walks = enumerate_walks(&table);
        for walk in &walks {
            prop_assert!(walk.is_admissible(&table));
        }
        let repeat = enumerate_walks(&table);
        prop_assert_eq!(canonical_hash(&walks), canonical_hash(&repeat));
    }
}

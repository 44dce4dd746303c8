use chartprep::{prepare, ChartError, ColumnKey, ColumnsMapping, Table};
use proptest::prelude::*;
use serde_json::{json, Value};

/// A table with one named index level `key` and `ncols` integer columns,
/// plus a mapping over a shuffled subset of its flattened columns.
fn table_and_mapping() -> impl Strategy<Value = (Table, ColumnsMapping)> {
    (1usize..5, 0usize..20).prop_flat_map(|(ncols, nrows)| {
        let cells = prop::collection::vec(prop::collection::vec(any::<i32>(), ncols), nrows);
        let flattened: Vec<ColumnKey> = std::iter::once("key".to_string())
            .chain((0..ncols).map(|i| format!("c{i}")))
            .map(ColumnKey::single)
            .collect();
        let picks = prop::sample::subsequence(flattened.clone(), 0..=flattened.len()).prop_shuffle();

        (cells, picks).prop_map(move |(cells, picks)| {
            let columns = (0..ncols).map(|i| ColumnKey::single(format!("c{i}"))).collect();
            let index = (0..cells.len()).map(|i| vec![json!(format!("r{i}"))]).collect();
            let rows = cells
                .into_iter()
                .map(|row| row.into_iter().map(Value::from).collect())
                .collect();
            let table = Table::new(columns, rows)
                .unwrap()
                .with_index(vec![Some("key".to_string())], index)
                .unwrap();

            let mapping = picks
                .into_iter()
                .map(|k| {
                    let name = format!("{} out", k.levels()[0]);
                    (k, name)
                })
                .collect();
            (table, mapping)
        })
    })
}

proptest! {
    #[test]
    fn columns_follow_mapping_order((table, mapping) in table_and_mapping()) {
        let data = prepare(&table, &mapping).unwrap();
        let expected: Vec<String> = mapping.values().cloned().collect();
        prop_assert_eq!(&data.headers, &expected);
        prop_assert_eq!(data.n_rows(), table.n_rows());
    }

    #[test]
    fn cells_come_from_the_mapped_column((table, mapping) in table_and_mapping()) {
        let data = prepare(&table, &mapping).unwrap();
        let flat = table.reset_index().unwrap();
        for (j, key) in mapping.keys().enumerate() {
            let source = flat.column(key).unwrap();
            for (i, row) in data.rows.iter().enumerate() {
                prop_assert_eq!(&row[j], source[i]);
            }
        }
    }

    #[test]
    fn repeated_calls_agree((table, mapping) in table_and_mapping()) {
        let first = prepare(&table, &mapping).unwrap();
        let second = prepare(&table, &mapping).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn absent_key_fails((table, mut mapping) in table_and_mapping()) {
        mapping.insert(ColumnKey::single("absent"), "Absent".to_string());
        let result = prepare(&table, &mapping);
        let is_missing = matches!(result, Err(ChartError::MissingColumn { .. }));
        prop_assert!(is_missing);
    }

    #[test]
    fn partial_tuple_never_matches(
        top in "[a-z]{1,6}",
        sub in "[a-z]{1,6}",
        value in any::<i32>(),
    ) {
        let table = Table::new(
            vec![ColumnKey::new([top.as_str(), sub.as_str()])],
            vec![vec![json!(value)]],
        )
        .unwrap();

        for partial in [ColumnKey::single(top.as_str()), ColumnKey::single(sub.as_str())] {
            let mapping: ColumnsMapping = [(partial, "X".to_string())].into_iter().collect();
            let is_missing = matches!(prepare(&table, &mapping), Err(ChartError::MissingColumn { .. }));
            prop_assert!(is_missing);
        }

        let full: ColumnsMapping =
            [(ColumnKey::new([top.as_str(), sub.as_str()]), "X".to_string())].into_iter().collect();
        let data = prepare(&table, &full).unwrap();
        prop_assert_eq!(&data.rows[0][0], &json!(value));
    }
}

#[test]
fn sales_example() {
    let table = Table::new(
        vec![ColumnKey::single("value")],
        vec![vec![json!(100.0)], vec![json!(120.0)]],
    )
    .unwrap()
    .with_index(
        vec![Some("metric".to_string()), Some("year".to_string())],
        vec![
            vec![json!("sales"), json!(2020)],
            vec![json!("sales"), json!(2021)],
        ],
    )
    .unwrap();

    let mapping: ColumnsMapping = [
        (ColumnKey::single("year"), "Year".to_string()),
        (ColumnKey::single("value"), "Value".to_string()),
    ]
    .into_iter()
    .collect();

    let data = prepare(&table, &mapping).unwrap();
    assert_eq!(data.headers, vec!["Year", "Value"]);
    assert_eq!(
        data.rows,
        vec![vec![json!(2020), json!(100.0)], vec![json!(2021), json!(120.0)]]
    );
    assert!(data.column("metric").is_none());
}

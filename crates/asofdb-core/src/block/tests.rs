use crate::{
    block::{Block, BlockError, Column, ColumnData, RowLocator},
    types::{ColumnType, Decimal, Timestamp},
    value::{Value, ValueTag},
};
use std::sync::Arc;

fn trades() -> Arc<Block> {
    Block::shared(vec![
        Column::new("ts", ColumnType::UInt64, ColumnData::UInt64(vec![10, 20, 30]))
            .expect("ts column"),
        Column::new(
            "price",
            ColumnType::Decimal64 { scale: 2 },
            ColumnData::Decimal64(vec![1_050, 1_075, 1_100]),
        )
        .expect("price column"),
        Column::new(
            "symbol",
            ColumnType::Text,
            ColumnData::Values(vec!["A".into(), Value::Null, "C".into()]),
        )
        .expect("symbol column"),
    ])
    .expect("block")
}

#[test]
fn column_rejects_storage_of_another_type() {
    let err = Column::new("ts", ColumnType::UInt32, ColumnData::UInt64(vec![1]))
        .expect_err("mismatched storage");

    assert!(matches!(
        err,
        BlockError::ColumnDataMismatch {
            found: "UInt64",
            ..
        }
    ));
}

#[test]
fn column_rejects_dense_types_stored_as_values() {
    let err = Column::new("ts", ColumnType::Int64, ColumnData::Values(vec![Value::Int(1)]))
        .expect_err("dense kind must use native storage");

    assert!(matches!(err, BlockError::ColumnDataMismatch { .. }));
}

#[test]
fn generic_column_checks_each_value_tag() {
    let err = Column::new(
        "name",
        ColumnType::Text,
        ColumnData::Values(vec!["a".into(), Value::Int(1)]),
    )
    .expect_err("int inside text column");

    assert_eq!(
        err,
        BlockError::ColumnValueMismatch {
            name: "name".to_string(),
            column_type: ColumnType::Text,
            found: ValueTag::Int,
        }
    );
}

#[test]
fn block_rejects_ragged_columns() {
    let err = Block::new(vec![
        Column::new("a", ColumnType::Int8, ColumnData::Int8(vec![1, 2])).expect("a"),
        Column::new("b", ColumnType::Int8, ColumnData::Int8(vec![1])).expect("b"),
    ])
    .expect_err("ragged");

    assert_eq!(
        err,
        BlockError::RaggedColumn {
            name: "b".to_string(),
            rows: 1,
            expected: 2,
        }
    );
}

#[test]
fn empty_block_has_no_rows() {
    let block = Block::new(Vec::new()).expect("empty block");
    assert!(block.is_empty());
    assert_eq!(block.rows(), 0);
}

#[test]
fn locator_reads_row_values_in_place() {
    let block = trades();
    let row = block.locate(1).expect("row 1");

    assert_eq!(row.offset(), 1);
    assert_eq!(row.value(0), Ok(Value::Uint(20)));
    assert_eq!(row.value(1), Ok(Value::Decimal(Decimal::new(1_075, 2))));
    assert_eq!(row.value(2), Ok(Value::Null));
    assert_eq!(row.values().len(), 3);
    assert_eq!(
        row.value(9),
        Err(BlockError::ColumnOutOfRange {
            index: 9,
            columns: 3
        })
    );
}

#[test]
fn locator_rejects_offsets_past_the_end() {
    let block = trades();
    let err = RowLocator::new(block, 3).expect_err("out of range");

    assert_eq!(err, BlockError::RowOutOfRange { offset: 3, rows: 3 });
}

#[test]
fn locators_share_block_ownership() {
    let block = trades();
    let first = block.locate(0).expect("row 0");
    let again = first.clone();
    let other = block.locate(2).expect("row 2");
    assert_eq!(Arc::strong_count(&block), 4);

    drop(block);
    assert!(first.same_row(&again));
    assert!(!first.same_row(&other));
    assert_eq!(other.value(0), Ok(Value::Uint(30)));
}

#[test]
fn same_offset_in_another_block_is_another_row() {
    let left = trades();
    let right = trades();

    let a = left.locate(0).expect("left row");
    let b = right.locate(0).expect("right row");
    assert!(!a.same_row(&b));
}

#[test]
fn datetime_columns_read_back_as_timestamps() {
    let block = Block::shared(vec![
        Column::new(
            "at",
            ColumnType::DateTime64 { precision: 3 },
            ColumnData::DateTime64(vec![1_500]),
        )
        .expect("at"),
    ])
    .expect("block");

    assert_eq!(
        block.locate(0).and_then(|row| row.value(0)),
        Ok(Value::Timestamp(Timestamp::from_millis(1_500)))
    );
}

#[test]
fn column_lookup_by_name() {
    let block = trades();
    let (index, column) = block.column_by_name("price").expect("price column");

    assert_eq!(index, 1);
    assert_eq!(column.column_type(), ColumnType::Decimal64 { scale: 2 });
    assert!(block.column_by_name("missing").is_none());
    assert_eq!(block.locators().len(), 3);
}

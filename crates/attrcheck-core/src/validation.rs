use crate::contract::TableContract;
use crate::model::ColumnDescriptor;

/// Essential columns of `contract` absent from `columns`.
///
/// Order follows the contract's essential list.
pub fn missing_essential_columns(
    contract: &TableContract,
    columns: &[ColumnDescriptor],
) -> Vec<String> {
    contract
        .essential_columns
        .iter()
        .filter(|essential| !columns.iter().any(|column| column.name == **essential))
        .map(|essential| essential.to_string())
        .collect()
}

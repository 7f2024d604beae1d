#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseRow {
    pub article: String,
    pub category: String,
    pub name: String,
    pub showcase_stock: i64,
    pub min_stock: i64,
    pub warehouse_stock: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseRow {
    pub article: String,
    pub category: String,
    pub name: String,
    pub stock: i64,
}

/// Replenishment card on the overview screen; warehouse stock is unknown
/// until the warehouse feed answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub name: String,
    pub min_stock: i64,
    pub showcase_stock: i64,
    pub warehouse_stock: Option<i64>,
}

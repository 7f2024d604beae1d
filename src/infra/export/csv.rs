use std::io::Write;

use anyhow::{Context, Result};

use crate::domain::entities::inventory::{ShowcaseRow, WarehouseRow};
use crate::domain::entities::notification::NotificationRow;

pub const NOTIFICATION_HEADERS: [&str; 9] = [
    "Номер",
    "Дата / время",
    "Наименование инцидента",
    "Описание инцидента",
    "Статус",
    "Камера",
    "Рабочее место",
    "Тип",
    "Ответственный",
];

pub const SHOWCASE_HEADERS: [&str; 6] = [
    "Артикул",
    "Категория",
    "Наименование",
    "Остаток на витрине",
    "Минимальный остаток",
    "Остаток на складе",
];

pub const WAREHOUSE_HEADERS: [&str; 4] = ["Артикул", "Категория", "Наименование", "Остаток"];

/// Writes the current (filtered and sorted) table content as CSV.
pub fn write_csv<R, W: Write>(
    writer: W,
    headers: &[&str],
    rows: &[R],
    to_record: impl Fn(&R) -> Vec<String>,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(headers)
        .context("failed to write csv header")?;

    for row in rows {
        csv_writer
            .write_record(to_record(row))
            .context("failed to write csv row")?;
    }

    csv_writer.flush().context("failed to flush csv output")?;
    Ok(())
}

pub fn notification_record(row: &NotificationRow) -> Vec<String> {
    vec![
        row.id.clone(),
        row.date_time.clone(),
        row.incident_name.clone(),
        row.description.clone(),
        row.status.clone(),
        row.camera.clone(),
        row.workplace.clone(),
        row.type_label.clone(),
        row.assignee.clone(),
    ]
}

pub fn showcase_record(row: &ShowcaseRow) -> Vec<String> {
    vec![
        row.article.clone(),
        row.category.clone(),
        row.name.clone(),
        row.showcase_stock.to_string(),
        row.min_stock.to_string(),
        row.warehouse_stock.to_string(),
    ]
}

pub fn warehouse_record(row: &WarehouseRow) -> Vec<String> {
    vec![
        row.article.clone(),
        row.category.clone(),
        row.name.clone(),
        row.stock.to_string(),
    ]
}

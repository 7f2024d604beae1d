use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::domain::datetime::{date_sort_key, parse_display_date_time};
use crate::domain::entities::employee::EmployeeRow;
use crate::domain::entities::inventory::{ShowcaseRow, WarehouseRow};
use crate::domain::entities::notification::NotificationRow;
use crate::domain::entities::table::SortSpec;
use crate::usecase::table::adapter::{NoDimension, TableAdapter};
use crate::usecase::table::sort::{compare_text, parse_row_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationField {
    Id,
    DateTime,
    IncidentName,
    Description,
    Status,
    Camera,
    Workplace,
    TypeLabel,
    Assignee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationDimension {
    Status,
    Type,
}

pub struct NotificationsAdapter;

impl TableAdapter for NotificationsAdapter {
    type Row = NotificationRow;
    type Field = NotificationField;
    type Dimension = NotificationDimension;

    fn default_sort() -> SortSpec<Self::Field> {
        SortSpec::descending(NotificationField::Id)
    }

    fn search_text(row: &Self::Row) -> String {
        [
            row.id.as_str(),
            row.incident_name.as_str(),
            row.description.as_str(),
            row.assignee.as_str(),
            row.camera.as_str(),
            row.workplace.as_str(),
        ]
        .join(" ")
    }

    fn dimension_value(row: &Self::Row, dimension: Self::Dimension) -> &str {
        match dimension {
            NotificationDimension::Status => &row.status,
            NotificationDimension::Type => &row.type_label,
        }
    }

    fn row_date(row: &Self::Row) -> Option<NaiveDateTime> {
        parse_display_date_time(&row.date_time)
    }

    fn compare(left: &Self::Row, right: &Self::Row, field: Self::Field) -> Ordering {
        match field {
            NotificationField::Id => parse_row_id(&left.id).cmp(&parse_row_id(&right.id)),
            NotificationField::DateTime => {
                date_sort_key(&left.date_time).cmp(&date_sort_key(&right.date_time))
            }
            NotificationField::IncidentName => {
                compare_text(&left.incident_name, &right.incident_name)
            }
            NotificationField::Description => compare_text(&left.description, &right.description),
            NotificationField::Status => compare_text(&left.status, &right.status),
            NotificationField::Camera => compare_text(&left.camera, &right.camera),
            NotificationField::Workplace => compare_text(&left.workplace, &right.workplace),
            NotificationField::TypeLabel => compare_text(&left.type_label, &right.type_label),
            NotificationField::Assignee => compare_text(&left.assignee, &right.assignee),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseField {
    Article,
    Category,
    Name,
    ShowcaseStock,
    MinStock,
    WarehouseStock,
}

pub struct ShowcaseAdapter;

impl TableAdapter for ShowcaseAdapter {
    type Row = ShowcaseRow;
    type Field = ShowcaseField;
    type Dimension = NoDimension;

    fn default_sort() -> SortSpec<Self::Field> {
        SortSpec::descending(ShowcaseField::Article)
    }

    fn search_text(row: &Self::Row) -> String {
        format!("{} {} {}", row.article, row.category, row.name)
    }

    fn dimension_value(_row: &Self::Row, dimension: Self::Dimension) -> &str {
        match dimension {}
    }

    fn compare(left: &Self::Row, right: &Self::Row, field: Self::Field) -> Ordering {
        match field {
            ShowcaseField::Article => {
                parse_row_id(&left.article).cmp(&parse_row_id(&right.article))
            }
            ShowcaseField::Category => compare_text(&left.category, &right.category),
            ShowcaseField::Name => compare_text(&left.name, &right.name),
            ShowcaseField::ShowcaseStock => left.showcase_stock.cmp(&right.showcase_stock),
            ShowcaseField::MinStock => left.min_stock.cmp(&right.min_stock),
            ShowcaseField::WarehouseStock => left.warehouse_stock.cmp(&right.warehouse_stock),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarehouseField {
    Article,
    Category,
    Name,
    Stock,
}

pub struct WarehouseAdapter;

impl TableAdapter for WarehouseAdapter {
    type Row = WarehouseRow;
    type Field = WarehouseField;
    type Dimension = NoDimension;

    fn default_sort() -> SortSpec<Self::Field> {
        SortSpec::descending(WarehouseField::Article)
    }

    fn search_text(row: &Self::Row) -> String {
        format!("{} {} {}", row.article, row.category, row.name)
    }

    fn dimension_value(_row: &Self::Row, dimension: Self::Dimension) -> &str {
        match dimension {}
    }

    fn compare(left: &Self::Row, right: &Self::Row, field: Self::Field) -> Ordering {
        match field {
            WarehouseField::Article => {
                parse_row_id(&left.article).cmp(&parse_row_id(&right.article))
            }
            WarehouseField::Category => compare_text(&left.category, &right.category),
            WarehouseField::Name => compare_text(&left.name, &right.name),
            WarehouseField::Stock => left.stock.cmp(&right.stock),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Id,
    Name,
}

pub struct EmployeesAdapter;

impl TableAdapter for EmployeesAdapter {
    type Row = EmployeeRow;
    type Field = EmployeeField;
    type Dimension = NoDimension;

    fn default_sort() -> SortSpec<Self::Field> {
        SortSpec::ascending(EmployeeField::Id)
    }

    fn search_text(row: &Self::Row) -> String {
        format!("{} {} {}", row.name, row.email, row.phone)
    }

    fn dimension_value(_row: &Self::Row, dimension: Self::Dimension) -> &str {
        match dimension {}
    }

    fn compare(left: &Self::Row, right: &Self::Row, field: Self::Field) -> Ordering {
        match field {
            EmployeeField::Id => left.id.cmp(&right.id),
            EmployeeField::Name => compare_text(&left.name, &right.name),
        }
    }
}

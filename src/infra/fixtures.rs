//! Deterministic demo datasets matching the sizes the dashboard ships
//! with: 205 showcase and warehouse items, 25 employees, 5 regulations.

use crate::domain::entities::employee::{EmployeeRole, EmployeeRow};
use crate::domain::entities::inventory::{ShowcaseRow, WarehouseRow};
use crate::domain::entities::regulation::RegulationTableRow;

const INVENTORY_COUNT: usize = 205;
const EMPLOYEE_COUNT: usize = 25;

fn base_showcase_rows() -> Vec<ShowcaseRow> {
    vec![
        ShowcaseRow {
            article: "5099".to_string(),
            category: "Напитки".to_string(),
            name: "Напиток Добрый Апельсин газированный, 500мл".to_string(),
            showcase_stock: 5,
            min_stock: 5,
            warehouse_stock: 234,
        },
        ShowcaseRow {
            article: "5008".to_string(),
            category: "Напитки".to_string(),
            name: "Напиток Добрый Cola Ваниль газированный, 500мл".to_string(),
            showcase_stock: 5,
            min_stock: 5,
            warehouse_stock: 333,
        },
        ShowcaseRow {
            article: "5101".to_string(),
            category: "Напитки".to_string(),
            name: "Напиток Добрый Киви-виноград газированный, 500мл".to_string(),
            showcase_stock: 5,
            min_stock: 5,
            warehouse_stock: 211,
        },
        ShowcaseRow {
            article: "4586".to_string(),
            category: "Напитки".to_string(),
            name: "Напиток Добрый Cola без сахара газированный, 500мл".to_string(),
            showcase_stock: 5,
            min_stock: 5,
            warehouse_stock: 321,
        },
        ShowcaseRow {
            article: "4360".to_string(),
            category: "Еда".to_string(),
            name: "Чипсы Lay's Stax Пикантная паприка, 140г".to_string(),
            showcase_stock: 5,
            min_stock: 5,
            warehouse_stock: 50,
        },
    ]
}

pub fn showcase_rows() -> Vec<ShowcaseRow> {
    let base = base_showcase_rows();

    (0..INVENTORY_COUNT)
        .map(|index| {
            if index < base.len() {
                return base[index].clone();
            }

            let template = &base[index % base.len()];
            ShowcaseRow {
                article: (8000 + index).to_string(),
                showcase_stock: 4 + (index as i64 % 3),
                warehouse_stock: template.warehouse_stock + (index as i64 % 8) * 4,
                ..template.clone()
            }
        })
        .collect()
}

pub fn warehouse_rows() -> Vec<WarehouseRow> {
    let base: Vec<WarehouseRow> = base_showcase_rows()
        .into_iter()
        .map(|row| WarehouseRow {
            article: row.article,
            category: row.category,
            name: row.name,
            stock: row.warehouse_stock,
        })
        .collect();

    (0..INVENTORY_COUNT)
        .map(|index| {
            if index < base.len() {
                return base[index].clone();
            }

            let template = &base[index % base.len()];
            WarehouseRow {
                article: (6000 + index).to_string(),
                stock: template.stock + (index as i64 % 7) * 3,
                ..template.clone()
            }
        })
        .collect()
}

pub fn employee_rows() -> Vec<EmployeeRow> {
    let roles_and_activity = [
        (EmployeeRole::Admin, "19.12.2025, 14:30", true),
        (EmployeeRole::Owner, "Не авторизован", false),
        (EmployeeRole::Admin, "19.12.2025, 14:30", true),
        (EmployeeRole::Manager, "19.12.2025, 14:30", true),
        (EmployeeRole::Owner, "19.12.2025, 14:30", true),
        (EmployeeRole::Manager, "19.12.2025, 14:30", true),
    ];

    (0..EMPLOYEE_COUNT)
        .map(|index| {
            let (role, activity, tg_connected) =
                roles_and_activity[index % roles_and_activity.len()];

            EmployeeRow {
                id: index as i64 + 1,
                name: "Михаил Иванов".to_string(),
                email: "mail@gmail.com".to_string(),
                avatar_url: None,
                role,
                phone: "+7 (999) 000-00-00".to_string(),
                tg_connected,
                activity: activity.to_string(),
            }
        })
        .collect()
}

pub fn regulation_table_rows() -> Vec<RegulationTableRow> {
    vec![
        RegulationTableRow {
            id: "#5".to_string(),
            name: "Оборудование".to_string(),
            description: "STREAM - белая отражающая панель поставлена перед монитором; \
                          переставить влево (как в эталоне)"
                .to_string(),
            time_interval: "21:00 - 22:00".to_string(),
            photo_required: true,
        },
        RegulationTableRow {
            id: "#4".to_string(),
            name: "Громкий звук".to_string(),
            description: "ARENA2 - на левом диване у зелёного стола посетитель лежит и \
                          громко орет, ноги на диване"
                .to_string(),
            time_interval: "20:00 - 21:00".to_string(),
            photo_required: false,
        },
        RegulationTableRow {
            id: "#3".to_string(),
            name: "Оборудование".to_string(),
            description: "SQUAD1 - место 4 (правое): клавиатура лежит на спинке кресла, \
                          вернуть на стол"
                .to_string(),
            time_interval: "12:00".to_string(),
            photo_required: true,
        },
        RegulationTableRow {
            id: "#2".to_string(),
            name: "Беспорядок, мусор".to_string(),
            description: "STREAM - место 1 (свободное): на столе оставлены две \
                          обёртки/упаковки (у клавиатуры и на переднем правом краю стола), \
                          убрать"
                .to_string(),
            time_interval: "15:00".to_string(),
            photo_required: false,
        },
        RegulationTableRow {
            id: "#1".to_string(),
            name: "Беспорядок, мусор".to_string(),
            description: "SQUAD1 - на столе №4 (правый крайний, свободный): оставлена \
                          бутылка/стакан на коврике, убрать"
                .to_string(),
            time_interval: "19:00 - 20:00".to_string(),
            photo_required: true,
        },
    ]
}

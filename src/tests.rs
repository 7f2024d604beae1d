use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;

use crate::domain::datetime::{date_sort_key, parse_display_date_time};
use crate::domain::entities::inventory::StockRow;
use crate::domain::entities::notification::{
    IncidentKind, MediaTone, NotificationRow, StatusTone,
};
use crate::domain::entities::session::{LoginCredentials, Theme};
use crate::domain::entities::table::{FilterCriteria, PageToken, SortDirection, SortSpec};
use crate::infra::config::EnvConfig;
use crate::infra::export::csv::{warehouse_record, write_csv, WAREHOUSE_HEADERS};
use crate::infra::fixtures::{employee_rows, regulation_table_rows, showcase_rows, warehouse_rows};
use crate::infra::store::session::FileSessionStore;
use crate::usecase::ports::gateway::{ApiGateway, DashboardApiData, SourceError};
use crate::usecase::ports::session::SessionStore;
use crate::usecase::services::auth_service::AuthService;
use crate::usecase::services::dashboard_service::{build_dashboard_model, DashboardService};
use crate::usecase::table::adapters::{
    NotificationDimension, NotificationField, NotificationsAdapter, ShowcaseAdapter,
    ShowcaseField, WarehouseAdapter, WarehouseField,
};
use crate::usecase::table::engine::TableViewEngine;
use crate::usecase::table::filter::filter_rows;
use crate::usecase::table::paginate::{build_page_tokens, clamp_page, paginate, total_pages};
use crate::usecase::table::sort::{compare_text, parse_row_id, sort_rows};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("detectra-{prefix}-{nanos}"))
}

fn notification(id: &str, status: &str, type_label: &str, date_time: &str) -> NotificationRow {
    NotificationRow {
        id: id.to_string(),
        status: status.to_string(),
        status_tone: StatusTone::Green,
        workplace: "ARENA".to_string(),
        incident_name: format!("Инцидент {id}"),
        description: String::new(),
        date_time: date_time.to_string(),
        assignee: "Иванов".to_string(),
        kind: IncidentKind::Reglament,
        type_label: type_label.to_string(),
        camera: "CAM-1".to_string(),
        media_tone: MediaTone::None,
    }
}

fn sample_dashboard_data() -> DashboardApiData {
    serde_json::from_value(serde_json::json!({
        "user": {
            "first_name": "Анна",
            "last_name": "Петрова",
            "role_title": "Администратор",
            "avatar": "https://example.com/avatar.png"
        },
        "points": [
            { "title": "ARENA", "online_status": true, "is_active": false },
            { "title": "STREAM", "online_status": true, "is_active": true }
        ],
        "video": { "enabled": true, "cameras_active": 4, "cameras_total": 6 },
        "audio": { "enabled": false, "devices_active": 0 },
        "reglaments": [
            { "title": "Оборудование", "description": "Панель перед монитором", "time": "21:00" }
        ],
        "stock": [
            { "title": "Напиток Добрый Апельсин", "min": 5, "in_stock": 3 }
        ],
        "active_incidents": [
            {
                "id": 7,
                "status": "new",
                "title": "Громкий звук",
                "type": "audio",
                "places": ["ARENA2", "SQUAD1"],
                "picture": null,
                "description": "Посетитель громко кричит"
            }
        ],
        "failed_incidents": [
            {
                "id": 3,
                "status": "failed",
                "title": "Беспорядок",
                "type": "reglament",
                "places": [],
                "picture": "https://example.com/p.png",
                "description": "Мусор на столе"
            }
        ],
        "notifications": [
            {
                "id": 12,
                "status": "new",
                "title": "Оборудование",
                "type": "camera",
                "places": ["SQUAD1"],
                "picture": null,
                "description": "Клавиатура на спинке кресла",
                "device_title": "CAM-3",
                "staff": "Иванов"
            },
            {
                "id": 5,
                "status": "failed",
                "title": "Громкий звук",
                "type": "audio",
                "places": [],
                "picture": "https://example.com/m.png",
                "description": "Ноги на диване",
                "device_title": null,
                "staff": "Петров"
            },
            {
                "id": 2,
                "status": "something_else",
                "title": "Прочее",
                "type": "unknown",
                "places": ["STREAM"],
                "picture": null,
                "description": "",
                "device_title": null,
                "staff": "Сидоров"
            }
        ]
    }))
    .expect("sample dashboard payload should deserialize")
}

struct FakeGateway {
    login_result: Result<String, String>,
}

impl ApiGateway for FakeGateway {
    fn login(&self, _credentials: &LoginCredentials) -> Result<String, SourceError> {
        self.login_result.clone().map_err(SourceError::Api)
    }

    fn fetch_dashboard(&self, _token: &str) -> Result<DashboardApiData, SourceError> {
        Ok(sample_dashboard_data())
    }
}

#[test]
fn page_tokens_list_every_page_for_small_counts() {
    for total in 1..=7 {
        let tokens = build_page_tokens(1, total);
        let expected: Vec<PageToken> = (1..=total).map(PageToken::Page).collect();
        assert_eq!(tokens, expected, "all pages should be listed for {total}");
    }
}

#[test]
fn page_tokens_match_dashboard_scenarios() {
    use PageToken::{Ellipsis, Page};

    assert_eq!(
        build_page_tokens(1, 41),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(41)]
    );
    assert_eq!(
        build_page_tokens(39, 41),
        vec![Page(1), Ellipsis, Page(37), Page(38), Page(39), Page(40), Page(41)]
    );
    assert_eq!(
        build_page_tokens(20, 41),
        vec![Page(1), Ellipsis, Page(19), Page(20), Page(21), Ellipsis, Page(41)]
    );
}

#[test]
fn page_tokens_never_exceed_seven_slots() {
    for total in 1..80 {
        for current in 1..=total {
            let tokens = build_page_tokens(current, total);
            assert!(tokens.len() <= 7, "too many tokens for {current}/{total}");

            if total > 7 {
                assert!(tokens.contains(&PageToken::Page(1)));
                assert!(tokens.contains(&PageToken::Page(total)));
            }
        }
    }
}

#[test]
fn clamp_page_is_idempotent() {
    for page in 0..50 {
        for total in 1..20 {
            let once = clamp_page(page, total);
            assert_eq!(clamp_page(once, total), once);
            assert!((1..=total).contains(&once));
        }
    }
}

#[test]
fn total_pages_is_at_least_one() {
    assert_eq!(total_pages(0, 5), 1);
    assert_eq!(total_pages(1, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(205, 5), 41);
}

#[test]
fn concatenated_pages_reproduce_the_whole_collection() {
    let rows = sort_rows::<WarehouseAdapter>(
        &warehouse_rows(),
        SortSpec::ascending(WarehouseField::Article),
    );

    let pages = total_pages(rows.len(), 5);
    assert_eq!(pages, 41);

    let mut collected = Vec::new();
    for page in 1..=pages {
        let slice = paginate(&rows, 5, page);
        assert!(slice.visible_rows.len() <= 5);
        assert_eq!(slice.end_index - slice.start_index, slice.visible_rows.len());
        collected.extend(slice.visible_rows);
    }

    assert_eq!(collected, rows, "pages should cover the collection exactly");
}

#[test]
fn paginate_clamps_out_of_range_pages() {
    let rows: Vec<i32> = (0..12).collect();

    let last = paginate(&rows, 5, 99);
    assert_eq!(last.visible_rows, vec![10, 11]);
    assert_eq!(last.start_index, 10);
    assert_eq!(last.end_index, 12);

    let first = paginate(&rows, 5, 0);
    assert_eq!(first.visible_rows, vec![0, 1, 2, 3, 4]);

    let empty: Vec<i32> = Vec::new();
    let page = paginate(&empty, 5, 1);
    assert!(page.visible_rows.is_empty());
    assert_eq!(page.start_index, 0);
    assert_eq!(page.end_index, 0);
}

#[test]
fn display_date_time_parsing_follows_the_dashboard_format() {
    let parsed =
        parse_display_date_time("19.12.25 / 14:30").expect("full date and time should parse");
    assert_eq!(
        parsed.date(),
        NaiveDate::from_ymd_opt(2025, 12, 19).expect("valid date")
    );
    assert_eq!(parsed.format("%H:%M").to_string(), "14:30");

    let midnight = parse_display_date_time("01.01.24").expect("date without time should parse");
    assert_eq!(midnight.format("%H:%M").to_string(), "00:00");

    assert_eq!(parse_display_date_time("— / —"), None);
    assert_eq!(parse_display_date_time("—"), None);
    assert_eq!(parse_display_date_time(""), None);
    assert_eq!(parse_display_date_time("32.13.25 / 10:00"), None);
    assert_eq!(parse_display_date_time("19.12.25 / oops"), None);
    assert_eq!(parse_display_date_time("19.12 / 10:00"), None);
}

#[test]
fn unparseable_date_time_ranks_as_epoch_zero() {
    assert_eq!(date_sort_key("— / —"), 0);
    assert!(date_sort_key("19.12.25 / 14:30") > 0);
}

#[test]
fn row_identifiers_compare_numerically() {
    assert_eq!(parse_row_id("#12"), 12);
    assert_eq!(parse_row_id("#3"), 3);
    assert_eq!(parse_row_id("#105"), 105);
    assert_eq!(parse_row_id("5099"), 5099);
    assert_eq!(parse_row_id("нет"), 0);
    assert_eq!(parse_row_id(""), 0);

    let rows = vec![
        notification("#12", "Новое", "Камера", "— / —"),
        notification("#3", "Новое", "Камера", "— / —"),
        notification("#105", "Новое", "Камера", "— / —"),
    ];
    let ordered =
        sort_rows::<NotificationsAdapter>(&rows, SortSpec::ascending(NotificationField::Id));
    let ids: Vec<&str> = ordered.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["#3", "#12", "#105"]);
}

#[test]
fn text_comparison_ignores_case_for_cyrillic() {
    assert_eq!(compare_text("АПЕЛЬСИН", "апельсин"), std::cmp::Ordering::Equal);
    assert_eq!(compare_text("Аудио", "Камера"), std::cmp::Ordering::Less);
}

#[test]
fn sort_is_stable_in_both_directions() {
    let rows = vec![
        notification("#1", "Новое", "Камера", "— / —"),
        notification("#2", "Новое", "Камера", "— / —"),
        notification("#3", "Решено", "Камера", "— / —"),
        notification("#4", "Новое", "Камера", "— / —"),
    ];

    let ascending =
        sort_rows::<NotificationsAdapter>(&rows, SortSpec::ascending(NotificationField::Status));
    let ascending_ids: Vec<&str> = ascending.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ascending_ids, vec!["#1", "#2", "#4", "#3"]);

    let descending =
        sort_rows::<NotificationsAdapter>(&rows, SortSpec::descending(NotificationField::Status));
    let descending_ids: Vec<&str> = descending.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(
        descending_ids,
        vec!["#3", "#1", "#2", "#4"],
        "tied rows should keep their input order in both directions"
    );
}

#[test]
fn unparseable_dates_sort_first_ascending() {
    let rows = vec![
        notification("#1", "Новое", "Камера", "19.12.25 / 14:30"),
        notification("#2", "Новое", "Камера", "— / —"),
        notification("#3", "Новое", "Камера", "01.01.24 / 09:00"),
    ];

    let ordered =
        sort_rows::<NotificationsAdapter>(&rows, SortSpec::ascending(NotificationField::DateTime));
    let ids: Vec<&str> = ordered.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["#2", "#3", "#1"]);
}

#[test]
fn dimension_filters_combine_with_and_semantics() {
    let rows = vec![
        notification("#1", "Новое", "Камера", "— / —"),
        notification("#2", "Новое", "Аудио", "— / —"),
        notification("#3", "Решено", "Камера", "— / —"),
    ];

    let mut criteria = FilterCriteria::new();
    criteria.select(
        NotificationDimension::Status,
        BTreeSet::from(["Новое".to_string()]),
    );
    criteria.select(
        NotificationDimension::Type,
        BTreeSet::from(["Камера".to_string()]),
    );

    let matching = filter_rows::<NotificationsAdapter>(&rows, &criteria);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, "#1");
}

#[test]
fn unseeded_dimension_includes_all_and_empty_selection_excludes_all() {
    let rows = vec![
        notification("#1", "Новое", "Камера", "— / —"),
        notification("#2", "Решено", "Аудио", "— / —"),
    ];

    let unseeded = FilterCriteria::new();
    assert_eq!(filter_rows::<NotificationsAdapter>(&rows, &unseeded).len(), 2);

    let mut deselected = FilterCriteria::new();
    deselected.select(NotificationDimension::Status, BTreeSet::new());
    assert!(
        filter_rows::<NotificationsAdapter>(&rows, &deselected).is_empty(),
        "nothing checked should mean nothing shown"
    );
}

#[test]
fn date_filter_excludes_rows_without_a_parseable_date() {
    let rows = vec![
        notification("#1", "Новое", "Камера", "19.12.25 / 14:30"),
        notification("#2", "Новое", "Камера", "— / —"),
        notification("#3", "Новое", "Камера", "20.12.25 / 10:00"),
    ];

    let mut criteria = FilterCriteria::new();
    criteria.date = NaiveDate::from_ymd_opt(2025, 12, 19);

    let matching = filter_rows::<NotificationsAdapter>(&rows, &criteria);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, "#1");
}

#[test]
fn free_text_search_is_case_insensitive_for_cyrillic() {
    let mut engine = TableViewEngine::<ShowcaseAdapter>::new(showcase_rows());
    engine.set_search_query("АПЕЛЬ");

    let view = engine.view();
    assert_eq!(view.total_items, 41, "every cloned orange row should match");
    assert!(view
        .visible_rows
        .iter()
        .all(|row| row.name.contains("Апельсин")));
}

#[test]
fn engine_defaults_match_the_dashboard_views() {
    let engine = TableViewEngine::<ShowcaseAdapter>::new(showcase_rows());
    let view = engine.view();

    assert_eq!(view.sort.field, ShowcaseField::Article);
    assert_eq!(view.sort.direction, SortDirection::Desc);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_items, 205);
    assert_eq!(view.total_pages, 41);
    assert_eq!(view.visible_rows.len(), 5);
}

#[test]
fn re_selecting_the_sort_field_flips_direction() {
    let mut engine = TableViewEngine::<ShowcaseAdapter>::new(showcase_rows());

    engine.set_sort(ShowcaseField::Name);
    assert_eq!(engine.sort().field, ShowcaseField::Name);
    assert_eq!(engine.sort().direction, SortDirection::Asc);

    engine.set_sort(ShowcaseField::Name);
    assert_eq!(engine.sort().direction, SortDirection::Desc);

    engine.set_sort(ShowcaseField::Article);
    assert_eq!(engine.sort().direction, SortDirection::Asc);
}

#[test]
fn filter_changes_reset_the_page_and_shrinking_results_clamp_it() {
    let mut engine = TableViewEngine::<ShowcaseAdapter>::new(showcase_rows());

    engine.set_page(10);
    assert_eq!(engine.view().current_page, 10);

    engine.set_search_query("Cola");
    assert_eq!(
        engine.view().current_page,
        1,
        "filter change should reset paging"
    );

    engine.set_page(1000);
    let view = engine.view();
    assert_eq!(view.current_page, view.total_pages);

    engine.set_search_query("нет такого товара");
    let view = engine.view();
    assert_eq!(view.total_items, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(view.visible_rows.is_empty());
}

#[test]
fn page_size_changes_rewindow_from_the_first_page() {
    let mut engine = TableViewEngine::<ShowcaseAdapter>::new(showcase_rows());

    engine.set_page(3);
    engine.set_page_size(20);
    let view = engine.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 11);
    assert_eq!(view.visible_rows.len(), 20);

    engine.set_page_size(0);
    assert_eq!(engine.page_size(), 1, "zero page size should clamp to one");
}

#[test]
fn fixtures_match_the_dashboard_dataset_sizes() {
    assert_eq!(showcase_rows().len(), 205);
    assert_eq!(warehouse_rows().len(), 205);
    assert_eq!(employee_rows().len(), 25);
    assert_eq!(regulation_table_rows().len(), 5);

    let warehouse = warehouse_rows();
    assert_eq!(warehouse[0].article, "5099");
    assert_eq!(warehouse[5].article, "6005");

    let employees = employee_rows();
    assert_eq!(employees[1].activity, "Не авторизован");
    assert!(!employees[1].tg_connected);
}

#[test]
fn session_store_persists_tokens_across_instances() {
    let dir = unique_test_dir("session-persistent");
    let store = FileSessionStore::new(dir.clone());
    store.init().expect("store should initialize");

    store
        .save_token("token-123", true)
        .expect("should save persistent token");
    assert_eq!(store.token().as_deref(), Some("token-123"));

    let reopened = FileSessionStore::new(dir.clone());
    assert_eq!(
        reopened.token().as_deref(),
        Some("token-123"),
        "persistent token should survive a restart"
    );

    store.clear_token().expect("should clear token");
    assert_eq!(store.token(), None);

    fs::remove_dir_all(&dir).expect("should cleanup temp dir");
}

#[test]
fn session_tokens_do_not_survive_a_restart() {
    let dir = unique_test_dir("session-transient");
    let store = FileSessionStore::new(dir.clone());
    store.init().expect("store should initialize");

    store
        .save_token("token-456", false)
        .expect("should save session token");
    assert_eq!(store.token().as_deref(), Some("token-456"));

    let reopened = FileSessionStore::new(dir.clone());
    assert_eq!(reopened.token(), None, "session token should be memory-only");

    fs::remove_dir_all(&dir).expect("should cleanup temp dir");
}

#[test]
fn saving_one_token_mode_clears_the_other() {
    let dir = unique_test_dir("session-modes");
    let store = FileSessionStore::new(dir.clone());
    store.init().expect("store should initialize");

    store
        .save_token("persistent", true)
        .expect("should save persistent token");
    store
        .save_token("transient", false)
        .expect("should save session token");
    assert_eq!(
        store.token().as_deref(),
        Some("transient"),
        "session save should remove the persistent token"
    );

    let reopened = FileSessionStore::new(dir.clone());
    assert_eq!(reopened.token(), None);

    fs::remove_dir_all(&dir).expect("should cleanup temp dir");
}

#[test]
fn theme_defaults_to_dark_and_round_trips() {
    let dir = unique_test_dir("session-theme");
    let store = FileSessionStore::new(dir.clone());
    store.init().expect("store should initialize");

    assert_eq!(store.theme(), Theme::Dark);

    store.save_theme(Theme::Light).expect("should save theme");
    assert_eq!(store.theme(), Theme::Light);

    fs::write(dir.join("theme"), "sepia").expect("should write bogus theme");
    assert_eq!(
        store.theme(),
        Theme::Dark,
        "unknown theme should fall back to dark"
    );

    fs::remove_dir_all(&dir).expect("should cleanup temp dir");
}

#[test]
fn login_stores_the_token_in_the_session() {
    let dir = unique_test_dir("auth-login");
    let session = Arc::new(FileSessionStore::new(dir.clone()));
    session.init().expect("store should initialize");

    let gateway = Arc::new(FakeGateway {
        login_result: Ok("token-789".to_string()),
    });
    let auth = AuthService::new(gateway, session.clone());

    let credentials = LoginCredentials {
        email: "mail@gmail.com".to_string(),
        password: "secret".to_string(),
    };
    let token = auth
        .login(&credentials, true)
        .expect("login should succeed");
    assert_eq!(token, "token-789");
    assert_eq!(auth.current_token().as_deref(), Some("token-789"));

    auth.logout().expect("logout should clear the token");
    assert_eq!(auth.current_token(), None);

    fs::remove_dir_all(&dir).expect("should cleanup temp dir");
}

#[test]
fn failed_login_surfaces_the_api_message() {
    let dir = unique_test_dir("auth-failure");
    let session = Arc::new(FileSessionStore::new(dir.clone()));
    session.init().expect("store should initialize");

    let gateway = Arc::new(FakeGateway {
        login_result: Err("Авторизация не удалась".to_string()),
    });
    let auth = AuthService::new(gateway, session);

    let credentials = LoginCredentials {
        email: "mail@gmail.com".to_string(),
        password: "wrong".to_string(),
    };
    let error = auth
        .login(&credentials, false)
        .expect_err("login should fail");
    assert_eq!(error.to_string(), "Авторизация не удалась");

    fs::remove_dir_all(&dir).expect("should cleanup temp dir");
}

#[test]
fn superseded_dashboard_loads_are_dropped() {
    let service = DashboardService::new(Arc::new(FakeGateway {
        login_result: Ok(String::new()),
    }));

    let stale = service.begin_load();
    let current = service.begin_load();

    let dropped = service
        .load_dashboard(stale, "token")
        .expect("stale load should not error");
    assert!(dropped.is_none(), "stale load should commit nothing");

    let committed = service
        .load_dashboard(current, "token")
        .expect("current load should succeed");
    assert!(committed.is_some());

    let cancelled = service.begin_load();
    service.cancel_pending();
    let dropped = service
        .load_dashboard(cancelled, "token")
        .expect("cancelled load should not error");
    assert!(dropped.is_none(), "teardown should abandon in-flight loads");
}

#[test]
fn dashboard_model_mapping_follows_the_api_payload() {
    let model = build_dashboard_model(sample_dashboard_data());

    let notifications_item = model
        .page_items
        .iter()
        .find(|item| item.label == "Уведомления")
        .expect("sidebar should list notifications");
    assert_eq!(notifications_item.badge, Some(1), "one notification is new");

    assert_eq!(model.selected_point_title, "STREAM");
    assert!(model.is_selected_point_online);
    assert_eq!(model.user_full_name, "Анна Петрова");

    let cameras = &model.summary_cards[0];
    assert_eq!(cameras.lead, "4");
    assert_eq!(cameras.badge.as_deref(), Some("Подключено"));
    assert_eq!(cameras.subtitle_left, "4/6");

    let audio = &model.summary_cards[1];
    assert_eq!(audio.lead, "off");
    assert_eq!(audio.subtitle_right, "не подключено");

    assert_eq!(
        model.stock_rows[0],
        StockRow {
            name: "Напиток Добрый Апельсин".to_string(),
            min_stock: 5,
            showcase_stock: 3,
            warehouse_stock: None,
        }
    );

    let incident = &model.incident_cards[0];
    assert_eq!(incident.source, "Аудио");
    assert_eq!(incident.location.as_deref(), Some("ARENA2, SQUAD1"));

    assert_eq!(model.overdue_incident_cards[0].title, "Беспорядок");

    let first = &model.notification_rows[0];
    assert_eq!(first.id, "#12");
    assert_eq!(first.status, "Новое");
    assert_eq!(first.status_tone, StatusTone::Green);
    assert_eq!(first.workplace, "SQUAD1");
    assert_eq!(first.camera, "CAM-3");
    assert_eq!(first.date_time, "— / —");
    assert_eq!(first.media_tone, MediaTone::None);

    let second = &model.notification_rows[1];
    assert_eq!(second.status, "Просрочено");
    assert_eq!(second.status_tone, StatusTone::Red);
    assert_eq!(second.workplace, "—");
    assert_eq!(second.camera, "—");
    assert_eq!(second.media_tone, MediaTone::Blue);

    let third = &model.notification_rows[2];
    assert_eq!(third.status, "Новое", "unknown statuses should read as new");
    assert_eq!(third.type_label, "Регламент");
}

#[test]
fn env_config_falls_back_to_the_bundled_endpoints() {
    let config = EnvConfig::from_lookup(|_| None);
    assert_eq!(config.auth_api_url, "https://swiftcore.network/api/lk/auth");
    assert_eq!(
        config.dashboard_api_url,
        "https://swiftcore.network/api/lk/dashboard"
    );
    assert!(config.default_email.is_empty());
    assert!(config.default_password.is_empty());

    let overridden = EnvConfig::from_lookup(|key| match key {
        "DETECTRA_AUTH_API_URL" => Some("  https://example.com/auth  ".to_string()),
        "DETECTRA_DEFAULT_EMAIL" => Some(" mail@gmail.com ".to_string()),
        _ => None,
    });
    assert_eq!(overridden.auth_api_url, "https://example.com/auth");
    assert_eq!(overridden.default_email, "mail@gmail.com");
}

#[test]
fn csv_export_writes_header_and_every_row() {
    let rows = warehouse_rows();
    let mut buffer = Vec::new();

    write_csv(&mut buffer, &WAREHOUSE_HEADERS, &rows[..3], warehouse_record)
        .expect("csv export should succeed");

    let output = String::from_utf8(buffer).expect("csv output should be utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three rows");
    assert!(lines[0].contains("Артикул"));
    assert!(lines[1].contains("5099"));
}

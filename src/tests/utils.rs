use crate::config::AppConfig;
use crate::db::init_db;
use crate::db::properties::insert_property;
use crate::domain::{Property, PropertyStatus, PropertyType};
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use astra::{Body, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// App state over a fresh database file using the production schema.
pub fn test_state() -> AppState {
    let path = std::env::temp_dir().join(format!(
        "realty_crm_test_{}_{}_{}.sqlite",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));

    let config = AppConfig::from_lookup(|key| match key {
        "DATABASE_PATH" => Some(path.to_string_lossy().into_owned()),
        "PUBLIC_BASE_URL" => Some("https://crm.example.com".into()),
        "PAGE_SIZE" => Some("2".into()),
        _ => None,
    })
    .expect("test config");

    let state = AppState::new(config).expect("test state");
    init_db(&state.db).expect("Failed to initialize DB");
    state
}

pub fn property(id: &str, kind: PropertyType, status: PropertyStatus, price: f64) -> Property {
    Property {
        id: id.into(),
        title: format!("Listing {id}"),
        description: String::new(),
        address: String::new(),
        city: "Curitiba".into(),
        state: "PR".into(),
        kind,
        status,
        bedrooms: 2,
        bathrooms: 1,
        price,
        area_m2: None,
        created_at: 0,
    }
}

pub fn seed(state: &AppState, props: &[Property]) {
    state
        .db
        .with_conn(|conn| {
            for (i, p) in props.iter().enumerate() {
                // distinct timestamps keep list order predictable
                let p = Property {
                    created_at: 1_000 - i as i64,
                    ..p.clone()
                };
                insert_property(conn, &p, 1_000)?;
            }
            Ok(())
        })
        .unwrap();
}

/// Runs the router; errors are rendered the way the server renders them.
pub fn send(state: &AppState, method: &str, uri: &str, form: Option<&str>) -> Response {
    let body = match form {
        Some(f) => Body::from(f.to_string()),
        None => Body::empty(),
    };

    let req = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .unwrap();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    }
}

pub fn get(state: &AppState, uri: &str) -> Response {
    send(state, "GET", uri, None)
}

pub fn post(state: &AppState, uri: &str, form: &str) -> Response {
    send(state, "POST", uri, Some(form))
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

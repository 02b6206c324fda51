// src/tests/router_tests/properties_tests.rs

use crate::db::properties::get_property;
use crate::domain::{PropertyStatus, PropertyType};
use crate::tests::utils::{body_string, get, location, post, property, seed, test_state};
use std::io::Read;

fn seed_three(state: &crate::router::AppState) {
    seed(
        state,
        &[
            property("apt", PropertyType::Apartment, PropertyStatus::ForSale, 300_000.0),
            property("house", PropertyType::House, PropertyStatus::ForRent, 3_500.0),
            property("land", PropertyType::Land, PropertyStatus::Sold, 90_000.0),
        ],
    );
}

#[test]
fn list_paginates_the_unfiltered_collection() {
    let state = test_state();
    seed_three(&state);

    let resp = get(&state, "/properties");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Listing apt"));
    assert!(body.contains("Listing house"));
    assert!(!body.contains("Listing land"), "page size is 2");
    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains("3 properties"));
}

#[test]
fn query_string_drives_the_filters() {
    let state = test_state();
    seed_three(&state);

    let body = body_string(get(&state, "/properties?type=house"));
    assert!(body.contains("Listing house"));
    assert!(!body.contains("Listing apt"));
    assert!(body.contains("Page 1 of 1"));

    let body = body_string(get(&state, "/properties?q=CURITIBA&status=sold"));
    assert!(body.contains("Listing land"));
    assert!(!body.contains("Listing house"));

    let body = body_string(get(&state, "/properties?min_price=50000&max_price=100000"));
    assert!(body.contains("Listing land"));
    assert!(!body.contains("Listing apt"));
}

#[test]
fn pages_past_the_end_clamp_to_the_last_page() {
    let state = test_state();
    seed_three(&state);

    let body = body_string(get(&state, "/properties?page=9"));
    assert!(body.contains("Page 2 of 2"));
    assert!(body.contains("Listing land"));
}

#[test]
fn nothing_matching_renders_an_empty_state() {
    let state = test_state();
    seed_three(&state);

    let body = body_string(get(&state, "/properties?bedrooms=5"));
    assert!(body.contains("No properties match these filters."));
    assert!(body.contains("Page 1 of 1"));
}

#[test]
fn export_returns_a_workbook_of_the_filtered_rows() {
    let state = test_state();
    seed_three(&state);

    let resp = get(&state, "/properties/export?status=forSale");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn creating_a_property_redirects_to_its_page() {
    let state = test_state();

    let resp = post(
        &state,
        "/properties",
        "title=Casa+do+Lago&city=Gramado&state=RS&type=house&status=forSale&bedrooms=3&bathrooms=2&price=850000",
    );
    assert_eq!(resp.status(), 302);

    let target = location(&resp);
    assert!(target.starts_with("/properties/prop_"));

    let body = body_string(get(&state, &target));
    assert!(body.contains("Casa do Lago"));
    assert!(body.contains("850,000"));
}

#[test]
fn creating_a_property_without_price_is_rejected() {
    let state = test_state();

    let resp = post(&state, "/properties", "title=Sem+pre%C3%A7o&city=Recife");
    assert_eq!(resp.status(), 400);

    let resp = post(&state, "/properties", "title=Bad&city=Recife&price=-1");
    assert_eq!(resp.status(), 400);

    let resp = post(&state, "/properties", "title=Bad&city=Recife&price=10&type=castle");
    assert_eq!(resp.status(), 400);
}

#[test]
fn status_update_and_delete() {
    let state = test_state();
    seed_three(&state);

    let resp = post(&state, "/properties/apt/status", "status=sold");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/properties/apt");

    let stored = state
        .db
        .with_conn(|conn| get_property(conn, "apt"))
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, PropertyStatus::Sold);

    let resp = post(&state, "/properties/apt/delete", "");
    assert_eq!(resp.status(), 302);
    assert_eq!(get(&state, "/properties/apt").status(), 404);
    assert_eq!(post(&state, "/properties/apt/delete", "").status(), 404);
}

#[test]
fn sync_without_backend_is_a_bad_request() {
    let state = test_state();
    assert_eq!(post(&state, "/properties/sync", "").status(), 400);
}

#[test]
fn unknown_routes_are_not_found() {
    let state = test_state();
    assert_eq!(get(&state, "/nope").status(), 404);
    assert_eq!(get(&state, "/properties/missing").status(), 404);
    assert_eq!(get(&state, "/proposals/abc").status(), 404);
}

#[test]
fn dashboard_counts_properties() {
    let state = test_state();
    seed_three(&state);

    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Dashboard"));
    assert!(body.contains("properties on file"));
}

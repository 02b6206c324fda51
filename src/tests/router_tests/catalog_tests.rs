use crate::db::leads::list_leads;
use crate::domain::{LeadSource, PropertyStatus, PropertyType};
use crate::router::AppState;
use crate::tests::utils::{body_string, get, location, post, property, seed, test_state};

const LINK_PREFIX: &str = "https://crm.example.com/c/";

fn seed_catalog(state: &AppState) {
    let mut big = property("big", PropertyType::House, PropertyStatus::ForSale, 900_000.0);
    big.bedrooms = 4;

    seed(
        state,
        &[
            big,
            property("small", PropertyType::House, PropertyStatus::ForRent, 2_000.0),
            property("gone", PropertyType::House, PropertyStatus::Sold, 500_000.0),
            property("flat", PropertyType::Apartment, PropertyStatus::ForSale, 400_000.0),
        ],
    );
}

/// Issues a link and returns the raw token shown on the response page.
fn issue(state: &AppState, form: &str) -> String {
    let resp = post(state, "/catalog/links", form);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let start = body.find(LINK_PREFIX).expect("issued url is shown") + LINK_PREFIX.len();
    let token: String = body[start..].chars().take_while(|c| *c != '<').collect();
    assert!(!token.is_empty());
    token
}

#[test]
fn share_link_applies_its_preset_to_public_properties() {
    let state = test_state();
    seed_catalog(&state);

    let token = issue(&state, "label=Houses&type=house");

    let resp = get(&state, &format!("/c/{token}"));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Houses"));
    assert!(body.contains("Listing big"));
    assert!(body.contains("Listing small"));
    assert!(!body.contains("Listing gone"), "sold properties are never public");
    assert!(!body.contains("Listing flat"), "preset keeps houses only");
}

#[test]
fn visitor_filters_narrow_the_preset() {
    let state = test_state();
    seed_catalog(&state);

    let token = issue(&state, "label=Houses&type=house");

    let body = body_string(get(&state, &format!("/c/{token}?bedrooms=3")));
    assert!(body.contains("Listing big"));
    assert!(!body.contains("Listing small"));
}

#[test]
fn the_raw_token_is_shown_once() {
    let state = test_state();
    seed_catalog(&state);

    let token = issue(&state, "label=Everything");

    let body = body_string(get(&state, "/catalog/links"));
    assert!(body.contains("Everything"));
    assert!(!body.contains(&token));
}

#[test]
fn revoked_and_unknown_links_are_not_found() {
    let state = test_state();
    seed_catalog(&state);

    let token = issue(&state, "label=Temporary");
    assert_eq!(get(&state, &format!("/c/{token}")).status(), 200);

    let resp = post(&state, "/catalog/links/1/revoke", "");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/catalog/links");

    assert_eq!(get(&state, &format!("/c/{token}")).status(), 404);
    assert_eq!(get(&state, "/c/not-a-real-token").status(), 404);
    assert_eq!(post(&state, "/catalog/links/99/revoke", "").status(), 404);
}

#[test]
fn a_link_needs_a_label() {
    let state = test_state();
    assert_eq!(post(&state, "/catalog/links", "label=++&type=house").status(), 400);
}

#[test]
fn inquiries_become_catalog_leads() {
    let state = test_state();
    seed_catalog(&state);
    let token = issue(&state, "label=Houses&type=house");

    let resp = post(
        &state,
        &format!("/c/{token}/inquiry"),
        "property_id=small&name=Bruna&email=Bruna%40Example.com&message=Can+I+visit%3F",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), format!("/c/{token}?sent=1"));

    let leads = state.db.with_conn(|conn| list_leads(conn, None)).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "bruna@example.com");
    assert_eq!(leads[0].source, LeadSource::Catalog);
    assert_eq!(leads[0].property_id.as_deref(), Some("small"));
    assert_eq!(leads[0].notes.as_deref(), Some("Can I visit?"));

    let body = body_string(get(&state, &format!("/c/{token}?sent=1")));
    assert!(body.contains("An agent will get in touch"));
}

#[test]
fn inquiries_about_unlisted_properties_are_rejected() {
    let state = test_state();
    seed_catalog(&state);
    let token = issue(&state, "label=Houses");

    let resp = post(
        &state,
        &format!("/c/{token}/inquiry"),
        "property_id=gone&name=Caio&email=caio%40example.com",
    );
    assert_eq!(resp.status(), 400);

    let resp = post(
        &state,
        "/c/bogus/inquiry",
        "property_id=small&name=Caio&email=caio%40example.com",
    );
    assert_eq!(resp.status(), 404);
}

#[test]
fn inquiries_outside_the_preset_are_rejected() {
    let state = test_state();
    seed_catalog(&state);
    let token = issue(&state, "label=Houses&type=house");

    // listed publicly, but an apartment
    let resp = post(
        &state,
        &format!("/c/{token}/inquiry"),
        "property_id=flat&name=Davi&email=davi%40example.com",
    );
    assert_eq!(resp.status(), 400);

    let leads = state.db.with_conn(|conn| list_leads(conn, None)).unwrap();
    assert!(leads.is_empty());
}

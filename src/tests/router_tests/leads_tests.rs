use crate::db::leads::get_lead;
use crate::domain::{LeadSource, LeadStatus, PropertyStatus, PropertyType};
use crate::tests::utils::{body_string, get, location, post, property, seed, test_state};

#[test]
fn captured_leads_are_normalized_and_listed() {
    let state = test_state();

    let resp = post(
        &state,
        "/leads",
        "name=++Dora+Lima+&email=DORA%40Mail.com&phone=&source=referral",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/leads");

    let lead = state
        .db
        .with_conn(|conn| get_lead(conn, 1))
        .unwrap()
        .unwrap();
    assert_eq!(lead.name, "Dora Lima");
    assert_eq!(lead.email, "dora@mail.com");
    assert_eq!(lead.phone, None);
    assert_eq!(lead.source, LeadSource::Referral);
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.score, 0);

    let body = body_string(get(&state, "/leads"));
    assert!(body.contains("Dora Lima"));
    assert!(body.contains("Referral"));
}

#[test]
fn invalid_leads_are_rejected() {
    let state = test_state();

    assert_eq!(post(&state, "/leads", "name=X&email=not-an-email").status(), 400);
    assert_eq!(post(&state, "/leads", "name=&email=x%40y.com").status(), 400);
    assert_eq!(
        post(&state, "/leads", "name=X&email=x%40y.com&source=billboard").status(),
        400
    );
    assert_eq!(
        post(&state, "/leads", "name=X&email=x%40y.com&property_id=ghost").status(),
        400
    );
}

#[test]
fn leads_can_point_at_a_property() {
    let state = test_state();
    seed(
        &state,
        &[property("loft", PropertyType::Apartment, PropertyStatus::ForSale, 1.0)],
    );

    let resp = post(&state, "/leads", "name=Eva&email=eva%40mail.com&property_id=loft");
    assert_eq!(resp.status(), 302);

    let body = body_string(get(&state, "/properties/loft"));
    assert!(body.contains("Eva"));
}

#[test]
fn status_filter_shows_one_stage() {
    let state = test_state();
    post(&state, "/leads", "name=Ana&email=ana%40mail.com");
    post(&state, "/leads", "name=Beto&email=beto%40mail.com");

    let resp = post(&state, "/leads/2/status", "status=contacted");
    assert_eq!(resp.status(), 302);

    let body = body_string(get(&state, "/leads?status=contacted"));
    assert!(body.contains("Beto"));
    assert!(!body.contains("Ana"));

    let body = body_string(get(&state, "/leads?status=all"));
    assert!(body.contains("Beto"));
    assert!(body.contains("Ana"));

    assert_eq!(get(&state, "/leads?status=hot").status(), 400);
    assert_eq!(post(&state, "/leads/2/status", "status=hot").status(), 400);
    assert_eq!(post(&state, "/leads/77/status", "status=lost").status(), 404);
}

#[test]
fn score_is_whatever_the_agent_sets() {
    let state = test_state();
    post(&state, "/leads", "name=Ana&email=ana%40mail.com");

    assert_eq!(post(&state, "/leads/1/score", "score=85").status(), 302);
    let lead = state
        .db
        .with_conn(|conn| get_lead(conn, 1))
        .unwrap()
        .unwrap();
    assert_eq!(lead.score, 85);

    assert_eq!(post(&state, "/leads/1/score", "score=high").status(), 400);
}

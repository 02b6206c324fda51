// src/tests/router_tests/proposals_tests.rs

use crate::db::leads::get_lead;
use crate::db::proposals::get_proposal;
use crate::domain::{LeadStatus, PropertyStatus, PropertyType, ProposalStatus};
use crate::router::AppState;
use crate::tests::utils::{body_string, get, location, post, property, seed, test_state};

fn setup() -> AppState {
    let state = test_state();
    seed(
        &state,
        &[property("villa", PropertyType::House, PropertyStatus::ForSale, 500_000.0)],
    );
    post(&state, "/leads", "name=Rui&email=rui%40mail.com&property_id=villa");
    state
}

fn lead_status(state: &AppState) -> LeadStatus {
    state
        .db
        .with_conn(|conn| get_lead(conn, 1))
        .unwrap()
        .unwrap()
        .status
}

#[test]
fn drafting_a_proposal_moves_the_lead() {
    let state = setup();

    let resp = post(
        &state,
        "/proposals",
        "lead_id=1&property_id=villa&offered_price=450000&down_payment=90000&installments=12&valid_days=15&conditions=Keys+in+30+days",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/proposals/1");

    let proposal = state
        .db
        .with_conn(|conn| get_proposal(conn, 1))
        .unwrap()
        .unwrap();
    assert_eq!(proposal.status, ProposalStatus::Draft);
    assert_eq!(proposal.installments, 12);
    assert_eq!(lead_status(&state), LeadStatus::Proposal);

    let body = body_string(get(&state, "/proposals/1"));
    assert!(body.contains("Listing villa"));
    assert!(body.contains("Rui"));
    // 360,000 financed over 12 installments
    assert!(body.contains("360,000"));
    assert!(body.contains("30,000"));
    assert!(body.contains("10.0%"));
    assert!(body.contains("Keys in 30 days"));

    let body = body_string(get(&state, "/proposals"));
    assert!(body.contains("450,000"));
}

#[test]
fn invalid_proposals_are_rejected() {
    let state = setup();

    let cases = [
        "lead_id=1&property_id=villa&offered_price=100&down_payment=200",
        "lead_id=1&property_id=villa&offered_price=100&installments=0",
        "lead_id=1&property_id=villa&offered_price=0",
        "lead_id=9&property_id=villa&offered_price=100",
        "lead_id=1&property_id=nowhere&offered_price=100",
        "property_id=villa&offered_price=100",
    ];
    for form in cases {
        assert_eq!(post(&state, "/proposals", form).status(), 400, "{form}");
    }
    assert_eq!(lead_status(&state), LeadStatus::New);
}

#[test]
fn lifecycle_moves_follow_the_allowed_transitions() {
    let state = setup();
    post(
        &state,
        "/proposals",
        "lead_id=1&property_id=villa&offered_price=480000",
    );

    // draft cannot be accepted directly
    assert_eq!(post(&state, "/proposals/1/status", "status=accepted").status(), 400);

    assert_eq!(post(&state, "/proposals/1/status", "status=sent").status(), 302);
    assert_eq!(post(&state, "/proposals/1/status", "status=accepted").status(), 302);

    let proposal = state
        .db
        .with_conn(|conn| get_proposal(conn, 1))
        .unwrap()
        .unwrap();
    assert_eq!(proposal.status, ProposalStatus::Accepted);
    assert_eq!(lead_status(&state), LeadStatus::Won);

    // accepted is terminal
    assert_eq!(post(&state, "/proposals/1/status", "status=rejected").status(), 400);
    assert_eq!(post(&state, "/proposals/2/status", "status=sent").status(), 404);
}

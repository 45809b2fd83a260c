use super::*;

use brreg_core::Intent;

fn record(org: &str, name: &str) -> CompanyRecord {
    CompanyRecord {
        org_number: org.to_string(),
        name: name.to_string(),
        ..CompanyRecord::default()
    }
}

fn session_with_results() -> SearchSession {
    let mut session = SearchSession::new(true);
    session.set_query("equinor");
    let ticket = session.begin_search().expect("query is not empty");
    session.finish_search(
        &ticket,
        Ok(vec![
            record("923609016", "EQUINOR ASA"),
            record("990888213", "EQUINOR ENERGY AS"),
        ]),
    );
    session
}

#[test]
fn fresh_session_is_idle() {
    let session = SearchSession::new(true);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.mode(), SearchMode::Name);
    assert!(session.selected().is_none());
}

#[test]
fn blank_query_is_rejected_without_state_change() {
    let mut session = session_with_results();
    session.select("923609016");
    session.set_query("   ");

    let notification = session.begin_search().expect_err("blank query");
    assert_eq!(notification.intent, Intent::Error);
    assert_eq!(notification.body, "Please enter a search term");
    assert_eq!(session.results().len(), 2);
    assert!(!session.is_searching());
}

#[test]
fn begin_search_clears_results_and_selection() {
    let mut session = session_with_results();
    session.select("923609016");

    let ticket = session.begin_search().expect("query is not empty");
    assert_eq!(ticket.query, "equinor");
    assert_eq!(session.state(), SessionState::Searching);
    assert!(session.results().is_empty());
    assert!(session.selected().is_none());
}

#[test]
fn success_notification_counts_results() {
    let mut session = SearchSession::new(true);
    session.set_query("equinor");
    let ticket = session.begin_search().expect("query is not empty");
    let notification = session
        .finish_search(&ticket, Ok(vec![record("1", "A"), record("2", "B")]))
        .expect("current ticket");

    assert_eq!(notification.intent, Intent::Success);
    assert_eq!(notification.body, "Found 2 companies");
    assert_eq!(session.state(), SessionState::ResultsReady);
}

#[test]
fn org_number_success_names_the_company() {
    let mut session = SearchSession::new(true);
    assert!(session.set_mode(SearchMode::OrgNumber));
    session.set_query("923 609 016");
    assert_eq!(session.query(), "923609016");

    let ticket = session.begin_search().expect("query is not empty");
    let notification = session
        .finish_search(&ticket, Ok(vec![record("923609016", "EQUINOR ASA")]))
        .expect("current ticket");
    assert_eq!(notification.body, "Found company EQUINOR ASA");
}

#[test]
fn failure_severity_follows_kind() {
    let cases = [
        (SearchFailure::not_found(SearchMode::Name), Intent::Info, "No results"),
        (
            SearchFailure::unavailable(SearchMode::Name),
            Intent::Error,
            "Service unavailable",
        ),
        (
            SearchFailure {
                kind: SearchErrorKind::Unknown,
                mode: SearchMode::Name,
                // Wording that would have fooled substring matching.
                message: "No companies found: upstream not found".to_string(),
            },
            Intent::Error,
            "Search failed",
        ),
    ];

    for (failure, intent, title) in cases {
        let mut session = SearchSession::new(true);
        session.set_query("x");
        let ticket = session.begin_search().expect("query is not empty");
        let notification = session
            .finish_search(&ticket, Err(failure))
            .expect("current ticket");
        assert_eq!(notification.intent, intent);
        assert_eq!(notification.title, title);
        assert!(session.results().is_empty());
        assert!(!session.is_searching());
    }
}

#[test]
fn stale_response_is_discarded() {
    let mut session = SearchSession::new(true);
    session.set_query("first");
    let first = session.begin_search().expect("query is not empty");
    session.set_query("second");
    let second = session.begin_search().expect("query is not empty");

    session.finish_search(&second, Ok(vec![record("2", "SECOND AS")]));
    let late = session.finish_search(&first, Ok(vec![record("1", "FIRST AS")]));

    assert!(late.is_none());
    assert_eq!(session.results()[0].org_number, "2");
}

#[test]
fn clear_invalidates_outstanding_ticket() {
    let mut session = SearchSession::new(true);
    session.set_query("equinor");
    let ticket = session.begin_search().expect("query is not empty");
    session.clear();

    assert!(session
        .finish_search(&ticket, Ok(vec![record("1", "A")]))
        .is_none());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn selection_is_keyed_by_org_number() {
    let mut session = SearchSession::new(true);
    session.set_query("twin");
    let ticket = session.begin_search().expect("query is not empty");
    session.finish_search(
        &ticket,
        Ok(vec![record("111111111", "TWIN AS"), record("222222222", "TWIN AS")]),
    );

    session.select("222222222");
    assert_eq!(
        session.selected().map(|r| r.org_number.as_str()),
        Some("222222222")
    );
    assert!(session.select("333333333").is_none());
    assert_eq!(
        session.selected().map(|r| r.org_number.as_str()),
        Some("222222222")
    );
}

#[test]
fn editing_query_drops_selection() {
    let mut session = session_with_results();
    session.select("923609016");
    session.set_query("equinor");
    assert!(session.selected().is_some());

    session.set_query("equinor asa");
    assert!(session.selected().is_none());
}

#[test]
fn mode_switch_clears_incompatible_query() {
    let mut session = SearchSession::new(true);
    session.set_query("Equinor");
    assert!(session.set_mode(SearchMode::OrgNumber));
    assert_eq!(session.query(), "");

    assert!(session.set_mode(SearchMode::Industry));
    session.set_query("62010");
    assert_eq!(session.query(), "62.010");
    assert!(session.set_mode(SearchMode::OrgNumber));
    assert_eq!(session.query(), "");

    session.set_query("123");
    assert!(session.set_mode(SearchMode::Name));
    assert_eq!(session.query(), "");
}

#[test]
fn mode_switch_keeps_compatible_query() {
    let mut session = SearchSession::new(true);
    assert!(session.set_mode(SearchMode::OrgNumber));
    session.set_query("923609016");
    assert!(session.set_mode(SearchMode::Industry));
    assert_eq!(session.query(), "923609016");
}

#[test]
fn advanced_modes_are_gated() {
    let mut session = SearchSession::new(false);
    assert_eq!(session.available_modes(), &[SearchMode::Name]);
    assert!(!session.set_mode(SearchMode::Industry));
    assert_eq!(session.mode(), SearchMode::Name);
}

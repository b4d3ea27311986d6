//! Every endpoint exercised against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the full pipeline
//! (build, real HTTP round-trip, parse) through the `Bestiary` facade. Also
//! covers the two failure paths that need a real socket: a non-JSON body
//! from the server, and a connection refusal from a dead port.

use std::net::SocketAddr;

use bestiary_core::{ApiError, Bestiary};

/// Start the mock server on an ephemeral port and return its address.
fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn all_endpoints_round_trip() {
    let addr = start_mock_server();
    let bestiary = Bestiary::with_base_url(&format!("http://{addr}"));

    // Full beast record.
    let cow = bestiary.monster_by_id(81).unwrap();
    assert_eq!(cow.name, "Cow");
    assert_eq!(cow.level, 2);
    assert_eq!(cow.slayercat, "Cows");
    assert_eq!(cow.area, vec!["Lumbridge"]);
    assert!(cow.animations.contains_key("death"));

    // Search, single and plus-joined terms.
    let dragons = bestiary.search_monsters("dragon").unwrap();
    assert_eq!(dragons.len(), 1);
    assert_eq!(dragons[0].label, "Green dragon");
    let both = bestiary.search_monsters("dragon+demon").unwrap();
    assert_eq!(both.len(), 2);

    // Names by letter.
    let c_names = bestiary.names_by_letter("c").unwrap();
    assert!(c_names.iter().any(|l| l.label == "Cow"));
    assert!(c_names.iter().all(|l| l.label.to_lowercase().starts_with('c')));

    // Areas, then beasts of one of them.
    let areas = bestiary.areas().unwrap();
    assert!(areas.contains(&"Lumbridge".to_string()));
    let lumbridge = bestiary.monsters_by_area("Lumbridge").unwrap();
    assert_eq!(lumbridge.len(), 2);
    // A plus-joined area value must survive the wire as a literal `+`.
    let joined = bestiary.monsters_by_area("Lumbridge+Wilderness").unwrap();
    assert_eq!(joined.len(), 3);
    assert!(joined.iter().any(|l| l.label == "Green dragon"));

    // Slayer dictionary, then beasts of one category.
    let cats = bestiary.slayer_categories().unwrap();
    let cows_id = cats["Cows"];
    let cows = bestiary.monsters_by_slayer_category(cows_id).unwrap();
    assert_eq!(cows.len(), 1);
    assert_eq!(cows[0].value, cow.id);

    // Weakness dictionary, then beasts of one weakness.
    let weaknesses = bestiary.weaknesses().unwrap();
    let crush_id = weaknesses["Crush"];
    let crushables = bestiary.monsters_by_weakness(crush_id).unwrap();
    assert_eq!(crushables.len(), 2);

    // Level range, inclusive on both bounds.
    let low_levels = bestiary.monsters_by_level_range(1, 2).unwrap();
    let labels: Vec<&str> = low_levels.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Chicken", "Cow"]);
}

#[test]
fn unknown_beast_id_is_invalid_body() {
    let addr = start_mock_server();
    let bestiary = Bestiary::with_base_url(&format!("http://{addr}"));

    // The server answers unknown ids with a non-JSON (empty) body.
    let err = bestiary.monster_by_id(999_999).unwrap_err();
    assert!(matches!(err, ApiError::InvalidBody));
}

#[test]
fn validation_failure_issues_no_request() {
    // Nothing listens here; any network attempt would surface as Transport.
    let bestiary = Bestiary::with_base_url("http://127.0.0.1:1/bestiary");

    let err = bestiary.names_by_letter("ab").unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter(_)));
    let err = bestiary.names_by_letter("").unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter(_)));
}

#[test]
fn connection_refusal_is_transport_error() {
    let bestiary = Bestiary::with_base_url("http://127.0.0.1:1/bestiary");

    let err = bestiary.areas().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    // The underlying error is preserved as the source.
    assert!(std::error::Error::source(&err).is_some());
}

//! End-to-end resolution over the JSON fixtures.

use std::path::PathBuf;

use desk_core::enums::{Connector, FieldKind, ResourceKind};
use desk_core::errors::CoreError;
use desk_db::{Condition, DataPaths, Query, RecordKey, Store, load_store_from_paths};
use pretty_assertions::assert_eq;

const KOREA: &str = "436bf9b0-1147-4c0a-8439-6f79833bff5b";
const MICRONESIA: &str = "1a227508-9f39-427c-8f57-1b72f3fab87c";
const HUNGARY: &str = "2217c7dc-7371-4401-8738-0a8a8aedc08d";

fn fixtures() -> Store {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    load_store_from_paths(&DataPaths {
        organizations: dir.join("organizations.json"),
        users: dir.join("users.json"),
        tickets: dir.join("tickets.json"),
    })
    .expect("fixtures load")
}

fn field(kind: ResourceKind, field: &str, value: &str, connector: Connector) -> Condition {
    Condition::field_match(kind, field, value, connector)
}

#[test]
fn fixtures_load_every_record() {
    let store = fixtures();
    assert_eq!(store.count(ResourceKind::Organization), 3);
    assert_eq!(store.count(ResourceKind::User), 3);
    assert_eq!(store.count(ResourceKind::Ticket), 3);
}

#[test]
fn details_alone_finds_megacorp_orgs() {
    let store = fixtures();
    let query = Query::new().with(field(
        ResourceKind::Organization,
        "details",
        "MegaCorp",
        Connector::Union,
    ));
    let resolution = store.resolve(&query).unwrap();

    assert!(resolution.matches.contains(&RecordKey::Organization(101)));
    assert!(resolution.matches.contains(&RecordKey::Organization(103)));
    assert_eq!(resolution.matches.len(), 2);
}

#[test]
fn details_intersect_unknown_domain_is_empty() {
    let store = fixtures();
    let query = Query::new()
        .with(field(
            ResourceKind::Organization,
            "details",
            "MegaCorp",
            Connector::Union,
        ))
        .with(field(
            ResourceKind::Organization,
            "domain_names",
            "otherway.com",
            Connector::Intersection,
        ));

    let resolution = store.resolve(&query).unwrap();
    assert!(resolution.is_empty());
    assert!(resolution.related.is_empty());
}

#[test]
fn user_38_relates_to_submitted_and_assigned_tickets() {
    let store = fixtures();
    let resolution = store
        .resolve(&Query::new().with(Condition::id_match(ResourceKind::User, "38")))
        .unwrap();

    assert_eq!(
        resolution.related.keys().collect::<Vec<_>>(),
        vec![
            RecordKey::Organization(101),
            RecordKey::Ticket(MICRONESIA.into()),
            RecordKey::Ticket(KOREA.into()),
        ]
    );
}

#[test]
fn ticket_skips_dangling_foreign_keys() {
    let store = fixtures();
    let resolution = store
        .resolve(&Query::new().with(Condition::id_match(ResourceKind::Ticket, KOREA)))
        .unwrap();

    // Organization 116 and assignee 24 are not in the fixtures.
    assert_eq!(
        resolution.related.keys().collect::<Vec<_>>(),
        vec![RecordKey::User(38)]
    );
}

#[test]
fn organization_relates_to_members_and_tickets() {
    let store = fixtures();
    let resolution = store
        .resolve(&Query::new().with(Condition::id_match(ResourceKind::Organization, "102")))
        .unwrap();

    assert_eq!(
        resolution.related.keys().collect::<Vec<_>>(),
        vec![RecordKey::User(1), RecordKey::Ticket(HUNGARY.into())]
    );
}

#[test]
fn typed_fields_match_after_coercion() {
    let store = fixtures();
    let cases = [
        (ResourceKind::User, "active", "false", vec![RecordKey::User(75)]),
        (ResourceKind::User, "organization_id", "101", vec![RecordKey::User(38)]),
        (
            ResourceKind::Organization,
            "created_at",
            "2016-04-07T08:21:44 -10:00",
            vec![RecordKey::Organization(102)],
        ),
        (ResourceKind::Ticket, "type", "", vec![RecordKey::Ticket(HUNGARY.into())]),
        (ResourceKind::Ticket, "tags", "Idaho", vec![RecordKey::Ticket(MICRONESIA.into())]),
    ];

    for (kind, name, value, expected) in cases {
        let query = Query::new().with(field(kind, name, value, Connector::Union));
        let matches = query.resolve_matches(&store).unwrap();
        assert_eq!(matches.keys().collect::<Vec<_>>(), expected, "{kind} {name}={value}");
    }
}

#[test]
fn union_then_intersection_across_tickets() {
    let store = fixtures();
    let query = Query::new()
        .with(field(ResourceKind::Ticket, "type", "incident", Connector::Union))
        .with(field(ResourceKind::Ticket, "status", "closed", Connector::Union))
        .with(field(ResourceKind::Ticket, "via", "web", Connector::Intersection));

    let matches = query.resolve_matches(&store).unwrap();
    assert_eq!(
        matches.keys().collect::<Vec<_>>(),
        vec![
            RecordKey::Ticket(HUNGARY.into()),
            RecordKey::Ticket(KOREA.into()),
        ]
    );
}

#[test]
fn failures_surface_instead_of_empty_results() {
    let store = fixtures();

    let missing = Query::new().with(Condition::id_match(ResourceKind::Organization, "10"));
    assert!(matches!(
        store.resolve(&missing),
        Err(CoreError::NotFound { kind: ResourceKind::Organization, .. })
    ));

    let bad_value = Query::new().with(field(
        ResourceKind::User,
        "verified",
        "maybe",
        Connector::Union,
    ));
    assert!(matches!(
        store.resolve(&bad_value),
        Err(CoreError::InvalidMatchValue { expected: FieldKind::Boolean, .. })
    ));

    let bad_field = Query::new().with(field(ResourceKind::Ticket, "10", "10", Connector::Union));
    assert!(matches!(
        store.resolve(&bad_field),
        Err(CoreError::FieldMissing { kind: ResourceKind::Ticket, .. })
    ));
}

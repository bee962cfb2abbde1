//! Result sets and one-hop related-record expansion.

use std::collections::BTreeMap;

use desk_core::entities::{Organization, Ticket, User};
use desk_core::enums::ResourceKind;
use serde::{Serialize, Serializer};

use crate::store::Store;

/// Natural key of a record, unique across all resource kinds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKey {
    Organization(i64),
    User(i64),
    Ticket(String),
}

impl RecordKey {
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Organization(_) => ResourceKind::Organization,
            Self::User(_) => ResourceKind::User,
            Self::Ticket(_) => ResourceKind::Ticket,
        }
    }
}

/// A borrowed record of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef<'a> {
    Organization(&'a Organization),
    User(&'a User),
    Ticket(&'a Ticket),
}

impl RecordRef<'_> {
    #[must_use]
    pub fn key(&self) -> RecordKey {
        match self {
            Self::Organization(org) => RecordKey::Organization(org.id),
            Self::User(user) => RecordKey::User(user.id),
            Self::Ticket(ticket) => RecordKey::Ticket(ticket.id.clone()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Organization(_) => ResourceKind::Organization,
            Self::User(_) => ResourceKind::User,
            Self::Ticket(_) => ResourceKind::Ticket,
        }
    }
}

/// Records bucketed by kind and deduplicated by natural key.
///
/// Serializes as `{ "organizations": [...], "users": [...], "tickets": [...] }`.
/// Iteration follows key order, which callers must not rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet<'a> {
    #[serde(serialize_with = "serialize_values")]
    organizations: BTreeMap<i64, &'a Organization>,
    #[serde(serialize_with = "serialize_values")]
    users: BTreeMap<i64, &'a User>,
    #[serde(serialize_with = "serialize_values")]
    tickets: BTreeMap<&'a str, &'a Ticket>,
}

impl<'a> RecordSet<'a> {
    /// Insert a record; returns `false` if its key was already present.
    pub fn insert(&mut self, record: RecordRef<'a>) -> bool {
        match record {
            RecordRef::Organization(org) => self.organizations.insert(org.id, org).is_none(),
            RecordRef::User(user) => self.users.insert(user.id, user).is_none(),
            RecordRef::Ticket(ticket) => self.tickets.insert(&ticket.id, ticket).is_none(),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &RecordKey) -> bool {
        match key {
            RecordKey::Organization(id) => self.organizations.contains_key(id),
            RecordKey::User(id) => self.users.contains_key(id),
            RecordKey::Ticket(id) => self.tickets.contains_key(id.as_str()),
        }
    }

    pub fn organizations(&self) -> impl Iterator<Item = &'a Organization> + '_ {
        self.organizations.values().copied()
    }

    pub fn users(&self) -> impl Iterator<Item = &'a User> + '_ {
        self.users.values().copied()
    }

    pub fn tickets(&self) -> impl Iterator<Item = &'a Ticket> + '_ {
        self.tickets.values().copied()
    }

    /// Keys of every record in the set.
    pub fn keys(&self) -> impl Iterator<Item = RecordKey> + '_ {
        self.organizations
            .keys()
            .map(|id| RecordKey::Organization(*id))
            .chain(self.users.keys().map(|id| RecordKey::User(*id)))
            .chain(
                self.tickets
                    .keys()
                    .map(|id| RecordKey::Ticket((*id).to_string())),
            )
    }

    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Organization => self.organizations.len(),
            ResourceKind::User => self.users.len(),
            ResourceKind::Ticket => self.tickets.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.organizations.len() + self.users.len() + self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> FromIterator<RecordRef<'a>> for RecordSet<'a> {
    fn from_iter<I: IntoIterator<Item = RecordRef<'a>>>(iter: I) -> Self {
        let mut set = Self::default();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

fn serialize_values<K, V, S>(map: &BTreeMap<K, V>, s: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    s.collect_seq(map.values())
}

/// Outcome of resolving a query: the primary matches plus every record one
/// hop away from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub matches: RecordSet<'a>,
    pub related: RecordSet<'a>,
}

impl<'a> Resolution<'a> {
    /// Expand `matches` with their directly related records.
    ///
    /// ```text
    /// organization → member users, its tickets
    /// user         → its organization, submitted and assigned tickets
    /// ticket       → its organization, submitter, assignee
    /// ```
    ///
    /// Related records are not expanded further. Foreign keys that resolve
    /// to nothing are skipped.
    #[must_use]
    pub fn expand(store: &'a Store, matches: RecordSet<'a>) -> Self {
        let mut related = RecordSet::default();

        for org in matches.organizations() {
            for user_id in store.users_of_organization(org.id) {
                if let Ok(user) = store.get_user(user_id) {
                    related.insert(RecordRef::User(user));
                }
            }
            for ticket_id in store.tickets_of_organization(org.id) {
                if let Ok(ticket) = store.get_ticket(ticket_id) {
                    related.insert(RecordRef::Ticket(ticket));
                }
            }
        }

        for user in matches.users() {
            if let Some(org_id) = user.organization_id
                && let Ok(org) = store.get_organization(org_id)
            {
                related.insert(RecordRef::Organization(org));
            }
            let ticket_ids = store
                .tickets_submitted_by(user.id)
                .chain(store.tickets_assigned_to(user.id));
            for ticket_id in ticket_ids {
                if let Ok(ticket) = store.get_ticket(ticket_id) {
                    related.insert(RecordRef::Ticket(ticket));
                }
            }
        }

        for ticket in matches.tickets() {
            if let Some(org_id) = ticket.organization_id
                && let Ok(org) = store.get_organization(org_id)
            {
                related.insert(RecordRef::Organization(org));
            }
            for user_id in [ticket.submitter_id, ticket.assignee_id].into_iter().flatten() {
                if let Ok(user) = store.get_user(user_id) {
                    related.insert(RecordRef::User(user));
                }
            }
        }

        Self { matches, related }
    }

    /// Whether the query matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> Store {
        Store::from_records(
            vec![Organization {
                id: 101,
                ..Organization::default()
            }],
            vec![
                User {
                    id: 38,
                    organization_id: Some(101),
                    ..User::default()
                },
                User {
                    id: 24,
                    organization_id: Some(999),
                    ..User::default()
                },
            ],
            vec![Ticket {
                id: "t-1".into(),
                organization_id: Some(101),
                submitter_id: Some(38),
                assignee_id: Some(24),
                ..Ticket::default()
            }],
        )
    }

    #[test]
    fn record_set_deduplicates_by_key() {
        let store = store();
        let user = store.get_user(38).unwrap();
        let mut set = RecordSet::default();
        assert!(set.insert(RecordRef::User(user)));
        assert!(!set.insert(RecordRef::User(user)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&RecordKey::User(38)));
        assert!(!set.contains(&RecordKey::Organization(38)));
    }

    #[test]
    fn organization_expands_to_users_and_tickets() {
        let store = store();
        let matches: RecordSet<'_> =
            [RecordRef::Organization(store.get_organization(101).unwrap())]
                .into_iter()
                .collect();
        let resolution = Resolution::expand(&store, matches);

        assert_eq!(
            resolution.related.keys().collect::<Vec<_>>(),
            vec![RecordKey::User(38), RecordKey::Ticket("t-1".into())]
        );
    }

    #[test]
    fn user_expands_to_org_and_both_ticket_roles() {
        let store = store();
        let matches: RecordSet<'_> = [
            RecordRef::User(store.get_user(38).unwrap()),
            RecordRef::User(store.get_user(24).unwrap()),
        ]
        .into_iter()
        .collect();
        let resolution = Resolution::expand(&store, matches);

        // User 24 references an organization that was never loaded.
        assert_eq!(
            resolution.related.keys().collect::<Vec<_>>(),
            vec![RecordKey::Organization(101), RecordKey::Ticket("t-1".into())]
        );
    }

    #[test]
    fn ticket_expands_to_org_submitter_and_assignee() {
        let store = store();
        let matches: RecordSet<'_> = [RecordRef::Ticket(store.get_ticket("t-1").unwrap())]
            .into_iter()
            .collect();
        let resolution = Resolution::expand(&store, matches);

        assert_eq!(resolution.related.count(ResourceKind::Organization), 1);
        assert_eq!(resolution.related.count(ResourceKind::User), 2);
        assert_eq!(resolution.related.count(ResourceKind::Ticket), 0);
    }

    #[test]
    fn serializes_buckets_as_arrays() {
        let store = store();
        let matches: RecordSet<'_> = [RecordRef::Ticket(store.get_ticket("t-1").unwrap())]
            .into_iter()
            .collect();
        let json = serde_json::to_value(Resolution::expand(&store, matches)).unwrap();

        assert_eq!(json["matches"]["tickets"][0]["_id"], "t-1");
        assert_eq!(json["matches"]["users"], serde_json::json!([]));
        assert_eq!(json["related"]["users"].as_array().map(Vec::len), Some(2));
    }
}

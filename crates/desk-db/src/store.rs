//! Canonical in-memory record store.
//!
//! Records are plain data keyed by primary id. Relationship bookkeeping lives
//! in separate back-reference indices owned by the store:
//!
//! ```text
//! organization ──▶ users            (user.organization_id)
//!              ──▶ tickets          (ticket.organization_id)
//! user         ──▶ submitted tickets (ticket.submitter_id)
//!              ──▶ assigned tickets  (ticket.assignee_id)
//! ```
//!
//! Back-references are resolved only when the referencing record is added,
//! and only against records already present. Load organizations, then users,
//! then tickets.

use std::collections::{BTreeMap, BTreeSet};

use desk_core::entities::{Organization, Ticket, User};
use desk_core::enums::ResourceKind;
use desk_core::errors::CoreError;

/// Records of all three resources plus derived back-reference indices.
#[derive(Debug, Clone, Default)]
pub struct Store {
    organizations: BTreeMap<i64, Organization>,
    users: BTreeMap<i64, User>,
    tickets: BTreeMap<String, Ticket>,

    org_users: BTreeMap<i64, BTreeSet<i64>>,
    org_tickets: BTreeMap<i64, BTreeSet<String>>,
    user_submitted: BTreeMap<i64, BTreeSet<String>>,
    user_assigned: BTreeMap<i64, BTreeSet<String>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from decoded records, adding them in dependency order
    /// (organizations, then users, then tickets).
    ///
    /// Duplicate ids are resolved with last-write-wins semantics.
    #[must_use]
    pub fn from_records(
        organizations: Vec<Organization>,
        users: Vec<User>,
        tickets: Vec<Ticket>,
    ) -> Self {
        let mut store = Self::new();
        for org in organizations {
            store.add_organization(org);
        }
        for user in users {
            store.add_user(user);
        }
        for ticket in tickets {
            store.add_ticket(ticket);
        }
        tracing::debug!(
            organizations = store.organizations.len(),
            users = store.users.len(),
            tickets = store.tickets.len(),
            "store loaded"
        );
        store
    }

    /// Insert or replace an organization by id.
    ///
    /// Existing back-references are kept; new ones start empty. Returns the
    /// previous value if present.
    pub fn add_organization(&mut self, org: Organization) -> Option<Organization> {
        self.org_users.entry(org.id).or_default();
        self.org_tickets.entry(org.id).or_default();
        self.organizations.insert(org.id, org)
    }

    /// Insert or replace a user by id, linking it to its organization if
    /// that organization is already present.
    pub fn add_user(&mut self, user: User) -> Option<User> {
        self.user_submitted.entry(user.id).or_default();
        self.user_assigned.entry(user.id).or_default();

        if let Some(org_id) = user.organization_id {
            if self.organizations.contains_key(&org_id) {
                self.org_users.entry(org_id).or_default().insert(user.id);
            } else {
                tracing::trace!(
                    user = user.id,
                    organization = org_id,
                    "organization not loaded; user back-reference skipped"
                );
            }
        }

        self.users.insert(user.id, user)
    }

    /// Insert or replace a ticket by id, linking it to its organization,
    /// submitter and assignee where those are already present.
    pub fn add_ticket(&mut self, ticket: Ticket) -> Option<Ticket> {
        if let Some(org_id) = ticket.organization_id {
            if self.organizations.contains_key(&org_id) {
                self.org_tickets
                    .entry(org_id)
                    .or_default()
                    .insert(ticket.id.clone());
            } else {
                tracing::trace!(
                    ticket = %ticket.id,
                    organization = org_id,
                    "organization not loaded; ticket back-reference skipped"
                );
            }
        }

        if let Some(user_id) = ticket.submitter_id
            && self.users.contains_key(&user_id)
        {
            self.user_submitted
                .entry(user_id)
                .or_default()
                .insert(ticket.id.clone());
        }

        if let Some(user_id) = ticket.assignee_id
            && self.users.contains_key(&user_id)
        {
            self.user_assigned
                .entry(user_id)
                .or_default()
                .insert(ticket.id.clone());
        }

        self.tickets.insert(ticket.id.clone(), ticket)
    }

    /// Lookup one organization by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no organization has this id.
    pub fn get_organization(&self, id: i64) -> Result<&Organization, CoreError> {
        self.organizations
            .get(&id)
            .ok_or_else(|| not_found(ResourceKind::Organization, id))
    }

    /// Lookup one user by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no user has this id.
    pub fn get_user(&self, id: i64) -> Result<&User, CoreError> {
        self.users
            .get(&id)
            .ok_or_else(|| not_found(ResourceKind::User, id))
    }

    /// Lookup one ticket by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no ticket has this id.
    pub fn get_ticket(&self, id: &str) -> Result<&Ticket, CoreError> {
        self.tickets
            .get(id)
            .ok_or_else(|| not_found(ResourceKind::Ticket, id))
    }

    /// Iterate organizations in id order.
    pub fn organizations(&self) -> impl Iterator<Item = &Organization> {
        self.organizations.values()
    }

    /// Iterate users in id order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Iterate tickets in id order.
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Number of records of one resource kind.
    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Organization => self.organizations.len(),
            ResourceKind::User => self.users.len(),
            ResourceKind::Ticket => self.tickets.len(),
        }
    }

    /// Total number of records across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.organizations.len() + self.users.len() + self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of users linked to `org_id`.
    pub fn users_of_organization(&self, org_id: i64) -> impl Iterator<Item = i64> + '_ {
        self.org_users.get(&org_id).into_iter().flatten().copied()
    }

    /// Ids of tickets linked to `org_id`.
    pub fn tickets_of_organization(&self, org_id: i64) -> impl Iterator<Item = &str> {
        self.org_tickets
            .get(&org_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Ids of tickets submitted by `user_id`.
    pub fn tickets_submitted_by(&self, user_id: i64) -> impl Iterator<Item = &str> {
        self.user_submitted
            .get(&user_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Ids of tickets assigned to `user_id`.
    pub fn tickets_assigned_to(&self, user_id: i64) -> impl Iterator<Item = &str> {
        self.user_assigned
            .get(&user_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

fn not_found(kind: ResourceKind, id: impl ToString) -> CoreError {
    CoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn org(id: i64) -> Organization {
        Organization {
            id,
            name: format!("Org {id}"),
            ..Organization::default()
        }
    }

    fn user(id: i64, organization_id: Option<i64>) -> User {
        User {
            id,
            name: format!("User {id}"),
            organization_id,
            ..User::default()
        }
    }

    fn ticket(id: &str, org: Option<i64>, submitter: Option<i64>, assignee: Option<i64>) -> Ticket {
        Ticket {
            id: id.to_string(),
            organization_id: org,
            submitter_id: submitter,
            assignee_id: assignee,
            ..Ticket::default()
        }
    }

    #[test]
    fn add_and_get_round_trip() {
        let mut store = Store::new();
        let expected = ticket("cool", Some(200), Some(2), Some(1));
        store.add_ticket(expected.clone());

        assert_eq!(store.get_ticket("cool").expect("ticket exists"), &expected);
    }

    #[test]
    fn missing_ids_are_not_found() {
        let store = Store::from_records(vec![org(101)], vec![user(1, None)], vec![]);

        assert!(matches!(
            store.get_organization(99),
            Err(CoreError::NotFound { kind: ResourceKind::Organization, ref id }) if id == "99"
        ));
        assert!(matches!(
            store.get_user(1000),
            Err(CoreError::NotFound { kind: ResourceKind::User, .. })
        ));
        assert!(matches!(
            store.get_ticket("mr-garbage"),
            Err(CoreError::NotFound { kind: ResourceKind::Ticket, .. })
        ));
    }

    #[test]
    fn user_back_reference_appears_after_add() {
        let mut store = Store::new();
        store.add_organization(org(101));
        assert_eq!(store.users_of_organization(101).count(), 0);

        store.add_user(user(7, Some(101)));
        assert_eq!(store.users_of_organization(101).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn ticket_back_references_link_org_submitter_and_assignee() {
        let store = Store::from_records(
            vec![org(101)],
            vec![user(38, Some(101)), user(24, None)],
            vec![ticket("t-1", Some(101), Some(38), Some(24))],
        );

        assert_eq!(store.tickets_of_organization(101).collect::<Vec<_>>(), vec!["t-1"]);
        assert_eq!(store.tickets_submitted_by(38).collect::<Vec<_>>(), vec!["t-1"]);
        assert_eq!(store.tickets_assigned_to(24).collect::<Vec<_>>(), vec!["t-1"]);
        assert_eq!(store.tickets_assigned_to(38).count(), 0);
    }

    #[test]
    fn forward_references_are_dropped() {
        let mut store = Store::new();
        store.add_ticket(ticket("t-early", Some(101), Some(38), None));
        store.add_user(user(38, Some(101)));
        store.add_organization(org(101));

        assert_eq!(store.tickets_of_organization(101).count(), 0);
        assert_eq!(store.users_of_organization(101).count(), 0);
        assert_eq!(store.tickets_submitted_by(38).count(), 0);

        // Re-adding the referencing record picks the link up.
        store.add_user(user(38, Some(101)));
        assert_eq!(store.users_of_organization(101).collect::<Vec<_>>(), vec![38]);
    }

    #[test]
    fn duplicate_ids_use_last_write_wins() {
        let mut first = org(101);
        first.details = "First".into();
        let mut second = org(101);
        second.details = "Second".into();

        let store = Store::from_records(vec![first, second], vec![], vec![]);
        assert_eq!(store.count(ResourceKind::Organization), 1);
        assert_eq!(
            store.get_organization(101).expect("org exists").details,
            "Second"
        );
    }

    #[test]
    fn re_adding_keeps_back_references_and_does_not_duplicate() {
        let mut store = Store::from_records(vec![org(101)], vec![user(1, Some(101))], vec![]);
        store.add_organization(org(101));
        store.add_user(user(1, Some(101)));

        assert_eq!(store.users_of_organization(101).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn len_counts_every_kind() {
        let store = Store::from_records(
            vec![org(1), org(2)],
            vec![user(1, None)],
            vec![ticket("a", None, None, None)],
        );
        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
        assert!(Store::new().is_empty());
    }
}

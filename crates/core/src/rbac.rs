//! Capability checks.
//!
//! [`can`] is the single point of authorization policy. It answers whether a
//! role may perform an action on records it does NOT own; record ownership
//! is a separate grant that callers check first. Handlers must not
//! re-implement role comparisons inline.

use crate::roles::{ROLE_MANAGER, ROLE_STAFF};

/// Actions a principal can attempt against a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// Resource types with non-default policy. Plain entity names (e.g.
/// `"service_request"`, `"task"`) fall under the general rules.
pub mod resources {
    /// Billing-sensitive resources (credit balances); managers only.
    pub const BILLING: &str = "billing";
    /// Administrative resources (user management); managers only.
    pub const ADMIN: &str = "admin";
}

/// Returns whether `role` may perform `action` on a `resource` record it
/// does not own.
///
/// - `manager`: everything.
/// - `staff`: read, create, and update, but no deletes and no billing or
///   admin resources.
/// - `client` and unknown roles: nothing. Clients act only on records they
///   own, which callers grant before consulting this table.
pub fn can(role: &str, action: Action, resource: &str) -> bool {
    match role {
        ROLE_MANAGER => true,
        ROLE_STAFF => {
            action != Action::Delete && !matches!(resource, resources::BILLING | resources::ADMIN)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_CLIENT;

    #[test]
    fn manager_can_do_anything() {
        for action in [Action::Read, Action::Create, Action::Update, Action::Delete] {
            assert!(can(ROLE_MANAGER, action, "service_request"));
            assert!(can(ROLE_MANAGER, action, resources::BILLING));
            assert!(can(ROLE_MANAGER, action, resources::ADMIN));
        }
    }

    #[test]
    fn staff_can_work_but_not_delete() {
        assert!(can(ROLE_STAFF, Action::Read, "project"));
        assert!(can(ROLE_STAFF, Action::Update, "task"));
        assert!(!can(ROLE_STAFF, Action::Delete, "task"));
    }

    #[test]
    fn staff_cannot_touch_billing_or_admin() {
        assert!(!can(ROLE_STAFF, Action::Read, resources::BILLING));
        assert!(!can(ROLE_STAFF, Action::Update, resources::BILLING));
        assert!(!can(ROLE_STAFF, Action::Read, resources::ADMIN));
    }

    #[test]
    fn client_has_no_grants_beyond_ownership() {
        assert!(!can(ROLE_CLIENT, Action::Read, "project"));
        assert!(!can(ROLE_CLIENT, Action::Update, "project"));
        assert!(!can(ROLE_CLIENT, Action::Create, "task"));
        assert!(!can(ROLE_CLIENT, Action::Read, resources::ADMIN));
    }

    #[test]
    fn unknown_role_is_denied() {
        assert!(!can("superuser", Action::Read, "project"));
        assert!(!can("", Action::Read, "project"));
    }
}

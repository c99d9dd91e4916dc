//! Built-in entities Keycloak creates for every new realm.
//!
//! These are recreated automatically on import, so a minimized export
//! leaves them out.

/// Well-known client IDs created with every realm.
pub mod clients {
    /// Account management console (legacy).
    pub const ACCOUNT: &str = "account";
    /// Account management console.
    pub const ACCOUNT_CONSOLE: &str = "account-console";
    /// Admin CLI client.
    pub const ADMIN_CLI: &str = "admin-cli";
    /// Identity broker client.
    pub const BROKER: &str = "broker";
    /// Realm management client (holds the admin client roles).
    pub const REALM_MANAGEMENT: &str = "realm-management";
    /// Admin console client.
    pub const SECURITY_ADMIN_CONSOLE: &str = "security-admin-console";

    /// All built-in client IDs.
    pub const ALL: [&str; 6] = [
        ACCOUNT,
        ACCOUNT_CONSOLE,
        ADMIN_CLI,
        BROKER,
        REALM_MANAGEMENT,
        SECURITY_ADMIN_CONSOLE,
    ];
}

/// Well-known realm role names created with every realm.
pub mod realm_roles {
    /// Prefix of the composite default role (`default-roles-<realm>`).
    pub const DEFAULT_ROLES_PREFIX: &str = "default-roles-";
    /// Offline access role (for refresh tokens).
    pub const OFFLINE_ACCESS: &str = "offline_access";
    /// UMA authorization role.
    pub const UMA_AUTHORIZATION: &str = "uma_authorization";
}

/// Returns true if `client_id` names a built-in client.
#[must_use]
pub fn is_default_client(client_id: &str) -> bool {
    clients::ALL.contains(&client_id)
}

/// Name of the composite default role Keycloak creates for `realm`.
#[must_use]
pub fn default_roles_name(realm: &str) -> String {
    format!("{}{}", realm_roles::DEFAULT_ROLES_PREFIX, realm)
}

/// The built-in realm roles of one realm.
#[derive(Debug, Clone)]
pub struct DefaultRealmRoles {
    default_roles: String,
}

impl DefaultRealmRoles {
    /// Builds the set for the realm named `realm`.
    #[must_use]
    pub fn for_realm(realm: &str) -> Self {
        Self {
            default_roles: default_roles_name(realm),
        }
    }

    /// Returns true if `name` is one of this realm's built-in roles.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        name == realm_roles::OFFLINE_ACCESS
            || name == realm_roles::UMA_AUTHORIZATION
            || name == self.default_roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_clients_are_recognized() {
        for id in clients::ALL {
            assert!(is_default_client(id), "{id} should be a default client");
        }
        assert!(!is_default_client("my-app"));
        assert!(!is_default_client("Account"));
    }

    #[test]
    fn default_roles_follow_realm_name() {
        let roles = DefaultRealmRoles::for_realm("hamster-world");
        assert!(roles.contains("default-roles-hamster-world"));
        assert!(roles.contains("offline_access"));
        assert!(roles.contains("uma_authorization"));
        assert!(!roles.contains("default-roles-master"));
        assert!(!roles.contains("app-admin"));
    }

    #[test]
    fn other_realm_default_roles_are_custom() {
        let roles = DefaultRealmRoles::for_realm("shop");
        assert!(roles.contains("default-roles-shop"));
        assert!(!roles.contains("default-roles-hamster-world"));
    }
}

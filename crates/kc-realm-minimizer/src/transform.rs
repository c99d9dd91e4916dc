//! The minimizing transform.
//!
//! Drops the entities Keycloak recreates on its own, opens client URL
//! allowlists to wildcards, and pins the realm settings a fresh deployment
//! needs.

use serde::Serialize;
use serde_json::Value;

use crate::defaults::{is_default_client, DefaultRealmRoles};
use crate::model::{ClientObject, RealmDocument, RoleObject, UserObject};

/// `sslRequired` value written to every minimized realm.
pub const SSL_REQUIRED_NONE: &str = "NONE";

/// Minimized realm, serialized with exactly these keys in this order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimalRealm {
    /// Realm name.
    pub realm: String,
    /// Always true.
    pub enabled: bool,
    /// Always `NONE`.
    pub ssl_required: String,
    /// Copied from the export, false when absent.
    pub registration_allowed: Value,
    /// Custom realm roles.
    pub roles: MinimalRoles,
    /// Custom clients with wildcard URLs.
    pub clients: Vec<ClientObject>,
    /// Users, unchanged.
    pub users: Vec<UserObject>,
}

/// Roles container of a minimized realm.
#[derive(Debug, Clone, Serialize)]
pub struct MinimalRoles {
    /// Custom realm roles.
    pub realm: Vec<RoleObject>,
}

impl MinimalRealm {
    /// IDs of the retained clients.
    #[must_use]
    pub fn client_ids(&self) -> Vec<&str> {
        self.clients.iter().map(ClientObject::client_id).collect()
    }

    /// Names of the retained realm roles.
    #[must_use]
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.realm.iter().map(RoleObject::name).collect()
    }

    /// Usernames carried through.
    #[must_use]
    pub fn usernames(&self) -> Vec<&str> {
        self.users.iter().map(UserObject::username).collect()
    }

    /// Serializes the realm as 2-space indented JSON.
    pub fn to_json(&self) -> crate::MinimizerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reduces a full realm export to its portable, custom configuration.
#[must_use]
pub fn minimize(document: RealmDocument) -> MinimalRealm {
    let RealmDocument {
        realm,
        registration_allowed,
        clients,
        realm_roles,
        users,
    } = document;

    let clients = clients
        .into_iter()
        .filter(|client| {
            let builtin = is_default_client(client.client_id());
            if builtin {
                tracing::debug!(client_id = client.client_id(), "dropping built-in client");
            }
            !builtin
        })
        .map(|mut client| {
            client.set_wildcard_urls();
            client
        })
        .collect();

    let default_roles = DefaultRealmRoles::for_realm(&realm);
    let realm_roles = realm_roles
        .into_iter()
        .filter(|role| {
            let builtin = default_roles.contains(role.name());
            if builtin {
                tracing::debug!(role = role.name(), "dropping built-in realm role");
            }
            !builtin
        })
        .collect();

    MinimalRealm {
        realm,
        enabled: true,
        ssl_required: SSL_REQUIRED_NONE.to_string(),
        registration_allowed: registration_allowed.unwrap_or(Value::Bool(false)),
        roles: MinimalRoles { realm: realm_roles },
        clients,
        users,
    }
}

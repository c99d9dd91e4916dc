//! Realm export document model.
//!
//! Entities are kept as raw JSON objects so every key the minimizer does not
//! rewrite passes through untouched and in its original position. Each
//! wrapper checks its identifying key once, when the document is parsed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{MinimizerError, MinimizerResult};

/// Keys of the realm export format used by the minimizer.
pub mod keys {
    /// Realm name.
    pub const REALM: &str = "realm";
    /// Whether self-registration is allowed.
    pub const REGISTRATION_ALLOWED: &str = "registrationAllowed";
    /// Roles container (`realm` and `client` roles).
    pub const ROLES: &str = "roles";
    /// Clients.
    pub const CLIENTS: &str = "clients";
    /// Users.
    pub const USERS: &str = "users";
    /// Client identifier.
    pub const CLIENT_ID: &str = "clientId";
    /// Role name.
    pub const NAME: &str = "name";
    /// Username.
    pub const USERNAME: &str = "username";
    /// Allowed post-login redirect URIs.
    pub const REDIRECT_URIS: &str = "redirectUris";
    /// Allowed CORS origins.
    pub const WEB_ORIGINS: &str = "webOrigins";
    /// Free-form client attributes.
    pub const ATTRIBUTES: &str = "attributes";
    /// Allowed post-logout redirect URIs (client attribute).
    pub const POST_LOGOUT_REDIRECT_URIS: &str = "post.logout.redirect.uris";
}

/// Value that allows any redirect URI or origin.
pub const WILDCARD: &str = "*";

/// A full realm export, split into the parts the minimizer works on.
#[derive(Debug, Clone)]
pub struct RealmDocument {
    /// Realm name.
    pub realm: String,
    /// `registrationAllowed` as exported, if present.
    pub registration_allowed: Option<Value>,
    /// Clients, in export order.
    pub clients: Vec<ClientObject>,
    /// Realm roles (`roles.realm`), in export order.
    pub realm_roles: Vec<RoleObject>,
    /// Users, in export order.
    pub users: Vec<UserObject>,
}

impl RealmDocument {
    /// Parses a realm export from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> MinimizerResult<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| MinimizerError::MalformedInput(format!("invalid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Builds a realm document from an already parsed JSON value.
    pub fn from_value(value: Value) -> MinimizerResult<Self> {
        let Value::Object(mut root) = value else {
            return Err(MinimizerError::MalformedInput(
                "realm export must be a JSON object".to_string(),
            ));
        };

        let realm = match root.remove(keys::REALM) {
            Some(Value::String(realm)) => realm,
            Some(_) => {
                return Err(MinimizerError::MalformedInput(
                    "'realm' must be a string".to_string(),
                ))
            }
            None => {
                return Err(MinimizerError::MalformedInput(
                    "missing 'realm' key".to_string(),
                ))
            }
        };

        let registration_allowed = root.remove(keys::REGISTRATION_ALLOWED);

        let clients = take_objects(&mut root, keys::CLIENTS)?
            .into_iter()
            .enumerate()
            .map(|(index, fields)| ClientObject::new(index, fields))
            .collect::<MinimizerResult<Vec<_>>>()?;

        let realm_roles = match root.remove(keys::ROLES) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(mut roles)) => take_objects(&mut roles, keys::REALM)?
                .into_iter()
                .enumerate()
                .map(|(index, fields)| RoleObject::new(index, fields))
                .collect::<MinimizerResult<Vec<_>>>()?,
            Some(_) => {
                return Err(MinimizerError::MalformedInput(
                    "'roles' must be an object".to_string(),
                ))
            }
        };

        let users = take_objects(&mut root, keys::USERS)?
            .into_iter()
            .enumerate()
            .map(|(index, fields)| UserObject::new(index, fields))
            .collect::<MinimizerResult<Vec<_>>>()?;

        Ok(Self {
            realm,
            registration_allowed,
            clients,
            realm_roles,
            users,
        })
    }
}

/// Removes `key` from `map` as an array of objects. Absent or null is empty.
fn take_objects(map: &mut Map<String, Value>, key: &str) -> MinimizerResult<Vec<Map<String, Value>>> {
    let items = match map.remove(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(MinimizerError::MalformedInput(format!(
                "'{key}' must be an array"
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(fields),
            _ => Err(MinimizerError::MalformedInput(format!(
                "'{key}' entry #{index} is not an object"
            ))),
        })
        .collect()
}

/// Reads the string identifying an entity, or fails with a schema error.
fn identifier(
    fields: &Map<String, Value>,
    entity: &'static str,
    index: usize,
    key: &'static str,
) -> MinimizerResult<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| MinimizerError::schema(entity, index, key))
}

/// A client of the realm export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClientObject {
    #[serde(skip)]
    client_id: String,
    fields: Map<String, Value>,
}

impl ClientObject {
    /// Wraps the client at position `index`; it must carry a `clientId`.
    pub fn new(index: usize, fields: Map<String, Value>) -> MinimizerResult<Self> {
        let client_id = identifier(&fields, "client", index, keys::CLIENT_ID)?;
        Ok(Self { client_id, fields })
    }

    /// Client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// All exported fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Opens redirect URIs, web origins and post-logout redirects to any URL.
    ///
    /// Existing values are discarded. A missing or non-object `attributes`
    /// is replaced by a fresh map.
    pub fn set_wildcard_urls(&mut self) {
        self.fields
            .insert(keys::REDIRECT_URIS.to_string(), wildcard_list());
        self.fields
            .insert(keys::WEB_ORIGINS.to_string(), wildcard_list());

        let attributes = self
            .fields
            .entry(keys::ATTRIBUTES)
            .or_insert_with(|| Value::Object(Map::new()));
        if !attributes.is_object() {
            *attributes = Value::Object(Map::new());
        }
        if let Value::Object(attributes) = attributes {
            attributes.insert(
                keys::POST_LOGOUT_REDIRECT_URIS.to_string(),
                Value::String(WILDCARD.to_string()),
            );
        }
    }
}

fn wildcard_list() -> Value {
    Value::Array(vec![Value::String(WILDCARD.to_string())])
}

/// A realm role of the realm export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RoleObject {
    #[serde(skip)]
    name: String,
    fields: Map<String, Value>,
}

impl RoleObject {
    /// Wraps the role at position `index`; it must carry a `name`.
    pub fn new(index: usize, fields: Map<String, Value>) -> MinimizerResult<Self> {
        let name = identifier(&fields, "role", index, keys::NAME)?;
        Ok(Self { name, fields })
    }

    /// Role name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All exported fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// A user of the realm export. Passed through as exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserObject {
    #[serde(skip)]
    username: String,
    fields: Map<String, Value>,
}

impl UserObject {
    /// Wraps the user at position `index`; it must carry a `username`.
    pub fn new(index: usize, fields: Map<String, Value>) -> MinimizerResult<Self> {
        let username = identifier(&fields, "user", index, keys::USERNAME)?;
        Ok(Self { username, fields })
    }

    /// Username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// All exported fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

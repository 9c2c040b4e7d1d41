use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::cmd::Cmd;

/// 3-component identity of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiId(pub [u8; 3]);

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}.{b:02x}.{c:02x}")
    }
}

/// A graphics API: a named, closed set of constructable commands.
pub trait Api: Send + Sync {
    fn name(&self) -> &'static str;

    fn id(&self) -> ApiId;

    /// Position of this API in the capture's API table.
    fn index(&self) -> u8;

    /// Constructs a zero-valued command of the named variant.
    ///
    /// The command set is closed and known at registration time; an unknown
    /// name yields `None`, never a fallback command.
    fn create_cmd(&self, name: &str) -> Option<Box<dyn Cmd>>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("api {0} is already registered")]
    DuplicateApi(ApiId),

    #[error("api {0} is not registered")]
    ApiNotFound(ApiId),

    #[error("api {api} has no command named {name:?}")]
    CommandNotFound { api: ApiId, name: String },
}

/// Builder for the one-time registry init phase.
///
/// All APIs are registered before any command executes; the built
/// [`Registry`] is immutable and safe to share across readers.
#[derive(Default)]
pub struct RegistryBuilder {
    apis: HashMap<ApiId, Box<dyn Api>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, api: Box<dyn Api>) -> Result<(), RegistryError> {
        let id = api.id();
        if self.apis.contains_key(&id) {
            return Err(RegistryError::DuplicateApi(id));
        }
        self.apis.insert(id, api);
        Ok(())
    }

    pub fn build(self) -> Registry {
        Registry { apis: self.apis }
    }
}

/// Immutable API lookup table, passed explicitly to whatever needs dispatch.
pub struct Registry {
    apis: HashMap<ApiId, Box<dyn Api>>,
}

impl Registry {
    pub fn find(&self, id: ApiId) -> Option<&dyn Api> {
        self.apis.get(&id).map(|api| api.as_ref())
    }

    /// Constructs a command by API identity and command name.
    pub fn create_cmd(&self, id: ApiId, name: &str) -> Result<Box<dyn Cmd>, RegistryError> {
        let api = self.find(id).ok_or(RegistryError::ApiNotFound(id))?;
        api.create_cmd(name)
            .ok_or_else(|| RegistryError::CommandNotFound {
                api: id,
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }
}

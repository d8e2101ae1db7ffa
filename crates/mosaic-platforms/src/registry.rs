//! Platform registry
//!
//! An explicit, immutable table from platform identifier to backend,
//! constructed once at process start and passed by reference into the
//! command handlers. There is no runtime registration: supporting a new
//! platform means a new build of the CLI.

use crate::traits::Platform;
use crate::web::WebPlatform;

/// Normalize a user-supplied platform identifier for lookup and storage
pub fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// Immutable identifier -> backend table
pub struct PlatformRegistry {
    platforms: Vec<Box<dyn Platform>>,
}

impl PlatformRegistry {
    /// Registry over an explicit set of backends.
    ///
    /// Tests inject mock backends through this; production code uses
    /// [`PlatformRegistry::builtin`].
    pub fn new(platforms: Vec<Box<dyn Platform>>) -> Self {
        Self { platforms }
    }

    /// The closed set of backends compiled into this CLI
    pub fn builtin() -> Self {
        Self::new(vec![Box::new(WebPlatform::new())])
    }

    /// Look up a backend by identifier, case-insensitively
    pub fn resolve(&self, id: &str) -> Option<&dyn Platform> {
        let id = normalize(id);
        self.platforms
            .iter()
            .find(|p| p.name() == id)
            .map(|p| p.as_ref())
    }

    /// Whether an identifier resolves to a registered backend
    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// Registered identifiers, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.platforms.iter().map(|p| p.name()).collect()
    }
}

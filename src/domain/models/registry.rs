//! Route registry records for the semantic router.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::Responder;

/// One routable specialist: a name, the description the router embeds for
/// matching, and the handler invoked when this entry wins.
///
/// The description is used only for similarity matching; it is never shown to
/// the handler. Entries are created once at workflow-setup time and read-only
/// afterwards — the registry changes only by wholesale replacement.
#[derive(Clone)]
pub struct RouteEntry {
    /// Unique name within a registry (used in logs and reports).
    pub name: String,
    /// What this specialist handles, written for embedding similarity.
    pub description: String,
    /// The responder invoked with the original input when selected.
    pub handler: Arc<dyn Responder>,
}

impl RouteEntry {
    /// Create a new route entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn Responder>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler,
        }
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

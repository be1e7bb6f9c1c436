//! Server-side script bridge: install scripts on the service and run them
//! with a JSON payload.

use crate::error::NexusResult;
use crate::remote::Script;

mod invoker;
mod registry;

pub use self::invoker::{ScriptInvoker, ScriptResponse};
pub use self::registry::ScriptRegistry;

/// Raw script operations offered by the service.
///
/// `NexusClient` implements this over HTTP; tests substitute an in-memory
/// fake.
pub trait ScriptBridge {
    fn list_scripts(&self) -> NexusResult<Vec<Script>>;

    fn script_exists(&self, name: &str) -> NexusResult<bool>;

    fn create_script(&self, script: &Script) -> NexusResult<()>;

    /// Returns `false` when there was no script to delete.
    fn delete_script(&self, name: &str) -> NexusResult<bool>;

    /// Runs `name` with `payload` as its `args` and returns the decoded
    /// response body.
    fn run_script(&self, name: &str, payload: &str) -> NexusResult<serde_json::Value>;
}

#[cfg(test)]
#[path = "tests/scripts/fake_bridge.rs"]
pub(crate) mod fake;

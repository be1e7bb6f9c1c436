use serde::Serialize;

use crate::error::{NexusError, NexusResult};

use super::ScriptBridge;

pub type ScriptResponse = serde_json::Map<String, serde_json::Value>;

/// Runs installed scripts. The payload is passed through unchanged.
pub struct ScriptInvoker<'a, B: ?Sized> {
    bridge: &'a B,
}

impl<'a, B: ScriptBridge + ?Sized> ScriptInvoker<'a, B> {
    pub fn new(bridge: &'a B) -> Self {
        Self { bridge }
    }

    /// Serializes `payload` to JSON and runs `name` with it.
    pub fn run<P: Serialize + ?Sized>(&self, name: &str, payload: &P) -> NexusResult<ScriptResponse> {
        let text = serde_json::to_string(payload)
            .map_err(|err| NexusError::InvalidArgument(format!("serialize payload: {}", err)))?;
        self.run_raw(name, &text)
    }

    /// Runs `name` with an already-encoded payload.
    pub fn run_raw(&self, name: &str, payload: &str) -> NexusResult<ScriptResponse> {
        tracing::debug!(script = name, payload, "running script");
        match self.bridge.run_script(name, payload)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(NexusError::protocol(
                name,
                "response is not a JSON object",
                other,
            )),
        }
    }
}

#[cfg(test)]
#[path = "../tests/scripts/invoker_tests.rs"]
mod tests;

use crate::error::{NexusError, NexusResult};
use crate::model::{DeletionOutcome, DeletionRequest};
use crate::scripts::{ScriptBridge, ScriptInvoker, ScriptRegistry, ScriptResponse};

use super::{AssetSource, DELETE_ASSETS_SCRIPT_BODY, DELETE_ASSETS_SCRIPT_NAME};

/// Runs the delete-assets script and decodes its doubly-encoded result.
pub struct AssetMatcher<'a, B: ?Sized> {
    bridge: &'a B,
    script_name: &'a str,
    script_body: &'a str,
}

impl<'a, B: ScriptBridge + ?Sized> AssetMatcher<'a, B> {
    pub fn new(bridge: &'a B) -> Self {
        Self::with_script(bridge, DELETE_ASSETS_SCRIPT_NAME, DELETE_ASSETS_SCRIPT_BODY)
    }

    pub fn with_script(bridge: &'a B, script_name: &'a str, script_body: &'a str) -> Self {
        Self {
            bridge,
            script_name,
            script_body,
        }
    }
}

impl<B: ScriptBridge + ?Sized> AssetSource for AssetMatcher<'_, B> {
    fn find_and_optionally_delete(&self, request: &DeletionRequest) -> NexusResult<Vec<String>> {
        // The script body changes with the client; never trust an installed copy.
        ScriptRegistry::new(self.bridge).reinstall(self.script_name, self.script_body)?;

        let payload = request.to_payload();
        tracing::info!(
            repo = request.repository(),
            pattern = request.pattern(),
            mode = %request.mode(),
            dry_run = request.dry_run(),
            "matching assets"
        );
        let response = ScriptInvoker::new(self.bridge).run(self.script_name, &payload)?;

        let outcome = decode_outcome(self.script_name, &response)?;
        if outcome.failed() {
            return Err(NexusError::api(
                outcome
                    .error
                    .unwrap_or_else(|| "delete-assets script reported failure".to_string()),
            ));
        }

        let assets = outcome.into_assets();
        tracing::debug!(count = assets.len(), dry_run = request.dry_run(), "script returned assets");
        Ok(assets)
    }
}

/// Stage 1 pulls the `result` string out of the response envelope; stage 2
/// parses that string and checks the `assets` key is present.
pub(crate) fn decode_outcome(script: &str, response: &ScriptResponse) -> NexusResult<DeletionOutcome> {
    let raw = || serde_json::Value::Object(response.clone());

    let result = match response.get("result") {
        Some(serde_json::Value::String(s)) => s,
        Some(_) => return Err(NexusError::protocol(script, "`result` is not a string", raw())),
        None => return Err(NexusError::protocol(script, "missing `result`", raw())),
    };

    let inner: serde_json::Value = serde_json::from_str(result).map_err(|err| {
        NexusError::protocol(script, format!("`result` is not valid JSON ({})", err), raw())
    })?;

    let Some(fields) = inner.as_object() else {
        return Err(NexusError::protocol(script, "`result` is not a JSON object", raw()));
    };
    if !fields.contains_key("assets") {
        return Err(NexusError::protocol(script, "missing `assets` in result", raw()));
    }

    serde_json::from_value(inner)
        .map_err(|err| NexusError::protocol(script, format!("bad result shape ({})", err), raw()))
}

#[cfg(test)]
#[path = "../tests/assets/matcher_tests.rs"]
mod tests;

use crate::error::NexusResult;
use crate::remote::Script;

use super::ScriptBridge;

/// Keeps named scripts present on the service.
pub struct ScriptRegistry<'a, B: ?Sized> {
    bridge: &'a B,
}

impl<'a, B: ScriptBridge + ?Sized> ScriptRegistry<'a, B> {
    pub fn new(bridge: &'a B) -> Self {
        Self { bridge }
    }

    /// Installs `body` under `name` unless a script of that name already
    /// exists. Existing content is left untouched. Returns whether a script
    /// was created.
    pub fn ensure_installed(&self, name: &str, body: &str) -> NexusResult<bool> {
        if self.bridge.script_exists(name)? {
            tracing::debug!(script = name, "script already installed");
            return Ok(false);
        }
        self.bridge.create_script(&Script::groovy(name, body))?;
        tracing::info!(script = name, "installed script");
        Ok(true)
    }

    /// Removes `name`; a script that is already gone counts as removed.
    pub fn force_delete(&self, name: &str) -> NexusResult<()> {
        if self.bridge.delete_script(name)? {
            tracing::debug!(script = name, "deleted script");
        } else {
            tracing::debug!(script = name, "script not present, nothing to delete");
        }
        Ok(())
    }

    /// Delete-then-create, so the service always runs `body` as given.
    pub fn reinstall(&self, name: &str, body: &str) -> NexusResult<()> {
        self.force_delete(name)?;
        self.ensure_installed(name, body)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/scripts/registry_tests.rs"]
mod tests;

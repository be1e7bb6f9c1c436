use reqwest::StatusCode;

use super::*;
use crate::scripts::ScriptBridge;

impl ScriptBridge for NexusClient {
    fn list_scripts(&self) -> NexusResult<Vec<Script>> {
        let resp = self.send(self.client.get(self.url("script")), "list scripts")?;
        let scripts: Vec<Script> = self
            .ensure_ok(resp, "list scripts")?
            .json()
            .map_err(NexusError::Transport)?;
        Ok(scripts)
    }

    fn script_exists(&self, name: &str) -> NexusResult<bool> {
        let resp = self.send(
            self.client.get(self.script_url(name, None)?),
            "get script",
        )?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.ensure_ok(resp, "get script")?;
        Ok(true)
    }

    fn create_script(&self, script: &Script) -> NexusResult<()> {
        let resp = self.send(
            self.client.post(self.url("script")).json(script),
            "create script",
        )?;
        self.ensure_ok(resp, "create script")?;
        Ok(())
    }

    fn delete_script(&self, name: &str) -> NexusResult<bool> {
        let resp = self.send(
            self.client.delete(self.script_url(name, None)?),
            "delete script",
        )?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.ensure_ok(resp, "delete script")?;
        Ok(true)
    }

    fn run_script(&self, name: &str, payload: &str) -> NexusResult<serde_json::Value> {
        let resp = self.send(
            self.client
                .post(self.script_url(name, Some("run"))?)
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(payload.to_string()),
            "run script",
        )?;
        let body = self
            .ensure_ok(resp, "run script")?
            .text()
            .map_err(NexusError::Transport)?;
        serde_json::from_str(&body).map_err(|err| {
            NexusError::protocol(name, format!("response is not JSON ({})", err), &body)
        })
    }
}

use std::io::Write;

use crate::error::NexusResult;
use crate::model::DeletionRequest;
use crate::prompt::Confirmation;

use super::AssetSource;

pub const CONFIRM_PROMPT: &str = "Press ENTER to confirm deletion";
pub const CONFIRM_DEFAULT: &str = "ctrl+c to cancel";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Previewing,
    AwaitingConfirmation,
    Deleting,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeletionReport {
    /// The preview matched nothing; no deletion was attempted.
    NoMatches,
    /// Input ended at the confirmation prompt; nothing was deleted.
    Aborted,
    /// Paths the service reports as deleted. May be empty even after a
    /// non-empty preview if the repository changed in between.
    Deleted(Vec<String>),
}

/// Preview, confirm, delete.
///
/// One run issues at most two script calls and stops at the first error.
pub struct DeletionWorkflow<'a, S: ?Sized, C: ?Sized> {
    source: &'a S,
    prompt: &'a mut C,
    state: WorkflowState,
}

impl<'a, S, C> DeletionWorkflow<'a, S, C>
where
    S: AssetSource + ?Sized,
    C: Confirmation + ?Sized,
{
    pub fn new(source: &'a S, prompt: &'a mut C) -> Self {
        Self {
            source,
            prompt,
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Runs the workflow for `request`'s repository, pattern and mode. The
    /// request's own dry-run flag is ignored: each phase sets its own.
    /// With `force` the preview and the prompt are skipped. Reports go to
    /// `out`; an empty deletion is reported on `err`.
    pub fn run(
        &mut self,
        request: &DeletionRequest,
        force: bool,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> NexusResult<DeletionReport> {
        if !force {
            self.transition(WorkflowState::Previewing);
            writeln!(
                out,
                "Retrieving assets matching {} \"{}\" from repository \"{}\"",
                request.mode(),
                request.pattern(),
                request.repository()
            )?;

            let found = self
                .source
                .find_and_optionally_delete(&request.with_dry_run(true))?;
            if found.is_empty() {
                writeln!(out, "Found 0 matching assets: aborting delete")?;
                self.transition(WorkflowState::Done);
                return Ok(DeletionReport::NoMatches);
            }

            writeln!(out, "Found {} matching assets:", found.len())?;
            for path in &found {
                writeln!(out, "{}", path)?;
            }
            out.flush()?;

            self.transition(WorkflowState::AwaitingConfirmation);
            if self
                .prompt
                .input_with_default(CONFIRM_PROMPT, CONFIRM_DEFAULT)?
                .is_none()
            {
                writeln!(out)?;
                writeln!(out, "Aborted: no assets deleted")?;
                self.transition(WorkflowState::Done);
                return Ok(DeletionReport::Aborted);
            }
        }

        self.transition(WorkflowState::Deleting);
        let deleted = self
            .source
            .find_and_optionally_delete(&request.with_dry_run(false))?;
        if deleted.is_empty() {
            writeln!(err, "Deleted 0 files")?;
        } else {
            writeln!(out, "Deleted {} matching assets:", deleted.len())?;
            for path in &deleted {
                writeln!(out, "{}", path)?;
            }
        }

        self.transition(WorkflowState::Done);
        Ok(DeletionReport::Deleted(deleted))
    }

    fn transition(&mut self, next: WorkflowState) {
        tracing::debug!(from = ?self.state, to = ?next, "deletion workflow");
        self.state = next;
    }
}

#[cfg(test)]
#[path = "../tests/assets/workflow_tests.rs"]
mod tests;

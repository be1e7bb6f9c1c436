//! Matching and deleting assets through the delete-assets script.

use crate::error::NexusResult;
use crate::model::DeletionRequest;

mod matcher;
mod workflow;

pub use self::matcher::AssetMatcher;
pub use self::workflow::{DeletionReport, DeletionWorkflow, WorkflowState};

pub const DELETE_ASSETS_SCRIPT_NAME: &str = "nexus3-cli-repository-delete-assets";

/// Groovy body installed under [`DELETE_ASSETS_SCRIPT_NAME`].
pub const DELETE_ASSETS_SCRIPT_BODY: &str = include_str!("assets/delete_assets.groovy");

/// Anything that can resolve a [`DeletionRequest`] to asset paths.
pub trait AssetSource {
    /// Returns the matched (dry run) or deleted paths in server order.
    fn find_and_optionally_delete(&self, request: &DeletionRequest) -> NexusResult<Vec<String>>;
}

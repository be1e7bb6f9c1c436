//! Client for the Nexus 3 repository manager: script bridge plumbing and
//! the asset match-and-delete workflow built on top of it.

pub mod assets;
pub mod error;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod remote;
pub mod scripts;

pub use self::error::{NexusError, NexusResult};

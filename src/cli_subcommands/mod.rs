mod repository;
mod script;

pub(crate) use self::repository::RepositoryCommands;
pub(crate) use self::script::ScriptCommands;

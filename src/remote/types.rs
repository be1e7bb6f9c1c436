//! DTOs for the script API.

pub const SCRIPT_TYPE_GROOVY: &str = "groovy";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    pub name: String,

    #[serde(rename = "type", default = "default_script_type")]
    pub kind: String,

    #[serde(default)]
    pub content: String,
}

fn default_script_type() -> String {
    SCRIPT_TYPE_GROOVY.to_string()
}

impl Script {
    pub fn groovy(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SCRIPT_TYPE_GROOVY.to_string(),
            content: content.to_string(),
        }
    }
}

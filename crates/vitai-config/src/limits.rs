use serde::{Deserialize, Serialize};

fn default_max_definitions() -> u32 {
    3
}

fn default_max_examples() -> u32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    #[serde(default = "default_max_definitions")]
    pub max_definitions: u32,
    /// Zero disables example lookups
    #[serde(default = "default_max_examples")]
    pub max_examples: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_definitions: default_max_definitions(),
            max_examples: default_max_examples(),
        }
    }
}

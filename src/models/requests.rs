use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SpellRequest {
    pub number: String,
    #[serde(default = "default_whole_qualifier")]
    pub whole_qualifier: String,
    #[serde(default = "default_fraction_qualifier")]
    pub fraction_qualifier: String,
}

fn default_whole_qualifier() -> String {
    "dollar".to_string()
}

fn default_fraction_qualifier() -> String {
    "cent".to_string()
}

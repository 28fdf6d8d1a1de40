use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SpellResponse {
    pub status: String,
    pub input: String,
    pub spelling: String,
    pub currency: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub mod requests;
pub mod responses;

pub use requests::SpellRequest;
pub use responses::{HealthResponse, SpellResponse};

//! Legacy request DTOs

use serde::Deserialize;

/// Form fields posted by the browser client
#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    pub action: Option<String>,
    /// Strategy id for `action=run`
    pub version: Option<String>,
}

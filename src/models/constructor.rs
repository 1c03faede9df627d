//! Constructor (team) model.

use serde::{Deserialize, Serialize};

/// A Formula 1 constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub constructor_id: String,
    pub name: String,
    pub nationality: String,
    pub url: String,
}

use serde::{Deserialize, Serialize};

/// An internship opportunity. Seeded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub location: String,
    pub stipend: String,
    pub duration: String,
    /// Stored as published; matching compares them case-insensitively.
    pub skills: Vec<String>,
    pub sector: String,
    pub description: String,
    pub requirements: String,
    pub logo: String,
}

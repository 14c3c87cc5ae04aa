use serde::{Deserialize, Serialize};

/// The student record used as the basis for matching.
/// Missing fields deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub education: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location: String,
}

/// Body of `PUT /api/profile`. Only the fields present are written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub education: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub location: Option<String>,
}

impl Profile {
    /// Overwrites the fields carried by `update`, leaving the rest untouched.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(education) = update.education {
            self.education = education;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(interests) = update.interests {
            self.interests = interests;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
    }
}

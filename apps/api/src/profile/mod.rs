//! Profile Store: the single student record, edited in place.

pub mod handlers;

use tokio::sync::RwLock;

use crate::models::profile::{Profile, ProfileUpdate};

pub struct ProfileStore {
    inner: RwLock<Profile>,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            inner: RwLock::new(profile),
        }
    }

    /// The demo student every fresh process starts with.
    pub fn with_demo_profile() -> Self {
        Self::new(demo_profile())
    }

    pub async fn snapshot(&self) -> Profile {
        self.inner.read().await.clone()
    }

    /// Merges `update` under the write lock and returns the resulting profile.
    pub async fn apply(&self, update: ProfileUpdate) -> Profile {
        let mut profile = self.inner.write().await;
        profile.merge(update);
        profile.clone()
    }
}

pub fn demo_profile() -> Profile {
    Profile {
        name: "Priya Sharma".to_string(),
        education: "B.Tech Computer Science (3rd Year)".to_string(),
        skills: ["Python", "React.js", "Machine Learning", "JavaScript", "HTML/CSS"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        interests: ["Artificial Intelligence", "Web Development", "Data Science"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        location: "Delhi".to_string(),
    }
}

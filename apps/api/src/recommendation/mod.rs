// Recommendation Service: rank every listing for a profile, truncate, and
// optionally jitter the displayed percentages.

pub mod handlers;
pub mod jitter;
pub mod service;

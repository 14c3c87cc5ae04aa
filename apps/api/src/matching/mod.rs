// Match Scorer: heuristic profile-vs-listing percentage plus human-readable reasons.
// Pure functions only; stores and HTTP live elsewhere.

pub mod reasons;
pub mod scorer;

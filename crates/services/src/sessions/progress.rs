use serde::Serialize;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    /// Slots resolved so far, passed or exhausted.
    pub resolved: usize,
    pub remaining: usize,
    pub score: u32,
    pub retry_count: u8,
    pub is_complete: bool,
}

/// Types for differentiating between fields
pub type UserId = u32;

/// 1-based position within the canonical leaderboard order. Absence
/// is always expressed as an [Option] around this type, never as a
/// zero value.
pub type Rank = usize;

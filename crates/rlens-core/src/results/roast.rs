use serde::Serialize;

use super::TextBlock;

/// Reply of `/roast-subreddit`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SubredditRoast {
    pub subreddit: String,
    pub roast: TextBlock,
}

/// Reply of `/roast-user`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserRoast {
    pub username: String,
    pub roast: TextBlock,
}

/// Reply of `/reddit-therapist`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TherapistAdvice {
    pub advice: TextBlock,
}

//! Records for user-activity panels: toxicity, time machine, viral prediction.

use serde::Serialize;

use super::TextBlock;

// ── Toxicity ─────────────────────────────────────────────────────────────────

/// Reply of `/toxicity-score`, flattened out of `toxicity_analysis`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ToxicityReport {
    pub username: String,
    /// Percentage as reported. Out-of-range values are kept as-is.
    pub toxicity_score: f64,
    pub toxic_comments_count: i64,
    pub total_comments: Option<i64>,
    pub top_toxic_comments: Vec<ToxicComment>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ToxicComment {
    pub body: String,
    pub subreddit: String,
    pub posted_at: String,
    pub downvotes: i64,
}

// ── Time Machine ─────────────────────────────────────────────────────────────

/// Reply of `/time-machine`, flattened out of `time_machine`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimeMachineReport {
    pub username: String,
    pub oldest_activity_date: String,
    pub oldest_post: OldestPost,
    pub oldest_comment: OldestComment,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OldestPost {
    pub title: String,
    pub subreddit: String,
    pub posted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OldestComment {
    pub body: String,
    pub subreddit: String,
    pub posted_at: String,
}

// ── Viral Post ───────────────────────────────────────────────────────────────

/// Reply of `/predict-viral-post`, flattened out of `prediction`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViralPrediction {
    /// Echoed by some service versions; otherwise the submitted username
    pub username: String,
    pub text: TextBlock,
    pub context: PredictionContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PredictionContext {
    pub top_subreddit: Option<String>,
    pub past_successful_posts: Vec<PastPost>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PastPost {
    pub title: String,
    pub upvotes: Option<i64>,
    pub posted_at: String,
}

//! Records for the `/insights` reply.

use serde::Serialize;

/// Top-level insights reply.
///
/// The service answers with only `{username, message}` when it has nothing to
/// report; in that case `message` is set and `insights` holds defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserInsights {
    pub username: String,
    pub message: Option<String>,
    pub insights: InsightsReport,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InsightsReport {
    pub activity_summary: ActivitySummary,
    pub top_interests: Vec<Interest>,
    pub potential_interests: Vec<String>,
    pub posting_patterns: PostingPatterns,
    pub subreddit_engagement: Vec<SubredditEngagement>,
    pub sentiment_analysis: SentimentSnapshot,
    pub controversial_takes: Vec<ControversialTake>,
    /// Set when the service replaced the takes list with a single message.
    pub controversial_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActivitySummary {
    pub summary: String,
    pub account_age_years: Option<f64>,
    pub total_posts: Option<i64>,
    pub total_comments: Option<i64>,
    pub total_karma: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Interest {
    pub word: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PostingPatterns {
    pub most_active_hours: Vec<HourActivity>,
    pub most_active_days: Vec<DayActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HourActivity {
    pub hour: i64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DayActivity {
    pub day: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubredditEngagement {
    pub subreddit: String,
    pub stats: EngagementStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EngagementStats {
    pub activity_count: i64,
    pub total_upvotes: i64,
    pub total_downvotes: i64,
    pub net_engagement: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentimentSnapshot {
    pub average_sentiment: Option<f64>,
    pub sentiment_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ControversialTake {
    pub id: String,
    pub body: String,
    pub subreddit: String,
    pub downvotes: i64,
}

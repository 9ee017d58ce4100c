//! Records for subreddit-level panels.

use std::collections::BTreeMap;

use serde::Serialize;

/// Reply of `/subreddit-sentiment`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SubredditSentiment {
    pub subreddit: String,
    pub sentiment: SentimentBreakdown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentimentBreakdown {
    /// Not clamped; rendering limits it to `[-1, 1]`.
    pub average_sentiment: f64,
    pub sentiment_label: Option<String>,
    pub positive_ratio: Option<f64>,
    pub negative_ratio: Option<f64>,
    pub analyzed_posts: Option<i64>,
    pub summary: String,
}

/// Reply of `/compare-subreddits`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SubredditComparison {
    pub subreddit1: String,
    pub subreddit2: String,
    /// Subreddit name to average sentiment.
    pub sentiment_comparison: BTreeMap<String, f64>,
    /// Subreddit name to average upvotes.
    pub engagement_comparison: BTreeMap<String, f64>,
}

impl SubredditComparison {
    pub fn sentiment_of(&self, subreddit: &str) -> Option<f64> {
        self.sentiment_comparison.get(subreddit).copied()
    }

    pub fn engagement_of(&self, subreddit: &str) -> Option<f64> {
        self.engagement_comparison.get(subreddit).copied()
    }
}

/// Reply of `/recommend-subreddits`. An empty list is a valid reply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubredditRecommendations {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recommendation {
    pub subreddit: String,
    pub reason: String,
}

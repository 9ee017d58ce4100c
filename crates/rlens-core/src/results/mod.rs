//! # Panel Result Records
//!
//! Typed, fully-defaulted records produced by the normalizers in
//! [`crate::normalize`]. Optional scalars that the service may omit are
//! `Option`s (rendered as `N/A`); optional collections are plain `Vec`s that
//! default to empty.

mod activity;
mod community;
mod insights;
mod roast;

pub use activity::{
    OldestComment, OldestPost, PastPost, PredictionContext, TimeMachineReport, ToxicComment,
    ToxicityReport, ViralPrediction,
};
pub use community::{
    Recommendation, SentimentBreakdown, SubredditComparison, SubredditRecommendations,
    SubredditSentiment,
};
pub use insights::{
    ActivitySummary, ControversialTake, DayActivity, EngagementStats, HourActivity, InsightsReport,
    Interest, PostingPatterns, SentimentSnapshot, SubredditEngagement, UserInsights,
};
pub use roast::{SubredditRoast, TherapistAdvice, UserRoast};

use serde::Serialize;

use crate::panel::PanelId;

// ── TextBlock ────────────────────────────────────────────────────────────────

/// Free text kept as its ordered line segments.
///
/// The text is split on `\n` only; segments are otherwise verbatim, so blank
/// lines and surrounding whitespace survive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when every segment is whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Re-join the segments with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

// ── PanelResult ──────────────────────────────────────────────────────────────

/// The normalized result of one successful panel submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", content = "result", rename_all = "kebab-case")]
pub enum PanelResult {
    SubredditRoast(SubredditRoast),
    UserRoast(UserRoast),
    Insights(UserInsights),
    Therapist(TherapistAdvice),
    Sentiment(SubredditSentiment),
    CompareSubreddits(SubredditComparison),
    ToxicityScore(ToxicityReport),
    ViralPost(ViralPrediction),
    TimeMachine(TimeMachineReport),
    RecommendSubreddits(SubredditRecommendations),
}

impl PanelResult {
    /// The panel that produces this kind of result.
    pub fn panel(&self) -> PanelId {
        match self {
            PanelResult::SubredditRoast(_) => PanelId::SubredditRoast,
            PanelResult::UserRoast(_) => PanelId::UserRoast,
            PanelResult::Insights(_) => PanelId::Insights,
            PanelResult::Therapist(_) => PanelId::Therapist,
            PanelResult::Sentiment(_) => PanelId::Sentiment,
            PanelResult::CompareSubreddits(_) => PanelId::CompareSubreddits,
            PanelResult::ToxicityScore(_) => PanelId::ToxicityScore,
            PanelResult::ViralPost(_) => PanelId::ViralPost,
            PanelResult::TimeMachine(_) => PanelId::TimeMachine,
            PanelResult::RecommendSubreddits(_) => PanelId::RecommendSubreddits,
        }
    }

    /// Fill in `username` where the reply names no user.
    ///
    /// Only the viral prediction reply omits it.
    pub fn with_requested_username(mut self, username: &str) -> Self {
        if let PanelResult::ViralPost(prediction) = &mut self {
            if prediction.username.is_empty() {
                prediction.username = username.to_string();
            }
        }
        self
    }
}

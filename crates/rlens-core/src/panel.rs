//! # Panel Identity & Display Mode
//!
//! [`PanelId`] names the ten analysis panels in tab order. [`DisplayMode`] is
//! the single shared read-only value handed to rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ── PanelId ──────────────────────────────────────────────────────────────────

/// Identity of one analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    SubredditRoast,
    UserRoast,
    Insights,
    Therapist,
    Sentiment,
    CompareSubreddits,
    ToxicityScore,
    ViralPost,
    TimeMachine,
    RecommendSubreddits,
}

impl PanelId {
    /// All panels in tab order.
    pub const ALL: [PanelId; 10] = [
        PanelId::SubredditRoast,
        PanelId::UserRoast,
        PanelId::Insights,
        PanelId::Therapist,
        PanelId::Sentiment,
        PanelId::CompareSubreddits,
        PanelId::ToxicityScore,
        PanelId::ViralPost,
        PanelId::TimeMachine,
        PanelId::RecommendSubreddits,
    ];

    /// Stable kebab-case key, also accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            PanelId::SubredditRoast => "subreddit-roast",
            PanelId::UserRoast => "user-roast",
            PanelId::Insights => "insights",
            PanelId::Therapist => "therapist",
            PanelId::Sentiment => "sentiment",
            PanelId::CompareSubreddits => "compare-subreddits",
            PanelId::ToxicityScore => "toxicity-score",
            PanelId::ViralPost => "viral-post",
            PanelId::TimeMachine => "time-machine",
            PanelId::RecommendSubreddits => "recommend-subreddits",
        }
    }

    /// Zero-based position in tab order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Panel at `index`, if any.
    pub fn from_index(index: usize) -> Option<PanelId> {
        Self::ALL.get(index).copied()
    }

    /// Next panel in tab order, wrapping around.
    pub fn next(self) -> PanelId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous panel in tab order, wrapping around.
    pub fn prev(self) -> PanelId {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PanelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| Error::UnknownPanel(s.to_string()))
    }
}

// ── DisplayMode ──────────────────────────────────────────────────────────────

/// Light or dark rendering. Dark is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Light => write!(f, "light"),
            DisplayMode::Dark => write!(f, "dark"),
        }
    }
}

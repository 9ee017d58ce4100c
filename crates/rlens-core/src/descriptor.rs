//! # Panel Descriptors
//!
//! Immutable per-panel configuration: label, endpoint, input fields and the
//! normalizer that turns the reply into a [`PanelResult`]. The generic panel
//! state machine is parameterized entirely by one of these.

use serde_json::Value;

use crate::normalize::{self, ValidationError};
use crate::panel::PanelId;
use crate::results::PanelResult;

/// Signature shared by every panel's normalizer.
pub type Normalizer = fn(&Value) -> Result<PanelResult, ValidationError>;

/// A required text input of a panel form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    /// Request body key.
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

const USERNAME: InputField = InputField {
    name: "username",
    label: "Username",
    placeholder: "Enter Reddit username",
};

const SUBREDDIT: InputField = InputField {
    name: "subreddit",
    label: "Subreddit",
    placeholder: "Enter subreddit name (e.g., memes)",
};

/// Static description of one analysis panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelDescriptor {
    pub id: PanelId,
    pub label: &'static str,
    /// One-line description shown on the landing view.
    pub blurb: &'static str,
    /// Path appended to the service base address.
    pub endpoint_path: &'static str,
    /// Inputs in form order. Every entry must be non-empty to submit.
    pub required_inputs: &'static [InputField],
    pub submit_label: &'static str,
    pub normalize: Normalizer,
}

impl PanelDescriptor {
    pub fn input(&self, name: &str) -> Option<&'static InputField> {
        self.required_inputs.iter().find(|f| f.name == name)
    }
}

/// Descriptors in tab order, indexed by [`PanelId::index`].
pub static DESCRIPTORS: [PanelDescriptor; 10] = [
    PanelDescriptor {
        id: PanelId::SubredditRoast,
        label: "Subreddit Roast",
        blurb: "Let a subreddit's quirks be gently (or not) mocked.",
        endpoint_path: "/roast-subreddit",
        required_inputs: &[SUBREDDIT],
        submit_label: "Roast Subreddit",
        normalize: normalize_subreddit_roast,
    },
    PanelDescriptor {
        id: PanelId::UserRoast,
        label: "User Roast",
        blurb: "Get a roast based on a user's post history.",
        endpoint_path: "/roast-user",
        required_inputs: &[USERNAME],
        submit_label: "Roast User",
        normalize: normalize_user_roast,
    },
    PanelDescriptor {
        id: PanelId::Insights,
        label: "User Insights",
        blurb: "Activity, interests and posting habits of a user.",
        endpoint_path: "/insights",
        required_inputs: &[USERNAME],
        submit_label: "Get Insights",
        normalize: normalize_insights,
    },
    PanelDescriptor {
        id: PanelId::Therapist,
        label: "Reddit Therapist",
        blurb: "Friendly advice drawn from a user's activity.",
        endpoint_path: "/reddit-therapist",
        required_inputs: &[USERNAME],
        submit_label: "Get Advice",
        normalize: normalize_therapist,
    },
    PanelDescriptor {
        id: PanelId::Sentiment,
        label: "Subreddit Sentiment",
        blurb: "Understand the overall mood of a subreddit.",
        endpoint_path: "/subreddit-sentiment",
        required_inputs: &[SUBREDDIT],
        submit_label: "Analyze Sentiment",
        normalize: normalize_sentiment,
    },
    PanelDescriptor {
        id: PanelId::CompareSubreddits,
        label: "Compare Subreddits",
        blurb: "Sentiment and engagement of two subreddits side by side.",
        endpoint_path: "/compare-subreddits",
        required_inputs: &[
            InputField {
                name: "subreddit1",
                label: "First subreddit",
                placeholder: "Enter first subreddit (e.g., memes)",
            },
            InputField {
                name: "subreddit2",
                label: "Second subreddit",
                placeholder: "Enter second subreddit (e.g., funny)",
            },
        ],
        submit_label: "Compare Subreddits",
        normalize: normalize_comparison,
    },
    PanelDescriptor {
        id: PanelId::ToxicityScore,
        label: "Toxicity Score",
        blurb: "Measure the toxicity of a user's comments and posts.",
        endpoint_path: "/toxicity-score",
        required_inputs: &[USERNAME],
        submit_label: "Get Toxicity Score",
        normalize: normalize_toxicity,
    },
    PanelDescriptor {
        id: PanelId::ViralPost,
        label: "Viral Post Prediction",
        blurb: "Get tips to create Reddit posts with viral potential.",
        endpoint_path: "/predict-viral-post",
        required_inputs: &[
            USERNAME,
            InputField {
                name: "topic",
                label: "Topic",
                placeholder: "Enter post topic (e.g., dank memes)",
            },
        ],
        submit_label: "Predict Viral Post",
        normalize: normalize_viral_post,
    },
    PanelDescriptor {
        id: PanelId::TimeMachine,
        label: "Time Machine",
        blurb: "Explore a user's oldest posts and comments.",
        endpoint_path: "/time-machine",
        required_inputs: &[USERNAME],
        submit_label: "Travel Back in Time",
        normalize: normalize_time_machine,
    },
    PanelDescriptor {
        id: PanelId::RecommendSubreddits,
        label: "Subreddit Recommendations",
        blurb: "Discover new subreddits based on a user's interests.",
        endpoint_path: "/recommend-subreddits",
        required_inputs: &[USERNAME],
        submit_label: "Get Recommendations",
        normalize: normalize_recommendations,
    },
];

impl PanelId {
    pub fn descriptor(self) -> &'static PanelDescriptor {
        &DESCRIPTORS[self.index()]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

fn normalize_subreddit_roast(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::subreddit_roast(raw).map(PanelResult::SubredditRoast)
}

fn normalize_user_roast(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::user_roast(raw).map(PanelResult::UserRoast)
}

fn normalize_insights(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::user_insights(raw).map(PanelResult::Insights)
}

fn normalize_therapist(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::therapist_advice(raw).map(PanelResult::Therapist)
}

fn normalize_sentiment(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::subreddit_sentiment(raw).map(PanelResult::Sentiment)
}

fn normalize_comparison(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::subreddit_comparison(raw).map(PanelResult::CompareSubreddits)
}

fn normalize_toxicity(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::toxicity_report(raw).map(PanelResult::ToxicityScore)
}

fn normalize_viral_post(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::viral_prediction(raw).map(PanelResult::ViralPost)
}

fn normalize_time_machine(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::time_machine_report(raw).map(PanelResult::TimeMachine)
}

fn normalize_recommendations(raw: &Value) -> Result<PanelResult, ValidationError> {
    normalize::subreddit_recommendations(raw).map(PanelResult::RecommendSubreddits)
}

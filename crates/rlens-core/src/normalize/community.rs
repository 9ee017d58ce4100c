use serde_json::Value;

use super::{Fields, ValidationError};
use crate::results::{
    Recommendation, SentimentBreakdown, SubredditComparison, SubredditRecommendations,
    SubredditSentiment,
};

/// `{subreddit, sentiment:{average_sentiment, ...}}`
pub fn subreddit_sentiment(raw: &Value) -> Result<SubredditSentiment, ValidationError> {
    let root = Fields::root(raw);
    let subreddit = root.require_text("subreddit")?;
    let sentiment = root.require_object("sentiment")?;

    Ok(SubredditSentiment {
        subreddit,
        sentiment: SentimentBreakdown {
            average_sentiment: sentiment.require_number("average_sentiment")?,
            sentiment_label: sentiment.text("sentiment_label"),
            positive_ratio: sentiment.number("positive_ratio"),
            negative_ratio: sentiment.number("negative_ratio"),
            analyzed_posts: sentiment.integer("analyzed_posts"),
            summary: sentiment.text_or_empty("summary"),
        },
    })
}

/// `{comparison:{subreddit1, subreddit2, sentiment_comparison?, engagement_comparison?}}`
pub fn subreddit_comparison(raw: &Value) -> Result<SubredditComparison, ValidationError> {
    let comparison = Fields::root(raw).require_object("comparison")?;

    Ok(SubredditComparison {
        subreddit1: comparison.require_text("subreddit1")?,
        subreddit2: comparison.require_text("subreddit2")?,
        sentiment_comparison: comparison.number_map("sentiment_comparison"),
        engagement_comparison: comparison.number_map("engagement_comparison"),
    })
}

/// `{recommendations:[{subreddit, reason}]}`
pub fn subreddit_recommendations(
    raw: &Value,
) -> Result<SubredditRecommendations, ValidationError> {
    let recommendations = Fields::root(raw)
        .require_items("recommendations")?
        .into_iter()
        .map(|item| Recommendation {
            subreddit: item.text_or_empty("subreddit"),
            reason: item.text_or_empty("reason"),
        })
        .collect();

    Ok(SubredditRecommendations { recommendations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_fully_populated() {
        let raw = json!({
            "subreddit": "aww",
            "sentiment": {
                "average_sentiment": 0.62,
                "sentiment_label": "Positive",
                "positive_ratio": 0.8,
                "negative_ratio": 0.05,
                "analyzed_posts": 100,
                "summary": "Mostly puppies."
            }
        });
        let result = subreddit_sentiment(&raw).unwrap();
        assert_eq!(
            result,
            SubredditSentiment {
                subreddit: "aww".into(),
                sentiment: SentimentBreakdown {
                    average_sentiment: 0.62,
                    sentiment_label: Some("Positive".into()),
                    positive_ratio: Some(0.8),
                    negative_ratio: Some(0.05),
                    analyzed_posts: Some(100),
                    summary: "Mostly puppies.".into(),
                },
            }
        );
    }

    #[test]
    fn test_sentiment_optional_fields_default() {
        let raw = json!({"subreddit": "aww", "sentiment": {"average_sentiment": -0.1}});
        let s = subreddit_sentiment(&raw).unwrap().sentiment;
        assert_eq!(s.sentiment_label, None);
        assert_eq!(s.positive_ratio, None);
        assert_eq!(s.analyzed_posts, None);
        assert_eq!(s.summary, "");
    }

    #[test]
    fn test_sentiment_requires_average() {
        let raw = json!({"subreddit": "aww", "sentiment": {"sentiment_label": "Positive"}});
        let err = subreddit_sentiment(&raw).unwrap_err();
        assert_eq!(err.path, "sentiment.average_sentiment");
    }

    #[test]
    fn test_comparison_maps() {
        let raw = json!({"comparison": {
            "subreddit1": "memes",
            "subreddit2": "funny",
            "sentiment_comparison": {"memes": 0.12345, "funny": 0.2},
            "engagement_comparison": {"memes": 1520.0}
        }});
        let c = subreddit_comparison(&raw).unwrap();
        assert_eq!(c.sentiment_of("memes"), Some(0.12345));
        assert_eq!(c.engagement_of("memes"), Some(1520.0));
        assert_eq!(c.engagement_of("funny"), None);
    }

    #[test]
    fn test_comparison_maps_default_to_empty() {
        let raw = json!({"comparison": {"subreddit1": "a", "subreddit2": "b"}});
        let c = subreddit_comparison(&raw).unwrap();
        assert!(c.sentiment_comparison.is_empty());
        assert!(c.engagement_comparison.is_empty());
    }

    #[test]
    fn test_comparison_requires_envelope() {
        let err = subreddit_comparison(&json!({"subreddit1": "a"})).unwrap_err();
        assert_eq!(err.path, "comparison");

        let err = subreddit_comparison(&json!({"comparison": {"subreddit1": "a"}})).unwrap_err();
        assert_eq!(err.path, "comparison.subreddit2");
    }

    #[test]
    fn test_recommendations_empty_list_is_valid() {
        let r = subreddit_recommendations(&json!({"recommendations": []})).unwrap();
        assert!(r.recommendations.is_empty());
    }

    #[test]
    fn test_recommendations_item_defaults() {
        let raw = json!({"recommendations": [
            {"subreddit": "rust", "reason": "You like crabs"},
            {"subreddit": "golang"},
            "garbage"
        ]});
        let r = subreddit_recommendations(&raw).unwrap();
        assert_eq!(r.recommendations.len(), 2);
        assert_eq!(r.recommendations[1].reason, "");
    }

    #[test]
    fn test_recommendations_must_be_a_list() {
        let err = subreddit_recommendations(&json!({"recommendations": {}})).unwrap_err();
        assert_eq!(err.path, "recommendations");
    }
}

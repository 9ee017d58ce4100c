use serde_json::Value;

use super::{Fields, ValidationError};
use crate::results::{
    ActivitySummary, ControversialTake, DayActivity, EngagementStats, HourActivity,
    InsightsReport, Interest, PostingPatterns, SentimentSnapshot, SubredditEngagement,
    UserInsights,
};

/// `{username, insights:{...}}` or the degenerate `{username, message}`.
pub fn user_insights(raw: &Value) -> Result<UserInsights, ValidationError> {
    let root = Fields::root(raw);
    let username = root.require_text("username")?;

    Ok(UserInsights {
        username,
        message: root.text("message"),
        insights: insights_report(&root.object("insights")),
    })
}

fn insights_report(insights: &Fields<'_>) -> InsightsReport {
    let activity = insights.object("activity_summary");
    let patterns = insights.object("posting_patterns");
    let sentiment = insights.object("sentiment_analysis");
    let (controversial_takes, controversial_note) = controversial(insights);

    InsightsReport {
        activity_summary: ActivitySummary {
            summary: activity.text_or_empty("summary"),
            account_age_years: activity.number("account_age_years"),
            total_posts: activity.integer("total_posts"),
            total_comments: activity.integer("total_comments"),
            total_karma: activity.integer("total_karma"),
        },
        top_interests: insights
            .items("top_interests")
            .into_iter()
            .map(|i| Interest {
                word: i.text_or_empty("word"),
                count: i.integer_or_zero("count"),
            })
            .collect(),
        potential_interests: insights.strings("potential_interests"),
        posting_patterns: PostingPatterns {
            most_active_hours: patterns
                .items("most_active_hours")
                .into_iter()
                .map(|h| HourActivity {
                    hour: h.integer_or_zero("hour"),
                    count: h.integer_or_zero("count"),
                })
                .collect(),
            most_active_days: patterns
                .items("most_active_days")
                .into_iter()
                .map(|d| DayActivity {
                    day: d.text_or_empty("day"),
                    count: d.integer_or_zero("count"),
                })
                .collect(),
        },
        subreddit_engagement: insights
            .items("subreddit_engagement")
            .into_iter()
            .map(|e| {
                let stats = e.object("stats");
                SubredditEngagement {
                    subreddit: e.text_or_empty("subreddit"),
                    stats: EngagementStats {
                        activity_count: stats.integer_or_zero("activity_count"),
                        total_upvotes: stats.integer_or_zero("total_upvotes"),
                        total_downvotes: stats.integer_or_zero("total_downvotes"),
                        net_engagement: stats.integer_or_zero("net_engagement"),
                    },
                }
            })
            .collect(),
        sentiment_analysis: SentimentSnapshot {
            average_sentiment: sentiment.number("average_sentiment"),
            sentiment_label: sentiment.text("sentiment_label"),
        },
        controversial_takes,
        controversial_note,
    }
}

/// The service signals "nothing found" with `[{"message": "..."}]`.
fn controversial(insights: &Fields<'_>) -> (Vec<ControversialTake>, Option<String>) {
    let items = insights.items("controversial_takes");
    if let Some(note) = items.first().and_then(|first| first.text("message")) {
        return (Vec::new(), Some(note));
    }

    let takes = items
        .into_iter()
        .map(|t| ControversialTake {
            id: t.text_or_empty("id"),
            body: t.text_or_empty("body"),
            subreddit: t.text_or_empty("subreddit"),
            downvotes: t.integer_or_zero("downvotes"),
        })
        .collect();
    (takes, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "username": "grace",
            "insights": {
                "activity_summary": {
                    "summary": "Mostly lurks.",
                    "account_age_years": 6.5,
                    "total_posts": 12,
                    "total_comments": 340,
                    "total_karma": 5021
                },
                "top_interests": [{"word": "rust", "count": 40}],
                "potential_interests": ["embedded", "compilers"],
                "posting_patterns": {
                    "most_active_hours": [{"hour": 21, "count": 30}, {"hour": 9, "count": 12}],
                    "most_active_days": [{"day": "Sunday", "count": 50}]
                },
                "subreddit_engagement": [{
                    "subreddit": "rust",
                    "stats": {"activity_count": 80, "total_upvotes": 900, "total_downvotes": 12, "net_engagement": 888}
                }],
                "sentiment_analysis": {"average_sentiment": 0.31, "sentiment_label": "Positive"},
                "controversial_takes": [{"id": "c1", "body": "tabs > spaces", "subreddit": "programming", "downvotes": 77}]
            }
        })
    }

    #[test]
    fn test_full_payload_has_no_substituted_defaults() {
        let result = user_insights(&full_payload()).unwrap();
        let i = &result.insights;
        assert_eq!(result.username, "grace");
        assert_eq!(result.message, None);
        assert_eq!(i.activity_summary.summary, "Mostly lurks.");
        assert_eq!(i.activity_summary.account_age_years, Some(6.5));
        assert_eq!(i.activity_summary.total_karma, Some(5021));
        assert_eq!(i.top_interests, vec![Interest { word: "rust".into(), count: 40 }]);
        assert_eq!(i.potential_interests, ["embedded", "compilers"]);
        assert_eq!(i.posting_patterns.most_active_hours[0], HourActivity { hour: 21, count: 30 });
        assert_eq!(i.posting_patterns.most_active_days[0].day, "Sunday");
        assert_eq!(i.subreddit_engagement[0].stats.net_engagement, 888);
        assert_eq!(i.sentiment_analysis.sentiment_label.as_deref(), Some("Positive"));
        assert_eq!(i.controversial_takes[0].downvotes, 77);
        assert_eq!(i.controversial_note, None);
    }

    #[test]
    fn test_missing_optionals_take_documented_defaults() {
        let result = user_insights(&json!({"username": "heidi", "insights": {}})).unwrap();
        assert_eq!(result.insights, InsightsReport::default());
        assert!(result.insights.top_interests.is_empty());
        assert_eq!(result.insights.activity_summary.total_posts, None);
        assert_eq!(result.insights.sentiment_analysis.average_sentiment, None);
    }

    #[test]
    fn test_degenerate_message_reply() {
        let raw = json!({"username": "ivan", "message": "No recent activity found."});
        let result = user_insights(&raw).unwrap();
        assert_eq!(result.message.as_deref(), Some("No recent activity found."));
        assert_eq!(result.insights, InsightsReport::default());
    }

    #[test]
    fn test_username_is_required() {
        let err = user_insights(&json!({"insights": {}})).unwrap_err();
        assert_eq!(err.path, "username");
    }

    #[test]
    fn test_controversial_message_becomes_note() {
        let raw = json!({"username": "judy", "insights": {
            "controversial_takes": [{"message": "No controversial comments found."}]
        }});
        let i = user_insights(&raw).unwrap().insights;
        assert!(i.controversial_takes.is_empty());
        assert_eq!(i.controversial_note.as_deref(), Some("No controversial comments found."));
    }

    #[test]
    fn test_mistyped_nested_values_fall_back() {
        let raw = json!({"username": "ken", "insights": {
            "activity_summary": {"total_posts": "many", "account_age_years": null},
            "top_interests": "rust",
            "subreddit_engagement": [{"subreddit": "rust", "stats": "n/a"}]
        }});
        let i = user_insights(&raw).unwrap().insights;
        assert_eq!(i.activity_summary.total_posts, None);
        assert_eq!(i.activity_summary.account_age_years, None);
        assert!(i.top_interests.is_empty());
        assert_eq!(i.subreddit_engagement[0].stats, EngagementStats::default());
    }
}

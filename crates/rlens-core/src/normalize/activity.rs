use serde_json::Value;

use super::{Fields, ValidationError};
use crate::results::{
    OldestComment, OldestPost, PastPost, PredictionContext, TextBlock, TimeMachineReport,
    ToxicComment, ToxicityReport, ViralPrediction,
};

/// `{username, toxicity_analysis:{toxicity_score, toxic_comments_count, ...}}`
///
/// A `toxic_comments_count` larger than `total_comments` is accepted as-is.
pub fn toxicity_report(raw: &Value) -> Result<ToxicityReport, ValidationError> {
    let root = Fields::root(raw);
    let username = root.require_text("username")?;
    let analysis = root.require_object("toxicity_analysis")?;

    Ok(ToxicityReport {
        username,
        toxicity_score: analysis.require_number("toxicity_score")?,
        toxic_comments_count: analysis.require_integer("toxic_comments_count")?,
        total_comments: analysis.integer("total_comments"),
        top_toxic_comments: analysis
            .items("top_toxic_comments")
            .into_iter()
            .map(|c| ToxicComment {
                body: c.text_or_empty("body"),
                subreddit: c.text_or_empty("subreddit"),
                posted_at: c.text_or_empty("posted_at"),
                downvotes: c.integer_or_zero("downvotes"),
            })
            .collect(),
        summary: analysis.text_or_empty("summary"),
    })
}

/// `{username, time_machine:{oldest_activity_date, oldest_post, oldest_comment, narrative?}}`
pub fn time_machine_report(raw: &Value) -> Result<TimeMachineReport, ValidationError> {
    let root = Fields::root(raw);
    let username = root.require_text("username")?;
    let tm = root.require_object("time_machine")?;
    let oldest_activity_date = tm.require_text("oldest_activity_date")?;

    let post = tm.require_object("oldest_post")?;
    let oldest_post = OldestPost {
        title: post.require_text("title")?,
        subreddit: post.require_text("subreddit")?,
        posted_at: post.require_text("posted_at")?,
    };

    let comment = tm.require_object("oldest_comment")?;
    let oldest_comment = OldestComment {
        body: comment.require_text("body")?,
        subreddit: comment.require_text("subreddit")?,
        posted_at: comment.require_text("posted_at")?,
    };

    Ok(TimeMachineReport {
        username,
        oldest_activity_date,
        oldest_post,
        oldest_comment,
        narrative: tm.text_or_empty("narrative"),
    })
}

/// `{prediction:{text, context?:{top_subreddit, past_successful_posts[], note}}}`
pub fn viral_prediction(raw: &Value) -> Result<ViralPrediction, ValidationError> {
    let root = Fields::root(raw);
    let prediction = root.require_object("prediction")?;
    let text = TextBlock::new(&prediction.require_text("text")?);

    let context = prediction.object("context");
    Ok(ViralPrediction {
        username: root.text_or_empty("username"),
        text,
        context: PredictionContext {
            top_subreddit: context.text("top_subreddit"),
            past_successful_posts: context
                .items("past_successful_posts")
                .into_iter()
                .map(|p| PastPost {
                    title: p.text_or_empty("title"),
                    upvotes: p.integer("upvotes"),
                    posted_at: p.text_or_empty("posted_at"),
                })
                .collect(),
            note: context.text("note"),
        },
    })
}

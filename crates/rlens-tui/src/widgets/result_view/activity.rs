use ratatui::text::Line;
use rlens_core::results::{TimeMachineReport, ToxicityReport, ViralPrediction};

use super::format::{clamp_toxicity, or_na, toxicity_percent, toxicity_ratio, NOT_AVAILABLE};
use super::{blank, bullet, field, gauge, heading, muted, section, text_block};
use crate::theme::{styles, Palette};

pub(super) fn toxicity(r: &ToxicityReport, p: &Palette) -> Vec<Line<'static>> {
    let score = clamp_toxicity(r.toxicity_score);
    let gauge_style = if score >= 50.0 {
        styles::status_red(p)
    } else if score >= 20.0 {
        styles::status_yellow(p)
    } else {
        styles::status_green(p)
    };

    let mut lines = vec![
        heading(format!("Toxicity Analysis for {}", r.username), p),
        blank(),
        field("Toxicity Score", toxicity_percent(r.toxicity_score), p),
        gauge(toxicity_ratio(r.toxicity_score), gauge_style),
        field(
            "Toxic Comments",
            format!(
                "{} (out of {} total comments)",
                r.toxic_comments_count,
                or_na(r.total_comments)
            ),
            p,
        ),
    ];

    if !r.summary.is_empty() {
        lines.push(field("Summary", r.summary.clone(), p));
    }

    if !r.top_toxic_comments.is_empty() {
        lines.push(blank());
        lines.push(section("Top Toxic Comments:", p));
        for c in &r.top_toxic_comments {
            lines.push(bullet(
                format!(
                    "\"{}\" (Posted in {} on {}, Downvotes: {})",
                    c.body, c.subreddit, c.posted_at, c.downvotes
                ),
                p,
            ));
        }
    }
    lines
}

pub(super) fn time_machine(r: &TimeMachineReport, p: &Palette) -> Vec<Line<'static>> {
    let date = if r.oldest_activity_date.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        r.oldest_activity_date.clone()
    };

    let mut lines = vec![
        heading(format!("Time Machine for {}", r.username), p),
        blank(),
        field("Oldest Activity Date", date, p),
        field(
            "Oldest Post",
            format!(
                "\"{}\" (Posted in {} on {})",
                r.oldest_post.title, r.oldest_post.subreddit, r.oldest_post.posted_at
            ),
            p,
        ),
        field(
            "Oldest Comment",
            format!(
                "\"{}\" (Posted in {} on {})",
                r.oldest_comment.body, r.oldest_comment.subreddit, r.oldest_comment.posted_at
            ),
            p,
        ),
    ];
    if !r.narrative.is_empty() {
        lines.push(blank());
        lines.push(field("Narrative", r.narrative.clone(), p));
    }
    lines
}

pub(super) fn viral_prediction(r: &ViralPrediction, p: &Palette) -> Vec<Line<'static>> {
    let title = if r.username.is_empty() {
        "Viral Post Prediction".to_string()
    } else {
        format!("Viral Post Prediction for {}", r.username)
    };
    let mut lines = vec![heading(title, p), blank()];
    if r.text.is_blank() {
        lines.push(muted("The service returned an empty prediction.", p));
        return lines;
    }
    lines.extend(text_block(&r.text, p));

    let context = &r.context;
    if let Some(top) = &context.top_subreddit {
        lines.push(blank());
        lines.push(field("Top Subreddit", top.clone(), p));
    }
    if !context.past_successful_posts.is_empty() {
        lines.push(blank());
        lines.push(section("Past Successful Posts:", p));
        for post in &context.past_successful_posts {
            lines.push(bullet(
                format!(
                    "\"{}\" (Upvotes: {}, Posted on {})",
                    post.title,
                    or_na(post.upvotes),
                    post.posted_at
                ),
                p,
            ));
        }
    }
    if let Some(note) = &context.note {
        lines.push(blank());
        lines.push(field("Note", note.clone(), p));
    }
    lines
}

use ratatui::text::Line;
use rlens_core::results::UserInsights;

use super::format::{active_days, active_hours, or_na, two_decimals};
use super::{blank, bullet, field, heading, muted, section};
use crate::theme::Palette;

pub(super) fn user_insights(r: &UserInsights, p: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![heading(format!("Insights for u/{}", r.username), p), blank()];

    // The service answers with a bare message when there is nothing to analyze
    if let Some(message) = &r.message {
        lines.push(muted(message.clone(), p));
        return lines;
    }

    let report = &r.insights;
    let summary = &report.activity_summary;
    if !summary.summary.is_empty() {
        lines.push(Line::from(summary.summary.clone()));
        lines.push(blank());
    }

    lines.push(section("Activity Summary:", p));
    lines.push(bullet(
        format!("Account Age: {} years", or_na(summary.account_age_years)),
        p,
    ));
    lines.push(bullet(format!("Total Posts: {}", or_na(summary.total_posts)), p));
    lines.push(bullet(
        format!("Total Comments: {}", or_na(summary.total_comments)),
        p,
    ));
    lines.push(bullet(format!("Total Karma: {}", or_na(summary.total_karma)), p));
    lines.push(blank());

    lines.push(section("Top Interests:", p));
    if report.top_interests.is_empty() {
        lines.push(muted("No significant keywords identified.", p));
    }
    for interest in &report.top_interests {
        lines.push(bullet(
            format!("{}: {} mentions", interest.word, interest.count),
            p,
        ));
    }
    lines.push(blank());

    lines.push(section("Potential Interests:", p));
    if report.potential_interests.is_empty() {
        lines.push(muted("No potential interests identified.", p));
    }
    lines.extend(report.potential_interests.iter().map(|i| bullet(i.clone(), p)));
    lines.push(blank());

    lines.push(section("Posting Patterns:", p));
    let patterns = &report.posting_patterns;
    lines.push(field(
        "Most Active Hours",
        active_hours(&patterns.most_active_hours),
        p,
    ));
    lines.push(field(
        "Most Active Days",
        active_days(&patterns.most_active_days),
        p,
    ));
    lines.push(blank());

    lines.push(section("Subreddit Engagement:", p));
    if report.subreddit_engagement.is_empty() {
        lines.push(muted("No subreddit engagement data available.", p));
    }
    for entry in &report.subreddit_engagement {
        let s = &entry.stats;
        lines.push(bullet(
            format!(
                "r/{}: {} activities, {} upvotes, {} downvotes, Net Engagement: {}",
                entry.subreddit,
                s.activity_count,
                s.total_upvotes,
                s.total_downvotes,
                s.net_engagement
            ),
            p,
        ));
    }
    lines.push(blank());

    lines.push(section("Sentiment Analysis:", p));
    let sentiment = &report.sentiment_analysis;
    lines.push(field(
        "Average Sentiment Score",
        two_decimals(sentiment.average_sentiment),
        p,
    ));
    lines.push(field(
        "Sentiment",
        or_na(sentiment.sentiment_label.as_deref()),
        p,
    ));
    lines.push(blank());

    lines.push(section("Controversial Takes:", p));
    if report.controversial_takes.is_empty() {
        let note = report
            .controversial_note
            .clone()
            .unwrap_or_else(|| "No controversial takes found.".to_string());
        lines.push(muted(note, p));
    }
    for take in &report.controversial_takes {
        lines.push(bullet(
            format!(
                "\"{}\" (r/{}, {} downvotes)",
                take.body, take.subreddit, take.downvotes
            ),
            p,
        ));
    }

    lines
}

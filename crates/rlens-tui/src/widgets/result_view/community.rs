use ratatui::text::{Line, Span};
use rlens_core::results::{SubredditComparison, SubredditRecommendations, SubredditSentiment};

use super::format::{or_na, sentiment_ratio, two_decimals};
use super::{blank, bullet, field, gauge, heading, muted, section};
use crate::theme::{styles, Palette};

pub(super) fn sentiment(r: &SubredditSentiment, p: &Palette) -> Vec<Line<'static>> {
    let s = &r.sentiment;
    let gauge_style = if s.average_sentiment > 0.05 {
        styles::status_green(p)
    } else if s.average_sentiment < -0.05 {
        styles::status_red(p)
    } else {
        styles::status_yellow(p)
    };

    let mut gauge_line = gauge(sentiment_ratio(s.average_sentiment), gauge_style);
    gauge_line
        .spans
        .insert(0, Span::styled("negative ", styles::text_muted(p)));
    gauge_line
        .spans
        .push(Span::styled(" positive", styles::text_muted(p)));

    let mut lines = vec![
        heading(format!("Sentiment for r/{}", r.subreddit), p),
        blank(),
        field("Average Sentiment", format!("{:.2}", s.average_sentiment), p),
        gauge_line,
        field("Sentiment", or_na(s.sentiment_label.as_deref()), p),
        field("Positive Ratio", two_decimals(s.positive_ratio), p),
        field("Negative Ratio", two_decimals(s.negative_ratio), p),
        field("Analyzed Posts", or_na(s.analyzed_posts), p),
    ];
    if !s.summary.is_empty() {
        lines.push(blank());
        lines.push(field("Summary", s.summary.clone(), p));
    }
    lines
}

pub(super) fn comparison(r: &SubredditComparison, p: &Palette) -> Vec<Line<'static>> {
    let names = [&r.subreddit1, &r.subreddit2];
    let mut lines = vec![
        heading("Subreddit Comparison", p),
        blank(),
        section("Sentiment Comparison:", p),
    ];
    lines.extend(names.iter().map(|name| {
        bullet(
            format!("r/{}: {}", name, two_decimals(r.sentiment_of(name))),
            p,
        )
    }));
    lines.push(blank());
    lines.push(section("Engagement Comparison:", p));
    lines.extend(names.iter().map(|name| {
        bullet(
            format!(
                "r/{}: {} average upvotes",
                name,
                two_decimals(r.engagement_of(name))
            ),
            p,
        )
    }));
    lines
}

pub(super) fn recommendations(r: &SubredditRecommendations, p: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Subreddit Recommendations", p), blank()];
    if r.recommendations.is_empty() {
        lines.push(muted("No recommendations returned.", p));
    }
    for rec in &r.recommendations {
        lines.push(bullet(
            format!("Subreddit: r/{} - Reason: {}", rec.subreddit, rec.reason),
            p,
        ));
    }
    lines
}

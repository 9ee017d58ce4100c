use ratatui::text::Line;
use rlens_core::results::{SubredditRoast, TherapistAdvice, UserRoast};

use super::{blank, heading, text_block};
use crate::theme::Palette;

pub(super) fn subreddit_roast(r: &SubredditRoast, p: &Palette) -> Vec<Line<'static>> {
    let title = if r.subreddit.is_empty() {
        "Subreddit Roast".to_string()
    } else {
        format!("Roast of r/{}", r.subreddit)
    };
    let mut lines = vec![heading(title, p), blank()];
    lines.extend(text_block(&r.roast, p));
    lines
}

pub(super) fn user_roast(r: &UserRoast, p: &Palette) -> Vec<Line<'static>> {
    let title = if r.username.is_empty() {
        "User Roast".to_string()
    } else {
        format!("Roast of u/{}", r.username)
    };
    let mut lines = vec![heading(title, p), blank()];
    lines.extend(text_block(&r.roast, p));
    lines
}

pub(super) fn therapist(r: &TherapistAdvice, p: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Therapist Advice:", p), blank()];
    lines.extend(text_block(&r.advice, p));
    lines
}

use serde_json::Value;

use super::{Fields, ValidationError};
use crate::results::{SubredditRoast, TextBlock, TherapistAdvice, UserRoast};

/// `{subreddit?, roast}`
pub fn subreddit_roast(raw: &Value) -> Result<SubredditRoast, ValidationError> {
    let root = Fields::root(raw);
    Ok(SubredditRoast {
        roast: TextBlock::new(&root.require_text("roast")?),
        subreddit: root.text_or_empty("subreddit"),
    })
}

/// `{username?, roast}`
pub fn user_roast(raw: &Value) -> Result<UserRoast, ValidationError> {
    let root = Fields::root(raw);
    Ok(UserRoast {
        roast: TextBlock::new(&root.require_text("roast")?),
        username: root.text_or_empty("username"),
    })
}

/// `{advice}`
pub fn therapist_advice(raw: &Value) -> Result<TherapistAdvice, ValidationError> {
    let root = Fields::root(raw);
    Ok(TherapistAdvice {
        advice: TextBlock::new(&root.require_text("advice")?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subreddit_roast_keeps_line_breaks() {
        let raw = json!({"subreddit": "rust", "roast": "Borrow checker fans.\n\nAll of them."});
        let roast = subreddit_roast(&raw).unwrap();
        assert_eq!(roast.subreddit, "rust");
        assert_eq!(roast.roast.lines(), ["Borrow checker fans.", "", "All of them."]);
    }

    #[test]
    fn test_subreddit_roast_name_defaults_to_empty() {
        let roast = subreddit_roast(&json!({"roast": "meh"})).unwrap();
        assert_eq!(roast.subreddit, "");
    }

    #[test]
    fn test_user_roast_requires_roast_text() {
        let err = user_roast(&json!({"username": "spez", "roast": 42})).unwrap_err();
        assert_eq!(err.path, "roast");
    }

    #[test]
    fn test_therapist_advice_lines() {
        let advice = therapist_advice(&json!({"advice": "Breathe.\nLog off."})).unwrap();
        assert_eq!(advice.advice.lines(), ["Breathe.", "Log off."]);
    }

    #[test]
    fn test_therapist_missing_advice_fails() {
        let err = therapist_advice(&json!({"detail": "nope"})).unwrap_err();
        assert_eq!(err.path, "advice");
    }
}

//! Presentation helpers for rendering posts. Not part of the data
//! contract: the raw record keeps the nanosecond timestamp and the
//! optional author untouched.

use chrono::{DateTime, Local, TimeZone, Utc};

use quill_types::models::Post;

/// "By <author>" for signed posts, or the anonymous label.
pub fn byline(post: &Post) -> String {
    match &post.author {
        Some(author) => format!("By {}", author),
        None => "Anonymous".to_string(),
    }
}

/// The creation instant in the local timezone, for human-readable display.
pub fn created_at(post: &Post) -> DateTime<Local> {
    let secs = post.timestamp.div_euclid(1_000_000_000);
    let nanos = post.timestamp.rem_euclid(1_000_000_000) as u32;
    Utc.timestamp_opt(secs, nanos)
        .single()
        .unwrap_or_default()
        .with_timezone(&Local)
}

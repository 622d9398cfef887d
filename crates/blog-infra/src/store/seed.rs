//! Posts present when the server starts.

use blog_core::domain::Post;
use chrono::{DateTime, TimeZone, Utc};

/// The two seed posts, oldest first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        seed(
            "1",
            "Welcome to Neo-Brutal Blog",
            "This is the first post in our brutally honest blog. Clean, functional, and to the point.",
            "Admin",
            day(2024, 1, 1),
        ),
        seed(
            "2",
            "Building with Purpose",
            "Every line of code should serve a purpose. No fluff, no unnecessary complexity. Just pure functionality wrapped in bold design.",
            "Developer",
            day(2024, 1, 2),
        ),
    ]
}

fn seed(id: &str, title: &str, content: &str, author: &str, at: DateTime<Utc>) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        created_at: at,
        updated_at: at,
    }
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

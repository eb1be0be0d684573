//! Reply texts. Everything the bot says is built here.
//!
//! Replies are sent with `parse_mode=HTML`, so store-provided text is escaped
//! before it is interpolated.

use crate::domain::{Post, Profile};
use chrono::{DateTime, Utc};

pub const PLATFORM_NAME: &str = "PostBoard";

/// Body snippet length in characters before an ellipsis is appended.
pub const SNIPPET_CHARS: usize = 100;

pub const NO_POSTS: &str = "📭 No published posts yet. Check back later!";

pub const APOLOGY: &str = "❌ Sorry, something went wrong. Please try again later.";

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Type /help to see available commands.";

pub fn welcome(chat_id: i64) -> String {
    format!(
        "👋 <b>Welcome to {PLATFORM_NAME}!</b>\n\n\
         I can show you the latest posts and your profile stats.\n\n\
         Your Telegram ID: <code>{chat_id}</code>\n\
         Add this ID in your profile settings on the website to link your account.\n\n\
         Type /help to see all commands."
    )
}

pub fn help() -> String {
    format!(
        "🤖 <b>{PLATFORM_NAME} Bot</b>\n\n\
         {PLATFORM_NAME} is a small community for sharing posts.\n\n\
         <b>Commands:</b>\n\
         /start - Get your Telegram ID for account linking\n\
         /posts - Show the 5 latest published posts\n\
         /myprofile - Show your profile and stats\n\
         /help - Show this message"
    )
}

pub fn not_linked(telegram_id: &str) -> String {
    format!(
        "🔗 Your Telegram account is not linked to a {PLATFORM_NAME} profile yet.\n\n\
         To link it, add this Telegram ID in your profile settings on the website:\n\
         <code>{telegram_id}</code>"
    )
}

/// Numbered list of posts. Caller handles the empty case.
pub fn post_list(posts: &[Post]) -> String {
    let mut out = String::from("📰 <b>Latest Posts</b>\n");
    for (i, post) in posts.iter().enumerate() {
        let author = post.author_username.as_deref().unwrap_or("Unknown");
        out.push_str(&format!(
            "\n{}. <b>{}</b>\n👤 By: {}\n📝 {}\n❤️ {} likes\n",
            i + 1,
            escape_html(&post.title),
            escape_html(author),
            escape_html(&snippet(&post.content)),
            post.likes_count
        ));
    }
    out
}

pub fn profile_summary(profile: &Profile, post_count: usize, total_likes: i64) -> String {
    let full_name = profile.full_name.as_deref().unwrap_or("Not set");
    format!(
        "👤 <b>Your Profile</b>\n\n\
         Username: {}\n\
         Full Name: {}\n\
         📝 Posts: {post_count}\n\
         ❤️ Total Likes: {total_likes}\n\
         📅 Joined: {}",
        escape_html(&profile.username),
        escape_html(full_name),
        join_date(&profile.created_at)
    )
}

/// First `SNIPPET_CHARS` characters, with "..." appended when anything was cut.
pub fn snippet(body: &str) -> String {
    match body.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

fn join_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%-m/%-d/%Y").to_string()
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostStatus;
    use chrono::TimeZone;

    fn post(title: &str, content: &str, author: Option<&str>, likes: i64) -> Post {
        Post {
            id: "p1".into(),
            title: title.into(),
            content: content.into(),
            likes_count: likes,
            status: PostStatus::Published,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            author_id: "u1".into(),
            author_username: author.map(String::from),
        }
    }

    #[test]
    fn snippet_keeps_exactly_100_chars() {
        let body = "a".repeat(100);
        assert_eq!(snippet(&body), body);
    }

    #[test]
    fn snippet_truncates_101_chars() {
        let body = "b".repeat(101);
        assert_eq!(snippet(&body), format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let body = "é".repeat(101);
        let cut = snippet(&body);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("é..."));
    }

    #[test]
    fn post_list_numbers_entries_and_falls_back_to_unknown_author() {
        let text = post_list(&[
            post("First", "hello", Some("alice"), 3),
            post("Second", "world", None, 0),
        ]);
        assert!(text.contains("1. <b>First</b>"));
        assert!(text.contains("👤 By: alice"));
        assert!(text.contains("2. <b>Second</b>"));
        assert!(text.contains("👤 By: Unknown"));
        assert!(text.contains("❤️ 3 likes"));
        assert!(text.contains("❤️ 0 likes"));
    }

    #[test]
    fn post_list_escapes_markup_from_store() {
        let text = post_list(&[post("<script>", "a & b", Some("x>y"), 1)]);
        assert!(text.contains("<b>&lt;script&gt;</b>"));
        assert!(text.contains("a &amp; b"));
        assert!(text.contains("By: x&gt;y"));
    }

    #[test]
    fn profile_summary_falls_back_when_name_missing() {
        let profile = Profile {
            id: "u1".into(),
            telegram_id: Some("42".into()),
            username: "alice".into(),
            full_name: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
        };
        let text = profile_summary(&profile, 0, 0);
        assert!(text.contains("Username: alice"));
        assert!(text.contains("Full Name: Not set"));
        assert!(text.contains("Posts: 0"));
        assert!(text.contains("Total Likes: 0"));
        assert!(text.contains("Joined: 1/15/2024"));
    }

    #[test]
    fn welcome_and_not_linked_echo_the_id() {
        assert!(welcome(123456).contains("<code>123456</code>"));
        assert!(not_linked("987").contains("<code>987</code>"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = help();
        for cmd in ["/start", "/posts", "/myprofile", "/help"] {
            assert!(text.contains(cmd), "help text is missing {cmd}");
        }
    }
}

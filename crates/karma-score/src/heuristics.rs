//! Lexical heuristics for classifying review activity.

/// Glyphs treated as an expression of approval.
pub const POSITIVE_EMOJIS: [&str; 10] =
    ["👍", "🔥", "😄", "🎉", "🚀", "💯", "✅", "⭐", "❤️", "👏"];

const BOT_MARKERS: [&str; 5] = ["[bot]", "-bot", "bot-", "github-actions[bot]", "dependabot[bot]"];

const LOW_SIGNAL_PHRASES: [&str; 4] = ["lgtm", "looks good", "good", "nice"];

pub fn is_bot(username: &str) -> bool {
    let lower = username.to_lowercase();
    BOT_MARKERS.iter().any(|marker| lower.contains(marker))
}

pub fn has_positive_emoji(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    POSITIVE_EMOJIS.iter().any(|emoji| text.contains(emoji))
}

/// A comment is constructive when more than 10 words remain after the
/// low-signal phrases and approval emoji are stripped out. Stripping is
/// plain substring removal, not tokenization: four passes per phrase
/// (space-padded, trailing-space, leading-space, bare) in a fixed order.
/// The pass order is load-bearing for which word boundaries survive.
pub fn is_constructive_comment(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let mut text = text.to_lowercase();
    for &phrase in LOW_SIGNAL_PHRASES.iter().chain(POSITIVE_EMOJIS.iter()) {
        text = text.replace(&format!(" {} ", phrase), " ");
        text = text.replace(&format!("{} ", phrase), " ");
        text = text.replace(&format!(" {}", phrase), " ");
        text = text.replace(phrase, "");
    }

    text.split_whitespace().count() > 10
}

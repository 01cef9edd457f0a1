//! Plain-text rendering of the service's HTML descriptions.

use std::sync::OnceLock;

static LINE_BREAK_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();
static INLINE_SPACE_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&rsquo;", "'"),
    ("&lsquo;", "'"),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&mdash;", "-"),
    ("&ndash;", "-"),
    ("&hellip;", "..."),
    // last, so "&amp;lt;" stays "&lt;"
    ("&amp;", "&"),
];

/// Drop markup, keep paragraph and line breaks.
pub fn strip_html(input: &str) -> String {
    let breaks = LINE_BREAK_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"(?i)<br\s*/?>|</p\s*>|</li\s*>|</h[1-6]\s*>")
            .expect("LINE_BREAK_REGEX pattern is invalid")
    });
    let tags = TAG_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"<[^>]*>").expect("TAG_REGEX pattern is invalid")
    });
    let spaces = INLINE_SPACE_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"[ \t\r]+").expect("INLINE_SPACE_REGEX pattern is invalid")
    });

    let mut text = breaks.replace_all(input, "\n").to_string();
    text = tags.replace_all(&text, "").to_string();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let line = spaces.replace_all(line, " ").trim().to_string();
        let previous_blank = lines.last().is_some_and(|l| l.is_empty());
        if line.is_empty() && (lines.is_empty() || previous_blank) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

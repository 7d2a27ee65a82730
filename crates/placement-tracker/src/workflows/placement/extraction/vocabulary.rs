/// Fixed vocabulary of skill tokens recognized during extraction, scanned in
/// this order. Matching is by substring over lower-cased text, so short
/// tokens inherit the matcher's documented looseness.
pub(crate) const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "node.js",
    "mongodb",
    "mysql",
    "postgresql",
    "spring",
    "spring boot",
    "django",
    "flask",
    "html",
    "css",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "machine learning",
    "data science",
    "tableau",
    "power bi",
    "c++",
    "c#",
    ".net",
    "php",
    "ruby",
    "go",
    "rust",
];

/// Anchor keywords that open a skill-scan window.
pub(crate) const SECTION_ANCHORS: &[&str] =
    &["skills", "technical skills", "requirements", "technologies", "tools"];

/// Phrases that flag a hackathon-participation requirement.
pub(crate) const HACKATHON_INDICATORS: &[&str] =
    &["hackathon", "coding competition", "programming contest"];

/// Words that promote every discovered skill to must-have.
pub(crate) const REQUIREMENT_MARKERS: &[&str] = &["must", "required"];

/// Bytes scanned forward from each anchor occurrence.
const SECTION_WINDOW: usize = 200;

/// Scan the fixed vocabulary over the anchor windows of `text` (already
/// lower-cased), returning title-cased tokens deduplicated by first
/// occurrence, window-major then vocabulary order.
///
/// If no anchor keyword occurs, the window is the whole text. If anchors
/// exist but none of their windows contains a vocabulary token, the scan
/// also falls back to the whole text: a document mentioning its stack
/// before a trailing "... skills." would otherwise extract nothing.
pub(crate) fn scan_skills(text: &str) -> Vec<String> {
    let mut found = scan_windows(&section_windows(text));
    if found.is_empty() {
        found = scan_windows(&[text]);
    }
    found.into_iter().map(title_case).collect()
}

fn section_windows(text: &str) -> Vec<&str> {
    let mut windows = Vec::new();
    for anchor in SECTION_ANCHORS {
        if let Some(start) = text.find(anchor) {
            let end = clamp_to_char_boundary(text, start + SECTION_WINDOW);
            windows.push(&text[start..end]);
        }
    }
    if windows.is_empty() {
        windows.push(text);
    }
    windows
}

fn scan_windows(windows: &[&str]) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for window in windows {
        for token in SKILL_VOCABULARY {
            if window.contains(token) && !found.contains(token) {
                found.push(*token);
            }
        }
    }
    found
}

fn clamp_to_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Title-case a vocabulary token: the first letter of every alphabetic run
/// is upper-cased ("node.js" becomes "Node.Js", "machine learning" becomes
/// "Machine Learning").
pub(crate) fn title_case(token: &str) -> String {
    let mut output = String::with_capacity(token.len());
    let mut at_word_start = true;
    for ch in token.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(ch);
            at_word_start = true;
        }
    }
    output
}

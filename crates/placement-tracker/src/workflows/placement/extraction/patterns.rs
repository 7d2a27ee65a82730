use regex::Regex;

/// Ordered regex cascade for one numeric criteria field, paired with its
/// parser. The list is data so the priority order can be audited and tested
/// in isolation: the first pattern whose capture matches AND parses wins; a
/// capture that fails to parse is swallowed and the next pattern is tried.
pub(crate) struct PatternCascade<T> {
    patterns: Vec<Regex>,
    parse: fn(&str) -> Option<T>,
}

impl<T> PatternCascade<T> {
    fn new(sources: &[&str], parse: fn(&str) -> Option<T>) -> Self {
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source).expect("static criteria pattern compiles"))
            .collect();
        Self { patterns, parse }
    }

    pub(crate) fn first_match(&self, text: &str) -> Option<T> {
        for pattern in &self.patterns {
            let Some(captures) = pattern.captures(text) else {
                continue;
            };
            let Some(group) = captures.get(1) else {
                continue;
            };
            if let Some(value) = (self.parse)(group.as_str()) {
                return Some(value);
            }
        }
        None
    }
}

/// Input text is lower-cased before matching, so every pattern is written
/// lower-case. Each count pattern binds the number to its own noun; a bare
/// `(\d+).*?internship` would happily capture an unrelated figure earlier in
/// the sentence (a CGPA, a year) as the internship count.
pub(crate) fn cgpa_cascade() -> PatternCascade<f64> {
    PatternCascade::new(
        &[
            r"cgpa\s*(?:of|is|above|at least|minimum(?:\s+of)?|>=?)?\s*[:\-]?\s*(\d+(?:\.\d+)?)",
            r"gpa\s*(?:of|is|above|at least)?\s*[:\-]?\s*(\d+(?:\.\d+)?)",
            r"(\d+(?:\.\d+)?)\s*\+?\s*cgpa",
        ],
        parse_decimal,
    )
}

pub(crate) fn internship_cascade() -> PatternCascade<u32> {
    PatternCascade::new(
        &[
            r"at least\s+(\d+)\s+internship",
            r"minimum\s+(?:of\s+)?(\d+)\s+internship",
            r"(\d+)\s*\+?\s*internships?",
            r"internships?\s*[:\-]?\s*(\d+)",
        ],
        parse_count,
    )
}

pub(crate) fn project_cascade() -> PatternCascade<u32> {
    PatternCascade::new(
        &[
            r"at least\s+(\d+)\s+project",
            r"minimum\s+(?:of\s+)?(\d+)\s+project",
            r"(\d+)\s*\+?\s*projects?",
            r"projects?\s*[:\-]?\s*(\d+)",
        ],
        parse_count,
    )
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.parse().ok()
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

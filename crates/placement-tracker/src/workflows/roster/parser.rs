use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::workflows::placement::domain::{Candidate, StudentId};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        candidates.push(record?.into_candidate());
    }

    Ok(candidates)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Student ID")]
    student_id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "CGPA", default, deserialize_with = "lenient_number")]
    cgpa: Option<f64>,
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(rename = "Internships", default, deserialize_with = "lenient_number")]
    internships: Option<u32>,
    #[serde(rename = "Projects", default, deserialize_with = "lenient_number")]
    projects: Option<u32>,
    #[serde(rename = "Hackathons", default, deserialize_with = "lenient_number")]
    hackathons: Option<u32>,
    #[serde(rename = "Email", default)]
    email: String,
}

impl RosterRow {
    fn into_candidate(self) -> Candidate {
        Candidate {
            student_id: StudentId(self.student_id),
            name: self.name,
            cgpa: self.cgpa.unwrap_or(0.0),
            skills: split_skills(&self.skills),
            internships: self.internships.unwrap_or(0),
            projects: self.projects.unwrap_or(0),
            hackathons: self.hackathons.unwrap_or(0),
            email: self.email,
        }
    }
}

/// Skills column holds a semicolon-separated list.
fn split_skills(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Empty or malformed numeric cells fall back to the candidate defaults
/// rather than failing the whole import.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

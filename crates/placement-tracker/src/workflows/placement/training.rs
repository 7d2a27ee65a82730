use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{GapRecord, StudentId};

/// Gap tags naming a criteria category rather than a skill. These never
/// reach the training planner; only skill-name gaps do.
pub const CATEGORY_GAP_TAGS: [&str; 4] = ["cgpa", "internships", "projects", "hackathons"];

/// Study-plan generation lives outside the core (the production
/// implementation is retrieval-augmented); the core only asks per skill.
pub trait TrainingPlanner: Send + Sync {
    fn plan(&self, skill: &str) -> Result<String, TrainingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("training plan generation failed: {0}")]
    Generation(String),
}

/// Per-candidate study plan assembled from the planner's per-skill output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub student_id: StudentId,
    pub plan: String,
    pub skill_gaps: Vec<String>,
}

/// Build one training plan per gap record. Planner output is cached per
/// distinct lower-cased skill across candidates within the run; a planner
/// failure degrades that skill's section to a fixed notice and is not
/// cached, so a later candidate may still get a real plan for it.
pub fn generate_training_plans<P>(planner: &P, gap_records: &[GapRecord]) -> Vec<TrainingPlan>
where
    P: TrainingPlanner + ?Sized,
{
    let mut cache: HashMap<String, String> = HashMap::new();

    gap_records
        .iter()
        .map(|record| {
            let skill_gaps: Vec<String> = record
                .gaps
                .iter()
                .filter(|gap| !CATEGORY_GAP_TAGS.contains(&gap.to_lowercase().as_str()))
                .cloned()
                .collect();

            let mut sections = Vec::with_capacity(skill_gaps.len());
            for skill in &skill_gaps {
                let key = skill.to_lowercase();
                let section = match cache.get(&key) {
                    Some(cached) => cached.clone(),
                    None => match planner.plan(skill) {
                        Ok(plan) => {
                            cache.insert(key, plan.clone());
                            plan
                        }
                        Err(error) => {
                            warn!(%skill, %error, "training plan generation failed");
                            "Training suggestion unavailable.".to_string()
                        }
                    },
                };
                sections.push(format!("{skill}:\n{section}"));
            }

            let plan = if sections.is_empty() {
                "No skill gaps requiring training.".to_string()
            } else {
                sections.join("\n\n")
            };

            TrainingPlan {
                student_id: record.student_id.clone(),
                plan,
                skill_gaps,
            }
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Task the candidates are being ranked against
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TaskDescriptor {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "hourlyRate", default)]
    #[validate(range(min = 0.0))]
    pub hourly_rate: Option<f64>,
    #[serde(rename = "estimatedHours", default)]
    #[validate(range(min = 0.0))]
    pub estimated_hours: Option<f64>,
    #[serde(rename = "requiredSkills", default)]
    #[validate(custom(function = "validate_skill_tags"))]
    pub required_skills: Vec<String>,
}

/// Worker record supplied by the caller for one ranking request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateWorker {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_skill_tags"))]
    pub skills: Vec<String>,
    #[serde(rename = "completedTasks", default)]
    pub completed_tasks: u32,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool { true }

/// Skill tags must carry text; a blank tag would substring-match everything.
fn validate_skill_tags(skills: &[String]) -> Result<(), ValidationError> {
    if skills.iter().any(|skill| skill.trim().is_empty()) {
        let mut err = ValidationError::new("blank_skill");
        err.message = Some("skill tags must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Candidate annotated with its compatibility breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    #[serde(rename = "completedTasks")]
    pub completed_tasks: u32,
    pub rating: f64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "skillScore")]
    pub skill_score: f64,
    #[serde(rename = "experienceScore")]
    pub experience_score: f64,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
}

impl RankedCandidate {
    /// Number of candidate skills that matched at least one required skill
    pub fn skill_matches(&self) -> usize {
        self.matching_skills.len()
    }

    /// Skills that did not match any requirement, in the candidate's order
    pub fn other_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|skill| !self.matching_skills.contains(skill))
            .map(String::as_str)
            .collect()
    }
}

/// Composite score weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.6,
            experience: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_worker() -> CandidateWorker {
        CandidateWorker {
            id: "w1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            skills: vec!["Python".to_string()],
            completed_tasks: 5,
            rating: 4.5,
            is_active: true,
        }
    }

    #[test]
    fn test_worker_deserialize_defaults() {
        let worker: CandidateWorker = serde_json::from_str(
            r#"{"id": "w1", "name": "Alice", "email": "alice@example.com"}"#,
        )
        .unwrap();

        assert!(worker.is_active);
        assert!(worker.skills.is_empty());
        assert_eq!(worker.completed_tasks, 0);
        assert_eq!(worker.rating, 0.0);
    }

    #[test]
    fn test_worker_validation() {
        assert!(create_worker().validate().is_ok());

        let mut worker = create_worker();
        worker.rating = 5.5;
        assert!(worker.validate().is_err());

        let mut worker = create_worker();
        worker.email = "not-an-email".to_string();
        assert!(worker.validate().is_err());

        let mut worker = create_worker();
        worker.skills.push("  ".to_string());
        assert!(worker.validate().is_err());
    }

    #[test]
    fn test_task_rejects_negative_rate() {
        let task = TaskDescriptor {
            hourly_rate: Some(-1.0),
            ..Default::default()
        };
        assert!(task.validate().is_err());
        assert!(TaskDescriptor::default().validate().is_ok());
    }

    #[test]
    fn test_other_skills_preserves_order() {
        let ranked = RankedCandidate {
            id: "w1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            skills: vec!["SQL".to_string(), "Python".to_string(), "Go".to_string()],
            completed_tasks: 0,
            rating: 0.0,
            is_active: true,
            matching_skills: vec!["Python".to_string()],
            skill_score: 0.0,
            experience_score: 0.0,
            compatibility_score: 0.0,
        };

        assert_eq!(ranked.skill_matches(), 1);
        assert_eq!(ranked.other_skills(), vec!["SQL", "Go"]);
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.skill, 0.6);
        assert_eq!(weights.experience, 0.4);
    }
}

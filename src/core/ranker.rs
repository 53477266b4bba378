use crate::models::{CandidateWorker, RankedCandidate, ScoringWeights, TaskDescriptor};
use crate::core::{filters::is_eligible, scoring::score_candidate};

/// Result of ranking a candidate pool
#[derive(Debug, Clone)]
pub struct RankResult {
    pub candidates: Vec<RankedCandidate>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Ranks candidate workers for a task
///
/// # Pipeline Stages
/// 1. Eligibility filter (inactive workers are dropped)
/// 2. Fuzzy skill matching
/// 3. Skill, experience and composite scoring
/// 4. Stable sort by compatibility, best first
///
/// Ranking is pure: inputs are borrowed and never modified, and identical
/// inputs always produce identical output.
#[derive(Debug, Clone)]
pub struct CompatibilityRanker {
    weights: ScoringWeights,
}

impl CompatibilityRanker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Rank every eligible candidate for the task
    ///
    /// Candidates with equal compatibility keep their input order.
    pub fn rank(
        &self,
        task: &TaskDescriptor,
        candidates: &[CandidateWorker],
    ) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .filter(|candidate| is_eligible(candidate))
            .map(|candidate| score_candidate(task, candidate, &self.weights))
            .collect();

        // sort_by is stable; total_cmp keeps the order total even for NaN
        ranked.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));

        ranked
    }

    /// Rank and keep at most `limit` candidates
    pub fn rank_top(
        &self,
        task: &TaskDescriptor,
        candidates: &[CandidateWorker],
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let mut ranked = self.rank(task, candidates);
        let eligible_candidates = ranked.len();

        ranked.truncate(limit);

        tracing::debug!(
            total_candidates,
            eligible_candidates,
            returned = ranked.len(),
            required_skills = task.required_skills.len(),
            "ranked candidate pool"
        );

        RankResult {
            candidates: ranked,
            total_candidates,
            eligible_candidates,
        }
    }

    /// Highest-ranked eligible candidate, if any
    pub fn best_match(
        &self,
        task: &TaskDescriptor,
        candidates: &[CandidateWorker],
    ) -> Option<RankedCandidate> {
        self.rank(task, candidates).into_iter().next()
    }
}

impl Default for CompatibilityRanker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candidate(
        id: &str,
        skills: &[&str],
        completed_tasks: u32,
        rating: f64,
        is_active: bool,
    ) -> CandidateWorker {
        CandidateWorker {
            id: id.to_string(),
            name: format!("Worker {}", id),
            email: format!("worker{}@example.com", id),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            completed_tasks,
            rating,
            is_active,
        }
    }

    fn create_task(required: &[&str]) -> TaskDescriptor {
        TaskDescriptor {
            title: "Annotate transcripts".to_string(),
            category: Some("data".to_string()),
            hourly_rate: Some(20.0),
            estimated_hours: Some(10.0),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_rank_basic() {
        let ranker = CompatibilityRanker::with_default_weights();
        let task = create_task(&["python", "nlp"]);

        let candidates = vec![
            create_candidate("1", &["Python"], 5, 4.5, true),        // 52
            create_candidate("2", &["Python", "NLP"], 5, 4.5, true), // 82
            create_candidate("3", &["Python", "NLP"], 30, 5.0, false),
        ];

        let ranked = ranker.rank(&task, &candidates);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, "2");
        assert_eq!(ranked[1].id, "1");
        assert!((ranked[0].compatibility_score - 82.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranker = CompatibilityRanker::with_default_weights();
        let task = create_task(&[]);

        let candidates = vec![
            create_candidate("b", &[], 3, 3.0, true),
            create_candidate("a", &[], 3, 3.0, true),
            create_candidate("c", &[], 3, 3.0, true),
        ];

        let ids: Vec<String> = ranker
            .rank(&task, &candidates)
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_top_respects_limit() {
        let ranker = CompatibilityRanker::with_default_weights();
        let task = create_task(&["sql"]);

        let candidates: Vec<CandidateWorker> = (0..20)
            .map(|i| create_candidate(&i.to_string(), &["SQL"], i, 4.0, i % 4 != 0))
            .collect();

        let result = ranker.rank_top(&task, &candidates, 5);

        assert_eq!(result.candidates.len(), 5);
        assert_eq!(result.total_candidates, 20);
        assert_eq!(result.eligible_candidates, 15);
    }

    #[test]
    fn test_best_match() {
        let ranker = CompatibilityRanker::default();
        let task = create_task(&["rust"]);

        let candidates = vec![
            create_candidate("1", &["Go"], 40, 5.0, true),
            create_candidate("2", &["Rust"], 40, 5.0, true),
        ];

        let best = ranker.best_match(&task, &candidates).unwrap();
        assert_eq!(best.id, "2");

        let inactive = vec![create_candidate("3", &["Rust"], 40, 5.0, false)];
        assert!(ranker.best_match(&task, &inactive).is_none());
    }

    #[test]
    fn test_rank_does_not_modify_input() {
        let ranker = CompatibilityRanker::default();
        let task = create_task(&["python"]);
        let candidates = vec![
            create_candidate("1", &["Python"], 1, 1.0, true),
            create_candidate("2", &["Python"], 9, 5.0, true),
        ];
        let snapshot = candidates.clone();

        let _ = ranker.rank(&task, &candidates);

        assert_eq!(candidates, snapshot);
    }
}

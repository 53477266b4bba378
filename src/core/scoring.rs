use crate::models::{CandidateWorker, RankedCandidate, ScoringWeights, TaskDescriptor};
use crate::core::filters::matching_skills;

/// Skill score given to every candidate when the task lists no requirements
pub const NEUTRAL_SKILL_SCORE: f64 = 50.0;

/// Experience points per completed task
pub const POINTS_PER_COMPLETED_TASK: f64 = 2.0;

/// Ceiling on the completed-task contribution (reached at 25 tasks)
pub const COMPLETED_TASKS_CAP: f64 = 50.0;

/// Experience points per rating star
pub const POINTS_PER_RATING_STAR: f64 = 10.0;

/// Score a single candidate against a task
///
/// Scoring formula:
/// skill_score      = matches / |required| * 100   (50 when nothing is required)
/// experience_score = min(completed * 2, 50) + rating * 10
/// compatibility    = skill_score * 0.6 + experience_score * 0.4
pub fn score_candidate(
    task: &TaskDescriptor,
    candidate: &CandidateWorker,
    weights: &ScoringWeights,
) -> RankedCandidate {
    let matching = matching_skills(&candidate.skills, &task.required_skills);
    let skill = skill_score(matching.len(), task.required_skills.len());
    let experience = experience_score(candidate.completed_tasks, candidate.rating);

    RankedCandidate {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        email: candidate.email.clone(),
        skills: candidate.skills.clone(),
        completed_tasks: candidate.completed_tasks,
        rating: candidate.rating,
        is_active: candidate.is_active,
        matching_skills: matching,
        skill_score: skill,
        experience_score: experience,
        compatibility_score: compatibility_score(skill, experience, weights),
    }
}

/// Calculate skill score (0-100)
///
/// The denominator is the required-skill count, so a candidate with several
/// skills matching the same requirement can score above 100.
#[inline]
pub fn skill_score(skill_matches: usize, required_count: usize) -> f64 {
    if required_count == 0 {
        return NEUTRAL_SKILL_SCORE;
    }

    (skill_matches as f64 / required_count as f64) * 100.0
}

/// Calculate experience score
/// Volume is capped at 50 points; rating adds up to 50 more for ratings in [0, 5]
#[inline]
pub fn experience_score(completed_tasks: u32, rating: f64) -> f64 {
    let volume = (completed_tasks as f64 * POINTS_PER_COMPLETED_TASK).min(COMPLETED_TASKS_CAP);
    volume + rating * POINTS_PER_RATING_STAR
}

/// Weighted combination of the two sub-scores
#[inline]
pub fn compatibility_score(skill_score: f64, experience_score: f64, weights: &ScoringWeights) -> f64 {
    skill_score * weights.skill + experience_score * weights.experience
}

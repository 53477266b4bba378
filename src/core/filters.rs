use crate::models::CandidateWorker;

/// Check whether a candidate may be ranked at all
///
/// Inactive candidates are dropped from the output, not sorted last.
#[inline]
pub fn is_eligible(candidate: &CandidateWorker) -> bool {
    candidate.is_active
}

/// Loose skill match: either lowercased tag contains the other
///
/// Both arguments must already be lowercased. Symmetric, so "java" matches
/// "javascript" and "javascript" matches "java". Containment is literal:
/// "js" does not match "javascript".
#[inline]
pub fn skills_match(skill: &str, required: &str) -> bool {
    skill.contains(required) || required.contains(skill)
}

/// Collect the candidate skills that match at least one required skill
///
/// A candidate skill is counted once no matter how many requirements it
/// satisfies. Original casing and input order are kept.
pub fn matching_skills(skills: &[String], required_skills: &[String]) -> Vec<String> {
    if required_skills.is_empty() {
        return Vec::new();
    }

    let required: Vec<String> = required_skills.iter().map(|r| r.to_lowercase()).collect();

    skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            required.iter().any(|r| skills_match(&skill, r))
        })
        .cloned()
        .collect()
}

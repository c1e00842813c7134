use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::normalize::resolve_canonical;
use super::profiles::{RigProfile, RigProfileLibrary};

pub use super::types::DEFAULT_DETECTION_THRESHOLD;

const MAPPING_WEIGHT: f32 = 0.7;
const PATTERN_WEIGHT: f32 = 0.3;

/// Score breakdown of one profile against a skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileScore {
    pub name: String,
    pub pattern_score: f32,
    pub mapping_score: f32,
    pub bonus: f32,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Accepted profile, if any reached the threshold.
    pub profile: Option<String>,
    pub confidence: f32,
    /// True when no profile was accepted but the normalizer alone recognises the rig.
    pub generic_match: bool,
    /// Fraction of bones the normalizer resolves.
    pub generic_score: f32,
    /// Every profile's score, in library order.
    pub scores: Vec<ProfileScore>,
}

/// Score a single profile against the skeleton's bone names.
pub fn score_profile(profile: &RigProfile, bone_names: &[String]) -> ProfileScore {
    let lowered: Vec<String> = bone_names.iter().map(|name| name.to_lowercase()).collect();

    let pattern_score = if lowered.is_empty() || profile.detection_patterns.is_empty() {
        0.0
    } else {
        let hits = lowered
            .iter()
            .filter(|name| {
                profile
                    .detection_patterns
                    .iter()
                    .any(|pattern| name.contains(pattern.as_str()))
            })
            .count();
        hits as f32 / lowered.len() as f32
    };

    let lowered_set: HashSet<&str> = lowered.iter().map(String::as_str).collect();
    let mapping_score = if profile.bone_mapping.is_empty() {
        0.0
    } else {
        let found = profile
            .source_keys()
            .filter(|key| lowered_set.contains(key.to_lowercase().as_str()))
            .count();
        found as f32 / profile.bone_mapping.len() as f32
    };

    let bonus = profile
        .detection_bonus
        .as_ref()
        .map(|bonus| {
            let prefix = bonus.prefix.to_lowercase();
            let carrying = lowered.iter().filter(|name| name.starts_with(&prefix)).count();
            if carrying > bonus.min_bones {
                bonus.bonus
            } else {
                0.0
            }
        })
        .unwrap_or(0.0);

    let confidence =
        (MAPPING_WEIGHT * mapping_score + PATTERN_WEIGHT * pattern_score + bonus).clamp(0.0, 1.0);

    ProfileScore {
        name: profile.name.clone(),
        pattern_score,
        mapping_score,
        bonus,
        confidence,
    }
}

/// Fraction of bones that resolve to a canonical name.
pub fn generic_score(bone_names: &[String]) -> f32 {
    if bone_names.is_empty() {
        return 0.0;
    }
    let resolved = bone_names
        .iter()
        .filter(|name| resolve_canonical(name).is_some())
        .count();
    resolved as f32 / bone_names.len() as f32
}

/// Pick the best profile for a skeleton.
///
/// The highest-scoring profile wins when it reaches `threshold`; ties go to the
/// profile registered first. Otherwise the generic matcher is consulted.
pub fn detect(
    library: &RigProfileLibrary,
    bone_names: &[String],
    threshold: f32,
) -> DetectionResult {
    let scores: Vec<ProfileScore> = library
        .iter()
        .map(|profile| score_profile(profile, bone_names))
        .collect();

    let mut best: Option<&ProfileScore> = None;
    for score in &scores {
        if best.is_none_or(|current| score.confidence > current.confidence) {
            best = Some(score);
        }
    }

    let best_confidence = best.map(|score| score.confidence).unwrap_or(0.0);
    let generic = generic_score(bone_names);

    if let Some(score) = best.filter(|score| score.confidence >= threshold) {
        crate::log_info!(
            "Detected rig profile '{}' (confidence {:.2})",
            score.name,
            score.confidence
        );
        return DetectionResult {
            profile: Some(score.name.clone()),
            confidence: score.confidence,
            generic_match: false,
            generic_score: generic,
            scores,
        };
    }

    if generic >= threshold {
        crate::log_info!(
            "No rig profile reached {:.2}; generic name matching covers {:.0}% of bones",
            threshold,
            generic * 100.0
        );
        return DetectionResult {
            profile: None,
            confidence: generic,
            generic_match: true,
            generic_score: generic,
            scores,
        };
    }

    crate::log_warn!(
        "No rig profile detected (best confidence {:.2}, threshold {:.2})",
        best_confidence,
        threshold
    );
    DetectionResult {
        profile: None,
        confidence: best_confidence.max(generic),
        generic_match: false,
        generic_score: generic,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    fn builtin() -> RigProfileLibrary {
        RigProfileLibrary::builtin().expect("builtin profiles parse")
    }

    #[test]
    fn given_profile_keys_as_skeleton_when_detecting_then_that_profile_wins() {
        let library = builtin();
        for profile in library.iter() {
            let bones: Vec<String> = profile.source_keys().map(str::to_string).collect();
            let result = detect(&library, &bones, DEFAULT_DETECTION_THRESHOLD);

            assert_eq!(result.profile.as_deref(), Some(profile.name.as_str()));
            assert!(result.confidence >= DEFAULT_DETECTION_THRESHOLD);
        }
    }

    #[test]
    fn given_unrelated_bones_when_detecting_then_no_profile_is_returned() {
        let library = builtin();
        let bones = names(&["Tentacle01", "Tentacle02", "Eyestalk", "Blob"]);

        let result = detect(&library, &bones, DEFAULT_DETECTION_THRESHOLD);

        assert_eq!(result.profile, None);
        assert!(result.confidence < DEFAULT_DETECTION_THRESHOLD);
        assert!(!result.generic_match);
        assert_eq!(result.scores.len(), library.len());
    }

    #[test]
    fn given_many_prefixed_bones_when_scoring_then_bonus_is_applied() {
        let library = builtin();
        let mixamo = library.get("Mixamo").unwrap();
        let bones: Vec<String> = (0..25).map(|i| format!("mixamorig:Extra{i}")).collect();

        let score = score_profile(mixamo, &bones);

        assert_eq!(score.mapping_score, 0.0);
        assert!((score.bonus - 0.3).abs() < 0.0001);
        assert!((score.confidence - 0.6).abs() < 0.0001);
    }

    #[test]
    fn given_unprefixed_humanoid_names_when_detecting_then_generic_match_is_reported() {
        let library = builtin();
        let bones = names(&["Hips", "Spine", "Chest", "Neck", "Head", "Tail"]);

        let result = detect(&library, &bones, DEFAULT_DETECTION_THRESHOLD);

        assert_eq!(result.profile, None);
        assert!(result.generic_match);
        assert!((result.generic_score - 5.0 / 6.0).abs() < 0.0001);
    }

    #[test]
    fn given_equal_scores_when_detecting_then_first_registered_profile_wins() {
        let mut library = RigProfileLibrary::new();
        let text = |name: &str| {
            serde_json::json!({
                "name": name,
                "detection_patterns": ["rig_"],
                "mappings": [{ "source_bone": "rig_hips", "target_bone": " Pelvis" }]
            })
            .to_string()
        };
        library
            .register(RigProfile::from_json_str("a", &text("First")).unwrap())
            .unwrap();
        library
            .register(RigProfile::from_json_str("b", &text("Second")).unwrap())
            .unwrap();

        let result = detect(&library, &names(&["rig_hips"]), DEFAULT_DETECTION_THRESHOLD);
        assert_eq!(result.profile.as_deref(), Some("First"));
    }

    #[test]
    fn given_empty_skeleton_when_detecting_then_scores_are_zero() {
        let result = detect(&builtin(), &[], DEFAULT_DETECTION_THRESHOLD);
        assert_eq!(result.profile, None);
        assert_eq!(result.confidence, 0.0);
    }
}

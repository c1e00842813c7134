use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scene::{BoneId, Skeleton};

use super::normalize::{match_canonical, normalize_bone_name};
use super::profiles::RigProfile;
use super::types::{BoneMappingEntry, DetectionMethod, ValidationIssue};

const SEPARATORS: [char; 4] = [':', '_', ' ', '.'];
const MIN_CONTAINS_LEN: usize = 3;

// ─── Mapping collection ───────────────────────────────────────────────────────

/// Ordered, indexable list of bone mapping entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingCollection {
    entries: Vec<BoneMappingEntry>,
}

impl MappingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<BoneMappingEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: BoneMappingEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Add a user-entered mapping. The target name is normalized.
    pub fn add_manual(&mut self, source_bone: &str, target_bone: &str) -> usize {
        let target = normalize_bone_name(target_bone).into_owned();
        self.push(BoneMappingEntry::new(
            source_bone,
            target,
            1.0,
            DetectionMethod::Manual,
        ))
    }

    pub fn remove(&mut self, index: usize) -> Option<BoneMappingEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Returns `false` when `index` is out of range.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Toggle the enabled flag of every entry.
    pub fn invert(&mut self) {
        for entry in &mut self.entries {
            entry.enabled = !entry.enabled;
        }
    }

    /// Insert a copy right after `index`; returns the copy's index.
    pub fn duplicate(&mut self, index: usize) -> Option<usize> {
        let mut copy = self.entries.get(index)?.clone();
        copy.detection_method = DetectionMethod::Manual;
        self.entries.insert(index + 1, copy);
        Some(index + 1)
    }

    /// Insert a copy with left and right swapped in both bone names.
    pub fn duplicate_mirrored(&mut self, index: usize) -> Option<usize> {
        let original = self.entries.get(index)?;
        let copy = BoneMappingEntry {
            source_bone: mirror_bone_name(&original.source_bone),
            target_bone: mirror_bone_name(&original.target_bone),
            enabled: original.enabled,
            confidence: original.confidence,
            detection_method: DetectionMethod::Manual,
        };
        self.entries.insert(index + 1, copy);
        Some(index + 1)
    }

    pub fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.enabled).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BoneMappingEntry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BoneMappingEntry> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoneMappingEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BoneMappingEntry> {
        self.entries.iter_mut()
    }

    pub fn entries(&self) -> &[BoneMappingEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<BoneMappingEntry> {
        self.entries
    }

    /// Enabled entries grouped by target, in order of first appearance.
    /// Sources keep mapping order and appear once per target.
    pub fn grouped_by_target(&self) -> Vec<(String, Vec<String>)> {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for entry in self.entries.iter().filter(|entry| entry.enabled) {
            let index = match groups.iter().position(|(target, _)| *target == entry.target_bone) {
                Some(index) => index,
                None => {
                    groups.push((entry.target_bone.clone(), Vec::new()));
                    groups.len() - 1
                }
            };
            let sources = &mut groups[index].1;
            if !sources.contains(&entry.source_bone) {
                sources.push(entry.source_bone.clone());
            }
        }
        groups
    }
}

/// Swap the side marker of a bone name.
///
/// Word forms (`Left`/`Right`, `左`/`右`) are swapped first; otherwise
/// standalone `L`/`R` tokens between separators are swapped.
pub fn mirror_bone_name(name: &str) -> String {
    const WORD_PAIRS: [(&str, &str); 4] = [
        ("Left", "Right"),
        ("left", "right"),
        ("LEFT", "RIGHT"),
        ("左", "右"),
    ];

    for (left, right) in WORD_PAIRS {
        if name.contains(left) || name.contains(right) {
            return name
                .replace(left, "\u{0}")
                .replace(right, left)
                .replace('\u{0}', right);
        }
    }

    let mut mirrored = String::with_capacity(name.len());
    let mut token = String::new();
    let flush = |token: &mut String, out: &mut String| {
        match token.as_str() {
            "L" => out.push('R'),
            "R" => out.push('L'),
            "l" => out.push('r'),
            "r" => out.push('l'),
            other => out.push_str(other),
        }
        token.clear();
    };

    for ch in name.chars() {
        if SEPARATORS.contains(&ch) || ch == '-' {
            flush(&mut token, &mut mirrored);
            mirrored.push(ch);
        } else {
            token.push(ch);
        }
    }
    flush(&mut token, &mut mirrored);
    mirrored
}

// ─── Resolver ─────────────────────────────────────────────────────────────────

/// Entries produced by a resolver run plus per-entry diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ResolveOutcome {
    pub entries: MappingCollection,
    pub issues: Vec<ValidationIssue>,
}

fn ends_with_after_separator(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || haystack.len() <= needle.len() || !haystack.ends_with(needle) {
        return false;
    }
    haystack[..haystack.len() - needle.len()]
        .chars()
        .next_back()
        .is_some_and(|ch| SEPARATORS.contains(&ch))
}

/// Locate the source bone for a profile key, skipping bones already claimed.
///
/// Order: exact, case-insensitive, suffix after a separator (either way round),
/// then substring containment in either direction.
pub fn find_source_bone(
    source: &Skeleton,
    pattern: &str,
    claimed: &HashSet<BoneId>,
) -> Option<BoneId> {
    if let Some(id) = source.find(pattern).filter(|id| !claimed.contains(id)) {
        return Some(id);
    }

    let available: Vec<(BoneId, String)> = source
        .bones()
        .iter()
        .enumerate()
        .filter(|(id, _)| !claimed.contains(id))
        .map(|(id, bone)| (id, bone.name.to_lowercase()))
        .collect();
    let pattern = pattern.to_lowercase();

    let strategies: [&dyn Fn(&str) -> bool; 3] = [
        &|name: &str| name == pattern,
        &|name: &str| {
            ends_with_after_separator(name, &pattern) || ends_with_after_separator(&pattern, name)
        },
        &|name: &str| {
            (pattern.len() >= MIN_CONTAINS_LEN && name.contains(pattern.as_str()))
                || (name.len() >= MIN_CONTAINS_LEN && pattern.contains(name))
        },
    ];

    strategies.iter().find_map(|matches| {
        available
            .iter()
            .find(|(_, name)| matches(name.as_str()))
            .map(|(id, _)| *id)
    })
}

/// Build entries from a profile's bone mapping.
///
/// Keys without a source bone, or whose target is missing from the target
/// skeleton, produce no entry and a `PROFILE_ENTRY_INVALID` diagnostic.
pub fn resolve_from_profile(
    profile: &RigProfile,
    source: &Skeleton,
    target: &Skeleton,
) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();
    let mut claimed = HashSet::new();

    for (pattern, target_bone) in &profile.bone_mapping {
        if target.find(target_bone).is_none() {
            outcome.issues.push(ValidationIssue::info(
                "PROFILE_ENTRY_INVALID",
                format!(
                    "profile '{}': target '{}' is missing from '{}'",
                    profile.name,
                    target_bone,
                    target.name()
                ),
            ));
            continue;
        }

        let Some(id) = find_source_bone(source, pattern, &claimed) else {
            outcome.issues.push(ValidationIssue::info(
                "PROFILE_ENTRY_INVALID",
                format!(
                    "profile '{}': no source bone matches '{}'",
                    profile.name, pattern
                ),
            ));
            continue;
        };

        claimed.insert(id);
        let source_name = source.bone(id).map(|bone| bone.name.clone()).unwrap_or_default();
        outcome.entries.push(BoneMappingEntry::new(
            source_name,
            target_bone.clone(),
            1.0,
            DetectionMethod::Auto,
        ));
    }

    crate::log_info!(
        "Profile '{}' mapped {} of {} keys",
        profile.name,
        outcome.entries.len(),
        profile.bone_mapping.len()
    );
    outcome
}

/// Build entries from the normalizer alone, for rigs no profile recognises.
pub fn resolve_generic(source: &Skeleton, target: &Skeleton) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    for bone in source.bones() {
        match match_canonical(&bone.name) {
            Some((canonical, kind)) if target.find(canonical).is_some() => {
                outcome.entries.push(BoneMappingEntry::new(
                    bone.name.clone(),
                    canonical,
                    kind.confidence(),
                    DetectionMethod::Auto,
                ));
            }
            Some((canonical, _)) => outcome.issues.push(ValidationIssue::info(
                "PROFILE_ENTRY_INVALID",
                format!(
                    "'{}' resolves to '{}', which is missing from '{}'",
                    bone.name,
                    canonical,
                    target.name()
                ),
            )),
            None => outcome.issues.push(ValidationIssue::info(
                "NORMALIZATION_MISS",
                format!("bone '{}' does not match any canonical bone", bone.name),
            )),
        }
    }

    crate::log_info!(
        "Generic matching mapped {} of {} bones",
        outcome.entries.len(),
        source.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::BoneTransform;
    use serde_json::json;

    fn skeleton(bones: &[(&str, Option<&str>)]) -> Skeleton {
        let mut skeleton = Skeleton::new("Source");
        for (name, parent) in bones {
            skeleton.add_bone(name, *parent, BoneTransform::identity()).unwrap();
        }
        skeleton
    }

    fn profile(mapping: serde_json::Value) -> RigProfile {
        let text = json!({ "name": "Test", "mappings": mapping }).to_string();
        RigProfile::from_json_str("test", &text).unwrap()
    }

    #[test]
    fn given_exact_profile_keys_when_resolving_then_three_enabled_entries_are_emitted() {
        let source = skeleton(&[("Hips", None), ("Spine", Some("Hips")), ("LeftArm", Some("Spine"))]);
        let target = Skeleton::canonical("Target");
        let profile = profile(json!([
            { "source_bone": "Hips", "target_bone": " Pelvis" },
            { "source_bone": "Spine", "target_bone": " Spine" },
            { "source_bone": "LeftArm", "target_bone": " L UpperArm" }
        ]));

        let outcome = resolve_from_profile(&profile, &source, &target);

        assert_eq!(outcome.entries.len(), 3);
        assert_eq!(outcome.entries.enabled_count(), 3);
        for entry in outcome.entries.iter() {
            assert_eq!(entry.confidence, 1.0);
            assert_eq!(entry.detection_method, DetectionMethod::Auto);
        }
        assert_eq!(outcome.entries.get(2).unwrap().target_bone, " L UpperArm");
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn given_prefixed_source_names_when_resolving_then_suffix_match_is_used() {
        let source = skeleton(&[("rig1:Hips", None), ("rig1:Spine", Some("rig1:Hips"))]);
        let target = Skeleton::canonical("Target");
        let profile = profile(json!([
            { "source_bone": "Hips", "target_bone": " Pelvis" },
            { "source_bone": "Spine", "target_bone": " Spine" },
            { "source_bone": "Tail", "target_bone": " Head" }
        ]));

        let outcome = resolve_from_profile(&profile, &source, &target);

        assert_eq!(outcome.entries.get(0).unwrap().source_bone, "rig1:Hips");
        assert_eq!(outcome.entries.get(1).unwrap().source_bone, "rig1:Spine");
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].code, "PROFILE_ENTRY_INVALID");
    }

    #[test]
    fn given_claimed_bone_when_searching_again_then_it_is_skipped() {
        let source = skeleton(&[("Spine", None), ("Spine1", Some("Spine"))]);
        let mut claimed = HashSet::new();

        let first = find_source_bone(&source, "spine", &claimed).unwrap();
        claimed.insert(first);
        let second = find_source_bone(&source, "spine", &claimed);

        assert_eq!(first, source.find("Spine").unwrap());
        assert_eq!(second, source.find("Spine1"));
    }

    #[test]
    fn given_target_missing_from_target_skeleton_when_resolving_then_entry_is_skipped() {
        let source = skeleton(&[("Hips", None)]);
        let mut target = Skeleton::new("Partial");
        target.add_bone(" Spine", None, BoneTransform::identity()).unwrap();
        let profile = profile(json!([{ "source_bone": "Hips", "target_bone": " Pelvis" }]));

        let outcome = resolve_from_profile(&profile, &source, &target);

        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.issues.len(), 1);
    }

    #[test]
    fn given_unprofiled_rig_when_resolving_generically_then_confidence_reflects_match_kind() {
        let source = skeleton(&[("Hips", None), ("SPINE1", Some("Hips")), ("tail", Some("Hips"))]);
        let target = Skeleton::canonical("Target");

        let outcome = resolve_generic(&source, &target);

        assert_eq!(outcome.entries.len(), 2);
        assert!((outcome.entries.get(0).unwrap().confidence - 0.9).abs() < 0.0001);
        assert!((outcome.entries.get(1).unwrap().confidence - 0.8).abs() < 0.0001);
        assert_eq!(outcome.issues[0].code, "NORMALIZATION_MISS");
    }

    #[test]
    fn given_collection_when_editing_then_order_and_flags_follow_operations() {
        let mut mapping = MappingCollection::new();
        mapping.add_manual("Hips", "Pelvis");
        mapping.add_manual("LeftArm", "L UpperArm");

        assert_eq!(mapping.get(0).unwrap().target_bone, " Pelvis");
        assert_eq!(mapping.get(1).unwrap().detection_method, DetectionMethod::Manual);

        assert!(mapping.set_enabled(0, false));
        assert!(!mapping.set_enabled(9, false));
        assert_eq!(mapping.enabled_count(), 1);

        mapping.invert();
        assert!(mapping.get(0).unwrap().enabled);
        assert!(!mapping.get(1).unwrap().enabled);

        assert_eq!(mapping.duplicate(0), Some(1));
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get(1).unwrap().source_bone, "Hips");

        let removed = mapping.remove(1).unwrap();
        assert_eq!(removed.source_bone, "Hips");
        assert!(mapping.remove(5).is_none());
    }

    #[test]
    fn given_left_entry_when_duplicating_mirrored_then_both_names_switch_side() {
        let mut mapping = MappingCollection::new();
        mapping.add_manual("LeftForeArm", " L Forearm");

        let index = mapping.duplicate_mirrored(0).unwrap();
        let copy = mapping.get(index).unwrap();

        assert_eq!(copy.source_bone, "RightForeArm");
        assert_eq!(copy.target_bone, " R Forearm");
    }

    #[test]
    fn given_side_conventions_when_mirroring_then_only_side_tokens_change() {
        assert_eq!(mirror_bone_name("DEF-upper_arm.L.001"), "DEF-upper_arm.R.001");
        assert_eq!(mirror_bone_name("J_Bip_R_Hand"), "J_Bip_L_Hand");
        assert_eq!(mirror_bone_name("hand_l"), "hand_r");
        assert_eq!(mirror_bone_name("左腕"), "右腕");
        assert_eq!(mirror_bone_name("Spine"), "Spine");
        assert_eq!(mirror_bone_name("mixamorig:RightHand"), "mixamorig:LeftHand");
    }

    #[test]
    fn given_many_to_one_entries_when_grouping_then_sources_share_one_target() {
        let mut mapping = MappingCollection::new();
        mapping.add_manual("Thumb1", " L Finger0");
        mapping.add_manual("Hips", " Pelvis");
        mapping.add_manual("Thumb2", " L Finger0");
        mapping.add_manual("Thumb2", " L Finger0");
        mapping.add_manual("Thumb3", " L Finger0");
        mapping.set_enabled(4, false);

        let groups = mapping.grouped_by_target();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, " L Finger0");
        assert_eq!(groups[0].1, vec!["Thumb1".to_string(), "Thumb2".to_string()]);
        assert_eq!(groups[1].0, " Pelvis");
    }
}

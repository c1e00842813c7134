use std::{borrow::Cow, collections::HashMap, sync::OnceLock};

use crate::scene::{BoneId, Skeleton};

use super::aliases::BONE_ALIASES;
use super::types::{TARGET_BONES, ValidationIssue, is_target_bone};

static ALIAS_INDEX: OnceLock<AliasIndex> = OnceLock::new();

/// Which normalization step produced a canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Canonical,
    Alias,
    AliasCaseInsensitive,
    Whitespace,
}

impl MatchKind {
    /// Confidence assigned to mappings built purely from the normalizer.
    pub fn confidence(&self) -> f32 {
        match self {
            MatchKind::Canonical => 1.0,
            MatchKind::Alias => 0.9,
            MatchKind::AliasCaseInsensitive => 0.8,
            MatchKind::Whitespace => 0.7,
        }
    }
}

struct AliasIndex {
    exact: HashMap<&'static str, &'static str>,
    lowercase: HashMap<String, &'static str>,
    trimmed: HashMap<&'static str, &'static str>,
    trimmed_lowercase: HashMap<String, &'static str>,
}

fn alias_index() -> &'static AliasIndex {
    ALIAS_INDEX.get_or_init(|| {
        let mut index = AliasIndex {
            exact: HashMap::with_capacity(BONE_ALIASES.len()),
            lowercase: HashMap::with_capacity(BONE_ALIASES.len()),
            trimmed: HashMap::with_capacity(BONE_ALIASES.len() + TARGET_BONES.len()),
            trimmed_lowercase: HashMap::with_capacity(BONE_ALIASES.len() + TARGET_BONES.len()),
        };

        for canonical in TARGET_BONES {
            index.trimmed.insert(canonical.trim(), canonical);
            index
                .trimmed_lowercase
                .insert(canonical.trim().to_lowercase(), canonical);
        }

        for &(alias, canonical) in BONE_ALIASES {
            index.exact.entry(alias).or_insert(canonical);
            index.lowercase.entry(alias.to_lowercase()).or_insert(canonical);
            index.trimmed.entry(alias.trim()).or_insert(canonical);
            index
                .trimmed_lowercase
                .entry(alias.trim().to_lowercase())
                .or_insert(canonical);
        }

        index
    })
}

/// Resolve a bone name to a canonical target name, reporting the step that matched.
pub fn match_canonical(name: &str) -> Option<(&'static str, MatchKind)> {
    if let Some(canonical) = TARGET_BONES.iter().find(|bone| **bone == name) {
        return Some((*canonical, MatchKind::Canonical));
    }

    let index = alias_index();
    if let Some(canonical) = index.exact.get(name) {
        return Some((*canonical, MatchKind::Alias));
    }
    if let Some(canonical) = index.lowercase.get(&name.to_lowercase()) {
        return Some((*canonical, MatchKind::AliasCaseInsensitive));
    }

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(canonical) = index.trimmed.get(trimmed) {
        return Some((*canonical, MatchKind::Whitespace));
    }
    index
        .trimmed_lowercase
        .get(&trimmed.to_lowercase())
        .map(|canonical| (*canonical, MatchKind::Whitespace))
}

/// Canonical name for `name`, or `None` when nothing matches.
pub fn resolve_canonical(name: &str) -> Option<&'static str> {
    match_canonical(name).map(|(canonical, _)| canonical)
}

/// Canonical name for `name`, or the original name unchanged on a miss.
///
/// Idempotent: normalizing an already-normalized name returns it as-is.
pub fn normalize_bone_name(name: &str) -> Cow<'_, str> {
    match resolve_canonical(name) {
        Some(canonical) => Cow::Borrowed(canonical),
        None => Cow::Borrowed(name),
    }
}

/// Like [`normalize_bone_name`], plus a `NORMALIZATION_MISS` issue on a miss.
pub fn normalize_with_diagnostic(name: &str) -> (Cow<'_, str>, Option<ValidationIssue>) {
    match resolve_canonical(name) {
        Some(canonical) => (Cow::Borrowed(canonical), None),
        None => (
            Cow::Borrowed(name),
            Some(ValidationIssue::warning(
                "NORMALIZATION_MISS",
                format!("bone name '{}' does not match any canonical bone", name),
            )),
        ),
    }
}

/// Find `name` among `candidates`: exact, case-insensitive, trimmed,
/// trimmed case-insensitive, then by shared canonical name.
pub fn find_name_flexible<'a, I>(candidates: I, name: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let candidates = candidates.into_iter();

    if let Some(found) = candidates.clone().find(|candidate| *candidate == name) {
        return Some(found);
    }

    let lowered = name.to_lowercase();
    if let Some(found) = candidates
        .clone()
        .find(|candidate| candidate.to_lowercase() == lowered)
    {
        return Some(found);
    }

    let trimmed = name.trim();
    if !trimmed.is_empty() {
        if let Some(found) = candidates.clone().find(|candidate| candidate.trim() == trimmed) {
            return Some(found);
        }
        let trimmed_lower = trimmed.to_lowercase();
        if let Some(found) = candidates
            .clone()
            .find(|candidate| candidate.trim().to_lowercase() == trimmed_lower)
        {
            return Some(found);
        }
    }

    let canonical = resolve_canonical(name)?;
    candidates
        .clone()
        .find(|candidate| *candidate == canonical)
        .or_else(|| candidates.clone().find(|candidate| resolve_canonical(candidate) == Some(canonical)))
}

/// Flexible bone lookup inside a skeleton.
pub fn find_bone_flexible(skeleton: &Skeleton, name: &str) -> Option<BoneId> {
    if let Some(id) = skeleton.find(name) {
        return Some(id);
    }
    let found = find_name_flexible(skeleton.bones().iter().map(|bone| bone.name.as_str()), name)?;
    skeleton.find(found)
}

/// Flexible lookup against the canonical list; returns the exact canonical name.
pub fn find_target_flexible(name: &str) -> Option<&'static str> {
    if is_target_bone(name) {
        return TARGET_BONES.iter().copied().find(|bone| *bone == name);
    }
    find_name_flexible(TARGET_BONES.iter().copied(), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn given_every_alias_when_normalized_then_its_canonical_is_returned() {
        for (alias, canonical) in BONE_ALIASES {
            assert_eq!(normalize_bone_name(alias), *canonical, "alias {alias:?}");
        }
    }

    #[test]
    fn given_any_known_name_when_normalized_twice_then_result_is_stable() {
        let samples = BONE_ALIASES
            .iter()
            .map(|(alias, _)| *alias)
            .chain(TARGET_BONES.iter().copied())
            .chain(["Tail", "hair_01", "  ", "", "J_Sec_L_Bust1"]);

        for name in samples {
            let once = normalize_bone_name(name).into_owned();
            let twice = normalize_bone_name(&once).into_owned();
            assert_eq!(once, twice, "name {name:?}");
        }
    }

    #[test]
    fn given_alias_table_when_lowercased_then_no_alias_points_at_two_canonicals() {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (alias, canonical) in BONE_ALIASES {
            let key = alias.trim().to_lowercase();
            if let Some(previous) = seen.insert(key.clone(), *canonical) {
                assert_eq!(previous, *canonical, "alias {key:?} collides");
            }
            if let Some(target) = TARGET_BONES
                .iter()
                .find(|target| target.trim().to_lowercase() == key)
            {
                assert_eq!(target, canonical, "alias {alias:?} shadows {target:?}");
            }
        }
    }

    #[test]
    fn given_canonical_name_when_matched_then_it_is_returned_unchanged() {
        assert_eq!(
            match_canonical(" L UpperArm"),
            Some((" L UpperArm", MatchKind::Canonical))
        );
    }

    #[test]
    fn given_alias_variants_when_matched_then_step_is_reported() {
        assert_eq!(
            match_canonical("UpperArm.L"),
            Some((" L UpperArm", MatchKind::Alias))
        );
        assert_eq!(
            match_canonical("UPPERARM.L"),
            Some((" L UpperArm", MatchKind::AliasCaseInsensitive))
        );
        assert_eq!(
            match_canonical("  l upperarm  "),
            Some((" L UpperArm", MatchKind::Whitespace))
        );
        assert_eq!(match_canonical("Pelvis"), Some((" Pelvis", MatchKind::Alias)));
    }

    #[test]
    fn given_unknown_name_when_normalized_then_original_is_kept_with_diagnostic() {
        let (name, issue) = normalize_with_diagnostic("Tail_03");
        assert_eq!(name, "Tail_03");
        assert_eq!(issue.expect("miss reported").code, "NORMALIZATION_MISS");

        let (name, issue) = normalize_with_diagnostic("mixamorig:Hips");
        assert_eq!(name, " Pelvis");
        assert!(issue.is_none());
    }

    #[test]
    fn given_skeleton_when_searching_flexibly_then_exact_names_win() {
        let mut skeleton = Skeleton::new("Armature");
        skeleton
            .add_bone("Hips", None, crate::transform::BoneTransform::identity())
            .unwrap();
        skeleton
            .add_bone("spine", Some("Hips"), crate::transform::BoneTransform::identity())
            .unwrap();

        assert_eq!(find_bone_flexible(&skeleton, "HIPS"), skeleton.find("Hips"));
        assert_eq!(find_bone_flexible(&skeleton, " Spine"), skeleton.find("spine"));
        assert_eq!(find_bone_flexible(&skeleton, "Pelvis"), skeleton.find("Hips"));
        assert_eq!(find_bone_flexible(&skeleton, "Tail"), None);
    }

    #[test]
    fn given_target_names_without_spaces_when_searching_then_canonical_is_found() {
        assert_eq!(find_target_flexible("Pelvis"), Some(" Pelvis"));
        assert_eq!(find_target_flexible("l hand"), Some(" L Hand"));
        assert_eq!(find_target_flexible(" R Toe0"), Some(" R Toe0"));
        assert_eq!(find_target_flexible("Tail"), None);
    }
}

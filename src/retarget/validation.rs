use crate::{error::RetargetError, scene::Skeleton};

use super::mapping::MappingCollection;
use super::normalize::{find_bone_flexible, find_target_flexible};
use super::types::{TARGET_BONES, ValidationIssue};

// ─── Input checks ─────────────────────────────────────────────────────────────

/// Reject skeleton pairs that cannot be converted at all.
///
/// Returns warnings for canonical bones absent from the target skeleton.
pub fn validate_skeletons(
    source: &Skeleton,
    target: &Skeleton,
) -> Result<Vec<ValidationIssue>, RetargetError> {
    if source.name() == target.name() {
        return Err(RetargetError::Validation(format!(
            "source and target armature are the same object '{}'",
            source.name()
        )));
    }
    if target.is_empty() {
        return Err(RetargetError::Validation(format!(
            "target armature '{}' has no bones",
            target.name()
        )));
    }

    let missing: Vec<&str> = TARGET_BONES
        .iter()
        .copied()
        .filter(|bone| target.find(bone).is_none())
        .collect();

    let mut issues = Vec::new();
    if !missing.is_empty() {
        issues.push(ValidationIssue::warning(
            "TARGET_BONE_MISSING",
            format!(
                "target armature '{}' lacks {} canonical bone(s): {}",
                target.name(),
                missing.len(),
                missing.join(",")
            ),
        ));
    }
    Ok(issues)
}

// ─── Mapping checks ───────────────────────────────────────────────────────────

/// Scan enabled entries and repair or disable the ones that do not resolve.
///
/// Names that only resolve through the flexible lookup are rewritten to the
/// exact skeleton/canonical name. Entries whose source bone or canonical target
/// cannot be found are disabled. Never fails; everything is reported as issues.
pub fn validate_mapping(
    mapping: &mut MappingCollection,
    source: &Skeleton,
    target: &Skeleton,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut disabled = 0usize;

    for entry in mapping.iter_mut().filter(|entry| entry.enabled) {
        let source_name = find_bone_flexible(source, &entry.source_bone)
            .and_then(|id| source.bone(id))
            .map(|bone| bone.name.clone());
        let target_name =
            find_target_flexible(&entry.target_bone).filter(|name| target.find(name).is_some());

        match (source_name, target_name) {
            (Some(source_name), Some(target_name)) => {
                if source_name != entry.source_bone {
                    issues.push(ValidationIssue::info(
                        "MAPPING_NAME_FIXED",
                        format!(
                            "source '{}' resolved to bone '{}'",
                            entry.source_bone, source_name
                        ),
                    ));
                    entry.source_bone = source_name;
                }
                if target_name != entry.target_bone {
                    issues.push(ValidationIssue::info(
                        "MAPPING_NAME_FIXED",
                        format!(
                            "target '{}' resolved to canonical '{}'",
                            entry.target_bone, target_name
                        ),
                    ));
                    entry.target_bone = target_name.to_string();
                }
            }
            (source_name, target_name) => {
                if source_name.is_none() {
                    issues.push(ValidationIssue::warning(
                        "MAPPING_SOURCE_MISSING",
                        format!(
                            "source bone '{}' not found in '{}'; entry disabled",
                            entry.source_bone,
                            source.name()
                        ),
                    ));
                }
                if target_name.is_none() {
                    issues.push(ValidationIssue::warning(
                        "MAPPING_TARGET_MISSING",
                        format!(
                            "target bone '{}' is not a canonical bone of '{}'; entry disabled",
                            entry.target_bone,
                            target.name()
                        ),
                    ));
                }
                entry.enabled = false;
                disabled += 1;
            }
        }
    }

    if disabled > 0 {
        issues.push(ValidationIssue::warning(
            "MAPPING_INVALID",
            format!("{} invalid mapping entr(y/ies) disabled", disabled),
        ));
        crate::log_warn!("Disabled {} invalid mapping entries", disabled);
    }

    issues
}

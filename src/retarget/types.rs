use serde::{Deserialize, Serialize};

use crate::retarget::consolidate::MeshStatistics;

// ─── Canonical target skeleton ────────────────────────────────────────────────

/// Version of the canonical skeleton resource below.
pub const CANONICAL_SKELETON_VERSION: &str = "1.0";

/// Version written into mapping files.
pub const MAPPING_FILE_VERSION: &str = "1.0";

/// Default minimum confidence for accepting a detected rig profile.
pub const DEFAULT_DETECTION_THRESHOLD: f32 = 0.4;

/// Ordered canonical target bone names. Leading spaces are part of the name.
pub const TARGET_BONES: [&str; 32] = [
    " Pelvis",
    " Spine",
    " Spine1",
    " Spine2",
    " Neck",
    " Head",
    " L Clavicle",
    " L UpperArm",
    " L Forearm",
    " L Hand",
    " L Finger0",
    " L Finger1",
    " L Finger2",
    " L Finger3",
    " L Finger4",
    " R Clavicle",
    " R UpperArm",
    " R Forearm",
    " R Hand",
    " R Finger0",
    " R Finger1",
    " R Finger2",
    " R Finger3",
    " R Finger4",
    " L Thigh",
    " L Calf",
    " L Foot",
    " L Toe0",
    " R Thigh",
    " R Calf",
    " R Foot",
    " R Toe0",
];

/// Parent and default rest offset (Y-up, metres, character left = +X) for
/// every canonical bone, in `TARGET_BONES` order.
pub(crate) const TARGET_HIERARCHY: [(&str, Option<&str>, [f32; 3]); 32] = [
    (" Pelvis", None, [0.0, 1.0, 0.0]),
    (" Spine", Some(" Pelvis"), [0.0, 0.1, 0.0]),
    (" Spine1", Some(" Spine"), [0.0, 0.12, 0.0]),
    (" Spine2", Some(" Spine1"), [0.0, 0.12, 0.0]),
    (" Neck", Some(" Spine2"), [0.0, 0.16, 0.0]),
    (" Head", Some(" Neck"), [0.0, 0.1, 0.0]),
    (" L Clavicle", Some(" Spine2"), [0.03, 0.12, 0.0]),
    (" L UpperArm", Some(" L Clavicle"), [0.15, 0.0, 0.0]),
    (" L Forearm", Some(" L UpperArm"), [0.28, 0.0, 0.0]),
    (" L Hand", Some(" L Forearm"), [0.25, 0.0, 0.0]),
    (" L Finger0", Some(" L Hand"), [0.03, 0.0, 0.03]),
    (" L Finger1", Some(" L Hand"), [0.09, 0.0, 0.025]),
    (" L Finger2", Some(" L Hand"), [0.095, 0.0, 0.0]),
    (" L Finger3", Some(" L Hand"), [0.09, 0.0, -0.02]),
    (" L Finger4", Some(" L Hand"), [0.08, 0.0, -0.04]),
    (" R Clavicle", Some(" Spine2"), [-0.03, 0.12, 0.0]),
    (" R UpperArm", Some(" R Clavicle"), [-0.15, 0.0, 0.0]),
    (" R Forearm", Some(" R UpperArm"), [-0.28, 0.0, 0.0]),
    (" R Hand", Some(" R Forearm"), [-0.25, 0.0, 0.0]),
    (" R Finger0", Some(" R Hand"), [-0.03, 0.0, 0.03]),
    (" R Finger1", Some(" R Hand"), [-0.09, 0.0, 0.025]),
    (" R Finger2", Some(" R Hand"), [-0.095, 0.0, 0.0]),
    (" R Finger3", Some(" R Hand"), [-0.09, 0.0, -0.02]),
    (" R Finger4", Some(" R Hand"), [-0.08, 0.0, -0.04]),
    (" L Thigh", Some(" Pelvis"), [0.09, -0.05, 0.0]),
    (" L Calf", Some(" L Thigh"), [0.0, -0.42, 0.0]),
    (" L Foot", Some(" L Calf"), [0.0, -0.42, 0.0]),
    (" L Toe0", Some(" L Foot"), [0.0, -0.06, 0.12]),
    (" R Thigh", Some(" Pelvis"), [-0.09, -0.05, 0.0]),
    (" R Calf", Some(" R Thigh"), [0.0, -0.42, 0.0]),
    (" R Foot", Some(" R Calf"), [0.0, -0.42, 0.0]),
    (" R Toe0", Some(" R Foot"), [0.0, -0.06, 0.12]),
];

/// Exact (whitespace- and case-sensitive) membership in the canonical list.
pub fn is_target_bone(name: &str) -> bool {
    TARGET_BONES.contains(&name)
}

/// Position of a canonical bone in `TARGET_BONES`.
pub fn target_bone_index(name: &str) -> Option<usize> {
    TARGET_BONES.iter().position(|bone| *bone == name)
}

// ─── Mapping entries ──────────────────────────────────────────────────────────

/// How a mapping entry was produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DetectionMethod {
    Manual,
    #[default]
    Auto,
    Cached,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Manual => "Manual",
            DetectionMethod::Auto => "Auto",
            DetectionMethod::Cached => "Cached",
        }
    }

    /// Parse a persisted method name; unknown values are treated as cached.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "manual" => DetectionMethod::Manual,
            "auto" | "automatic" => DetectionMethod::Auto,
            _ => DetectionMethod::Cached,
        }
    }
}

/// One source→target bone correspondence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoneMappingEntry {
    pub source_bone: String,
    pub target_bone: String,
    pub enabled: bool,
    /// Heuristic trust in `[0, 1]`.
    pub confidence: f32,
    pub detection_method: DetectionMethod,
}

impl BoneMappingEntry {
    pub fn new(
        source_bone: impl Into<String>,
        target_bone: impl Into<String>,
        confidence: f32,
        detection_method: DetectionMethod,
    ) -> Self {
        Self {
            source_bone: source_bone.into(),
            target_bone: target_bone.into(),
            enabled: true,
            confidence: confidence.clamp(0.0, 1.0),
            detection_method,
        }
    }
}

// ─── Diagnostics ──────────────────────────────────────────────────────────────

/// Severity level used by validation issues.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single non-fatal diagnostic produced by a pipeline step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn info(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: code.to_string(),
            message: message.into(),
        }
    }
}

// ─── Options ──────────────────────────────────────────────────────────────────

/// Conversion options shared by the CLI and IPC entry points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConvertOptions {
    /// Minimum confidence for accepting a detected profile.
    pub detection_threshold: f32,
    /// Extra outward offset applied to both clavicle chains after baking.
    pub arm_spacing: f32,
    /// Extra outward offset applied to both thigh chains after baking.
    pub leg_spacing: f32,
    /// Remove the source armature from the scene once the bake succeeded.
    pub delete_source_skeleton: bool,
    /// Restore the scene to its pre-run state when a stage fails.
    pub rollback_on_failure: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
            arm_spacing: 0.0,
            leg_spacing: 0.0,
            delete_source_skeleton: true,
            rollback_on_failure: true,
        }
    }
}

// ─── Reports ──────────────────────────────────────────────────────────────────

/// Result of merging every source group of one target bone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedGroup {
    pub target: String,
    /// Source bones in hierarchy-depth order.
    pub sources: Vec<String>,
    /// Vertices carrying weight in the target group after the merge.
    pub vertex_count: usize,
}

/// Transient positional link: `target_bone` follows `driver_bone`'s world position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionLink {
    pub target_bone: String,
    pub driver_bone: String,
    pub driver_depth: usize,
}

/// A target bone whose rest position changed during the bake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BakedBone {
    pub name: String,
    pub from: [f32; 3],
    pub to: [f32; 3],
}

/// Full report returned after a successful conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    pub source_armature: String,
    pub target_armature: String,
    pub profile: Option<String>,
    pub mesh_name: Option<String>,
    pub mesh_statistics: MeshStatistics,
    pub enabled_mappings: usize,
    pub merged_groups: Vec<MergedGroup>,
    pub pruned_groups: Vec<String>,
    pub primary_drivers: Vec<PositionLink>,
    pub baked_bones: Vec<BakedBone>,
    pub deformed_vertices: usize,
    pub source_deleted: bool,
    pub issues: Vec<ValidationIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn given_canonical_list_when_inspected_then_it_has_32_unique_names() {
        let unique: HashSet<&str> = TARGET_BONES.iter().copied().collect();
        assert_eq!(unique.len(), 32);
        assert!(TARGET_BONES.iter().all(|name| name.starts_with(' ')));
    }

    #[test]
    fn given_hierarchy_table_when_compared_then_order_matches_canonical_list() {
        for (index, (name, parent, _)) in TARGET_HIERARCHY.iter().enumerate() {
            assert_eq!(*name, TARGET_BONES[index]);
            if let Some(parent) = parent {
                let parent_index = target_bone_index(parent).expect("parent is canonical");
                assert!(parent_index < index, "{name} listed before its parent");
            }
        }
    }

    #[test]
    fn given_unspaced_name_when_checking_membership_then_exact_match_is_required() {
        assert!(is_target_bone(" Pelvis"));
        assert!(!is_target_bone("Pelvis"));
    }

    #[test]
    fn given_persisted_method_names_when_parsing_then_unknown_values_become_cached() {
        assert_eq!(DetectionMethod::parse_lenient("manual"), DetectionMethod::Manual);
        assert_eq!(DetectionMethod::parse_lenient(" Auto "), DetectionMethod::Auto);
        assert_eq!(DetectionMethod::parse_lenient("profile"), DetectionMethod::Cached);
    }

    #[test]
    fn given_out_of_range_confidence_when_building_entry_then_it_is_clamped() {
        let entry = BoneMappingEntry::new("Hips", " Pelvis", 1.7, DetectionMethod::Auto);
        assert_eq!(entry.confidence, 1.0);
        assert!(entry.enabled);
    }
}

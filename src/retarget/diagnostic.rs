use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::scene::Skeleton;
use crate::transform::matrix_translation;

use super::types::{CANONICAL_SKELETON_VERSION, ConversionReport, Severity, target_bone_index};

// ─── Diagnostic structs ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct JointDiagnostic {
    index: usize,
    name: String,
    canonical_slot: Option<usize>,
    parent_name: Option<String>,
    depth: usize,
    local_translation: [f32; 3],
    local_rotation: [f32; 4],
    world_translation: [f32; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueCounts {
    errors: usize,
    warnings: usize,
    infos: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionDiagnosticLog<'a> {
    generated_at: String,
    output_path: String,
    canonical_skeleton_version: &'static str,
    issue_counts: IssueCounts,
    report: &'a ConversionReport,
    joints: Vec<JointDiagnostic>,
}

// ─── Path helper ──────────────────────────────────────────────────────────────

pub fn diagnostic_log_path_for_output(output_path: &Path) -> PathBuf {
    output_path.with_extension("diagnostic.json")
}

// ─── Diagnostic writer ────────────────────────────────────────────────────────

fn collect_joints(skeleton: &Skeleton) -> Vec<JointDiagnostic> {
    let worlds = skeleton.rest_world_matrices();
    skeleton
        .bones()
        .iter()
        .enumerate()
        .map(|(index, bone)| {
            let world = matrix_translation(&worlds[index]);
            JointDiagnostic {
                index,
                name: bone.name.clone(),
                canonical_slot: target_bone_index(&bone.name),
                parent_name: bone
                    .parent
                    .and_then(|parent| skeleton.bone(parent))
                    .map(|parent| parent.name.clone()),
                depth: skeleton.depth(index),
                local_translation: bone.rest.translation,
                local_rotation: bone.rest.rotation,
                world_translation: [world.x, world.y, world.z],
            }
        })
        .collect()
}

fn count_issues(report: &ConversionReport) -> IssueCounts {
    let count = |severity: Severity| {
        report
            .issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    };
    IssueCounts {
        errors: count(Severity::Error),
        warnings: count(Severity::Warning),
        infos: count(Severity::Info),
    }
}

/// Write the report plus the target's baked rest joints as pretty JSON.
pub fn write_conversion_diagnostic_log(
    output_path: &Path,
    diagnostic_path: &Path,
    report: &ConversionReport,
    target: Option<&Skeleton>,
) -> Result<()> {
    let diagnostic = ConversionDiagnosticLog {
        generated_at: jiff::Zoned::now().to_string(),
        output_path: output_path.display().to_string(),
        canonical_skeleton_version: CANONICAL_SKELETON_VERSION,
        issue_counts: count_issues(report),
        report,
        joints: target.map(collect_joints).unwrap_or_default(),
    };

    let json_bytes = serde_json::to_vec_pretty(&diagnostic)
        .context("failed to serialize conversion diagnostic JSON")?;
    fs::write(diagnostic_path, json_bytes).with_context(|| {
        format!(
            "failed to write conversion diagnostic log: {}",
            diagnostic_path.display()
        )
    })?;

    crate::log_debug!("Diagnostic log written to {}", diagnostic_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retarget::types::ValidationIssue;
    use serde_json::Value;

    #[test]
    fn given_output_path_when_deriving_diagnostic_path_then_extension_is_replaced() {
        let path = diagnostic_log_path_for_output(Path::new("out/converted.json"));
        assert_eq!(path, PathBuf::from("out/converted.diagnostic.json"));
    }

    #[test]
    fn given_report_and_target_when_writing_log_then_joints_and_counts_are_serialized() {
        let report = ConversionReport {
            source_armature: "Source".to_string(),
            target_armature: "Target".to_string(),
            issues: vec![
                ValidationIssue::warning("MAPPING_INVALID", "1 entry disabled"),
                ValidationIssue::info("MAPPING_NAME_FIXED", "fixed"),
            ],
            ..ConversionReport::default()
        };
        let target = Skeleton::canonical("Target");
        let path = std::env::temp_dir().join(format!(
            "rigmap-diagnostic-{}.diagnostic.json",
            std::process::id()
        ));

        write_conversion_diagnostic_log(Path::new("out.json"), &path, &report, Some(&target))
            .unwrap();
        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(json["canonical_skeleton_version"], "1.0");
        assert_eq!(json["issue_counts"]["warnings"], 1);
        assert_eq!(json["joints"].as_array().unwrap().len(), 32);
        assert_eq!(json["joints"][1]["parent_name"], " Pelvis");
        let spine_y = json["joints"][1]["world_translation"][1].as_f64().unwrap();
        assert!((spine_y - 1.1).abs() < 0.0001);
    }
}

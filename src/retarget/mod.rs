mod aliases;
pub mod consolidate;
pub mod detect;
pub mod diagnostic;
pub mod gltf_import;
pub mod mapping;
pub mod normalize;
pub mod pose;
pub mod profiles;
pub mod skinning;
pub mod types;
pub mod validation;

use std::{fs, mem, path::Path};

use anyhow::{Context, Result};

use crate::{
    error::RetargetError,
    logging::ResultExt,
    pipeline::{Stage, run_stages},
    scene::{Mesh, Scene, SceneObject, Skeleton},
};

// Re-export public types for callers of this module.
pub use consolidate::MeshStatistics;
pub use detect::{DetectionResult, ProfileScore};
pub use mapping::{MappingCollection, ResolveOutcome, mirror_bone_name};
pub use normalize::{normalize_bone_name, resolve_canonical};
pub use pose::{PoseSnapshot, PoseTransfer, TransferState};
pub use profiles::{RigProfile, RigProfileLibrary};
pub use skinning::MergeReport;
pub use types::{
    BakedBone, BoneMappingEntry, ConversionReport, ConvertOptions, DetectionMethod, MergedGroup,
    PositionLink, Severity, TARGET_BONES, ValidationIssue,
};

// ─── Scene context ────────────────────────────────────────────────────────────

/// Everything one conversion run reads and mutates.
///
/// Built from clones of the scene objects; the scene itself is only written
/// once the stages are done.
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub source: Skeleton,
    pub target: Skeleton,
    /// Meshes bound to the source, consumed by consolidation.
    pub meshes: Vec<Mesh>,
    /// Consolidated mesh once the `consolidate` stage has run.
    pub mesh: Option<Mesh>,
    pub mapping: MappingCollection,
    pub profile: Option<RigProfile>,
    pub options: ConvertOptions,
    pub transfer: PoseTransfer,
    /// Enabled `(target, sources)` groups, fixed after the merge.
    pub groups: Vec<(String, Vec<String>)>,
    pub report: ConversionReport,
}

impl SceneContext {
    pub fn new(
        source: Skeleton,
        target: Skeleton,
        meshes: Vec<Mesh>,
        mapping: MappingCollection,
        profile: Option<RigProfile>,
        options: ConvertOptions,
    ) -> Self {
        let report = ConversionReport {
            source_armature: source.name().to_string(),
            target_armature: target.name().to_string(),
            profile: profile.as_ref().map(|profile| profile.name.clone()),
            ..ConversionReport::default()
        };
        Self {
            source,
            target,
            meshes,
            mesh: None,
            mapping,
            profile,
            options,
            transfer: PoseTransfer::new(),
            groups: Vec::new(),
            report,
        }
    }

    fn mesh_mut(&mut self) -> Result<&mut Mesh, RetargetError> {
        self.mesh.as_mut().ok_or_else(|| {
            RetargetError::ConversionAbort("no consolidated mesh available".to_string())
        })
    }
}

// ─── Stages ───────────────────────────────────────────────────────────────────

fn validate_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    let issues = validation::validate_skeletons(&context.source, &context.target)?;
    context.report.issues.extend(issues);

    let issues =
        validation::validate_mapping(&mut context.mapping, &context.source, &context.target);
    context.report.issues.extend(issues);

    context.report.enabled_mappings = context.mapping.enabled_count();
    if context.report.enabled_mappings == 0 {
        return Err(RetargetError::ConversionAbort(
            "mapping has no enabled entries after validation".to_string(),
        ));
    }
    if context.meshes.is_empty() {
        return Err(RetargetError::ConversionAbort(format!(
            "no mesh is bound to armature '{}'",
            context.source.name()
        )));
    }
    Ok(())
}

fn consolidate_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    context.report.mesh_statistics = consolidate::collect_mesh_statistics(&context.meshes);
    let (mesh, issues) = consolidate::consolidate_meshes(mem::take(&mut context.meshes))
        .ok_or_else(|| RetargetError::ConversionAbort("nothing to consolidate".to_string()))?;

    crate::log_info!(
        "Consolidated {} mesh(es) into '{}' ({} vertices)",
        context.report.mesh_statistics.mesh_count,
        mesh.name,
        mesh.vertex_count()
    );
    context.report.mesh_name = Some(mesh.name.clone());
    context.report.issues.extend(issues);
    context.mesh = Some(mesh);
    Ok(())
}

fn merge_weights_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    let Some(mesh) = context.mesh.as_mut() else {
        return Err(RetargetError::ConversionAbort(
            "no consolidated mesh available".to_string(),
        ));
    };
    let report = skinning::merge_weights(
        mesh,
        &context.mapping,
        &context.source,
        context.profile.as_ref(),
    );

    context.groups = context.mapping.grouped_by_target();
    context.report.merged_groups = report.merged;
    context.report.pruned_groups = report.pruned_groups;
    context.report.issues.extend(report.issues);
    Ok(())
}

fn capture_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    context.transfer.capture(&context.source)
}

fn apply_to_mesh_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    let Some(mesh) = context.mesh.as_mut() else {
        return Err(RetargetError::ConversionAbort(
            "no consolidated mesh available".to_string(),
        ));
    };
    context.report.deformed_vertices =
        context
            .transfer
            .apply_to_mesh(&mut context.source, mesh, &context.groups)?;
    Ok(())
}

fn bind_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    context
        .transfer
        .bind(&context.source, &context.target, &context.groups)?;
    Ok(())
}

fn bake_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    context.report.baked_bones =
        context
            .transfer
            .bake(&context.source, &mut context.target, &context.options)?;
    Ok(())
}

fn cleanup_stage(context: &mut SceneContext) -> Result<(), RetargetError> {
    let mesh = context.mesh_mut()?;
    let mesh_name = mesh.name.clone();
    let links = context
        .transfer
        .cleanup(context.mesh.as_mut(), &context.target)?;

    crate::log_info!(
        "Bound '{}' to '{}' through {} primary driver(s)",
        mesh_name,
        context.target.name(),
        links.len()
    );
    context.report.primary_drivers = links;
    context.report.issues.extend(context.transfer.take_issues());
    Ok(())
}

/// Conversion stages in execution order.
pub const CONVERSION_STAGES: [Stage<SceneContext>; 8] = [
    Stage::new("validate", validate_stage),
    Stage::new("consolidate", consolidate_stage),
    Stage::new("merge_weights", merge_weights_stage),
    Stage::new("capture", capture_stage),
    Stage::new("apply_to_mesh", apply_to_mesh_stage),
    Stage::new("bind", bind_stage),
    Stage::new("bake", bake_stage),
    Stage::new("cleanup", cleanup_stage),
];

// ─── Public API ───────────────────────────────────────────────────────────────

/// Score a skeleton against every profile in `library`.
pub fn detect_profile(
    library: &RigProfileLibrary,
    skeleton: &Skeleton,
    threshold: f32,
) -> DetectionResult {
    detect::detect(library, &skeleton.bone_names(), threshold)
}

/// Build the initial mapping for a detection result.
///
/// Uses the detected profile when there is one, the normalizer when only the
/// generic matcher recognised the rig, and an empty collection otherwise.
pub fn resolve_mapping(
    library: &RigProfileLibrary,
    detection: &DetectionResult,
    source: &Skeleton,
    target: &Skeleton,
) -> ResolveOutcome {
    if let Some(profile) = detection
        .profile
        .as_deref()
        .and_then(|name| library.get(name))
    {
        return mapping::resolve_from_profile(profile, source, target);
    }
    if detection.generic_match {
        return mapping::resolve_generic(source, target);
    }

    crate::log_info!(
        "No profile for '{}'; starting from an empty mapping",
        source.name()
    );
    ResolveOutcome::default()
}

/// Input of a single conversion run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source: String,
    pub target: String,
    pub mapping: MappingCollection,
    pub profile: Option<RigProfile>,
    pub options: ConvertOptions,
}

/// Retarget the meshes of `request.source` onto `request.target`.
///
/// Stages run on copies of the scene objects. On success the target armature,
/// the consolidated mesh and (unless deleted) the source are written back. On
/// failure the scene is left untouched when `rollback_on_failure` is set;
/// otherwise the partial state is written back and the source kept.
pub fn run_conversion(
    scene: &mut Scene,
    request: ConversionRequest,
) -> Result<ConversionReport, RetargetError> {
    let source = scene
        .armature(&request.source)
        .log_error(Some("conversion input"))?
        .clone();
    let target = scene
        .armature(&request.target)
        .log_error(Some("conversion input"))?
        .clone();
    let meshes: Vec<Mesh> = scene
        .meshes_bound_to(&request.source)
        .into_iter()
        .cloned()
        .collect();
    let mesh_names: Vec<String> = meshes.iter().map(|mesh| mesh.name.clone()).collect();

    crate::log_info!(
        "Converting '{}' → '{}' ({} mesh(es), {} enabled mapping(s))",
        request.source,
        request.target,
        meshes.len(),
        request.mapping.enabled_count()
    );

    let mut context = SceneContext::new(
        source,
        target,
        meshes,
        request.mapping,
        request.profile,
        request.options,
    );

    match run_stages(&mut context, &CONVERSION_STAGES) {
        Ok(_) => {
            let report = commit(scene, context, &mesh_names, true);
            let warnings = report
                .issues
                .iter()
                .filter(|issue| issue.severity == Severity::Warning)
                .count();
            crate::log_info!(
                "Conversion finished: {} bone(s) baked, {} warning(s)",
                report.baked_bones.len(),
                warnings
            );
            Ok(report)
        }
        Err(err) => {
            let stage = err.stage;
            if context.options.rollback_on_failure {
                crate::log_info!("Scene left unchanged (rollback)");
            } else {
                commit(scene, context, &mesh_names, false);
                crate::log_warn!("Partial conversion state written back to the scene");
            }
            Err::<ConversionReport, _>(RetargetError::from(err))
                .log_error(Some(&format!("conversion stopped at stage '{stage}'")))
        }
    }
}

fn commit(
    scene: &mut Scene,
    context: SceneContext,
    mesh_names: &[String],
    succeeded: bool,
) -> ConversionReport {
    let SceneContext {
        source,
        target,
        meshes,
        mesh,
        options,
        mut report,
        ..
    } = context;

    scene.insert(SceneObject::Armature(target));

    if succeeded && options.delete_source_skeleton {
        scene.remove(source.name());
        report.source_deleted = true;
    } else {
        scene.insert(SceneObject::Armature(source));
    }

    match mesh {
        Some(mesh) => {
            let index = mesh_names
                .first()
                .and_then(|name| scene.position(name))
                .unwrap_or(scene.objects.len());
            for name in mesh_names {
                scene.remove(name);
            }
            let index = index.min(scene.objects.len());
            scene.objects.insert(index, SceneObject::Mesh(mesh));
        }
        None => {
            for mesh in meshes {
                scene.insert(SceneObject::Mesh(mesh));
            }
        }
    }

    report
}

/// Generate a reusable markdown checklist for manual review of a converted scene.
pub fn write_final_validation_checklist(
    checklist_path: &Path,
    scene_path: &Path,
    output_path: &Path,
    report: &ConversionReport,
) -> Result<()> {
    let mut content = String::new();
    content.push_str("# rigmap Final Validation Checklist\n\n");
    content.push_str("## Conversion Summary\n\n");
    content.push_str(&format!("- Input scene: `{}`\n", scene_path.display()));
    content.push_str(&format!("- Output scene: `{}`\n", output_path.display()));
    content.push_str(&format!(
        "- Armatures: `{}` -> `{}`\n",
        report.source_armature, report.target_armature
    ));
    content.push_str(&format!(
        "- Profile: `{}`\n",
        report.profile.as_deref().unwrap_or("none")
    ));
    content.push_str(&format!(
        "- Mesh: `{}` ({} source mesh(es))\n",
        report.mesh_name.as_deref().unwrap_or("-"),
        report.mesh_statistics.mesh_count
    ));
    content.push_str(&format!(
        "- Vertices/Polygons: `{}` / `{}`\n",
        report.mesh_statistics.total_vertices, report.mesh_statistics.total_polygons
    ));
    content.push_str(&format!(
        "- Enabled mappings / merged groups: `{}` / `{}`\n",
        report.enabled_mappings,
        report.merged_groups.len()
    ));
    content.push_str(&format!(
        "- Baked bones: `{}`\n\n",
        report.baked_bones.len()
    ));

    content.push_str("## Validation Flow (Manual)\n\n");
    content.push_str("- [ ] Open the converted scene and confirm the target armature loads.\n");
    content.push_str("- [ ] Verify the pelvis sits at the source hip height.\n");
    content.push_str("- [ ] Verify spine, neck and head follow the source chain.\n");
    content.push_str("- [ ] Verify clavicles and thighs are not crossed or collapsed.\n");
    content.push_str("- [ ] Verify fingers and toes point the same way as the source.\n");
    content.push_str("- [ ] Pose the target armature and check for detached or exploding vertices.\n");
    if !report.pruned_groups.is_empty() {
        content.push_str(&format!(
            "- [ ] Review pruned vertex groups: {}\n",
            report.pruned_groups.join(", ")
        ));
    }
    content.push('\n');

    content.push_str("## Issues from Conversion\n\n");
    if report.issues.is_empty() {
        content.push_str("- None\n");
    } else {
        for issue in &report.issues {
            content.push_str(&format!(
                "- [{:?}] {}: {}\n",
                issue.severity, issue.code, issue.message
            ));
        }
    }

    fs::write(checklist_path, content).with_context(|| {
        format!(
            "failed to write validation checklist: {}",
            checklist_path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::BoneTransform;
    use nalgebra::Vector3;
    use serde_json::json;

    fn offset(x: f32, y: f32, z: f32) -> BoneTransform {
        BoneTransform::from_translation(Vector3::new(x, y, z))
    }

    fn source_skeleton() -> Skeleton {
        let mut skeleton = Skeleton::new("Source");
        skeleton.add_bone("Hips", None, offset(0.0, 0.9, 0.0)).unwrap();
        skeleton.add_bone("Spine", Some("Hips"), offset(0.0, 0.15, 0.0)).unwrap();
        skeleton
            .add_bone("LeftArm", Some("Spine"), offset(0.2, 0.35, 0.0))
            .unwrap();
        skeleton
    }

    fn bound_mesh(name: &str, groups: &[(&str, u32, f32)], vertices: usize) -> Mesh {
        let mut mesh = Mesh::new(name);
        mesh.armature = Some("Source".to_string());
        mesh.positions = vec![[0.0, 1.0, 0.0]; vertices];
        for (group, vertex, weight) in groups {
            mesh.add_weight(group, *vertex, *weight);
        }
        mesh
    }

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.insert(SceneObject::Armature(source_skeleton()));
        scene.insert(SceneObject::Mesh(bound_mesh(
            "Body",
            &[("Hips", 0, 1.0), ("Spine", 1, 1.0), ("Cape", 1, 0.2)],
            2,
        )));
        scene.insert(SceneObject::Mesh(bound_mesh("Hair", &[("Spine", 0, 1.0)], 1)));
        scene.insert(SceneObject::Armature(Skeleton::canonical("Target")));
        scene
    }

    fn profile() -> RigProfile {
        RigProfile::from_json_str(
            "test",
            &json!({
                "name": "Test Rig",
                "detection_patterns": ["hips", "leftarm"],
                "mappings": [
                    { "source_bone": "Hips", "target_bone": " Pelvis" },
                    { "source_bone": "Spine", "target_bone": " Spine" },
                    { "source_bone": "LeftArm", "target_bone": " L UpperArm" }
                ]
            })
            .to_string(),
        )
        .unwrap()
    }

    fn request(mapping: MappingCollection, options: ConvertOptions) -> ConversionRequest {
        ConversionRequest {
            source: "Source".to_string(),
            target: "Target".to_string(),
            mapping,
            profile: None,
            options,
        }
    }

    fn resolved_mapping() -> MappingCollection {
        let mut library = RigProfileLibrary::new();
        library.register(profile()).unwrap();
        let source = source_skeleton();
        let target = Skeleton::canonical("Target");
        let detection = detect_profile(&library, &source, 0.4);
        resolve_mapping(&library, &detection, &source, &target).entries
    }

    #[test]
    fn given_profile_skeleton_when_resolving_then_three_entries_with_full_confidence() {
        let entries = resolved_mapping();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries.enabled_count(), 3);
        assert!(entries.iter().all(|entry| (entry.confidence - 1.0).abs() < 0.0001));
        assert_eq!(entries.get(2).unwrap().target_bone, " L UpperArm");
    }

    #[test]
    fn given_unrecognised_rig_when_resolving_then_mapping_starts_empty() {
        let library = RigProfileLibrary::builtin().unwrap();
        let mut source = Skeleton::new("Creature");
        source.add_bone("root_jnt", None, BoneTransform::identity()).unwrap();
        source.add_bone("tentacle_a", Some("root_jnt"), BoneTransform::identity()).unwrap();

        let detection = detect_profile(&library, &source, 0.4);
        let outcome = resolve_mapping(&library, &detection, &source, &Skeleton::canonical("Target"));

        assert!(detection.profile.is_none());
        assert!(detection.confidence < 0.4);
        assert!(outcome.entries.is_empty());
    }

    #[test]
    fn given_full_scene_when_converting_then_mesh_is_merged_and_bound_to_target() {
        let mut scene = scene();

        let report = run_conversion(
            &mut scene,
            request(resolved_mapping(), ConvertOptions::default()),
        )
        .unwrap();

        assert!(report.source_deleted);
        assert!(scene.find("Source").is_none());
        assert!(scene.find("Hair").is_none());
        assert_eq!(report.mesh_statistics.mesh_count, 2);
        assert_eq!(report.enabled_mappings, 3);
        assert_eq!(report.pruned_groups, vec!["Cape".to_string()]);

        let Some(SceneObject::Mesh(body)) = scene.find("Body") else {
            panic!("consolidated mesh missing");
        };
        assert_eq!(body.armature.as_deref(), Some("Target"));
        assert_eq!(body.vertex_count(), 3);
        assert!((body.weight(" Spine", 2) - 1.0).abs() < 0.0001);
        assert!(body.group("Hips").is_none());

        let target = scene.armature("Target").unwrap();
        let pelvis = target.find(" Pelvis").unwrap();
        let arm = target.find(" L UpperArm").unwrap();
        assert!((target.world_position(pelvis, false).unwrap() - Vector3::new(0.0, 0.9, 0.0)).norm() < 0.0001);
        assert!((target.world_position(arm, false).unwrap() - Vector3::new(0.2, 1.4, 0.0)).norm() < 0.0001);
        assert_eq!(report.primary_drivers.len(), 3);
    }

    #[test]
    fn given_no_enabled_entries_when_converting_then_abort_leaves_scene_untouched() {
        let mut scene = scene();
        let before = scene.clone();
        let mut mapping = resolved_mapping();
        mapping.invert();

        let result = run_conversion(&mut scene, request(mapping, ConvertOptions::default()));

        assert!(matches!(result, Err(RetargetError::ConversionAbort(_))));
        assert_eq!(scene, before);
    }

    #[test]
    fn given_source_without_meshes_when_converting_then_conversion_aborts() {
        let mut scene = Scene::new();
        scene.insert(SceneObject::Armature(source_skeleton()));
        scene.insert(SceneObject::Armature(Skeleton::canonical("Target")));

        let result = run_conversion(
            &mut scene,
            request(resolved_mapping(), ConvertOptions::default()),
        );

        assert!(matches!(result, Err(RetargetError::ConversionAbort(_))));
    }

    #[test]
    fn given_mesh_named_as_target_when_converting_then_validation_error_is_returned() {
        let mut scene = scene();
        scene.insert(SceneObject::Empty {
            name: "Rig".to_string(),
        });
        let mut request = request(resolved_mapping(), ConvertOptions::default());
        request.target = "Rig".to_string();

        let result = run_conversion(&mut scene, request);

        assert!(matches!(result, Err(RetargetError::Validation(_))));
    }

    fn degenerate_target_scene() -> Scene {
        let mut target = Skeleton::new("Target");
        let mut collapsed = offset(0.0, 1.0, 0.0);
        collapsed.scale = [0.0, 0.0, 0.0];
        target.add_bone(" Pelvis", None, collapsed).unwrap();
        target.add_bone(" Spine", Some(" Pelvis"), offset(0.0, 0.1, 0.0)).unwrap();

        let mut scene = Scene::new();
        scene.insert(SceneObject::Armature(source_skeleton()));
        scene.insert(SceneObject::Mesh(bound_mesh("Body", &[("Spine", 0, 1.0)], 1)));
        scene.insert(SceneObject::Armature(target));
        scene
    }

    fn spine_only_mapping() -> MappingCollection {
        let mut mapping = MappingCollection::new();
        mapping.add_manual("Spine", " Spine");
        mapping
    }

    #[test]
    fn given_bake_failure_with_rollback_when_converting_then_scene_is_restored() {
        let mut scene = degenerate_target_scene();
        let before = scene.clone();

        let result = run_conversion(
            &mut scene,
            request(spine_only_mapping(), ConvertOptions::default()),
        );

        assert!(matches!(result, Err(RetargetError::BakeFailure(_))));
        assert_eq!(scene, before);
    }

    #[test]
    fn given_bake_failure_without_rollback_when_converting_then_partial_state_is_kept() {
        let mut scene = degenerate_target_scene();
        let options = ConvertOptions {
            rollback_on_failure: false,
            ..ConvertOptions::default()
        };

        let result = run_conversion(&mut scene, request(spine_only_mapping(), options));

        assert!(result.is_err());
        assert!(scene.find("Source").is_some());
        let Some(SceneObject::Mesh(body)) = scene.find("Body") else {
            panic!("mesh missing");
        };
        assert!(body.group(" Spine").is_some());
        assert!(body.group("Spine").is_none());
    }

    #[test]
    fn given_report_when_writing_checklist_then_issues_are_listed() {
        let report = ConversionReport {
            source_armature: "Source".to_string(),
            target_armature: "Target".to_string(),
            issues: vec![ValidationIssue::warning("MAPPING_INVALID", "1 entry disabled")],
            ..ConversionReport::default()
        };
        let path = std::env::temp_dir().join(format!("rigmap-checklist-{}.md", std::process::id()));

        write_final_validation_checklist(
            &path,
            Path::new("scene.json"),
            Path::new("out.json"),
            &report,
        )
        .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(content.contains("`Source` -> `Target`"));
        assert!(content.contains("MAPPING_INVALID"));
    }
}

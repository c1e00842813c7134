use std::collections::HashMap;

use nalgebra::{Matrix4, Point3, Vector3};

use crate::{
    error::RetargetError,
    scene::{BoneId, Mesh, Skeleton},
    transform::{
        BoneTransform, blend_skin_matrices, matrix_translation, skin_matrix, transform_position,
    },
};

use super::skinning::source_depth;
use super::types::{BakedBone, ConvertOptions, PositionLink, ValidationIssue};

const MOVE_EPSILON: f32 = 1e-6;

// ─── Pose snapshot ────────────────────────────────────────────────────────────

/// Local pose of every bone at capture time, keyed by bone name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseSnapshot {
    transforms: Vec<(String, BoneTransform)>,
}

impl PoseSnapshot {
    pub fn capture(skeleton: &Skeleton) -> Self {
        Self {
            transforms: skeleton
                .bones()
                .iter()
                .map(|bone| (bone.name.clone(), bone.pose))
                .collect(),
        }
    }

    /// Write the captured pose back; returns how many bones were restored.
    pub fn restore(&self, skeleton: &mut Skeleton) -> usize {
        let mut restored = 0;
        for (name, pose) in &self.transforms {
            let Some(id) = skeleton.find(name) else {
                continue;
            };
            if let Some(bone) = skeleton.bone_mut(id) {
                bone.pose = *pose;
                restored += 1;
            }
        }
        restored
    }

    pub fn get(&self, name: &str) -> Option<&BoneTransform> {
        self.transforms
            .iter()
            .find(|(bone, _)| bone == name)
            .map(|(_, pose)| pose)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

// ─── Driver selection ─────────────────────────────────────────────────────────

/// Shallowest resolvable source bone of a group; ties keep mapping order.
pub fn select_primary_driver(source: &Skeleton, sources: &[String]) -> Option<(String, usize)> {
    let mut best: Option<(String, usize)> = None;
    for name in sources {
        let depth = source_depth(source, name);
        if depth == usize::MAX {
            continue;
        }
        if best.as_ref().is_none_or(|(_, best_depth)| depth < *best_depth) {
            best = Some((name.clone(), depth));
        }
    }
    best
}

fn resolve_bone(skeleton: &Skeleton, name: &str) -> Option<BoneId> {
    skeleton
        .find(name)
        .or_else(|| super::normalize::find_bone_flexible(skeleton, name))
}

// ─── State machine ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    Capture,
    ApplyToMesh,
    Bind,
    Bake,
    Cleanup,
    Done,
}

impl TransferState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferState::Capture => "capture",
            TransferState::ApplyToMesh => "apply_to_mesh",
            TransferState::Bind => "bind",
            TransferState::Bake => "bake",
            TransferState::Cleanup => "cleanup",
            TransferState::Done => "done",
        }
    }
}

/// One pose transfer run: capture → apply_to_mesh → bind → bake → cleanup.
///
/// Owns the snapshot and the transient position links; both are dropped in
/// `cleanup`.
#[derive(Debug, Clone)]
pub struct PoseTransfer {
    state: TransferState,
    snapshot: Option<PoseSnapshot>,
    links: Vec<PositionLink>,
    issues: Vec<ValidationIssue>,
}

impl Default for PoseTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseTransfer {
    pub fn new() -> Self {
        Self {
            state: TransferState::Capture,
            snapshot: None,
            links: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn links(&self) -> &[PositionLink] {
        &self.links
    }

    pub fn snapshot(&self) -> Option<&PoseSnapshot> {
        self.snapshot.as_ref()
    }

    /// Drain the non-fatal diagnostics collected so far.
    pub fn take_issues(&mut self) -> Vec<ValidationIssue> {
        std::mem::take(&mut self.issues)
    }

    fn expect_state(
        &self,
        expected: TransferState,
        attempted: TransferState,
    ) -> Result<(), RetargetError> {
        if self.state != expected {
            return Err(RetargetError::StageOrder {
                attempted: attempted.as_str(),
                current: self.state.as_str(),
            });
        }
        Ok(())
    }

    /// Record the source's current local pose.
    ///
    /// An empty skeleton is not fatal: the run continues with an identity pose.
    pub fn capture(&mut self, source: &Skeleton) -> Result<(), RetargetError> {
        self.expect_state(TransferState::Capture, TransferState::Capture)?;

        let snapshot = PoseSnapshot::capture(source);
        if snapshot.is_empty() {
            self.issues.push(ValidationIssue::warning(
                "POSE_CAPTURE_EMPTY",
                format!(
                    "'{}' has no posable bones; continuing with identity pose",
                    source.name()
                ),
            ));
            crate::log_warn!("Pose capture on '{}' found no bones", source.name());
        } else {
            crate::log_debug!("Captured pose of {} bone(s)", snapshot.len());
        }

        self.snapshot = Some(snapshot);
        self.state = TransferState::ApplyToMesh;
        Ok(())
    }

    /// Bake the posed deformation into the mesh's base geometry.
    ///
    /// Every target group is skinned by its primary driver
    /// (`posed_world × rest_world⁻¹`), weights normalized per vertex. The source
    /// is then reset to rest and the captured pose is put back, so `bake` reads
    /// the same pose the mesh was deformed with. Returns the number of vertices
    /// that carried weight.
    pub fn apply_to_mesh(
        &mut self,
        source: &mut Skeleton,
        mesh: &mut Mesh,
        groups: &[(String, Vec<String>)],
    ) -> Result<usize, RetargetError> {
        self.expect_state(TransferState::ApplyToMesh, TransferState::ApplyToMesh)?;

        let rest = source.rest_world_matrices();
        let posed = source.posed_world_matrices();

        let mut group_skins: HashMap<&str, Matrix4<f32>> = HashMap::new();
        for (target, sources) in groups {
            let Some((driver, _)) = select_primary_driver(source, sources) else {
                continue;
            };
            let Some(id) = resolve_bone(source, &driver) else {
                continue;
            };
            match skin_matrix(&posed[id], &rest[id]) {
                Some(matrix) => {
                    group_skins.insert(target.as_str(), matrix);
                }
                None => self.issues.push(ValidationIssue::warning(
                    "DRIVER_UNRESOLVED",
                    format!("rest matrix of '{}' is singular; '{}' left undeformed", driver, target),
                )),
            }
        }

        let mut influences: Vec<Vec<(f32, Matrix4<f32>)>> = vec![Vec::new(); mesh.vertex_count()];
        for group in &mesh.vertex_groups {
            let Some(matrix) = group_skins.get(group.name.as_str()) else {
                continue;
            };
            for (vertex, weight) in &group.weights {
                if let Some(slot) = influences.get_mut(*vertex as usize) {
                    if *weight > 0.0 {
                        slot.push((*weight, *matrix));
                    }
                }
            }
        }

        let mut deformed = 0;
        for (position, vertex_influences) in mesh.positions.iter_mut().zip(&influences) {
            if vertex_influences.is_empty() {
                continue;
            }
            *position = transform_position(&blend_skin_matrices(vertex_influences), *position);
            deformed += 1;
        }

        source.reset_pose();
        if let Some(snapshot) = &self.snapshot {
            snapshot.restore(source);
        }

        crate::log_info!(
            "Applied pose of '{}' to {} vertex(es) of '{}'",
            source.name(),
            deformed,
            mesh.name
        );
        self.state = TransferState::Bind;
        Ok(deformed)
    }

    /// Link every target bone to the shallowest source bone of its group.
    ///
    /// Fails with `BakeFailure` when no link can be established.
    pub fn bind(
        &mut self,
        source: &Skeleton,
        target: &Skeleton,
        groups: &[(String, Vec<String>)],
    ) -> Result<&[PositionLink], RetargetError> {
        self.expect_state(TransferState::Bind, TransferState::Bind)?;

        let mut links = Vec::new();
        for (target_bone, sources) in groups {
            if target.find(target_bone).is_none() {
                self.issues.push(ValidationIssue::warning(
                    "DRIVER_UNRESOLVED",
                    format!("target bone '{}' missing from '{}'", target_bone, target.name()),
                ));
                continue;
            }
            let Some((driver_bone, driver_depth)) = select_primary_driver(source, sources) else {
                self.issues.push(ValidationIssue::warning(
                    "DRIVER_UNRESOLVED",
                    format!(
                        "none of [{}] exists in '{}'; '{}' keeps its rest position",
                        sources.join(", "),
                        source.name(),
                        target_bone
                    ),
                ));
                continue;
            };
            links.push(PositionLink {
                target_bone: target_bone.clone(),
                driver_bone,
                driver_depth,
            });
        }

        if links.is_empty() {
            return Err(RetargetError::BakeFailure(format!(
                "no primary driver could be established between '{}' and '{}'",
                source.name(),
                target.name()
            )));
        }

        crate::log_debug!("Bound {} target bone(s)", links.len());
        self.links = links;
        self.state = TransferState::Bake;
        Ok(&self.links)
    }

    /// Commit linked positions into the target's rest pose.
    ///
    /// All driver positions are evaluated before any target bone moves; bones are
    /// then rewritten parent-first so children see their parent's new rest.
    pub fn bake(
        &mut self,
        source: &Skeleton,
        target: &mut Skeleton,
        options: &ConvertOptions,
    ) -> Result<Vec<BakedBone>, RetargetError> {
        self.expect_state(TransferState::Bake, TransferState::Bake)?;

        let driver_worlds = source.posed_world_matrices();
        let mut desired: HashMap<BoneId, Vector3<f32>> = HashMap::new();
        for link in &self.links {
            let (Some(target_id), Some(driver_id)) = (
                target.find(&link.target_bone),
                resolve_bone(source, &link.driver_bone),
            ) else {
                continue;
            };
            desired.insert(target_id, matrix_translation(&driver_worlds[driver_id]));
        }

        let before: Vec<Vector3<f32>> = target
            .rest_world_matrices()
            .iter()
            .map(matrix_translation)
            .collect();

        let mut worlds = vec![Matrix4::<f32>::identity(); target.len()];
        for id in target.topological_order() {
            let parent_world = target
                .bone(id)
                .and_then(|bone| bone.parent)
                .map(|parent| worlds[parent])
                .unwrap_or_else(Matrix4::identity);

            if let Some(position) = desired.get(&id) {
                let inverse = parent_world.try_inverse().ok_or_else(|| {
                    RetargetError::BakeFailure(format!(
                        "parent transform of '{}' is not invertible",
                        target.bone(id).map(|bone| bone.name.as_str()).unwrap_or("?")
                    ))
                })?;
                let local = inverse.transform_point(&Point3::from(*position));
                if let Some(bone) = target.bone_mut(id) {
                    bone.rest.set_translation(local.coords);
                }
            }

            let local_matrix = target
                .bone(id)
                .map(|bone| bone.rest.to_matrix())
                .unwrap_or_else(Matrix4::identity);
            worlds[id] = parent_world * local_matrix;
        }

        apply_limb_spacing(target, options.arm_spacing, options.leg_spacing);

        let after = target.rest_world_matrices();
        let baked: Vec<BakedBone> = target
            .bones()
            .iter()
            .enumerate()
            .filter_map(|(id, bone)| {
                let to = matrix_translation(&after[id]);
                let from = before[id];
                ((to - from).norm() > MOVE_EPSILON).then(|| BakedBone {
                    name: bone.name.clone(),
                    from: [from.x, from.y, from.z],
                    to: [to.x, to.y, to.z],
                })
            })
            .collect();

        crate::log_info!(
            "Baked {} link(s) into '{}' ({} bone(s) moved)",
            desired.len(),
            target.name(),
            baked.len()
        );
        self.state = TransferState::Cleanup;
        Ok(baked)
    }

    /// Drop the transient links and snapshot and bind the mesh to the target.
    ///
    /// Returns the links that were active, for reporting.
    pub fn cleanup(
        &mut self,
        mesh: Option<&mut Mesh>,
        target: &Skeleton,
    ) -> Result<Vec<PositionLink>, RetargetError> {
        self.expect_state(TransferState::Cleanup, TransferState::Cleanup)?;

        if let Some(mesh) = mesh {
            mesh.armature = Some(target.name().to_string());
        }
        self.snapshot = None;
        self.state = TransferState::Done;
        Ok(std::mem::take(&mut self.links))
    }
}

/// Push clavicle (or upper arm) and thigh chains outward along ±X in world space.
fn apply_limb_spacing(target: &mut Skeleton, arm_spacing: f32, leg_spacing: f32) {
    let chains: [(&[&str], f32, f32); 4] = [
        (&[" L Clavicle", " L UpperArm"], arm_spacing, 1.0),
        (&[" R Clavicle", " R UpperArm"], arm_spacing, -1.0),
        (&[" L Thigh"], leg_spacing, 1.0),
        (&[" R Thigh"], leg_spacing, -1.0),
    ];

    for (candidates, spacing, side) in chains {
        if spacing == 0.0 {
            continue;
        }
        let Some(id) = candidates.iter().find_map(|name| target.find(name)) else {
            continue;
        };

        let worlds = target.rest_world_matrices();
        let parent_world = target
            .bone(id)
            .and_then(|bone| bone.parent)
            .map(|parent| worlds[parent])
            .unwrap_or_else(Matrix4::identity);
        let Some(inverse) = parent_world.try_inverse() else {
            continue;
        };

        let local_delta = inverse.transform_vector(&Vector3::new(spacing * side, 0.0, 0.0));
        if let Some(bone) = target.bone_mut(id) {
            let translation = bone.rest.translation_vector() + local_delta;
            bone.rest.set_translation(translation);
        }
    }
}

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::RetargetError,
    retarget::types::TARGET_HIERARCHY,
    transform::{BoneTransform, compose_world_matrices, matrix_translation},
};

/// Index of a bone inside its skeleton arena.
pub type BoneId = usize;

// ─── Skeleton ─────────────────────────────────────────────────────────────────

/// One node of a skeleton. `pose` is a local delta applied on top of `rest`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub name: String,
    pub parent: Option<BoneId>,
    pub children: Vec<BoneId>,
    pub rest: BoneTransform,
    pub pose: BoneTransform,
}

/// Rooted bone tree stored as an arena.
///
/// Parents always precede their children, so arena order is a valid
/// topological order and depth queries are plain parent walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SkeletonFile", into = "SkeletonFile")]
pub struct Skeleton {
    name: String,
    bones: Vec<Bone>,
    name_index: HashMap<String, BoneId>,
}

impl Skeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bones: Vec::new(),
            name_index: HashMap::new(),
        }
    }

    /// Build the canonical 32-bone target skeleton with its default rest offsets.
    pub fn canonical(name: impl Into<String>) -> Self {
        let mut skeleton = Self::new(name);
        for (bone_name, parent, offset) in TARGET_HIERARCHY {
            let parent_id = parent.and_then(|parent| skeleton.find(parent));
            skeleton.push_bone(
                bone_name.to_string(),
                parent_id,
                BoneTransform::from_translation(Vector3::new(offset[0], offset[1], offset[2])),
            );
        }
        skeleton
    }

    /// Append a bone under `parent` (or as the root when `None`).
    ///
    /// Names are unique and whitespace-significant; a second root is rejected.
    pub fn add_bone(
        &mut self,
        name: &str,
        parent: Option<&str>,
        rest: BoneTransform,
    ) -> Result<BoneId, RetargetError> {
        if self.name_index.contains_key(name) {
            return Err(RetargetError::Validation(format!(
                "skeleton '{}' already contains a bone named '{}'",
                self.name, name
            )));
        }

        let parent_id = match parent {
            Some(parent_name) => Some(self.find(parent_name).ok_or_else(|| {
                RetargetError::Validation(format!(
                    "parent bone '{}' of '{}' not found in skeleton '{}'",
                    parent_name, name, self.name
                ))
            })?),
            None => {
                if let Some(root) = self.root() {
                    return Err(RetargetError::Validation(format!(
                        "skeleton '{}' already has root '{}'; '{}' would be a second root",
                        self.name, self.bones[root].name, name
                    )));
                }
                None
            }
        };

        Ok(self.push_bone(name.to_string(), parent_id, rest))
    }

    fn push_bone(&mut self, name: String, parent: Option<BoneId>, rest: BoneTransform) -> BoneId {
        let id = self.bones.len();
        if let Some(parent_id) = parent {
            self.bones[parent_id].children.push(id);
        }
        self.name_index.insert(name.clone(), id);
        self.bones.push(Bone {
            name,
            parent,
            children: Vec::new(),
            rest,
            pose: BoneTransform::identity(),
        });
        id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id)
    }

    pub fn bone_mut(&mut self, id: BoneId) -> Option<&mut Bone> {
        self.bones.get_mut(id)
    }

    /// Exact name lookup.
    pub fn find(&self, name: &str) -> Option<BoneId> {
        self.name_index.get(name).copied()
    }

    pub fn root(&self) -> Option<BoneId> {
        self.bones.iter().position(|bone| bone.parent.is_none())
    }

    /// Distance from the root (root = 0).
    pub fn depth(&self, id: BoneId) -> usize {
        let mut depth = 0;
        let mut current = self.bones.get(id).and_then(|bone| bone.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.bones.get(parent).and_then(|bone| bone.parent);
        }
        depth
    }

    pub fn depth_of(&self, name: &str) -> Option<usize> {
        self.find(name).map(|id| self.depth(id))
    }

    pub fn bone_names(&self) -> Vec<String> {
        self.bones.iter().map(|bone| bone.name.clone()).collect()
    }

    /// Bone ids with every parent before its children.
    pub fn topological_order(&self) -> Vec<BoneId> {
        (0..self.bones.len()).collect()
    }

    fn parents(&self) -> Vec<Option<usize>> {
        self.bones.iter().map(|bone| bone.parent).collect()
    }

    pub fn rest_world_matrices(&self) -> Vec<Matrix4<f32>> {
        let locals: Vec<Matrix4<f32>> = self.bones.iter().map(|bone| bone.rest.to_matrix()).collect();
        compose_world_matrices(&locals, &self.parents())
    }

    pub fn posed_world_matrices(&self) -> Vec<Matrix4<f32>> {
        let locals: Vec<Matrix4<f32>> = self
            .bones
            .iter()
            .map(|bone| bone.rest.to_matrix() * bone.pose.to_matrix())
            .collect();
        compose_world_matrices(&locals, &self.parents())
    }

    /// World-space head position of a bone, posed or at rest.
    pub fn world_position(&self, id: BoneId, posed: bool) -> Option<Vector3<f32>> {
        let worlds = if posed {
            self.posed_world_matrices()
        } else {
            self.rest_world_matrices()
        };
        worlds.get(id).map(matrix_translation)
    }

    pub fn reset_pose(&mut self) {
        for bone in &mut self.bones {
            bone.pose = BoneTransform::identity();
        }
    }
}

/// On-disk form of a skeleton: bones reference parents by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkeletonFile {
    name: String,
    #[serde(default)]
    bones: Vec<BoneRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoneRecord {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    rest: BoneTransform,
    #[serde(default)]
    pose: BoneTransform,
}

impl TryFrom<SkeletonFile> for Skeleton {
    type Error = RetargetError;

    fn try_from(file: SkeletonFile) -> Result<Self, Self::Error> {
        let mut skeleton = Skeleton::new(file.name);
        let mut pending = file.bones;

        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();

            for record in pending {
                let ready = match &record.parent {
                    None => true,
                    Some(parent) => skeleton.find(parent).is_some(),
                };
                if !ready {
                    deferred.push(record);
                    continue;
                }
                let id = skeleton.add_bone(&record.name, record.parent.as_deref(), record.rest)?;
                skeleton.bones[id].pose = record.pose;
            }

            if deferred.len() == before {
                let names: Vec<&str> = deferred.iter().map(|record| record.name.as_str()).collect();
                return Err(RetargetError::Validation(format!(
                    "skeleton '{}' has bones with missing parents or cycles: {}",
                    skeleton.name,
                    names.join(", ")
                )));
            }
            pending = deferred;
        }

        Ok(skeleton)
    }
}

impl From<Skeleton> for SkeletonFile {
    fn from(skeleton: Skeleton) -> Self {
        let parent_names: Vec<Option<String>> = skeleton
            .bones
            .iter()
            .map(|bone| bone.parent.map(|parent| skeleton.bones[parent].name.clone()))
            .collect();

        let bones = skeleton
            .bones
            .into_iter()
            .zip(parent_names)
            .map(|(bone, parent)| BoneRecord {
                name: bone.name,
                parent,
                rest: bone.rest,
                pose: bone.pose,
            })
            .collect();

        SkeletonFile {
            name: skeleton.name,
            bones,
        }
    }
}

// ─── Mesh ─────────────────────────────────────────────────────────────────────

/// Named sparse per-vertex weight map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexGroup {
    pub name: String,
    #[serde(default, with = "weight_pairs")]
    pub weights: BTreeMap<u32, f32>,
}

// Weights are stored as `[vertex, weight]` pairs; integer map keys do not
// survive the buffering done for the tagged `SceneObject` enum.
mod weight_pairs {
    use super::*;

    pub fn serialize<S: Serializer>(
        weights: &BTreeMap<u32, f32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(weights.iter().map(|(vertex, weight)| (*vertex, *weight)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<u32, f32>, D::Error> {
        let pairs = Vec::<(u32, f32)>::deserialize(deserializer)?;
        let mut weights = BTreeMap::new();
        for (vertex, weight) in pairs {
            *weights.entry(vertex).or_insert(0.0) += weight;
        }
        Ok(weights)
    }
}

impl VertexGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weights: BTreeMap::new(),
        }
    }

    /// Vertices with a non-zero weight.
    pub fn influenced_vertices(&self) -> usize {
        self.weights.values().filter(|weight| **weight > 0.0).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    /// Armature object deforming this mesh.
    #[serde(default)]
    pub armature: Option<String>,
    #[serde(default)]
    pub positions: Vec<[f32; 3]>,
    #[serde(default)]
    pub polygons: Vec<Vec<u32>>,
    #[serde(default)]
    pub vertex_groups: Vec<VertexGroup>,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn group(&self, name: &str) -> Option<&VertexGroup> {
        self.vertex_groups.iter().find(|group| group.name == name)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut VertexGroup> {
        self.vertex_groups.iter_mut().find(|group| group.name == name)
    }

    /// Return the named group, creating an empty one when absent.
    pub fn ensure_group(&mut self, name: &str) -> &mut VertexGroup {
        let index = match self.vertex_groups.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.vertex_groups.push(VertexGroup::new(name));
                self.vertex_groups.len() - 1
            }
        };
        &mut self.vertex_groups[index]
    }

    pub fn remove_group(&mut self, name: &str) -> Option<VertexGroup> {
        let index = self.vertex_groups.iter().position(|group| group.name == name)?;
        Some(self.vertex_groups.remove(index))
    }

    /// Add `weight` to a vertex in the named group (creating the group if needed).
    pub fn add_weight(&mut self, group: &str, vertex: u32, weight: f32) {
        *self.ensure_group(group).weights.entry(vertex).or_insert(0.0) += weight;
    }

    pub fn weight(&self, group: &str, vertex: u32) -> f32 {
        self.group(group)
            .and_then(|group| group.weights.get(&vertex).copied())
            .unwrap_or(0.0)
    }
}

// ─── Scene ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneObject {
    Armature(Skeleton),
    Mesh(Mesh),
    Empty { name: String },
}

impl SceneObject {
    pub fn name(&self) -> &str {
        match self {
            SceneObject::Armature(skeleton) => skeleton.name(),
            SceneObject::Mesh(mesh) => &mesh.name,
            SceneObject::Empty { name } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Armature(_) => "armature",
            SceneObject::Mesh(_) => "mesh",
            SceneObject::Empty { .. } => "empty",
        }
    }
}

/// The objects a conversion run may read and mutate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.objects.iter().position(|object| object.name() == name)
    }

    /// Look up an armature, failing when the object is missing or of another type.
    pub fn armature(&self, name: &str) -> Result<&Skeleton, RetargetError> {
        match self.find(name) {
            Some(SceneObject::Armature(skeleton)) => Ok(skeleton),
            Some(other) => Err(RetargetError::Validation(format!(
                "object '{}' is a {}, not an armature",
                name,
                other.kind()
            ))),
            None => Err(RetargetError::Validation(format!(
                "armature '{}' not found in scene",
                name
            ))),
        }
    }

    pub fn armature_names(&self) -> Vec<String> {
        self.objects
            .iter()
            .filter_map(|object| match object {
                SceneObject::Armature(skeleton) => Some(skeleton.name().to_string()),
                _ => None,
            })
            .collect()
    }

    /// Meshes deformed by the named armature, in scene order.
    pub fn meshes_bound_to(&self, armature: &str) -> Vec<&Mesh> {
        self.objects
            .iter()
            .filter_map(|object| match object {
                SceneObject::Mesh(mesh) if mesh.armature.as_deref() == Some(armature) => {
                    Some(mesh)
                }
                _ => None,
            })
            .collect()
    }

    /// Add an object, replacing any existing object with the same name in place.
    pub fn insert(&mut self, object: SceneObject) {
        match self.position(object.name()) {
            Some(index) => self.objects[index] = object,
            None => self.objects.push(object),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        let index = self.position(name)?;
        Some(self.objects.remove(index))
    }
}

/// Load a scene from a JSON file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to load scene: {}", path.display()))?;
    let scene: Scene = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse scene JSON: {}", path.display()))?;
    Ok(scene)
}

/// Save a scene to a JSON file.
pub fn save_scene(path: &Path, scene: &Scene) -> Result<()> {
    let content =
        serde_json::to_string_pretty(scene).context("failed to serialize scene as JSON")?;
    fs::write(path, content)
        .with_context(|| format!("failed to save scene: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offset(x: f32, y: f32, z: f32) -> BoneTransform {
        BoneTransform::from_translation(Vector3::new(x, y, z))
    }

    #[test]
    fn given_chain_when_querying_depth_then_root_is_zero() {
        let mut skeleton = Skeleton::new("Armature");
        skeleton.add_bone("Hips", None, offset(0.0, 1.0, 0.0)).unwrap();
        skeleton.add_bone("Spine", Some("Hips"), offset(0.0, 0.1, 0.0)).unwrap();
        skeleton.add_bone("Chest", Some("Spine"), offset(0.0, 0.1, 0.0)).unwrap();

        assert_eq!(skeleton.depth_of("Hips"), Some(0));
        assert_eq!(skeleton.depth_of("Chest"), Some(2));
        assert_eq!(skeleton.depth_of("Missing"), None);
    }

    #[test]
    fn given_existing_root_when_adding_second_root_then_validation_fails() {
        let mut skeleton = Skeleton::new("Armature");
        skeleton.add_bone("Hips", None, BoneTransform::identity()).unwrap();

        let result = skeleton.add_bone("Other", None, BoneTransform::identity());
        assert!(matches!(result, Err(RetargetError::Validation(_))));
    }

    #[test]
    fn given_whitespace_variants_when_adding_then_names_stay_distinct() {
        let mut skeleton = Skeleton::new("Armature");
        skeleton.add_bone(" Pelvis", None, BoneTransform::identity()).unwrap();
        skeleton
            .add_bone("Pelvis", Some(" Pelvis"), BoneTransform::identity())
            .unwrap();

        assert_ne!(skeleton.find(" Pelvis"), skeleton.find("Pelvis"));
        assert!(skeleton.add_bone("Pelvis", Some(" Pelvis"), BoneTransform::identity()).is_err());
    }

    #[test]
    fn given_canonical_skeleton_when_built_then_hand_sits_at_arm_tip() {
        let skeleton = Skeleton::canonical("Target");
        assert_eq!(skeleton.len(), 32);

        let hand = skeleton.find(" L Hand").expect("hand exists");
        let position = skeleton.world_position(hand, false).expect("position");
        // clavicle 0.03 + upper arm 0.15 + forearm 0.28 + hand 0.25
        assert!((position.x - 0.71).abs() < 0.0001);
        assert!((position.y - 1.5).abs() < 0.0001);

        let right = skeleton.find(" R Hand").expect("hand exists");
        let mirrored = skeleton.world_position(right, false).expect("position");
        assert!((mirrored.x + 0.71).abs() < 0.0001);
    }

    #[test]
    fn given_pose_when_computing_posed_world_then_child_follows_parent() {
        let mut skeleton = Skeleton::new("Armature");
        let hips = skeleton.add_bone("Hips", None, offset(0.0, 1.0, 0.0)).unwrap();
        let spine = skeleton.add_bone("Spine", Some("Hips"), offset(0.0, 0.5, 0.0)).unwrap();
        skeleton.bone_mut(hips).unwrap().pose = offset(0.2, 0.0, 0.0);

        let posed = skeleton.world_position(spine, true).unwrap();
        let rest = skeleton.world_position(spine, false).unwrap();

        assert!((posed - Vector3::new(0.2, 1.5, 0.0)).norm() < 0.0001);
        assert!((rest - Vector3::new(0.0, 1.5, 0.0)).norm() < 0.0001);

        skeleton.reset_pose();
        let reset = skeleton.world_position(spine, true).unwrap();
        assert!((reset - rest).norm() < 0.0001);
    }

    #[test]
    fn given_bones_listed_child_first_when_deserializing_then_hierarchy_is_rebuilt() {
        let value = json!({
            "type": "armature",
            "name": "Armature",
            "bones": [
                { "name": "Spine", "parent": "Hips" },
                { "name": "Hips", "rest": { "translation": [0.0, 1.0, 0.0] } }
            ]
        });

        let object: SceneObject = serde_json::from_value(value).expect("valid armature");
        let SceneObject::Armature(skeleton) = object else {
            panic!("expected armature");
        };
        assert_eq!(skeleton.depth_of("Spine"), Some(1));
        assert_eq!(skeleton.root(), skeleton.find("Hips"));
    }

    #[test]
    fn given_cyclic_bones_when_deserializing_then_error_is_returned() {
        let value = json!({
            "name": "Armature",
            "bones": [
                { "name": "A", "parent": "B" },
                { "name": "B", "parent": "A" }
            ]
        });

        let result: Result<Skeleton, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn given_scene_when_round_tripping_json_then_objects_are_preserved() {
        let mut scene = Scene::new();
        scene.insert(SceneObject::Armature(Skeleton::canonical("Target")));
        let mut mesh = Mesh::new("Body");
        mesh.armature = Some("Target".to_string());
        mesh.positions = vec![[0.0, 1.0, 0.0]];
        mesh.add_weight(" Pelvis", 0, 1.0);
        scene.insert(SceneObject::Mesh(mesh));
        scene.insert(SceneObject::Empty {
            name: "Light".to_string(),
        });

        let text = serde_json::to_string(&scene).unwrap();
        let restored: Scene = serde_json::from_str(&text).unwrap();

        assert_eq!(restored, scene);
        assert_eq!(restored.meshes_bound_to("Target").len(), 1);
    }

    #[test]
    fn given_mesh_object_when_requesting_armature_then_type_error_is_reported() {
        let mut scene = Scene::new();
        scene.insert(SceneObject::Mesh(Mesh::new("Body")));

        let error = scene.armature("Body").unwrap_err();
        assert!(error.to_string().contains("not an armature"));
        assert!(scene.armature("Nope").is_err());
    }

    #[test]
    fn given_repeated_weights_when_adding_then_values_accumulate() {
        let mut mesh = Mesh::new("Body");
        mesh.add_weight("Hips", 3, 0.25);
        mesh.add_weight("Hips", 3, 0.5);

        assert!((mesh.weight("Hips", 3) - 0.75).abs() < 0.0001);
        assert_eq!(mesh.weight("Spine", 3), 0.0);
        assert!(mesh.remove_group("Hips").is_some());
        assert!(mesh.group("Hips").is_none());
    }
}

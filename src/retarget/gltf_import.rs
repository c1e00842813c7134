use std::{
    collections::{HashMap, HashSet, VecDeque},
    path::Path,
};

use anyhow::{Context, Result, bail};
use gltf::{Document, import, mesh::Mode};
use nalgebra::Matrix4;

use crate::{
    scene::{Mesh, Scene, SceneObject, Skeleton},
    transform::{BoneTransform, compose_world_matrices},
};

// ─── Node helpers ─────────────────────────────────────────────────────────────

fn node_local_matrix(node: &gltf::Node) -> Matrix4<f32> {
    let matrix = node.transform().matrix();
    Matrix4::from_fn(|row, col| matrix[col][row])
}

fn collect_parent_indices(document: &Document) -> Vec<Option<usize>> {
    let mut parents = vec![None; document.nodes().count()];
    for node in document.nodes() {
        for child in node.children() {
            if let Some(slot) = parents.get_mut(child.index()) {
                *slot = Some(node.index());
            }
        }
    }
    parents
}

fn unique_name(base: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut counter = 1;
    while used.contains(&candidate) {
        candidate = format!("{base}.{counter:03}");
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Nearest ancestor of `node` that is itself a joint of the skin.
fn joint_ancestor(
    node: usize,
    parents: &[Option<usize>],
    joints: &HashSet<usize>,
) -> Option<usize> {
    let mut current = parents.get(node).copied().flatten();
    let mut steps = 0;
    while let Some(candidate) = current {
        if joints.contains(&candidate) {
            return Some(candidate);
        }
        steps += 1;
        if steps > parents.len() {
            return None;
        }
        current = parents.get(candidate).copied().flatten();
    }
    None
}

// ─── Skins ────────────────────────────────────────────────────────────────────

struct ImportedSkin {
    skeleton: Skeleton,
    /// Bone name per joint slot, in `skin.joints` order.
    slot_names: Vec<String>,
}

fn import_skin(
    skin: &gltf::Skin,
    node_names: &[String],
    parents: &[Option<usize>],
    worlds: &[Matrix4<f32>],
    used_objects: &mut HashSet<String>,
) -> Result<ImportedSkin> {
    let joints: Vec<usize> = skin.joints().map(|joint| joint.index()).collect();
    let joint_set: HashSet<usize> = joints.iter().copied().collect();
    let joint_parents: Vec<Option<usize>> = joints
        .iter()
        .map(|joint| joint_ancestor(*joint, parents, &joint_set))
        .collect();

    let mut roots: Vec<usize> = joints
        .iter()
        .zip(&joint_parents)
        .filter(|(_, parent)| parent.is_none())
        .map(|(joint, _)| *joint)
        .collect();
    roots.dedup();
    let root = match roots.as_slice() {
        [root] => *root,
        [] => bail!("skin {} has no root joint", skin.index()),
        many => bail!(
            "skin {} has {} root joints ({}); multi-root skeletons are not supported",
            skin.index(),
            many.len(),
            many.iter()
                .map(|node| node_names[*node].as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };

    let armature_name = unique_name(skin.name().unwrap_or("Armature"), used_objects);
    let mut skeleton = Skeleton::new(armature_name);
    let mut bone_names: HashMap<usize, String> = HashMap::new();
    let mut used_bones = HashSet::new();
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if bone_names.contains_key(&node) {
            continue;
        }
        let parent = joint_ancestor(node, parents, &joint_set);
        let local = match parent {
            Some(parent) => {
                let inverse = worlds[parent].try_inverse().with_context(|| {
                    format!(
                        "world matrix of joint '{}' is not invertible",
                        node_names[parent]
                    )
                })?;
                inverse * worlds[node]
            }
            None => worlds[node],
        };

        let name = unique_name(&node_names[node], &mut used_bones);
        let parent_name = parent
            .and_then(|parent| bone_names.get(&parent))
            .map(String::as_str);
        skeleton.add_bone(&name, parent_name, BoneTransform::from_matrix(&local))?;
        bone_names.insert(node, name);

        for (child, child_parent) in joints.iter().zip(&joint_parents) {
            if *child_parent == Some(node) {
                queue.push_back(*child);
            }
        }
    }

    let slot_names = joints
        .iter()
        .map(|joint| bone_names.get(joint).cloned().unwrap_or_default())
        .collect();

    crate::log_debug!(
        "Imported skin {} as '{}' ({} bones)",
        skin.index(),
        skeleton.name(),
        skeleton.len()
    );
    Ok(ImportedSkin {
        skeleton,
        slot_names,
    })
}

// ─── Meshes ───────────────────────────────────────────────────────────────────

fn import_skinned_mesh(
    node: &gltf::Node,
    gltf_mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    skin: &ImportedSkin,
    used_objects: &mut HashSet<String>,
) -> Mesh {
    let base = node
        .name()
        .or_else(|| gltf_mesh.name())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Mesh_{}", node.index()));
    let mut mesh = Mesh::new(unique_name(&base, used_objects));
    mesh.armature = Some(skin.skeleton.name().to_string());

    for primitive in gltf_mesh.primitives() {
        let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|b| &b.0[..]));
        let Some(positions) = reader.read_positions() else {
            continue;
        };

        let offset = mesh.positions.len() as u32;
        mesh.positions.extend(positions);
        let count = mesh.positions.len() as u32 - offset;

        if primitive.mode() == Mode::Triangles {
            let indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..count).collect(),
            };
            mesh.polygons.extend(
                indices
                    .chunks_exact(3)
                    .map(|triangle| triangle.iter().map(|index| index + offset).collect()),
            );
        }

        if let (Some(joints), Some(weights)) = (reader.read_joints(0), reader.read_weights(0)) {
            for (vertex, (slots, weights)) in joints.into_u16().zip(weights.into_f32()).enumerate()
            {
                for (slot, weight) in slots.iter().zip(weights) {
                    if weight <= 0.0 {
                        continue;
                    }
                    match skin.slot_names.get(*slot as usize) {
                        Some(name) if !name.is_empty() => {
                            mesh.add_weight(name, offset + vertex as u32, weight)
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    mesh
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Read a glTF/GLB file into a scene.
///
/// Every skin becomes an armature; every skinned mesh node becomes a mesh bound
/// to that armature, with vertex groups built from `JOINTS_0`/`WEIGHTS_0`.
/// Unskinned meshes are skipped.
pub fn import_gltf_scene(path: &Path) -> Result<Scene> {
    let (document, buffers, _) =
        import(path).with_context(|| format!("failed to read glTF: {}", path.display()))?;

    let node_names: Vec<String> = document
        .nodes()
        .map(|node| {
            node.name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("node_{}", node.index()))
        })
        .collect();
    let parents = collect_parent_indices(&document);
    let locals: Vec<Matrix4<f32>> = document.nodes().map(|node| node_local_matrix(&node)).collect();
    let worlds = compose_world_matrices(&locals, &parents);

    let mut scene = Scene::new();
    let mut used_objects = HashSet::new();
    let mut skins = Vec::new();
    for skin in document.skins() {
        let imported = import_skin(&skin, &node_names, &parents, &worlds, &mut used_objects)
            .with_context(|| format!("failed to import skin {}: {}", skin.index(), path.display()))?;
        scene.insert(SceneObject::Armature(imported.skeleton.clone()));
        skins.push(imported);
    }

    for node in document.nodes() {
        let Some(gltf_mesh) = node.mesh() else {
            continue;
        };
        let Some(skin) = node.skin().and_then(|skin| skins.get(skin.index())) else {
            crate::log_debug!("Skipping unskinned mesh node '{}'", node_names[node.index()]);
            continue;
        };
        let mesh = import_skinned_mesh(&node, &gltf_mesh, &buffers, skin, &mut used_objects);
        scene.insert(SceneObject::Mesh(mesh));
    }

    crate::log_info!(
        "Imported {} armature(s) and {} object(s) from {}",
        skins.len(),
        scene.objects.len(),
        path.display()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::{fs, path::PathBuf};

    fn write_fixture(name: &str, document: Value, buffer: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rigmap-gltf-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("rig.bin"), buffer).unwrap();
        let path = dir.join("rig.gltf");
        fs::write(&path, document.to_string()).unwrap();
        path
    }

    fn skinned_buffer() -> Vec<u8> {
        let mut bytes = Vec::new();
        for position in [[0.0f32, 1.0, 0.0], [0.0, 1.2, 0.0], [0.1, 1.2, 0.0]] {
            for value in position {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&[0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0]);
        for weights in [[1.0f32, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0], [0.5, 0.5, 0.0, 0.0]] {
            for value in weights {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
        bytes
    }

    fn skinned_document(joint_children: Value) -> Value {
        json!({
            "asset": { "version": "2.0" },
            "scene": 0,
            "scenes": [{ "nodes": [0, 2] }],
            "nodes": [
                { "name": "Hips", "translation": [0.0, 1.0, 0.0], "children": joint_children },
                { "name": "Spine", "translation": [0.0, 0.2, 0.0] },
                { "name": "Body", "mesh": 0, "skin": 0 }
            ],
            "skins": [{ "name": "Rig", "joints": [0, 1] }],
            "meshes": [{
                "primitives": [{
                    "attributes": { "POSITION": 0, "JOINTS_0": 1, "WEIGHTS_0": 2 }
                }]
            }],
            "buffers": [{ "uri": "rig.bin", "byteLength": 96 }],
            "bufferViews": [
                { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
                { "buffer": 0, "byteOffset": 36, "byteLength": 12 },
                { "buffer": 0, "byteOffset": 48, "byteLength": 48 }
            ],
            "accessors": [
                {
                    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                    "min": [0.0, 1.0, 0.0], "max": [0.1, 1.2, 0.0]
                },
                { "bufferView": 1, "componentType": 5121, "count": 3, "type": "VEC4" },
                { "bufferView": 2, "componentType": 5126, "count": 3, "type": "VEC4" }
            ]
        })
    }

    #[test]
    fn given_skinned_gltf_when_importing_then_armature_and_weighted_mesh_are_created() {
        let path = write_fixture("ok", skinned_document(json!([1])), &skinned_buffer());

        let scene = import_gltf_scene(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let armature = scene.armature("Rig").unwrap();
        assert_eq!(armature.bone_names(), vec!["Hips", "Spine"]);
        let spine = armature.find("Spine").unwrap();
        assert_eq!(armature.depth(spine), 1);
        let world = armature.world_position(spine, false).unwrap();
        assert!((world.y - 1.2).abs() < 0.0001);

        let Some(SceneObject::Mesh(body)) = scene.find("Body") else {
            panic!("mesh not imported");
        };
        assert_eq!(body.armature.as_deref(), Some("Rig"));
        assert_eq!(body.vertex_count(), 3);
        assert_eq!(body.polygons, vec![vec![0, 1, 2]]);
        assert!((body.weight("Hips", 0) - 1.0).abs() < 0.0001);
        assert!((body.weight("Spine", 1) - 1.0).abs() < 0.0001);
        assert!((body.weight("Spine", 2) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn given_skin_with_two_root_joints_when_importing_then_it_is_rejected() {
        let mut document = skinned_document(json!([]));
        document["scenes"][0]["nodes"] = json!([0, 1, 2]);
        if let Some(hips) = document["nodes"][0].as_object_mut() {
            hips.remove("children");
        }
        let path = write_fixture("multi-root", document, &skinned_buffer());

        let result = import_gltf_scene(&path);
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("root joints"));
    }
}

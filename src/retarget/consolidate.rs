use serde::{Deserialize, Serialize};

use crate::scene::{Mesh, VertexGroup};

use super::types::ValidationIssue;

/// Mesh totals gathered before consolidation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshStatistics {
    pub mesh_count: usize,
    pub total_vertices: usize,
    pub total_polygons: usize,
    pub vertex_group_count: usize,
}

pub fn collect_mesh_statistics(meshes: &[Mesh]) -> MeshStatistics {
    MeshStatistics {
        mesh_count: meshes.len(),
        total_vertices: meshes.iter().map(Mesh::vertex_count).sum(),
        total_polygons: meshes.iter().map(|mesh| mesh.polygons.len()).sum(),
        vertex_group_count: meshes.iter().map(|mesh| mesh.vertex_groups.len()).sum(),
    }
}

/// Merge same-named vertex groups of one mesh by summing their weights.
///
/// Returns how many duplicate groups were folded away.
pub fn dedupe_vertex_groups(mesh: &mut Mesh) -> usize {
    let mut merged: Vec<VertexGroup> = Vec::with_capacity(mesh.vertex_groups.len());
    let mut folded = 0;

    for group in mesh.vertex_groups.drain(..) {
        match merged.iter_mut().find(|existing| existing.name == group.name) {
            Some(existing) => {
                for (vertex, weight) in group.weights {
                    *existing.weights.entry(vertex).or_insert(0.0) += weight;
                }
                folded += 1;
            }
            None => merged.push(group),
        }
    }

    mesh.vertex_groups = merged;
    folded
}

/// Merge every mesh into one object.
///
/// Vertices are appended in input order; polygon and vertex-group indices are
/// offset accordingly and groups with the same name are summed. The result
/// keeps the first mesh's name and armature binding. `None` when `meshes` is empty.
pub fn consolidate_meshes(meshes: Vec<Mesh>) -> Option<(Mesh, Vec<ValidationIssue>)> {
    let mut meshes = meshes.into_iter();
    let mut combined = meshes.next()?;
    let mut issues = Vec::new();
    let mut absorbed = Vec::new();

    for mesh in meshes {
        let offset = combined.positions.len() as u32;
        combined.positions.extend(mesh.positions);
        combined.polygons.extend(
            mesh.polygons
                .into_iter()
                .map(|polygon| polygon.into_iter().map(|index| index + offset).collect()),
        );
        for group in mesh.vertex_groups {
            let target = combined.ensure_group(&group.name);
            for (vertex, weight) in group.weights {
                *target.weights.entry(vertex + offset).or_insert(0.0) += weight;
            }
        }
        absorbed.push(mesh.name);
    }

    let folded = dedupe_vertex_groups(&mut combined);

    if !absorbed.is_empty() {
        issues.push(ValidationIssue::info(
            "MESHES_CONSOLIDATED",
            format!(
                "merged {} mesh(es) into '{}': {}",
                absorbed.len(),
                combined.name,
                absorbed.join(", ")
            ),
        ));
    }
    if folded > 0 {
        issues.push(ValidationIssue::info(
            "VERTEX_GROUPS_DEDUPED",
            format!("{} duplicate vertex group(s) summed in '{}'", folded, combined.name),
        ));
    }

    Some((combined, issues))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(name: &str, vertices: usize, groups: &[(&str, u32, f32)]) -> Mesh {
        let mut mesh = Mesh::new(name);
        mesh.armature = Some("Source".to_string());
        mesh.positions = vec![[0.0, 0.0, 0.0]; vertices];
        mesh.polygons = vec![(0..vertices as u32).collect()];
        for (group, vertex, weight) in groups {
            mesh.add_weight(group, *vertex, *weight);
        }
        mesh
    }

    #[test]
    fn given_two_meshes_when_consolidating_then_indices_are_offset_and_groups_summed() {
        let body = mesh("Body", 3, &[("Hips", 0, 1.0), ("Spine", 2, 0.5)]);
        let hair = mesh("Hair", 2, &[("Spine", 1, 0.25), ("Head", 0, 1.0)]);

        let (combined, issues) = consolidate_meshes(vec![body, hair]).unwrap();

        assert_eq!(combined.name, "Body");
        assert_eq!(combined.vertex_count(), 5);
        assert_eq!(combined.polygons[1], vec![3, 4]);
        assert!((combined.weight("Spine", 2) - 0.5).abs() < 0.0001);
        assert!((combined.weight("Spine", 4) - 0.25).abs() < 0.0001);
        assert!((combined.weight("Head", 3) - 1.0).abs() < 0.0001);
        assert_eq!(issues[0].code, "MESHES_CONSOLIDATED");
    }

    #[test]
    fn given_duplicate_group_names_when_deduping_then_weights_are_added() {
        let mut mesh = Mesh::new("Body");
        mesh.vertex_groups = vec![VertexGroup::new("Hips"), VertexGroup::new("Hips")];
        mesh.vertex_groups[0].weights.insert(0, 0.25);
        mesh.vertex_groups[1].weights.insert(0, 0.5);
        mesh.vertex_groups[1].weights.insert(1, 1.0);

        assert_eq!(dedupe_vertex_groups(&mut mesh), 1);
        assert_eq!(mesh.vertex_groups.len(), 1);
        assert!((mesh.weight("Hips", 0) - 0.75).abs() < 0.0001);
        assert!((mesh.weight("Hips", 1) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn given_no_meshes_when_consolidating_then_none_is_returned() {
        assert!(consolidate_meshes(Vec::new()).is_none());
    }

    #[test]
    fn given_meshes_when_collecting_statistics_then_totals_are_summed() {
        let stats = collect_mesh_statistics(&[
            mesh("Body", 3, &[("Hips", 0, 1.0)]),
            mesh("Hair", 2, &[]),
        ]);

        assert_eq!(stats.mesh_count, 2);
        assert_eq!(stats.total_vertices, 5);
        assert_eq!(stats.total_polygons, 2);
        assert_eq!(stats.vertex_group_count, 1);
    }
}

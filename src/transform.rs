use nalgebra::{Matrix3, Matrix4, Point3, Quaternion, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Local transform of a bone (rest or pose), stored in glTF TRS layout.
///
/// `rotation` is a quaternion in `[x, y, z, w]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoneTransform {
    #[serde(default = "zero_translation")]
    pub translation: [f32; 3],
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn zero_translation() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn identity_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for BoneTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl BoneTransform {
    pub fn identity() -> Self {
        Self {
            translation: zero_translation(),
            rotation: identity_rotation(),
            scale: unit_scale(),
        }
    }

    pub fn from_translation(translation: Vector3<f32>) -> Self {
        Self {
            translation: [translation.x, translation.y, translation.z],
            ..Self::identity()
        }
    }

    pub fn translation_vector(&self) -> Vector3<f32> {
        Vector3::new(
            self.translation[0],
            self.translation[1],
            self.translation[2],
        )
    }

    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.translation = [translation.x, translation.y, translation.z];
    }

    pub fn rotation_quaternion(&self) -> UnitQuaternion<f32> {
        let [x, y, z, w] = self.rotation;
        UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z))
    }

    pub fn set_rotation(&mut self, rotation: UnitQuaternion<f32>) {
        self.rotation = [
            rotation.coords.x,
            rotation.coords.y,
            rotation.coords.z,
            rotation.coords.w,
        ];
    }

    pub fn scale_vector(&self) -> Vector3<f32> {
        Vector3::new(self.scale[0], self.scale[1], self.scale[2])
    }

    /// Compose `T * R * S` as a homogeneous matrix.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let translation_matrix = Translation3::from(self.translation_vector()).to_homogeneous();
        let rotation_matrix = self.rotation_quaternion().to_homogeneous();
        let scale_matrix = Matrix4::new_nonuniform_scaling(&self.scale_vector());
        translation_matrix * rotation_matrix * scale_matrix
    }

    /// Decompose an affine matrix back into TRS.
    ///
    /// Mirrored bases are folded into a negative X scale so the rotation stays proper.
    pub fn from_matrix(matrix: &Matrix4<f32>) -> Self {
        let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

        let basis_x = Vector3::new(matrix[(0, 0)], matrix[(1, 0)], matrix[(2, 0)]);
        let basis_y = Vector3::new(matrix[(0, 1)], matrix[(1, 1)], matrix[(2, 1)]);
        let basis_z = Vector3::new(matrix[(0, 2)], matrix[(1, 2)], matrix[(2, 2)]);

        let mut scale_x = basis_x.norm();
        let scale_y = basis_y.norm();
        let scale_z = basis_z.norm();

        let mut rot_x = if scale_x > 1e-8 {
            basis_x / scale_x
        } else {
            Vector3::x()
        };
        let rot_y = if scale_y > 1e-8 {
            basis_y / scale_y
        } else {
            Vector3::y()
        };
        let rot_z = if scale_z > 1e-8 {
            basis_z / scale_z
        } else {
            Vector3::z()
        };

        if rot_x.cross(&rot_y).dot(&rot_z) < 0.0 {
            scale_x = -scale_x;
            rot_x = -rot_x;
        }

        let rotation = UnitQuaternion::from_matrix(&Matrix3::from_columns(&[rot_x, rot_y, rot_z]));

        let mut transform = Self::from_translation(translation);
        transform.set_rotation(rotation);
        transform.scale = [scale_x, scale_y, scale_z];
        transform
    }
}

/// Compute world matrices from local matrices and parent links.
///
/// Parents may appear after their children; every entry is resolved once.
pub fn compose_world_matrices(
    local_matrices: &[Matrix4<f32>],
    parents: &[Option<usize>],
) -> Vec<Matrix4<f32>> {
    let mut worlds = vec![Matrix4::<f32>::identity(); local_matrices.len()];
    let mut resolved = vec![false; local_matrices.len()];

    for index in 0..local_matrices.len() {
        resolve_world_matrix(index, local_matrices, parents, &mut worlds, &mut resolved, 0);
    }

    worlds
}

fn resolve_world_matrix(
    index: usize,
    local_matrices: &[Matrix4<f32>],
    parents: &[Option<usize>],
    worlds: &mut [Matrix4<f32>],
    resolved: &mut [bool],
    depth: usize,
) {
    if resolved[index] {
        return;
    }

    let parent = parents
        .get(index)
        .copied()
        .flatten()
        .filter(|parent| *parent < local_matrices.len() && depth < local_matrices.len());

    let world = if let Some(parent_index) = parent {
        resolve_world_matrix(
            parent_index,
            local_matrices,
            parents,
            worlds,
            resolved,
            depth + 1,
        );
        worlds[parent_index] * local_matrices[index]
    } else {
        local_matrices[index]
    };

    worlds[index] = world;
    resolved[index] = true;
}

/// Translation column of a homogeneous matrix.
pub fn matrix_translation(matrix: &Matrix4<f32>) -> Vector3<f32> {
    Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)])
}

/// Skinning matrix moving geometry from the rest (bind) pose to the posed state.
///
/// Returns `None` when the rest matrix is not invertible.
pub fn skin_matrix(posed_world: &Matrix4<f32>, rest_world: &Matrix4<f32>) -> Option<Matrix4<f32>> {
    rest_world.try_inverse().map(|inverse| posed_world * inverse)
}

/// Weighted linear blend of skinning matrices.
///
/// Weights are normalized by their sum, so additively merged weights above 1.0
/// still produce an affine transform. Falls back to identity when the total
/// weight is negligible.
pub fn blend_skin_matrices(influences: &[(f32, Matrix4<f32>)]) -> Matrix4<f32> {
    let mut result = Matrix4::<f32>::zeros();
    let mut total_weight = 0.0f32;

    for (weight, matrix) in influences {
        if *weight <= 1e-7 {
            continue;
        }
        result += matrix * *weight;
        total_weight += *weight;
    }

    if total_weight < 1e-7 {
        return Matrix4::identity();
    }

    result / total_weight
}

/// Apply a homogeneous matrix to a position stored as an array.
pub fn transform_position(matrix: &Matrix4<f32>, position: [f32; 3]) -> [f32; 3] {
    let point = matrix.transform_point(&Point3::new(position[0], position[1], position[2]));
    [point.x, point.y, point.z]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_trs_when_round_tripping_through_matrix_then_components_are_preserved() {
        let mut transform = BoneTransform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        transform.set_rotation(UnitQuaternion::from_euler_angles(0.3, -0.2, 0.1));
        transform.scale = [2.0, 2.0, 2.0];

        let decomposed = BoneTransform::from_matrix(&transform.to_matrix());

        assert!((decomposed.translation_vector() - transform.translation_vector()).norm() < 0.0001);
        assert!((decomposed.scale_vector() - transform.scale_vector()).norm() < 0.0001);
        let delta = decomposed
            .rotation_quaternion()
            .rotation_to(&transform.rotation_quaternion());
        assert!(delta.angle().abs() < 0.0001);
    }

    #[test]
    fn given_child_listed_before_parent_when_composing_then_world_includes_parent() {
        let locals = vec![
            Translation3::new(0.0, 1.0, 0.0).to_homogeneous(),
            Translation3::new(0.0, 2.0, 0.0).to_homogeneous(),
        ];
        let parents = vec![Some(1), None];

        let worlds = compose_world_matrices(&locals, &parents);

        assert!((matrix_translation(&worlds[0]) - Vector3::new(0.0, 3.0, 0.0)).norm() < 0.0001);
        assert!((matrix_translation(&worlds[1]) - Vector3::new(0.0, 2.0, 0.0)).norm() < 0.0001);
    }

    #[test]
    fn given_cyclic_parents_when_composing_then_resolution_terminates() {
        let locals = vec![Matrix4::identity(), Matrix4::identity()];
        let parents = vec![Some(1), Some(0)];

        let worlds = compose_world_matrices(&locals, &parents);
        assert_eq!(worlds.len(), 2);
    }

    #[test]
    fn given_posed_bone_when_building_skin_matrix_then_rest_point_follows_pose() {
        let rest = Translation3::new(0.0, 1.0, 0.0).to_homogeneous();
        let posed = Translation3::new(0.5, 1.0, 0.0).to_homogeneous();

        let skin = skin_matrix(&posed, &rest).expect("rest matrix is invertible");
        let moved = transform_position(&skin, [0.0, 1.2, 0.0]);

        assert!((moved[0] - 0.5).abs() < 0.0001);
        assert!((moved[1] - 1.2).abs() < 0.0001);
    }

    #[test]
    fn given_unnormalized_weights_when_blending_then_result_is_weight_average() {
        let a = Translation3::new(1.0, 0.0, 0.0).to_homogeneous();
        let b = Translation3::new(3.0, 0.0, 0.0).to_homogeneous();

        let blended = blend_skin_matrices(&[(1.0, a), (1.0, b)]);
        assert!((matrix_translation(&blended) - Vector3::new(2.0, 0.0, 0.0)).norm() < 0.0001);
        assert!((blended[(3, 3)] - 1.0).abs() < 0.0001);
    }

    #[test]
    fn given_no_weights_when_blending_then_identity_is_returned() {
        let blended = blend_skin_matrices(&[(0.0, Matrix4::new_scaling(3.0))]);
        assert!((blended - Matrix4::identity()).norm() < 0.0001);
    }
}

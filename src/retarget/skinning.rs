use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::scene::{Mesh, Skeleton};

use super::mapping::MappingCollection;
use super::normalize::find_bone_flexible;
use super::profiles::RigProfile;
use super::types::{MergedGroup, ValidationIssue, is_target_bone};

/// Outcome of the weight merge on the consolidated mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeReport {
    pub merged: Vec<MergedGroup>,
    pub pruned_groups: Vec<String>,
    pub issues: Vec<ValidationIssue>,
}

// ─── Hierarchy ordering ───────────────────────────────────────────────────────

/// Hierarchy depth of a source bone; unresolvable names sort last.
pub fn source_depth(source: &Skeleton, name: &str) -> usize {
    source
        .find(name)
        .or_else(|| find_bone_flexible(source, name))
        .map(|id| source.depth(id))
        .unwrap_or(usize::MAX)
}

/// Sources ordered by hierarchy depth; equal depths keep mapping order.
pub fn group_sources_by_depth(source: &Skeleton, sources: &[String]) -> Vec<(String, usize)> {
    let mut ordered: Vec<(String, usize)> = sources
        .iter()
        .map(|name| (name.clone(), source_depth(source, name)))
        .collect();
    ordered.sort_by_key(|(_, depth)| *depth);
    ordered
}

// ─── Weight arithmetic ────────────────────────────────────────────────────────

/// Add every non-zero weight of group `from` into group `into`.
///
/// Returns `false` (and changes nothing) when `from` does not exist.
pub fn add_group_weights(mesh: &mut Mesh, from: &str, into: &str) -> bool {
    let Some(source) = mesh.group(from) else {
        return false;
    };
    let weights: Vec<(u32, f32)> = source
        .weights
        .iter()
        .filter(|(_, weight)| **weight != 0.0)
        .map(|(vertex, weight)| (*vertex, *weight))
        .collect();

    let target = mesh.ensure_group(into);
    for (vertex, weight) in weights {
        *target.weights.entry(vertex).or_insert(0.0) += weight;
    }
    true
}

/// Fold profile secondary groups into their primaries, then drop discarded groups.
pub fn apply_weight_influences(mesh: &mut Mesh, profile: &RigProfile) -> Vec<ValidationIssue> {
    let mut folded = Vec::new();
    for (primary, secondary) in &profile.weight_influences {
        if primary == secondary || mesh.group(secondary).is_none() {
            continue;
        }
        add_group_weights(mesh, secondary, primary);
        mesh.remove_group(secondary);
        folded.push(format!("{secondary}→{primary}"));
    }

    let deleted: Vec<String> = profile
        .bones_to_delete
        .iter()
        .filter(|name| mesh.remove_group(name).is_some())
        .cloned()
        .collect();

    let mut issues = Vec::new();
    if !folded.is_empty() {
        issues.push(ValidationIssue::info(
            "WEIGHT_INFLUENCES_APPLIED",
            format!("profile '{}' folded {}", profile.name, folded.join(", ")),
        ));
    }
    if !deleted.is_empty() {
        issues.push(ValidationIssue::info(
            "PROFILE_GROUPS_DELETED",
            format!("profile '{}' deleted {}", profile.name, deleted.join(", ")),
        ));
    }
    issues
}

// ─── Merge ────────────────────────────────────────────────────────────────────

/// Merge all enabled source groups into their target group, shallowest first.
///
/// Weights are added, never normalized. Every consumed source group is
/// detached before any target is written, so a source whose name is also
/// another mapping's target contributes only its own weights. A source named
/// exactly like its target already is the target group and stays in place.
pub fn merge_vertex_groups(
    mesh: &mut Mesh,
    mapping: &MappingCollection,
    source: &Skeleton,
) -> (Vec<MergedGroup>, Vec<ValidationIssue>) {
    let groups = mapping.grouped_by_target();
    let identity: HashSet<String> = groups
        .iter()
        .flat_map(|(target, sources)| sources.iter().filter(move |name| *name == target))
        .cloned()
        .collect();

    let mut detached: HashMap<String, BTreeMap<u32, f32>> = HashMap::new();
    let mut issues = Vec::new();
    for (target, sources) in &groups {
        for source_bone in sources {
            if source_bone == target || detached.contains_key(source_bone) {
                continue;
            }
            let weights = if identity.contains(source_bone) {
                mesh.group(source_bone).map(|group| group.weights.clone())
            } else {
                mesh.remove_group(source_bone).map(|group| group.weights)
            };
            match weights {
                Some(weights) => {
                    detached.insert(source_bone.clone(), weights);
                }
                None => issues.push(ValidationIssue::info(
                    "VERTEX_GROUP_MISSING",
                    format!(
                        "'{}' has no vertex group on '{}'; nothing merged into '{}'",
                        source_bone, mesh.name, target
                    ),
                )),
            }
        }
    }

    let mut merged = Vec::new();
    for (target, sources) in groups {
        let ordered = group_sources_by_depth(source, &sources);
        let group = mesh.ensure_group(&target);
        for (source_bone, _) in &ordered {
            if *source_bone == target {
                continue;
            }
            let Some(weights) = detached.get(source_bone) else {
                continue;
            };
            for (vertex, weight) in weights {
                if *weight != 0.0 {
                    *group.weights.entry(*vertex).or_insert(0.0) += *weight;
                }
            }
        }

        merged.push(MergedGroup {
            vertex_count: group.influenced_vertices(),
            target,
            sources: ordered.into_iter().map(|(name, _)| name).collect(),
        });
    }

    (merged, issues)
}

/// Delete every vertex group that is not a canonical bone name.
pub fn prune_residual_groups(mesh: &mut Mesh) -> Vec<String> {
    let pruned: Vec<String> = mesh
        .vertex_groups
        .iter()
        .filter(|group| !is_target_bone(&group.name))
        .map(|group| group.name.clone())
        .collect();
    mesh.vertex_groups.retain(|group| is_target_bone(&group.name));
    pruned
}

/// Full weight pass: profile influences, hierarchy-aware merge, residual pruning.
pub fn merge_weights(
    mesh: &mut Mesh,
    mapping: &MappingCollection,
    source: &Skeleton,
    profile: Option<&RigProfile>,
) -> MergeReport {
    let mut report = MergeReport::default();

    if let Some(profile) = profile {
        report.issues.extend(apply_weight_influences(mesh, profile));
    }

    let (merged, issues) = merge_vertex_groups(mesh, mapping, source);
    report.merged = merged;
    report.issues.extend(issues);

    report.pruned_groups = prune_residual_groups(mesh);
    if !report.pruned_groups.is_empty() {
        report.issues.push(ValidationIssue::warning(
            "RESIDUAL_GROUPS_PRUNED",
            format!(
                "{} unmapped vertex group(s) removed: {}",
                report.pruned_groups.len(),
                report.pruned_groups.join(", ")
            ),
        ));
    }

    crate::log_info!(
        "Merged {} target group(s) on '{}', pruned {}",
        report.merged.len(),
        mesh.name,
        report.pruned_groups.len()
    );
    report
}

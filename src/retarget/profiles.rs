use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::RetargetError;

use super::normalize::resolve_canonical;

const BUILTIN_PROFILES: [(&str, &str); 6] = [
    ("mixamo.json", include_str!("../../assets/profiles/mixamo.json")),
    ("vroid.json", include_str!("../../assets/profiles/vroid.json")),
    ("unreal.json", include_str!("../../assets/profiles/unreal.json")),
    ("biped.json", include_str!("../../assets/profiles/biped.json")),
    ("valve.json", include_str!("../../assets/profiles/valve.json")),
    ("rigify.json", include_str!("../../assets/profiles/rigify.json")),
];

/// Extra score for profiles whose naming is mostly a shared prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionBonus {
    /// Matched case-insensitively against the start of each bone name.
    pub prefix: String,
    /// The bonus applies when more than this many bones carry the prefix.
    pub min_bones: usize,
    pub bonus: f32,
}

/// One known skeleton naming convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RigProfile {
    pub name: String,
    /// Lowercase substrings that identify bones of this rig.
    pub detection_patterns: Vec<String>,
    pub detection_bonus: Option<DetectionBonus>,
    /// Source bone name → canonical target name, in declaration order.
    pub bone_mapping: Vec<(String, String)>,
    /// `(primary, secondary)` vertex groups; secondary weight is folded into primary.
    pub weight_influences: Vec<(String, String)>,
    /// Vertex groups discarded after the influences are applied.
    pub bones_to_delete: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RigProfileFile {
    name: String,
    #[serde(default)]
    detection_patterns: Vec<String>,
    #[serde(default)]
    detection_bonus: Option<DetectionBonus>,
    #[serde(default)]
    mappings: Vec<ProfileMappingRecord>,
    #[serde(default)]
    weight_influences: Vec<(String, String)>,
    #[serde(default)]
    bones_to_delete: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileMappingRecord {
    source_bone: String,
    target_bone: String,
}

impl RigProfile {
    /// Parse a profile asset. `label` names the asset in error messages.
    ///
    /// Target names are normalized; an unknown target fails the whole profile.
    pub fn from_json_str(label: &str, text: &str) -> Result<Self, RetargetError> {
        let file: RigProfileFile =
            serde_json::from_str(text).map_err(|err| RetargetError::Profile {
                profile: label.to_string(),
                reason: err.to_string(),
            })?;

        if file.name.trim().is_empty() {
            return Err(RetargetError::Profile {
                profile: label.to_string(),
                reason: "profile name is empty".to_string(),
            });
        }

        let mut bone_mapping = Vec::with_capacity(file.mappings.len());
        for record in file.mappings {
            let Some(target) = resolve_canonical(&record.target_bone) else {
                return Err(RetargetError::Profile {
                    profile: file.name,
                    reason: format!(
                        "target '{}' of source '{}' is not a canonical bone",
                        record.target_bone, record.source_bone
                    ),
                });
            };
            bone_mapping.push((record.source_bone, target.to_string()));
        }

        Ok(Self {
            name: file.name,
            detection_patterns: file
                .detection_patterns
                .into_iter()
                .map(|pattern| pattern.to_lowercase())
                .collect(),
            detection_bonus: file.detection_bonus,
            bone_mapping,
            weight_influences: file.weight_influences,
            bones_to_delete: file.bones_to_delete,
        })
    }

    /// Source-bone keys of the mapping, in declaration order.
    pub fn source_keys(&self) -> impl Iterator<Item = &str> {
        self.bone_mapping.iter().map(|(source, _)| source.as_str())
    }
}

/// Ordered set of rig profiles. Registration order breaks detection ties.
#[derive(Debug, Clone, Default)]
pub struct RigProfileLibrary {
    profiles: Vec<RigProfile>,
}

impl RigProfileLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the embedded profiles: Mixamo, VRoid, Unreal Mannequin,
    /// 3ds Max Biped, Valve Biped, Rigify.
    pub fn builtin() -> Result<Self, RetargetError> {
        let mut library = Self::new();
        for (label, text) in BUILTIN_PROFILES {
            library.register(RigProfile::from_json_str(label, text)?)?;
        }
        Ok(library)
    }

    /// Append a profile; names must be unique (case-insensitive).
    pub fn register(&mut self, profile: RigProfile) -> Result<(), RetargetError> {
        if self.get(&profile.name).is_some() {
            return Err(RetargetError::Profile {
                profile: profile.name,
                reason: "a profile with this name is already registered".to_string(),
            });
        }
        crate::log_debug!(
            "Registered rig profile '{}' ({} mappings)",
            profile.name,
            profile.bone_mapping.len()
        );
        self.profiles.push(profile);
        Ok(())
    }

    /// Register every `*.json` profile in `dir`, sorted by file name.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("failed to read profile directory: {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read rig profile: {}", path.display()))?;
            let profile = RigProfile::from_json_str(&path.display().to_string(), &text)?;
            self.register(profile)?;
        }

        Ok(paths.len())
    }

    pub fn get(&self, name: &str) -> Option<&RigProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RigProfile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

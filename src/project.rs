use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::retarget::{
    mapping::MappingCollection,
    normalize::{normalize_bone_name, normalize_with_diagnostic},
    types::{
        BoneMappingEntry, ConvertOptions, DEFAULT_DETECTION_THRESHOLD, DetectionMethod,
        MAPPING_FILE_VERSION, ValidationIssue,
    },
};

/// `settings` block of a mapping file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingSettings {
    pub arm_spacing: f32,
    pub leg_spacing: f32,
    pub detection_threshold: f32,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            arm_spacing: 0.0,
            leg_spacing: 0.0,
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
        }
    }
}

impl From<&ConvertOptions> for MappingSettings {
    fn from(options: &ConvertOptions) -> Self {
        Self {
            arm_spacing: options.arm_spacing,
            leg_spacing: options.leg_spacing,
            detection_threshold: options.detection_threshold,
        }
    }
}

impl MappingSettings {
    /// Overlay these settings on `options`, keeping its other fields.
    pub fn apply_to(&self, options: ConvertOptions) -> ConvertOptions {
        ConvertOptions {
            arm_spacing: self.arm_spacing,
            leg_spacing: self.leg_spacing,
            detection_threshold: self.detection_threshold,
            ..options
        }
    }
}

/// One persisted mapping entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub source_bone: String,
    pub target_bone: String,
    pub enabled: bool,
    pub detection_method: String,
    pub confidence: f32,
}

impl From<&BoneMappingEntry> for MappingRecord {
    fn from(entry: &BoneMappingEntry) -> Self {
        Self {
            source_bone: entry.source_bone.clone(),
            target_bone: entry.target_bone.clone(),
            enabled: entry.enabled,
            detection_method: entry.detection_method.as_str().to_string(),
            confidence: entry.confidence,
        }
    }
}

/// Persisted mapping file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingFile {
    pub version: String,
    pub source_armature: String,
    pub target_armature: String,
    pub settings: MappingSettings,
    pub mappings: Vec<MappingRecord>,
}

impl MappingFile {
    pub fn from_collection(
        source_armature: &str,
        target_armature: &str,
        entries: &MappingCollection,
        settings: MappingSettings,
    ) -> Self {
        Self {
            version: MAPPING_FILE_VERSION.to_string(),
            source_armature: source_armature.to_string(),
            target_armature: target_armature.to_string(),
            settings,
            mappings: entries.iter().map(MappingRecord::from).collect(),
        }
    }

    pub fn to_collection(&self) -> MappingCollection {
        MappingCollection::from_entries(
            self.mappings
                .iter()
                .map(|record| BoneMappingEntry {
                    source_bone: record.source_bone.clone(),
                    target_bone: record.target_bone.clone(),
                    enabled: record.enabled,
                    confidence: record.confidence.clamp(0.0, 1.0),
                    detection_method: DetectionMethod::parse_lenient(&record.detection_method),
                })
                .collect(),
        )
    }
}

/// A loaded mapping file plus the fixes applied while loading it.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedMapping {
    pub file: MappingFile,
    pub entries: MappingCollection,
    pub fixes: Vec<ValidationIssue>,
}

/// Save a mapping file; target names are written in canonical form.
pub fn save_mapping(path: &Path, file: &MappingFile) -> Result<()> {
    let mut file = file.clone();
    for record in &mut file.mappings {
        record.target_bone = normalize_bone_name(&record.target_bone).into_owned();
    }

    let content =
        serde_json::to_string_pretty(&file).context("failed to serialize mapping as JSON")?;
    fs::write(path, content)
        .with_context(|| format!("failed to save mapping: {}", path.display()))?;

    crate::log_info!(
        "Saved {} mapping entries to {}",
        file.mappings.len(),
        path.display()
    );
    Ok(())
}

/// Load a mapping file, fixing non-canonical target names in place.
pub fn load_mapping(path: &Path) -> Result<LoadedMapping> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to load mapping: {}", path.display()))?;
    let loaded = parse_mapping_json(&content)
        .with_context(|| format!("invalid mapping file: {}", path.display()))?;

    if !loaded.fixes.is_empty() {
        crate::log_warn!(
            "{} target name(s) fixed while loading {}",
            loaded.fixes.len(),
            path.display()
        );
    }
    Ok(loaded)
}

fn required_str<'a>(
    entry: &'a serde_json::Map<String, Value>,
    key: &str,
    index: usize,
) -> Result<&'a str> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .with_context(|| format!("mapping entry {index} lacks string '{key}'"))
}

/// Parse mapping JSON text.
///
/// `mappings` must be an array of objects with string `source_bone`, string
/// `target_bone` and bool `enabled`; every other field falls back to a default.
pub fn parse_mapping_json(text: &str) -> Result<LoadedMapping> {
    let value: Value = serde_json::from_str(text).context("failed to parse mapping JSON")?;

    let Some(raw_mappings) = value.get("mappings") else {
        bail!("mapping file has no 'mappings' key");
    };
    let Some(raw_mappings) = raw_mappings.as_array() else {
        bail!("'mappings' must be an array");
    };

    let mut mappings = Vec::with_capacity(raw_mappings.len());
    let mut fixes = Vec::new();
    for (index, raw) in raw_mappings.iter().enumerate() {
        let Some(entry) = raw.as_object() else {
            bail!("mapping entry {index} is not an object");
        };
        let source_bone = required_str(entry, "source_bone", index)?;
        let target_bone = required_str(entry, "target_bone", index)?;
        let enabled = entry
            .get("enabled")
            .and_then(Value::as_bool)
            .with_context(|| format!("mapping entry {index} lacks bool 'enabled'"))?;

        let detection_method = entry
            .get("detection_method")
            .and_then(Value::as_str)
            .map(DetectionMethod::parse_lenient)
            .unwrap_or(DetectionMethod::Cached);
        let confidence = entry
            .get("confidence")
            .and_then(Value::as_f64)
            .map(|confidence| confidence as f32)
            .unwrap_or(1.0)
            .clamp(0.0, 1.0);

        let (normalized, miss) = normalize_with_diagnostic(target_bone);
        if let Some(miss) = miss {
            fixes.push(miss);
        } else if normalized != target_bone {
            fixes.push(ValidationIssue::info(
                "TARGET_NAME_FIXED",
                format!("entry {index}: target '{target_bone}' rewritten to '{normalized}'"),
            ));
        }

        mappings.push(MappingRecord {
            source_bone: source_bone.to_string(),
            target_bone: normalized.into_owned(),
            enabled,
            detection_method: detection_method.as_str().to_string(),
            confidence,
        });
    }

    let settings = match value.get("settings") {
        Some(settings) => serde_json::from_value(settings.clone())
            .context("failed to parse mapping settings")?,
        None => MappingSettings::default(),
    };
    let text_field = |key: &str, default: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    };

    let file = MappingFile {
        version: text_field("version", MAPPING_FILE_VERSION),
        source_armature: text_field("source_armature", ""),
        target_armature: text_field("target_armature", ""),
        settings,
        mappings,
    };
    let entries = file.to_collection();
    Ok(LoadedMapping {
        file,
        entries,
        fixes,
    })
}

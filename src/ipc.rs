use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    project::{LoadedMapping, MappingFile, load_mapping, save_mapping},
    retarget::{
        BoneMappingEntry, ConversionReport, ConversionRequest, ConvertOptions, DetectionResult,
        RigProfileLibrary, ValidationIssue,
        detect::DEFAULT_DETECTION_THRESHOLD,
        detect_profile,
        diagnostic::{diagnostic_log_path_for_output, write_conversion_diagnostic_log},
        resolve_mapping, run_conversion, write_final_validation_checklist,
    },
    scene::{load_scene, save_scene},
};

/// IPC payload for profile detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    pub scene_path: String,
    pub armature: String,
    #[serde(default)]
    pub profile_dir: Option<String>,
    #[serde(default)]
    pub threshold: Option<f32>,
}

/// IPC payload for building an initial mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub scene_path: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub profile_dir: Option<String>,
    #[serde(default)]
    pub threshold: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub detection: DetectionResult,
    pub entries: Vec<BoneMappingEntry>,
    pub issues: Vec<ValidationIssue>,
}

/// IPC payload for conversion requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub scene_path: String,
    pub output_path: String,
    pub source: String,
    pub target: String,
    pub mapping_path: String,
    #[serde(default)]
    pub options: ConvertOptions,
    /// Profile whose weight influences and discards apply; detected when `None`.
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub profile_dir: Option<String>,
    #[serde(default)]
    pub write_diagnostics: bool,
}

/// IPC payload for saving a mapping file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMappingRequest {
    pub path: String,
    pub file: MappingFile,
}

/// IPC payload for loading a mapping file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadMappingRequest {
    pub path: String,
}

// ─── Workflows ────────────────────────────────────────────────────────────────

/// Built-in profiles plus every profile file in `profile_dir`.
pub fn load_profile_library(profile_dir: Option<&Path>) -> Result<RigProfileLibrary> {
    let mut library = RigProfileLibrary::builtin().context("failed to load built-in profiles")?;
    if let Some(dir) = profile_dir {
        let added = library.load_dir(dir)?;
        crate::log_info!("Loaded {} extra profile(s) from {}", added, dir.display());
    }
    Ok(library)
}

fn library_for(profile_dir: Option<&String>) -> Result<RigProfileLibrary> {
    load_profile_library(profile_dir.map(Path::new))
}

/// Detect the rig profile of one armature in a scene file.
pub fn detect_scene_profile(request: &DetectRequest) -> Result<DetectionResult> {
    let scene = load_scene(Path::new(&request.scene_path))?;
    let skeleton = scene.armature(&request.armature)?;
    let library = library_for(request.profile_dir.as_ref())?;
    Ok(detect_profile(
        &library,
        skeleton,
        request.threshold.unwrap_or(DEFAULT_DETECTION_THRESHOLD),
    ))
}

/// Detect the source profile and build its initial mapping.
pub fn resolve_scene_mapping(request: &ResolveRequest) -> Result<ResolveResponse> {
    let scene = load_scene(Path::new(&request.scene_path))?;
    let source = scene.armature(&request.source)?;
    let target = scene.armature(&request.target)?;
    let library = library_for(request.profile_dir.as_ref())?;

    let detection = detect_profile(
        &library,
        source,
        request.threshold.unwrap_or(DEFAULT_DETECTION_THRESHOLD),
    );
    let outcome = resolve_mapping(&library, &detection, source, target);

    Ok(ResolveResponse {
        detection,
        entries: outcome.entries.into_entries(),
        issues: outcome.issues,
    })
}

/// Load scene and mapping, convert, and write the result scene.
///
/// With `write_diagnostics` a `<output>.diagnostic.json` log and a
/// `<output>.checklist.md` file are written next to the output.
pub fn convert_scene_file(request: &ConvertRequest) -> Result<ConversionReport> {
    let scene_path = PathBuf::from(&request.scene_path);
    let output_path = PathBuf::from(&request.output_path);

    let mut scene = load_scene(&scene_path)?;
    let loaded = load_mapping(Path::new(&request.mapping_path))?;
    let options = loaded.file.settings.apply_to(request.options);
    let library = library_for(request.profile_dir.as_ref())?;

    let profile_name = match &request.profile {
        Some(name) => Some(name.clone()),
        None => {
            let source = scene.armature(&request.source)?;
            detect_profile(&library, source, options.detection_threshold).profile
        }
    };
    let profile = match profile_name {
        Some(name) => Some(
            library
                .get(&name)
                .cloned()
                .with_context(|| format!("unknown rig profile '{name}'"))?,
        ),
        None => None,
    };

    let mut report = run_conversion(
        &mut scene,
        ConversionRequest {
            source: request.source.clone(),
            target: request.target.clone(),
            mapping: loaded.entries,
            profile,
            options,
        },
    )?;
    let mut fixes = loaded.fixes;
    fixes.append(&mut report.issues);
    report.issues = fixes;

    save_scene(&output_path, &scene)?;

    if request.write_diagnostics {
        let target = scene.armature(&request.target).ok();
        write_conversion_diagnostic_log(
            &output_path,
            &diagnostic_log_path_for_output(&output_path),
            &report,
            target,
        )?;
        write_final_validation_checklist(
            &output_path.with_extension("checklist.md"),
            &scene_path,
            &output_path,
            &report,
        )?;
    }

    Ok(report)
}

// ─── IPC entry points ─────────────────────────────────────────────────────────

/// Detect the rig profile through the IPC boundary.
pub fn detect_profile_ipc(request: DetectRequest) -> Result<DetectionResult, String> {
    detect_scene_profile(&request).map_err(|err| format!("{err:#}"))
}

/// Build an initial mapping through the IPC boundary.
pub fn resolve_mapping_ipc(request: ResolveRequest) -> Result<ResolveResponse, String> {
    resolve_scene_mapping(&request).map_err(|err| format!("{err:#}"))
}

/// Run a conversion through the IPC boundary.
pub fn run_conversion_ipc(request: ConvertRequest) -> Result<ConversionReport, String> {
    convert_scene_file(&request).map_err(|err| format!("{err:#}"))
}

/// Save a mapping file through the IPC boundary.
pub fn save_mapping_ipc(request: SaveMappingRequest) -> Result<(), String> {
    let path = PathBuf::from(request.path);
    save_mapping(&path, &request.file).map_err(|err| err.to_string())
}

/// Load a mapping file through the IPC boundary.
pub fn load_mapping_ipc(request: LoadMappingRequest) -> Result<LoadedMapping, String> {
    let path = PathBuf::from(request.path);
    load_mapping(&path).map_err(|err| format!("{err:#}"))
}

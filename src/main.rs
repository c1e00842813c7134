use std::{env, io, path::PathBuf, process};

use rigmap::{
    JsonLinesSink, MappingCollection, MappingFile, MappingSettings, SceneObject, Skeleton,
    init_logging,
    ipc::{ConvertRequest, DetectRequest, ResolveRequest},
    ipc::{convert_scene_file, detect_scene_profile, resolve_scene_mapping},
    retarget::gltf_import::import_gltf_scene,
    save_mapping, save_scene,
};

const USAGE: &str = "Usage:
  rigmap detect <scene.json> <armature>
  rigmap map <scene.json> <source> <target> <mapping.json>
  rigmap convert <scene.json> <source> <target> <mapping.json> <output.json>
  rigmap import <model.gltf|glb> <scene.json>";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn usage() -> ! {
    eprintln!("{USAGE}");
    process::exit(2);
}

fn setup_logging() {
    if env::var_os("RIGMAP_LOG_JSON").is_some() {
        init_logging(Box::new(JsonLinesSink::new(Box::new(io::stderr()))));
    } else {
        env_logger::init();
    }
}

fn run() -> anyhow::Result<()> {
    setup_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
    };

    match (command.as_str(), &args[1..]) {
        ("detect", [scene, armature]) => detect(scene, armature),
        ("map", [scene, source, target, mapping]) => map(scene, source, target, mapping),
        ("convert", [scene, source, target, mapping, output]) => {
            convert(scene, source, target, mapping, output)
        }
        ("import", [model, scene]) => import(model, scene),
        _ => usage(),
    }
}

fn detect(scene: &str, armature: &str) -> anyhow::Result<()> {
    let result = detect_scene_profile(&DetectRequest {
        scene_path: scene.to_string(),
        armature: armature.to_string(),
        profile_dir: None,
        threshold: None,
    })?;

    match &result.profile {
        Some(profile) => println!("Profile: {} ({:.2})", profile, result.confidence),
        None if result.generic_match => {
            println!("Profile: generic ({:.2})", result.generic_score)
        }
        None => println!("Profile: unrecognised"),
    }
    for score in &result.scores {
        println!("  {:<12} {:.2}", score.name, score.confidence);
    }
    Ok(())
}

fn map(scene: &str, source: &str, target: &str, mapping: &str) -> anyhow::Result<()> {
    let response = resolve_scene_mapping(&ResolveRequest {
        scene_path: scene.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        profile_dir: None,
        threshold: None,
    })?;

    let entries = MappingCollection::from_entries(response.entries);
    let file = MappingFile::from_collection(source, target, &entries, MappingSettings::default());
    save_mapping(&PathBuf::from(mapping), &file)?;

    println!(
        "Mapped bones: {} (profile: {})",
        entries.len(),
        response.detection.profile.as_deref().unwrap_or("none")
    );
    for issue in &response.issues {
        println!("  [{:?}] {}: {}", issue.severity, issue.code, issue.message);
    }
    Ok(())
}

fn convert(
    scene: &str,
    source: &str,
    target: &str,
    mapping: &str,
    output: &str,
) -> anyhow::Result<()> {
    let report = convert_scene_file(&ConvertRequest {
        scene_path: scene.to_string(),
        output_path: output.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        mapping_path: mapping.to_string(),
        options: Default::default(),
        profile: None,
        profile_dir: None,
        write_diagnostics: true,
    })?;

    println!("Source: {} -> Target: {}", report.source_armature, report.target_armature);
    println!("Profile: {}", report.profile.as_deref().unwrap_or("none"));
    println!(
        "Enabled mappings: {}, merged groups: {}, pruned groups: {}",
        report.enabled_mappings,
        report.merged_groups.len(),
        report.pruned_groups.len()
    );
    println!(
        "Baked bones: {}, deformed vertices: {}",
        report.baked_bones.len(),
        report.deformed_vertices
    );
    println!("Source deleted: {}", report.source_deleted);
    for issue in &report.issues {
        println!("  [{:?}] {}: {}", issue.severity, issue.code, issue.message);
    }
    Ok(())
}

fn import(model: &str, scene: &str) -> anyhow::Result<()> {
    let mut imported = import_gltf_scene(&PathBuf::from(model))?;
    if imported.find("Target").is_none() {
        imported.insert(SceneObject::Armature(Skeleton::canonical("Target")));
    }
    save_scene(&PathBuf::from(scene), &imported)?;

    println!("Objects: {}", imported.objects.len());
    for name in imported.armature_names() {
        println!("  armature: {name}");
    }
    Ok(())
}

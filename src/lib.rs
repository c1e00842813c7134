//! rigmap
//!
//! Retargets arbitrary humanoid skeletons and their skinned meshes onto a
//! canonical 32-bone target skeleton.

pub mod error;
pub mod ipc;
pub mod logging;
pub mod pipeline;
pub mod project;
pub mod retarget;
pub mod scene;
pub mod transform;

pub use error::RetargetError;
pub use logging::{JsonLinesSink, LogLevel, LogSink, ResultExt, init_logging, send_log};
pub use project::{LoadedMapping, MappingFile, MappingSettings, load_mapping, save_mapping};
pub use retarget::{
    ConversionReport, ConversionRequest, ConvertOptions, DetectionResult, MappingCollection,
    RigProfileLibrary, detect_profile, resolve_mapping, run_conversion,
};
pub use scene::{Scene, SceneObject, Skeleton, load_scene, save_scene};

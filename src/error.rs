use thiserror::Error;

/// Fatal errors raised by the retargeting engine.
///
/// Non-fatal problems (normalization misses, invalid mapping entries that get
/// auto-disabled, empty pose captures) are reported as
/// [`ValidationIssue`](crate::retarget::ValidationIssue) values instead.
#[derive(Error, Debug)]
pub enum RetargetError {
    /// A required skeleton is missing or the named object is not an armature.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Nothing meaningful can be converted (no mesh, no enabled mappings).
    #[error("Conversion aborted: {0}")]
    ConversionAbort(String),

    /// The pose transfer could not establish a single primary driver.
    #[error("Pose bake failed: {0}")]
    BakeFailure(String),

    /// A pose transfer step was invoked out of order.
    #[error("Pose transfer step '{attempted}' called while in state '{current}'")]
    StageOrder {
        attempted: &'static str,
        current: &'static str,
    },

    /// A rig profile asset could not be parsed or references unknown bones.
    #[error("Invalid rig profile '{profile}': {reason}")]
    Profile { profile: String, reason: String },

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RetargetError {
    /// Stable machine-readable code used in reports and logs.
    pub fn code(&self) -> &'static str {
        match self {
            RetargetError::Validation(_) => "VALIDATION_ERROR",
            RetargetError::ConversionAbort(_) => "CONVERSION_ABORT",
            RetargetError::BakeFailure(_) => "BAKE_FAILURE",
            RetargetError::StageOrder { .. } => "STAGE_ORDER",
            RetargetError::Profile { .. } => "PROFILE_INVALID",
            RetargetError::Io(_) => "IO_ERROR",
            RetargetError::Json(_) => "JSON_ERROR",
        }
    }
}

/// IPC callers receive plain strings.
impl From<RetargetError> for String {
    fn from(error: RetargetError) -> Self {
        error.to_string()
    }
}

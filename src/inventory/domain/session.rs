use super::asset::Asset;
use serde::Serialize;

/// How an uploaded dataset combines with the bundled default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DataMode {
    /// Bundled default plus uploaded rows, in that order.
    #[default]
    Combined,
    /// Uploaded rows only.
    UploadOnly,
}

impl std::str::FromStr for DataMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "combined" => Ok(DataMode::Combined),
            "upload-only" | "uploadonly" => Ok(DataMode::UploadOnly),
            _ => Err(format!(
                "Invalid data mode: {}. Please specify 'combined' or 'upload-only'",
                s
            )),
        }
    }
}

/// Where the currently active collection comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    Bundled,
    Combined,
    UploadOnly,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Bundled => "bundled",
            DataSource::Combined => "combined",
            DataSource::UploadOnly => "upload-only",
        }
    }
}

/// Session-scoped data source: the bundled default collection plus an
/// optional uploaded replacement.
///
/// The uploaded collection is always replaced wholesale, never patched in
/// place, and a failed upload never reaches `apply_upload` - the previously
/// active dataset stays untouched. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct SessionDataSource {
    default_assets: Vec<Asset>,
    uploaded: Option<Vec<Asset>>,
    mode: DataMode,
}

impl SessionDataSource {
    pub fn new(default_assets: Vec<Asset>) -> Self {
        Self {
            default_assets,
            uploaded: None,
            mode: DataMode::Combined,
        }
    }

    /// Replaces the uploaded collection wholesale and selects the view mode.
    pub fn apply_upload(&mut self, assets: Vec<Asset>, mode: DataMode) {
        self.uploaded = Some(assets);
        self.mode = mode;
    }

    /// Switches between combined and upload-only views. Has no visible
    /// effect until an upload is present.
    pub fn set_mode(&mut self, mode: DataMode) {
        self.mode = mode;
    }

    /// Drops the uploaded collection and reverts to the bundled default.
    pub fn clear_upload(&mut self) {
        self.uploaded = None;
        self.mode = DataMode::Combined;
    }

    pub fn default_count(&self) -> usize {
        self.default_assets.len()
    }

    pub fn uploaded_count(&self) -> usize {
        self.uploaded.as_ref().map_or(0, Vec::len)
    }

    pub fn source(&self) -> DataSource {
        match (&self.uploaded, self.mode) {
            (None, _) => DataSource::Bundled,
            (Some(_), DataMode::Combined) => DataSource::Combined,
            (Some(_), DataMode::UploadOnly) => DataSource::UploadOnly,
        }
    }

    /// The collection every derived view is computed from.
    pub fn active_assets(&self) -> Vec<Asset> {
        match (&self.uploaded, self.mode) {
            (None, _) => self.default_assets.clone(),
            (Some(uploaded), DataMode::UploadOnly) => uploaded.clone(),
            (Some(uploaded), DataMode::Combined) => {
                let mut combined = self.default_assets.clone();
                combined.extend(uploaded.iter().cloned());
                combined
            }
        }
    }
}

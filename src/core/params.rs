use serde::{Deserialize, Serialize};

use crate::types::{FlipAxis, ImageType};

/// Mirror parameters shared by every file of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorParams {
    pub axis: FlipAxis,
    /// Directory name created under each input file's own parent; None saves alongside
    pub output_dir: Option<String>,
    /// Target type; None keeps the source extension and its format
    pub output_type: Option<ImageType>,
}

impl MirrorParams {
    /// Output directory name, treating an empty name as absent.
    pub fn output_dir_name(&self) -> Option<&str> {
        self.output_dir.as_deref().filter(|name| !name.is_empty())
    }
}

//! Codebase Map Models
//!
//! The caller-supplied summary of a target codebase. Produced by an
//! external scanner; read-only to the pipeline.

use serde::{Deserialize, Serialize};

/// One route entry in the codebase map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Normalized route path (e.g. "/dashboard/settings").
    pub path: String,
    /// Filenames present at this route.
    #[serde(default)]
    pub files: Vec<String>,
    /// Export names, when the scanner resolved them.
    #[serde(default)]
    pub exports: Option<Vec<String>>,
}

/// Summary of a target codebase: routes, component files, action files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStructure {
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Component file paths.
    #[serde(default)]
    pub components: Vec<String>,
    /// Server-action file paths.
    #[serde(default)]
    pub actions: Vec<String>,
    /// When the scanner ran, RFC-3339.
    #[serde(default)]
    pub scanned_at: Option<String>,
}

impl ProjectStructure {
    /// True when the map carries no entries at all.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.components.is_empty() && self.actions.is_empty()
    }
}

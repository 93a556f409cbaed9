//! Bean manifest loading
//!
//! A manifest lists the beans to generate suppliers for, each with the identity of its bean definition and the
//! resolved descriptor:
//!
//! ```json
//! { "beans": [ { "name": "foo", "resource": "app.xml", "descriptor": { "user_bean_class": { ... }, ... } } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use beangen_core::{BeanDefinition, BeanInstanceDescriptor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that occur while loading a manifest
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// One bean to generate a supplier for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanSpec {
    #[serde(flatten)]
    pub definition: BeanDefinition,
    pub descriptor: BeanInstanceDescriptor,
}

#[derive(Debug, Serialize, Deserialize)]
struct Manifest {
    #[serde(default)]
    beans: Vec<BeanSpec>,
}

/// Parse manifest JSON.
pub fn parse_manifest(text: &str) -> Result<Vec<BeanSpec>, InputError> {
    let manifest: Manifest = serde_json::from_str(text)?;
    Ok(manifest.beans)
}

/// Read and parse a manifest file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> Result<Vec<BeanSpec>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let beans = parse_manifest(&text)?;
    tracing::debug!(bean_count = beans.len(), "loaded manifest");
    Ok(beans)
}

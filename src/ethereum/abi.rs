//! Contract ABI loading.
//!
//! One JSON file per contract, named `<contract_name>_abi.json`, kept in a
//! data directory bundled with the crate. Files are read and parsed on every
//! load; callers cache the resulting contract handle, not the ABI.

use std::fs;
use std::path::{Path, PathBuf};

use alloy::json_abi::JsonAbi;

use crate::error::{AppError, Result};

/// Directory of `<contract_name>_abi.json` files.
#[derive(Debug, Clone)]
pub struct AbiStore {
    dir: PathBuf,
}

impl AbiStore {
    /// Store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the `abis/` directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("abis"))
    }

    /// Path the ABI file for a contract name is expected at.
    pub fn path_for(&self, contract_name: &str) -> PathBuf {
        self.dir.join(format!("{contract_name}_abi.json"))
    }

    /// Read and parse the ABI file for a contract name.
    pub fn load(&self, contract_name: &str) -> Result<JsonAbi> {
        let path = self.path_for(contract_name);

        let raw = fs::read_to_string(&path).map_err(|e| {
            AppError::Abi(format!("failed to read ABI file {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Abi(format!("failed to parse ABI file {}: {}", path.display(), e))
        })
    }
}

impl Default for AbiStore {
    fn default() -> Self {
        Self::bundled()
    }
}

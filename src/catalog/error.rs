//! Error types for loading a menu catalog.

use crate::model::MenuItemId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu item {0} has a negative or non-finite price")]
    InvalidPrice(MenuItemId),

    #[error("Menu item {id} has spice level {level}, maximum is 3")]
    InvalidSpiceLevel { id: MenuItemId, level: u8 },

    #[error("Duplicate menu item id: {0}")]
    DuplicateId(MenuItemId),
}

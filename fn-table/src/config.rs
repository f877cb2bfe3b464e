//! JSON table configuration.
//!
//! A configuration describes everything but custom renderers: flags, the
//! default column and a column tree with text headers.
//!
//! ```json
//! {
//!   "showSequence": true,
//!   "selectionMode": "multiple",
//!   "defaultColumn": { "width": 200, "alignment": "center" },
//!   "columns": [
//!     { "header": "Name", "children": [
//!       { "key": "firstName", "header": "First Name" },
//!       { "key": "lastName", "header": "Last Name" }
//!     ]},
//!     { "key": "age", "header": "Age", "alignment": "right" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::column::{ColumnSpec, DefaultColumnSpec, HeaderSpec};
use crate::error::ConfigError;
use crate::markup::Alignment;
use crate::table::{FnTableOptions, SelectionMode};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    pub show_sequence: bool,
    pub selection_mode: SelectionMode,
    pub show_footer: bool,
    pub default_column: DefaultColumnSpec,
    pub columns: Vec<ColumnConfig>,
    pub class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Present for groups, absent for data columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ColumnConfig>>,
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded table config from {}", path.display());
        Self::from_json(&json)
    }

    /// Build render options. Fails on leaf columns without a key and on
    /// groups without children.
    pub fn to_options<T>(&self) -> Result<FnTableOptions<T>, ConfigError> {
        let columns = self
            .columns
            .iter()
            .map(ColumnConfig::to_spec)
            .collect::<Result<Vec<_>, _>>()?;

        let mut options = FnTableOptions::new(columns)
            .show_sequence(self.show_sequence)
            .selection_mode(self.selection_mode)
            .show_footer(self.show_footer)
            .default_column(self.default_column);
        options.class = self.class.clone();
        Ok(options)
    }
}

impl ColumnConfig {
    pub fn to_spec<T>(&self) -> Result<ColumnSpec<T>, ConfigError> {
        let footer = self.footer.clone().map(HeaderSpec::Text);

        if let Some(children) = &self.children {
            let header = self.header.clone().unwrap_or_default();
            if children.is_empty() {
                return Err(ConfigError::EmptyGroup { header });
            }
            let children = children
                .iter()
                .map(ColumnConfig::to_spec)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(ColumnSpec::Group(crate::column::GroupSpec {
                key: self.key.clone(),
                header: HeaderSpec::Text(header),
                footer,
                children,
            }));
        }

        let Some(key) = self.key.clone() else {
            return Err(ConfigError::MissingKey {
                header: self.header.clone().unwrap_or_default(),
            });
        };
        let header = self.header.clone().unwrap_or_else(|| key.clone());
        let mut leaf = ColumnSpec::leaf(key, header);
        leaf.footer = footer;
        leaf.width = self.width;
        leaf.alignment = self.alignment;
        Ok(leaf.into())
    }
}

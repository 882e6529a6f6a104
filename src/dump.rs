// Debug dumping of arbitrary serializable values

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::assert::similar::recursive_sort_keys;

/// Output options for [`dump`] and [`dump_string`]
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Multi-line indented output
    pub pretty: bool,
    /// Deep-sort mapping keys before serializing
    pub sort_keys: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            sort_keys: false,
        }
    }
}

/// Serialize `value` to a textual literal and return it.
pub fn dump_string<T: Serialize>(value: &T, options: &DumpOptions) -> Result<String> {
    let mut tree: Value =
        serde_json::to_value(value).context("value cannot be converted to a JSON tree")?;

    if options.sort_keys {
        recursive_sort_keys(&mut tree);
    }

    let text = if options.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };

    Ok(text)
}

/// Serialize `value` and write it to stdout.
pub fn dump<T: Serialize>(value: &T, options: &DumpOptions) -> Result<()> {
    let text = dump_string(value, options)?;
    println!("{}", text);
    Ok(())
}

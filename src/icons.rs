use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Square sizes a browser extension manifest asks for.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Where the manifest expects the icons, relative to the extension root.
pub const MANIFEST_ICON_DIR: &str = "icons";

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(icon_file_name(size))
}

/// The `icons` object of `manifest.json`, keyed by size.
pub fn manifest_fragment(sizes: &[u32]) -> Value {
    let icons: Map<String, Value> = sizes
        .iter()
        .map(|size| {
            (
                size.to_string(),
                Value::String(format!("{MANIFEST_ICON_DIR}/{}", icon_file_name(*size))),
            )
        })
        .collect();
    serde_json::json!({ "icons": icons })
}

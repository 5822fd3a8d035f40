use std::path::PathBuf;

use humansize::{file_size_opts as options, FileSize};
use serde_json::json;

use super::loaded;
use crate::error::{Error, Result};

pub fn run(path: PathBuf, as_json: bool) -> Result<()> {
    let file = super::open(&path)?;
    let raw = loaded(&path, file.raw())?;
    let cache_state = loaded(&path, file.cache_state())?;
    let content = loaded(&path, file.content())?;

    if as_json {
        let info = json!({
            "path": path.display().to_string(),
            "size": raw.len(),
            "encoding": file.encoding(),
            "cache_state": cache_state,
            "content_length": content.len(),
        });
        let out = serde_json::to_string_pretty(&info).map_err(|source| Error::Json { source })?;
        println!("{}", out);
        return Ok(());
    }

    let size = raw
        .len()
        .file_size(options::BINARY)
        .unwrap_or_else(|_| format!("{} B", raw.len()));

    println!("Path:           {}", path.display());
    println!("Size:           {}", size);
    println!("Encoding:       {}", file.encoding());
    println!("Cache state:    {:#04x}", cache_state);
    println!("Content length: {}", content.len());
    Ok(())
}

use std::path::PathBuf;

use crate::error::{Error, Result};

pub fn run(src: PathBuf, dest: PathBuf, verbose: bool) -> Result<()> {
    let file = super::open(&src)?;

    file.save(&dest).map_err(|source| Error::SaveFile {
        path: dest.clone(),
        source,
    })?;

    if verbose {
        println!("{} -> {}", src.display(), dest.display());
    }
    Ok(())
}

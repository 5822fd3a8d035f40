use std::path::PathBuf;

use crate::error::Result;

pub fn run(path: PathBuf) -> Result<()> {
    let file = super::open(&path)?;
    println!("{}", super::loaded(&path, file.text())?);
    Ok(())
}

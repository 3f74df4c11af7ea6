use std::fs;
use std::path::Path;

use super::atomic;

use crate::{Config, Head};

use lodb_core::Result;

/// Create the repository layout under `root`, keeping anything that is
/// already there.
pub(crate) fn create_layout(root: &Path, config: &Config) -> Result<()> {
    let head = Head::branch(config.default_branch())?;

    fs::create_dir_all(root)?;

    create_objects_dir(root)?;
    create_refs_dir(root)?;
    create_config(root)?;
    create_head(root, &head)?;

    Ok(())
}

fn create_objects_dir(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("objects/info"))?;
    fs::create_dir_all(root.join("objects/pack"))?;
    Ok(())
}

fn create_refs_dir(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("refs/heads"))?;
    fs::create_dir_all(root.join("refs/tags"))?;
    Ok(())
}

fn create_config(root: &Path) -> Result<()> {
    let config_txt = "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\tbare = true\n";

    atomic::publish_new(&root.join("config"), config_txt.as_bytes(), false)?;
    Ok(())
}

fn create_head(root: &Path, head: &Head) -> Result<()> {
    atomic::publish_new(&root.join("HEAD"), head.to_file_content().as_bytes(), false)?;
    Ok(())
}

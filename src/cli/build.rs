//! `build` subcommand - build and write the pages index.

use anyhow::Result;

use crate::config::IndexConfig;
use crate::index::PageIndex;
use crate::log;
use crate::utils::plural::plural_s;

/// Build the pages index and write it to the output path.
pub fn build_index(config: &IndexConfig) -> Result<()> {
    log!("index"; "building pages index from {}", config.content.display());

    let index = PageIndex::build(config)?;
    index.write(config)?;

    log!(
        "index";
        "indexed {} page{} -> {}",
        index.len(),
        plural_s(index.len()),
        config.output.display()
    );
    Ok(())
}

// src/cli/show.rs — Print the cut record of one cut file

use std::path::Path;

use crate::cuts::{CutArchive, JsonCutArchive};

pub fn show_cuts(file: &Path, key: &str) -> anyhow::Result<()> {
    let archive = JsonCutArchive::new();
    match archive.read_record(file, key)? {
        Some(cut) => print!("{}", cut.print_cuts()),
        None => println!("???? not found???? (no record '{}' in {})", key, file.display()),
    }
    Ok(())
}

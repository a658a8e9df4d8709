//! Load and save plan inputs as JSON

use super::ProjectionInput;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Load a plan from a JSON file. Missing fields take the calculator defaults.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProjectionInput, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    let input = load_input_from_reader(BufReader::new(file))?;
    log::debug!("Loaded plan from {}", path.as_ref().display());
    Ok(input)
}

/// Load a plan from any reader (for testing or embedded data)
pub fn load_input_from_reader<R: Read>(reader: R) -> Result<ProjectionInput, Box<dyn Error>> {
    let input = serde_json::from_reader(reader)?;
    Ok(input)
}

/// Persist the last submitted plan so a form can be repopulated later
pub fn save_input<P: AsRef<Path>>(path: P, input: &ProjectionInput) -> Result<(), Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, input)?;
    writer.flush()?;
    Ok(())
}

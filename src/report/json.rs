use std::error::Error;
use std::path::Path;

use crate::fsio::FileAccess;
use crate::model::Analysis;

/// The JSON renderer is the whole serialized aggregate — downstream tools
/// get every field the core computed, not a presentation subset.
pub fn write(io: &dyn FileAccess, path: &Path, analysis: &Analysis) -> Result<(), Box<dyn Error>> {
    let body = serde_json::to_string_pretty(analysis)?;
    io.write_text(path, &body)?;
    Ok(())
}

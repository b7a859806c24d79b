use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::error::AppError;

/// Read the code sample: file first, then the inline argument, then stdin.
pub fn load_code(path: Option<&Path>, inline: Option<&str>) -> Result<String, AppError> {
    load_code_from(path, inline, io::stdin())
}

/// Same as [`load_code`] with an explicit fallback reader.
pub fn load_code_from<R: Read>(
    path: Option<&Path>,
    inline: Option<&str>,
    mut fallback: R,
) -> Result<String, AppError> {
    if let Some(path) = path {
        debug!("Reading code sample from {:?}", path);
        return fs::read_to_string(path).map_err(|e| {
            AppError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
        });
    }

    if let Some(code) = inline {
        return Ok(code.to_string());
    }

    debug!("Reading code sample from stdin");
    let mut buf = String::new();
    fallback.read_to_string(&mut buf)?;
    Ok(buf)
}

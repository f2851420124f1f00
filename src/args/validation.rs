use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    for file in file.split(';') {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// Concatenates every semi-colon separated script into one batch.
///
/// # Errors
///
/// Will return `Err` if one of the files cannot be read
pub fn combine_sql_scripts(files: &str) -> Result<String, String> {
    let mut combined = String::new();
    for file in files.split(';').filter(|f| !f.trim().is_empty()) {
        let contents = fs::read_to_string(file)
            .map_err(|e| format!("Failed to read SQL startup script '{file}': {e}"))?;
        combined.push_str(&contents);
        combined.push('\n');
    }
    Ok(combined)
}

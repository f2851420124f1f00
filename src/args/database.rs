use std::path::Path;

use super::types::Args;

impl Args {
    /// Checks the database settings before anything is opened.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database name is blank or its directory does not exist
    pub fn validate(&mut self) -> Result<(), String> {
        self.db_name = self.db_name.trim().to_string();
        if self.db_name.is_empty() {
            return Err("Database name is required".to_string());
        }
        if self.db_name == ":memory:" {
            return Ok(());
        }
        if let Some(parent) = Path::new(&self.db_name).parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(format!(
                    "The directory '{}' for the database does not exist.",
                    parent.display()
                ));
            }
        }
        Ok(())
    }
}

use std::path::Path;

use csv::WriterBuilder;

use crate::error::{AdminsError, Result};
use crate::types::User;

pub const HEADER: [&str; 3] = ["Username", "Name", "Email"];

/// Render users as CSV: a header row, then one row per user in input order.
pub fn render_csv(users: &[User]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buffer);

        writer.write_record(HEADER)?;
        for user in users {
            writer.write_record([
                user.login.as_str(),
                user.name.as_deref().unwrap_or_default(),
                user.email.as_deref().unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Create or truncate `path` and write the users to it.
///
/// The document is rendered in memory first, so a failed render never
/// touches the destination.
pub fn write_users(path: &Path, users: &[User]) -> Result<()> {
    let to_write_error = |source: csv::Error| AdminsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let contents = render_csv(users).map_err(to_write_error)?;
    std::fs::write(path, contents).map_err(|e| to_write_error(csv::Error::from(e)))
}

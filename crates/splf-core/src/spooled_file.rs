//! Spooled file metadata as listed by the remote catalog.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PATTERN_SEPARATOR: Regex = Regex::new(r",\s*").unwrap();
}

/// Fields that may appear in a spooled file name pattern.
pub const PATTERN_FIELDS: &[&str] = &[
    "name",
    "number",
    "status",
    "creationTimestamp",
    "userData",
    "size",
    "totalPages",
    "pageLength",
    "jobName",
    "jobUser",
    "jobNumber",
    "formType",
    "queueLibrary",
    "queue",
];

/// Split a comma separated name pattern into its field names.
///
/// Whitespace after each comma is ignored.
pub fn split_name_pattern(pattern: &str) -> Vec<&str> {
    PATTERN_SEPARATOR.split(pattern.trim()).collect()
}

/// One spooled file (stored print/report output of a job).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpooledFile {
    /// Owning user profile
    pub user: String,
    /// Spooled file name (e.g. QPJOBLOG)
    pub name: String,
    /// Spooled file number within the job
    pub number: u32,
    /// Status (READY, HELD, ...)
    pub status: String,
    /// Creation timestamp as reported by the catalog
    pub creation_timestamp: String,
    /// User data
    pub user_data: String,
    /// Size in bytes
    pub size: u64,
    /// Total pages
    pub total_pages: u32,
    /// Lines per page, when known
    pub page_length: Option<usize>,
    /// Qualified job name (number/user/name)
    pub qualified_job_name: String,
    /// Job name
    pub job_name: String,
    /// Job user
    pub job_user: String,
    /// Job number
    pub job_number: String,
    /// Form type
    pub form_type: String,
    /// Output queue library
    pub queue_library: String,
    /// Output queue
    pub queue: String,
    /// Printer device type (*SCS, *AFPDS, ...), when known
    pub device_type: Option<String>,
}

impl SpooledFile {
    /// Value of a name pattern field, or `None` for an unknown field.
    pub fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "name" => self.name.clone(),
            "number" => self.number.to_string(),
            "status" => self.status.clone(),
            "creationTimestamp" => self.creation_timestamp.clone(),
            "userData" => self.user_data.clone(),
            "size" => self.size.to_string(),
            "totalPages" => self.total_pages.to_string(),
            "pageLength" => self.page_length.unwrap_or(0).to_string(),
            "jobName" => self.job_name.clone(),
            "jobUser" => self.job_user.clone(),
            "jobNumber" => self.job_number.clone(),
            "formType" => self.form_type.clone(),
            "queueLibrary" => self.queue_library.clone(),
            "queue" => self.queue.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Parse a catalog: a JSON array of spooled file entries.
    pub fn list_from_json(json: &str) -> crate::Result<Vec<SpooledFile>> {
        Ok(serde_json::from_str(json)?)
    }

    /// All field values joined by single spaces, used for free-text filtering.
    pub fn searchable_text(&self) -> String {
        let mut values = vec![self.user.clone()];
        values.extend(
            PATTERN_FIELDS
                .iter()
                .filter_map(|field| self.field_value(field)),
        );
        values.push(self.qualified_job_name.clone());
        if let Some(device_type) = &self.device_type {
            values.push(device_type.clone());
        }
        values.join(" ")
    }
}

/// Kind of tree filter a spooled file was listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Spooled files of one user profile
    #[default]
    #[serde(rename = "USER")]
    User,
    /// Spooled files on one output queue
    #[serde(rename = "OUTQ")]
    OutputQueue,
}

/// Sort key for spooled file lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Spooled file name
    Name,
    /// Creation timestamp
    #[default]
    Date,
}

/// Sort options for spooled file lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Sort key
    pub order: SortOrder,
    /// Ascending when true, newest/last first otherwise
    pub ascending: bool,
}

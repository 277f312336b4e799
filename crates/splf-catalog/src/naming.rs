//! Local path names for spooled files.
//!
//! A path has the form `<owner>/<queue>/<field>~<field>~...`, where the
//! owner segment is the job user for user filters and the queue library for
//! output queue filters, and the fields follow the configured name pattern.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use splf_core::{
    split_name_pattern, Error, FilterType, Result, SpooledFile, DEFAULT_NAME_PATTERN,
};

lazy_static! {
    static ref NAME_PART_SEPARATOR: Regex = Regex::new(r"[~.]").unwrap();
}

/// Separator between name pattern fields in a file name.
const FIELD_SEPARATOR: char = '~';

/// Pattern to use when none or an empty one is configured.
fn effective_pattern(name_pattern: Option<&str>) -> &str {
    match name_pattern {
        Some(pattern) if !pattern.trim().is_empty() => pattern,
        _ => DEFAULT_NAME_PATTERN,
    }
}

/// Build the local path of a spooled file from a name pattern.
///
/// Returns [`Error::UnknownPatternField`] when the pattern names a field the
/// spooled file does not have.
pub fn build_path(
    filter_type: FilterType,
    splf: &SpooledFile,
    name_pattern: Option<&str>,
) -> Result<String> {
    let mut path = match filter_type {
        FilterType::OutputQueue => format!("{}/{}/", splf.queue_library, splf.queue),
        FilterType::User => format!("{}/{}/", splf.job_user, splf.queue),
    };

    for (i, field) in split_name_pattern(effective_pattern(name_pattern))
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            path.push(FIELD_SEPARATOR);
        }
        let value = splf
            .field_value(field)
            .ok_or_else(|| Error::UnknownPatternField(field.to_string()))?;
        path.push_str(&value);
    }

    Ok(path)
}

/// Build the local path of a spooled file including its file extension.
pub fn build_file_path(
    filter_type: FilterType,
    splf: &SpooledFile,
    name_pattern: Option<&str>,
    file_extension: &str,
) -> Result<String> {
    let path = build_path(filter_type, splf, name_pattern)?;
    Ok(format!("{path}.{file_extension}"))
}

/// Parts recovered from a spooled file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    /// First path segment: job user or output queue library
    pub owner: Option<String>,
    /// Second path segment: output queue
    pub queue: Option<String>,
    /// Name pattern fields by field name
    pub fields: HashMap<String, String>,
    /// Extension after the last `.` of the file name
    pub file_extension: Option<String>,
}

impl NameParts {
    /// Value of a name pattern field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Spooled file number, when the pattern carries a numeric `number` field.
    pub fn number(&self) -> Option<u32> {
        self.get("number")?.parse().ok()
    }

    /// Qualified job name (`number/user/name`) when all three job fields are present.
    pub fn qualified_job_name(&self) -> Option<String> {
        Some(format!(
            "{}/{}/{}",
            self.get("jobNumber")?,
            self.get("jobUser")?,
            self.get("jobName")?
        ))
    }
}

/// Break a spooled file path back into its parts using a name pattern.
///
/// Leading slashes are ignored. Pattern fields are matched positionally to
/// the `~` or `.` separated parts of the last path segment; fields without a
/// matching part are left out.
pub fn break_up_path(path: &str, name_pattern: Option<&str>) -> NameParts {
    let path = path.trim_start_matches('/');
    let segments: Vec<&str> = path.split('/').collect();
    let file_name = segments.last().copied().unwrap_or_default();
    let name_parts: Vec<&str> = NAME_PART_SEPARATOR.split(file_name).collect();

    let fields = split_name_pattern(effective_pattern(name_pattern))
        .into_iter()
        .zip(name_parts.iter())
        .map(|(field, part)| (field.to_string(), part.to_string()))
        .collect();

    NameParts {
        owner: segments.first().map(|s| s.to_string()),
        queue: segments.get(1).map(|s| s.to_string()),
        fields,
        file_extension: file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_string()),
    }
}

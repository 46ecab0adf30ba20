use super::date::{DATE_TIME_FORMAT, format_date};
use chrono::NaiveDateTime;

/// Snapshot of a file's filesystem metadata.
///
/// Timestamps are `None` when the platform or filesystem does not report
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileMetadata {
    pub exists: bool,
    pub created: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
    pub accessed: Option<NaiveDateTime>,
}

impl FileMetadata {
    pub fn missing() -> Self {
        Self::default()
    }
}

/// Render a file value.
///
/// Without a format this is the full path, whether or not the file exists.
/// `createtime`, `edittime`/`lastwritetime` and `accesstime`/`lastaccesstime`
/// select a timestamp; any other format is a date pattern applied to the
/// creation time. Missing files and unavailable timestamps render as `""`.
pub fn format_file(path: &str, meta: &FileMetadata, format: Option<&str>) -> String {
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return path.to_string();
    };
    if !meta.exists {
        return String::new();
    }

    let timestamp = |t: Option<NaiveDateTime>| {
        t.map(|t| t.format(DATE_TIME_FORMAT).to_string())
            .unwrap_or_default()
    };
    match format.to_ascii_lowercase().as_str() {
        "createtime" => timestamp(meta.created),
        "edittime" | "lastwritetime" => timestamp(meta.modified),
        "accesstime" | "lastaccesstime" => timestamp(meta.accessed),
        _ => match meta.created {
            Some(created) => format_date(&created, format)
                .unwrap_or_else(|| created.format(DATE_TIME_FORMAT).to_string()),
            None => String::new(),
        },
    }
}

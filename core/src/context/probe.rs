// Filesystem probes backing the lazy parts of an evaluation context.

use crate::values::{FileMetadata, ImageInfo};
use chrono::{DateTime, Local, NaiveDateTime};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

pub(super) fn file_metadata(path: &Path) -> FileMetadata {
    match std::fs::metadata(path) {
        Ok(meta) => {
            let modified = meta.modified().ok().map(local_time);
            FileMetadata {
                exists: true,
                // Filesystems without birth times report the last write instead.
                created: meta.created().ok().map(local_time).or(modified),
                modified,
                accessed: meta.accessed().ok().map(local_time),
            }
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "file metadata unavailable");
            FileMetadata::missing()
        }
    }
}

pub(super) fn file_size(path: &Path) -> u64 {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(_) => 0,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "file size unavailable");
            0
        }
    }
}

pub(super) fn image_info(path: &Path) -> ImageInfo {
    match imagesize::size(path) {
        Ok(dim) => ImageInfo::new(
            u32::try_from(dim.width).unwrap_or(u32::MAX),
            u32::try_from(dim.height).unwrap_or(u32::MAX),
        ),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "not a readable image");
            ImageInfo::default()
        }
    }
}

fn local_time(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}

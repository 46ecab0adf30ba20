//! Per-file data a template is rendered against.
//!
//! Cheap fields (names, index, dates) are computed up front. File metadata,
//! size and image dimensions are probed from disk on first use and at most
//! once, so templates that never mention `{file}`, `{size}` or `{image}`
//! never touch the filesystem for them.

mod probe;


use crate::values::{FileMetadata, ImageInfo};
use chrono::{Local, NaiveDateTime, NaiveTime};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EvaluationContext {
    /// File name without extension.
    pub name: String,
    /// Extension without the leading dot.
    pub ext: String,
    /// File name with extension.
    pub full_name: String,
    /// Name of the directory containing the file.
    pub dir_name: String,
    pub full_path: String,
    /// Zero-based position of the file in its batch.
    pub index: i64,
    pub total_count: i64,
    pub today: NaiveDateTime,
    pub now: NaiveDateTime,
    source: Option<PathBuf>,
    file: OnceCell<FileMetadata>,
    image: OnceCell<ImageInfo>,
    size: OnceCell<u64>,
}

impl EvaluationContext {
    /// A context for a file that need not exist on disk.
    ///
    /// Nothing is probed: file metadata reports a missing file, the image is
    /// `0x0` and the size is zero unless set with the `with_*` methods.
    pub fn new(name: impl Into<String>, ext: impl Into<String>) -> Self {
        let name = name.into();
        let ext = ext.into();
        let full_name = if ext.is_empty() {
            name.clone()
        } else {
            format!("{name}.{ext}")
        };
        let now = Local::now().naive_local();
        Self {
            full_path: full_name.clone(),
            name,
            ext,
            full_name,
            dir_name: String::new(),
            index: 0,
            total_count: 1,
            today: now.date().and_time(NaiveTime::MIN),
            now,
            source: None,
            file: OnceCell::new(),
            image: OnceCell::new(),
            size: OnceCell::new(),
        }
    }

    /// A context for a file on disk at position `index` of a batch of
    /// `total_count` files.
    pub fn from_path(path: impl AsRef<Path>, index: i64, total_count: i64) -> Self {
        let path = path.as_ref();
        let lossy = |s: Option<&std::ffi::OsStr>| {
            s.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        };
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        let mut context = Self::new(lossy(path.file_stem()), lossy(path.extension()));
        context.full_name = lossy(path.file_name());
        context.dir_name = lossy(absolute.parent().and_then(Path::file_name));
        context.full_path = absolute.to_string_lossy().into_owned();
        context.index = index;
        context.total_count = total_count;
        context.source = Some(absolute);
        context
    }

    pub fn with_index(mut self, index: i64, total_count: i64) -> Self {
        self.index = index;
        self.total_count = total_count;
        self
    }

    pub fn with_dir_name(mut self, dir_name: impl Into<String>) -> Self {
        self.dir_name = dir_name.into();
        self
    }

    pub fn with_full_path(mut self, full_path: impl Into<String>) -> Self {
        self.full_path = full_path.into();
        self
    }

    pub fn with_dates(mut self, today: NaiveDateTime, now: NaiveDateTime) -> Self {
        self.today = today;
        self.now = now;
        self
    }

    pub fn with_file(mut self, meta: FileMetadata) -> Self {
        self.file = OnceCell::with_value(meta);
        self
    }

    pub fn with_image(mut self, image: ImageInfo) -> Self {
        self.image = OnceCell::with_value(image);
        self
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size = OnceCell::with_value(bytes);
        self
    }

    pub fn file(&self) -> &FileMetadata {
        self.file.get_or_init(|| match &self.source {
            Some(path) => probe::file_metadata(path),
            None => FileMetadata::missing(),
        })
    }

    pub fn image(&self) -> ImageInfo {
        *self.image.get_or_init(|| match &self.source {
            Some(path) => probe::image_info(path),
            None => ImageInfo::default(),
        })
    }

    pub fn size(&self) -> u64 {
        *self.size.get_or_init(|| match &self.source {
            Some(path) => probe::file_size(path),
            None => 0,
        })
    }
}

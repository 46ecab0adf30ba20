//! Built-in template variables.
//!
//! [`Variable`] is the closed set of names a template can reference. Both the
//! evaluator and the compiler resolve names through [`Variable::from_name`]
//! and read values with [`Variable::bind`], so the two execution paths agree
//! on every binding. The [`all`] catalogue carries human-readable metadata
//! for tooling such as `--list-variables`.

use crate::context::EvaluationContext;
use crate::values::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Name,
    Ext,
    FullName,
    DirName,
    Index,
    ReverseIndex,
    Today,
    Now,
    Image,
    File,
    Size,
}

impl Variable {
    pub const ALL: [Variable; 11] = [
        Variable::Name,
        Variable::Ext,
        Variable::FullName,
        Variable::DirName,
        Variable::Index,
        Variable::ReverseIndex,
        Variable::Today,
        Variable::Now,
        Variable::Image,
        Variable::File,
        Variable::Size,
    ];

    /// Resolve a variable name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variable| variable.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Variable::Name => "name",
            Variable::Ext => "ext",
            Variable::FullName => "fullname",
            Variable::DirName => "dirname",
            Variable::Index => "i",
            Variable::ReverseIndex => "iv",
            Variable::Today => "today",
            Variable::Now => "now",
            Variable::Image => "image",
            Variable::File => "file",
            Variable::Size => "size",
        }
    }

    /// The value this variable takes for one file.
    pub fn bind(self, ctx: &EvaluationContext) -> Value {
        match self {
            Variable::Name => Value::Str(ctx.name.clone()),
            Variable::Ext => Value::Str(ctx.ext.clone()),
            Variable::FullName => Value::Str(ctx.full_name.clone()),
            Variable::DirName => Value::Str(ctx.dir_name.clone()),
            Variable::Index => Value::index(ctx.index, ctx.total_count),
            Variable::ReverseIndex => {
                let reversed = ctx
                    .total_count
                    .saturating_sub(1)
                    .saturating_sub(ctx.index)
                    .max(0);
                Value::index(reversed, ctx.total_count)
            }
            Variable::Today => Value::Date(ctx.today),
            Variable::Now => Value::Date(ctx.now),
            Variable::Image => Value::Image(ctx.image()),
            Variable::File => Value::File {
                path: ctx.full_path.clone(),
                meta: ctx.file().clone(),
            },
            Variable::Size => Value::Size(ctx.size()),
        }
    }

    pub fn info(self) -> &'static VariableInfo {
        // `CATALOGUE` is declared in `Variable::ALL` order.
        &CATALOGUE[self as usize]
    }
}

// ============================================================================
// Catalogue
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    String,
    Number,
    Date,
    DateTime,
    Image,
    File,
    Size,
}

/// A suggested format string for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOption {
    pub format: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableInfo {
    pub variable: Variable,
    pub name: &'static str,
    pub kind: VariableKind,
    pub description: &'static str,
    pub formats: &'static [FormatOption],
}

const fn option(format: &'static str, description: &'static str) -> FormatOption {
    FormatOption {
        format,
        description,
    }
}

const INDEX_FORMATS: &[FormatOption] = &[
    option("零", "Chinese numerals from zero: 零, 一, 二..."),
    option("1", "Numbers from one: 1, 2, 3..."),
    option("一", "Chinese numerals from one: 一, 二, 三..."),
    option("壹", "Financial Chinese numerals from one: 壹, 贰, 叁..."),
    option("00", "Two digits from 00: 00, 01, 02..."),
    option("01", "Two digits from 01: 01, 02, 03..."),
    option("000", "Three digits from 000: 000, 001, 002..."),
    option("001", "Three digits from 001: 001, 002, 003..."),
    option("0000", "Four digits from 0000: 0000, 0001, 0002..."),
    option("0001", "Four digits from 0001: 0001, 0002, 0003..."),
    option("00000", "Five digits from 00000: 00000, 00001, 00002..."),
    option("00001", "Five digits from 00001: 00001, 00002, 00003..."),
];

const TODAY_FORMATS: &[FormatOption] = &[
    option("yyyy-MM-dd", "2024-01-01"),
    option("yyyy年MM月dd日", "2024年01月01日"),
    option("yyyy/MM/dd", "2024/01/01"),
    option("yyyyMMdd", "20240101"),
    option("MM-dd", "01-01"),
    option("MM月dd日", "01月01日"),
];

const NOW_FORMATS: &[FormatOption] = &[
    option("yyyy年MM月dd日 HH时mm分ss秒", "2024年01月01日 12时30分45秒"),
    option("yyyy年MM月dd日 HH时mm分", "2024年01月01日 12时30分"),
    option("yyyyMMddHHmmss", "20240101123045"),
    option("yyyyMMddHHmm", "202401011230"),
    option("HH时mm分ss秒", "12时30分45秒"),
    option("HH时mm分", "12时30分"),
    option("yyyy-MM-dd HHmmss", "2024-01-01 123045"),
    option("yyyy-MM-dd HHmm", "2024-01-01 1230"),
];

const IMAGE_FORMATS: &[FormatOption] = &[
    option("w", "Image width in pixels"),
    option("h", "Image height in pixels"),
    option("wxh", "Width x height, e.g. 1920x1080"),
];

const FILE_FORMATS: &[FormatOption] = &[
    option("createTime", "Creation time, e.g. 2024-01-01 12:30:45"),
    option("editTime", "Last write time"),
    option("accessTime", "Last access time"),
    option("yyyyMMdd", "Creation date with a custom pattern"),
];

const SIZE_FORMATS: &[FormatOption] = &[
    option("1b", "Bytes, e.g. 1024 B"),
    option("1kb", "Kilobytes, e.g. 1024 KB"),
    option("1mb", "Megabytes, e.g. 1.5 MB"),
    option(".2f", "Automatic unit with two decimals, e.g. 1.50 MB"),
    option(".1f", "Automatic unit with one decimal, e.g. 1.5 MB"),
    option(".0f", "Automatic unit without decimals, e.g. 2 MB"),
];

const fn entry(
    variable: Variable,
    name: &'static str,
    kind: VariableKind,
    description: &'static str,
    formats: &'static [FormatOption],
) -> VariableInfo {
    VariableInfo {
        variable,
        name,
        kind,
        description,
        formats,
    }
}

static CATALOGUE: [VariableInfo; 11] = [
    entry(
        Variable::Name,
        "name",
        VariableKind::String,
        "File name without extension",
        &[],
    ),
    entry(
        Variable::Ext,
        "ext",
        VariableKind::String,
        "File extension without the dot",
        &[],
    ),
    entry(
        Variable::FullName,
        "fullname",
        VariableKind::String,
        "File name including extension",
        &[],
    ),
    entry(
        Variable::DirName,
        "dirname",
        VariableKind::String,
        "Name of the containing directory",
        &[],
    ),
    entry(
        Variable::Index,
        "i",
        VariableKind::Number,
        "Sequence index from 0. Supports expressions such as {2i+1:000}",
        INDEX_FORMATS,
    ),
    entry(
        Variable::ReverseIndex,
        "iv",
        VariableKind::Number,
        "Reverse sequence index: with 10 files the first gets 9 and the last 0",
        INDEX_FORMATS,
    ),
    entry(
        Variable::Today,
        "today",
        VariableKind::Date,
        "Current date, e.g. {today:yyyy-MM-dd}",
        TODAY_FORMATS,
    ),
    entry(
        Variable::Now,
        "now",
        VariableKind::DateTime,
        "Current date and time, e.g. {now:yyyyMMddHHmmss}. File names cannot contain colons",
        NOW_FORMATS,
    ),
    entry(
        Variable::Image,
        "image",
        VariableKind::Image,
        "Image resolution: {image:w}, {image:h} or {image:wxh}",
        IMAGE_FORMATS,
    ),
    entry(
        Variable::File,
        "file",
        VariableKind::File,
        "Full path of the file, or its timestamps with a format",
        FILE_FORMATS,
    ),
    entry(
        Variable::Size,
        "size",
        VariableKind::Size,
        "File size: {size:1kb}, {size:.2f} and so on",
        SIZE_FORMATS,
    ),
];

/// Every built-in variable, in a stable order.
pub fn all() -> &'static [VariableInfo] {
    &CATALOGUE
}

/// Look up a variable's metadata by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static VariableInfo> {
    Variable::from_name(name).map(Variable::info)
}

//! Contexts built from real files: lazy metadata, size and image probes.

use pretty_assertions::assert_eq;
use renamer_core::{Engine, EvaluationContext, values::ImageInfo};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The smallest PNG prefix image probes need: signature plus IHDR chunk.
fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    // Bit depth, color type, compression, filter, interlace, then CRC.
    bytes.extend_from_slice(&[8, 2, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_names_and_directory() {
    let dir = TempDir::new().unwrap();
    let album = dir.path().join("album");
    fs::create_dir(&album).unwrap();
    let path = write(&album, "beach.JPG", b"not really a jpeg");

    let ctx = EvaluationContext::from_path(&path, 0, 1);
    assert_eq!(ctx.name, "beach");
    assert_eq!(ctx.ext, "JPG");
    assert_eq!(ctx.full_name, "beach.JPG");
    assert_eq!(ctx.dir_name, "album");
    assert!(Path::new(&ctx.full_path).is_absolute());
}

#[test]
fn test_size_is_probed() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "data.bin", &vec![0u8; 1536]);
    let ctx = EvaluationContext::from_path(&path, 0, 1);
    assert_eq!(ctx.size(), 1536);

    let engine = Engine::default();
    assert_eq!(engine.render("{size}", &ctx).unwrap(), "1.50 KB");
    assert_eq!(engine.render("{size:1b}", &ctx).unwrap(), "1536 B");
}

#[test]
fn test_image_dimensions_are_probed() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "pixel.png", &png_header(320, 200));
    let ctx = EvaluationContext::from_path(&path, 0, 1);
    assert_eq!(ctx.image(), ImageInfo::new(320, 200));
    assert_eq!(
        Engine::default().render("{name}_{image:wxh}", &ctx).unwrap(),
        "pixel_320x200"
    );
}

#[test]
fn test_non_image_has_empty_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "notes.txt", b"plain text");
    let ctx = EvaluationContext::from_path(&path, 0, 1);
    assert_eq!(ctx.image(), ImageInfo::default());
    assert_eq!(Engine::default().render("[{image}]", &ctx).unwrap(), "[]");
}

#[test]
fn test_file_metadata() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "report.pdf", b"%PDF");
    let ctx = EvaluationContext::from_path(&path, 0, 1);

    let meta = ctx.file();
    assert!(meta.exists);
    assert!(meta.modified.is_some());
    assert!(meta.created.is_some());

    let engine = Engine::default();
    assert_eq!(engine.render("{file}", &ctx).unwrap(), ctx.full_path);
    let created = engine.render("{file:yyyy}", &ctx).unwrap();
    assert_eq!(created.len(), 4);
    assert!(created.chars().all(|c| c.is_ascii_digit()));
    assert!(!engine.render("{file:editTime}", &ctx).unwrap().is_empty());
}

#[test]
fn test_missing_file_renders_empty_timestamps() {
    let dir = TempDir::new().unwrap();
    let ctx = EvaluationContext::from_path(dir.path().join("gone.txt"), 0, 1);
    let engine = Engine::default();
    assert_eq!(engine.render("[{file:createTime}]", &ctx).unwrap(), "[]");
    assert_eq!(engine.render("{size}", &ctx).unwrap(), "0 B");
}

#[test]
fn test_render_paths_batch() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<_> = ["b.txt", "a.txt", "c.txt"]
        .iter()
        .map(|name| write(dir.path(), name, b"x"))
        .collect();
    let names: Vec<String> = Engine::default()
        .render_paths("{i:01}_{name}.{ext}", &paths)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["01_b.txt", "02_a.txt", "03_c.txt"]);
}

use super::{FileMetadata, ImageInfo, format_file, format_image, format_number, format_size};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

#[test]
fn test_number_formats() {
    assert_eq!(format_number(42, None), "42");
    assert_eq!(format_number(42, Some("")), "42");
    assert_eq!(format_number(7, Some("000")), "007");
    assert_eq!(format_number(1234, Some("00")), "1234");
    assert_eq!(format_number(7, Some("#")), "7");
    assert_eq!(format_number(7, Some("D3")), "007");
    assert_eq!(format_number(-7, Some("d3")), "-007");
    assert_eq!(format_number(255, Some("X")), "FF");
    assert_eq!(format_number(255, Some("x4")), "00ff");
    assert_eq!(format_number(5, Some("F")), "5.00");
    assert_eq!(format_number(5, Some("F0")), "5");
    assert_eq!(format_number(1234567, Some("N0")), "1,234,567");
    assert_eq!(format_number(-1234, Some("N")), "-1,234.00");
}

#[test]
fn test_number_unknown_formats_render_plainly() {
    assert_eq!(format_number(42, Some("abc")), "42");
    assert_eq!(format_number(42, Some("Dx")), "42");
    assert_eq!(format_number(42, Some("C")), "42");
    assert_eq!(format_number(42, Some("D1000")), "42");
}

#[test]
fn test_size_formats() {
    assert_eq!(format_size(0, None), "0 B");
    assert_eq!(format_size(0, Some("1kb")), "0 B");
    assert_eq!(format_size(512, None), "512.00 B");
    assert_eq!(format_size(1536, None), "1.50 KB");
    assert_eq!(format_size(1536, Some("1b")), "1536 B");
    assert_eq!(format_size(1536, Some("1KB")), "2 KB");
    assert_eq!(format_size(1024 * 1024 * 3 / 2, Some("1mb")), "1.50 MB");
    assert_eq!(format_size(1536, Some(".1f")), "1.5 KB");
    assert_eq!(format_size(1536, Some(".0f")), "2 KB");
    assert_eq!(format_size(1536, Some(".xf")), "1.50 KB");
    assert_eq!(format_size(1536, Some(".-1f")), "1.50 KB");
    assert_eq!(format_size(1536, Some("weird")), "1.50 KB");
    assert_eq!(format_size(5 * 1024_u64.pow(4), None), "5.00 TB");
    assert_eq!(format_size(2048 * 1024_u64.pow(4), None), "2048.00 TB");
}

#[test]
fn test_size_rounds_half_away_from_zero() {
    // 2.5 KB
    assert_eq!(format_size(2560, Some(".0f")), "3 KB");
    // 0.5 KB
    assert_eq!(format_size(512, Some("1kb")), "1 KB");
}

#[test]
fn test_image_formats() {
    let image = ImageInfo::new(1920, 1080);
    assert_eq!(format_image(&image, None), "1920x1080");
    assert_eq!(format_image(&image, Some("w")), "1920");
    assert_eq!(format_image(&image, Some("H")), "1080");
    assert_eq!(format_image(&image, Some("WxH")), "1920x1080");
    assert_eq!(format_image(&image, Some("other")), "1920x1080");
    assert_eq!(format_image(&ImageInfo::default(), None), "");
    assert_eq!(format_image(&ImageInfo::default(), Some("w")), "");
}

#[test]
fn test_file_formats() {
    let created = NaiveDate::from_ymd_opt(2023, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap();
    let modified = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let meta = FileMetadata {
        exists: true,
        created: Some(created),
        modified: Some(modified),
        accessed: None,
    };
    let path = "/photos/a.jpg";
    assert_eq!(format_file(path, &meta, None), path);
    assert_eq!(format_file(path, &meta, Some("createTime")), "2023-12-31 23:59:58");
    assert_eq!(format_file(path, &meta, Some("edittime")), "2024-01-02 03:04:05");
    assert_eq!(format_file(path, &meta, Some("LastWriteTime")), "2024-01-02 03:04:05");
    assert_eq!(format_file(path, &meta, Some("accesstime")), "");
    assert_eq!(format_file(path, &meta, Some("yyyyMMdd")), "20231231");
    assert_eq!(format_file(path, &meta, Some("'bad")), "2023-12-31 23:59:58");
}

#[test]
fn test_missing_file() {
    let meta = FileMetadata::missing();
    assert_eq!(format_file("/gone.txt", &meta, None), "/gone.txt");
    assert_eq!(format_file("/gone.txt", &meta, Some("createtime")), "");
    assert_eq!(format_file("/gone.txt", &meta, Some("yyyy")), "");
}

/// Pixel dimensions of an image file. `0x0` means "not an image".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

pub fn format_image(info: &ImageInfo, format: Option<&str>) -> String {
    if info.is_empty() {
        return String::new();
    }
    match format {
        Some(f) if f.eq_ignore_ascii_case("w") => info.width.to_string(),
        Some(f) if f.eq_ignore_ascii_case("h") => info.height.to_string(),
        _ => format!("{}x{}", info.width, info.height),
    }
}

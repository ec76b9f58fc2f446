//! 位图转 .ico：读入任意支持的图片，缩放居中到单帧 256×256，再用 ico 编码写出

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use thiserror::Error;
use tracing::{debug, info};

/// ICO 帧边长（像素）
pub const ICON_SIZE: u32 = 256;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot encode icon: {0}")]
    Encode(#[source] std::io::Error),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 等比缩放到 256×256 以内并居中，四周透明
pub fn render_frame(img: &DynamicImage) -> RgbaImage {
    let (w, h) = (img.width().max(1), img.height().max(1));
    let scale = f64::min(ICON_SIZE as f64 / w as f64, ICON_SIZE as f64 / h as f64);
    let fit_w = ((w as f64 * scale).round() as u32).clamp(1, ICON_SIZE);
    let fit_h = ((h as f64 * scale).round() as u32).clamp(1, ICON_SIZE);

    let scaled = imageops::resize(&img.to_rgba8(), fit_w, fit_h, FilterType::Lanczos3);
    let mut canvas = RgbaImage::new(ICON_SIZE, ICON_SIZE);
    let x = (ICON_SIZE - fit_w) / 2;
    let y = (ICON_SIZE - fit_h) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
    canvas
}

/// 把单帧 RGBA 编码为完整的 .ico 文件字节
pub fn encode_ico(frame: &RgbaImage) -> Result<Vec<u8>, ConvertError> {
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    let image = ico::IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
    let entry = ico::IconDirEntry::encode(&image).map_err(ConvertError::Encode)?;
    icon_dir.add_entry(entry);

    let mut bytes = Vec::new();
    icon_dir.write(&mut bytes).map_err(ConvertError::Encode)?;
    Ok(bytes)
}

/// 转换 `input` 为 `output`（.ico）。先在内存中编码完，再创建输出文件。
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let img = image::open(input).map_err(|source| ConvertError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(width = img.width(), height = img.height(), "source image decoded");

    let bytes = encode_ico(&render_frame(&img))?;
    std::fs::write(output, &bytes).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(input = %input.display(), output = %output.display(), bytes = bytes.len(), "icon written");
    Ok(())
}

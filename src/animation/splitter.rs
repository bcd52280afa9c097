use super::{Animation, Frame};
use crate::error::{Error, Result};
use colored::Colorize;
use std::{
    borrow::Cow,
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// JPEG 固定使用最高质量
const JPEG_QUALITY: u8 = 100;
/// 单帧 GIF 的调色板大小
const GIF_MAX_COLORS: u32 = 256;

/// 拆分后每帧的保存格式
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FrameFormat {
    Gif,
    Jpeg,
}

impl FrameFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FrameFormat::Gif => "gif",
            FrameFormat::Jpeg => "jpeg",
        }
    }
}

/// 拆分结果
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SplitSummary {
    pub written: usize,
    pub failed: usize,
}

/// 把动图的每一帧保存为单独的图像
#[derive(Debug)]
pub struct Splitter<'a> {
    animation: &'a Animation,
    /// 输出文件夹，需要提前创建
    folder: &'a Path,
    format: FrameFormat,
}

impl<'a> Splitter<'a> {
    pub fn new(animation: &'a Animation, folder: &'a Path, format: FrameFormat) -> Splitter<'a> {
        Splitter {
            animation,
            folder,
            format,
        }
    }

    /// 第 `index` 帧的输出路径，序号至少两位
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.folder
            .join(format!("frame{:02}.{}", index, self.format.extension()))
    }

    /// 逐帧保存，单帧失败时输出错误并继续处理剩余的帧
    pub fn split(&self) -> SplitSummary {
        let mut summary = SplitSummary::default();
        for (index, frame) in self.animation.frames().iter().enumerate() {
            match self.write_frame(frame, &self.frame_path(index)) {
                Ok(()) => summary.written += 1,
                Err(err) => {
                    eprintln!("{} {}", "error:".red().bold(), err);
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    fn write_frame(&self, frame: &Frame, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|err| frame_error(path, err))?;
        let mut writer = BufWriter::new(file);
        let encoded = match self.format {
            FrameFormat::Jpeg => self.encode_jpeg(frame, &mut writer),
            FrameFormat::Gif => self.encode_gif(frame, &mut writer),
        };
        encoded.map_err(|err| frame_error(path, err))?;
        // 缓冲区的写入错误也算作这一帧失败
        writer.flush().map_err(|err| frame_error(path, err))
    }

    fn encode_jpeg<W: Write>(&self, frame: &Frame, writer: &mut W) -> Result<()> {
        // JPEG 没有透明通道，透明像素保存为黑色
        let data: Vec<u8> = frame
            .to_rgba(self.animation.global_palette())
            .iter()
            .flat_map(|p| [p.r, p.g, p.b])
            .collect();
        let encoder = jpeg_encoder::Encoder::new(writer, JPEG_QUALITY);
        encoder.encode(
            &data,
            frame.width,
            frame.height,
            jpeg_encoder::ColorType::Rgb,
        )?;
        Ok(())
    }

    fn encode_gif<W: Write>(&self, frame: &Frame, writer: &mut W) -> Result<()> {
        let pixels = frame.to_rgba(self.animation.global_palette());

        let mut attr = imagequant::new();
        attr.set_max_colors(GIF_MAX_COLORS)?;
        let mut image = attr.new_image(
            pixels,
            frame.width as usize,
            frame.height as usize,
            0.0,
        )?;
        let mut res = attr.quantize(&mut image)?;
        res.set_dithering_level(1.0)?;
        let (palette, indices) = res.remapped(&mut image)?;

        let mut rgb_palette: Vec<u8> = Vec::with_capacity(palette.len() * 3);
        for c in palette.iter() {
            rgb_palette.extend_from_slice(&[c.r, c.g, c.b]);
        }
        let transparent = palette.iter().position(|c| c.a == 0).map(|i| i as u8);

        // 画布延伸到帧的右下角，帧保持原来的位置
        let screen_width = frame.left.saturating_add(frame.width);
        let screen_height = frame.top.saturating_add(frame.height);
        let mut encoder = gif::Encoder::new(writer, screen_width, screen_height, &[])?;
        encoder.write_frame(&gif::Frame {
            left: frame.left,
            top: frame.top,
            width: frame.width,
            height: frame.height,
            buffer: Cow::Owned(indices),
            palette: Some(rgb_palette),
            transparent,
            ..gif::Frame::default()
        })?;
        encoder.into_inner().map_err(gif::EncodingError::from)?;
        Ok(())
    }
}

fn frame_error(path: &Path, err: impl Display) -> Error {
    Error::FrameWrite {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

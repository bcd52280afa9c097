use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 无法打开或创建文件
    #[error("I/O error on \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// 输入文件不是有效的 GIF
    #[error("unable to decode \"{}\" as a GIF: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: gif::DecodingError,
    },
    /// 标准输出写入失败
    #[error("could not write to stdout: {0}")]
    Stdout(#[source] io::Error),
    /// GIF 中没有任何图像
    #[error("\"{}\" contains no image data", .path.display())]
    NoFrames { path: PathBuf },
    /// 截取的起始帧大于结束帧
    #[error("invalid trim range {start}..{end}: the end frame must not be smaller than the start frame")]
    InvalidTrimRange { start: usize, end: usize },
    /// 截取范围内没有任何帧
    #[error("invalid trim range {start}..{start}: at least one frame must be kept")]
    EmptyTrimRange { start: usize },
    /// 截取的结束帧超出了总帧数
    #[error("invalid trim range: end frame {end} is past the last frame ({frames} frames)")]
    TrimOutOfBounds { end: usize, frames: usize },
    /// 只有 `-1` 表示未设置，其他负数无效
    #[error("invalid frame index {value}: use -1 to leave it unset")]
    NegativeFrameIndex { value: i64 },
    /// 单帧写入失败，不会中断拆分
    #[error("could not write frame \"{}\": {reason}", .path.display())]
    FrameWrite { path: PathBuf, reason: String },
    /// 截取后的 GIF 编码失败
    #[error("unable to encode \"{}\": {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: gif::EncodingError,
    },
    #[error("gif encoding failed: {0}")]
    Gif(#[from] gif::EncodingError),
    #[error("quantization failed: {0}")]
    Quantize(#[from] imagequant::Error),
    #[error("jpeg encoding failed: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),
}

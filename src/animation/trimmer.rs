use super::Animation;
use crate::error::{Error, Result};
use gif::{DisposalMethod, Repeat};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// 截取范围 `[start, end)`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TrimRange {
    pub start: usize,
    pub end: usize,
}

impl TrimRange {
    /// 补全未设置的边界并检查范围。
    ///
    /// 未设置起始帧时从 `0` 开始，未设置结束帧时截取到最后一帧。
    /// 截取结果至少要有一帧。
    pub fn normalize(
        start: Option<usize>,
        end: Option<usize>,
        frame_count: usize,
    ) -> Result<TrimRange> {
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(frame_count);
        if start > end {
            return Err(Error::InvalidTrimRange { start, end });
        }
        if start == end {
            return Err(Error::EmptyTrimRange { start });
        }
        if end > frame_count {
            return Err(Error::TrimOutOfBounds {
                end,
                frames: frame_count,
            });
        }
        Ok(TrimRange { start, end })
    }
}

impl Animation {
    /// 复制 `range` 内的帧生成新的动图，原动图不变
    pub fn trim(&self, range: TrimRange) -> Animation {
        let TrimRange { start, end } = range;
        Animation {
            frames: self.frames[start..end].to_vec(),
            delays: self.delays[start..end].to_vec(),
            disposals: self.disposals[start..end].to_vec(),
            repeat: self.repeat,
            width: self.width,
            height: self.height,
            global_palette: self.global_palette.clone(),
        }
    }

    /// 编码为 GIF 文件
    pub fn write_gif(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let encode_error = |source| Error::Encode {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = self.encode(BufWriter::new(file)).map_err(encode_error)?;
        writer
            .flush()
            .map_err(|source| encode_error(gif::EncodingError::Io(source)))
    }

    /// 写出 GIF 数据流，返回写完结尾块后的 `writer`
    pub fn encode<W: Write>(&self, writer: W) -> std::result::Result<W, gif::EncodingError> {
        let palette = self.global_palette().unwrap_or(&[]);
        let mut encoder = gif::Encoder::new(writer, self.width(), self.height(), palette)?;
        // 编码器把 Finite(0) 写成 0，而 0 表示无限循环，所以没有循环扩展块时不写
        if self.repeat() != Repeat::Finite(0) {
            encoder.set_repeat(self.repeat())?;
        }
        for ((frame, &delay), &disposal) in self
            .frames()
            .iter()
            .zip(self.delays())
            .zip(self.disposals())
        {
            let dispose = DisposalMethod::from_u8(disposal).unwrap_or(DisposalMethod::Any);
            encoder.write_frame(&frame.to_gif(delay, dispose))?;
        }
        Ok(encoder.into_inner()?)
    }
}

use super::{Animation, Frame};
use crate::error::{Error, Result};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

impl Animation {
    /// 打开并解码 GIF 文件
    pub fn open(path: &Path) -> Result<Animation> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Animation::read(BufReader::new(file), path)
    }

    /// 解码任意数据源，`path` 只用于错误信息
    pub fn read<R: Read>(reader: R, path: &Path) -> Result<Animation> {
        let decode_error = |source| Error::Decode {
            path: path.to_path_buf(),
            source,
        };

        let mut options = gif::DecodeOptions::new();
        // 保留调色板索引，截取后按原样重新编码
        options.set_color_output(gif::ColorOutput::Indexed);
        let mut decoder = options.read_info(reader).map_err(decode_error)?;

        let mut frames = vec![];
        let mut delays = vec![];
        let mut disposals = vec![];
        while let Some(frame) = decoder.read_next_frame().map_err(decode_error)? {
            frames.push(Frame::from_gif(frame));
            delays.push(frame.delay);
            disposals.push(frame.dispose as u8);
        }

        if frames.is_empty() {
            return Err(Error::NoFrames {
                path: path.to_path_buf(),
            });
        }

        // 循环扩展块可能出现在任意一帧之前，所以读完所有帧后再取
        let repeat = decoder.repeat();
        let width = decoder.width();
        let height = decoder.height();
        let global_palette = decoder.global_palette().map(<[u8]>::to_vec);

        Animation::new(
            frames,
            delays,
            disposals,
            repeat,
            width,
            height,
            global_palette,
        )
        .ok_or_else(|| Error::NoFrames {
            path: path.to_path_buf(),
        })
    }
}

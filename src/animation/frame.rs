use rgb::RGBA8;
use std::borrow::Cow;

/// GIF 中的一帧，保存的是调色板索引
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    /// 调色板索引，长度为 `width * height`，按行顺序排列（解码器已去除隔行）
    pub pixels: Vec<u8>,
    /// 局部调色板，`None` 时使用全局调色板
    pub palette: Option<Vec<u8>>,
    pub transparent: Option<u8>,
}

impl Frame {
    pub fn new(
        left: u16,
        top: u16,
        width: u16,
        height: u16,
        pixels: Vec<u8>,
        palette: Option<Vec<u8>>,
        transparent: Option<u8>,
    ) -> Frame {
        Frame {
            left,
            top,
            width,
            height,
            pixels,
            palette,
            transparent,
        }
    }

    /// 从解码器的帧复制出索引数据
    pub fn from_gif(frame: &gif::Frame<'_>) -> Frame {
        Frame::new(
            frame.left,
            frame.top,
            frame.width,
            frame.height,
            frame.buffer.to_vec(),
            frame.palette.clone(),
            frame.transparent,
        )
    }

    /// 转为编码器使用的帧，延时和处置方法由动画提供
    pub fn to_gif(&self, delay: u16, dispose: gif::DisposalMethod) -> gif::Frame<'_> {
        gif::Frame {
            delay,
            dispose,
            transparent: self.transparent,
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
            // 像素已经是逐行顺序，编码器不会重新隔行排列
            interlaced: false,
            palette: self.palette.clone(),
            buffer: Cow::Borrowed(&self.pixels),
            ..gif::Frame::default()
        }
    }

    /// 根据调色板展开为 RGBA 像素。
    ///
    /// 透明索引展开为全透明的黑色，超出调色板范围的索引展开为不透明的黑色。
    pub fn to_rgba(&self, global_palette: Option<&[u8]>) -> Vec<RGBA8> {
        let palette = self.palette.as_deref().or(global_palette).unwrap_or(&[]);
        self.pixels
            .iter()
            .map(|&index| {
                if Some(index) == self.transparent {
                    return RGBA8::new(0, 0, 0, 0);
                }
                let offset = index as usize * 3;
                match palette.get(offset..offset + 3) {
                    Some(rgb) => RGBA8::new(rgb[0], rgb[1], rgb[2], 255),
                    None => RGBA8::new(0, 0, 0, 255),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_local_palette_over_global() {
        let frame = Frame::new(0, 0, 2, 1, vec![0, 1], Some(vec![1, 2, 3, 4, 5, 6]), None);
        let global = [9u8; 6];
        let rgba = frame.to_rgba(Some(&global));
        assert_eq!(rgba, vec![RGBA8::new(1, 2, 3, 255), RGBA8::new(4, 5, 6, 255)]);
    }

    #[test]
    fn transparent_and_out_of_range_indices() {
        let frame = Frame::new(0, 0, 3, 1, vec![0, 1, 7], None, Some(1));
        let global = [10, 20, 30, 40, 50, 60];
        let rgba = frame.to_rgba(Some(&global));
        assert_eq!(
            rgba,
            vec![
                RGBA8::new(10, 20, 30, 255),
                RGBA8::new(0, 0, 0, 0),
                RGBA8::new(0, 0, 0, 255),
            ]
        );
    }

    #[test]
    fn gif_frame_conversion_keeps_indices() {
        let frame = Frame::new(2, 3, 2, 2, vec![0, 1, 1, 0], None, Some(0));
        let encoded = frame.to_gif(25, gif::DisposalMethod::Background);
        assert_eq!(encoded.delay, 25);
        assert_eq!(encoded.dispose, gif::DisposalMethod::Background);
        assert!(!encoded.interlaced);
        assert_eq!(Frame::from_gif(&encoded), frame);
    }
}

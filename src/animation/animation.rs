use super::Frame;
use gif::Repeat;

/// 解码后的完整动图。
///
/// `frames`、`delays`、`disposals` 三个数组一一对应，长度始终等于帧数，
/// 只能通过 [`Animation::new`] 构造。
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub(super) frames: Vec<Frame>,
    /// 每帧延时，单位 1/100 秒
    pub(super) delays: Vec<u16>,
    /// 每帧的处置方法代码
    pub(super) disposals: Vec<u8>,
    pub(super) repeat: Repeat,
    pub(super) width: u16,
    pub(super) height: u16,
    pub(super) global_palette: Option<Vec<u8>>,
}

impl Animation {
    /// 三个数组长度不一致时返回 `None`
    pub fn new(
        frames: Vec<Frame>,
        delays: Vec<u16>,
        disposals: Vec<u8>,
        repeat: Repeat,
        width: u16,
        height: u16,
        global_palette: Option<Vec<u8>>,
    ) -> Option<Animation> {
        if frames.len() != delays.len() || frames.len() != disposals.len() {
            return None;
        }
        Some(Animation {
            frames,
            delays,
            disposals,
            repeat,
            width,
            height,
            global_palette,
        })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn delays(&self) -> &[u16] {
        &self.delays
    }

    pub fn disposals(&self) -> &[u8] {
        &self.disposals
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// 循环次数：`0` 表示无限循环，`-1` 表示文件中没有循环扩展块
    pub fn loop_count(&self) -> i32 {
        match self.repeat {
            Repeat::Infinite => 0,
            Repeat::Finite(0) => -1,
            Repeat::Finite(count) => i32::from(count),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn global_palette(&self) -> Option<&[u8]> {
        self.global_palette.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(0, 0, 1, 1, vec![0], None, None)
    }

    #[test]
    fn rejects_mismatched_sequences() {
        let animation = Animation::new(
            vec![frame(), frame()],
            vec![10],
            vec![0, 0],
            Repeat::Infinite,
            1,
            1,
            None,
        );
        assert!(animation.is_none());
    }

    #[test]
    fn loop_count_follows_gif_convention() {
        let build = |repeat| {
            Animation::new(vec![frame()], vec![0], vec![0], repeat, 1, 1, None)
                .unwrap()
                .loop_count()
        };
        assert_eq!(build(Repeat::Infinite), 0);
        assert_eq!(build(Repeat::Finite(0)), -1);
        assert_eq!(build(Repeat::Finite(3)), 3);
    }
}

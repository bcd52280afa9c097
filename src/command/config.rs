use super::Args;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// 解析后的运行配置，创建后不再修改
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// 输入的 GIF 文件
    pub input: PathBuf,
    /// 拆分帧的保存文件夹
    pub output: PathBuf,
    pub split: bool,
    /// 拆分的帧保存为 JPEG
    pub jpeg: bool,
    pub trim_start: Option<usize>,
    pub trim_end: Option<usize>,
}

impl Config {
    /// 设置了任意一个截取边界时才截取
    pub fn should_trim(&self) -> bool {
        self.trim_start.is_some() || self.trim_end.is_some()
    }
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Config> {
        Ok(Config {
            trim_start: frame_index(args.start)?,
            trim_end: frame_index(args.end)?,
            input: args.input,
            output: args.output,
            split: args.split,
            jpeg: args.jpeg,
        })
    }
}

/// 命令行用 `-1` 表示未设置
fn frame_index(value: i64) -> Result<Option<usize>> {
    if value == -1 {
        return Ok(None);
    }
    usize::try_from(value)
        .map(Some)
        .map_err(|_| Error::NegativeFrameIndex { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_one_means_unset() {
        assert_eq!(frame_index(-1).unwrap(), None);
        assert_eq!(frame_index(0).unwrap(), Some(0));
        assert_eq!(frame_index(12).unwrap(), Some(12));
    }

    #[test]
    fn other_negative_values_are_rejected() {
        let err = frame_index(-3).unwrap_err();
        assert!(matches!(err, Error::NegativeFrameIndex { value: -3 }));
    }
}

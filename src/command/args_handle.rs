use super::Config;
use crate::animation::{report, Animation, FrameFormat, Splitter, TrimRange};
use crate::error::{Error, Result};
use clap::Parser;
use colored::Colorize;
use std::{fs, io, path::Path, path::PathBuf};

/// 截取结果固定保存在当前工作路径下
const TRIMMED_FILE_NAME: &str = "trimmed.gif";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(help = "要处理的 GIF 文件路径")]
    pub input: PathBuf,

    #[arg(
        default_value_t = -1,
        allow_negative_numbers = true,
        help = "截取的起始帧（包含），-1 表示从第一帧开始"
    )]
    pub start: i64,

    #[arg(
        default_value_t = -1,
        allow_negative_numbers = true,
        help = "截取的结束帧（不包含），-1 表示截取到最后一帧"
    )]
    pub end: i64,

    #[arg(short = 'o', long, default_value = "out", help = "拆分后每帧图像的保存文件夹")]
    pub output: PathBuf,

    #[arg(short = 's', long, help = "把 GIF 拆分为单独的帧")]
    pub split: bool,

    #[arg(short = 'j', long, help = "拆分的帧保存为 JPEG 而不是 GIF")]
    pub jpeg: bool,
}

/// 处理命令行参数
pub fn args_handle() -> Result<()> {
    // 获取命令行参数
    let config = Config::try_from(Args::parse())?;
    run(&config, Path::new(TRIMMED_FILE_NAME))
}

/// 按顺序执行：解码、输出统计信息、拆分、截取
pub fn run(config: &Config, trimmed_path: &Path) -> Result<()> {
    let animation = Animation::open(&config.input)?;

    // 只在需要拆分时创建输出文件夹，创建失败时每一帧会各自报错
    if config.split {
        if let Err(err) = fs::create_dir_all(&config.output) {
            eprintln!(
                "{} could not create folder \"{}\": {}",
                "warning:".yellow().bold(),
                config.output.display(),
                err
            );
        }
    }

    report(
        &mut io::stdout().lock(),
        &animation,
        &config.output,
        &config.input.display().to_string(),
        config.split,
    )
    .map_err(Error::Stdout)?;

    if config.split {
        let format = if config.jpeg {
            FrameFormat::Jpeg
        } else {
            FrameFormat::Gif
        };
        let summary = Splitter::new(&animation, &config.output, format).split();
        println!(
            "Wrote {} of {} frames",
            summary.written,
            animation.frame_count()
        );
        if summary.failed > 0 {
            eprintln!(
                "{} {} frames could not be written",
                "warning:".yellow().bold(),
                summary.failed
            );
        }
    }

    if config.should_trim() {
        let range = TrimRange::normalize(
            config.trim_start,
            config.trim_end,
            animation.frame_count(),
        )?;
        animation.trim(range).write_gif(trimmed_path)?;
        println!(
            "Trimmed frames {}..{} into {}",
            range.start,
            range.end,
            trimmed_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::fixture;
    use gif::Repeat;

    fn config(dir: &Path, split: bool, start: Option<usize>, end: Option<usize>) -> Config {
        let input = dir.join("input.gif");
        let bytes = fixture::gif_bytes(4, 2, &[10, 20, 30], Some(Repeat::Infinite));
        fs::write(&input, bytes).unwrap();
        Config {
            input,
            output: dir.join("frames"),
            split,
            jpeg: false,
            trim_start: start,
            trim_end: end,
        }
    }

    #[test]
    fn parses_cli_arguments() {
        let args = Args::try_parse_from([
            "gif-splitter", "in.gif", "1", "-1", "-s", "-j", "-o", "dest",
        ])
        .unwrap();
        let config = Config::try_from(args).unwrap();
        assert_eq!(config.input, PathBuf::from("in.gif"));
        assert_eq!(config.output, PathBuf::from("dest"));
        assert!(config.split && config.jpeg);
        assert_eq!((config.trim_start, config.trim_end), (Some(1), None));
    }

    #[test]
    fn defaults_leave_trim_unset() {
        let args = Args::try_parse_from(["gif-splitter", "in.gif"]).unwrap();
        let config = Config::try_from(args).unwrap();
        assert_eq!(config.output, PathBuf::from("out"));
        assert!(!config.split && !config.jpeg);
        assert!(!config.should_trim());
    }

    #[test]
    fn split_creates_folder_and_frames() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), true, None, None);
        let trimmed = dir.path().join("trimmed.gif");
        run(&config, &trimmed).unwrap();

        assert!(config.output.join("frame02.gif").is_file());
        assert!(!trimmed.exists());
    }

    #[test]
    fn trims_without_creating_folder() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), false, Some(1), Some(3));
        let trimmed = dir.path().join("trimmed.gif");
        run(&config, &trimmed).unwrap();

        assert!(!config.output.exists());
        let animation = Animation::open(&trimmed).unwrap();
        assert_eq!(animation.delays(), &[20, 30]);
        assert_eq!(animation.loop_count(), 0);
    }

    #[test]
    fn inverted_range_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), false, Some(2), Some(1));
        let trimmed = dir.path().join("trimmed.gif");
        let err = run(&config, &trimmed).unwrap_err();

        assert!(matches!(err, Error::InvalidTrimRange { start: 2, end: 1 }));
        assert!(!trimmed.exists());
    }
}

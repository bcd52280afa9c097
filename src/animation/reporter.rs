use super::Animation;
use colored::Colorize;
use std::{io, path::Path};

/// 输出动图的统计信息
pub fn report<W: io::Write>(
    out: &mut W,
    animation: &Animation,
    folder: &Path,
    name: &str,
    split: bool,
) -> io::Result<()> {
    let delays = animation
        .delays()
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(out, "{}", format!("--- GIF STATS: {} ---", name).bold())?;
    writeln!(out, "Number of frames:\n {}", animation.frame_count())?;
    writeln!(out, "Delay per frame (100ths / sec):\n [{}]", delays)?;
    writeln!(out, "Loop count:\n {}", animation.loop_count())?;
    writeln!(
        out,
        "Image size (height x width):\n {} x {}",
        animation.height(),
        animation.width()
    )?;
    if split {
        writeln!(
            out,
            "\nOutputting individual frames to folder: {}",
            folder.display()
        )?;
    }
    Ok(())
}

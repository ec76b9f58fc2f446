//! 命令行：把一张图片转换为单帧 256×256 的 .ico

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

const USAGE: &str = "Usage: convert-ico <input.png> <output.ico>";

#[derive(Parser)]
#[command(name = "convert-ico")]
#[command(about = "Convert a raster image into a 256x256 .ico file")]
#[command(version)]
struct Cli {
    #[arg(help = "Source image (PNG, JPEG, BMP, GIF, WebP, ICO)")]
    input: PathBuf,
    #[arg(help = "Destination .ico path")]
    output: PathBuf,
}

/// 不以 `-` 开头的参数个数
fn positional_count(args: impl Iterator<Item = String>) -> usize {
    args.filter(|a| !a.starts_with('-')).count()
}

fn main() -> ExitCode {
    work_timer::logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // 参数个数不对时只打印用法，不算失败；其余错误（未知选项、--help 等）交给 clap
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::UnknownArgument
                    | ErrorKind::TooManyValues
            ) && positional_count(
                std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned()),
            ) != 2 =>
        {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };

    match work_timer::icon::convert(&cli.input, &cli.output) {
        Ok(()) => {
            println!(
                "Successfully converted {} to {}",
                cli.input.display(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error converting: {e}");
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone)]
#[command(
    name = "office_to_pdf",
    about = "Batch convert Word and PowerPoint documents to PDF",
    long_about = "Recursively collects .doc/.docx/.ppt/.pptx files under INPUT and saves each one as PDF through Microsoft Word and PowerPoint automation.\nRun without arguments for interactive mode.",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    /// 輸出目錄，預設為 <INPUT>/PDF
    #[arg(short, long)]
    pub output: Option<String>,
    /// 以逗號分隔的檔名排除模式，支援 `*`，例如 "~$*"
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, value_parser = ["info", "warn", "error"])]
    pub log_level: Option<String>,
}

/// 輸出目錄留白時使用的子目錄名稱
pub const DEFAULT_OUTPUT_SUBDIR: &str = "PDF";

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("Input path does not exist: {}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("input path '{}' does not exist", input),
        ));
    }
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("input path '{}' is not a directory", input),
        ));
    }
    Ok(path)
}

/// 輸出目錄留白時回退為 `<input>/PDF`
pub fn resolve_output_dir(input: &Path, output: Option<&str>) -> PathBuf {
    match output.map(str::trim) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => input.join(DEFAULT_OUTPUT_SUBDIR),
    }
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_file_patterns(exclude: &Option<Vec<String>>) -> io::Result<()> {
    if let Some(exclude_patterns) = exclude {
        for pattern in exclude_patterns {
            if !is_valid_pattern(pattern) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid exclude pattern: {}", pattern),
                ));
            }
        }
    }
    Ok(())
}

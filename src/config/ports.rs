use std::io;
use std::path::PathBuf;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub exclude: Option<Vec<String>>,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}

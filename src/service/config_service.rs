use std::io;
use std::path::Path;
use crate::config::config::{resolve_output_dir, validate_input_path};
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：只需輸入與輸出路徑
pub struct DefaultConfigAdapter {
    input: String,
    output: Option<String>,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: Option<String>) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        base_config(&self.input, self.output.as_deref())
    }
}

/// 供其他適配器共用：驗證輸入並套用輸出目錄預設值
pub fn base_config(input: &str, output: Option<&str>) -> io::Result<AppConfig> {
    let input: &Path = validate_input_path(input)?;
    Ok(AppConfig {
        input: input.to_path_buf(),
        output: resolve_output_dir(input, output),
        exclude: None,
        no_progress: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_fills_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().to_str().unwrap().to_string();
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(input, None)));
        let config = service.get_config().unwrap();
        assert_eq!(config.output, dir.path().join("PDF"));
        assert_eq!(config.exclude, None);
        assert!(!config.no_progress);
    }

    #[test]
    fn default_adapter_rejects_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope").to_str().unwrap().to_string();
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(input, Some("out".into()))));
        assert!(service.get_config().is_err());
    }
}

use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_file_patterns, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{base_config, ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<ConversionOutput> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref().unwrap_or("info"))?;

    // 只提供輸入與輸出路徑時使用預設配置
    let is_default_config = cli.exclude.is_none() && !cli.no_progress && cli.log_level.is_none();

    let config_port: Box<dyn ConfigPort> = if is_default_config {
        Box::new(DefaultConfigAdapter::new(cli.input.clone(), cli.output.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config)?;
    println!("{}", output.summary());
    Ok(output)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_file_patterns(&self.cli.exclude)?;
        let mut config = base_config(&self.cli.input, self.cli.output.as_deref())?;
        config.exclude = self.cli.exclude.clone();
        config.no_progress = self.cli.no_progress;
        log::info!(
            "Using options: exclude={:?}, no_progress={}",
            config.exclude,
            config.no_progress
        );
        Ok(config)
    }
}

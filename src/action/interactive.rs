use dialoguer::Input;
use std::io;
use std::path::Path;

use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{base_config, ConfigService};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<ConversionOutput> {
    setup_logging("info")?;

    let config_service = ConfigService::new(Box::new(InteractiveConfigAdapter));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config)?;
    println!("{}", output.summary());

    wait_for_exit()?;
    Ok(output)
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("Input path")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("'{}' is not a directory", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path() -> io::Result<String> {
    Input::new()
        .with_prompt("Output path (leave blank to save to the \"PDF\" directory under the input path)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn wait_for_exit() -> io::Result<()> {
    Input::<String>::new()
        .with_prompt("Press Enter to exit...")
        .allow_empty(true)
        .report(false)
        .interact_text()
        .map(|_| ())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter;

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let input = get_input_path()?;
        let output = get_output_path()?;
        base_config(&input, Some(&output))
    }
}

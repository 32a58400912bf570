use std::io;

use office_to_pdf::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let output = process_args(args).map_err(|e| {
        log::error!("{}", e);
        e
    })?;
    log::info!("Finished, output directory: {}", output.output_path.display());
    Ok(())
}

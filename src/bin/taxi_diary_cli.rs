use std::process;

use taxi_diary::{
    cli::Shell,
    config::{Config, ConfigManager},
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ConfigManager::new() {
        Ok(manager) => manager.load().unwrap_or_else(|err| {
            tracing::warn!("falling back to default config: {err}");
            Config::default()
        }),
        Err(err) => {
            tracing::warn!("config directory unavailable: {err}");
            Config::default()
        }
    };

    let mut shell = Shell::new(config);
    shell.run()?;
    Ok(())
}

use clap::Parser;
use dpad::DirectionalPad;
use relm4::prelude::*;
use remote::config;
use remote::gui::app::AppModel;
use remote::gui::theme::ThemeColors;
use remote::sys::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "remote", version, about, long_about = None)]
struct Cli {
    /// Read this config file instead of the one in the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the default config file (if none exists) and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = config::resolve_config_path(cli.config)?;

    if cli.write_default_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_config(&config_path)?;
    let pad = DirectionalPad::new(config.pad)?;
    let colors = ThemeColors::from_config(&config.theme);

    let (tx, rx) = async_channel::bounded(64);

    runtime::start_background_services(tx.clone(), config_path.clone());

    let app = RelmApp::new("org.dpad.remote").with_args(Vec::new());

    app.run::<AppModel>((pad, colors, config_path, tx, rx));
    Ok(())
}

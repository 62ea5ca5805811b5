use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;

use interest_me::app::{self, config::Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();
    log::info!("exporting to {} by default", cfg.output_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::TITLE)
            .with_inner_size([cfg.width, cfg.height]),
        ..Default::default()
    };
    eframe::run_native(
        app::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, cfg)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

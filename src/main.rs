use anyhow::{Context, Result};

use largo_curator::session::run_session;
use largo_curator::theme::current_theme;
use largo_curator::{logging, Catalog, Config, CuratorState, Renderer};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging);

    let theme = current_theme();
    println!(
        "{}",
        theme.status_text(&format!("Loading {}...", config.paths.largos.display()))
    );
    println!(
        "{}",
        theme.status_text(&format!("Loading {}...", config.paths.slimes.display()))
    );
    let catalog = Catalog::load(&config.paths.largos, &config.paths.slimes)?;

    let renderer = Renderer::new(theme, config.layout.clone())
        .context("Invalid muted_pattern in layout config")?;

    run_session(CuratorState::new(catalog), &renderer, &config.paths.culture)
}

//! Capture and suggestion subcommand handlers.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use tourguide_config::Config;
use tourguide_core::{
    GuideSession, LOADING_MESSAGE_INTERVAL_SECS, SuggestionsPanel, loading_message,
};
use tourguide_image::FileCaptureDevice;
use tourguide_protocols::Coordinates;

use crate::register;
use crate::render;

/// Drive `work` to completion, printing a rotating loading message meanwhile.
pub(crate) async fn with_loading_messages<F: Future>(work: F) -> F::Output {
    tokio::pin!(work);
    let mut ticker = tokio::time::interval(Duration::from_secs(LOADING_MESSAGE_INTERVAL_SECS));
    let mut tick = 0;
    loop {
        tokio::select! {
            output = &mut work => return output,
            _ = ticker.tick() => {
                println!("{}", render::loading(loading_message(tick)));
                tick += 1;
            }
        }
    }
}

/// Describe a single image file.
pub(crate) async fn capture(config: &Config, image: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = register::open_history(config).await?;
    let mut session = GuideSession::open(
        store,
        register::normalizer(config),
        register::describer(config)?,
    )
    .await;

    session.start();
    let device = FileCaptureDevice::new(image);
    match with_loading_messages(session.capture_from(&device)).await {
        Ok(state) => println!("{}", render::view(state)),
        Err(e) => println!("{}", render::error(&e.to_string())),
    }
    Ok(())
}

/// List places near the given or configured position.
pub(crate) async fn suggest(
    config: &Config,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let explicit = lat.zip(lon).map(|(lat, lon)| Coordinates::new(lat, lon));
    let mut panel = SuggestionsPanel::new(
        register::locator(config, explicit),
        register::describer(config)?,
    );
    let state = panel.open().await;
    println!("{}", render::suggestions(state));
    Ok(())
}

use crate::config::Config;
use crate::events::AppEvent;
use crate::sys::input::{KnownRegions, run_stdin_reader};
use async_channel::Sender;
use plutchik::{Catalog, LoadError, Locale};
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub path: PathBuf,
    pub locale: Option<Locale>,
}

impl From<&Config> for CatalogSource {
    fn from(config: &Config) -> Self {
        Self {
            path: config.catalog.clone(),
            locale: config.locale,
        }
    }
}

pub async fn load_catalog(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let text = tokio::fs::read_to_string(&source.path).await?;
    match source.locale {
        Some(locale) => Catalog::load_localized(&text, &locale.table()?),
        None => Catalog::load(&text),
    }
}

/// Loads the catalog and reads user input on a background runtime; both
/// report through `tx`.
pub fn start_background_services(tx: Sender<AppEvent>, source: CatalogSource) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                let _ = tx.send_blocking(AppEvent::CatalogLoaded(Err(e.into())));
                return;
            }
        };

        let known = KnownRegions::default();

        rt.block_on(async {
            {
                let tx = tx.clone();
                let known = known.clone();
                tokio::spawn(async move {
                    log::info!("Loading emotions from {}", source.path.display());
                    let result = load_catalog(&source).await;
                    if let Ok(catalog) = &result {
                        known.learn(catalog);
                    }
                    let _ = tx.send(AppEvent::CatalogLoaded(result)).await;
                });
            }

            run_stdin_reader(tx, known).await;
        });
    });
}

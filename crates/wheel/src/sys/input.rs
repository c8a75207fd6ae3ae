use crate::events::AppEvent;
use async_channel::Sender;
use plutchik::{Catalog, EmotionId, NavSlot};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Region names typed input may refer to.
///
/// Empty until the catalog loads; input read before then passes through
/// and the session drops it.
#[derive(Debug, Clone, Default)]
pub struct KnownRegions(Arc<OnceLock<BTreeSet<EmotionId>>>);

impl KnownRegions {
    pub fn learn(&self, catalog: &Catalog) {
        if self.0.set(catalog.ids().cloned().collect()).is_err() {
            log::warn!("Region names were already learned from another catalog");
        }
    }

    pub fn admits(&self, id: &EmotionId) -> bool {
        self.0.get().is_none_or(|ids| ids.contains(id))
    }
}

/// Turns one line of user input into an event.
///
/// Slot names win over emotion ids; none of the wheel's regions is named
/// like a slot.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    match command {
        "" => None,
        "q" | "quit" | "exit" => Some(AppEvent::Shutdown),
        "hover" if rest.is_empty() => Some(AppEvent::RegionHovered(None)),
        "hover" => Some(AppEvent::RegionHovered(Some(region(rest)))),
        _ if rest.is_empty() => Some(match command.parse::<NavSlot>() {
            Ok(slot) => AppEvent::NavigationClicked(slot),
            Err(_) => AppEvent::RegionClicked(region(command)),
        }),
        _ => {
            log::warn!("Unrecognized input: {}", line);
            None
        }
    }
}

fn region(name: &str) -> EmotionId {
    EmotionId::new(name.to_lowercase())
}

/// Parses `line` and drops clicks or hovers on regions the wheel does not
/// have.
pub fn read_event(line: &str, known: &KnownRegions) -> Option<AppEvent> {
    let event = parse_line(line)?;
    let id = match &event {
        AppEvent::RegionClicked(id) | AppEvent::RegionHovered(Some(id)) => id,
        _ => return Some(event),
    };
    if known.admits(id) {
        Some(event)
    } else {
        log::warn!("No region named `{}` on the wheel", id);
        None
    }
}

pub async fn run_stdin_reader(tx: Sender<AppEvent>, known: KnownRegions) {
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if let Some(event) = read_event(&line, &known)
                    && tx.send(event).await.is_err()
                {
                    return;
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    let _ = tx.send(AppEvent::Shutdown).await;
}

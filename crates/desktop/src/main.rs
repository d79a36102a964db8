//! Inventory application entry point.

use std::io;

use anyhow::Context;

use freshmart_core::SystemClock;
use freshmart_desktop::{DesktopConfig, Shell};
use freshmart_inventory::InventoryStore;

fn main() -> anyhow::Result<()> {
    freshmart_observability::init();

    let config = DesktopConfig::from_env().context("invalid FRESHMART_* configuration")?;
    tracing::info!(?config, "starting inventory shell");

    let store = InventoryStore::seeded(SystemClock);
    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), store, config);

    shell
        .run()
        .context("inventory shell stopped on a terminal I/O error")?;
    Ok(())
}

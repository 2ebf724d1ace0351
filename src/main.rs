use anyhow::Context;
use hotel_booking::config::DeskConfig;
use hotel_booking::logging::init_logger;
use hotel_booking::persistence::SnapshotStore;
use hotel_booking::shell::Shell;
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = DeskConfig::from_args(std::env::args_os().skip(1));
    init_logger(&config.log_level);

    let store = SnapshotStore::new(&config.snapshot_path);
    // a snapshot we cannot read is fatal: starting empty would overwrite it on exit
    let registry = store
        .load()
        .with_context(|| format!("cannot start from snapshot {}", store.path().display()))?;

    let stdin = io::stdin();
    let registry = Shell::new(registry, stdin.lock(), io::stdout())
        .run()
        .context("console I/O failed")?;

    store
        .save(&registry)
        .with_context(|| format!("failed to save snapshot {}", store.path().display()))?;
    info!("front desk closed");
    println!("Thank you for using the system!");
    Ok(())
}

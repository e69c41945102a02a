//! List signal sources command.

use anyhow::Result;
use trading_strategies::SignalRegistry;

use crate::cli::SignalsArgs;

pub async fn run(args: SignalsArgs) -> Result<()> {
    let registry = SignalRegistry::new();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registry.list())?);
        return Ok(());
    }

    println!("Available Signal Sources");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        println!("  {} ", info.name);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!();
    }

    println!("Use --signal <name> with the run command to select a source.");

    Ok(())
}

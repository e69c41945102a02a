//! Position size command.

use anyhow::Result;
use trading_risk::RiskSizer;

use crate::cli::SizeArgs;

pub async fn run(args: SizeArgs) -> Result<()> {
    let sizer = RiskSizer::new(args.pip_value)?;
    let size = sizer.size(args.balance, args.risk, args.stop)?;

    println!("Balance:    {}", args.balance);
    println!("Risk:       {}", args.risk);
    println!("Stop:       {} pips", args.stop);
    println!("Pip value:  {}", args.pip_value);
    println!("Size:       {}", size);

    Ok(())
}

//! # Store Demo Entry Point
//!
//! ## Usage
//! ```bash
//! # VIP order, text output
//! cargo run -p store-demo
//!
//! # Regular customer, JSON output
//! STORE_VIP=false STORE_OUTPUT=json cargo run -p store-demo
//! ```

use store_demo::{DemoConfig, DemoResult};
use tracing::info;

fn main() -> DemoResult<()> {
    store_demo::init_tracing();

    let config = DemoConfig::load()?;
    info!(
        is_vip = config.is_vip,
        output = %config.output,
        vip_bps = config.policy.vip_discount.bps(),
        bulk_bps = config.policy.bulk_discount.bps(),
        bulk_threshold = config.policy.bulk_threshold,
        "Configuration loaded"
    );

    let output = store_demo::run(&config)?;
    println!("{output}");

    Ok(())
}

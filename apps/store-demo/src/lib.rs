//! # store-demo: Order Pricing Demonstration
//!
//! Thin orchestration layer over `store-core`: builds a small catalog,
//! prices one order with the configured policy, and renders the result.
//!
//! ## Run Sequence
//! 1. Initialize tracing (logging)
//! 2. Load [`DemoConfig`] from `STORE_*` environment variables
//! 3. Build the catalog (T-Shirt 50.00 × 20, Trousers 120.00 × 5)
//! 4. Order 12 T-Shirts and 3 Trousers
//! 5. Render total + messages as text or JSON
//!
//! The setup lives here rather than in `main.rs` so it can be tested.

pub mod config;
pub mod error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use store_core::{Money, Order, OrderProcessor, OrderResult, Product};

pub use config::{ConfigError, DemoConfig, OutputFormat};
pub use error::{DemoError, DemoResult};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=store_core=trace` - Trace the pricing crate only
/// - Default: INFO, with DEBUG for the store crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,store_core=debug,store_demo=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The demo catalog: (T-Shirt, Trousers).
pub fn demo_catalog() -> DemoResult<(Product, Product)> {
    let shirt = Product::new("T-Shirt", Money::from_cents(5000), 20)?;
    let trousers = Product::new("Trousers", Money::from_cents(12000), 5)?;
    Ok((shirt, trousers))
}

/// Prices the demo order and returns the rendered output.
pub fn run(config: &DemoConfig) -> DemoResult<String> {
    let processor = OrderProcessor::new(config.policy)?;
    let (mut shirt, mut trousers) = demo_catalog()?;

    let mut order = Order::new()
        .with_line(&mut shirt, 12)
        .with_line(&mut trousers, 3);

    let result = processor.process_order(Some(&mut order), config.is_vip)?;
    drop(order);

    info!(
        total = %result.total(),
        is_vip = config.is_vip,
        shirt_stock = shirt.stock,
        trousers_stock = trousers.stock,
        "Demo order processed"
    );

    render(&result, config.output)
}

/// Renders an order result in the requested format.
pub fn render(result: &OrderResult, format: OutputFormat) -> DemoResult<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("Order total: {}", result.total())];
            lines.extend(result.message_strings());
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_core::{DiscountPolicy, DiscountRate, OrderMessage};

    #[test]
    fn test_run_vip_text() {
        let output = run(&DemoConfig::default()).unwrap();

        // 513.00 for the shirts + 324.00 for the trousers
        assert_eq!(
            output,
            "Order total: 837.00\n\
             VIP discount applied to T-Shirt\n\
             Quantity discount applied to T-Shirt\n\
             VIP discount applied to Trousers"
        );
    }

    #[test]
    fn test_run_regular_customer() {
        let config = DemoConfig {
            is_vip: false,
            ..DemoConfig::default()
        };
        let output = run(&config).unwrap();

        assert_eq!(
            output,
            "Order total: 930.00\nQuantity discount applied to T-Shirt"
        );
    }

    #[test]
    fn test_run_json() {
        let config = DemoConfig {
            output: OutputFormat::Json,
            ..DemoConfig::default()
        };
        let output = run(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total"], 83700);
        assert_eq!(value["messages"][0]["kind"], "vip_discount_applied");
        assert_eq!(value["messages"][0]["product"], "T-Shirt");
    }

    #[test]
    fn test_run_rejects_invalid_policy() {
        let config = DemoConfig {
            policy: DiscountPolicy {
                bulk_discount: DiscountRate::from_bps(20_000),
                ..DiscountPolicy::default()
            },
            ..DemoConfig::default()
        };
        assert!(matches!(run(&config), Err(DemoError::Core(_))));
    }

    #[test]
    fn test_render_not_processed() {
        let result = OrderResult::new(Money::zero(), vec![OrderMessage::OrderNotProcessed]);
        assert_eq!(
            render(&result, OutputFormat::Text).unwrap(),
            "Order total: 0.00\nOrder could not be processed."
        );
    }
}

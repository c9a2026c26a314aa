//! Example demonstrating the configuration and layout engine
//!
//! Run with: cargo run --example config_demo

use mobile_sim::config::Config;
use mobile_sim::constant::{BEZEL_BASE_WIDTH, BLEED};
use mobile_sim::layout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Mobile Simulator Configuration Demo ===\n");

    // Load config, falling back to defaults
    let config = Config::load();
    let scale = config.scale();

    println!("Current settings:");
    println!("  URL: {}", config.settings.last_url);
    println!("  Scale: {:.0}%", scale.get() * 100.0);
    println!("  Frame: {}", config.theme());

    println!("\nDevices:");
    for (i, device) in config.list_all().iter().enumerate() {
        let geometry = layout::compute(device, scale, BEZEL_BASE_WIDTH, BLEED);
        let inner = geometry.inner_rect;
        let marker = if i == config.device_index() { "*" } else { " " };
        println!(
            "{} {:>2}. {:<28} frame {}x{}  screen {}x{} @({},{})  r{}",
            marker,
            i,
            device.label(),
            geometry.outer_width,
            geometry.outer_height,
            inner.width,
            inner.height,
            inner.x,
            inner.y,
            geometry.inner_radius,
        );
    }

    println!("\nConfig file: {}", config.path().display());
    Ok(())
}

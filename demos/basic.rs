//! Standalone demo: prints conversions, luminance and shades for a few colours.
//!
//! Run with `RUST_LOG=colourkit=trace` to see the library's diagnostics.

use colourkit::{adjust_shade, compute_luminance_from_hex, decode_hex, encode_rgb};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for hex in ["#d90a1a", "#69c", "333", "chucknorris"] {
        let Some(rgb) = decode_hex(hex) else {
            println!("{hex:>12}  not a hex colour");
            continue;
        };
        let luma = compute_luminance_from_hex(hex).unwrap_or_default();
        let lighter = adjust_shade(hex, 0.2).unwrap_or_default();
        let darker = adjust_shade(hex, -0.2).unwrap_or_default();
        println!(
            "{hex:>12}  rgb({}, {}, {})  luma {luma:7.3}  lighter {lighter}  darker {darker}",
            rgb.r, rgb.g, rgb.b
        );
    }

    println!("{}", encode_rgb(300, "10", None::<u8>));
}

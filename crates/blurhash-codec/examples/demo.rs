//! BlurHash Demo - Encode and decode example
//!
//! Run with: cargo run -p blurhash-codec --example demo

use blurhash_codec::{average_color, components, decode, encode, is_valid};

fn main() {
    println!("=== BlurHash Demo ===\n");

    // A 4x4 RGBA gradient: red grows left to right, green top to bottom.
    let width = 4;
    let height = 4;
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / (width - 1) as f32) * 255.0) as u8;
            let g = ((y as f32 / (height - 1) as f32) * 255.0) as u8;
            pixels.extend_from_slice(&[r, g, 128, 255]);
        }
    }

    println!("1. Created a {}x{} gradient image", width, height);

    let hash = encode(&pixels, width as u32, height as u32, 4, 3).expect("Failed to encode");
    println!("2. Encoded to BlurHash: {} ({} characters)", hash, hash.len());

    let (valid, reason) = is_valid(&hash);
    let (cx, cy) = components(&hash).expect("Failed to get components");
    println!("3. Valid: {} {:?}, components {}x{}", valid, reason, cx, cy);

    let [r, g, b] = average_color(&hash).expect("Failed to read average color");
    println!("4. Average color: #{:02x}{:02x}{:02x}", r, g, b);

    let decoded = decode(&hash, 8, 8, 1.0).expect("Failed to decode");
    println!("5. Decoded to 8x8 RGBA ({} bytes)", decoded.len());
    println!("   First pixel: {:?}", &decoded[..4]);
    println!("   Last pixel: {:?}", &decoded[decoded.len() - 4..]);

    let (valid, reason) = is_valid("LEHV6nWB");
    println!("6. Truncated hash valid: {} ({})", valid, reason.unwrap_or_default());
}

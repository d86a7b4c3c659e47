use napi::bindgen_prelude::*;
use napi::Task;
use napi_derive::napi;

fn to_napi_err(e: blurhash_codec::BlurhashError) -> Error {
    Error::from_reason(e.to_string())
}

/// Encode RGBA pixel data into a BlurHash string.
///
/// @param data - Raw pixel bytes in RGBA order (length must be width * height * 4).
/// @param width - Image width in pixels.
/// @param height - Image height in pixels.
/// @param components_x - Number of horizontal components (1..=9, default 4).
/// @param components_y - Number of vertical components (1..=9, default 3).
/// @returns The BlurHash string.
#[napi]
pub fn encode(
    data: Uint8Array,
    width: u32,
    height: u32,
    components_x: Option<u32>,
    components_y: Option<u32>,
) -> Result<String> {
    blurhash_codec::encode(
        data.as_ref(),
        width,
        height,
        components_x.unwrap_or(4),
        components_y.unwrap_or(3),
    )
    .map_err(to_napi_err)
}

/// Decode a BlurHash string into RGBA pixel data.
///
/// @param blurhash - The BlurHash string to decode.
/// @param width - Desired output width in pixels.
/// @param height - Desired output height in pixels.
/// @param punch - Contrast multiplier (default 1.0; values below 1.0 act as 1.0).
/// @returns A Uint8Array of length width * height * 4 (alpha is always 255).
#[napi]
pub fn decode(
    blurhash: String,
    width: u32,
    height: u32,
    punch: Option<f64>,
) -> Result<Uint8Array> {
    let pixels = blurhash_codec::decode(&blurhash, width, height, punch.unwrap_or(1.0))
        .map_err(to_napi_err)?;
    Ok(Uint8Array::from(pixels))
}

/// Verdict returned by `isValid`.
#[napi(object)]
pub struct Validity {
    pub result: bool,
    pub error_reason: Option<String>,
}

/// Check whether a string is a structurally valid BlurHash. Never throws.
#[napi]
pub fn is_valid(blurhash: String) -> Validity {
    let (result, error_reason) = blurhash_codec::is_valid(&blurhash);
    Validity {
        result,
        error_reason,
    }
}

/// Number of X and Y components of a BlurHash string.
#[napi(object)]
pub struct Components {
    pub components_x: u32,
    pub components_y: u32,
}

#[napi]
pub fn get_components(blurhash: String) -> Result<Components> {
    let (cx, cy) = blurhash_codec::components(&blurhash).map_err(to_napi_err)?;
    Ok(Components {
        components_x: cx,
        components_y: cy,
    })
}

/// Average color of a BlurHash as `[r, g, b]`, without decoding it.
#[napi]
pub fn get_average_color(blurhash: String) -> Result<Vec<u8>> {
    let rgb = blurhash_codec::average_color(&blurhash).map_err(to_napi_err)?;
    Ok(rgb.to_vec())
}

/// Convert an sRGB byte value (0-255) to linear intensity (0.0-1.0).
#[napi]
pub fn srgb_to_linear(value: u8) -> f64 {
    blurhash_codec::color::srgb_to_linear(value)
}

/// Convert a linear intensity to an sRGB byte value (0-255).
#[napi]
pub fn linear_to_srgb(value: f64) -> u8 {
    blurhash_codec::color::linear_to_srgb(value)
}

// --- Async versions (run on libuv thread pool) ---

pub struct EncodeTask {
    data: Vec<u8>,
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
}

impl Task for EncodeTask {
    type Output = String;
    type JsValue = String;

    fn compute(&mut self) -> Result<Self::Output> {
        blurhash_codec::encode(
            &self.data,
            self.width,
            self.height,
            self.components_x,
            self.components_y,
        )
        .map_err(to_napi_err)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(output)
    }
}

/// Async version of encode. Returns a Promise<string>.
#[napi]
pub fn encode_async(
    data: Uint8Array,
    width: u32,
    height: u32,
    components_x: Option<u32>,
    components_y: Option<u32>,
) -> AsyncTask<EncodeTask> {
    AsyncTask::new(EncodeTask {
        data: data.to_vec(),
        width,
        height,
        components_x: components_x.unwrap_or(4),
        components_y: components_y.unwrap_or(3),
    })
}

pub struct DecodeTask {
    blurhash: String,
    width: u32,
    height: u32,
    punch: f64,
}

impl Task for DecodeTask {
    type Output = Vec<u8>;
    type JsValue = Uint8Array;

    fn compute(&mut self) -> Result<Self::Output> {
        blurhash_codec::decode(&self.blurhash, self.width, self.height, self.punch)
            .map_err(to_napi_err)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(Uint8Array::from(output))
    }
}

/// Async version of decode. Returns a Promise<Uint8Array>.
#[napi]
pub fn decode_async(
    blurhash: String,
    width: u32,
    height: u32,
    punch: Option<f64>,
) -> AsyncTask<DecodeTask> {
    AsyncTask::new(DecodeTask {
        blurhash,
        width,
        height,
        punch: punch.unwrap_or(1.0),
    })
}

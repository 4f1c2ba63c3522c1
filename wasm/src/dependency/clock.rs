/// Wall-clock milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Seed for sessions that were not given one.
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (noise << 32) ^ (now_ms() as u64)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

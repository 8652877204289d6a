/// Seed from JavaScript's Math.random, two 32 bit draws.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let draw = || (random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}

/// Seeded 2D value noise.
///
/// Hashes the four lattice corners around `(x, z)` and blends them with a
/// smoothstep-weighted bilinear interpolation. Pure function: the same
/// `(x, z, seed)` always produces the same value, which is the determinism
/// guarantee every layer above relies on.
///
/// Output is approximately in [-1, 1].
pub fn noise2d(x: f64, z: f64, seed: i32) -> f64 {
    let xi = x.floor() as i32;
    let zi = z.floor() as i32;
    let fx = x - xi as f64;
    let fz = z - zi as f64;

    let a = corner_hash(xi, zi, seed);
    let b = corner_hash(xi.wrapping_add(1), zi, seed);
    let c = corner_hash(xi, zi.wrapping_add(1), seed);
    let d = corner_hash(xi.wrapping_add(1), zi.wrapping_add(1), seed);

    let sx = smoothstep(fx);
    let sz = smoothstep(fz);

    let top = a + (b - a) * sx;
    let bottom = c + (d - c) * sx;
    top + (bottom - top) * sz
}

// Integer mix with an xorshift-multiply finalizer, normalized by 2^31.
// All arithmetic wraps; the shift is arithmetic, so the sign bit spreads
// into the mix.
fn corner_hash(xi: i32, zi: i32, seed: i32) -> f64 {
    let mut h = seed
        .wrapping_add(xi.wrapping_mul(374_761_393))
        .wrapping_add(zi.wrapping_mul(668_265_263));
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    (h ^ (h >> 16)) as f64 / 2_147_483_648.0
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#![no_main]

use std::f64::consts::PI;

use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;
use vector2::Vector;

fn scalar(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    f64::from_le_bytes(buf)
}

// Runs every operation on vectors built from raw input bits (NaN and infinities included) and on
// vectors from a generator seeded with the input. No operation may panic, and well conditioned
// vectors must keep the length/angle invariants.
fuzz_target!(|data: &[u8]| {
    let scalars: Vec<f64> = data.chunks(8).map(scalar).collect();
    let mut rng: Pcg64 = Seeder::from(data).make_rng();

    let mut vectors: Vec<Vector> = scalars
        .chunks_exact(2)
        .map(|pair| Vector::new(pair[0], pair[1]))
        .collect();
    vectors.extend(Vector::generate_vec(&mut rng, -1e9..1e9, -1e9..1e9, 16));

    println!("start. data: {:?}, vectors: {}", data, vectors.len());

    for (i, pair) in vectors.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let amt = rng.gen_range(-2. ..2.);
        let angle = rng.gen_range(-PI..PI);

        let sum = a + b;
        let difference = a - b;
        let dot = a.dot(b);
        let lerp = Vector::interpolate(a, b, amt);

        let mut v = a;
        v.scale(amt).set_angle(b.angle()).set_length(b.length()).normalize();

        let length = a.length();
        assert!(length.is_nan() || length == a.x().hypot(a.y()));

        if length.is_finite() && length > 1e-100 && length < 1e100 {
            let mut unit = a;
            assert!((unit.normalize().length() - 1.).abs() < 1e-9);

            let mut rotated = a;
            rotated.set_angle(angle);
            assert!((rotated.length() - length).abs() <= length * 1e-9);
        }

        if pair.iter().all(|v| v.x().is_finite() && v.y().is_finite()) {
            assert_eq!(sum, b + a);
            assert!(dot.is_nan() || dot == b.dot(a));
        }

        if i % 100 == 0 {
            println!(
                "a: {}, b: {}, sum: {}, difference: {}, dot: {}, lerp: {}, v: {}",
                a, b, sum, difference, dot, lerp, v
            );
        }
    }
});

use std::f64::consts::PI;

use rand::{
    distributions::uniform::{SampleRange, SampleUniform},
    Rng, RngCore,
};

use crate::utils::Float;

use super::Vector;

impl<T> Vector<T>
where
    T: SampleUniform,
{
    pub fn generate<R: RngCore, RR: SampleRange<T>>(rng: &mut R, x_range: RR, y_range: RR) -> Self {
        (rng.gen_range(x_range), rng.gen_range(y_range)).into()
    }

    pub fn generate_vec<R: RngCore, RR: SampleRange<T> + Clone>(
        rng: &mut R,
        x_range: RR,
        y_range: RR,
        count: usize,
    ) -> Vec<Self> {
        (0..count)
            .map(|_| Self::generate(rng, x_range.clone(), y_range.clone()))
            .collect()
    }
}

impl Vector<Float> {
    /// Unit vector in a uniformly distributed direction
    pub fn generate_unit<R: RngCore>(rng: &mut R) -> Self {
        Self::from_polar(1., rng.gen_range(-PI..PI))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand_pcg::Pcg64;
    use rand_seeder::Seeder;

    use crate::{math::Vector, utils::Float};

    #[test]
    fn generate_within_ranges() {
        let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
        let vectors: Vec<Vector> = Vector::generate_vec(&mut rng, -50. ..50., 0. ..1., 1024);
        assert_eq!(vectors.len(), 1024);
        for v in vectors {
            assert!((-50. ..50.).contains(&v.x()));
            assert!((0. ..1.).contains(&v.y()));
        }
    }

    #[test]
    fn generate_is_deterministic_for_seed() {
        let mut a: Pcg64 = Seeder::from(&[0x10]).make_rng();
        let mut b: Pcg64 = Seeder::from(&[0x10]).make_rng();
        let a: Vec<Vector> = Vector::generate_vec(&mut a, -1. ..1., -1. ..1., 16);
        let b: Vec<Vector> = Vector::generate_vec(&mut b, -1. ..1., -1. ..1., 16);
        assert_eq!(a, b);
    }

    #[test]
    fn generate_unit() {
        let mut rng: Pcg64 = Seeder::from(&[0x20]).make_rng();
        for _ in 0..1024 {
            let v = Vector::generate_unit(&mut rng);
            assert_abs_diff_eq!(v.length(), 1. as Float, epsilon = 1e-12);
        }
    }
}

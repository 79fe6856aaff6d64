//! Integration tests for the noise fields.
//!
//! # Test Categories
//!
//! 1. **Bounds**: value noise stays in `[0, 1]`, gradient noise in
//!    `[-√N/2, √N/2]`, for one to four dimensions
//! 2. **Periodicity**: every field repeats with period one per axis
//! 3. **Derivatives**: analytic gradients agree with central differences
//! 4. **Turbulence**: octave sums respect their amplitude bound

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sampler_core::hash::{JenkinsHash, MurmurHash, ProspectorHash, WangHash};
use sampler_core::prng::Xorshift32;
use sampler_core::HashFunction;
use sampler_distributions::uniform::uniform_ex;
use sampler_noise::gradient::{gradient_noise, gradient_noise_unit, gradient_noise_with_gradient};
use sampler_noise::interpolation::Interpolation;
use sampler_noise::turbulence::turbulence;
use sampler_noise::value::value_noise;
use sampler_noise::{NoiseConfig, NoiseError, TurbulenceConfig, TurbulenceKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const TWO_TAP: [Interpolation; 4] = [
    Interpolation::Point,
    Interpolation::Linear,
    Interpolation::Smoothstep,
    Interpolation::Smootherstep,
];

const CONTINUOUS: [Interpolation; 3] = [
    Interpolation::Linear,
    Interpolation::Smoothstep,
    Interpolation::Smootherstep,
];

fn random_point<const N: usize>(rng: &mut Xorshift32) -> [f32; N] {
    std::array::from_fn(|_| uniform_ex(rng))
}

fn gradient_bound(n: usize) -> f32 {
    (n as f32).sqrt() / 2.0 + 1e-5
}

// ============================================================================
// Bounds
// ============================================================================

fn check_value_bounds<H: HashFunction, const N: usize>(hash: &H, frequency: [u32; N]) {
    let mut rng = Xorshift32::new(2024);
    for interpolation in Interpolation::ALL {
        for _ in 0..2_000 {
            let x = random_point::<N>(&mut rng);
            let v = value_noise(hash, x, frequency, interpolation, 17);
            assert!(
                (0.0..=1.0).contains(&v),
                "{interpolation:?} N={N} at {x:?}: {v}"
            );
        }
    }
}

#[test]
fn test_value_noise_in_unit_interval() {
    init_tracing();
    check_value_bounds(&WangHash, [7]);
    check_value_bounds(&JenkinsHash, [4, 9]);
    check_value_bounds(&MurmurHash, [3, 5, 2]);
    check_value_bounds(&ProspectorHash, [2, 2, 3, 2]);
}

fn check_gradient_bounds<H: HashFunction, const N: usize>(hash: &H, frequency: [u32; N]) {
    let mut rng = Xorshift32::new(77);
    for interpolation in TWO_TAP {
        for _ in 0..2_000 {
            let x = random_point::<N>(&mut rng);
            let v = gradient_noise(hash, x, frequency, interpolation, 5);
            assert!(
                v.abs() <= gradient_bound(N),
                "{interpolation:?} N={N} at {x:?}: {v}"
            );
            let u = gradient_noise_unit(hash, x, frequency, interpolation, 5);
            assert!((0.0..=1.0).contains(&u));
        }
    }
}

#[test]
fn test_gradient_noise_bounded() {
    check_gradient_bounds(&WangHash, [5]);
    check_gradient_bounds(&JenkinsHash, [3, 8]);
    check_gradient_bounds(&MurmurHash, [4, 4, 4]);
    check_gradient_bounds(&ProspectorHash, [2, 3, 2, 3]);
}

#[test]
fn test_gradient_noise_is_not_constant() {
    let mut rng = Xorshift32::new(3);
    let values: Vec<f32> = (0..256)
        .map(|_| {
            let x = random_point::<2>(&mut rng);
            gradient_noise(&WangHash, x, [8, 8], Interpolation::Smootherstep, 0)
        })
        .collect();
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert!(max - min > 0.1, "range [{min}, {max}]");
}

// ============================================================================
// Periodicity
// ============================================================================

#[test]
fn test_fields_repeat_with_period_one() {
    let mut rng = Xorshift32::new(99);
    let frequency = [6, 3, 5];
    for _ in 0..500 {
        let x = random_point::<3>(&mut rng);
        let shifted = [x[0] + 1.0, x[1] - 1.0, x[2] + 2.0];
        for interpolation in CONTINUOUS {
            assert_abs_diff_eq!(
                value_noise(&WangHash, x, frequency, interpolation, 1),
                value_noise(&WangHash, shifted, frequency, interpolation, 1),
                epsilon = 1e-4
            );
            assert_abs_diff_eq!(
                gradient_noise(&WangHash, x, frequency, interpolation, 1),
                gradient_noise(&WangHash, shifted, frequency, interpolation, 1),
                epsilon = 1e-4
            );
        }
        assert_abs_diff_eq!(
            value_noise(&WangHash, x, frequency, Interpolation::Cubic, 1),
            value_noise(&WangHash, shifted, frequency, Interpolation::Cubic, 1),
            epsilon = 1e-4
        );
    }
}

#[test]
fn test_seam_is_continuous() {
    // approaching x = 1 from below matches x = 0
    for interpolation in CONTINUOUS {
        let at_zero = value_noise(&MurmurHash, [0.0, 0.3], [4, 4], interpolation, 2);
        let below_one = value_noise(&MurmurHash, [1.0 - 1e-6, 0.3], [4, 4], interpolation, 2);
        assert_abs_diff_eq!(at_zero, below_one, epsilon = 1e-3);
    }
}

// ============================================================================
// Derivatives
// ============================================================================

/// A point whose fraction inside its cell lies in `[0.1, 0.9]` on every axis.
fn interior_point<const N: usize>(rng: &mut Xorshift32, frequency: [u32; N]) -> [f32; N] {
    std::array::from_fn(|a| {
        let f = frequency[a];
        let cell = (uniform_ex(rng) * f as f32).floor().min(f as f32 - 1.0);
        let t = 0.1 + 0.8 * uniform_ex(rng);
        (cell + t) / f as f32
    })
}

fn check_finite_differences<const N: usize>(frequency: [u32; N]) {
    const H: f32 = 1e-3;
    let mut rng = Xorshift32::new(1234);
    for interpolation in CONTINUOUS {
        for _ in 0..200 {
            let x = interior_point(&mut rng, frequency);
            let (value, derivative) =
                gradient_noise_with_gradient(&WangHash, x, frequency, interpolation, 9);
            assert_abs_diff_eq!(
                value,
                gradient_noise(&WangHash, x, frequency, interpolation, 9),
                epsilon = 1e-6
            );

            for a in 0..N {
                let mut plus = x;
                let mut minus = x;
                plus[a] += H;
                minus[a] -= H;
                let fd = (gradient_noise(&WangHash, plus, frequency, interpolation, 9)
                    - gradient_noise(&WangHash, minus, frequency, interpolation, 9))
                    / (plus[a] - minus[a]);
                let tolerance = 2e-2 * (1.0 + derivative[a].abs());
                assert!(
                    (fd - derivative[a]).abs() < tolerance,
                    "{interpolation:?} axis {a} at {x:?}: analytic {} vs numeric {fd}",
                    derivative[a]
                );
            }
        }
    }
}

#[test]
fn test_analytic_gradient_matches_finite_differences() {
    check_finite_differences([4]);
    check_finite_differences([4, 6]);
    check_finite_differences([3, 4, 5]);
}

// ============================================================================
// Turbulence
// ============================================================================

#[test]
fn test_turbulence_within_amplitude_bound() {
    let mut rng = Xorshift32::new(4242);
    for kind in [
        TurbulenceKind::Standard,
        TurbulenceKind::Billowy,
        TurbulenceKind::Ridged,
    ] {
        let config = TurbulenceConfig::default().with_kind(kind);
        let bound = config.max_amplitude();
        for _ in 0..500 {
            let x = random_point::<2>(&mut rng);
            let value = turbulence(
                |p, f, s| value_noise(&WangHash, p, f, Interpolation::Smoothstep, s),
                x,
                [4, 4],
                &config,
                3,
            );
            assert!((0.0..=bound + 1e-5).contains(&value), "{kind:?}: {value}");

            let signed = turbulence(
                |p, f, s| gradient_noise_unit(&WangHash, p, f, Interpolation::Smootherstep, s),
                x,
                [4, 4],
                &config,
                3,
            );
            assert!((0.0..=bound + 1e-5).contains(&signed), "{kind:?}: {signed}");
        }
    }
}

#[test]
fn test_turbulence_is_periodic() {
    let config = TurbulenceConfig::default();
    let field = |p: [f32; 2], f: [u32; 2], s: u32| {
        value_noise(&JenkinsHash, p, f, Interpolation::Smootherstep, s)
    };
    let mut rng = Xorshift32::new(8);
    for _ in 0..200 {
        let x = random_point::<2>(&mut rng);
        let shifted = [x[0] + 1.0, x[1] + 1.0];
        assert_abs_diff_eq!(
            turbulence(field, x, [4, 4], &config, 0),
            turbulence(field, shifted, [4, 4], &config, 0),
            epsilon = 1e-3
        );
    }
}

#[test]
fn test_single_octave_shapes_the_field() {
    let x = [0.31, 0.62];
    let n = value_noise(&WangHash, x, [5, 5], Interpolation::Linear, 12);
    let field =
        |p: [f32; 2], f: [u32; 2], s: u32| value_noise(&WangHash, p, f, Interpolation::Linear, s);
    let one = TurbulenceConfig::default().with_octaves(1);

    let standard = turbulence(field, x, [5, 5], &one, 12);
    let billowy = turbulence(field, x, [5, 5], &one.with_kind(TurbulenceKind::Billowy), 12);
    let ridged = turbulence(field, x, [5, 5], &one.with_kind(TurbulenceKind::Ridged), 12);

    assert_eq!(standard, n);
    assert_abs_diff_eq!(billowy, (2.0 * n - 1.0).abs(), epsilon = 1e-6);
    assert_abs_diff_eq!(ridged, (1.0 - (2.0 * n - 1.0).abs()).powi(2), epsilon = 1e-6);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_parallel_grid_matches_sequential() {
    use rayon::prelude::*;

    let config = NoiseConfig::new(vec![8, 8]).with_seed(21);
    let texel = |i: usize| {
        let x = [(i % 64) as f32 / 64.0, (i / 64) as f32 / 64.0];
        config.gradient(&WangHash, x)
    };
    let parallel: Result<Vec<f32>, NoiseError> = (0..64 * 64).into_par_iter().map(texel).collect();
    let sequential: Result<Vec<f32>, NoiseError> = (0..64 * 64).map(texel).collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_config_errors() {
    init_tracing();
    let hash = WangHash;
    assert_eq!(
        NoiseConfig::new(vec![3, 0]).value(&hash, [0.1, 0.2]),
        Err(NoiseError::ZeroFrequency { axis: 1 })
    );
    assert_eq!(
        NoiseConfig::new(vec![3]).gradient(&hash, [0.1, 0.2]),
        Err(NoiseError::DimensionMismatch {
            expected: 1,
            got: 2
        })
    );
    assert!(NoiseConfig::new(vec![3, 3])
        .value_turbulence(
            &hash,
            [0.1, 0.2],
            &TurbulenceConfig::default().with_amplitude_multiplier(f32::INFINITY)
        )
        .is_err());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_gradient_noise_bounded_3d(
        x in prop::array::uniform3(-4.0f32..4.0),
        seed in any::<u32>(),
    ) {
        let v = gradient_noise(&ProspectorHash, x, [3, 4, 5], Interpolation::Smootherstep, seed);
        prop_assert!(v.abs() <= gradient_bound(3));
    }

    #[test]
    fn prop_value_noise_deterministic(
        x in prop::array::uniform2(0.0f32..1.0),
        seed in any::<u32>(),
    ) {
        let a = value_noise(&MurmurHash, x, [6, 6], Interpolation::Cubic, seed);
        let b = value_noise(&MurmurHash, x, [6, 6], Interpolation::Cubic, seed);
        prop_assert_eq!(a, b);
        prop_assert!((0.0..=1.0).contains(&a));
    }
}

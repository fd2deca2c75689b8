use rand::rngs::SmallRng;
use rand::SeedableRng;
use scrollmorph_core::math::*;

#[test]
fn test_lerp_basic() {
    assert!((lerp(0.0, 1.0, 0.0) - 0.0).abs() < 1e-6);
    assert!((lerp(0.0, 1.0, 1.0) - 1.0).abs() < 1e-6);
    assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    assert!((lerp(2.0, 4.0, 0.25) - 2.5).abs() < 1e-6);
    assert!((lerp(4.0, 2.0, 0.25) - 3.5).abs() < 1e-6);
}

#[test]
fn test_jitter_range() {
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..1000 {
        let j = jitter(&mut rng, 0.05);
        assert!(j >= -0.05 && j < 0.05, "jitter {} out of range", j);
    }
}

#[test]
fn test_disk_radius_range() {
    let mut rng = SmallRng::seed_from_u64(6);
    for _ in 0..1000 {
        let r = disk_radius(&mut rng, 0.1);
        assert!((0.0..0.1 + 1e-6).contains(&r), "radius {} out of range", r);
    }
}

#[test]
fn test_ease_toward() {
    assert!((ease_toward(0.0, 1.0, 0.05) - 0.05).abs() < 1e-7);
    assert_eq!(ease_toward(0.3, 0.3, 0.05), 0.3);
    assert_eq!(ease_toward(0.0, 1.0, 1.0), 1.0);
}

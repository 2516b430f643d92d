//! Invariants of the column resize controller over many inputs.

use filedeck_core::{ColumnResizeController, ConfigError};

/// Small deterministic generator so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

#[test]
fn default_inside_bounds_is_kept() {
    for p in (20..=80).map(f64::from) {
        let c = ColumnResizeController::new(20.0, 80.0, p).unwrap();
        assert_eq!(c.split().primary_percent(), p);
        assert_eq!(c.split().secondary_percent(), 100.0 - p);
    }
}

#[test]
fn arbitrary_drags_stay_in_bounds() {
    let mut rng = Lcg(42);
    let mut c = ColumnResizeController::new(15.0, 60.0, 30.0).unwrap();

    for step in 0..2_000 {
        match step % 7 {
            0 => c.begin_drag(rng.next_f64(-5_000.0, 5_000.0)),
            6 => c.end_drag(),
            _ => {
                let x = rng.next_f64(-1e6, 1e6);
                let w = rng.next_f64(-100.0, 3_000.0);
                c.update_drag(x, w);
            }
        }
        let p = c.split().primary_percent();
        assert!((15.0..=60.0).contains(&p), "step {step}: {p} out of bounds");
    }
}

#[test]
fn replaying_a_position_is_idempotent() {
    let mut rng = Lcg(7);
    let mut c = ColumnResizeController::new(20.0, 80.0, 40.0).unwrap();
    c.begin_drag(400.0);

    for _ in 0..200 {
        let x = rng.next_f64(0.0, 1_200.0);
        let w = rng.next_f64(200.0, 1_200.0);
        c.update_drag(x, w);
        let first = c.split();
        c.update_drag(x, w);
        assert_eq!(c.split(), first);
    }
}

#[test]
fn position_sequence_does_not_drift() {
    let mut direct = ColumnResizeController::new(20.0, 80.0, 40.0).unwrap();
    direct.begin_drag(100.0);
    direct.update_drag(250.0, 1_000.0);

    let mut wandering = ColumnResizeController::new(20.0, 80.0, 40.0).unwrap();
    wandering.begin_drag(100.0);
    for x in [900.0, -300.0, 120.0, 999.0, 250.0] {
        wandering.update_drag(x, 1_000.0);
    }

    assert_eq!(direct.split(), wandering.split());
}

#[test]
fn updates_after_end_are_ignored() {
    let mut c = ColumnResizeController::new(20.0, 80.0, 50.0).unwrap();
    c.begin_drag(0.0);
    c.update_drag(100.0, 500.0);
    c.end_drag();
    let before = c.split();
    for x in [0.0, 1e9, -1e9] {
        c.update_drag(x, 500.0);
    }
    assert_eq!(c.split(), before);
}

#[test]
fn reversed_bounds_are_a_configuration_error() {
    assert!(matches!(
        ColumnResizeController::new(80.0, 20.0, 50.0),
        Err(ConfigError::InvalidBounds { .. })
    ));
}

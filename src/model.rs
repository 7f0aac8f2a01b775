//! Clock-speed arithmetic and the derived-quantity formulas.
//! Every entry path of the overclock control funnels through these functions,
//! so text entry, stepper buttons and the slider cannot drift apart.

/// Lowest accepted clock setting, percent.
pub const MIN_PERCENT: i32 = 1;
/// Highest accepted clock setting, percent (fully power-sharded).
pub const MAX_PERCENT: i32 = 250;
/// Clock setting a freshly placed building starts at.
pub const DEFAULT_PERCENT: i32 = 100;

/// Exponent of the power draw curve for extraction buildings.
const EXTRACTOR_POWER_EXPONENT: f64 = 1.3;

pub fn clamp_percent(v: i32) -> i32 {
    v.clamp(MIN_PERCENT, MAX_PERCENT)
}

/// Nearest multiple of 10 (halves round up), then clamped. Slider positions
/// pass through here so a drag always lands on a decade, except at the 1 and
/// 250 boundaries where the clamp wins.
pub fn snap_to_decade(v: i32) -> i32 {
    clamp_percent((v + 5).div_euclid(10) * 10)
}

/// A +10 step from an exact decade advances a whole decade (100 -> 110); from
/// anything else it rounds up to the next decade boundary (107 -> 110).
pub fn step_decade_up(v: i32) -> i32 {
    let next = if v % 10 == 0 {
        v + 10
    } else {
        (v.div_euclid(10) + 1) * 10
    };
    clamp_percent(next)
}

/// Mirror of [`step_decade_up`]: exact decades drop a whole decade
/// (100 -> 90), everything else falls to the current decade floor (107 -> 100).
pub fn step_decade_down(v: i32) -> i32 {
    let prev = if v % 10 == 0 {
        v - 10
    } else {
        v.div_euclid(10) * 10
    };
    clamp_percent(prev)
}

pub fn step_unit_up(v: i32) -> i32 {
    clamp_percent(v + 1)
}

pub fn step_unit_down(v: i32) -> i32 {
    clamp_percent(v - 1)
}

/// Linear clock scaling: generator output, fuel use and extraction rates all
/// follow the clock directly.
pub fn scale_linear(base_per_min: f64, percent: i32) -> f64 {
    base_per_min * percent as f64 / 100.0
}

/// Extraction buildings pay for overclocking along a power-law curve rather
/// than linearly.
pub fn extractor_power_mw(base_mw: f64, percent: i32) -> f64 {
    base_mw * (percent as f64 / 100.0).powf(EXTRACTOR_POWER_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_and_idempotence() {
        for v in [-10, 0, 1, 2, 100, 249, 250, 251, 10_000] {
            let c = clamp_percent(v);
            assert!((MIN_PERCENT..=MAX_PERCENT).contains(&c));
            assert_eq!(clamp_percent(c), c);
        }
        assert_eq!(clamp_percent(0), 1);
        assert_eq!(clamp_percent(75), 75);
        assert_eq!(clamp_percent(300), 250);
    }

    #[test]
    fn slider_positions_snap_to_decades() {
        assert_eq!(snap_to_decade(107), 110);
        assert_eq!(snap_to_decade(104), 100);
        assert_eq!(snap_to_decade(105), 110);
        // 2 snaps to 0, which the clamp pulls back to 1.
        assert_eq!(snap_to_decade(2), 1);
        assert_eq!(snap_to_decade(250), 250);
        assert_eq!(snap_to_decade(246), 250);
    }

    #[test]
    fn decade_steps_from_exact_multiples_move_a_full_decade() {
        assert_eq!(step_decade_up(100), 110);
        assert_eq!(step_decade_down(100), 90);
    }

    #[test]
    fn decade_steps_from_non_multiples_round_to_the_boundary() {
        assert_eq!(step_decade_up(107), 110);
        assert_eq!(step_decade_down(107), 100);
        assert_eq!(step_decade_down(103), 100);
    }

    #[test]
    fn decade_steps_respect_the_clamp() {
        assert_eq!(step_decade_up(250), 250);
        assert_eq!(step_decade_up(245), 250);
        assert_eq!(step_decade_down(10), 1);
        assert_eq!(step_decade_down(7), 1);
    }

    #[test]
    fn unit_steps_stop_at_the_bounds() {
        assert_eq!(step_unit_up(107), 108);
        assert_eq!(step_unit_up(250), 250);
        assert_eq!(step_unit_down(108), 107);
        assert_eq!(step_unit_down(1), 1);
    }

    #[test]
    fn generator_output_scales_linearly() {
        assert_eq!(scale_linear(75.0, 50), 37.5);
        assert_eq!(scale_linear(15.0, 50), 7.5);
        assert_eq!(scale_linear(75.0, 100), 75.0);
    }

    #[test]
    fn extractor_power_follows_the_power_law() {
        assert_eq!(extractor_power_mw(5.0, 100), 5.0);
        let at_150 = extractor_power_mw(5.0, 150);
        assert!((at_150 - 5.0 * 1.5f64.powf(1.3)).abs() < 1e-12);
        assert_eq!(format!("{:.1}", at_150), "8.5");
        // Underclocking is cheaper than linear.
        assert!(extractor_power_mw(5.0, 50) < 2.5);
    }

    #[test]
    fn extraction_rate_scales_linearly_not_by_the_power_law() {
        assert_eq!(scale_linear(60.0, 150), 90.0);
        assert_eq!(scale_linear(60.0, 100), 60.0);
    }
}

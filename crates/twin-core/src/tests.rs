//! Unit tests for twin-core primitives.

#[cfg(test)]
mod time {
    use crate::Hour;

    #[test]
    fn new_wraps_modulo_24() {
        assert_eq!(Hour::new(0), Hour::MIDNIGHT);
        assert_eq!(Hour::new(24), Hour::MIDNIGHT);
        assert_eq!(Hour::new(25).value(), 1);
    }

    #[test]
    fn next_wraps_23_to_0() {
        assert_eq!(Hour::new(22).next().value(), 23);
        assert_eq!(Hour::new(23).next(), Hour::MIDNIGHT);
    }

    #[test]
    fn daytime_boundaries() {
        assert!(!Hour::new(5).is_daytime());
        assert!(Hour::new(6).is_daytime());
        assert!(Hour::new(17).is_daytime());
        assert!(!Hour::new(18).is_daytime());
        assert!(!Hour::new(0).is_daytime());
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(Hour::try_from(23u8).is_ok());
        assert!(Hour::try_from(24u8).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Hour::new(3).to_string(), "03:00");
        assert_eq!(Hour::new(15).to_string(), "15:00");
    }
}

#[cfg(test)]
mod weather {
    use crate::{diurnal_temperature, temperature_at, Hour};

    #[test]
    fn mean_crossing_at_nine() {
        // sin(0) is exact, so this holds bit-for-bit.
        assert_eq!(diurnal_temperature(9), 18.0);
    }

    #[test]
    fn periodic_over_24_hours() {
        for h in -48..72 {
            let diff = (diurnal_temperature(h + 24) - diurnal_temperature(h)).abs();
            assert!(diff < 1e-9, "hour {h}: diff {diff}");
        }
    }

    #[test]
    fn peak_and_trough() {
        assert!((diurnal_temperature(15) - 28.0).abs() < 1e-9);
        assert!((diurnal_temperature(3) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn symmetric_about_peak() {
        for d in 0..=9 {
            let up = diurnal_temperature(15 + d);
            let down = diurnal_temperature(15 - d);
            assert!((up - down).abs() < 1e-9, "offset {d}");
        }
    }

    #[test]
    fn antisymmetric_about_mean_crossing() {
        // temperature(9+d) + temperature(9−d) = 2·mean for every offset.
        for d in 0..=9 {
            let sum = diurnal_temperature(9 + d) + diurnal_temperature(9 - d);
            assert!((sum - 36.0).abs() < 1e-9, "offset {d}: sum {sum}");
        }
    }

    #[test]
    fn hour_wrapper_matches_integer_form() {
        for h in 0..24u8 {
            assert_eq!(temperature_at(Hour::new(h)), diurnal_temperature(i64::from(h)));
        }
    }
}

#[cfg(test)]
mod features {
    use crate::{FeatureVector, IrrigationDecision};

    #[test]
    fn array_order_is_contract_order() {
        let f = FeatureVector {
            hour: 10.0,
            temperature: 20.5,
            soil_moisture: 80.0,
            moisture_change_last_hour: -1.5,
        };
        assert_eq!(f.to_array(), [10.0, 20.5, 80.0, -1.5]);
    }

    #[test]
    fn label_roundtrip() {
        assert_eq!(IrrigationDecision::Hold.label(), 0);
        assert_eq!(IrrigationDecision::Irrigate.label(), 1);
        assert_eq!(IrrigationDecision::from_label(0), IrrigationDecision::Hold);
        assert_eq!(IrrigationDecision::from_label(1), IrrigationDecision::Irrigate);
        assert!(IrrigationDecision::from_label(7).is_on());
    }
}

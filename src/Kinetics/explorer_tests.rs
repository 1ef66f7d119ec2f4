#[cfg(test)]
mod tests {
    use crate::Kinetics::arrhenius::{ReactionOrder, ReactionParameters, rate_constant};
    use crate::Kinetics::explorer::*;
    use crate::Kinetics::kinetics_errors::KineticsError;
    use crate::Kinetics::series::{SeriesSet, SweepRange};
    use crate::settings::ExplorerConfig;
    use approx::assert_relative_eq;

    fn explorer() -> KineticsExplorer {
        KineticsExplorer::new(&ExplorerConfig::default()).unwrap()
    }

    #[test]
    fn test_new_generates_series() {
        let ex = explorer();
        assert_eq!(ex.generation(), 1);
        assert_eq!(*ex.params(), ReactionParameters::default());
        assert_eq!(ex.series().temperature.0.len(), 21);
        assert_eq!(ex.series().concentration.0.len(), 30);
        assert_eq!(ex.series().arrhenius.0.len(), 11);
    }

    #[test]
    fn test_setters_regenerate_all_series() {
        let mut ex = explorer();
        ex.set_temperature(350.0).unwrap();
        assert_eq!(ex.generation(), 2);
        assert_eq!(ex.params().temperature, 350.0);
        assert_eq!(*ex.series(), SeriesSet::generate(ex.params()));

        ex.set_concentration_a(2.0).unwrap();
        ex.set_concentration_b(0.5).unwrap();
        ex.set_order(ReactionOrder::First);
        assert!(ex.toggle_catalyst());
        assert_eq!(ex.generation(), 6);
        assert!(ex.params().catalyst);
        assert_eq!(*ex.series(), SeriesSet::generate(ex.params()));

        let k = rate_constant(350.0, true);
        assert_relative_eq!(
            ex.series().concentration.0[9].rate,
            k * 1.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_rejected_change_keeps_state() {
        let mut ex = explorer();
        let before = ex.series().clone();
        match ex.set_temperature(400.0) {
            Err(KineticsError::OutOfRange { name, min, max, .. }) => {
                assert_eq!(name, "temperature");
                assert_eq!((min, max), (273.0, 373.0));
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
        assert!(ex.set_concentration_a(0.0).is_err());
        assert!(ex.set_concentration_b(f64::NAN).is_err());
        assert_eq!(ex.generation(), 1);
        assert_eq!(*ex.series(), before);
        assert_eq!(*ex.params(), ReactionParameters::default());
    }

    #[test]
    fn test_apply_last_write_wins() {
        let mut ex = explorer();
        let first = ReactionParameters::new(300.0, 1.0, 1.0, false, ReactionOrder::First);
        let second = ReactionParameters::new(320.0, 2.5, 0.3, true, ReactionOrder::Second);
        ex.apply(first).unwrap();
        ex.apply(second).unwrap();
        assert_eq!(*ex.params(), second);
        assert_eq!(*ex.series(), SeriesSet::generate(&second));
        assert!(ex
            .apply(ReactionParameters::new(-1.0, 1.0, 1.0, false, ReactionOrder::First))
            .is_err());
        assert_eq!(*ex.params(), second);
    }

    #[test]
    fn test_summary_second_order() {
        let ex = explorer();
        let summary = ex.summary();
        let k = rate_constant(298.0, false);
        assert_relative_eq!(summary.rate_constant, k, max_relative = 1e-12);
        assert_relative_eq!(summary.rate, k, max_relative = 1e-12);
        assert_eq!(summary.half_life, None);
        assert_eq!(summary.half_life_display(), "Depends on [A]₀");
        assert!(summary.rate_constant_display().ends_with("M⁻¹s⁻¹"));
        assert!(summary.rate_display().ends_with("M/s"));
        assert_eq!(summary.temperature_display(), "298 K (25°C)");
    }

    #[test]
    fn test_summary_first_order_half_life() {
        let mut ex = explorer();
        ex.set_order(ReactionOrder::First);
        let summary = ex.summary();
        let t_half = summary.half_life.unwrap();
        assert_relative_eq!(
            t_half,
            std::f64::consts::LN_2 / rate_constant(298.0, false),
            max_relative = 1e-12
        );
        assert_eq!(summary.half_life_display(), "0.00 s");
        assert!(summary.rate_constant_display().ends_with("s⁻¹"));
        assert!(!summary.rate_constant_display().contains("M⁻¹"));
    }

    #[test]
    fn test_config_with_out_of_range_start_is_rejected() {
        let mut config = ExplorerConfig::default();
        config.initial.temperature = 500.0;
        assert!(KineticsExplorer::new(&config).is_err());
    }

    #[test]
    fn test_bound_check() {
        let b = Bound::new(0.1, 3.0);
        assert_eq!(b.check("c", 0.1).unwrap(), 0.1);
        assert_eq!(b.check("c", 3.0).unwrap(), 3.0);
        assert!(b.check("c", 3.01).is_err());
        assert!(matches!(
            b.check("c", f64::INFINITY),
            Err(KineticsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_config_with_bad_sweeps_is_rejected() {
        let mut config = ExplorerConfig::default();
        config.sweeps.temperature = SweepRange::new(273.0, 373.0, 1e-320);
        assert!(matches!(
            KineticsExplorer::new(&config),
            Err(KineticsError::InvalidParameter { .. })
        ));

        let mut config = ExplorerConfig::default();
        config.sweeps.arrhenius = SweepRange::new(0.0, 100.0, 10.0);
        assert!(KineticsExplorer::new(&config).is_err());

        let mut config = ExplorerConfig::default();
        config.sweeps.concentration = SweepRange::new(3.0, 0.1, 0.1);
        assert!(KineticsExplorer::new(&config).is_err());
    }

    #[test]
    fn test_config_with_bad_bounds_is_rejected() {
        let mut config = ExplorerConfig::default();
        config.bounds.temperature = Bound::new(373.0, 273.0);
        assert!(matches!(
            KineticsExplorer::new(&config),
            Err(KineticsError::InvalidParameter { ref name, .. }) if name == "bounds.temperature.max"
        ));

        let mut config = ExplorerConfig::default();
        config.bounds.temperature = Bound::new(0.0, 373.0);
        assert!(KineticsExplorer::new(&config).is_err());

        let mut config = ExplorerConfig::default();
        config.bounds.concentration = Bound::new(-1.0, 3.0);
        assert!(KineticsExplorer::new(&config).is_err());
    }
}

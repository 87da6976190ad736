use proptest::prelude::*;
use scrolly_chart::core::{BandScale, LinearScale, SiFormat};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_max in 0.001f64..1_000_000.0,
        range_size in 1.0f64..4_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let scale = LinearScale::new((0.0, domain_max), (range_size, 0.0));
        let value = value_factor * domain_max;

        let px = scale.map(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-7 * domain_max.max(1.0));
        prop_assert!(px >= -1e-9 && px <= range_size + 1e-9);
    }

    #[test]
    fn ticks_are_sorted_evenly_spaced_and_inside_the_domain(
        domain_max in 0.01f64..1_000_000.0
    ) {
        let ticks = LinearScale::new((0.0, domain_max), (500.0, 0.0)).ticks(10);
        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= 21);
        prop_assert_eq!(ticks[0], 0.0);
        prop_assert!(ticks.iter().all(|tick| *tick <= domain_max * (1.0 + 1e-12)));
        if ticks.len() > 2 {
            let step = ticks[1] - ticks[0];
            for pair in ticks.windows(2) {
                prop_assert!(((pair[1] - pair[0]) - step).abs() <= step * 1e-9);
            }
        }
    }

    #[test]
    fn bands_tile_the_range_in_order(
        count in 1usize..40,
        width in 10.0f64..5_000.0
    ) {
        let categories: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
        let scale = BandScale::new(categories.iter().map(String::as_str), (0.0, width), 0.2);

        let mut previous_end = 0.0;
        for category in &categories {
            let start = scale.position(category).expect("in domain");
            prop_assert!(start >= previous_end - 1e-9);
            previous_end = start + scale.bandwidth();
        }
        prop_assert!((previous_end + scale.step() * 0.2 - width).abs() <= 1e-6 * width);
    }

    #[test]
    fn si_labels_stay_short(value in -1e12f64..1e12) {
        let label = SiFormat::default().format(value);
        prop_assert!(!label.is_empty());
        prop_assert!(label.chars().count() <= 6, "{label}");
    }
}

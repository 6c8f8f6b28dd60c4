//! Property tests for the price calculator.

use proptest::prelude::*;

use mumbai_price_estimator::domain::pricing::{
    Amenity, FloorBand, LocationZone, PriceCalculator, PriceRequest, BUILDING_AGE_RANGE,
    CARPET_AREA_RANGE, CARPET_AREA_STEP,
};

fn zone() -> impl Strategy<Value = LocationZone> {
    prop::sample::select(LocationZone::ALL.to_vec())
}

fn floor() -> impl Strategy<Value = FloorBand> {
    prop::sample::select(FloorBand::ALL.to_vec())
}

fn amenities() -> impl Strategy<Value = Vec<Amenity>> {
    prop::sample::subsequence(Amenity::ALL.to_vec(), 0..=Amenity::ALL.len())
}

fn request() -> impl Strategy<Value = PriceRequest> {
    (CARPET_AREA_RANGE, zone(), floor(), BUILDING_AGE_RANGE, amenities()).prop_map(
        |(area, zone, floor, age, amenities)| PriceRequest::new(area, zone, floor, age, amenities),
    )
}

proptest! {
    #[test]
    fn estimate_is_deterministic(req in request()) {
        let first = PriceCalculator::estimate(&req);
        let second = PriceCalculator::estimate(&req.clone());
        prop_assert_eq!(first.value().to_bits(), second.value().to_bits());
    }

    #[test]
    fn estimate_has_two_decimals_and_is_positive(req in request()) {
        let value = PriceCalculator::estimate(&req).value();
        prop_assert!(value > 0.0);
        let cents = value * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn larger_area_costs_more(req in request(), extra in 1u32..=1700) {
        let area = req.carpet_area_sqft();
        let bigger = req.clone().with_carpet_area(area + extra);

        let small = PriceCalculator::breakdown(&req);
        let large = PriceCalculator::breakdown(&bigger);
        prop_assert!(large.final_price > small.final_price);
        prop_assert!(large.estimated_price >= small.estimated_price);
    }

    #[test]
    fn one_slider_step_changes_rounded_estimate(req in request()) {
        let area = req.carpet_area_sqft();
        prop_assume!(area + CARPET_AREA_STEP <= *CARPET_AREA_RANGE.end());
        let bigger = req.clone().with_carpet_area(area + CARPET_AREA_STEP);

        prop_assert!(PriceCalculator::estimate(&bigger) > PriceCalculator::estimate(&req));
    }

    #[test]
    fn each_amenity_scales_by_exact_ratio(
        area in CARPET_AREA_RANGE,
        zone in zone(),
        floor in floor(),
        age in BUILDING_AGE_RANGE,
        n in 0usize..Amenity::ALL.len(),
    ) {
        let fewer = PriceRequest::new(area, zone, floor, age, Amenity::ALL[..n].iter().copied());
        let more = PriceRequest::new(area, zone, floor, age, Amenity::ALL[..=n].iter().copied());

        let fewer = PriceCalculator::breakdown(&fewer).final_price;
        let more = PriceCalculator::breakdown(&more).final_price;
        let expected = (1.0 + 0.02 * (n as f64 + 1.0)) / (1.0 + 0.02 * n as f64);

        prop_assert!(more > fewer);
        prop_assert!(((more / fewer) - expected).abs() < 1e-12);
    }

    #[test]
    fn older_buildings_never_cost_more(req in request(), extra in 1u32..=40) {
        let age = req.building_age_years();
        let older = req.clone().with_building_age(age + extra);
        prop_assert!(
            PriceCalculator::breakdown(&older).final_price
                <= PriceCalculator::breakdown(&req).final_price
        );
    }
}

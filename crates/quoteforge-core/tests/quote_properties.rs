use proptest::prelude::*;
use quoteforge_core::catalog::{self, base_package_ids, Catalog};
use quoteforge_core::rules::{EXTRA_UNIT_PRICE, RUSH_HALF_FEE, RUSH_QUARTER_FEE};
use quoteforge_core::{
    compute_quote, AdvanceTier, CoreError, Money, ProjectSelection, RushTier, WorkDays,
};

fn calculator() -> Catalog {
    catalog::price_calculator().unwrap()
}

fn package_ids() -> Vec<String> {
    base_package_ids(&calculator())
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn feature_ids() -> Vec<String> {
    let catalog = calculator();
    let packages = package_ids();
    catalog
        .items()
        .map(|item| item.id.clone())
        .filter(|id| !packages.contains(id))
        .collect()
}

fn rush_tier() -> impl Strategy<Value = RushTier> {
    prop::sample::select(RushTier::ALL.to_vec())
}

fn advance_tier() -> impl Strategy<Value = AdvanceTier> {
    prop::sample::select(AdvanceTier::ALL.to_vec())
}

prop_compose! {
    fn selection()(
        base in prop::sample::select(package_ids()),
        extra_units in -20i64..200,
        add_ons in prop::sample::subsequence(feature_ids(), 0..=6),
        rush in rush_tier(),
        ownership in any::<bool>(),
        advance in advance_tier(),
    ) -> ProjectSelection {
        let mut selection = ProjectSelection::new(base)
            .with_rush_tier(rush)
            .with_ownership_rights(ownership)
            .with_advance_tier(advance);
        selection.extra_units = extra_units;
        for id in add_ons {
            selection.add_add_on(id);
        }
        selection
    }
}

proptest! {
    #[test]
    fn same_selection_same_quote(selection in selection()) {
        let catalog = calculator();
        let first = compute_quote(&selection, &catalog).unwrap();
        let second = compute_quote(&selection.clone(), &catalog).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn totals_are_consistent(selection in selection()) {
        let quote = compute_quote(&selection, &calculator()).unwrap();

        prop_assert_eq!(quote.final_total, quote.subtotal - quote.discount_amount);
        prop_assert!(quote.discount_amount <= quote.subtotal);
        prop_assert!(!quote.discount_amount.is_negative());
        prop_assert_eq!(quote.deposit_due + quote.balance_on_completion, quote.final_total);

        let lines: Money = quote.lines.iter().map(|line| line.amount).sum();
        prop_assert_eq!(lines, quote.subtotal);
    }

    #[test]
    fn duration_is_at_least_one_day(selection in selection()) {
        let quote = compute_quote(&selection, &calculator()).unwrap();
        prop_assert!(quote.estimated_duration_days >= 1);
        prop_assert_eq!(quote.estimated_duration_days, quote.duration.ceil_days());
    }

    #[test]
    fn one_more_unit_costs_one_unit_price(selection in selection()) {
        let catalog = calculator();
        let base = selection.clone().with_extra_units(selection.effective_extra_units() as i64);
        let mut more = base.clone();
        more.increment_extra_units();

        let before = compute_quote(&base, &catalog).unwrap();
        let after = compute_quote(&more, &catalog).unwrap();
        prop_assert_eq!(after.subtotal - before.subtotal, EXTRA_UNIT_PRICE);
    }

    #[test]
    fn adding_an_add_on_never_lowers_the_price(
        selection in selection(),
        pick in any::<prop::sample::Index>(),
    ) {
        let unselected: Vec<String> = feature_ids()
            .into_iter()
            .filter(|id| !selection.has_add_on(id))
            .collect();
        prop_assume!(!unselected.is_empty());
        let catalog = calculator();

        let id = pick.get(&unselected).clone();
        let mut more = selection.clone();
        prop_assert!(more.add_add_on(id));

        let before = compute_quote(&selection, &catalog).unwrap();
        let after = compute_quote(&more, &catalog).unwrap();
        prop_assert!(after.subtotal >= before.subtotal);
        prop_assert!(after.final_total >= before.final_total);
        if selection.rush_tier == RushTier::None {
            prop_assert!(after.duration >= before.duration);
        }
        prop_assert!(after.estimated_duration_days >= before.estimated_duration_days);
    }

    #[test]
    fn reselecting_an_add_on_changes_nothing(selection in selection()) {
        prop_assume!(!selection.selected_add_ons.is_empty());
        let catalog = calculator();

        let mut again = selection.clone();
        let existing: Vec<String> = again.selected_add_ons.iter().cloned().collect();
        for id in existing {
            prop_assert!(!again.add_add_on(id));
        }

        prop_assert_eq!(
            compute_quote(&selection, &catalog).unwrap(),
            compute_quote(&again, &catalog).unwrap()
        );
    }

    #[test]
    fn rush_divides_the_summed_duration_once(selection in selection()) {
        let catalog = calculator();
        let plain = compute_quote(&selection.clone().with_rush_tier(RushTier::None), &catalog).unwrap();
        let half = compute_quote(&selection.clone().with_rush_tier(RushTier::Half), &catalog).unwrap();
        let quarter = compute_quote(&selection.clone().with_rush_tier(RushTier::Quarter), &catalog).unwrap();

        let days = plain.duration.hundredths();
        prop_assert_eq!(half.duration, WorkDays::from_days(days.div_ceil(200)));
        prop_assert_eq!(quarter.duration, WorkDays::from_days(days.div_ceil(400)));
        prop_assert!(quarter.estimated_duration_days <= half.estimated_duration_days);
        prop_assert!(half.estimated_duration_days <= plain.estimated_duration_days);

        prop_assert_eq!(half.subtotal - plain.subtotal, RUSH_HALF_FEE);
        prop_assert_eq!(quarter.subtotal - plain.subtotal, RUSH_QUARTER_FEE);
    }

    #[test]
    fn negative_units_price_like_zero(selection in selection(), negative in i64::MIN..0) {
        let catalog = calculator();
        let mut clamped = selection.clone();
        clamped.extra_units = negative;

        prop_assert_eq!(
            compute_quote(&clamped, &catalog).unwrap().subtotal,
            compute_quote(&selection.with_extra_units(0), &catalog).unwrap().subtotal
        );
    }

    #[test]
    fn unknown_add_on_is_rejected(selection in selection(), suffix in "[a-z]{1,8}") {
        let id = format!("unlisted-{}", suffix);
        let result = compute_quote(&selection.with_add_on(id.clone()), &calculator());
        prop_assert!(matches!(result, Err(CoreError::UnknownCatalogItem(ref unknown)) if *unknown == id));
    }
}

//! Per-line amounts and document-level tax aggregation.

use serde::{Deserialize, Serialize};

use gstbill_core::{Money, ProductRef, Quantity, TaxRate};

use crate::classify::TransactionClass;

/// One billable line of a document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque catalog reference; never interpreted here.
    pub product: ProductRef,
    pub quantity: Quantity,
    /// Rate per unit in paise.
    pub unit_rate: Money,
    pub tax_rate: TaxRate,
}

/// Base and tax amounts for a single line.
///
/// The CGST/SGST/IGST split is not applied per line because it depends on the
/// document-level classification; see [`aggregate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmounts {
    pub base: Money,
    pub tax: Money,
}

/// Document-level totals.
///
/// Exactly one of `cgst + sgst` or `igst` is populated; the other side is
/// zero. `cgst + sgst + igst == total_tax` holds exactly in integer paise.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    pub subtotal: Money,
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
    pub total_tax: Money,
    pub grand_total: Money,
}

impl AggregateTotals {
    pub const fn zero() -> Self {
        Self {
            subtotal: Money::zero(),
            cgst: Money::zero(),
            sgst: Money::zero(),
            igst: Money::zero(),
            total_tax: Money::zero(),
            grand_total: Money::zero(),
        }
    }
}

/// Compute base and tax amounts for one line.
///
/// Inputs are expected to be pre-validated upstream, but this never fails:
/// negative quantity or rate is clamped to zero and a zero quantity or rate
/// simply contributes nothing.
pub fn compute_line(line: &LineItem) -> LineAmounts {
    let base = line
        .unit_rate
        .clamp_non_negative()
        .extend(line.quantity.clamp_non_negative());
    let tax = base.tax_at(line.tax_rate);
    LineAmounts { base, tax }
}

/// Aggregate document totals from line items and a transaction class.
///
/// Intra-state (and unknown, by policy) tax splits per line into CGST + SGST
/// with the odd paisa going to CGST; inter-state tax lands whole in IGST.
/// Splitting per line and summing equals splitting the sum, except that the
/// per-line odd paise accumulate in CGST — which is the documented rule.
/// An empty slice yields all-zero totals.
pub fn aggregate(lines: &[LineItem], class: TransactionClass) -> AggregateTotals {
    let mut totals = AggregateTotals::zero();

    for line in lines {
        let amounts = compute_line(line);
        totals.subtotal += amounts.base;
        totals.total_tax += amounts.tax;

        if class.splits_locally() {
            let (cgst, sgst) = amounts.tax.split_even();
            totals.cgst += cgst;
            totals.sgst += sgst;
        } else {
            totals.igst += amounts.tax;
        }
    }

    totals.grand_total = totals.subtotal + totals.total_tax;
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{TransactionClass, classify_transaction};
    use gstbill_parties::StateCode;

    fn line(qty: i64, rate_paise: i64, percent: u32) -> LineItem {
        LineItem {
            product: ProductRef::new(),
            quantity: Quantity::from_whole(qty),
            unit_rate: Money::from_paise(rate_paise),
            tax_rate: TaxRate::from_percent(percent),
        }
    }

    #[test]
    fn intra_state_splits_tax_evenly() {
        // 2 × ₹500.00 at 18%, same state.
        let lines = [line(2, 50_000, 18)];
        let totals = aggregate(&lines, TransactionClass::Intra);

        assert_eq!(totals.subtotal, Money::from_rupees(1_000, 0));
        assert_eq!(totals.total_tax, Money::from_rupees(180, 0));
        assert_eq!(totals.cgst, Money::from_rupees(90, 0));
        assert_eq!(totals.sgst, Money::from_rupees(90, 0));
        assert_eq!(totals.igst, Money::zero());
        assert_eq!(totals.grand_total, Money::from_rupees(1_180, 0));
    }

    #[test]
    fn inter_state_bills_single_component() {
        let lines = [line(2, 50_000, 18)];
        let totals = aggregate(&lines, TransactionClass::Inter);

        assert_eq!(totals.cgst, Money::zero());
        assert_eq!(totals.sgst, Money::zero());
        assert_eq!(totals.igst, Money::from_rupees(180, 0));
        // The grand total does not depend on the split.
        assert_eq!(totals.grand_total, Money::from_rupees(1_180, 0));
    }

    #[test]
    fn multiple_lines_accumulate() {
        // (1 × ₹100 @ 5%) + (3 × ₹50 @ 12%)
        let lines = [line(1, 10_000, 5), line(3, 5_000, 12)];
        let totals = aggregate(&lines, TransactionClass::Intra);

        assert_eq!(totals.subtotal, Money::from_rupees(250, 0));
        assert_eq!(totals.total_tax, Money::from_rupees(23, 0));
        assert_eq!(totals.grand_total, Money::from_rupees(273, 0));
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let lines = [line(0, 50_000, 18), line(2, 50_000, 18)];
        let totals = aggregate(&lines, TransactionClass::Intra);
        assert_eq!(totals, aggregate(&lines[1..], TransactionClass::Intra));
    }

    #[test]
    fn negative_inputs_are_clamped() {
        let hostile = LineItem {
            product: ProductRef::new(),
            quantity: Quantity::from_whole(-3),
            unit_rate: Money::from_paise(-500),
            tax_rate: TaxRate::from_percent(18),
        };
        assert_eq!(
            compute_line(&hostile),
            LineAmounts {
                base: Money::zero(),
                tax: Money::zero()
            }
        );
    }

    #[test]
    fn empty_document_is_all_zero() {
        assert_eq!(aggregate(&[], TransactionClass::Inter), AggregateTotals::zero());
        assert_eq!(aggregate(&[], TransactionClass::Intra), AggregateTotals::zero());
    }

    #[test]
    fn unknown_class_behaves_like_intra() {
        let lines = [line(2, 50_000, 18), line(1, 9_999, 5)];
        assert_eq!(
            aggregate(&lines, TransactionClass::Unknown),
            aggregate(&lines, TransactionClass::Intra)
        );
    }

    #[test]
    fn omitted_buyer_identifier_falls_back_to_local_split() {
        let seller = StateCode::parse("07").unwrap();
        let class = classify_transaction(seller, "");
        assert_eq!(class, TransactionClass::Unknown);

        let lines = [line(2, 50_000, 18)];
        let totals = aggregate(&lines, class);
        assert_eq!(totals.cgst, totals.sgst);
        assert_eq!(totals.cgst + totals.sgst, totals.total_tax);
    }

    #[test]
    fn odd_paisa_goes_to_cgst() {
        // 1 × ₹0.50 at 18% = 9 paise tax: CGST 5, SGST 4.
        let lines = [line(1, 50, 18)];
        let totals = aggregate(&lines, TransactionClass::Intra);
        assert_eq!(totals.cgst, Money::from_paise(5));
        assert_eq!(totals.sgst, Money::from_paise(4));
        assert_eq!(totals.cgst + totals.sgst, totals.total_tax);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_line() -> impl Strategy<Value = LineItem> {
            (0i64..=10_000, 0i64..=10_000_000, 0u32..=10_000).prop_map(
                |(qty_milli, rate_paise, bps)| LineItem {
                    product: ProductRef::new(),
                    quantity: Quantity::from_milli(qty_milli),
                    unit_rate: Money::from_paise(rate_paise),
                    tax_rate: TaxRate::from_bps(bps),
                },
            )
        }

        fn arb_class() -> impl Strategy<Value = TransactionClass> {
            prop_oneof![
                Just(TransactionClass::Intra),
                Just(TransactionClass::Inter),
                Just(TransactionClass::Unknown),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: components always conserve the total tax, exactly.
            #[test]
            fn components_conserve_total_tax(
                lines in proptest::collection::vec(arb_line(), 0..32),
                class in arb_class()
            ) {
                let totals = aggregate(&lines, class);
                prop_assert_eq!(totals.cgst + totals.sgst + totals.igst, totals.total_tax);
                prop_assert_eq!(totals.grand_total, totals.subtotal + totals.total_tax);
            }

            /// Property: local split is symmetric up to one odd paisa per line.
            #[test]
            fn local_split_is_near_symmetric(
                lines in proptest::collection::vec(arb_line(), 0..32)
            ) {
                let totals = aggregate(&lines, TransactionClass::Intra);
                let skew = totals.cgst.paise() - totals.sgst.paise();
                prop_assert!(skew >= 0);
                prop_assert!(skew <= lines.len() as i64);
            }

            /// Property: inter-state totals never touch the local components.
            #[test]
            fn inter_state_is_exclusive(
                lines in proptest::collection::vec(arb_line(), 0..32)
            ) {
                let totals = aggregate(&lines, TransactionClass::Inter);
                prop_assert_eq!(totals.cgst, Money::zero());
                prop_assert_eq!(totals.sgst, Money::zero());
                prop_assert_eq!(totals.igst, totals.total_tax);
            }

            /// Property: aggregation is a pure function of its inputs.
            #[test]
            fn aggregation_is_deterministic(
                lines in proptest::collection::vec(arb_line(), 0..32),
                class in arb_class()
            ) {
                prop_assert_eq!(aggregate(&lines, class), aggregate(&lines, class));
            }
        }
    }
}

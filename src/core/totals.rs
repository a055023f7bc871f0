use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::DocumentError;
use super::types::{DiscountConfig, DocumentTotals, LineItem};

/// Calculate document totals from line items and a discount configuration.
///
/// The cascade runs in a fixed order: subtotal, first discount, second
/// discount, VAT. All percentage multiplications happen at full `Decimal`
/// precision; each output field is rounded to 2 decimal places (half-up)
/// only at the end, and the running totals are composed from the rounded
/// component amounts so that
/// `grand_total == subtotal − discount_amount − second_discount_amount + vat_amount`
/// holds exactly on the rounded values.
///
/// A zero subtotal short-circuits to all-zero totals. Negative percentages,
/// quantities, unit prices, or total overrides are rejected up front.
///
/// The function is pure: no I/O, no shared state, safe to call from any
/// number of threads.
pub fn calculate_totals(
    items: &[LineItem],
    discounts: &DiscountConfig,
) -> Result<DocumentTotals, DocumentError> {
    check_discount_percent(discounts.discount, "discount")?;
    check_discount_percent(discounts.second_discount, "second_discount")?;
    if discounts.vat < 0 {
        return Err(DocumentError::Validation(format!(
            "vat must not be negative, got {}",
            discounts.vat
        )));
    }

    for (i, line) in items.iter().enumerate() {
        if line.quantity.is_sign_negative() {
            return Err(DocumentError::Validation(format!(
                "lines[{i}].quantity must not be negative, got {}",
                line.quantity
            )));
        }
        if line.unit_price.is_sign_negative() {
            return Err(DocumentError::Validation(format!(
                "lines[{i}].unit_price must not be negative, got {}",
                line.unit_price
            )));
        }
        if let Some(total) = line.total {
            if total.is_sign_negative() {
                return Err(DocumentError::Validation(format!(
                    "lines[{i}].total must not be negative, got {total}"
                )));
            }
        }
    }

    let subtotal: Decimal = items.iter().map(LineItem::effective_total).sum();

    // Explicit special case: nothing to discount or tax, and no division
    // may happen downstream on a zero base.
    if subtotal.is_zero() {
        return Ok(DocumentTotals::zero());
    }

    let discount_amount = subtotal * Decimal::from(discounts.discount) / dec!(100);
    let post_discount_total = subtotal - discount_amount;
    let second_discount_amount =
        post_discount_total * Decimal::from(discounts.second_discount) / dec!(100);
    let total = post_discount_total - second_discount_amount;
    let vat_amount = total * Decimal::from(discounts.vat) / dec!(100);
    let grand_total = total + vat_amount;

    // Proportionality and additivity of the full-precision pipeline.
    debug_assert_eq!(
        discount_amount * dec!(100),
        subtotal * Decimal::from(discounts.discount)
    );
    debug_assert_eq!(
        second_discount_amount * dec!(100),
        post_discount_total * Decimal::from(discounts.second_discount)
    );
    debug_assert_eq!(vat_amount * dec!(100), total * Decimal::from(discounts.vat));
    debug_assert_eq!(
        grand_total,
        subtotal - discount_amount - second_discount_amount + vat_amount
    );

    // Round the component amounts once, then rebuild the running totals
    // from the rounded values so the additive chain stays exact.
    let subtotal = round_half_up(subtotal, 2);
    let discount_amount = round_half_up(discount_amount, 2);
    let post_discount_total = subtotal - discount_amount;
    let second_discount_amount = round_half_up(second_discount_amount, 2);
    let total = post_discount_total - second_discount_amount;
    let vat_amount = round_half_up(vat_amount, 2);
    let grand_total = total + vat_amount;

    Ok(DocumentTotals {
        subtotal,
        discount_amount,
        post_discount_total,
        second_discount_amount,
        total,
        vat_amount,
        grand_total,
    })
}

/// Round a Decimal to `dp` decimal places using half-up (commercial
/// rounding). Banker's rounding is deliberately not used.
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

fn check_discount_percent(value: i32, field: &str) -> Result<(), DocumentError> {
    if !(0..=100).contains(&value) {
        return Err(DocumentError::Validation(format!(
            "{field} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

use super::error::ValidationError;
use super::totals::calculate_totals;
use super::types::{Document, LineItem};

/// Validate a document's fields and configuration.
/// Returns all validation errors found (not just the first).
pub fn validate_document(document: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if document.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "document number must not be empty",
        ));
    }
    if document.number.len() > 200 {
        errors.push(ValidationError::new(
            "number",
            "document number cannot exceed 200 characters",
        ));
    }

    if document.counterparty.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "counterparty.name",
            "counterparty name must not be empty",
        ));
    }

    if let Some(due) = document.due_date {
        if due < document.issue_date {
            errors.push(ValidationError::new(
                "due_date",
                format!(
                    "due date {} must not be before issue date {}",
                    due, document.issue_date
                ),
            ));
        }
    }

    // Input limits to prevent abuse
    if document.lines.len() > 10_000 {
        errors.push(ValidationError::new(
            "lines",
            "document cannot have more than 10,000 line items",
        ));
    }
    if document.notes.len() > 100 {
        errors.push(ValidationError::new(
            "notes",
            "document cannot have more than 100 notes",
        ));
    }

    for (i, line) in document.lines.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    let d = &document.discounts;
    if !(0..=100).contains(&d.discount) {
        errors.push(ValidationError::new(
            "discounts.discount",
            format!("discount must be between 0 and 100, got {}", d.discount),
        ));
    }
    if !(0..=100).contains(&d.second_discount) {
        errors.push(ValidationError::new(
            "discounts.second_discount",
            format!(
                "second discount must be between 0 and 100, got {}",
                d.second_discount
            ),
        ));
    }
    if d.vat < 0 {
        errors.push(ValidationError::new(
            "discounts.vat",
            format!("vat must not be negative, got {}", d.vat),
        ));
    }

    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lines[{index}]");

    if line.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "line description must not be empty",
        ));
    }

    if line.quantity.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if line.unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }

    if let Some(total) = line.total {
        if total.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.total"),
                "line total must not be negative",
            ));
        }
    }
}

/// Verify a document's stored totals against its line items and discount
/// configuration.
///
/// Recomputes the totals from scratch and reports every field that
/// disagrees, plus the additive invariant on the stored values. An empty
/// result is the normal case; a non-empty one means the stored totals are
/// stale or were edited by hand.
pub fn verify_totals(document: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(totals) = &document.totals else {
        errors.push(ValidationError::new(
            "totals",
            "totals must be calculated before verification (call recalculate first)",
        ));
        return errors;
    };

    let expected = match calculate_totals(&document.lines, &document.discounts) {
        Ok(expected) => expected,
        Err(e) => {
            errors.push(ValidationError::new("totals", e.to_string()));
            return errors;
        }
    };

    let fields = [
        ("subtotal", totals.subtotal, expected.subtotal),
        (
            "discount_amount",
            totals.discount_amount,
            expected.discount_amount,
        ),
        (
            "post_discount_total",
            totals.post_discount_total,
            expected.post_discount_total,
        ),
        (
            "second_discount_amount",
            totals.second_discount_amount,
            expected.second_discount_amount,
        ),
        ("total", totals.total, expected.total),
        ("vat_amount", totals.vat_amount, expected.vat_amount),
        ("grand_total", totals.grand_total, expected.grand_total),
    ];
    for (name, stored, recomputed) in fields {
        if stored != recomputed {
            errors.push(ValidationError::new(
                format!("totals.{name}"),
                format!("stored value {stored} does not match recomputed {recomputed}"),
            ));
        }
    }

    let recomposed = totals.subtotal - totals.discount_amount - totals.second_discount_amount
        + totals.vat_amount;
    if totals.grand_total != recomposed {
        errors.push(ValidationError::new(
            "totals.grand_total",
            format!(
                "grand total {} does not match subtotal − discounts + vat = {}",
                totals.grand_total, recomposed
            ),
        ));
    }

    errors
}

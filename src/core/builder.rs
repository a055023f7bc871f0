use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::DocumentError;
use super::types::*;
use super::validation;

/// Builder for constructing valid documents.
///
/// ```
/// use mobilia::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let ack = DocumentBuilder::new(
///     DocumentKind::Acknowledgement,
///     "ACK-2026-014",
///     NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
/// )
/// .counterparty(Party::new("Chao Phraya Hotel").address("Bangkok"))
/// .add_line(LineItemBuilder::new("Rattan lounge set", dec!(2), dec!(48000)).build())
/// .add_line(LineItemBuilder::new("Delivery", dec!(1), dec!(3500)).build())
/// .discount(5)
/// .vat(7)
/// .build()
/// .unwrap();
/// assert!(ack.totals.is_some());
/// ```
pub struct DocumentBuilder {
    number: String,
    kind: DocumentKind,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    counterparty: Option<Party>,
    reference: Option<String>,
    notes: Vec<String>,
    lines: Vec<LineItem>,
    discounts: DiscountConfig,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind, number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            kind,
            issue_date,
            due_date: None,
            counterparty: None,
            reference: None,
            notes: Vec::new(),
            lines: Vec::new(),
            discounts: DiscountConfig::default(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn counterparty(mut self, party: Party) -> Self {
        self.counterparty = Some(party);
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// First discount percent, applied to the subtotal.
    pub fn discount(mut self, percent: i32) -> Self {
        self.discounts.discount = percent;
        self
    }

    /// Second discount percent, applied after the first discount.
    pub fn second_discount(mut self, percent: i32) -> Self {
        self.discounts.second_discount = percent;
        self
    }

    /// VAT percent, applied after both discounts.
    pub fn vat(mut self, percent: i32) -> Self {
        self.discounts.vat = percent;
        self
    }

    pub fn discounts(mut self, discounts: DiscountConfig) -> Self {
        self.discounts = discounts;
        self
    }

    /// Build the document, running validation and calculating totals.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Document, DocumentError> {
        if self.lines.is_empty() {
            return Err(DocumentError::Builder(
                "at least one line item is required".into(),
            ));
        }

        let mut document = self.into_document()?;

        let errors = validation::validate_document(&document);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DocumentError::Validation(msg));
        }

        document.recalculate()?;
        Ok(document)
    }

    /// Build without validation — useful for importing external data.
    /// Totals are still calculated, so negative line values or
    /// percentages are rejected.
    pub fn build_unchecked(self) -> Result<Document, DocumentError> {
        let mut document = self.into_document()?;
        document.recalculate()?;
        Ok(document)
    }

    fn into_document(self) -> Result<Document, DocumentError> {
        let counterparty = self
            .counterparty
            .ok_or_else(|| DocumentError::Builder("counterparty is required".into()))?;

        Ok(Document {
            number: self.number,
            kind: self.kind,
            issue_date: self.issue_date,
            due_date: self.due_date,
            counterparty,
            reference: self.reference,
            notes: self.notes,
            lines: self.lines,
            discounts: self.discounts,
            totals: None,
        })
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: None,
        }
    }

    /// Override the line total for custom pricing.
    pub fn total(mut self, total: Decimal) -> Self {
        self.total = Some(total);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total: self.total,
        }
    }
}

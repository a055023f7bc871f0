use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::totals::calculate_totals;

/// A back-office document — the top-level record.
///
/// One type covers every totals-bearing document kind; the kind is
/// carried as a [`DocumentKind`] the way invoice/credit-note variants
/// are carried as a type code elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document number (unique, gapless within its sequence).
    pub number: String,
    /// Which back-office document this is.
    pub kind: DocumentKind,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Customer for sales documents, vendor for expenses.
    pub counterparty: Party,
    /// Reference to a related document (e.g. the acknowledgement an
    /// invoice was raised from).
    pub reference: Option<String>,
    /// Free-text notes printed on the document.
    pub notes: Vec<String>,
    /// Ordered line items.
    pub lines: Vec<LineItem>,
    /// Discount and VAT percentages for this document.
    pub discounts: DiscountConfig,
    /// Calculated totals (set by [`Document::recalculate`]).
    pub totals: Option<DocumentTotals>,
}

impl Document {
    /// Recompute and store totals from the current line items and
    /// discount configuration.
    ///
    /// Call after any change that touches quantity, price, or the
    /// discount/VAT fields. The stored totals are replaced wholesale.
    pub fn recalculate(&mut self) -> Result<(), DocumentError> {
        self.totals = Some(calculate_totals(&self.lines, &self.discounts)?);
        Ok(())
    }
}

/// The back-office document kinds that carry computed totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Order acknowledgement sent to the customer.
    Acknowledgement,
    /// Sales invoice.
    Invoice,
    /// Purchase expense recorded against a vendor.
    Expense,
    /// Payment receipt.
    Receipt,
}

impl DocumentKind {
    /// Numbering prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Acknowledgement => "ACK",
            Self::Invoice => "INV",
            Self::Expense => "EXP",
            Self::Receipt => "RCT",
        }
    }

    /// Parse from a numbering prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "ACK" => Some(Self::Acknowledgement),
            "INV" => Some(Self::Invoice),
            "EXP" => Some(Self::Expense),
            "RCT" => Some(Self::Receipt),
            _ => None,
        }
    }
}

/// Counterparty of a document: the customer on sales documents, the
/// vendor on expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Name.
    pub name: String,
    /// Postal address, as printed on the document.
    pub address: Option<String>,
    /// Tax registration identifier.
    pub tax_id: Option<String>,
}

impl Party {
    /// Create a party with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            tax_id: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }
}

/// A document line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description.
    pub description: String,
    /// Quantity ordered.
    pub quantity: Decimal,
    /// Net price per unit.
    pub unit_price: Decimal,
    /// Line total override for custom pricing. When `None` the line
    /// totals to `quantity × unit_price`.
    pub total: Option<Decimal>,
}

impl LineItem {
    /// The amount this line contributes to the subtotal.
    pub fn effective_total(&self) -> Decimal {
        self.total.unwrap_or(self.quantity * self.unit_price)
    }
}

/// Discount and VAT percentages of the owning document.
///
/// All three are integer percents. The two discounts cascade: the first
/// applies to the subtotal, the second to what remains after the first.
/// VAT applies after both discounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// First discount percent (0–100), applied to the subtotal.
    pub discount: i32,
    /// Second discount percent (0–100), applied to the post-first-discount
    /// total.
    pub second_discount: i32,
    /// VAT percent (≥ 0), applied to the post-second-discount total.
    pub vat: i32,
}

impl DiscountConfig {
    pub fn new(discount: i32, second_discount: i32, vat: i32) -> Self {
        Self {
            discount,
            second_discount,
            vat,
        }
    }
}

/// Computed document totals.
///
/// Every field is rounded to 2 decimal places with half-up rounding, and
/// the additive chain holds exactly on the rounded values:
/// `grand_total == subtotal − discount_amount − second_discount_amount + vat_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of all line totals before any discount.
    pub subtotal: Decimal,
    /// First discount amount.
    pub discount_amount: Decimal,
    /// Subtotal minus the first discount.
    pub post_discount_total: Decimal,
    /// Second discount amount.
    pub second_discount_amount: Decimal,
    /// Net total after both discounts.
    pub total: Decimal,
    /// VAT amount on the net total.
    pub vat_amount: Decimal,
    /// Final payable amount = total + vat_amount.
    pub grand_total: Decimal,
}

impl DocumentTotals {
    /// All-zero totals, returned for documents with a zero subtotal.
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            post_discount_total: Decimal::ZERO,
            second_discount_amount: Decimal::ZERO,
            total: Decimal::ZERO,
            vat_amount: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

//! Double-entry ledger posting from computed document totals.
//!
//! Invoices, expenses, and receipts each post a fixed pattern of balanced
//! debit/credit lines against a small built-in chart of accounts.
//! Acknowledgements are not financial events and do not post.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Document, DocumentError, DocumentKind};

/// Accounts in the built-in back-office chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Account {
    /// 1000 — Cash and bank.
    Cash,
    /// 1100 — Trade receivables.
    AccountsReceivable,
    /// 1300 — Input VAT recoverable on purchases.
    VatReceivable,
    /// 2000 — Trade payables.
    AccountsPayable,
    /// 2100 — Output VAT owed on sales.
    VatPayable,
    /// 4000 — Furniture sales revenue.
    SalesRevenue,
    /// 5000 — Purchases and production expenses.
    PurchaseExpense,
}

impl Account {
    /// Chart-of-accounts code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cash => "1000",
            Self::AccountsReceivable => "1100",
            Self::VatReceivable => "1300",
            Self::AccountsPayable => "2000",
            Self::VatPayable => "2100",
            Self::SalesRevenue => "4000",
            Self::PurchaseExpense => "5000",
        }
    }
}

/// Side of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    Debit,
    Credit,
}

/// A single ledger line posted from a document.
///
/// The lines posted for one document must balance (Σ debit == Σ credit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Number of the document this entry was posted from.
    pub document_number: String,
    /// Posting date (the document's issue date).
    pub date: NaiveDate,
    /// The account affected by this entry.
    pub account: Account,
    /// Whether this is a debit or credit.
    pub side: EntrySide,
    /// Amount, always non-negative.
    pub amount: Decimal,
}

impl LedgerEntry {
    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => self.amount,
            EntrySide::Credit => -self.amount,
        }
    }
}

/// Check that a set of entries balances to zero.
pub fn is_balanced(entries: &[LedgerEntry]) -> bool {
    entries
        .iter()
        .map(LedgerEntry::signed_amount)
        .sum::<Decimal>()
        .is_zero()
}

/// Post a document's computed totals as balanced ledger entries.
///
/// The document must have totals calculated. Zero-amount lines (e.g. the
/// VAT line of a zero-VAT invoice) are omitted.
pub fn post_document(document: &Document) -> Result<Vec<LedgerEntry>, DocumentError> {
    let totals = document.totals.as_ref().ok_or_else(|| {
        DocumentError::Ledger(
            "totals must be calculated before posting (call recalculate first)".into(),
        )
    })?;

    let mut entries = Vec::new();
    let mut push = |account: Account, side: EntrySide, amount: Decimal| {
        if !amount.is_zero() {
            entries.push(LedgerEntry {
                document_number: document.number.clone(),
                date: document.issue_date,
                account,
                side,
                amount,
            });
        }
    };

    match document.kind {
        DocumentKind::Acknowledgement => {
            return Err(DocumentError::Ledger(
                "acknowledgements are not financial events and do not post".into(),
            ));
        }
        DocumentKind::Invoice => {
            push(
                Account::AccountsReceivable,
                EntrySide::Debit,
                totals.grand_total,
            );
            push(Account::SalesRevenue, EntrySide::Credit, totals.total);
            push(Account::VatPayable, EntrySide::Credit, totals.vat_amount);
        }
        DocumentKind::Receipt => {
            push(Account::Cash, EntrySide::Debit, totals.grand_total);
            push(
                Account::AccountsReceivable,
                EntrySide::Credit,
                totals.grand_total,
            );
        }
        DocumentKind::Expense => {
            push(Account::PurchaseExpense, EntrySide::Debit, totals.total);
            push(Account::VatReceivable, EntrySide::Debit, totals.vat_amount);
            push(
                Account::AccountsPayable,
                EntrySide::Credit,
                totals.grand_total,
            );
        }
    }

    if !is_balanced(&entries) {
        return Err(DocumentError::Ledger(format!(
            "entries for {} do not balance",
            document.number
        )));
    }

    Ok(entries)
}

#![cfg(feature = "ledger")]

use chrono::NaiveDate;
use mobilia::core::*;
use mobilia::ledger::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn document(kind: DocumentKind, vat: i32) -> Document {
    DocumentBuilder::new(kind, format!("{}-2026-001", kind.prefix()), date(2026, 3, 2))
        .counterparty(Party::new("Baan Suan Resort"))
        .add_line(LineItemBuilder::new("Teak wardrobe", dec!(1), dec!(20000)).build())
        .discount(10)
        .vat(vat)
        .build()
        .unwrap()
}

#[test]
fn invoice_posts_receivable_revenue_and_vat() {
    let entries = post_document(&document(DocumentKind::Invoice, 7)).unwrap();

    // 20000 − 10% = 18000, VAT 1260, grand 19260
    assert_eq!(entries.len(), 3);
    assert!(is_balanced(&entries));

    let debit = &entries[0];
    assert_eq!(debit.account, Account::AccountsReceivable);
    assert_eq!(debit.side, EntrySide::Debit);
    assert_eq!(debit.amount, dec!(19260));

    let revenue = entries
        .iter()
        .find(|e| e.account == Account::SalesRevenue)
        .unwrap();
    assert_eq!(revenue.side, EntrySide::Credit);
    assert_eq!(revenue.amount, dec!(18000));

    let vat = entries
        .iter()
        .find(|e| e.account == Account::VatPayable)
        .unwrap();
    assert_eq!(vat.amount, dec!(1260));
    assert_eq!(vat.date, date(2026, 3, 2));
    assert_eq!(vat.document_number, "INV-2026-001");
}

#[test]
fn zero_vat_invoice_omits_vat_line() {
    let entries = post_document(&document(DocumentKind::Invoice, 0)).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.account != Account::VatPayable));
    assert!(is_balanced(&entries));
}

#[test]
fn expense_posts_expense_input_vat_and_payable() {
    let entries = post_document(&document(DocumentKind::Expense, 7)).unwrap();

    assert_eq!(entries.len(), 3);
    assert!(is_balanced(&entries));

    let expense = entries
        .iter()
        .find(|e| e.account == Account::PurchaseExpense)
        .unwrap();
    assert_eq!(expense.side, EntrySide::Debit);
    assert_eq!(expense.amount, dec!(18000));

    let input_vat = entries
        .iter()
        .find(|e| e.account == Account::VatReceivable)
        .unwrap();
    assert_eq!(input_vat.side, EntrySide::Debit);
    assert_eq!(input_vat.amount, dec!(1260));

    let payable = entries
        .iter()
        .find(|e| e.account == Account::AccountsPayable)
        .unwrap();
    assert_eq!(payable.side, EntrySide::Credit);
    assert_eq!(payable.amount, dec!(19260));
}

#[test]
fn receipt_moves_cash_against_receivable() {
    let entries = post_document(&document(DocumentKind::Receipt, 7)).unwrap();

    assert_eq!(entries.len(), 2);
    assert!(is_balanced(&entries));
    assert_eq!(entries[0].account, Account::Cash);
    assert_eq!(entries[0].side, EntrySide::Debit);
    assert_eq!(entries[1].account, Account::AccountsReceivable);
    assert_eq!(entries[1].side, EntrySide::Credit);
    assert_eq!(entries[0].amount, entries[1].amount);
}

#[test]
fn acknowledgement_does_not_post() {
    let result = post_document(&document(DocumentKind::Acknowledgement, 7));
    assert!(matches!(result, Err(DocumentError::Ledger(_))));
}

#[test]
fn posting_requires_calculated_totals() {
    let mut doc = document(DocumentKind::Invoice, 7);
    doc.totals = None;
    let err = post_document(&doc).unwrap_err();
    assert!(err.to_string().contains("recalculate"));
}

#[test]
fn signed_amounts_sum_to_zero() {
    let entries = post_document(&document(DocumentKind::Expense, 7)).unwrap();
    let sum: Decimal = entries.iter().map(LedgerEntry::signed_amount).sum();
    assert_eq!(sum, Decimal::ZERO);
}

#[test]
fn account_codes_are_stable() {
    assert_eq!(Account::Cash.code(), "1000");
    assert_eq!(Account::AccountsReceivable.code(), "1100");
    assert_eq!(Account::VatPayable.code(), "2100");
    assert_eq!(Account::SalesRevenue.code(), "4000");
}

#[test]
fn entries_serialize_to_json() {
    let entries = post_document(&document(DocumentKind::Invoice, 7)).unwrap();
    let json = serde_json::to_string(&entries).unwrap();
    assert!(json.contains("\"debit\""));
    assert!(json.contains("INV-2026-001"));

    let back: Vec<LedgerEntry> = serde_json::from_str(&json).unwrap();
    assert!(is_balanced(&back));
}

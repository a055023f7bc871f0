use chrono::{Datelike, NaiveDate};

use super::error::DocumentError;
use super::types::DocumentKind;

/// Gapless document number sequence generator.
///
/// Generates numbers in the format `{prefix}-{year}-{sequential}`,
/// e.g. "INV-2026-001", "INV-2026-002". Each document kind carries its
/// own prefix, so acknowledgements, invoices, expenses, and receipts run
/// as independent sequences.
///
/// This struct tracks the last issued number and ensures no gaps; the
/// caller is responsible for persisting it between runs.
#[derive(Debug, Clone)]
pub struct DocumentNumberSequence {
    kind: DocumentKind,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl DocumentNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(kind: DocumentKind, year: i32) -> Self {
        Self {
            kind,
            year,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(kind: DocumentKind, year: i32, next_number: u64) -> Self {
        Self {
            kind,
            year,
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next document number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        format!(
            "{}-{}-{:0>width$}",
            self.kind.prefix(),
            self.year,
            num,
            width = self.zero_pad
        )
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}-{}-{:0>width$}",
            self.kind.prefix(),
            self.year,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// The document kind this sequence numbers.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Get the current year of the sequence.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), DocumentError> {
        if new_year <= self.year {
            return Err(DocumentError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance year if the given date is in a new year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let date_year = date.year();
        if date_year > self.year {
            self.year = date_year;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_numbering() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2026);
        assert_eq!(seq.next_number(), "INV-2026-001");
        assert_eq!(seq.next_number(), "INV-2026-002");
        assert_eq!(seq.next_number(), "INV-2026-003");
    }

    #[test]
    fn kinds_use_their_own_prefixes() {
        let mut ack = DocumentNumberSequence::new(DocumentKind::Acknowledgement, 2026);
        let mut exp = DocumentNumberSequence::new(DocumentKind::Expense, 2026);
        let mut rct = DocumentNumberSequence::new(DocumentKind::Receipt, 2026);
        assert_eq!(ack.next_number(), "ACK-2026-001");
        assert_eq!(exp.next_number(), "EXP-2026-001");
        assert_eq!(rct.next_number(), "RCT-2026-001");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2026);
        assert_eq!(seq.peek(), "INV-2026-001");
        assert_eq!(seq.peek(), "INV-2026-001");
        assert_eq!(seq.next_number(), "INV-2026-001");
        assert_eq!(seq.peek(), "INV-2026-002");
    }

    #[test]
    fn starting_at() {
        let mut seq = DocumentNumberSequence::starting_at(DocumentKind::Receipt, 2026, 42);
        assert_eq!(seq.next_number(), "RCT-2026-042");
        assert_eq!(seq.next_number(), "RCT-2026-043");
    }

    #[test]
    fn custom_padding() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2026).with_padding(5);
        assert_eq!(seq.next_number(), "INV-2026-00001");
    }

    #[test]
    fn year_advance() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2026);
        seq.next_number(); // INV-2026-001
        seq.next_number(); // INV-2026-002
        seq.advance_year(2027).unwrap();
        assert_eq!(seq.next_number(), "INV-2027-001");
    }

    #[test]
    fn year_advance_rejects_past() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2026);
        assert!(seq.advance_year(2025).is_err());
        assert!(seq.advance_year(2026).is_err());
    }

    #[test]
    fn auto_advance_year() {
        let mut seq = DocumentNumberSequence::new(DocumentKind::Invoice, 2026);
        seq.next_number(); // INV-2026-001

        let jan_2027 = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert!(seq.auto_advance(jan_2027));
        assert_eq!(seq.next_number(), "INV-2027-001");

        // Same year doesn't advance
        let feb_2027 = NaiveDate::from_ymd_opt(2027, 2, 1).unwrap();
        assert!(!seq.auto_advance(feb_2027));
        assert_eq!(seq.next_number(), "INV-2027-002");
    }
}

//! List Statistics
//!
//! Read-only projection of the collection shown in the footer.

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub stored: usize,
    /// Rounded half up, 0 for an empty list
    pub percentage: u8,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let stored = items.iter().filter(|item| item.stored).count();
        let percentage = if total == 0 {
            0
        } else {
            // stored <= total, so this stays within 0..=100
            ((stored * 200 + total) / (total * 2)) as u8
        };
        Self { total, stored, percentage }
    }

    /// Footer sentence
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "item" } else { "itens" };
        let mut text = format!("Você tem {} {} na lista", self.total, noun);
        if self.total > 0 {
            text.push_str(&format!(" e já guardou {} ({}%)", self.stored, self.percentage));
        }
        text
    }
}

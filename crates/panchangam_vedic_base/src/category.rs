//! Report categories in their fixed output order.

use serde::{Deserialize, Serialize};

use crate::language::{Bilingual, Named};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Year,
    Aayanam,
    Rutu,
    Month,
    Paksham,
    Tithi,
    Varam,
}

/// Output order of a report.
pub const ALL_CATEGORIES: [Category; 7] = [
    Category::Year,
    Category::Aayanam,
    Category::Rutu,
    Category::Month,
    Category::Paksham,
    Category::Tithi,
    Category::Varam,
];

const CATEGORY_LABELS: [Bilingual; 7] = [
    Bilingual::new("సంవత్సరం", "Year"),
    Bilingual::new("అయనం", "Aayanam"),
    Bilingual::new("ఋతువు", "Rutu"),
    Bilingual::new("మాసం", "Month"),
    Bilingual::new("పక్షం", "Paksham"),
    Bilingual::new("తిథి", "Tithi"),
    Bilingual::new("వారం", "Varam"),
];

impl Category {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Named for Category {
    fn names(&self) -> Bilingual {
        CATEGORY_LABELS[self.index() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::DisplayMode;

    #[test]
    fn order_is_fixed() {
        let labels: Vec<_> = ALL_CATEGORIES
            .iter()
            .map(|c| c.render(DisplayMode::Romanized))
            .collect();
        assert_eq!(
            labels,
            ["Year", "Aayanam", "Rutu", "Month", "Paksham", "Tithi", "Varam"]
        );
    }

    #[test]
    fn bilingual_label() {
        assert_eq!(Category::Year.render(DisplayMode::Bilingual), "సంవత్సరం (Year)");
        assert_eq!(Category::Varam.render(DisplayMode::Native), "వారం");
    }
}

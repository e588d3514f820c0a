//! Category taxonomy
//!
//! Fixed two-level scheme: top-level category → ordered subcategory tags.
//! The standard taxonomy is `'static` data, readable from any thread
//! without synchronization.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const HATE: &str = "hate";
pub const VIOLENCE: &str = "violence";
pub const SEXUAL: &str = "sexual";
pub const OTHER: &str = "other";

type Entry = (&'static str, &'static [&'static str]);

const STANDARD_ENTRIES: &[Entry] = &[
    (
        HATE,
        &[
            "racist",
            "xenophobic",
            "antisemitic",
            "islamophobic",
            "homophobic",
            "transphobic",
            "misogynistic",
            "ableist",
            "religious_hate",
            "ethnic_hate",
            "political_hate",
        ],
    ),
    (
        VIOLENCE,
        &[
            "physical_threat",
            "verbal_threat",
            "intimidation",
            "harassment",
            "bullying",
            "cyberbullying",
            "stalking",
            "terrorism",
            "incitement_to_violence",
        ],
    ),
    (
        SEXUAL,
        &[
            "sexual_harassment",
            "sexual_assault",
            "sexual_exploitation",
            "child_sexual_abuse",
            "revenge_porn",
            "sexual_blackmail",
            "sexual_cyberbullying",
            "sexual_grooming",
        ],
    ),
    (
        OTHER,
        &[
            "profanity",
            "insult",
            "defamation",
            "slander",
            "libel",
            "hate_symbols",
            "conspiracy_theories",
            "fake_news",
            "disinformation",
            "misinformation",
        ],
    ),
];

static STANDARD: CategoryTaxonomy = CategoryTaxonomy::from_static(STANDARD_ENTRIES);

/// Immutable category → subcategory mapping with a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    entries: &'static [Entry],
}

impl CategoryTaxonomy {
    /// Wrap a static table. Tags must be unique within each category.
    pub const fn from_static(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    /// The hate/violence/sexual/other taxonomy
    pub fn standard() -> &'static CategoryTaxonomy {
        &STANDARD
    }

    /// Ordered tags for `category`; empty for anything not in the taxonomy.
    pub fn subcategories_for(&self, category: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, tags)| *tags)
            .unwrap_or(&[])
    }

    /// `(category, tags)` pairs in taxonomy order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for CategoryTaxonomy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, tags) in self.entries {
            map.serialize_entry(name, tags)?;
        }
        map.end()
    }
}

/// Tags of `category` in the standard taxonomy
pub fn subcategories_for(category: &str) -> &'static [&'static str] {
    STANDARD.subcategories_for(category)
}

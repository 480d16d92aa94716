use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Display language for locale-aware demos
///
/// The sales-trend demo originally shipped as near-identical English and
/// Japanese components; here a single view resolves every user-visible
/// string through this table instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Ja,
}

/// Translatable string keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleText {
    MonthlySalesTitle,
    MonthlySalesSeries,
    GalleryTitle,
    GallerySubtitle,
    LanguageMenu,
}

impl LocaleText {
    pub const ALL: [LocaleText; 5] = [
        LocaleText::MonthlySalesTitle,
        LocaleText::MonthlySalesSeries,
        LocaleText::GalleryTitle,
        LocaleText::GallerySubtitle,
        LocaleText::LanguageMenu,
    ];
}

static STRINGS: Lazy<AHashMap<LocaleText, [&'static str; 2]>> = Lazy::new(|| {
    let mut table = AHashMap::new();
    table.insert(
        LocaleText::MonthlySalesTitle,
        ["Monthly Sales Trend", "月次売上推移"],
    );
    table.insert(LocaleText::MonthlySalesSeries, ["Revenue", "売上高"]);
    table.insert(
        LocaleText::GalleryTitle,
        ["Chart Sample Gallery", "チャートサンプルギャラリー"],
    );
    table.insert(
        LocaleText::GallerySubtitle,
        [
            "Click a chart type to open the example",
            "チャートを選択してサンプルを表示",
        ],
    );
    table.insert(LocaleText::LanguageMenu, ["Language", "言語"]);
    table
});

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// Name shown in the language picker
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }

    /// Resolve a translated string
    pub fn text(self, key: LocaleText) -> &'static str {
        STRINGS.get(&key).map(|pair| pair[self.index()]).unwrap_or("")
    }

    /// Month labels for the monthly sales demo
    pub fn month_labels(self) -> &'static [&'static str; 7] {
        match self {
            Locale::En => &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"],
            Locale::Ja => &["1月", "2月", "3月", "4月", "5月", "6月", "7月"],
        }
    }

    fn index(self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ja => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_both_locales() {
        for key in LocaleText::ALL {
            for locale in Locale::ALL {
                assert!(
                    !locale.text(key).is_empty(),
                    "missing translation for {:?} in {:?}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_locales_differ() {
        assert_ne!(
            Locale::En.text(LocaleText::MonthlySalesTitle),
            Locale::Ja.text(LocaleText::MonthlySalesTitle)
        );
        assert_ne!(Locale::En.month_labels(), Locale::Ja.month_labels());
    }

    #[test]
    fn test_month_labels_cover_seven_months() {
        assert_eq!(Locale::En.month_labels().len(), 7);
        assert_eq!(Locale::Ja.month_labels()[0], "1月");
        assert_eq!(Locale::En.month_labels()[6], "Jul");
    }
}

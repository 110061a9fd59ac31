use itertools::Itertools;
use serde::Serialize;
use wallfit::entities::{Catalog, Layout, ModuleCategory};
use wallfit::fitting::{FitQuality, check_fit, rank_candidates};
use wallfit::util::FitConfig;

/// State of a single module in the palette, as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleCard {
    pub module_id: usize,
    pub name: String,
    pub category: ModuleCategory,
    pub width: u32,
    pub price: u64,
    pub quality: FitQuality,
    /// Highlighted as an optimal next choice
    pub recommended: bool,
    /// Greyed out, the module does not fit in the remaining width
    pub disabled: bool,
}

/// The module palette, optionally filtered on a single category.
#[derive(Debug, Clone, Default)]
pub struct ModulePalette {
    pub filter: Option<ModuleCategory>,
}

impl ModulePalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: Option<ModuleCategory>) {
        self.filter = filter;
    }

    /// Categories present in the catalog, for the filter tabs
    pub fn categories(catalog: &Catalog) -> Vec<ModuleCategory> {
        catalog
            .modules
            .iter()
            .map(|m| m.category)
            .unique()
            .sorted()
            .collect_vec()
    }

    /// One card per visible module, in catalog order.
    pub fn cards(&self, catalog: &Catalog, layout: &Layout, config: &FitConfig) -> Vec<ModuleCard> {
        let remaining = layout.remaining_width();
        catalog
            .modules
            .iter()
            .filter(|m| self.filter.is_none_or(|c| m.category == c))
            .map(|m| {
                let quality = check_fit(remaining, m.width, config).quality;
                ModuleCard {
                    module_id: m.id,
                    name: m.name.clone(),
                    category: m.category,
                    width: m.width,
                    price: m.price,
                    quality,
                    recommended: quality.is_recommended(),
                    disabled: !quality.fits(),
                }
            })
            .collect_vec()
    }

    /// Visible modules that fit, best fit first.
    pub fn suggested(&self, catalog: &Catalog, layout: &Layout, config: &FitConfig) -> Vec<usize> {
        let visible = catalog
            .modules
            .iter()
            .filter(|m| self.filter.is_none_or(|c| m.category == c));
        rank_candidates(layout, visible, config)
            .into_iter()
            .take_while(|s| s.check.fits())
            .map(|s| s.module_id)
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallfit::entities::{Module, Wall};

    fn catalog() -> Catalog {
        Catalog::new(
            "bedroom".into(),
            Wall::new(0, "bed wall", 3000, 2500),
            vec![
                Module::new(0, "wardrobe", ModuleCategory::Storage, 1000, 2400, 120_000),
                Module::new(1, "headboard", ModuleCategory::Bed, 1200, 1100, 70_000),
                Module::new(2, "nightstand", ModuleCategory::Storage, 450, 600, 25_000),
            ],
            vec![],
        )
    }

    #[test]
    fn cards_reflect_remaining_width() {
        let catalog = catalog();
        let mut layout = Layout::new(catalog.wall.clone());
        layout.push_module(catalog.module(1)).unwrap();
        layout.push_module(catalog.module(1)).unwrap();
        // 600 mm remaining
        let cards = ModulePalette::new().cards(&catalog, &layout, &FitConfig::default());
        let states = cards
            .iter()
            .map(|c| (c.module_id, c.disabled, c.recommended))
            .collect_vec();
        assert_eq!(states, vec![(0, true, false), (1, true, false), (2, false, false)]);

        let mut palette = ModulePalette::new();
        palette.set_filter(Some(ModuleCategory::Storage));
        assert_eq!(palette.cards(&catalog, &layout, &FitConfig::default()).len(), 2);
        assert_eq!(palette.suggested(&catalog, &layout, &FitConfig::default()), vec![2]);
    }

    #[test]
    fn recommends_near_fits() {
        let catalog = catalog();
        let mut layout = Layout::new(catalog.wall.clone());
        layout.push_module(catalog.module(0)).unwrap();
        layout.push_module(catalog.module(0)).unwrap();
        layout.push_module(catalog.module(2)).unwrap();
        // 550 mm remaining, nightstand leaves 100
        let cards = ModulePalette::new().cards(&catalog, &layout, &FitConfig::default());
        assert!(cards[2].recommended);
        assert_eq!(cards[2].quality, FitQuality::Optimal);
        assert_eq!(
            ModulePalette::categories(&catalog),
            vec![ModuleCategory::Storage, ModuleCategory::Bed]
        );
    }
}

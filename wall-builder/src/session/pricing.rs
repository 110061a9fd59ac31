use serde::{Deserialize, Serialize};
use thousands::Separable;
use wallfit::entities::{Catalog, Layout};

/// Pricing parameters of a quote estimate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Installation fee per placed module, in cents
    pub installation_per_module: u64,
    /// VAT rate in basis points (2100 = 21%)
    pub vat_basis_points: u32,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            installation_per_module: 7_500,
            vat_basis_points: 2100,
            currency: "EUR".into(),
        }
    }
}

/// Price of a single placed module. All amounts in cents.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub module_id: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    pub base_price: u64,
    pub finish_surcharge: u64,
}

impl QuoteLine {
    pub fn total(&self) -> u64 {
        self.base_price + self.finish_surcharge
    }
}

/// Price estimate of a layout. All amounts in cents.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QuoteEstimate {
    pub lines: Vec<QuoteLine>,
    pub installation: u64,
    pub subtotal: u64,
    pub vat: u64,
    pub total: u64,
    pub currency: String,
}

impl QuoteEstimate {
    pub fn formatted_total(&self) -> String {
        format_cents(self.total, &self.currency)
    }
}

/// Estimates the price of a layout: base price and finish surcharge per module, installation and VAT.
pub fn estimate(layout: &Layout, catalog: &Catalog, pricing: &PricingConfig) -> QuoteEstimate {
    let lines = layout
        .placed_modules()
        .map(|(_, pm)| {
            let module = catalog.module(pm.module_id);
            let finish = pm.finish_id.map(|f| catalog.finish(f));
            QuoteLine {
                module_id: module.id,
                name: module.name.clone(),
                finish: finish.map(|f| f.name.clone()),
                base_price: module.price,
                finish_surcharge: finish.map_or(0, |f| f.surcharge(pm.width, pm.height)),
            }
        })
        .collect::<Vec<_>>();

    let installation = pricing.installation_per_module * lines.len() as u64;
    let subtotal = lines.iter().map(QuoteLine::total).sum::<u64>() + installation;
    let vat = (subtotal * pricing.vat_basis_points as u64 + 5_000) / 10_000;

    QuoteEstimate {
        lines,
        installation,
        subtotal,
        vat,
        total: subtotal + vat,
        currency: pricing.currency.clone(),
    }
}

/// Formats an amount in cents, e.g. `EUR 1,234.50`
pub fn format_cents(cents: u64, currency: &str) -> String {
    format!(
        "{currency} {}.{:02}",
        (cents / 100).separate_with_commas(),
        cents % 100
    )
}

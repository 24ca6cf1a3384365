//! Aggregated per-adset figures.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::fields::SaleCategory;

/// Sales booked under one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub sales: usize,
    pub revenue: f64,
}

impl CategoryAggregate {
    /// Books one sale. Callers only pass strictly positive amounts.
    ///
    /// Revenue is a plain `f64` sum, so enough huge amounts overflow to
    /// infinity instead of failing.
    pub fn record_sale(&mut self, amount: f64) {
        self.sales += 1;
        self.revenue += amount;
    }
}

/// One [`CategoryAggregate`] per [`SaleCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryBreakdown([CategoryAggregate; 3]);

impl CategoryBreakdown {
    pub fn total_sales(&self) -> usize {
        self.0.iter().map(|aggregate| aggregate.sales).sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.0.iter().map(|aggregate| aggregate.revenue).sum()
    }
}

impl Index<SaleCategory> for CategoryBreakdown {
    type Output = CategoryAggregate;

    fn index(&self, category: SaleCategory) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl IndexMut<SaleCategory> for CategoryBreakdown {
    fn index_mut(&mut self, category: SaleCategory) -> &mut Self::Output {
        &mut self.0[category.index()]
    }
}

/// Final figures for one adset.
///
/// Serialized field names match the dashboard's JSON contract
/// (`totalLeads`, `salesPlanejamento`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsetSummary {
    pub total_leads: usize,
    pub total_sales: usize,
    pub total_revenue: f64,
    pub avg_ticket: f64,
    pub conversion_rate: f64,
    pub sales_planejamento: usize,
    pub revenue_planejamento: f64,
    pub sales_seguros: usize,
    pub revenue_seguros: f64,
    pub sales_credito: usize,
    pub revenue_credito: f64,
}

impl AdsetSummary {
    /// Derives totals, average ticket, and conversion rate.
    ///
    /// Average ticket is 0 without sales; conversion rate is 0 without leads.
    pub fn derive(total_leads: usize, breakdown: &CategoryBreakdown) -> Self {
        let total_sales = breakdown.total_sales();
        let total_revenue = breakdown.total_revenue();
        let avg_ticket = if total_sales > 0 {
            total_revenue / total_sales as f64
        } else {
            0.0
        };
        let conversion_rate = if total_leads > 0 {
            total_sales as f64 / total_leads as f64 * 100.0
        } else {
            0.0
        };
        let planejamento = breakdown[SaleCategory::Planejamento];
        let seguros = breakdown[SaleCategory::Seguros];
        let credito = breakdown[SaleCategory::Credito];
        Self {
            total_leads,
            total_sales,
            total_revenue,
            avg_ticket,
            conversion_rate,
            sales_planejamento: planejamento.sales,
            revenue_planejamento: planejamento.revenue,
            sales_seguros: seguros.sales,
            revenue_seguros: seguros.revenue,
            sales_credito: credito.sales,
            revenue_credito: credito.revenue,
        }
    }

    pub fn category(&self, category: SaleCategory) -> CategoryAggregate {
        match category {
            SaleCategory::Planejamento => CategoryAggregate {
                sales: self.sales_planejamento,
                revenue: self.revenue_planejamento,
            },
            SaleCategory::Seguros => CategoryAggregate {
                sales: self.sales_seguros,
                revenue: self.revenue_seguros,
            },
            SaleCategory::Credito => CategoryAggregate {
                sales: self.sales_credito,
                revenue: self.revenue_credito,
            },
        }
    }
}

/// Summaries keyed by adset name, in lexicographic key order.
pub type AdsetReport = BTreeMap<String, AdsetSummary>;

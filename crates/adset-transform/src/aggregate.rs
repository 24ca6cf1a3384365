//! Per-adset aggregation.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use adset_model::{
    AdsetReport, AdsetSummary, CategoryBreakdown, LogicalField, Record, SaleCategory,
};

use crate::normalization::parse_amount;

/// Running totals for one adset while records are scanned.
#[derive(Debug, Default)]
struct AdsetAccumulator {
    leads: usize,
    breakdown: CategoryBreakdown,
}

impl AdsetAccumulator {
    fn add(&mut self, record: &Record) {
        self.leads += 1;
        for category in SaleCategory::ALL {
            let amount = parse_amount(LogicalField::Sale(category).resolve(record));
            if amount > 0.0 {
                self.breakdown[category].record_sale(amount);
            }
        }
    }

    fn finish(&self) -> AdsetSummary {
        AdsetSummary::derive(self.leads, &self.breakdown)
    }
}

/// Groups records by adset name and computes one summary per adset.
///
/// Records whose adset name resolves to an empty string are skipped. A sale
/// cell counts only when its amount is strictly positive. The result is keyed
/// in lexicographic order; no records gives an empty report.
pub fn aggregate(records: &[Record]) -> AdsetReport {
    let mut groups: BTreeMap<&str, AdsetAccumulator> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let adset = LogicalField::AdsetName.resolve(record);
        if adset.is_empty() {
            skipped += 1;
            continue;
        }
        trace!(adset, "grouping record");
        groups.entry(adset).or_default().add(record);
    }

    debug!(
        records = records.len(),
        adsets = groups.len(),
        skipped,
        "aggregated records"
    );

    groups
        .into_iter()
        .map(|(adset, accumulator)| (adset.to_string(), accumulator.finish()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    #[test]
    fn single_sale_out_of_two_leads() {
        let records = vec![
            record(&[("adset_name", "X"), ("Venda_planejamento", "R$100,00")]),
            record(&[("adset_name", "X"), ("Venda_planejamento", "")]),
        ];
        let report = aggregate(&records);
        let x = &report["X"];
        assert_eq!(x.total_leads, 2);
        assert_eq!(x.total_sales, 1);
        assert_eq!(x.total_revenue, 100.0);
        assert_eq!(x.avg_ticket, 100.0);
        assert_eq!(x.conversion_rate, 50.0);
        assert_eq!(x.sales_planejamento, 1);
        assert_eq!(x.sales_seguros, 0);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn records_without_adset_are_skipped() {
        let records = vec![
            record(&[("adset_name", ""), ("venda", "10")]),
            record(&[("venda", "10")]),
        ];
        assert!(aggregate(&records).is_empty());
    }

    #[test]
    fn non_positive_amounts_are_not_sales() {
        let records = vec![
            record(&[("adset", "A"), ("venda_credito", "-50,00")]),
            record(&[("adset", "A"), ("venda_credito", "0,00")]),
            record(&[("adset", "A"), ("venda_credito", "abc")]),
        ];
        let a = &aggregate(&records)["A"];
        assert_eq!(a.total_leads, 3);
        assert_eq!(a.sales_credito, 0);
        assert_eq!(a.revenue_credito, 0.0);
        assert_eq!(a.avg_ticket, 0.0);
        assert_eq!(a.conversion_rate, 0.0);
    }

    #[test]
    fn one_lead_can_book_several_categories() {
        let records = vec![record(&[
            ("conjunto", "C"),
            ("venda", "R$ 1.000,00"),
            ("venda_seguros", "R$ 200,00"),
            ("venda_credito", "R$ 300,00"),
        ])];
        let c = &aggregate(&records)["C"];
        assert_eq!(c.total_sales, 3);
        assert_eq!(c.total_revenue, 1500.0);
        assert_eq!(c.avg_ticket, 500.0);
        assert_eq!(c.conversion_rate, 300.0);
    }

    #[test]
    fn huge_amounts_saturate_revenue() {
        let records = vec![
            record(&[("adset", "Big"), ("venda", "1e308")]),
            record(&[("adset", "Big"), ("venda", "1e308")]),
        ];
        let big = &aggregate(&records)["Big"];
        assert_eq!(big.sales_planejamento, 2);
        assert!(big.revenue_planejamento.is_infinite());
        assert!(big.avg_ticket.is_infinite());
        assert_eq!(big.conversion_rate, 100.0);
    }

    #[test]
    fn keys_are_sorted() {
        let records = vec![
            record(&[("adset_name", "beta")]),
            record(&[("adset_name", "Alpha")]),
            record(&[("adset_name", "alpha")]),
        ];
        let keys: Vec<_> = aggregate(&records).into_keys().collect();
        assert_eq!(keys, ["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn alias_precedence_decides_the_group() {
        let records = vec![record(&[("adset_name", "first"), ("adset", "second")])];
        let report = aggregate(&records);
        assert!(report.contains_key("first"));
        assert!(!report.contains_key("second"));
    }
}

use crate::model::FlightRecord;

/// Aggregate figures over a ranked result list.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub priced: usize,
    pub unpriced: usize,
    pub cheapest: Option<f64>,
    pub avg_price: Option<f64>,
}

/// Cheapest first, unpriced offers last, then truncated to `top`.
/// Equal prices keep the provider's order.
pub fn rank_by_price(records: Vec<FlightRecord>, top: Option<usize>) -> Vec<FlightRecord> {
    let (mut priced, unpriced): (Vec<_>, Vec<_>) =
        records.into_iter().partition(FlightRecord::is_priced);

    priced.sort_by(|a, b| a.price.total_cmp(&b.price));
    priced.extend(unpriced);

    if let Some(top) = top {
        priced.truncate(top);
    }
    priced
}

pub fn summarize(records: &[FlightRecord]) -> PriceSummary {
    let prices: Vec<f64> = records
        .iter()
        .filter(|r| r.is_priced())
        .map(|r| r.price)
        .collect();

    let count = prices.len();
    PriceSummary {
        priced: count,
        unpriced: records.len() - count,
        cheapest: prices.iter().copied().reduce(f64::min),
        avg_price: (count > 0).then(|| prices.iter().sum::<f64>() / count as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchRequest;
    use crate::parser::flight_parser::extract;
    use crate::parser::raw_offer::RawFlightOffer;

    fn record(price: f64, airline: &str) -> FlightRecord {
        let ctx = SearchRequest::new("LIM", "CUZ", "20260220", None, 1, 0, 0).unwrap();
        let mut record = extract(&RawFlightOffer::default(), &ctx);
        record.price = price;
        record.airline = airline.to_string();
        record
    }

    fn prices(records: &[FlightRecord]) -> Vec<f64> {
        records.iter().map(|r| r.price).collect()
    }

    #[test]
    fn unpriced_never_precede_priced() {
        let ranked = rank_by_price(
            vec![
                record(0.0, "a"),
                record(320.0, "b"),
                record(0.0, "c"),
                record(95.0, "d"),
                record(150.0, "e"),
            ],
            None,
        );
        assert_eq!(prices(&ranked), vec![95.0, 150.0, 320.0, 0.0, 0.0]);
        let airlines: Vec<&str> = ranked.iter().map(|r| r.airline.as_str()).collect();
        assert_eq!(airlines, vec!["d", "e", "b", "a", "c"]);
    }

    #[test]
    fn ties_keep_provider_order() {
        let ranked = rank_by_price(
            vec![record(100.0, "first"), record(50.0, "x"), record(100.0, "second")],
            None,
        );
        let airlines: Vec<&str> = ranked.iter().map(|r| r.airline.as_str()).collect();
        assert_eq!(airlines, vec!["x", "first", "second"]);
    }

    #[test]
    fn truncates_to_top() {
        let records = vec![record(3.0, "a"), record(1.0, "b"), record(2.0, "c")];
        assert_eq!(prices(&rank_by_price(records.clone(), Some(2))), vec![1.0, 2.0]);
        assert_eq!(rank_by_price(records.clone(), Some(10)).len(), 3);
        assert!(rank_by_price(records, Some(0)).is_empty());
    }

    #[test]
    fn summarizes_priced_offers_only() {
        let summary = summarize(&[record(100.0, "a"), record(0.0, "b"), record(50.0, "c")]);
        assert_eq!(summary.priced, 2);
        assert_eq!(summary.unpriced, 1);
        assert_eq!(summary.cheapest, Some(50.0));
        assert_eq!(summary.avg_price, Some(75.0));

        let empty = summarize(&[record(0.0, "a")]);
        assert_eq!(empty.cheapest, None);
        assert_eq!(empty.avg_price, None);
    }
}

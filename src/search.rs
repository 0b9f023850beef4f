// Search orchestration: payload → provider call → extraction → ranking
use crate::analyzer::{rank_by_price, summarize};
use crate::model::{FlightRecord, SearchRequest};
use crate::parser::{CostamarParser, Parser};
use crate::scraper::payload::{build_payload, pick_terminal};
use crate::scraper::FlightProvider;
use std::sync::Arc;
use tracing::{info, warn};

pub struct FlightSearch {
    provider: Arc<dyn FlightProvider>,
    parser: CostamarParser,
    terminal_ids: Vec<String>,
}

impl FlightSearch {
    pub fn new(provider: Arc<dyn FlightProvider>, terminal_ids: Vec<String>) -> Self {
        Self {
            provider,
            parser: CostamarParser::new(),
            terminal_ids,
        }
    }

    /// Runs one search and returns its offers cheapest first, unpriced
    /// last, truncated to `top`. Provider failures yield an empty list.
    pub async fn search(&self, req: &SearchRequest, top: Option<usize>) -> Vec<FlightRecord> {
        info!(
            "Searching {} → {} on {} ({} passengers)",
            req.origin,
            req.destination,
            req.depart_compact(),
            req.passengers_total()
        );

        let Some(terminal_id) = pick_terminal(&self.terminal_ids) else {
            warn!("No terminal ids configured, skipping search");
            return Vec::new();
        };
        let payload = build_payload(req, terminal_id);

        let raw_offers = match self.provider.search(&payload).await {
            Ok(offers) => offers,
            Err(e) => {
                warn!("Provider error: {}", e);
                return Vec::new();
            }
        };

        if raw_offers.is_empty() {
            info!("No flights found for this route/date");
            return Vec::new();
        }
        info!("{} offers received", raw_offers.len());

        let records = self.parser.parse(&raw_offers, req);
        let ranked = rank_by_price(records, top);

        let summary = summarize(&ranked);
        info!(
            "Ranked {} priced and {} unpriced offers, cheapest: {:?}, avg: {:?}",
            summary.priced,
            summary.unpriced,
            summary.cheapest,
            summary.avg_price.map(|avg| format!("{:.2}", avg))
        );
        ranked
    }
}

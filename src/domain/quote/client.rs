//! Quotes sub-client — last traded prices for a set of instruments.

use crate::client::BrokerClient;
use crate::domain::quote::wire::QuotesResponse;
use crate::domain::quote::{symbol_from_instrument, MarketData};
use crate::error::SdkError;

pub struct Quotes<'a> {
    pub(crate) client: &'a BrokerClient,
}

impl<'a> Quotes<'a> {
    /// Quotes for `instruments` (e.g. `["NSE:INFY", "NSE:TCS"]`).
    ///
    /// One entry per quote the broker resolved. Requested instruments come
    /// first in request order, duplicates collapsed; entries keyed some other
    /// way follow. Empty on any failure or empty input.
    pub async fn get<S: AsRef<str>>(&self, instruments: &[S]) -> Vec<MarketData> {
        match self.try_get(instruments).await {
            Ok(quotes) => quotes,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch quotes");
                Vec::new()
            }
        }
    }

    pub async fn try_get<S: AsRef<str>>(
        &self,
        instruments: &[S],
    ) -> Result<Vec<MarketData>, SdkError> {
        let mut requested: Vec<&str> = Vec::with_capacity(instruments.len());
        for instrument in instruments.iter().map(|s| s.as_ref().trim()) {
            if !instrument.is_empty() && !requested.contains(&instrument) {
                requested.push(instrument);
            }
        }
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let joined = requested.join(",");
        let mut resp: QuotesResponse = self
            .client
            .http
            .get("/quote/ltp", &[("i", joined.as_str())])
            .await?;

        // Requested instruments first, matched by full key or bare symbol.
        let mut quotes: Vec<MarketData> = requested
            .into_iter()
            .filter_map(|instrument| {
                resp.remove(instrument)
                    .or_else(|| resp.remove(symbol_from_instrument(instrument)))
                    .map(|quote| MarketData::from((instrument, quote)))
            })
            .collect();

        // Anything else the broker resolved, sorted by key.
        let mut rest: Vec<_> = resp.into_iter().collect();
        rest.sort_by(|a, b| a.0.cmp(&b.0));
        quotes.extend(
            rest.into_iter()
                .map(|(key, quote)| MarketData::from((key.as_str(), quote))),
        );
        Ok(quotes)
    }
}

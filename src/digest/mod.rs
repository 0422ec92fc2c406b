//! Digest assembly: three independent lookups merged into one record.

use serde::Serialize;
use serde_json::Value;

use crate::upstream::UpstreamClient;

/// Combined result of the weather, news and fact lookups for one city.
///
/// A `None` field means that upstream call failed; it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Digest {
    pub weather: Option<Value>,
    pub news: Option<Value>,
    pub fact: Option<String>,
}

impl Digest {
    /// Run all three lookups concurrently and wait for every one to settle.
    pub async fn gather(client: &UpstreamClient, city: &str) -> Self {
        let (weather, news, fact) = tokio::join!(
            client.weather(city),
            client.news(city),
            client.fact_for_today(),
        );

        Self {
            weather,
            news,
            fact,
        }
    }
}

use crate::client::CompletionClient;
use crate::json;
use crate::prompt;
use artscout_model::{AnalysisOutcome, InvestmentAnalysis};
use artscout_store::ArtStore;
use serde_json::Value;

/// Produce an investment recommendation for an artist already in the store.
///
/// Never fails: a missing artist, a store error, an API error or an
/// undecodable reply all come back as [`AnalysisOutcome::Failed`].
pub async fn analyze_artist(
    client: &dyn CompletionClient,
    store: &ArtStore,
    artist_name: &str,
    artwork_price: Option<f64>,
) -> AnalysisOutcome {
    let artist = match store.get_artist(artist_name) {
        Ok(Some(artist)) => artist,
        Ok(None) => {
            tracing::warn!(artist = %artist_name, "Artist not in database");
            return AnalysisOutcome::failed(format!(
                "Artist '{artist_name}' not found in database. Please scrape their data first."
            ));
        }
        Err(e) => {
            tracing::error!(artist = %artist_name, error = ?e, "Database lookup failed");
            return AnalysisOutcome::failed(format!("Analysis failed: {e:#}"));
        }
    };

    tracing::info!(
        artist = %artist_name,
        price = ?artwork_price,
        model = client.model_id(),
        "Analyzing investment potential"
    );
    let prompt = prompt::analysis_prompt(&artist, artwork_price);

    let reply = match client.complete(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(artist = %artist_name, error = %e, "Analysis request failed");
            return AnalysisOutcome::failed(format!("Analysis failed: {e}"));
        }
    };

    match json::parse_reply::<Value>(&reply) {
        Ok(decoded) => {
            let mut analysis = InvestmentAnalysis::from_reply(&decoded);
            analysis.artist_name = artist_name.to_string();
            analysis.analyzed_date = artist.data_collected_date;
            tracing::info!(
                artist = %artist_name,
                recommendation = %analysis.recommendation,
                confidence = %analysis.confidence,
                "Analysis complete"
            );
            AnalysisOutcome::Completed(analysis)
        }
        Err(e) => {
            tracing::warn!(artist = %artist_name, error = %e, "Could not decode analysis");
            AnalysisOutcome::failed(format!("Analysis failed: {e}"))
        }
    }
}

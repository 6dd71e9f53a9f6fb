use artscout_acquire::normalize::truncate_chars;
use artscout_model::StoredArtist;

/// Website text beyond this many characters is dropped before prompting,
/// to stay inside the model's context window.
pub const EXTRACTION_TEXT_LIMIT: usize = 8000;

/// Prompt asking the model to turn website text into an artist profile.
pub fn extraction_prompt(artist_name: &str, website_text: &str) -> String {
    let text = truncate_chars(website_text, EXTRACTION_TEXT_LIMIT);
    let quoted_name = serde_json::Value::from(artist_name).to_string();

    format!(
        r#"Analyze this artist's website content and extract key information.

Artist name: {artist_name}

Website content:
{text}

Extract and return ONLY a JSON object with these fields (use null if not found):
{{
    "name": {quoted_name},
    "education": "where they studied (degrees, institutions)",
    "art_style": "their artistic style and medium",
    "gallery_representation": "galleries that represent them",
    "exhibition_history": "notable exhibitions or shows",
    "website": "website URL",
    "career_stage": "emerging/mid-career/established",
    "notable_achievements": "awards, residencies, publications"
}}

Return ONLY valid JSON, no other text.
"#
    )
}

/// Prompt asking the model for an investment recommendation on a stored
/// artist, optionally for a specific artwork price.
pub fn analysis_prompt(artist: &StoredArtist, artwork_price: Option<f64>) -> String {
    let a = &artist.artist;
    let known = |field: &Option<String>, fallback: &str| -> String {
        field
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    let exhibitions = a
        .exhibition_history
        .as_ref()
        .map(|h| h.display())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "Limited information".to_string());
    // A zero or negative price is no price.
    let price_line = match artwork_price.filter(|price| *price > 0.0) {
        Some(price) => format!("Current artwork price: ${price:.2}"),
        None => "No specific artwork price provided".to_string(),
    };

    format!(
        r#"You are an art investment analyst. Analyze this artist's data and provide an investment recommendation.

Artist: {name}
Education: {education}
Art Style: {style}
Gallery Representation: {galleries}
Exhibition History: {exhibitions}
Career Stage: Based on data, assess if emerging/mid-career/established

{price_line}

Provide analysis in this JSON format:
{{
    "recommendation": "BUY" or "PASS" or "RESEARCH MORE",
    "confidence": "HIGH" or "MEDIUM" or "LOW",
    "reasoning": "2-3 sentence explanation",
    "positive_factors": ["factor 1", "factor 2", ...],
    "risk_factors": ["risk 1", "risk 2", ...],
    "price_assessment": "fair/undervalued/overvalued/unknown" (if price provided),
    "investment_horizon": "short-term/medium-term/long-term",
    "comparable_artists": ["similar artist 1", "similar artist 2"]
}}

Consider:
- Education quality (prestigious schools = positive)
- Gallery representation (established galleries = positive)
- Exhibition history (museums/established venues = positive)
- Career trajectory (consistent growth = positive)
- Market saturation (too commercial = risk)
- For emerging artists, focus on potential; for established, focus on stability

Return ONLY valid JSON.
"#,
        name = a.name,
        education = known(&a.education, "Unknown"),
        style = known(&a.art_style, "Unknown"),
        galleries = known(&a.gallery_representation, "None listed"),
    )
}

use serde::Serialize;
use serde_json::Value;

const RULE_WIDTH: usize = 60;

/// An investment recommendation for one artist.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct InvestmentAnalysis {
    pub artist_name: String,
    /// Collection date of the artist record the analysis was based on.
    pub analyzed_date: String,
    /// "BUY", "PASS" or "RESEARCH MORE".
    pub recommendation: String,
    /// "HIGH", "MEDIUM" or "LOW".
    pub confidence: String,
    pub reasoning: String,
    pub positive_factors: Vec<String>,
    pub risk_factors: Vec<String>,
    /// Only meaningful when a price was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_assessment: Option<String>,
    pub investment_horizon: String,
    pub comparable_artists: Vec<String>,
}

/// Result of an analysis run. Failures are values, not errors: they
/// serialize as `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Completed(InvestmentAnalysis),
    Failed { error: String },
}

/// A scalar as text: strings as-is, numbers and booleans as compact JSON.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_of(reply: &Value, key: &str) -> Option<String> {
    reply.get(key).and_then(scalar_text)
}

fn list_of(reply: &Value, key: &str) -> Vec<String> {
    match reply.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| scalar_text(item).unwrap_or_else(|| item.to_string()))
            .collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    }
}

impl AnalysisOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed { error: error.into() }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Completed(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    /// Plain-text report for the console.
    pub fn report(&self) -> String {
        match self {
            Self::Completed(analysis) => analysis.report(),
            Self::Failed { error } => format!("ERROR: {error}"),
        }
    }
}

impl InvestmentAnalysis {
    /// Build an analysis from a decoded model reply.
    ///
    /// The reply is not schema-checked. A non-string scalar becomes its
    /// compact JSON text, a scalar in a list field becomes a one-item list,
    /// and anything else (missing keys, `null`, objects) takes the default.
    /// Nested items inside a list are kept as compact JSON; `null` items
    /// are dropped.
    /// `artist_name` and `analyzed_date` are left for the caller to set.
    pub fn from_reply(reply: &Value) -> Self {
        Self {
            recommendation: text_of(reply, "recommendation").unwrap_or_default(),
            confidence: text_of(reply, "confidence").unwrap_or_default(),
            reasoning: text_of(reply, "reasoning").unwrap_or_default(),
            positive_factors: list_of(reply, "positive_factors"),
            risk_factors: list_of(reply, "risk_factors"),
            price_assessment: text_of(reply, "price_assessment"),
            investment_horizon: text_of(reply, "investment_horizon").unwrap_or_default(),
            comparable_artists: list_of(reply, "comparable_artists"),
            ..Self::default()
        }
    }

    pub fn report(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let list = |prefix: &str, items: &[String]| {
            items
                .iter()
                .map(|item| format!("  {prefix} {item}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "\n{rule}\n\
             INVESTMENT ANALYSIS REPORT\n\
             {rule}\n\
             \n\
             Artist: {}\n\
             Analyzed: {}\n\
             \n\
             RECOMMENDATION: {}\n\
             Confidence Level: {}\n\
             \n\
             {}\n\
             \n\
             POSITIVE FACTORS:\n\
             {}\n\
             \n\
             RISK FACTORS:\n\
             {}\n\
             \n\
             Price Assessment: {}\n\
             Investment Horizon: {}\n\
             \n\
             Comparable Artists:\n\
             {}\n\
             \n\
             {rule}\n",
            self.artist_name,
            self.analyzed_date,
            self.recommendation,
            self.confidence,
            self.reasoning,
            list("+", &self.positive_factors),
            list("-", &self.risk_factors),
            self.price_assessment.as_deref().unwrap_or("N/A"),
            self.investment_horizon,
            list("•", &self.comparable_artists),
        )
    }
}

/// Financial analysis request and response types
///
/// The analysis payload is a value object: it is generated fresh on every
/// request and never persisted. Within a payload the trend series is the
/// only internally derived data (`net_income = revenue - expenses` per
/// period); the breakdown and aggregate blocks are independent of it.
///
/// # Example
///
/// ```
/// use ledgerlens_shared::models::analysis::{Aggregation, AnalysisRequest};
///
/// let request = AnalysisRequest::trailing_year(Some(1));
/// assert_eq!(request.aggregation, Aggregation::Monthly);
/// assert!(request.start_date < request.end_date);
/// ```
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Time bucketing granularity for an analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregation {
    /// One data point per calendar month
    #[serde(rename = "monthly")]
    Monthly,

    /// One data point per quarter
    #[serde(rename = "quarterly")]
    Quarterly,

    /// One data point per year
    #[serde(rename = "annual")]
    Annual,
}

impl Aggregation {
    /// Converts the granularity to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Monthly => "monthly",
            Aggregation::Quarterly => "quarterly",
            Aggregation::Annual => "annual",
        }
    }

    /// Parses the granularity from its wire string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Aggregation::Monthly),
            "quarterly" => Some(Aggregation::Quarterly),
            "annual" => Some(Aggregation::Annual),
            _ => None,
        }
    }
}

/// Qualitative direction of the profitability trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitabilityTrend {
    /// Net income is trending up
    #[serde(rename = "improving")]
    Improving,

    /// Net income is trending down
    #[serde(rename = "declining")]
    Declining,

    /// No clear direction
    #[serde(rename = "stable")]
    Stable,
}

impl ProfitabilityTrend {
    /// Converts the trend tag to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfitabilityTrend::Improving => "improving",
            ProfitabilityTrend::Declining => "declining",
            ProfitabilityTrend::Stable => "stable",
        }
    }
}

/// Parameters for a financial analysis
///
/// All filters are optional; the date range and aggregation are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Restrict the analysis to one company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,

    /// Restrict the analysis to one region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Restrict the analysis to one industry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// First day of the analysis window
    pub start_date: NaiveDate,

    /// Last day of the analysis window
    pub end_date: NaiveDate,

    /// Time bucketing granularity
    pub aggregation: Aggregation,
}

impl AnalysisRequest {
    /// Builds the default dashboard request: the trailing 365 days at
    /// monthly granularity, optionally scoped to one company
    pub fn trailing_year(company_id: Option<i64>) -> Self {
        let today = Utc::now().date_naive();
        Self {
            company_id,
            region: None,
            industry: None,
            start_date: today - Duration::days(365),
            end_date: today,
            aggregation: Aggregation::Monthly,
        }
    }
}

/// One period of the revenue/expense trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Period label, e.g. `"2024-03"`
    pub period: String,

    /// Revenue for the period
    pub revenue: f64,

    /// Expenses for the period
    pub expenses: f64,

    /// Net income, always `revenue - expenses`
    pub net_income: f64,

    /// Net cash movement for the period
    pub cash_flow: f64,
}

/// One slice of a cost or expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureEntry {
    /// Category label, e.g. `"COGS"` or `"Rent"`
    pub category: String,

    /// Absolute amount attributed to the category
    pub amount: f64,

    /// Share of the whole, in percent
    pub percentage: f64,
}

/// Aggregate profitability figures for the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityMetrics {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_net_income: f64,
    pub gross_margin_percentage: f64,
    pub net_margin_percentage: f64,
}

/// Cash flow split by activity
///
/// Field names carry the `_cash_flow` suffix on the wire; report clients
/// read these keys verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowAnalysis {
    pub operating_cash_flow: f64,
    pub investing_cash_flow: f64,
    pub financing_cash_flow: f64,
    pub net_cash_flow: f64,
}

/// Standard financial ratios for the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub debt_to_equity: f64,
    pub roe: f64,
    pub roa: f64,
    pub gross_margin: f64,
    pub net_margin: f64,
}

/// Narrative summary block shown at the top of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of companies covered by the analysis
    pub total_companies: u32,

    /// Human-readable window, e.g. `"2024-01-01 to 2024-06-30"`
    pub analysis_period: String,

    /// Granularity the figures were bucketed at
    pub aggregation: Aggregation,

    /// Revenue summed over the window
    pub total_revenue: f64,

    /// Net income summed over the window
    pub total_net_income: f64,

    /// Mean revenue per month in the window
    pub average_monthly_revenue: f64,

    /// Qualitative trend direction
    pub profitability_trend: ProfitabilityTrend,
}

/// Complete analysis payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Ordered period series
    pub trend_data: Vec<TrendPoint>,

    /// Cost-of-goods breakdown
    pub cost_structure: Vec<StructureEntry>,

    /// Operating-expense breakdown
    pub expense_structure: Vec<StructureEntry>,

    /// Aggregate profitability figures
    pub profitability_metrics: ProfitabilityMetrics,

    /// Cash flow split by activity
    pub cash_flow_analysis: CashFlowAnalysis,

    /// Standard financial ratios
    pub ratios: Ratios,

    /// Narrative summary block
    pub summary: AnalysisSummary,
}

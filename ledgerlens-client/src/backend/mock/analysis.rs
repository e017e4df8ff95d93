/// Synthetic financial analysis generation
///
/// Produces a fresh payload on every call; nothing is persisted. The trend
/// series is randomized within fixed ranges with `net_income` derived from
/// the other draws, so the headline identity always holds. The breakdown
/// and aggregate blocks are fixed values independent of the series, which
/// keeps chart layouts stable across reloads.
///
/// Request filters (company, region, industry, date range, aggregation)
/// are accepted by the facade but have no effect here.
use ledgerlens_shared::models::analysis::{
    Aggregation, AnalysisResponse, AnalysisSummary, CashFlowAnalysis, ProfitabilityMetrics,
    ProfitabilityTrend, Ratios, StructureEntry, TrendPoint,
};
use rand::Rng;

const PERIODS: &[&str] = &["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"];

fn entry(category: &str, amount: f64, percentage: f64) -> StructureEntry {
    StructureEntry {
        category: category.to_string(),
        amount,
        percentage,
    }
}

/// Builds one synthetic analysis payload
pub fn generate() -> AnalysisResponse {
    let mut rng = rand::thread_rng();

    let trend_data: Vec<TrendPoint> = PERIODS
        .iter()
        .map(|period| {
            let revenue = rng.gen_range(50_000.0..150_000.0);
            let expenses = rng.gen_range(30_000.0..90_000.0);
            TrendPoint {
                period: period.to_string(),
                revenue,
                expenses,
                net_income: revenue - expenses,
                cash_flow: rng.gen_range(10_000.0..30_000.0),
            }
        })
        .collect();

    AnalysisResponse {
        trend_data,
        cost_structure: vec![
            entry("COGS", 40_000.0, 40.0),
            entry("Materials", 20_000.0, 20.0),
            entry("Labor", 40_000.0, 40.0),
        ],
        expense_structure: vec![
            entry("Salaries", 30_000.0, 50.0),
            entry("Rent", 15_000.0, 25.0),
            entry("Utilities", 5_000.0, 8.3),
            entry("Marketing", 10_000.0, 16.7),
        ],
        profitability_metrics: ProfitabilityMetrics {
            total_revenue: 350_000.0,
            total_expenses: 210_000.0,
            total_net_income: 140_000.0,
            gross_margin_percentage: 60.0,
            net_margin_percentage: 40.0,
        },
        cash_flow_analysis: CashFlowAnalysis {
            operating_cash_flow: 120_000.0,
            investing_cash_flow: -30_000.0,
            financing_cash_flow: 50_000.0,
            net_cash_flow: 140_000.0,
        },
        ratios: Ratios {
            current_ratio: 2.5,
            quick_ratio: 1.8,
            debt_to_equity: 0.6,
            roe: 15.5,
            roa: 12.3,
            gross_margin: 60.0,
            net_margin: 40.0,
        },
        summary: AnalysisSummary {
            total_companies: 1,
            analysis_period: "2024-01-01 to 2024-06-30".to_string(),
            aggregation: Aggregation::Monthly,
            total_revenue: 350_000.0,
            total_net_income: 140_000.0,
            average_monthly_revenue: 58_333.0,
            profitability_trend: ProfitabilityTrend::Improving,
        },
    }
}

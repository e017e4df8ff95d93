//! LedgerLens demo walkthrough binary
//!
//! Exercises the whole backend surface once: demo sign-in, duplicate
//! registration, company management, financial analysis, and statement
//! uploads. Runs against the simulated backend by default; set
//! `LEDGERLENS_USE_MOCK=false` to point it at a live server.

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ledgerlens_client::backend::mock::{DEMO_EMAIL, DEMO_PASSWORD};
use ledgerlens_client::backend;
use ledgerlens_client::config::ClientConfig;
use ledgerlens_client::error::ApiError;
use ledgerlens_shared::models::analysis::AnalysisRequest;
use ledgerlens_shared::models::company::NewCompany;
use ledgerlens_shared::models::upload::UploadFile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ledgerlens=debug".into()),
        )
        .with(fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    let backend = backend::from_config(&config)?;
    tracing::info!(backend = backend.name(), "starting walkthrough");

    // The demo account exists without prior registration.
    let token = backend.login(DEMO_EMAIL, DEMO_PASSWORD).await?;
    let user = backend.current_user(&token.access_token).await?;
    tracing::info!(email = %user.email, user_id = user.id, "signed in");

    // Registering the same address twice must fail with the tagged error.
    match backend.register(DEMO_EMAIL, "another-password", None).await {
        Err(ApiError::EmailAlreadyRegistered) => {
            tracing::info!("duplicate registration rejected");
        }
        Ok(_) => anyhow::bail!("duplicate registration was accepted"),
        Err(err) => return Err(err).context("registration failed unexpectedly"),
    }

    let company = backend
        .create_company(&NewCompany {
            name: "Harbour View Cafe".to_string(),
            region: "Wellington".to_string(),
            industry: "Hospitality".to_string(),
        })
        .await?;
    tracing::info!(company_id = company.id, name = %company.name, "company registered");

    let companies = backend.list_companies().await?;
    tracing::info!(count = companies.len(), "companies listed");

    let fetched = backend.get_company(company.id).await?;
    tracing::info!(region = %fetched.region, industry = %fetched.industry, "company fetched");

    let analysis = backend
        .get_analysis(&AnalysisRequest::trailing_year(Some(company.id)))
        .await?;
    tracing::info!(
        periods = analysis.trend_data.len(),
        total_revenue = analysis.summary.total_revenue,
        total_net_income = analysis.summary.total_net_income,
        trend = analysis.summary.profitability_trend.as_str(),
        "analysis generated"
    );

    let spreadsheet = UploadFile::new("statements-fy24.csv", &b"date,amount\n2024-01-31,1200\n"[..]);
    let receipt = backend.upload_file(&spreadsheet, company.id).await?;
    tracing::info!(
        statements = receipt.statements_created,
        message = %receipt.message,
        "spreadsheet uploaded"
    );

    let pdf = UploadFile::new("annual-report.pdf", &b"%PDF-1.4 demo"[..]);
    let receipt = backend.upload_file(&pdf, company.id).await?;
    tracing::info!(
        statements = receipt.statements_created,
        ocr = receipt.ocr_processing.unwrap_or(false),
        "document queued for extraction"
    );

    backend.delete_company(company.id).await?;
    tracing::info!(company_id = company.id, "company removed");

    backend.logout().await?;
    tracing::info!("signed out, walkthrough complete");
    Ok(())
}

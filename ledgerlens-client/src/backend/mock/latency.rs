/// Injectable latency simulation
///
/// Real backends take time; a mock that answers instantly makes manual
/// testing unrepresentative. Every mock operation pauses once, for a
/// duration chosen by the policy, before touching any state. The pause is
/// a plain non-blocking sleep: no retry, no cancellation, no timeout.
///
/// Tests inject [`LatencyPolicy::none`] so nothing waits on wall-clock
/// timers.
use std::time::Duration;

/// Operation kinds with distinct simulated delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Login,
    Register,
    CurrentUser,
    ListCompanies,
    GetCompany,
    CreateCompany,
    DeleteCompany,
    Analysis,
    UploadPdf,
    UploadSpreadsheet,
}

impl ApiOperation {
    /// Name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::Login => "login",
            ApiOperation::Register => "register",
            ApiOperation::CurrentUser => "current_user",
            ApiOperation::ListCompanies => "list_companies",
            ApiOperation::GetCompany => "get_company",
            ApiOperation::CreateCompany => "create_company",
            ApiOperation::DeleteCompany => "delete_company",
            ApiOperation::Analysis => "analysis",
            ApiOperation::UploadPdf => "upload_pdf",
            ApiOperation::UploadSpreadsheet => "upload_spreadsheet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every operation resolves immediately
    None,
    /// Per-operation delays resembling a real deployment
    Realistic,
    /// One flat delay for every operation
    Fixed(Duration),
}

/// Maps operation kind to simulated network delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyPolicy {
    mode: Mode,
}

impl LatencyPolicy {
    /// Per-operation delays resembling a real deployment
    ///
    /// Reads settle around 300ms, writes around 500ms, analysis and file
    /// processing take visibly longer.
    pub fn realistic() -> Self {
        Self {
            mode: Mode::Realistic,
        }
    }

    /// Zero delay everywhere, for deterministic tests
    pub fn none() -> Self {
        Self { mode: Mode::None }
    }

    /// The same delay for every operation
    pub fn fixed(delay: Duration) -> Self {
        Self {
            mode: Mode::Fixed(delay),
        }
    }

    /// Delay the policy assigns to one operation
    pub fn duration_for(&self, operation: ApiOperation) -> Duration {
        match self.mode {
            Mode::None => Duration::ZERO,
            Mode::Fixed(delay) => delay,
            Mode::Realistic => {
                let millis = match operation {
                    ApiOperation::Login => 500,
                    ApiOperation::Register => 500,
                    ApiOperation::CurrentUser => 300,
                    ApiOperation::ListCompanies => 300,
                    ApiOperation::GetCompany => 300,
                    ApiOperation::CreateCompany => 500,
                    ApiOperation::DeleteCompany => 300,
                    ApiOperation::Analysis => 800,
                    ApiOperation::UploadPdf => 2000,
                    ApiOperation::UploadSpreadsheet => 1000,
                };
                Duration::from_millis(millis)
            }
        }
    }

    /// Suspends for the operation's delay
    pub async fn simulate(&self, operation: ApiOperation) {
        let delay = self.duration_for(operation);
        if !delay.is_zero() {
            tracing::trace!(
                operation = operation.as_str(),
                delay_ms = delay.as_millis() as u64,
                "simulating network delay"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencyPolicy {
    fn default() -> Self {
        Self::realistic()
    }
}

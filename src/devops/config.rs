use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dev.azure.com";
pub const DEFAULT_API_VERSION: &str = "7.0";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DevOpsConfig {
    pub organization: String,
    pub personal_access_token: String,
    pub base_url: String,
    pub api_version: String,
    pub request_timeout: Duration,
}

impl DevOpsConfig {
    pub fn new(organization: impl ToString, personal_access_token: impl ToString) -> Self {
        Self {
            organization: organization.to_string(),
            personal_access_token: personal_access_token.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl ToString) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

//! Immutable session context for outgoing requests.
//!
//! Environment, bearer token and business codename are fixed when the
//! session is created and handed to every client by reference.

use std::fmt;

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Preview,
    Staging,
    #[default]
    Production,
}

impl Environment {
    /// Root URL shared by all services of this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Preview => "https://fintrack.prw.mindbricks.com",
            Self::Staging => "https://fintrack-stage.mindbricks.co",
            Self::Production => "https://fintrack.mindbricks.co",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Parse from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "preview" => Some(Self::Preview),
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Backend services behind the environment root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Auth,
    CustomerManagement,
    SupplierManagement,
    InvoiceManagement,
    PaymentManagement,
    ExpenseManagement,
    ProductCatalog,
    Bff,
}

impl Service {
    /// Path prefix of the service below the environment root.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Auth => "/auth-api",
            Self::CustomerManagement => "/customermanagement-api",
            Self::SupplierManagement => "/suppliermanagement-api",
            Self::InvoiceManagement => "/invoicemanagement-api",
            Self::PaymentManagement => "/paymentmanagement-api",
            Self::ExpenseManagement => "/expensemanagement-api",
            Self::ProductCatalog => "/productcatalog-api",
            Self::Bff => "/bff-service",
        }
    }
}

/// Business codename used when none is configured.
pub const DEFAULT_BUSINESS_CODENAME: &str = "babil";

/// Credentials and routing for one signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    environment: Environment,
    base_url: Option<String>,
    token: Option<String>,
    business_codename: String,
}

impl Session {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            base_url: None,
            token: None,
            business_codename: DEFAULT_BUSINESS_CODENAME.to_string(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_business_codename(mut self, codename: impl Into<String>) -> Self {
        self.business_codename = codename.into();
        self
    }

    /// Route all services below `url` instead of the environment root
    /// (local gateways, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Load from the process environment.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `FINTRACK_ENV` | `preview`, `staging` or `production` (default; unknown names fall back to it) |
    /// | `FINTRACK_BASE_URL` | overrides the environment root |
    /// | `FINTRACK_TOKEN` | bearer token |
    /// | `FINTRACK_BUSINESS_CODENAME` | tenant codename, default `babil` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = value("FINTRACK_ENV")
            .and_then(|name| Environment::from_name(&name))
            .unwrap_or_default();

        let mut session = Self::new(environment);
        if let Some(url) = value("FINTRACK_BASE_URL") {
            session = session.with_base_url(url);
        }
        if let Some(token) = value("FINTRACK_TOKEN") {
            session = session.with_token(token);
        }
        if let Some(codename) = value("FINTRACK_BUSINESS_CODENAME") {
            session = session.with_business_codename(codename);
        }
        session
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn business_codename(&self) -> &str {
        &self.business_codename
    }

    /// Root URL of `service` for this session.
    pub fn service_url(&self, service: Service) -> String {
        let root = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url());
        format!("{root}{}", service.path())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("business_codename", &self.business_codename)
            .finish()
    }
}

use crate::Provider;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub form: FormViewModel,
    pub result: ResultViewModel,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub provider: Provider,
    pub secret_id: String,
    pub secret_key: String,
    pub token: String,
    pub role_arn: String,
    pub show_advanced: bool,
    pub destination: String,
    pub login_url: String,
    pub destination_placeholder: &'static str,
    pub login_url_placeholder: &'static str,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultViewModel {
    pub url: Option<String>,
    pub copied: bool,
    pub copy_enabled: bool,
    pub open_enabled: bool,
}

use crate::{
    config::date_locale::DateLocaleConfig,
    error::{BadEnvVarSnafu, ParseEnvNumberSnafu, RollcallResult},
};
use dotenvy::var;
use secrecy::SecretString;
use snafu::ResultExt;
use std::sync::Arc;

pub mod date_locale;

pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_MOUNTS: usize = 256;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    date_locale_config: Arc<DateLocaleConfig>,
    server_ip: Arc<str>,
    max_mounts: usize,
}

impl RuntimeConfiguration {
    pub fn new() -> RollcallResult<Self> {
        let date_locale_config = DateLocaleConfig::new(
            optional_env_var("ROLLCALL_TIMEZONE")?.unwrap_or_else(|| "UTC".to_string()),
            optional_env_var("ROLLCALL_LOCALE")?.unwrap_or_else(|| "en-GB".to_string()),
            optional_env_var("ROLLCALL_HOUR_CYCLE")?.unwrap_or_else(|| "h23".to_string()),
            optional_env_var("ROLLCALL_CALENDAR")?.unwrap_or_else(|| "gregorian".to_string()),
        )?;

        let max_mounts = match optional_env_var("ROLLCALL_MAX_MOUNTS")? {
            Some(raw) => raw.parse().context(ParseEnvNumberSnafu {
                name: "ROLLCALL_MAX_MOUNTS",
            })?,
            None => DEFAULT_MAX_MOUNTS,
        };

        Ok(Self {
            api_config: Arc::new(ApiConfig::new()?),
            date_locale_config: Arc::new(date_locale_config),
            server_ip: optional_env_var("ROLLCALL_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string())
                .into(),
            max_mounts,
        })
    }

    #[cfg(test)]
    pub fn for_tests(api_config: ApiConfig) -> Self {
        Self {
            api_config: Arc::new(api_config),
            date_locale_config: Arc::new(
                DateLocaleConfig::new(
                    "UTC".to_string(),
                    "en-GB".to_string(),
                    "h23".to_string(),
                    "gregorian".to_string(),
                )
                .unwrap(),
            ),
            server_ip: DEFAULT_SERVER_IP.into(),
            max_mounts: 4,
        }
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn date_locale_config(&self) -> Arc<DateLocaleConfig> {
        self.date_locale_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub const fn max_mounts(&self) -> usize {
        self.max_mounts
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    base_url: String,
    token: Option<SecretString>,
}

impl ApiConfig {
    pub fn new() -> RollcallResult<Self> {
        let name = "ROLLCALL_API_URL";
        let base_url = var(name).context(BadEnvVarSnafu { name })?;

        Ok(Self::from_parts(
            base_url,
            optional_env_var("ROLLCALL_API_TOKEN")?.map(SecretString::from),
        ))
    }

    pub fn from_parts(base_url: impl AsRef<str>, token: Option<SecretString>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }
}

fn optional_env_var(name: &'static str) -> RollcallResult<Option<String>> {
    match var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

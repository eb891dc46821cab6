use crate::{
    config::ApiConfig,
    data::{ApiCollection, Envelope, Record},
    error::{
        BuildHttpClientSnafu, RollcallResult, UpstreamBodySnafu, UpstreamDecodeSnafu,
        UpstreamRequestSnafu, UpstreamStatusSnafu,
    },
};
use secrecy::ExposeSecret;
use snafu::{ResultExt, ensure};
use std::sync::Arc;

/// Read-only client for the students/schools API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    pub fn new(config: Arc<ApiConfig>) -> RollcallResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(BuildHttpClientSnafu)?;

        Ok(Self { http, config })
    }

    pub async fn get_all<A: ApiCollection>(&self) -> RollcallResult<Vec<Record<A>>> {
        let url = self.config.url_for(A::PATH);
        debug!(?url, "Fetching collection");

        let mut request = self.http.get(&url);
        if let Some(token) = self.config.token() {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .context(UpstreamRequestSnafu { url: url.clone() })?;

        let status = response.status();
        ensure!(status.is_success(), UpstreamStatusSnafu { status, url });

        let bytes = response
            .bytes()
            .await
            .context(UpstreamBodySnafu { url: url.clone() })?;
        let envelope: Envelope<A> =
            serde_json::from_slice(&bytes).context(UpstreamDecodeSnafu { url })?;

        Ok(envelope.data)
    }
}

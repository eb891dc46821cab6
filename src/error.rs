use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;
use uuid::Uuid;

pub type RollcallResult<T> = Result<T, RollcallError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollcallError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse `{}` as a number", name))]
    ParseEnvNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Invalid timezone provided: {:?}", tz))]
    InvalidTimezone { source: jiff::Error, tz: String },
    #[snafu(display("Invalid locale provided: {:?}", provided))]
    InvalidLocale {
        source: icu::locale::ParseError,
        provided: String,
    },
    #[snafu(display("Invalid hour cycle provided: {:?}", provided))]
    InvalidHourCycle { provided: String },
    #[snafu(display("Invalid calendar algorithm provided: {:?}", provided))]
    InvalidCalendarAlgorithm { provided: String },
    #[snafu(display("Unable to create date time formatter"))]
    BadDateTimeFormatter {
        source: icu::datetime::DateTimeFormatterLoadError,
    },
    #[snafu(display("Unable to build HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Error requesting {}", url))]
    UpstreamRequest { source: reqwest::Error, url: String },
    #[snafu(display("{} responded with {}", url, status))]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    #[snafu(display("Error reading body from {}", url))]
    UpstreamBody { source: reqwest::Error, url: String },
    #[snafu(display("Error decoding JSON from {}", url))]
    UpstreamDecode {
        source: serde_json::Error,
        url: String,
    },
    #[snafu(display("Unable to find page with ID {}, try reloading", id))]
    MissingMount { id: Uuid },
}

impl IntoResponse for RollcallError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //upstream api misbehaved

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Rollcall Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } | Self::ParseEnvNumber { .. } => ISE,
            Self::InvalidTimezone { .. } | Self::InvalidLocale { .. } => ISE,
            Self::InvalidHourCycle { .. } | Self::InvalidCalendarAlgorithm { .. } => ISE,
            Self::BadDateTimeFormatter { .. } => ISE,
            Self::BuildHttpClient { .. } => ISE,
            Self::UpstreamRequest { .. } | Self::UpstreamStatus { .. } => BG,
            Self::UpstreamBody { .. } | Self::UpstreamDecode { .. } => BG,
            Self::MissingMount { .. } => NF,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_mount_is_not_found_with_alert() {
        let id = Uuid::new_v4();
        let response = RollcallError::MissingMount { id }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("role=\"alert\""));
        assert!(body.contains(&id.to_string()));
    }

    #[test]
    fn upstream_status_names_the_url() {
        let err = RollcallError::UpstreamStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            url: "http://api.test/students".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "http://api.test/students responded with 503 Service Unavailable"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}

use crate::tracking::{GlobalTrackingClient, TrackingClient};
use log::info;
use std::{error::Error, fmt, str::FromStr};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ServerMode {
    #[default]
    Sagemaker,
    Local,
}

impl ServerMode {
    const SAGEMAKER: &'static str = "sagemaker";
    const LOCAL: &'static str = "local";

    const SAGEMAKER_URI: &'static str =
        "arn:aws:sagemaker:us-east-1:879381254630:mlflow-tracking-server/ml-rd-mlflow-server";
    const LOCAL_URI: &'static str = "http://localhost:5000";

    pub fn uri(&self) -> &'static str {
        match self {
            ServerMode::Sagemaker => ServerMode::SAGEMAKER_URI,
            ServerMode::Local => ServerMode::LOCAL_URI,
        }
    }
}

impl FromStr for ServerMode {
    type Err = String;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            ServerMode::SAGEMAKER => Ok(ServerMode::Sagemaker),
            ServerMode::LOCAL => Ok(ServerMode::Local),
            _ => Err(format!("Unknown MLflow server mode: {}", mode)),
        }
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMode::Sagemaker => write!(f, "{}", ServerMode::SAGEMAKER),
            ServerMode::Local => write!(f, "{}", ServerMode::LOCAL),
        }
    }
}

pub fn server_uri(mode: &str) -> Result<&'static str, Box<dyn Error>> {
    let mode = ServerMode::from_str(mode)?;
    Ok(mode.uri())
}

/// Points the process-wide tracking client at the server registered for `mode`.
pub fn set_mlflow_server(mode: &str) -> Result<(), Box<dyn Error>> {
    set_mlflow_server_with(&GlobalTrackingClient, mode)
}

pub fn set_mlflow_server_with(
    client: &dyn TrackingClient,
    mode: &str,
) -> Result<(), Box<dyn Error>> {
    let server_uri = self::server_uri(mode)?;
    client.set_tracking_uri(server_uri);

    info!("MLflow Tracking Server set to {} at {}", mode, server_uri);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{self, MockTrackingClient};
    use serial_test::serial;

    const EXPECTED_SAGEMAKER_URI: &str =
        "arn:aws:sagemaker:us-east-1:879381254630:mlflow-tracking-server/ml-rd-mlflow-server";
    const EXPECTED_LOCAL_URI: &str = "http://localhost:5000";

    #[test]
    fn from_str_to_server_mode() {
        assert_eq!(ServerMode::from_str("sagemaker"), Ok(ServerMode::Sagemaker));
        assert_eq!(ServerMode::from_str("local"), Ok(ServerMode::Local));
        assert!(ServerMode::from_str("Local").is_err());
        assert!(ServerMode::from_str("").is_err());
    }

    #[test]
    fn server_mode_display_round_trips_names() {
        assert_eq!(ServerMode::Sagemaker.to_string(), "sagemaker");
        assert_eq!(ServerMode::Local.to_string(), "local");
        assert_eq!(ServerMode::default(), ServerMode::Sagemaker);
    }

    #[test]
    fn server_uri_resolves_known_modes() {
        assert_eq!(server_uri("sagemaker").unwrap(), EXPECTED_SAGEMAKER_URI);
        assert_eq!(server_uri("local").unwrap(), EXPECTED_LOCAL_URI);
    }

    #[test]
    fn server_uri_unknown_mode_names_the_key() {
        let result = server_uri("remote");
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unknown MLflow server mode: remote"
        );
    }

    #[test]
    fn given_local_mode_when_set_mlflow_server_then_client_receives_local_uri() {
        let mut client = MockTrackingClient::new();
        client
            .expect_set_tracking_uri()
            .with(mockall::predicate::eq(EXPECTED_LOCAL_URI))
            .times(1)
            .return_const(());

        let result = set_mlflow_server_with(&client, "local");

        assert!(result.is_ok());
    }

    #[test]
    fn given_unknown_mode_when_set_mlflow_server_then_client_is_untouched() {
        let mut client = MockTrackingClient::new();
        client.expect_set_tracking_uri().times(0);

        let result = set_mlflow_server_with(&client, "staging");

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn given_sagemaker_mode_when_set_mlflow_server_then_global_uri_is_arn() {
        tracking::reset_tracking_uri();

        set_mlflow_server("sagemaker").unwrap();

        assert_eq!(tracking::get_tracking_uri(), EXPECTED_SAGEMAKER_URI);
        tracking::reset_tracking_uri();
    }

    #[test]
    #[serial]
    fn given_unknown_mode_when_set_mlflow_server_then_global_uri_unchanged() {
        tracking::reset_tracking_uri();
        tracking::set_tracking_uri(EXPECTED_LOCAL_URI);

        let result = set_mlflow_server("production");

        assert!(result.is_err());
        assert_eq!(tracking::get_tracking_uri(), EXPECTED_LOCAL_URI);
        tracking::reset_tracking_uri();
    }
}

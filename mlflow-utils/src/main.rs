use crosscutting::settings::{launcher, logging};
use log::{debug, info};
use mlflow_utils::{auth, server, tracking};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let log_filename = logging::get_default_log_file_name("mlflow-utils");
    logging::setup_logger(&log_filename)?;
    debug!("Starting MLflow setup...");

    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(launcher::get_server_mode);

    if launcher::should_authenticate(&mode) {
        auth::authenticate_in_aws_sagemaker().await?;
    }

    server::set_mlflow_server(&mode)?;
    info!("Tracking URI in use: {}", tracking::get_tracking_uri());

    Ok(())
}

const SERVER_MODE_KEY: &str = "MLFLOW_SERVER_MODE";
const DEFAULT_SERVER_MODE: &str = "sagemaker";

pub fn get_server_mode() -> String {
    super::environment::get_env_variable(SERVER_MODE_KEY)
        .unwrap_or(DEFAULT_SERVER_MODE.to_string())
}

/// Only the Sagemaker tracking server sits behind AWS authentication.
pub fn should_authenticate(mode: &str) -> bool {
    mode == DEFAULT_SERVER_MODE
}

use super::*;
use crate::Credentials;

pub const ACCESS_KEY_ID_KEY: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_KEY: &str = "AWS_SESSION_TOKEN";

/// Writes the credentials into the variables the AWS SDKs read implicitly,
/// overwriting any existing values.
pub fn export_credentials(credentials: &Credentials) {
    super::environment::set_env_variable(ACCESS_KEY_ID_KEY, &credentials.access_key);
    super::environment::set_env_variable(SECRET_ACCESS_KEY_KEY, &credentials.secret_key);
    super::environment::set_env_variable(SESSION_TOKEN_KEY, &credentials.token);
}

pub fn get_exported_credentials() -> Result<Credentials, Box<dyn Error>> {
    let access_key = super::environment::get_env_variable(ACCESS_KEY_ID_KEY)?;
    let secret_key = super::environment::get_env_variable(SECRET_ACCESS_KEY_KEY)?;
    let token = super::environment::get_env_variable(SESSION_TOKEN_KEY)?;

    Ok(Credentials {
        access_key,
        secret_key,
        token,
    })
}

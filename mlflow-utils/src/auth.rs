use async_trait::async_trait;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_credential_types::provider::ProvideCredentials;
use crosscutting::{Credentials, settings::aws};
use log::info;
use mockall::automock;
use std::error::Error;

pub const SAGEMAKER_PROFILE: &str = "sagemaker";

#[async_trait]
#[automock]
pub trait CredentialsProvider: Send + Sync {
    async fn get_frozen_credentials(&self) -> Result<Credentials, Box<dyn Error>>;
}

/// Resolves credentials from a named profile of the shared AWS config and
/// credentials files.
pub struct ProfileCredentialsProvider {
    profile_name: String,
}

impl ProfileCredentialsProvider {
    pub fn new(profile_name: &str) -> Self {
        Self {
            profile_name: profile_name.to_string(),
        }
    }
}

#[async_trait]
impl CredentialsProvider for ProfileCredentialsProvider {
    async fn get_frozen_credentials(&self) -> Result<Credentials, Box<dyn Error>> {
        let provider = ProfileFileCredentialsProvider::builder()
            .profile_name(&self.profile_name)
            .build();

        let credentials = provider.provide_credentials().await?;
        let token = credentials
            .session_token()
            .ok_or_else(|| format!("Profile {} did not provide a session token", self.profile_name))?;

        Ok(Credentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            token,
        ))
    }
}

/// Exports temporary credentials of the `sagemaker` profile into the process
/// environment. Required to reach the Sagemaker MLflow Tracking Server from
/// outside AWS.
pub async fn authenticate_in_aws_sagemaker() -> Result<(), Box<dyn Error>> {
    let provider = ProfileCredentialsProvider::new(SAGEMAKER_PROFILE);
    authenticate_with(&provider).await
}

pub async fn authenticate_with(provider: &dyn CredentialsProvider) -> Result<(), Box<dyn Error>> {
    info!("Authenticating to AWS Sagemaker...");

    let credentials = provider.get_frozen_credentials().await?;
    aws::export_credentials(&credentials);

    info!("Authentication to AWS Sagemaker successfully done!");
    Ok(())
}

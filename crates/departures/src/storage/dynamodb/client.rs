//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use crate::config::ConfigError;

/// AWS client configuration, read once at process start.
#[derive(Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AwsConfig {
    /// Load the configuration from environment variables.
    ///
    /// - `AWS_ENDPOINT_URL` - optional custom endpoint
    /// - `AWS_REGION` - region (default: "ap-northeast-1")
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` - required
    /// - `AWS_SESSION_TOKEN` - optional
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint_url: non_empty_var("AWS_ENDPOINT_URL"),
            region: non_empty_var("AWS_REGION").unwrap_or_else(|| "ap-northeast-1".to_string()),
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID")
                .ok_or(ConfigError::MissingVar("AWS_ACCESS_KEY_ID"))?,
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY")
                .ok_or(ConfigError::MissingVar("AWS_SECRET_ACCESS_KEY"))?,
            session_token: non_empty_var("AWS_SESSION_TOKEN"),
        })
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Creates a DynamoDB client with the given configuration.
///
/// The client is built once and shared by every request.
pub async fn create_client(config: &AwsConfig) -> Client {
    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        config.session_token.clone(),
        None,
        "environment",
    );

    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .credentials_provider(credentials);

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> AwsConfig {
        AwsConfig {
            endpoint_url: None,
            region: "ap-northeast-1".to_string(),
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: Some("token".to_string()),
        }
    }

    #[test]
    fn test_target_display() {
        let mut config = sample_config();
        assert_eq!(
            config.target_display(),
            "AWS DynamoDB (region: ap-northeast-1)"
        );

        config.endpoint_url = Some("http://localhost:8000".to_string());
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", sample_config());

        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("secret\""));
        assert!(!debug.contains("token\""));
    }
}

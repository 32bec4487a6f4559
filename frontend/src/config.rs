const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_AUTH_TOKEN_KEY: &str = "authToken";

/// Client settings, fixed at build time.
///
/// `PARKING_API_BASE_URL` and `PARKING_AUTH_TOKEN_KEY` override the defaults
/// when set in the environment of the build.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub auth_token_key: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PARKING_API_BASE_URL"),
            option_env!("PARKING_AUTH_TOKEN_KEY"),
        )
    }

    fn from_values(api_base_url: Option<&str>, auth_token_key: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let auth_token_key = auth_token_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_AUTH_TOKEN_KEY)
            .to_string();

        Self {
            api_base_url,
            auth_token_key,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.auth_token_key, "authToken");
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = ClientConfig::from_values(Some("https://parking.example.com/api/"), Some("jwt"));
        assert_eq!(config.api_base_url, "https://parking.example.com/api");
        assert_eq!(config.auth_token_key, "jwt");
        assert_eq!(
            config.endpoint("/user/info"),
            "https://parking.example.com/api/user/info"
        );
    }

    #[test]
    fn test_blank_overrides_fall_back_to_defaults() {
        let config = ClientConfig::from_values(Some("  "), Some(""));
        assert_eq!(config, ClientConfig::default());
    }
}

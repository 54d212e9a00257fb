use aws_config::SdkConfig;
use sample_function_core::data_client::{DataClient, DataClientConfig, DataClientFactory};

pub struct DynamoDbDataClient {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoDbDataClient {
    /// Underlying SDK client. No request path reads it yet.
    pub fn client(&self) -> &aws_sdk_dynamodb::Client {
        &self.client
    }
}

impl DataClient for DynamoDbDataClient {
    fn backend(&self) -> &'static str {
        "dynamodb"
    }
}

/// Builds DynamoDB clients from an already loaded SDK config. Client
/// construction does not touch the network.
pub struct DynamoDbClientFactory {
    sdk_config: SdkConfig,
}

impl DynamoDbClientFactory {
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    pub fn build_client(&self, _config: &DataClientConfig) -> DynamoDbDataClient {
        DynamoDbDataClient {
            client: aws_sdk_dynamodb::Client::new(&self.sdk_config),
        }
    }
}

impl DataClientFactory for DynamoDbClientFactory {
    fn connect(&self, config: &DataClientConfig) -> Box<dyn DataClient> {
        Box::new(self.build_client(config))
    }
}

#[cfg(test)]
mod tests {
    use aws_config::{BehaviorVersion, Region};

    use super::*;

    fn static_sdk_config() -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-central-1"))
            .build()
    }

    #[test]
    fn builds_client_from_empty_config() {
        let factory = DynamoDbClientFactory::new(static_sdk_config());

        let data_client = factory.build_client(&DataClientConfig::default());

        assert_eq!(data_client.backend(), "dynamodb");
        assert_eq!(
            data_client
                .client()
                .config()
                .region()
                .map(|region| region.to_string()),
            Some("eu-central-1".to_string())
        );
    }

    #[test]
    fn connect_returns_dynamodb_backend() {
        let factory = DynamoDbClientFactory::new(static_sdk_config());

        let data_client = factory.connect(&DataClientConfig::default());

        assert_eq!(data_client.backend(), "dynamodb");
    }
}

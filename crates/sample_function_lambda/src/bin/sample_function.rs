use lambda_runtime::{service_fn, Error, LambdaEvent};
use sample_function_core::contract::ResponseEnvelope;
use sample_function_core::handler::handle_event;
use sample_function_lambda::adapters::dynamodb::DynamoDbClientFactory;
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let data_clients = DynamoDbClientFactory::new(aws_config);

    tracing::debug!(request_id = %event.context.request_id, "handling invocation");
    Ok(handle_event(&event.payload, &data_clients))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(handle_request)).await
}

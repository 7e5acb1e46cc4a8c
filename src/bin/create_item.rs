use items_crud::{clock::SystemClock, config::Config, handler, logging, store::dynamo::DynamoStore};
use lambda_http::{Error, Request, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env()?;
    let store = DynamoStore::from_config(&config).await;
    tracing::info!(table = store.table_name(), "create handler ready");

    run(service_fn(|request: Request| {
        handler::create::handle(&store, &SystemClock, request)
    }))
    .await
}

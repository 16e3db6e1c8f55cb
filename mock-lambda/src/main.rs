use lambda_runtime::{service_fn, Error};
use mock_lambda::handler::handle_lambda;
use mock_shared::utilities::{config, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Application panicked: {}", info);
    }));

    config::init();
    lambda_runtime::run(service_fn(handle_lambda)).await?;
    Ok(())
}

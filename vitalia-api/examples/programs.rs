use std::sync::Arc;

use vitalia_api::{ApiError, Client, Request};
use vitalia_auth::MemoryTokenStore;

#[tokio::main]
pub async fn main() -> Result<(), ApiError> {
    let client = Client::new(
        "https://api.vitalia.example/v1",
        Arc::new(MemoryTokenStore::new()),
    );

    let req = Request::programs().list().featured(true);

    let _res = client.send(req).await?;
    Ok(())
}

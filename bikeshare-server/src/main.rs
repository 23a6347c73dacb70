use std::net::SocketAddr;
use std::sync::Arc;

use bikeshare_server::gbfs::{GbfsClient, GbfsClientConfig};
use bikeshare_server::operator::Operator;
use bikeshare_server::service::BikeShareService;
use bikeshare_server::web::create_router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bikeshare_server=info".into()),
        )
        .init();

    // One HTTP client shared by every operator facade, so upstream
    // connections are reused across requests.
    let client = GbfsClient::new(GbfsClientConfig::new()).expect("Failed to create GBFS client");

    let operators = Operator::all();
    let services: Vec<Arc<BikeShareService>> = operators
        .into_iter()
        .map(|operator| Arc::new(BikeShareService::new(client.clone(), operator)))
        .collect();

    for service in &services {
        tracing::info!(
            operator = service.operator().slug,
            name = service.operator().name,
            "mounted /api/v1/{}/stations",
            service.operator().slug
        );
    }

    let app = create_router(services);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Bikesharing API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

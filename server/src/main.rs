#![recursion_limit = "256"]

mod gate;
mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let upstream =
        std::env::var("UPSTREAM_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());

    let proxy_state = proxy::ProxyState::new(&upstream).expect("proxy client init failed");
    let app = routes::app(proxy_state).expect("router assembly failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %upstream, "gigboard edge listening");
    axum::serve(listener, app).await.expect("server failed");
}

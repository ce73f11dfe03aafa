#[tokio::main]
async fn main() {
    adminbridge_observability::init();

    let bind_addr = std::env::var("ADMIN_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let prefix = std::env::var("ADMIN_PREFIX").unwrap_or_else(|_| "/admin".to_string());

    let app = adminbridge_axum::demo::build_app(&prefix);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    match listener.local_addr() {
        Ok(addr) => tracing::info!("admin panel listening on {}{}", addr, prefix),
        Err(e) => tracing::warn!("listener has no local address: {e}"),
    }

    axum::serve(listener, app).await.expect("server error");
}

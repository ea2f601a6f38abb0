//! REST API for the library lending system.
//!
//! Routes:
//! - `POST /books` (query: isbn, title, author)
//! - `GET /books/{isbn}`
//! - `POST /books/{isbn}/borrow` (query: user_id)
//! - `POST /books/{isbn}/return`
//! - `GET /users/{user_id}/books`

pub mod handlers;
pub mod state;

pub use state::ApiState;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Build the API router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/books", post(handlers::add_book))
        .route("/books/{isbn}", get(handlers::get_book))
        .route("/books/{isbn}/borrow", post(handlers::borrow_book))
        .route("/books/{isbn}/return", post(handlers::return_book))
        .route("/users/{user_id}/books", get(handlers::user_books))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Serve the API on an already-bound listener until the future is dropped
/// or the server fails.
pub async fn serve(listener: TcpListener, state: ApiState) -> Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Bind `addr` and serve the API until Ctrl-C.
pub async fn run_server(addr: SocketAddr, state: ApiState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Library API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Library API stopped");
    Ok(())
}

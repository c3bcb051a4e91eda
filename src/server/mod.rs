mod http;
mod middleware;
mod pages;

pub use http::{build_router, serve, AppState};

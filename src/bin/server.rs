//! HTTP service entry point.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pagefreq::server::run_server().await
}

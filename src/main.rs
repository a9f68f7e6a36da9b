#[tokio::main]
async fn main() {
    if let Err(err) = cyclestrong::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() {
    menaces::start(std::env::args()).await;
}

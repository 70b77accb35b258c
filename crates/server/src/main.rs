#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rfpdraft_server::start().await
}

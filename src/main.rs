#[tokio::main]
async fn main() -> anyhow::Result<()> {
    plantcare::run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quizdrill_backend::run().await
}

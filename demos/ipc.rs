use std::time::Duration;

use async_ethereum::call::{admin, eth};
use async_ethereum::{Client, ConnectionMeta, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/tmp/geth.ipc".to_string());
    let meta = ConnectionMeta::new(&format!("unix://{path}")).timeout(Duration::from_secs(10));
    let client = Client::connect(meta).await?;

    println!("{}", client.call(admin::Datadir).await?);

    // restart the node while this runs to see the connection come back
    println!("polling block height, ctrl-c to stop");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = tokio::time::sleep(Duration::from_secs(2)) => {
                match client.call(eth::BlockNumber).await {
                    Ok(height) => println!("block {height}"),
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
    Ok(())
}

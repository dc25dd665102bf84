use async_ethereum::call::{eth, net, web3};
use async_ethereum::units::wei_to_ether;
use async_ethereum::{BlockId, Client, ConnectionMeta, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let client = Client::connect(ConnectionMeta::new("http://127.0.0.1:8545")).await?;

    let version = client.call(web3::ClientVersion).await?;
    println!("{version}");

    let network = client.call(net::Version).await?;
    let height = client.call(eth::BlockNumber).await?;
    println!("network {network} at block {height}");

    for address in client.call(eth::Accounts).await? {
        let balance = client
            .call(eth::GetBalance {
                address: address.clone(),
                block: BlockId::Latest,
            })
            .await?;
        println!("{address}: {} ether", wei_to_ether(balance.value()));
    }

    let raw = client.request("eth_gasPrice", vec![]).await?;
    println!("gas price {raw}");
    Ok(())
}

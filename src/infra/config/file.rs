use {
    crate::{
        domain::eth,
        infra::{ledger, wallet},
        util::serialize,
    },
    anyhow::Context,
    serde::Deserialize,
    serde_with::serde_as,
    std::{path::Path, time::Duration},
};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// JSON-RPC endpoint used for ledger reads.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    node_url: url::Url,

    /// Chain ID the holder contract is deployed on.
    #[serde_as(as = "serialize::ChainId")]
    chain_id: eth::ChainId,

    /// The ERC1155 holder contract.
    contract: eth::Address,

    /// The token ID whose holders are eligible.
    #[serde(default)]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    token_id: eth::U256,

    /// Timeout for a single ledger read.
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    request_timeout: Duration,

    /// Optional wallet backed by a JSON-RPC node.
    wallet: Option<Wallet>,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Wallet {
    /// JSON-RPC endpoint exposing the wallet accounts.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    node_url: url::Url,

    /// How often to poll for account changes.
    #[serde(with = "humantime_serde", default = "default_poll_interval")]
    poll_interval: Duration,
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(2)
}

/// Load the configuration from a TOML file.
pub async fn load(path: &Path) -> anyhow::Result<super::Config> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    let config = toml::de::from_str::<Config>(&data)
        .with_context(|| format!("TOML syntax error while reading {path:?}"))?;

    Ok(super::Config {
        chain_id: config.chain_id,
        ledger: ledger::Config {
            node_url: config.node_url,
            contract: eth::ContractAddress(config.contract),
            token_id: eth::TokenId(config.token_id),
            timeout: config.request_timeout,
        },
        wallet: config.wallet.map(|wallet| wallet::NodeConfig {
            node_url: wallet.node_url,
            poll_interval: wallet.poll_interval,
            timeout: config.request_timeout,
        }),
    })
}

//! Block-explorer links attached to action notifications.

use clap::ValueEnum;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::fmt;

const EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Which cluster the explorer links should point at. The explorer treats
/// mainnet as the default and takes the others as a query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    fn query(self) -> Option<&'static str> {
        match self {
            Cluster::Devnet => Some("devnet"),
            Cluster::Testnet => Some("testnet"),
            Cluster::MainnetBeta => None,
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
        };
        write!(f, "{name}")
    }
}

pub fn tx_url(signature: &Signature, cluster: Cluster) -> String {
    with_cluster(format!("{EXPLORER_BASE}/tx/{signature}"), cluster)
}

pub fn address_url(address: &Pubkey, cluster: Cluster) -> String {
    with_cluster(format!("{EXPLORER_BASE}/address/{address}"), cluster)
}

fn with_cluster(mut url: String, cluster: Cluster) -> String {
    if let Some(tag) = cluster.query() {
        url.push_str("?cluster=");
        url.push_str(tag);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, Signer};

    #[test]
    fn tx_link_carries_devnet_tag() {
        let sig = Signature::default();
        let url = tx_url(&sig, Cluster::Devnet);
        assert_eq!(url, format!("https://explorer.solana.com/tx/{sig}?cluster=devnet"));
    }

    #[test]
    fn address_link_carries_cluster_tag() {
        let key = Keypair::new().pubkey();
        let url = address_url(&key, Cluster::Testnet);
        assert_eq!(
            url,
            format!("https://explorer.solana.com/address/{key}?cluster=testnet")
        );
    }

    #[test]
    fn mainnet_links_have_no_query() {
        let key = Keypair::new().pubkey();
        let url = address_url(&key, Cluster::MainnetBeta);
        assert!(!url.contains('?'));
        assert!(url.ends_with(&key.to_string()));
    }
}

use std::fmt::{self, Display};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Explorer deployments with a well-known public URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Local,
    Devnet,
    Chronos,
    #[default]
    Mainnet,
}

impl Network {
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Local => "http://127.0.0.1:8080",
            Self::Devnet => "https://explorer.devnet.oneledger.network",
            Self::Chronos => "https://explorer.chronos.oneledger.network",
            Self::Mainnet => "https://explorer.kainos.oneledger.network",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Devnet => "devnet",
            Self::Chronos => "chronos",
            Self::Mainnet => "mainnet",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Supported cloud platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    #[default]
    Tencent,
    Alibaba,
    Aws,
}

/// Endpoint defaults applied whenever a provider is (re)selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub destination: &'static str,
    pub login_url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider: {0}")]
pub struct ParseProviderError(pub String);

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Tencent, Provider::Alibaba, Provider::Aws];

    /// Wire name, as expected by the role login endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Tencent => "tencent",
            Provider::Alibaba => "alibaba",
            Provider::Aws => "aws",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Provider::Tencent => "Tencent Cloud",
            Provider::Alibaba => "Alibaba Cloud",
            Provider::Aws => "AWS",
        }
    }

    pub fn defaults(self) -> ProviderDefaults {
        match self {
            Provider::Tencent => ProviderDefaults {
                destination: "https://console.cloud.tencent.com",
                login_url: "",
            },
            Provider::Alibaba => ProviderDefaults {
                destination: "https://home.console.aliyun.com",
                login_url: "https://account.aliyun.com/login",
            },
            Provider::Aws => ProviderDefaults {
                destination: "https://console.aws.amazon.com",
                login_url: "https://signin.aws.amazon.com",
            },
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseProviderError(s.to_string()))
    }
}

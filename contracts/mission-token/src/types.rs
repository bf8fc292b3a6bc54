use soroban_sdk::{contracttype, Address, String};

/// Descriptive token metadata, including the off-chain metadata URI.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub uri: String,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Metadata,
    Balance(Address),
    TotalSupply,
}

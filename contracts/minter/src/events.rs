use soroban_sdk::{contractevent, Address, BytesN, U256};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PerformMint {
    #[topic]
    pub claim: BytesN<32>,
    #[topic]
    pub to: Address,
    pub asset_id: U256,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelMint {
    #[topic]
    pub claim: BytesN<32>,
}

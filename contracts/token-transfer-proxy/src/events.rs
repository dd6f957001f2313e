use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizedAddressAdded {
    #[topic]
    pub target: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizedAddressRemoved {
    #[topic]
    pub target: Address,
}

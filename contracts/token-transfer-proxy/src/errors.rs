use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProxyError {
    /// The caller is not an authorized address.
    NotAuthorized = 300,
    /// The target address is already authorized.
    TargetAlreadyAuthorized = 301,
    /// The target address is not authorized.
    TargetNotAuthorized = 302,
}

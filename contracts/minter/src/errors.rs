use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MinterError {
    /// The claim's expiration time has passed.
    ClaimExpired = 100,
    /// The claim recipient and the owner are the same account.
    SelfMint = 101,
    /// The caller is not allowed to perform this operation.
    Forbidden = 102,
    /// The signature does not recover to the owner's key.
    InvalidSignature = 103,
    /// The claim was already performed or canceled.
    AlreadySettled = 104,
    /// The fee recipient, amount and token sequences differ in length.
    FeeCountMismatch = 105,
    /// The payer's allowance for the transfer proxy is below the claimed fees.
    InsufficientAllowance = 106,
    /// The payer's balance is below the claimed fees.
    InsufficientBalance = 107,
    /// The mint proxy could not mint on the asset contract.
    MintCapabilityDenied = 108,
}

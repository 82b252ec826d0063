use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    EmptyOwners = 2,
    TooManyOwners = 3,
    InvalidOwner = 4,
    DuplicateOwner = 5,
    InvalidThreshold = 6,
    ThresholdExceedsOwners = 7,
    Unauthorized = 10,
    InvalidIndex = 11,
    OwnerIndexOutOfRange = 12,
    InvalidAmount = 13,
    AlreadyApproved = 14,
    AlreadyExecuted = 15,
    NotEnoughApprovals = 16,
    NotEnoughNative = 20,
    NotEnoughTokens = 21,
    NotEnoughAllowance = 22,
    TokenIdNotOwned = 23,
    NftNotApproved = 24,
    NotOwnerOfNft = 25,
}

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    OwnerIndex(Address),
    RequiredApprovals,
    NativeAsset,
    TxnCount(AssetClass),
    Txn(AssetClass, u32),
}

/// Asset class a request moves. Each class has its own index sequence.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AssetClass {
    Native = 0,
    Token = 1,
    Nft = 2,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ActionKind {
    Transfer = 0,
    TransferFrom = 1,
    Approve = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NativeTransfer {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTransfer {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTransferFrom {
    pub token: Address,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenApproval {
    pub token: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftTransfer {
    pub nft: Address,
    pub to: Address,
    pub token_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftTransferFrom {
    pub nft: Address,
    pub from: Address,
    pub to: Address,
    pub token_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftApproval {
    pub nft: Address,
    pub spender: Address,
    pub token_id: u32,
}

/// The effect a request applies once executed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TxnAction {
    NativeTransfer(NativeTransfer),
    TokenTransfer(TokenTransfer),
    TokenTransferFrom(TokenTransferFrom),
    TokenApproval(TokenApproval),
    NftTransfer(NftTransfer),
    NftTransferFrom(NftTransferFrom),
    NftApproval(NftApproval),
}

impl TxnAction {
    pub fn class(&self) -> AssetClass {
        match self {
            TxnAction::NativeTransfer(_) => AssetClass::Native,
            TxnAction::TokenTransfer(_)
            | TxnAction::TokenTransferFrom(_)
            | TxnAction::TokenApproval(_) => AssetClass::Token,
            TxnAction::NftTransfer(_) | TxnAction::NftTransferFrom(_) | TxnAction::NftApproval(_) => {
                AssetClass::Nft
            }
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            TxnAction::NativeTransfer(_) | TxnAction::TokenTransfer(_) | TxnAction::NftTransfer(_) => {
                ActionKind::Transfer
            }
            TxnAction::TokenTransferFrom(_) | TxnAction::NftTransferFrom(_) => {
                ActionKind::TransferFrom
            }
            TxnAction::TokenApproval(_) | TxnAction::NftApproval(_) => ActionKind::Approve,
        }
    }

    /// Account receiving the funds, or the spender for approvals.
    pub fn recipient(&self) -> Address {
        match self {
            TxnAction::NativeTransfer(t) => t.to.clone(),
            TxnAction::TokenTransfer(t) => t.to.clone(),
            TxnAction::TokenTransferFrom(t) => t.to.clone(),
            TxnAction::TokenApproval(a) => a.spender.clone(),
            TxnAction::NftTransfer(t) => t.to.clone(),
            TxnAction::NftTransferFrom(t) => t.to.clone(),
            TxnAction::NftApproval(a) => a.spender.clone(),
        }
    }

    pub fn amount_or_token_id(&self) -> i128 {
        match self {
            TxnAction::NativeTransfer(t) => t.amount,
            TxnAction::TokenTransfer(t) => t.amount,
            TxnAction::TokenTransferFrom(t) => t.amount,
            TxnAction::TokenApproval(a) => a.amount,
            TxnAction::NftTransfer(t) => i128::from(t.token_id),
            TxnAction::NftTransferFrom(t) => i128::from(t.token_id),
            TxnAction::NftApproval(a) => i128::from(a.token_id),
        }
    }

    /// Account debited by the action. `wallet` for everything but transfer-from.
    pub fn source_holder(&self, wallet: &Address) -> Address {
        match self {
            TxnAction::TokenTransferFrom(t) => t.from.clone(),
            TxnAction::NftTransferFrom(t) => t.from.clone(),
            _ => wallet.clone(),
        }
    }

    pub fn asset(&self) -> Option<Address> {
        match self {
            TxnAction::NativeTransfer(_) => None,
            TxnAction::TokenTransfer(t) => Some(t.token.clone()),
            TxnAction::TokenTransferFrom(t) => Some(t.token.clone()),
            TxnAction::TokenApproval(a) => Some(a.token.clone()),
            TxnAction::NftTransfer(t) => Some(t.nft.clone()),
            TxnAction::NftTransferFrom(t) => Some(t.nft.clone()),
            TxnAction::NftApproval(a) => Some(a.nft.clone()),
        }
    }
}

/// Stored request. `approvals` holds one bit per owner, indexed by the
/// owner's position in the owner list.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxnRequest {
    pub action: TxnAction,
    pub issuer: Address,
    pub approvals: u64,
    pub approval_count: u32,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxnDetails {
    pub class: AssetClass,
    pub kind: ActionKind,
    pub issuer: Address,
    pub recipient: Address,
    pub amount_or_token_id: i128,
    pub source_holder: Address,
    pub asset: Option<Address>,
    pub approvals: u64,
    pub approval_count: u32,
    pub executed: bool,
}

impl TxnDetails {
    pub fn from_request(request: &TxnRequest, wallet: &Address) -> Self {
        let action = &request.action;
        TxnDetails {
            class: action.class(),
            kind: action.kind(),
            issuer: request.issuer.clone(),
            recipient: action.recipient(),
            amount_or_token_id: action.amount_or_token_id(),
            source_holder: action.source_holder(wallet),
            asset: action.asset(),
            approvals: request.approvals,
            approval_count: request.approval_count,
            executed: request.executed,
        }
    }
}

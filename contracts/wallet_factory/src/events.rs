use soroban_sdk::{contractevent, Address};

/// Topic is `deployed`; data is the vec [wallet, deployer].
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deployed {
    pub wallet: Address,
    pub deployer: Address,
}

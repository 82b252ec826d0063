use soroban_sdk::{contractevent, Address, Env};

use crate::types::AssetClass;

// Topics are (name, class); data is the vec [index, by].

#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Issued {
    #[topic]
    pub class: AssetClass,
    pub index: u32,
    pub by: Address,
}

#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approved {
    #[topic]
    pub class: AssetClass,
    pub index: u32,
    pub by: Address,
}

#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Executed {
    #[topic]
    pub class: AssetClass,
    pub index: u32,
    pub by: Address,
}

pub fn issued(env: &Env, class: AssetClass, index: u32, by: &Address) {
    Issued {
        class,
        index,
        by: by.clone(),
    }
    .publish(env);
}

pub fn approved(env: &Env, class: AssetClass, index: u32, by: &Address) {
    Approved {
        class,
        index,
        by: by.clone(),
    }
    .publish(env);
}

pub fn executed(env: &Env, class: AssetClass, index: u32, by: &Address) {
    Executed {
        class,
        index,
        by: by.clone(),
    }
    .publish(env);
}

// Testing utils. See tests folder for actual tests.

use cosmwasm_std::{Addr, Attribute, Coin, Empty};
use cw721::{Cw721QueryMsg, OwnerOfResponse};
use cw_multi_test::{App, BankSudo, Contract, ContractWrapper, Executor, SudoMsg};
use pegasus::cw721_trade::{InstantiateMsg, TokenMsg};
use pegasus::ExpiryRange;

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}

pub fn mint_native(app: &mut App, beneficiary: &Addr, denom: &str, amount: u128) {
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: beneficiary.to_string(),
        amount: vec![Coin::new(amount, denom)],
    }))
    .unwrap();
}

pub fn query_balance_native(app: &App, address: &Addr, denom: &str) -> Coin {
    app.wrap().query_balance(address, denom).unwrap()
}

pub fn contract_trade() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw721_trade::contract::execute,
        cw721_trade::contract::instantiate,
        cw721_trade::contract::query,
    )
    .with_sudo(cw721_trade::contract::sudo)
    .with_migrate(cw721_trade::contract::migrate);
    Box::new(contract)
}

pub fn contract_cw721() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw721_base::entry::execute,
        cw721_base::entry::instantiate,
        cw721_base::entry::query,
    );
    Box::new(contract)
}

pub fn instantiate_trade(app: &mut App, creator: &Addr, msg: &InstantiateMsg) -> Addr {
    let code_id = app.store_code(contract_trade());
    app.instantiate_contract(code_id, creator.clone(), msg, &[], "cw721-trade", None)
        .unwrap()
}

/// Instantiates a cw721-base collection with `minter` as the minter
pub fn instantiate_collection(app: &mut App, minter: &Addr, name: &str) -> Addr {
    let code_id = app.store_code(contract_cw721());
    app.instantiate_contract(
        code_id,
        minter.clone(),
        &cw721_base::InstantiateMsg {
            name: name.to_string(),
            symbol: name.to_uppercase(),
            minter: minter.to_string(),
        },
        &[],
        name,
        None,
    )
    .unwrap()
}

pub fn mint_nft(app: &mut App, collection: &Addr, minter: &Addr, owner: &Addr, token_id: u32) {
    let msg = cw721_base::ExecuteMsg::<cw721_base::Extension, Empty>::Mint {
        token_id: token_id.to_string(),
        owner: owner.to_string(),
        token_uri: None,
        extension: None,
    };
    app.execute_contract(minter.clone(), collection.clone(), &msg, &[])
        .unwrap();
}

pub fn approve_nft(app: &mut App, collection: &Addr, owner: &Addr, spender: &Addr, token_id: u32) {
    let msg = cw721_base::ExecuteMsg::<cw721_base::Extension, Empty>::Approve {
        spender: spender.to_string(),
        token_id: token_id.to_string(),
        expires: None,
    };
    app.execute_contract(owner.clone(), collection.clone(), &msg, &[])
        .unwrap();
}

pub fn transfer_nft(app: &mut App, collection: &Addr, owner: &Addr, recipient: &Addr, token_id: u32) {
    let msg = cw721_base::ExecuteMsg::<cw721_base::Extension, Empty>::TransferNft {
        recipient: recipient.to_string(),
        token_id: token_id.to_string(),
    };
    app.execute_contract(owner.clone(), collection.clone(), &msg, &[])
        .unwrap();
}

pub fn query_nft_owner(app: &App, collection: &Addr, token_id: u32) -> String {
    let res: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(
            collection,
            &Cw721QueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: None,
            },
        )
        .unwrap();
    res.owner
}

pub fn token(collection: &Addr, token_id: u32) -> TokenMsg {
    TokenMsg {
        collection: collection.to_string(),
        token_id,
    }
}

pub fn default_instantiate_msg(maintainer: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        offer_expiry: ExpiryRange::new(pegasus::MIN_EXPIRY, 7 * pegasus::MIN_EXPIRY),
        maintainer: maintainer.to_string(),
        max_offers: 16,
        bundle_limit: 3,
    }
}

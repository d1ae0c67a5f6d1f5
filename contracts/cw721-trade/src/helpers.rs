use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Coin, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};
use pegasus::cw721_trade::{ExecuteMsg, Offer, OfferResponse, QueryMsg};

/// TradeContract is a wrapper around Addr that provides helpers
/// for other contracts and tests talking to a deployed trade contract
#[cw_serde]
pub struct TradeContract(pub Addr);

impl TradeContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        self.call_with_funds(msg, vec![])
    }

    pub fn call_with_funds<T: Into<ExecuteMsg>>(
        &self,
        msg: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    pub fn offer(&self, querier: &QuerierWrapper, id: u64) -> StdResult<Option<Offer>> {
        let res: OfferResponse = querier.query_wasm_smart(self.addr(), &QueryMsg::Offer { id })?;
        Ok(res.offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Binary;

    #[test]
    fn call_works() {
        let contract = TradeContract(Addr::unchecked("trade"));
        let msg = contract.call(ExecuteMsg::RejectOffer { id: 7 }).unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: "trade".to_string(),
                msg: Binary::from(br#"{"reject_offer":{"id":7}}"#),
                funds: vec![],
            })
        );
    }
}

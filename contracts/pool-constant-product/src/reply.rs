use cosmwasm_std::{DepsMut, Reply, Response, StdError};
use cw_utils::parse_instantiate_response_data;

use crate::error::ContractError;
use crate::events::LpTokenInstantiatedEvent;
use crate::state::{INSTANTIATE_LP_REPLY_ID, POOL_CONFIG};

pub fn handle_lp_instantiate_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INSTANTIATE_LP_REPLY_ID {
        return Err(ContractError::UnknownReplyId { id: msg.id });
    }

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    #[allow(deprecated)]
    let data = result.data.ok_or(ContractError::MissingReplyData {})?;
    let res = parse_instantiate_response_data(&data)?;

    deps.api.debug(&format!(
        "[reply] Received contract_address in reply data: {}",
        res.contract_address
    ));
    let lp_token_addr = deps.api.addr_validate(&res.contract_address)?;

    // Update config with the LP token address
    POOL_CONFIG.update(deps.storage, |mut cfg| -> Result<_, ContractError> {
        // A second reply must not repoint the share ledger
        if cfg.lp_token_addr.is_some() {
            return Err(ContractError::LpTokenAlreadySet {});
        }
        cfg.lp_token_addr = Some(lp_token_addr.clone());
        Ok(cfg)
    })?;

    Ok(Response::new()
        .add_event(LpTokenInstantiatedEvent {
            lp_token_address: lp_token_addr.clone(),
        })
        .add_attribute("action", "lp_token_instantiated")
        .add_attribute("lp_token_address", lp_token_addr))
}

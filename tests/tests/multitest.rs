use cosmwasm_std::{coin, to_json_binary, Addr, Coin, Timestamp, Uint128, Uint256};
use cw20::{BalanceResponse, Cw20Coin, TokenInfoResponse};
use cw_multi_test::{App, BankSudo, Contract, ContractWrapper, Executor};
use pool_constant_product::msg as PoolMsg;
use pool_constant_product::msg::{
    ConfigResponse, Cw20HookMsg, PoolStateResponse, PriceResponse, ShareResponse,
    SimulationResponse,
};
use pool_ledger::AssetInfo;

const TOKEN_A: &str = "tokenA";
const TOKEN_B: &str = "tokenB";

// Helper to create contract wrapper for the Pool contract
fn pool_contract() -> Box<dyn Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        pool_constant_product::contract::execute,
        pool_constant_product::contract::instantiate,
        pool_constant_product::contract::query,
    )
    .with_reply(pool_constant_product::contract::reply);
    Box::new(contract)
}

// Use cw20-base's contract for LP tokens and cw20 pool assets
fn cw20_contract() -> Box<dyn Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// Sets up app, users and balances.
/// Returns: `(App, CW20 Code ID, Pool Code ID, User1 Addr, User2 Addr)`
fn setup_app() -> (App, u64, u64, Addr, Addr) {
    let mut app = App::default();
    let cw20_code_id = app.store_code(cw20_contract());
    let pool_code_id = app.store_code(pool_contract());

    let user1 = app.api().addr_make("user1");
    let user2 = app.api().addr_make("user2");

    for user in [&user1, &user2] {
        app.sudo(cw_multi_test::SudoMsg::Bank(BankSudo::Mint {
            to_address: user.to_string(),
            amount: vec![coin(1_000_000, TOKEN_A), coin(1_000_000, TOKEN_B)],
        }))
        .unwrap();
    }

    (app, cw20_code_id, pool_code_id, user1, user2)
}

/// Instantiates a pool over the two assets.
/// Returns: `(Pool Address, LP Token Address)`
fn create_pool(
    app: &mut App,
    pool_code_id: u64,
    cw20_code_id: u64,
    asset_a: AssetInfo,
    asset_b: AssetInfo,
) -> (Addr, Addr) {
    let creator = app.api().addr_make("creator");
    let pool_addr = app
        .instantiate_contract(
            pool_code_id,
            creator,
            &PoolMsg::InstantiateMsg {
                asset_a,
                asset_b,
                lp_token_code_id: cw20_code_id,
                mint_policy: None,
            },
            &[],
            "ConstantProductPool",
            None,
        )
        .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(pool_addr.clone(), &PoolMsg::QueryMsg::Config {})
        .unwrap();
    let lp_token_addr = config
        .lp_token_address
        .expect("LP token address is set by the instantiate reply");
    (pool_addr, lp_token_addr)
}

fn create_cw20_asset(app: &mut App, cw20_code_id: u64, holder: &Addr) -> Addr {
    let creator = app.api().addr_make("creator");
    app.instantiate_contract(
        cw20_code_id,
        creator,
        &cw20_base::msg::InstantiateMsg {
            name: "Token Alpha".into(),
            symbol: "ALPHA".into(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::new(100_000),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        "AlphaToken",
        None,
    )
    .unwrap()
}

fn deadline(app: &App) -> Timestamp {
    app.block_info().time.plus_seconds(60)
}

fn add_liquidity_msg(app: &App, amount_a: u128, amount_b: u128) -> PoolMsg::ExecuteMsg {
    PoolMsg::ExecuteMsg::AddLiquidity {
        amount_a_desired: Uint128::new(amount_a),
        amount_b_desired: Uint128::new(amount_b),
        amount_a_min: Uint128::zero(),
        amount_b_min: Uint128::zero(),
        deadline: deadline(app),
        recipient: None,
        assets: None,
    }
}

fn native_path(offer: &str, ask: &str) -> Vec<AssetInfo> {
    vec![AssetInfo::native(offer), AssetInfo::native(ask)]
}

fn bank_balance(app: &App, addr: &Addr, denom: &str) -> Uint128 {
    app.wrap().query_balance(addr.clone(), denom).unwrap().amount
}

fn cw20_balance(app: &App, token: &Addr, addr: &Addr) -> Uint128 {
    let resp: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token.clone(),
            &cw20::Cw20QueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    resp.balance
}

fn total_supply(app: &App, lp_token: &Addr) -> Uint128 {
    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(lp_token.clone(), &cw20::Cw20QueryMsg::TokenInfo {})
        .unwrap();
    info.total_supply
}

/// Native A/B pool seeded with 1000 A and 2000 B by user1.
fn seeded_native_pool(
    app: &mut App,
    pool_code_id: u64,
    cw20_code_id: u64,
    user1: &Addr,
) -> (Addr, Addr) {
    let (pool_addr, lp_token_addr) = create_pool(
        app,
        pool_code_id,
        cw20_code_id,
        AssetInfo::native(TOKEN_A),
        AssetInfo::native(TOKEN_B),
    );
    let msg = add_liquidity_msg(app, 1_000, 2_000);
    app.execute_contract(
        user1.clone(),
        pool_addr.clone(),
        &msg,
        &[coin(1_000, TOKEN_A), coin(2_000, TOKEN_B)],
    )
    .unwrap();
    (pool_addr, lp_token_addr)
}

#[test]
fn test_full_flow_cosmwasm() {
    let (mut app, cw20_code_id, pool_code_id, user1, user2) = setup_app();
    let (pool_addr, lp_token_addr) = create_pool(
        &mut app,
        pool_code_id,
        cw20_code_id,
        AssetInfo::native(TOKEN_A),
        AssetInfo::native(TOKEN_B),
    );
    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(pool_addr.clone(), &PoolMsg::QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.asset_a, AssetInfo::native(TOKEN_A));
    assert_eq!(config.asset_b, AssetInfo::native(TOKEN_B));

    // --- Bootstrap by user1, overpaying B ---
    let msg = add_liquidity_msg(&app, 1_000, 2_000);
    app.execute_contract(
        user1.clone(),
        pool_addr.clone(),
        &msg,
        &[coin(1_000, TOKEN_A), coin(2_010, TOKEN_B)],
    )
    .unwrap();

    assert_eq!(bank_balance(&app, &user1, TOKEN_B), Uint128::new(998_000));
    assert_eq!(cw20_balance(&app, &lp_token_addr, &user1), Uint128::new(1_414));
    let pool_resp: PoolStateResponse = app
        .wrap()
        .query_wasm_smart(pool_addr.clone(), &PoolMsg::QueryMsg::PoolState {})
        .unwrap();
    assert_eq!(pool_resp.reserve_a, Uint128::new(1_000));
    assert_eq!(pool_resp.reserve_b, Uint128::new(2_000));
    assert_eq!(pool_resp.total_lp_shares, Uint128::new(1_414));
    assert_eq!(pool_resp.lp_token_address, lp_token_addr);

    // --- user2 adds off-ratio; only what the ratio needs is taken ---
    let msg = add_liquidity_msg(&app, 100, 300);
    app.execute_contract(
        user2.clone(),
        pool_addr.clone(),
        &msg,
        &[coin(100, TOKEN_A), coin(300, TOKEN_B)],
    )
    .unwrap();
    assert_eq!(bank_balance(&app, &user2, TOKEN_A), Uint128::new(999_900));
    assert_eq!(bank_balance(&app, &user2, TOKEN_B), Uint128::new(999_800));
    assert_eq!(cw20_balance(&app, &lp_token_addr, &user2), Uint128::new(141));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_A), Uint128::new(1_100));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_B), Uint128::new(2_200));

    // --- user2 swaps 100 A for B, quoted first ---
    let quote: SimulationResponse = app
        .wrap()
        .query_wasm_smart(
            pool_addr.clone(),
            &PoolMsg::QueryMsg::AmountOut {
                amount_in: Uint128::new(100),
                path: native_path(TOKEN_A, TOKEN_B),
            },
        )
        .unwrap();
    assert_eq!(quote.amount_out, Uint128::new(183));

    let swap_msg = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: quote.amount_out,
        path: native_path(TOKEN_A, TOKEN_B),
        deadline: deadline(&app),
        recipient: None,
    };
    let balance_user2_before = bank_balance(&app, &user2, TOKEN_B);
    app.execute_contract(
        user2.clone(),
        pool_addr.clone(),
        &swap_msg,
        &[coin(100, TOKEN_A)],
    )
    .unwrap();
    assert_eq!(
        bank_balance(&app, &user2, TOKEN_B) - balance_user2_before,
        Uint128::new(183)
    );
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_A), Uint128::new(1_200));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_B), Uint128::new(2_017));

    // --- user1 withdraws half of their shares to user2 ---
    let share: ShareResponse = app
        .wrap()
        .query_wasm_smart(
            pool_addr.clone(),
            &PoolMsg::QueryMsg::Share {
                amount: Uint128::new(707),
            },
        )
        .unwrap();
    assert_eq!(share.amount_a, Uint128::new(545));
    assert_eq!(share.amount_b, Uint128::new(917));

    let withdraw_hook = Cw20HookMsg::WithdrawLiquidity {
        amount_a_min: share.amount_a,
        amount_b_min: share.amount_b,
        deadline: deadline(&app),
        recipient: Some(user2.to_string()),
        assets: Some([AssetInfo::native(TOKEN_A), AssetInfo::native(TOKEN_B)]),
    };
    let user2_a_before = bank_balance(&app, &user2, TOKEN_A);
    let user2_b_before = bank_balance(&app, &user2, TOKEN_B);
    let supply_before = total_supply(&app, &lp_token_addr);
    app.execute_contract(
        user1.clone(),
        lp_token_addr.clone(),
        &cw20::Cw20ExecuteMsg::Send {
            contract: pool_addr.to_string(),
            amount: Uint128::new(707),
            msg: to_json_binary(&withdraw_hook).unwrap(),
        },
        &[],
    )
    .unwrap();

    assert_eq!(
        bank_balance(&app, &user2, TOKEN_A) - user2_a_before,
        share.amount_a
    );
    assert_eq!(
        bank_balance(&app, &user2, TOKEN_B) - user2_b_before,
        share.amount_b
    );
    assert_eq!(cw20_balance(&app, &lp_token_addr, &user1), Uint128::new(707));
    assert_eq!(cw20_balance(&app, &lp_token_addr, &pool_addr), Uint128::zero());
    assert_eq!(
        total_supply(&app, &lp_token_addr),
        supply_before - Uint128::new(707)
    );
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_A), Uint128::new(655));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_B), Uint128::new(1_100));
}

#[test]
fn test_swap_scenarios() {
    let (mut app, cw20_code_id, pool_code_id, user1, user2) = setup_app();
    let (pool_addr, _lp_token_addr) =
        seeded_native_pool(&mut app, pool_code_id, cw20_code_id, &user1);

    // --- Minimum output above what the curve gives ---
    let swap_msg = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::new(182),
        path: native_path(TOKEN_A, TOKEN_B),
        deadline: deadline(&app),
        recipient: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &swap_msg,
            &[coin(100, TOKEN_A)],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Output amount 181 less than minimum requested 182"
    );
    // The failed swap left everything in place
    assert_eq!(bank_balance(&app, &user2, TOKEN_A), Uint128::new(1_000_000));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_A), Uint128::new(1_000));

    // --- Exact output with a ceiling below the required input ---
    let quote: SimulationResponse = app
        .wrap()
        .query_wasm_smart(
            pool_addr.clone(),
            &PoolMsg::QueryMsg::AmountIn {
                amount_out: Uint128::new(181),
                path: native_path(TOKEN_A, TOKEN_B),
            },
        )
        .unwrap();
    assert_eq!(quote.amount_in, Uint128::new(100));

    let swap_deadline = deadline(&app);
    let exact_out = move |max: u128| PoolMsg::ExecuteMsg::SwapTokensForExactTokens {
        amount_out: Uint128::new(181),
        amount_in_max: Uint128::new(max),
        path: native_path(TOKEN_A, TOKEN_B),
        deadline: swap_deadline,
        recipient: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &exact_out(99),
            &[coin(99, TOKEN_A)],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Required input 100 exceeds maximum 99"
    );

    // --- Exact output, overpaying; the surplus comes back ---
    let msg = exact_out(150);
    app.execute_contract(
        user2.clone(),
        pool_addr.clone(),
        &msg,
        &[coin(150, TOKEN_A)],
    )
    .unwrap();
    assert_eq!(bank_balance(&app, &user2, TOKEN_A), Uint128::new(999_900));
    assert_eq!(bank_balance(&app, &user2, TOKEN_B), Uint128::new(1_000_181));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_A), Uint128::new(1_100));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_B), Uint128::new(1_819));

    // --- Spot price in both orientations ---
    let price: PriceResponse = app
        .wrap()
        .query_wasm_smart(
            pool_addr.clone(),
            &PoolMsg::QueryMsg::Price {
                base: AssetInfo::native(TOKEN_A),
                quote: AssetInfo::native(TOKEN_B),
            },
        )
        .unwrap();
    assert_eq!(price.price, Uint256::from(1_653_636_363_636_363_636u128));
    let inverse: PriceResponse = app
        .wrap()
        .query_wasm_smart(
            pool_addr.clone(),
            &PoolMsg::QueryMsg::Price {
                base: AssetInfo::native(TOKEN_B),
                quote: AssetInfo::native(TOKEN_A),
            },
        )
        .unwrap();
    assert!(inverse.price < Uint256::from(1_000_000_000_000_000_000u128));
}

#[test]
fn test_guards_reject_and_roll_back() {
    let (mut app, cw20_code_id, pool_code_id, user1, user2) = setup_app();
    let (pool_addr, lp_token_addr) =
        seeded_native_pool(&mut app, pool_code_id, cw20_code_id, &user1);
    let past = app.block_info().time.minus_seconds(1);

    // --- Expired deadlines ---
    let add_msg = PoolMsg::ExecuteMsg::AddLiquidity {
        amount_a_desired: Uint128::new(100),
        amount_b_desired: Uint128::new(200),
        amount_a_min: Uint128::zero(),
        amount_b_min: Uint128::zero(),
        deadline: past,
        recipient: None,
        assets: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &add_msg,
            &[coin(100, TOKEN_A), coin(200, TOKEN_B)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("has passed"));

    let swap_msg = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::zero(),
        path: native_path(TOKEN_A, TOKEN_B),
        deadline: past,
        recipient: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &swap_msg,
            &[coin(100, TOKEN_A)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("has passed"));

    let expired_hook = Cw20HookMsg::WithdrawLiquidity {
        amount_a_min: Uint128::zero(),
        amount_b_min: Uint128::zero(),
        deadline: past,
        recipient: None,
        assets: None,
    };
    let err = app
        .execute_contract(
            user1.clone(),
            lp_token_addr.clone(),
            &cw20::Cw20ExecuteMsg::Send {
                contract: pool_addr.to_string(),
                amount: Uint128::new(100),
                msg: to_json_binary(&expired_hook).unwrap(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("has passed"));
    // The LP tokens never left user1
    assert_eq!(cw20_balance(&app, &lp_token_addr, &user1), Uint128::new(1_414));

    // --- Funds outside the pair ---
    app.sudo(cw_multi_test::SudoMsg::Bank(BankSudo::Mint {
        to_address: user2.to_string(),
        amount: vec![coin(1_000, "tokenC")],
    }))
    .unwrap();
    let swap_msg = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::zero(),
        path: native_path(TOKEN_A, TOKEN_B),
        deadline: deadline(&app),
        recipient: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &swap_msg,
            &[coin(100, TOKEN_A), coin(5, "tokenC")],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Invalid denom received: tokenC"
    );

    // --- Declared input not attached ---
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &swap_msg,
            &[coin(60, TOKEN_A)],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("does not cover required 100tokenA"));

    // --- Malformed path and foreign asset ---
    let bad_path = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::zero(),
        path: vec![
            AssetInfo::native(TOKEN_A),
            AssetInfo::native(TOKEN_B),
            AssetInfo::native(TOKEN_A),
        ],
        deadline: deadline(&app),
        recipient: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &bad_path,
            &[coin(100, TOKEN_A)],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Swap path must contain exactly 2 assets, got 3"
    );

    let foreign = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::zero(),
        path: native_path("tokenC", TOKEN_B),
        deadline: deadline(&app),
        recipient: None,
    };
    let err = app
        .execute_contract(user2.clone(), pool_addr.clone(), &foreign, &[])
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Assets do not match the pool pair"
    );

    // --- Minimums on a ratio contribution ---
    let strict = PoolMsg::ExecuteMsg::AddLiquidity {
        amount_a_desired: Uint128::new(100),
        amount_b_desired: Uint128::new(300),
        amount_a_min: Uint128::zero(),
        amount_b_min: Uint128::new(250),
        deadline: deadline(&app),
        recipient: None,
        assets: None,
    };
    let err = app
        .execute_contract(
            user2.clone(),
            pool_addr.clone(),
            &strict,
            &[coin(100, TOKEN_A), coin(300, TOKEN_B)],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Optimal amount of asset B 200 below minimum 250"
    );
    assert_eq!(bank_balance(&app, &user2, TOKEN_B), Uint128::new(1_000_000));
}

#[test]
fn test_instantiate_rejects_reversed_pair() {
    let (mut app, cw20_code_id, pool_code_id, _user1, _user2) = setup_app();
    let creator = app.api().addr_make("creator");
    let err = app
        .instantiate_contract(
            pool_code_id,
            creator,
            &PoolMsg::InstantiateMsg {
                asset_a: AssetInfo::native(TOKEN_B),
                asset_b: AssetInfo::native(TOKEN_A),
                lp_token_code_id: cw20_code_id,
                mint_policy: None,
            },
            &[],
            "ConstantProductPool",
            None,
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("must be given in ascending order: tokenB sorts after tokenA"));
}

#[test]
fn test_withdraw_errors() {
    let (mut app, cw20_code_id, pool_code_id, user1, _user2) = setup_app();
    let (pool_addr, _lp_token_addr) =
        seeded_native_pool(&mut app, pool_code_id, cw20_code_id, &user1);

    // --- Test Withdraw From Non-LP Token (Pool hook should reject sender) ---
    let dummy_lp = create_cw20_asset(&mut app, cw20_code_id, &user1);
    let withdraw_hook = Cw20HookMsg::WithdrawLiquidity {
        amount_a_min: Uint128::zero(),
        amount_b_min: Uint128::zero(),
        deadline: deadline(&app),
        recipient: None,
        assets: None,
    };
    let send_msg_wrong_lp = cw20::Cw20ExecuteMsg::Send {
        contract: pool_addr.to_string(),
        amount: Uint128::new(100),
        msg: to_json_binary(&withdraw_hook).unwrap(),
    };
    let err_wrong_lp = app
        .execute_contract(user1.clone(), dummy_lp.clone(), &send_msg_wrong_lp, &[])
        .unwrap_err();
    assert!(err_wrong_lp
        .root_cause()
        .to_string()
        .contains("Only own LP token can trigger withdraw"));
}

#[test]
fn test_cw20_asset_pair() -> anyhow::Result<()> {
    let (mut app, cw20_code_id, pool_code_id, user1, _user2) = setup_app();
    let alpha = create_cw20_asset(&mut app, cw20_code_id, &user1);
    let (pool_addr, lp_token_addr) = create_pool(
        &mut app,
        pool_code_id,
        cw20_code_id,
        AssetInfo::cw20(alpha.clone()),
        AssetInfo::native(TOKEN_B),
    );
    let pool_resp: PoolStateResponse = app
        .wrap()
        .query_wasm_smart(pool_addr.clone(), &PoolMsg::QueryMsg::PoolState {})?;
    assert_eq!(pool_resp.asset_a, AssetInfo::cw20(alpha.clone()));
    assert_eq!(pool_resp.asset_b, AssetInfo::native(TOKEN_B));

    // --- Without an allowance the whole deposit is rolled back ---
    let msg = add_liquidity_msg(&app, 1_000, 2_000);
    let err = app
        .execute_contract(
            user1.clone(),
            pool_addr.clone(),
            &msg,
            &[coin(2_000, TOKEN_B)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("No allowance"));
    assert_eq!(bank_balance(&app, &user1, TOKEN_B), Uint128::new(1_000_000));
    assert_eq!(cw20_balance(&app, &alpha, &user1), Uint128::new(100_000));
    assert_eq!(total_supply(&app, &lp_token_addr), Uint128::zero());

    // --- With an allowance ---
    let allow = |amount: u128| cw20::Cw20ExecuteMsg::IncreaseAllowance {
        spender: pool_addr.to_string(),
        amount: Uint128::new(amount),
        expires: None,
    };
    app.execute_contract(user1.clone(), alpha.clone(), &allow(1_000), &[])?;
    app.execute_contract(
        user1.clone(),
        pool_addr.clone(),
        &msg,
        &[coin(2_000, TOKEN_B)],
    )?;
    assert_eq!(cw20_balance(&app, &alpha, &pool_addr), Uint128::new(1_000));
    assert_eq!(bank_balance(&app, &pool_addr, TOKEN_B), Uint128::new(2_000));
    assert_eq!(cw20_balance(&app, &lp_token_addr, &user1), Uint128::new(1_414));

    // --- cw20 in, native out ---
    app.execute_contract(user1.clone(), alpha.clone(), &allow(100), &[])?;
    let swap_msg = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::new(181),
        path: vec![AssetInfo::cw20(alpha.clone()), AssetInfo::native(TOKEN_B)],
        deadline: deadline(&app),
        recipient: None,
    };
    app.execute_contract(user1.clone(), pool_addr.clone(), &swap_msg, &[])?;
    assert_eq!(bank_balance(&app, &user1, TOKEN_B), Uint128::new(998_181));
    assert_eq!(cw20_balance(&app, &alpha, &pool_addr), Uint128::new(1_100));

    // --- native in, cw20 out ---
    let swap_back = PoolMsg::ExecuteMsg::SwapExactTokensForTokens {
        amount_in: Uint128::new(100),
        amount_out_min: Uint128::new(57),
        path: vec![AssetInfo::native(TOKEN_B), AssetInfo::cw20(alpha.clone())],
        deadline: deadline(&app),
        recipient: None,
    };
    let alpha_before = cw20_balance(&app, &alpha, &user1);
    app.execute_contract(
        user1.clone(),
        pool_addr.clone(),
        &swap_back,
        &[Coin {
            denom: TOKEN_B.into(),
            amount: Uint128::new(100),
        }],
    )?;
    assert_eq!(
        cw20_balance(&app, &alpha, &user1) - alpha_before,
        Uint128::new(57)
    );
    Ok(())
}

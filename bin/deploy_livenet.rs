//! Deploy the staking contracts to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional:
//!   LATTICE_STAKING_TOKEN=hash-...        reuse an existing CEP-18 token
//!   LATTICE_STAKE_TOKEN_SUPPLY=1000000    whole tokens minted to the deployer
//!   LATTICE_DEPLOYMENT_FILE=deployment.json

use std::str::FromStr;

use odra::casper_types::{Key, U256};
use odra::host::{Deployer, HostRef};
use odra::prelude::*;
use serde::Serialize;

use lattice_staking_contracts::stake_token::{StakeToken, StakeTokenInitArgs};
use lattice_staking_contracts::staking_pool::{LatticeStakingPool, LatticeStakingPoolInitArgs};

const STAKE_TOKEN_DECIMALS: u8 = 8;
const DEFAULT_STAKE_TOKEN_SUPPLY: u64 = 1_000_000;

#[derive(Serialize)]
struct DeploymentRecord {
    chain_name: String,
    deployer: String,
    staking_token: String,
    staking_token_deployed: bool,
    staking_pool: String,
}

fn formatted(address: Address) -> String {
    Key::from(address).to_formatted_string()
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== Lattice Staking Livenet Deployment ===");
    println!();

    let env = odra_casper_livenet_env::env();

    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // ==================== Phase 1: Staking Token ====================
    println!("=== Phase 1: Staking Token ===");
    println!();

    let existing_token = std::env::var("LATTICE_STAKING_TOKEN")
        .ok()
        .filter(|v| !v.is_empty());
    let (staking_token, staking_token_deployed) = match existing_token {
        Some(raw) => {
            let address = Address::from_str(&raw)
                .unwrap_or_else(|_| panic!("LATTICE_STAKING_TOKEN is not a valid address: {raw}"));
            println!("Using existing staking token at: {:?}", address);
            (address, false)
        }
        None => {
            let supply_whole: u64 = std::env::var("LATTICE_STAKE_TOKEN_SUPPLY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_STAKE_TOKEN_SUPPLY);
            let initial_supply = U256::from(supply_whole)
                * U256::from(10u64).pow(U256::from(STAKE_TOKEN_DECIMALS));

            println!("Deploying StakeToken ({} whole tokens)...", supply_whole);
            let token = StakeToken::deploy(
                &env,
                StakeTokenInitArgs {
                    name: "Lattice Stake".to_string(),
                    symbol: "LSTK".to_string(),
                    decimals: STAKE_TOKEN_DECIMALS,
                    initial_supply,
                },
            );
            let address = token.address().clone();
            println!("StakeToken deployed at: {:?}", address);
            (address, true)
        }
    };

    println!();

    // ==================== Phase 2: Staking Pool ====================
    println!("=== Phase 2: Staking Pool ===");
    println!();

    println!("Deploying LatticeStakingPool...");
    let staking_pool = LatticeStakingPool::deploy(&env, LatticeStakingPoolInitArgs { staking_token });
    let staking_pool_addr = staking_pool.address().clone();
    println!("LatticeStakingPool deployed at: {:?}", staking_pool_addr);

    println!();
    println!("=== Deployment Complete ===");
    println!();

    let record = DeploymentRecord {
        chain_name: std::env::var("ODRA_CASPER_LIVENET_CHAIN_NAME").unwrap_or_default(),
        deployer: formatted(deployer),
        staking_token: formatted(staking_token),
        staking_token_deployed,
        staking_pool: formatted(staking_pool_addr),
    };

    let output_path = std::env::var("LATTICE_DEPLOYMENT_FILE")
        .unwrap_or_else(|_| "deployment.json".to_string());
    match serde_json::to_string_pretty(&record) {
        Ok(json) => {
            println!("{}", json);
            match std::fs::write(&output_path, json) {
                Ok(()) => println!("Deployment record written to {}", output_path),
                Err(e) => eprintln!("Could not write {}: {}", output_path, e),
            }
        }
        Err(e) => eprintln!("Could not serialize deployment record: {}", e),
    }
}

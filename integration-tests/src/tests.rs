use helpers::*;
use near_units::parse_near;
use near_workspaces::network::Sandbox;
use near_workspaces::types::{Gas, NearToken, SecretKey};
use near_workspaces::{Account, Contract, Worker};
use serde_json::json;

mod helpers;

const LINKDROP_WASM_PATH: &str = "./out/linkdrop.wasm";
const TLA_WASM_PATH: &str = "./aux/tla.wasm";
const FT_WASM_PATH: &str = "./aux/fungible_token.wasm";

fn read_wasm(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading wasm file {}: {}", path, err);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initiate environment
    let worker = near_workspaces::sandbox().await?;

    // The root account doubles as the top level account factory
    let root = worker.root_account()?;
    root.deploy(&read_wasm(TLA_WASM_PATH)).await?.into_result()?;

    // deploy and initialize the linkdrop contract
    let contract_account = root
        .create_subaccount("contract")
        .initial_balance(NearToken::from_near(10))
        .transact()
        .await?
        .into_result()?;
    let contract = contract_account
        .deploy(&read_wasm(LINKDROP_WASM_PATH))
        .await?
        .into_result()?;
    contract
        .call("new")
        .args_json(json!({ "top_level_account": root.id() }))
        .transact()
        .await?
        .into_result()?;

    // create test accounts
    let creator = root
        .create_subaccount("creator")
        .initial_balance(NearToken::from_near(30))
        .transact()
        .await?
        .into_result()?;
    let alice = root
        .create_subaccount("alice")
        .initial_balance(NearToken::from_near(30))
        .transact()
        .await?
        .into_result()?;

    // begin tests
    drop_on_existing_account(&worker, &contract, &creator, &alice).await?;
    drop_on_new_account(&worker, &contract, &creator).await?;
    drop_on_new_account_with_no_money(&worker, &contract, &creator).await?;
    ft_drop_on_existing_account(&worker, &contract, &root, &creator, &alice).await?;
    Ok(())
}

/// Sign as the contract with the drop's one-time key. The key was added as a
/// function call access key, so this is how a link holder claims.
fn key_holder(worker: &Worker<Sandbox>, contract: &Contract, sk: &SecretKey) -> Account {
    Account::from_secret_key(contract.id().clone(), sk.clone(), worker)
}

async fn drop_on_existing_account(
    worker: &Worker<Sandbox>,
    contract: &Contract,
    creator: &Account,
    alice: &Account,
) -> anyhow::Result<()> {
    // Check the account balances
    let contract_balance = contract.view_account().await?.balance;
    let alice_balance = alice.view_account().await?.balance;

    // Create a keypair and register it as a 1 N drop
    let sk = generate_keypairs(1).remove(0);
    let res = creator
        .call(contract.id(), "create_near_drop")
        .args_json(json!({
            "public_key": sk.public_key(),
            "tokens": parse_near!("1 N").to_string(),
        }))
        .deposit(NearToken::from_yoctonear(parse_near!("1.0264 N")))
        .transact()
        .await?;
    assert!(res.is_success());

    // Use the key to claim the drop for alice
    let claim = key_holder(worker, contract, &sk)
        .call(contract.id(), "claim_for")
        .args_json(json!({ "account_id": alice.id() }))
        .gas(Gas::from_tgas(85))
        .transact()
        .await?;
    assert!(claim.json::<bool>()?);

    // The new balance should be exactly one near more
    let alice_new_balance = alice.view_account().await?.balance;
    assert_eq!(
        alice_new_balance.as_yoctonear(),
        alice_balance.as_yoctonear() + parse_near!("1 N")
    );

    // Try to use the key again
    let again = key_holder(worker, contract, &sk)
        .call(contract.id(), "claim_for")
        .args_json(json!({ "account_id": alice.id() }))
        .gas(Gas::from_tgas(85))
        .transact()
        .await;
    assert_claim_rejected(again);

    // There should be no deficit in the contract
    let contract_new_balance = contract.view_account().await?.balance;
    assert!(contract_new_balance.as_yoctonear() >= contract_balance.as_yoctonear());
    println!(
        "EA - Contract balance surplus: {}",
        contract_new_balance.as_yoctonear() - contract_balance.as_yoctonear()
    );

    println!("      Passed ✅ drop on an existing account");
    Ok(())
}

async fn drop_on_new_account(
    worker: &Worker<Sandbox>,
    contract: &Contract,
    creator: &Account,
) -> anyhow::Result<()> {
    let contract_balance = contract.view_account().await?.balance;

    let sk = generate_keypairs(1).remove(0);
    let res = creator
        .call(contract.id(), "create_near_drop")
        .args_json(json!({
            "public_key": sk.public_key(),
            "tokens": parse_near!("1 N").to_string(),
        }))
        .deposit(NearToken::from_yoctonear(parse_near!("1.0264 N")))
        .transact()
        .await?;
    assert!(res.is_success());

    // Claim on the longest possible account name
    let long_id = "a12345678901234567890123456789012345678901234567890123.test.near";
    let claim = key_holder(worker, contract, &sk)
        .call(contract.id(), "create_account_and_claim")
        .args_json(json!({ "account_id": long_id }))
        .gas(Gas::from_tgas(100))
        .transact()
        .await?;
    assert!(claim.json::<bool>()?);

    // Check the balance of the new account
    let long_balance = worker.view_account(&long_id.parse()?).await?.balance;
    println!("Long account balance: {}", long_balance.as_yoctonear());
    assert!(long_balance.as_yoctonear() >= parse_near!("1 N"));

    // Try to call again and check it fails
    let again = key_holder(worker, contract, &sk)
        .call(contract.id(), "create_account_and_claim")
        .args_json(json!({ "account_id": long_id }))
        .gas(Gas::from_tgas(100))
        .transact()
        .await;
    assert_claim_rejected(again);

    let contract_new_balance = contract.view_account().await?.balance;
    assert!(contract_new_balance.as_yoctonear() >= contract_balance.as_yoctonear());
    println!(
        "NA - Contract surplus: {}",
        contract_new_balance.as_yoctonear() - contract_balance.as_yoctonear()
    );

    println!("      Passed ✅ drop on a new account");
    Ok(())
}

async fn drop_on_new_account_with_no_money(
    worker: &Worker<Sandbox>,
    contract: &Contract,
    creator: &Account,
) -> anyhow::Result<()> {
    let contract_balance = contract.view_account().await?.balance;

    // A 1 yoctoNEAR drop funded with the bare minimum
    let sk = generate_keypairs(1).remove(0);
    let res = creator
        .call(contract.id(), "create_near_drop")
        .args_json(json!({
            "public_key": sk.public_key(),
            "tokens": "1",
        }))
        .deposit(NearToken::from_yoctonear(parse_near!("0.0254 N") + 1))
        .transact()
        .await?;
    assert!(res.is_success());

    let long_id = "b12345678901234567890123456789012345678901234567890123.test.near";
    let claim = key_holder(worker, contract, &sk)
        .call(contract.id(), "create_account_and_claim")
        .args_json(json!({ "account_id": long_id }))
        .gas(Gas::from_tgas(100))
        .transact()
        .await?;
    assert!(claim.json::<bool>()?);

    let long_balance = worker.view_account(&long_id.parse()?).await?.balance;
    println!("1yN account balance: {}", long_balance.as_yoctonear());

    let again = key_holder(worker, contract, &sk)
        .call(contract.id(), "create_account_and_claim")
        .args_json(json!({ "account_id": long_id }))
        .gas(Gas::from_tgas(100))
        .transact()
        .await;
    assert_claim_rejected(again);

    let contract_new_balance = contract.view_account().await?.balance;
    assert!(contract_new_balance.as_yoctonear() >= contract_balance.as_yoctonear());
    println!(
        "1yN - Contract surplus: {}",
        contract_new_balance.as_yoctonear() - contract_balance.as_yoctonear()
    );

    println!("      Passed ✅ drop on a new account with no money");
    Ok(())
}

async fn ft_drop_on_existing_account(
    worker: &Worker<Sandbox>,
    contract: &Contract,
    root: &Account,
    creator: &Account,
    alice: &Account,
) -> anyhow::Result<()> {
    // Deploy and initialize the token contract
    let ft_account = root
        .create_subaccount("ft")
        .initial_balance(NearToken::from_near(10))
        .transact()
        .await?
        .into_result()?;
    let ft = ft_account
        .deploy(&read_wasm(FT_WASM_PATH))
        .await?
        .into_result()?;
    ft.call("new_default_meta")
        .args_json(json!({
            "owner_id": creator.id(),
            "total_supply": "1000000000000000000000000",
        }))
        .transact()
        .await?
        .into_result()?;

    let contract_balance = contract.view_account().await?.balance;

    // Open the drop, then fund it through the token contract
    let sk = generate_keypairs(1).remove(0);
    let res = creator
        .call(contract.id(), "create_ft_drop")
        .args_json(json!({
            "public_key": sk.public_key(),
            "ft_contract": ft.id(),
        }))
        .deposit(NearToken::from_yoctonear(46_040_000_000_000_000_000_000))
        .transact()
        .await?;
    assert!(res.is_success());

    creator
        .call(ft.id(), "storage_deposit")
        .args_json(json!({ "account_id": contract.id() }))
        .deposit(NearToken::from_yoctonear(parse_near!("0.0125 N")))
        .transact()
        .await?
        .into_result()?;
    creator
        .call(ft.id(), "ft_transfer_call")
        .args_json(json!({
            "receiver_id": contract.id(),
            "amount": "1",
            "msg": sk.public_key(),
        }))
        .deposit(NearToken::from_yoctonear(1))
        .gas(Gas::from_tgas(300))
        .transact()
        .await?
        .into_result()?;

    // Use the key to claim the token for alice
    let claim = key_holder(worker, contract, &sk)
        .call(contract.id(), "claim_for")
        .args_json(json!({ "account_id": alice.id() }))
        .gas(Gas::from_tgas(150))
        .transact()
        .await?;
    assert!(claim.json::<bool>()?);

    // Alice should now hold exactly the dropped token
    let alice_tokens: String = ft
        .view("ft_balance_of")
        .args_json(json!({ "account_id": alice.id() }))
        .await?
        .json()?;
    assert_eq!(alice_tokens, "1");

    // Try to use the key again
    let again = key_holder(worker, contract, &sk)
        .call(contract.id(), "claim_for")
        .args_json(json!({ "account_id": alice.id() }))
        .gas(Gas::from_tgas(150))
        .transact()
        .await;
    assert_claim_rejected(again);

    let contract_new_balance = contract.view_account().await?.balance;
    assert!(contract_new_balance.as_yoctonear() >= contract_balance.as_yoctonear());
    println!(
        "FT - Contract balance surplus: {}",
        contract_new_balance.as_yoctonear() - contract_balance.as_yoctonear()
    );

    println!("      Passed ✅ ft drop on an existing account");
    Ok(())
}

use alloy::primitives::Address;
use alloy::rpc::types::TransactionReceipt;
use clap::{Args, Parser, Subcommand};
use eyre::{Result, eyre};
use gastank_core::{
    DispatchDecision, OperatorConfig, PrivilegedCall, SaltPolicy, SignerKind, TimelockClient,
    actions::{
        action::Action, add_payee_action::AddPayee, approve_payee_action::ApprovePayee,
        deposit_gas_action::DepositGas, emergency_withdraw_action::EmergencyWithdraw,
        pay_action::Pay, remove_payee_action::RemovePayee, withdraw_gas_action::WithdrawGas,
    },
    connect, connect_read_only, preview,
    utils::parse::{parse_address, parse_amount, parse_hash},
};
use log::{info, warn};
use serde_json::{Value, json};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (defaults to config.toml, then the environment)
    #[arg(long = "config", short = 'c', global = true)]
    config: Option<String>,

    /// Use Trezor hardware wallet
    #[arg(long = "trezor", short = 't', global = true, conflicts_with = "ledger")]
    trezor: bool,

    /// Use Ledger hardware wallet
    #[arg(long = "ledger", short = 'l', global = true, conflicts_with = "trezor")]
    ledger: bool,

    /// Print the encoded transaction instead of sending it
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct AmountArgs {
    /// Amount as a decimal number
    #[arg(long = "amount", short = 'a')]
    amount: String,

    /// Unit of the amount (wei, gwei, ether, ...)
    #[arg(long = "unit", short = 'u', default_value = "wei")]
    unit: String,
}

#[derive(Args)]
struct DispatchArgs {
    /// Schedule through the timelock instead of executing now
    #[arg(long = "schedule", short = 's')]
    schedule: bool,

    /// Delay in seconds, defaults to the timelock's minimum delay
    #[arg(long = "delay", short = 'd', requires = "schedule")]
    delay: Option<u64>,

    /// 32 byte hex salt for the timelock operation
    #[arg(long = "salt", conflicts_with = "random_salt")]
    salt: Option<String>,

    /// Use a fresh random salt so identical operations do not collide
    #[arg(long = "random-salt")]
    random_salt: bool,

    /// 32 byte hex id of an operation that must be executed first
    #[arg(long = "predecessor")]
    predecessor: Option<String>,

    /// Call the GasTank from the signer instead of going through the timelock
    #[arg(long = "direct", conflicts_with_all = ["schedule", "salt", "random_salt", "predecessor"])]
    direct: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Deposit gas for a receiver
    DepositGas {
        /// Address credited with the deposit
        #[arg(long = "receiver", short = 'r')]
        receiver: String,

        #[command(flatten)]
        amount: AmountArgs,
    },
    /// Withdraw part of the signer's deposit
    WithdrawGas {
        #[command(flatten)]
        amount: AmountArgs,
    },
    /// Pay a payee from a payer's deposit
    Pay {
        /// Address whose deposit is charged
        #[arg(long = "payer")]
        payer: String,

        /// Payee address, defaults to the configured payee
        #[arg(long = "payee", short = 'p')]
        payee: Option<String>,

        #[command(flatten)]
        amount: AmountArgs,
    },
    /// Approve or revoke a payee for the signer's deposit
    Approve {
        /// Payee address, defaults to the configured payee
        #[arg(long = "payee", short = 'p')]
        payee: Option<String>,

        /// Whether the payee is approved
        #[arg(long = "approved", default_value_t = true, action = clap::ArgAction::Set)]
        approved: bool,
    },
    /// Add a payee through the timelock
    AddPayee {
        /// Payee address, defaults to the configured payee
        #[arg(long = "payee", short = 'p')]
        payee: Option<String>,

        #[command(flatten)]
        dispatch: DispatchArgs,
    },
    /// Remove a payee through the timelock
    RemovePayee {
        /// Payee address, defaults to the configured payee
        #[arg(long = "payee", short = 'p')]
        payee: Option<String>,

        #[command(flatten)]
        dispatch: DispatchArgs,
    },
    /// Withdraw tokens held by the GasTank through the timelock
    EmergencyWithdraw {
        /// Token address
        #[arg(long = "token")]
        token: String,

        #[command(flatten)]
        amount: AmountArgs,

        #[command(flatten)]
        dispatch: DispatchArgs,
    },
    /// Print the timelock's minimum delay
    MinDelay,
    /// Print the state of a timelock operation
    OperationState {
        /// Operation id (32 byte hex)
        #[arg(long = "id")]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = OperatorConfig::load(cli.config.as_deref())?;
    let signer_kind = match (cli.trezor, cli.ledger) {
        (true, _) => SignerKind::Trezor,
        (_, true) => SignerKind::Ledger,
        _ => SignerKind::PrivateKey,
    };
    let gas_tank = config.gas_tank;

    match &cli.command {
        Commands::DepositGas { receiver, amount } => {
            let action = DepositGas::new(
                gas_tank,
                parse_address(receiver)?,
                parse_amount(&amount.amount, &amount.unit)?,
            );
            run_direct(&config, signer_kind, &action, cli.dry_run).await?;
        }
        Commands::WithdrawGas { amount } => {
            let action = WithdrawGas::new(gas_tank, parse_amount(&amount.amount, &amount.unit)?);
            run_direct(&config, signer_kind, &action, cli.dry_run).await?;
        }
        Commands::Pay {
            payer,
            payee,
            amount,
        } => {
            let action = Pay::new(
                gas_tank,
                parse_address(payer)?,
                resolve_payee(&config, payee.as_deref())?,
                parse_amount(&amount.amount, &amount.unit)?,
            );
            run_direct(&config, signer_kind, &action, cli.dry_run).await?;
        }
        Commands::Approve { payee, approved } => {
            let action =
                ApprovePayee::new(gas_tank, resolve_payee(&config, payee.as_deref())?, *approved);
            run_direct(&config, signer_kind, &action, cli.dry_run).await?;
        }
        Commands::AddPayee { payee, dispatch } => {
            let action = AddPayee::new(gas_tank, resolve_payee(&config, payee.as_deref())?);
            run_governed(&config, signer_kind, &action, dispatch, cli.dry_run).await?;
        }
        Commands::RemovePayee { payee, dispatch } => {
            let action = RemovePayee::new(gas_tank, resolve_payee(&config, payee.as_deref())?);
            run_governed(&config, signer_kind, &action, dispatch, cli.dry_run).await?;
        }
        Commands::EmergencyWithdraw {
            token,
            amount,
            dispatch,
        } => {
            let action = EmergencyWithdraw::new(
                gas_tank,
                parse_address(token)?,
                parse_amount(&amount.amount, &amount.unit)?,
            );
            run_governed(&config, signer_kind, &action, dispatch, cli.dry_run).await?;
        }
        Commands::MinDelay => {
            let timelock = connect_read_only(&config).await?;
            println!("Minimum Delay: {}s", timelock.min_delay().await?);
        }
        Commands::OperationState { id } => {
            let timelock = connect_read_only(&config).await?;
            let state = timelock.operation_state(parse_hash(id)?).await?;
            println!("Operation State: {}", state);
        }
    }

    Ok(())
}

fn resolve_payee(config: &OperatorConfig, payee: Option<&str>) -> Result<Address> {
    match payee {
        Some(p) => Ok(parse_address(p)?),
        None => config.payee(),
    }
}

fn salt_policy(args: &DispatchArgs) -> Result<SaltPolicy> {
    Ok(match (&args.salt, args.random_salt) {
        (Some(salt), _) => SaltPolicy::Fixed(parse_hash(salt)?),
        (None, true) => SaltPolicy::Random,
        (None, false) => SaltPolicy::Zero,
    })
}

async fn run_direct(
    config: &OperatorConfig,
    signer_kind: SignerKind,
    action: &dyn Action,
    dry_run: bool,
) -> Result<()> {
    if action.requires_timelock() {
        warn!("Sending a timelock-gated call directly, this only succeeds if the signer owns the GasTank");
    }
    if dry_run {
        return print_unsent(action, None);
    }

    let client = connect(config.clone(), signer_kind).await?;
    let receipt = client.send_direct(action).await?;
    print_receipt(config, action.describe(), &receipt)
}

async fn run_governed(
    config: &OperatorConfig,
    signer_kind: SignerKind,
    action: &dyn Action,
    args: &DispatchArgs,
    dry_run: bool,
) -> Result<()> {
    if args.direct {
        return run_direct(config, signer_kind, action, dry_run).await;
    }

    let mut call = PrivilegedCall::from_action(action).with_salt(salt_policy(args)?.resolve());
    if let Some(predecessor) = &args.predecessor {
        call = call.with_predecessor(parse_hash(predecessor)?);
    }

    let decision = if args.schedule {
        let delay = match args.delay {
            Some(delay) => delay,
            None => {
                let min_delay = connect_read_only(config).await?.min_delay().await?;
                info!("No delay given, using the timelock minimum of {}s", min_delay);
                u64::try_from(min_delay)
                    .map_err(|_| eyre!("Minimum delay {} does not fit in u64", min_delay))?
            }
        };
        DispatchDecision::scheduled(delay)
    } else {
        DispatchDecision::immediate()
    };

    let timelock_action = preview(config.timelock, &call, &decision);
    if dry_run {
        return print_unsent(&timelock_action, Some(&call));
    }

    let client = connect(config.clone(), signer_kind).await?;
    let receipt = client.dispatch(&call, &decision).await?;
    print_receipt(config, timelock_action.describe(), &receipt)?;
    if decision.schedule {
        println!("\n## Operation Id");
        println!("`{}`", call.operation_id());
    }

    Ok(())
}

fn print_unsent(action: &dyn Action, call: Option<&PrivilegedCall>) -> Result<()> {
    let mut tx = json!({
        "to": action.target().to_string(),
        "value": action.value().to_string(),
        "data": format!("0x{}", hex::encode(action.data())),
    });
    if let Some(call) = call {
        tx["operation_id"] = Value::String(call.operation_id().to_string());
    }

    println!("\n# Unsent Transaction");
    println!("```json");
    println!("{}", serde_json::to_string_pretty(&tx)?);
    println!("```");

    println!("\n## Action");
    println!("```json");
    println!("{}", serde_json::to_string_pretty(&action.describe())?);
    println!("```");

    Ok(())
}

fn print_receipt(
    config: &OperatorConfig,
    description: Value,
    receipt: &TransactionReceipt,
) -> Result<()> {
    let tx_hash = receipt.transaction_hash.to_string();

    println!("\n# Transaction Summary");
    println!("\n## Action");
    println!("```json");
    println!("{}", serde_json::to_string_pretty(&description)?);
    println!("```");

    println!("\n## Receipt");
    println!("- Hash: `{}`", tx_hash);
    match receipt.block_number {
        Some(block) => println!("- Block: {}", block),
        None => println!("- Block: pending"),
    }

    if let Some(url) = config.transaction_url(&tx_hash) {
        println!("\n## Links");
        println!("- [Transaction]({})", url);
    }

    Ok(())
}

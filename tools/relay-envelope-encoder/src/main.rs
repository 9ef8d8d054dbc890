use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy_primitives::{Address, U256};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use relay_envelope_encoder::{
    encoder::{
        build_envelope, decode_envelope_hex, decode_handle_calldata, derive_message_id,
        handle_calldata, parse_hex, relay_calldata, to_hex,
    },
    simulate::{simulate_delivery, DryRunDispatcher},
    types::{BatchSpec, EnvelopeJson},
};

/// Encode and inspect relay envelopes and adapter calldata.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print `relay(calls, gasLimit)` calldata for a batch file.
    RelayCalldata {
        /// JSON batch file (`{ "gasLimit": .., "calls": [..] }`).
        #[arg(long)]
        batch: PathBuf,
    },

    /// Print the message id the sender adapter derives for a nonce.
    MessageId {
        #[arg(long)]
        nonce: U256,

        #[arg(long, env = "SOURCE_CHAIN_ID")]
        chain_id: u64,

        /// Sender adapter address.
        #[arg(long, env = "RELAY_SENDER")]
        relayer: Address,
    },

    /// Decode a hex envelope, or `handle(...)` calldata with `--handle`, to JSON.
    DecodeEnvelope {
        /// Hex payload (0x-prefixed or bare).
        input: String,

        #[arg(long)]
        handle: bool,
    },

    /// Print `handle(origin, sender, message)` calldata as the mailbox would deliver it.
    HandleCalldata {
        #[arg(long)]
        batch: PathBuf,

        #[arg(long)]
        nonce: U256,

        #[arg(long, env = "SOURCE_CHAIN_ID")]
        chain_id: u64,

        /// Original caller of `relay` on the source chain.
        #[arg(long)]
        source_sender: Address,

        #[arg(long, env = "RELAY_SENDER")]
        relayer: Address,
    },

    /// Execute a hex envelope against a dry-run dispatcher and print the forwarded calls.
    Simulate {
        input: String,

        /// Pretend this target reverts.
        #[arg(long)]
        fail_target: Option<Address>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::RelayCalldata { batch } => {
            let batch = read_batch(&batch)?;
            println!("{}", to_hex(&relay_calldata(&batch)));
        }
        Command::MessageId {
            nonce,
            chain_id,
            relayer,
        } => {
            println!("{}", derive_message_id(nonce, chain_id, relayer));
        }
        Command::DecodeEnvelope { input, handle } => {
            if handle {
                let (origin, sender, envelope) = decode_handle_calldata(&input)?;
                let out = serde_json::json!({
                    "origin": origin,
                    "sender": sender,
                    "envelope": envelope,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                let envelope = decode_envelope_hex(&input)?;
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            }
        }
        Command::HandleCalldata {
            batch,
            nonce,
            chain_id,
            source_sender,
            relayer,
        } => {
            let batch = read_batch(&batch)?;
            let envelope = build_envelope(&batch, nonce, chain_id, source_sender, relayer);
            println!("{}", to_hex(&handle_calldata(&envelope, relayer)?));
        }
        Command::Simulate { input, fail_target } => {
            let bytes = parse_hex(&input)?;
            let envelope = relay_envelope::decode_envelope(&bytes)
                .map_err(|e| anyhow!("invalid envelope: {e:?}"))?;
            let mut dispatcher = DryRunDispatcher {
                fail_target,
                ..Default::default()
            };
            let outcome = simulate_delivery(&envelope, &mut dispatcher);

            println!("{}", serde_json::to_string_pretty(&EnvelopeJson::from(&envelope))?);
            for (index, (target, calldata, gas)) in dispatcher.calls.iter().enumerate() {
                println!("call {index}: target={target} gas={gas} calldata={}", to_hex(calldata));
            }
            match outcome {
                Ok(done) => println!(
                    "DeliveryExecuted(sourceChainId={}, messageId={})",
                    done.source_chain_id, done.message_id
                ),
                Err(err) => return Err(anyhow!("delivery would revert: {err:?}")),
            }
        }
    }
    Ok(())
}

fn read_batch(path: &Path) -> Result<BatchSpec> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid batch JSON in {}", path.display()))
}

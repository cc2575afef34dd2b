// src/bin/pw_stash.rs
//! pw-stash CLI — init, verify, and manage sealed password entries

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pw_stash::aliases::MasterPassword;
use pw_stash::consts::{DEFAULT_EXPORT_FILE, DEFAULT_PLAIN_EXPORT_FILE};
use pw_stash::export::{export_plain_to_json, export_to_json};
use pw_stash::keygen::suggest_password;
use pw_stash::stash::Stash;
use rpassword::read_password;
use std::io::Write;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Local password stash sealed under a master password")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the stash directory and seal the master password
    Init,
    /// Check the master password against the sealed master file
    Verify,
    /// List entry names
    List,
    /// Decrypt and print one entry
    Get { name: String },
    /// Add a new entry (value prompted unless --value is given)
    Add {
        name: String,
        #[arg(long)]
        value: Option<String>,
    },
    /// Overwrite an existing entry
    Update {
        name: String,
        #[arg(long)]
        value: Option<String>,
    },
    /// Delete an entry
    Remove { name: String },
    /// Export all entries (encrypted) as JSON
    Export {
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: String,
    },
    /// Export all entries decrypted as JSON (requires allow_insecure_export)
    ExportPlain {
        #[arg(short, long, default_value = DEFAULT_PLAIN_EXPORT_FILE)]
        output: String,
    },
    /// Generate a random 64-character hex password
    Suggest,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Command::Suggest = cli.command {
        println!("{}", suggest_password());
        return Ok(());
    }

    let config = pw_stash::config::load();
    let stash_dir = &config.paths.stash_dir;
    let master = read_master()?;

    match cli.command {
        Command::Init => {
            let stash = Stash::init(stash_dir, master).context("failed to initialise stash")?;
            info!("Stash initialised at {}", stash.root().display());
        }
        Command::Verify => {
            Stash::open(stash_dir, master)
                .context("master password verification failed — is the stash initialised?")?;
            info!("Master password OK");
        }
        Command::List => {
            let stash = open(stash_dir, master)?;
            for name in stash.list()? {
                println!("{name}");
            }
        }
        Command::Get { name } => {
            let stash = open(stash_dir, master)?;
            let value = stash.get(&name)?;
            println!("{}", value.expose_secret());
        }
        Command::Add { name, value } => {
            let stash = open(stash_dir, master)?;
            let value = resolve_value(&name, value)?;
            stash.add(&name, &value)?;
            info!("Added {name}");
        }
        Command::Update { name, value } => {
            let stash = open(stash_dir, master)?;
            let value = resolve_value(&name, value)?;
            stash.update(&name, &value)?;
            info!("Updated {name}");
        }
        Command::Remove { name } => {
            let stash = open(stash_dir, master)?;
            stash.remove(&name)?;
            info!("Removed {name}");
        }
        Command::Export { output } => {
            let stash = open(stash_dir, master)?;
            export_to_json(&stash, &output)?;
            info!("Exported encrypted entries → {output}");
        }
        Command::ExportPlain { output } => {
            let stash = open(stash_dir, master)?;
            export_plain_to_json(&stash, &output)?;
            info!("Exported PLAINTEXT entries → {output} — encrypt or delete it now");
        }
        Command::Suggest => unreachable!("handled above"),
    }

    Ok(())
}

fn open(stash_dir: &str, master: MasterPassword) -> Result<Stash> {
    Stash::open(stash_dir, master)
        .with_context(|| format!("failed to open stash at {stash_dir} — run `pw-stash init`?"))
}

/// Master password from PWS_MASTER_PW, or prompted without echo.
fn read_master() -> Result<MasterPassword> {
    if let Ok(pw) = std::env::var("PWS_MASTER_PW") {
        return Ok(MasterPassword::new(pw));
    }
    print!("Master password: ");
    std::io::stdout().flush()?;
    let pw = read_password()?;
    Ok(MasterPassword::new(pw.trim_end().to_owned()))
}

fn resolve_value(name: &str, value: Option<String>) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    print!("Value for {name}: ");
    std::io::stdout().flush()?;
    let v = read_password()?;
    Ok(v.trim_end().to_owned())
}

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blocksmith")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "mine",
        about = "Assemble and mine a candidate block from the mempool"
    )]
    Mine {
        #[arg(help = "Directory of transaction record files (defaults to MEMPOOL_DIR)")]
        mempool: Option<String>,
        #[arg(help = "Report file to write (defaults to OUTPUT_FILE)")]
        output: Option<String>,
        #[arg(
            long = "max-nonce",
            help = "Abort the nonce search after this many attempts"
        )]
        max_nonce: Option<u64>,
    },
    #[command(
        name = "validate",
        about = "Check mempool records for structural validity without mining"
    )]
    Validate {
        #[arg(help = "Directory of transaction record files (defaults to MEMPOOL_DIR)")]
        mempool: Option<String>,
    },
}

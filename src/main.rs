// This is my main entry point for the block assembler CLI
// The pipeline runs in one pass: load -> validate -> fees -> coinbase ->
// merkle commitment -> nonce search -> report.
use blocksmith::{
    assemble_block, build_coinbase, filter_valid, load_mempool, total_fees, validate_transaction,
    write_report, Command, LogSink, Opt, GLOBAL_CONFIG,
};
use clap::Parser;
use log::{error, info, LevelFilter};
use std::path::PathBuf;
use std::process;

fn main() {
    // I initialize logging so I can see what the pipeline is doing
    // Info level gives me enough detail without being too verbose
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    // I run the actual command and handle any errors that might occur
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // The full assembly run: everything from mempool to report
        Command::Mine {
            mempool,
            output,
            max_nonce,
        } => {
            // CLI arguments override whatever the environment configured
            if let Some(dir) = mempool {
                GLOBAL_CONFIG.set_mempool_dir(dir);
            }
            if let Some(path) = output {
                GLOBAL_CONFIG.set_output_file(path);
            }

            let mempool_dir = PathBuf::from(GLOBAL_CONFIG.get_mempool_dir());
            let loaded = load_mempool(&mempool_dir)?;
            info!(
                "Loaded {} transaction records from {}",
                loaded.len(),
                mempool_dir.display()
            );

            // Structural validation: rejects are logged and dropped, the run
            // continues with whatever survives
            let mut sink = LogSink;
            let validated = filter_valid(loaded, &mut sink);
            info!("{} transactions passed validation", validated.len());

            let fees = total_fees(&validated);
            info!("Collected fees: {fees}");
            let coinbase = build_coinbase(fees);

            let (header, digest) = assemble_block(&validated, &coinbase, max_nonce)?;

            // The report only exists once a solution does
            let output_path = PathBuf::from(GLOBAL_CONFIG.get_output_file());
            write_report(&output_path, &header, &coinbase, &validated)?;

            println!("Block solved: {digest} (nonce {})", header.get_nonce());
            println!("Report written to {}", output_path.display());
        }
        // Validation only - useful when I want to inspect a mempool without
        // paying for a nonce search
        Command::Validate { mempool } => {
            if let Some(dir) = mempool {
                GLOBAL_CONFIG.set_mempool_dir(dir);
            }

            let mempool_dir = PathBuf::from(GLOBAL_CONFIG.get_mempool_dir());
            let loaded = load_mempool(&mempool_dir)?;

            let mut sink = LogSink;
            let mut valid = 0usize;
            let total = loaded.len();
            for tx in &loaded {
                if validate_transaction(tx, &mut sink) {
                    println!("{}: valid", tx.display_txid());
                    valid += 1;
                } else {
                    println!("{}: invalid", tx.display_txid());
                }
            }
            println!("{valid}/{total} transactions are structurally valid");
        }
    }
    Ok(())
}

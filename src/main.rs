use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use scs_assembler::assemble::{self, AssembleOpt};
use scs_assembler::io::fasta::read_first_sequence;
use scs_assembler::overlap::overlap;
use scs_assembler::util::dna;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "scs-assembler", author, version, about = "Shortest common superstring of k-mers: greedy and exact", arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a sequence into k-mers and reassemble them
    Assemble {
        /// Input sequence
        #[arg(short, long, conflicts_with_all = ["fasta", "random"])]
        seq: Option<String>,
        /// Read the first record of a FASTA file
        #[arg(short, long, conflicts_with = "random")]
        fasta: Option<String>,
        /// Generate a random sequence of this length
        #[arg(short, long, allow_negative_numbers = true)]
        random: Option<i64>,
        /// Length of the k-mers
        #[arg(short)]
        k: usize,
        /// Minimum overlap length for the initial graph (< k)
        #[arg(short, long, default_value_t = 0)]
        threshold: usize,
        /// Also run the exhaustive exact solver
        #[arg(long)]
        exact: bool,
        /// Largest k-mer count the exact solver accepts
        #[arg(long = "exact-limit", default_value_t = assemble::DEFAULT_EXACT_LIMIT)]
        exact_limit: usize,
        /// Lower the threshold step by step when greedy merging gets stuck
        #[arg(long)]
        relax: bool,
        /// Seed for tie-breaking and sequence generation
        #[arg(long)]
        seed: Option<u64>,
        /// Output report path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Print a random nucleotide sequence
    Generate {
        #[arg(allow_negative_numbers = true)]
        length: i64,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the suffix/prefix overlap length of two strings
    Overlap {
        suffix: String,
        prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Assemble {
            seq,
            fasta,
            random,
            k,
            threshold,
            exact,
            exact_limit,
            relax,
            seed,
            out,
        } => {
            let mut rng = make_rng(seed);
            let seq = match (seq, fasta, random) {
                (Some(s), _, _) => dna::normalize_seq(&s)?,
                (None, Some(path), _) => {
                    let rec = read_first_sequence(&path)?;
                    log::info!("read '{}' ({} bp) from {}", rec.id, rec.seq.len(), path);
                    dna::normalize_seq(&rec.seq)?
                }
                (None, None, Some(len)) => {
                    let s = dna::generate_sequence(&mut rng, len)?;
                    println!("Sequence generated: {}", s);
                    s
                }
                (None, None, None) => anyhow::bail!("one of --seq, --fasta or --random is required"),
            };
            let opt = AssembleOpt { k, threshold, exact, exact_limit, relax };
            run_assemble(&seq, opt, &mut rng, out.as_deref())
        }
        Commands::Generate { length, seed } => {
            let mut rng = make_rng(seed);
            println!("{}", dna::generate_sequence(&mut rng, length)?);
            Ok(())
        }
        Commands::Overlap { suffix, prefix } => {
            println!("{}", overlap(&suffix, &prefix));
            Ok(())
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn run_assemble(seq: &str, opt: AssembleOpt, rng: &mut StdRng, out_path: Option<&str>) -> Result<()> {
    let report = assemble::assemble_to(seq, opt, rng, out_path)?;
    if let Err(e) = &report.greedy {
        anyhow::bail!("greedy assembly failed: {}", e);
    }
    Ok(())
}

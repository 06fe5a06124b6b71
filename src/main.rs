use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use vecrank::{Corpus, MetricKind, Ranker, RankerConfig, SearchRequest, SimilarityRequest, Vector};

/// Rank embedding vectors by similarity
#[derive(Parser, Debug)]
#[command(name = "vecrank")]
#[command(about = "Embedding similarity and top-k ranking", long_about = None)]
struct Args {
    /// JSON config file with ranking defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Similarity of two embeddings ({"embedding1", "embedding2", "metric"})
    Similarity {
        /// Request file, or - for stdin
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
    },
    /// Rank an embeddings array against a query ({"query_embedding", "embeddings", "top_k", "metric"})
    Search {
        /// Request file, or - for stdin
        #[arg(short, long, default_value = "-")]
        request: PathBuf,
    },
    /// Rank a stored corpus against a query vector
    Query {
        /// Corpus file (.json array or .jsonl)
        #[arg(long)]
        corpus: PathBuf,

        /// Query vector as comma-separated numbers
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        vector: Vec<f64>,

        /// Restrict to these scopes (repeatable)
        #[arg(long = "scope")]
        scopes: Vec<String>,

        /// cosine, euclidean or dot_product
        #[arg(long)]
        metric: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        top_k: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => RankerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RankerConfig::default(),
    };
    info!("Ranking defaults: {:?}", config);
    let ranker = Ranker::new(config);

    let output = run(&ranker, args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Execute one subcommand and return its JSON result
fn run(ranker: &Ranker, command: Command) -> anyhow::Result<serde_json::Value> {
    match command {
        Command::Similarity { request } => {
            let request: SimilarityRequest = read_json(&request)?;
            Ok(serde_json::to_value(ranker.similarity(&request)?)?)
        }
        Command::Search { request } => {
            let request: SearchRequest = read_json(&request)?;
            Ok(serde_json::to_value(ranker.search(&request)?)?)
        }
        Command::Query {
            corpus,
            vector,
            scopes,
            metric,
            top_k,
        } => {
            let corpus = Corpus::from_path(&corpus)
                .with_context(|| format!("loading corpus {}", corpus.display()))?;
            let query = Vector::new(vector).context("invalid query vector")?;
            let metric = metric.map(|m| m.parse::<MetricKind>()).transpose()?;
            let results = ranker.query_corpus(&corpus, &query, &scopes, metric, top_k)?;
            Ok(serde_json::to_value(results)?)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&raw).context("parsing request JSON")
}

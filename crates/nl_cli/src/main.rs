use clap::{Args, Parser, Subcommand};
use nl_core::{LookupOrigin, NewsQueries, QueryError, DEFAULT_ID_LIST_LIMIT};
use nl_query::QueryService;
use nl_storage::{consistency, DataConfig, Snapshot};
use nl_web::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse pre-built article summaries and recommendations", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    data: DataArgs,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Directory holding the input tables
    #[arg(long, env = "NEWSLENS_DATA_DIR", default_value = nl_storage::config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Catalog file name inside the data directory
    #[arg(long, env = "NEWSLENS_CATALOG", default_value = nl_storage::config::DEFAULT_CATALOG_FILE)]
    catalog: String,
    /// Summaries file name inside the data directory
    #[arg(long, env = "NEWSLENS_SUMMARIES", default_value = nl_storage::config::DEFAULT_SUMMARIES_FILE)]
    summaries: String,
    /// Recommendations file name inside the data directory
    #[arg(long, env = "NEWSLENS_RECOMMENDATIONS", default_value = nl_storage::config::DEFAULT_RECOMMENDATIONS_FILE)]
    recommendations: String,
}

impl From<DataArgs> for DataConfig {
    fn from(args: DataArgs) -> Self {
        DataConfig::new(args.data_dir)
            .with_catalog_file(args.catalog)
            .with_summaries_file(args.summaries)
            .with_recommendations_file(args.recommendations)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the summarize and recommend pages as JSON
    Serve {
        #[arg(long, default_value = "0.0.0.0:5000")]
        addr: String,
    },
    /// Report recommended ids missing from the catalog or the summaries
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up one article
    Article { id: String },
    /// Look up the recommendations for one user
    Recommend { user_id: String },
    /// List known article or user ids
    Ids {
        #[arg(long)]
        users: bool,
        #[arg(long, default_value_t = DEFAULT_ID_LIST_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = DataConfig::from(cli.data);
    info!("--- Loading Data ---");
    let snapshot = Arc::new(Snapshot::load(&config));
    for file in snapshot.report.files() {
        info!("{}", file);
    }
    info!("--- Data Loading Complete ---");
    let service = QueryService::new(snapshot.clone());

    match cli.command {
        Commands::Serve { addr } => {
            let state = AppState::new(Arc::new(service));
            nl_web::serve(state, &addr).await?;
        }
        Commands::Check { json } => {
            let report = consistency::check(&snapshot);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Commands::Article { id } => match service.lookup_article(&id, LookupOrigin::Submit) {
            Ok(Some(article)) => println!("{}", serde_json::to_string_pretty(&article)?),
            Ok(None) => {}
            Err(e) => report_miss(e),
        },
        Commands::Recommend { user_id } => match service.lookup_recommendations(&user_id) {
            Ok(recommendations) => {
                for (rank, item) in recommendations.iter().enumerate() {
                    println!(
                        "{:>3}. [{}] {} ({} / {})",
                        rank + 1,
                        item.id,
                        item.title,
                        item.category,
                        item.subcategory
                    );
                }
            }
            Err(e) => report_miss(e),
        },
        Commands::Ids { users, limit } => {
            let ids = if users {
                service.known_user_ids(limit)
            } else {
                service.known_article_ids(limit)
            };
            for id in ids {
                println!("{}", id);
            }
        }
    }

    Ok(())
}

/// Prints a query miss to stderr.
fn report_miss(error: QueryError) {
    eprintln!("{}", error);
}

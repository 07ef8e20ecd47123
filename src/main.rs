use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use version_view::config::{FeatureManifest, log_path};
use version_view::feature::route::default_route;
use version_view::feature::{FeatureView, RouteDecision};
use version_view::logging;
use version_view::version::source::FixedVersion;

#[derive(Parser)]
#[command(name = "version-view")]
#[command(version, about = "Resolve version-gated features declared in a manifest")]
struct Cli {
    /// Write logs to a file instead of stderr (defaults to the data directory)
    #[arg(long, global = true, num_args = 0..=1, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ManifestArgs {
    /// Feature manifest (JSON)
    #[arg(long, short)]
    manifest: PathBuf,

    /// Current version, overriding the one declared in the manifest
    #[arg(long, short)]
    current: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the implementation chosen for a feature key
    Resolve {
        key: String,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    /// Print the implementation chosen for every registered key
    List {
        #[command(flatten)]
        manifest: ManifestArgs,
    },
    /// Decide whether a version-specific route should redirect
    Route {
        /// Version segment of the route currently shown; omitted for the empty path
        current_route: Option<String>,
        #[command(flatten)]
        manifest: ManifestArgs,
    },
}

fn load_view(args: &ManifestArgs) -> anyhow::Result<(FeatureView<String>, FeatureManifest)> {
    let manifest = FeatureManifest::load(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    let strategy = manifest.strategy.build_strategy()?;

    let source = match args.current.clone().or_else(|| manifest.version.clone()) {
        Some(version) => FixedVersion::new(version),
        None => FixedVersion::unset(),
    };

    let view = FeatureView::new(strategy, Arc::new(source));
    view.register_many(manifest.entries());
    Ok((view, manifest))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.map(|path| path.unwrap_or_else(log_path));
    let _guard = logging::init(log_file.as_deref(), cli.log_json)?;

    match cli.command {
        Command::Resolve { key, manifest } => {
            let (view, _) = load_view(&manifest)?;
            let Some(component) = view.resolve(&key) else {
                anyhow::bail!(
                    "no implementation of {} for version {}",
                    key,
                    view.current_version().as_deref().unwrap_or("<unset>")
                );
            };
            println!("{component}");
        }
        Command::List { manifest } => {
            let (view, _) = load_view(&manifest)?;
            for key in view.keys() {
                let component = view.resolve(&key).unwrap_or_else(|| "-".to_string());
                println!("{key}\t{component}");
            }
        }
        Command::Route {
            current_route,
            manifest,
        } => {
            let (view, manifest) = load_view(&manifest)?;
            let decision = match current_route.filter(|route| !route.is_empty()) {
                Some(route) => view.route_decision(&manifest.routes, &route),
                None => default_route(&manifest.routes).map_or(RouteDecision::Stay, |route| {
                    RouteDecision::Redirect {
                        target: route.version.clone(),
                    }
                }),
            };
            match decision {
                RouteDecision::Stay => println!("stay"),
                RouteDecision::Redirect { target } => println!("redirect {target}"),
            }
        }
    }

    Ok(())
}

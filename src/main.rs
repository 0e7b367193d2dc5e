use std::path::Path;

use anyhow::Result;
use clap::Parser;

use changelog_relay::config::{self, parse_exclude_types};
use changelog_relay::domain::RangeSelection;
use changelog_relay::pipeline::{build_changelog, deliver_to_all, ChangelogRequest};
use changelog_relay::remote::{Git2Remote, WebhookDelivery};
use changelog_relay::ui;

#[derive(clap::Parser)]
#[command(
    name = "changelog-relay",
    about = "Compile a categorized changelog between two release points and deliver it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Release tag to resolve against the two most recent tags")]
    tag: Option<String>,

    #[arg(long, help = "Explicit range start (requires --to-tag)")]
    from_tag: Option<String>,

    #[arg(long, help = "Explicit range end (requires --from-tag)")]
    to_tag: Option<String>,

    #[arg(long, help = "Header text for the changelog")]
    title: Option<String>,

    #[arg(long, help = "Comma-separated category aliases to suppress")]
    exclude_types: Option<String>,

    #[arg(long, help = "Keep unparseable commits instead of dropping them")]
    include_invalid_commits: bool,

    #[arg(long, help = "Reverse per-category commit listing order")]
    reverse_order: bool,

    #[arg(short, long, help = "Path to the repository (discovered from cwd by default)")]
    repo: Option<String>,

    #[arg(short, long, help = "Write the artifact to this file instead of stdout")]
    output: Option<String>,

    #[arg(long, help = "Delivery token")]
    token: Option<String>,

    #[arg(long = "destination", help = "Delivery destination id (repeatable)")]
    destinations: Vec<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("changelog-relay {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration; CLI values win over file values
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let selection = match RangeSelection::from_options(
        args.tag.or(config.tag),
        args.from_tag.or(config.from_tag),
        args.to_tag.or(config.to_tag),
    ) {
        Ok(selection) => selection,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let request = ChangelogRequest {
        selection,
        title: args.title.unwrap_or(config.title),
        exclude_types: args
            .exclude_types
            .as_deref()
            .map(parse_exclude_types)
            .unwrap_or(config.exclude_types),
        include_invalid_commits: args.include_invalid_commits || config.include_invalid_commits,
        reverse_order: args.reverse_order || config.reverse_order,
    };

    let mut delivery_config = config.delivery;
    if let Some(token) = args.token {
        delivery_config.token = Some(token);
    }
    if !args.destinations.is_empty() {
        delivery_config.destinations = args.destinations;
    }

    let remote = match &args.repo {
        Some(path) => Git2Remote::open(Path::new(path)),
        None => Git2Remote::discover(),
    };
    let remote = match remote {
        Ok(remote) => remote,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status("Building changelog...");
    let run = match build_changelog(&request, &remote, &remote) {
        Ok(run) => run,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::display_run_summary(&run);

    if delivery_config.is_configured() {
        ui::display_payload_preview(&run.payload);

        let delivery = match WebhookDelivery::new(
            delivery_config.endpoint.clone(),
            delivery_config.token.clone(),
        ) {
            Ok(delivery) => delivery,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };

        let outcomes = deliver_to_all(&run.payload, &delivery_config.destinations, &delivery);
        let mut failed = false;
        for outcome in &outcomes {
            ui::display_delivery_outcome(outcome);
            if outcome.result.is_err() {
                failed = true;
            }
        }
        if failed {
            std::process::exit(1);
        }
    } else {
        // No delivery configured; emit the serialized artifact instead
        let artifact = serde_json::to_string_pretty(&run.payload)?;
        match &args.output {
            Some(path) => {
                std::fs::write(path, artifact)?;
                ui::display_success(&format!("Wrote changelog artifact to {}", path));
            }
            None => println!("{}", artifact),
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::Path;
use tvus_tools::drive::{DriveClient, ServiceAccountKey};
use tvus_tools::{brand, config, output, songs};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "tvus-tools")]
#[command(about = "Build utilities for the Temecula Valley Ukulele Strummers website")]
#[command(long_about = "\
Build utilities for the Temecula Valley Ukulele Strummers website

Two independent jobs, usually run from CI:

  songs         Query Google Drive folders for PDF song sheets and write one
                JSON manifest per configured drive, consumed by the site's
                client-side script.
  brand-images  Render the three placeholder brand images (logo, icon, title
                banner) into images/.

The songs job is wired through the environment:

  SERVICE_ACCOUNT_JSON    serialized Google service-account key (required)
  CONFIG_PATH             path to config.json (default: config.json)
  DRIVE_FOLDER_ID_<ID>    Drive folder for config entry <id>, uppercased
  DRIVE_FOLDER_ID         legacy single-folder mode (runs after the loop)
  OUTPUT_JSON_PATH        legacy mode output path (default: songs.json)

config.json maps drives to manifests:

  { \"drives\": [ { \"id\": \"main\", \"name\": \"Main Songbook\",
                \"outputFile\": \"songs-main.json\" } ] }

A drive with no folder-id variable is skipped with a warning; an error on one
drive does not stop the others. Missing credentials or config are fatal.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build songs JSON manifests from Google Drive folders
    Songs,
    /// Render the placeholder brand images into images/
    BrandImages,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Songs => run_songs(),
        Command::BrandImages => run_brand_images(),
    };

    // Fatal errors print Display, not Debug — deploy logs are read by humans.
    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(hint) = e
            .downcast_ref::<songs::SongsError>()
            .and_then(songs::SongsError::hint)
        {
            eprintln!("  Hint: {hint}");
        }
        std::process::exit(1);
    }
}

fn run_brand_images() -> Result<(), Box<dyn std::error::Error>> {
    let written = brand::generate_all(Path::new("images"))?;
    output::print_brand_output(&written);
    Ok(())
}

fn run_songs() -> Result<(), Box<dyn std::error::Error>> {
    let env: config::EnvLookup = &config::real_env;

    output::print_banner();

    let config_path = config::config_path(env);
    let site = config::load_config(&config_path)?;
    output::print_config_loaded(&config_path, site.drives.len());

    let key = ServiceAccountKey::from_env(env)?;
    let client = DriveClient::connect(&key)?;
    output::print_authenticated();

    let summary = songs::run(&site, &client, env)?;
    output::print_run_summary(&summary);
    Ok(())
}

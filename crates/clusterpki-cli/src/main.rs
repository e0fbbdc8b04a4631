//! clusterpki CLI - issue TLS material for a cluster from a self-signed CA.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clusterpki_core::{ClusterRef, PkiConfig};
use clusterpki_pki::SelfManager;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// clusterpki - self-signed cluster PKI
#[derive(Parser)]
#[command(name = "clusterpki")]
#[command(about = "Issue cluster TLS certificates from a self-signed CA", long_about = None)]
struct Cli {
    /// JSON config file (defaults apply to missing fields)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a CA and issue leaf certificates into a directory
    Issue {
        /// Owning cluster, as <namespace>/<name>
        #[arg(long)]
        cluster: ClusterRef,

        /// Output directory
        #[arg(short, long, default_value = "certs")]
        out_dir: PathBuf,

        /// Number of leaf certificates to issue
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Override the RSA key size
        #[arg(long)]
        key_size: Option<usize>,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Issue {
            cluster,
            out_dir,
            count,
            key_size,
        } => {
            if let Some(bits) = key_size {
                config.key_size_bits = bits;
            }
            issue(cluster, config, &out_dir, count)?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PkiConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(PkiConfig::default());
    };

    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config from '{}': {}", path.display(), e))?;
    let config: PkiConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e))?;
    config.validate()?;

    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

fn issue(
    cluster: ClusterRef,
    config: PkiConfig,
    out_dir: &Path,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        cluster = %cluster,
        key_size_bits = config.key_size_bits,
        validity_years = config.validity_years,
        "Setting up certificate authority"
    );

    let manager = SelfManager::builder(cluster).config(config).build()?;

    fs::create_dir_all(out_dir)?;
    let ca_path = out_dir.join("ca.crt");
    fs::write(&ca_path, manager.ca_certificate_pem()?)?;

    let ca_info = manager.ca_info()?;
    println!("CA certificate: {}", ca_path.display());
    println!("  fingerprint: {}", ca_info.fingerprint);
    println!("  expires:     {}", ca_info.not_after.to_rfc3339());

    for i in 0..count {
        let issued = manager.issue_certificate()?;
        let cert_path = out_dir.join(format!("tls-{}.crt", i));
        let key_path = out_dir.join(format!("tls-{}.key", i));

        fs::write(&cert_path, &issued.cert_pem)?;
        write_private(&key_path, &issued.key_pem)?;

        println!("Leaf certificate: {}", cert_path.display());
        println!("  serial:  {}", issued.serial);
        println!("  expires: {}", issued.expires_at.to_rfc3339());
    }

    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}

use clap::{Parser, Subcommand};
use folio_kindle::{Kindle, Kindle2};
use folio_usbms::{DeviceProfile, Driver};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio e-book device support CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List known device profiles
    Devices {
        /// Emit profiles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete books (and their reader-state sidecars) from a mounted device
    Delete {
        /// Driver name (see `folio devices`)
        driver: String,
        /// Paths of book files on the mounted device filesystem
        paths: Vec<PathBuf>,
    },
}

/// Every driver this build knows about, keyed by the name `delete` accepts.
fn known_drivers() -> Vec<(&'static str, Box<dyn Driver>)> {
    vec![
        ("kindle", Box::new(Kindle)),
        ("kindle2", Box::new(Kindle2)),
    ]
}

fn print_profile(key: &str, profile: &DeviceProfile) {
    println!("{} — {} ({})", key, profile.name, profile.vendor_name);
    for id in profile.ids {
        println!("  id: {}", id);
    }
    println!("  formats: {}", profile.formats.join(", "));
    println!(
        "  books in: {}{}",
        profile.ebook_dir_main,
        if profile.supports_sub_dirs {
            " (sub-directories allowed)"
        } else {
            ""
        }
    );
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Devices { json }) => {
            let drivers = known_drivers();
            if json {
                let profiles: Vec<&DeviceProfile> =
                    drivers.iter().map(|(_, driver)| driver.profile()).collect();
                match serde_json::to_string_pretty(&profiles) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error serializing profiles: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for (key, driver) in &drivers {
                    print_profile(key, driver.profile());
                }
            }
        }
        Some(Commands::Delete { driver, paths }) => {
            let Some((_, driver)) = known_drivers()
                .into_iter()
                .find(|(key, _)| *key == driver)
            else {
                eprintln!("Unknown driver: {}", driver);
                return ExitCode::FAILURE;
            };
            match driver.delete_books(&paths, true) {
                Ok(()) => println!("Processed {} path(s)", paths.len()),
                Err(e) => {
                    eprintln!("Error deleting books: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            println!("Use 'folio --help' for commands");
        }
    }

    ExitCode::SUCCESS
}

use std::path::Path;
use std::process;

use clap::Parser;

use unzip_jp::archive::JpArchive;
use unzip_jp::dostime::datetime_to_string;
use unzip_jp::encoding::recover_file_name;
use unzip_jp::error::UnzipResult;
use unzip_jp::extract;

#[derive(Parser)]
#[command(
    name = "unzip-jp",
    about = "Extract ZIP archives with Shift-JIS file names",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// List contents of archive
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Suppress progress messages
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Set output directory (default: archive name without extension)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output: Option<String>,

    /// Set password for encrypted entries
    #[arg(short = 'p', long = "password", value_name = "PASSWORD")]
    password: Option<String>,

    /// Archive file (.zip)
    archive: String,
}

fn main() {
    let cli = Cli::parse();

    let mut archive = match JpArchive::open(Path::new(&cli.archive), cli.password.as_deref()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("file open error : {}", cli.archive);
            eprintln!("err: {e}");
            process::exit(1);
        }
    };

    if cli.list {
        if let Err(e) = list_archive(&archive, &cli.archive) {
            eprintln!("err: {e}");
            process::exit(1);
        }
        return;
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&cli.archive));

    if !cli.quiet {
        eprintln!("\nExtract {} to {}", cli.archive, output);
    }

    match extract::extract_all(&mut archive, Path::new(&output), cli.quiet) {
        Ok(()) => {
            if !cli.quiet {
                eprintln!("\ndone.");
            }
        }
        Err(e) => {
            eprintln!("\nextract failed: {e}");
            process::exit(1);
        }
    }
}

/// Archive base name with its extension stripped.
fn default_output_dir(archive: &str) -> String {
    Path::new(archive)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(archive)
        .to_string()
}

fn list_archive(archive: &JpArchive, source: &str) -> UnzipResult<()> {
    println!("\nListing archive: {source}");
    println!();
    println!(" Uncomp Size    Comp Size Date & Time          File Name");
    println!("------------ ------------ -------------------  ------------------------");

    let mut total_uncompressed: u64 = 0;
    let mut total_compressed: u64 = 0;
    let mut file_count: u32 = 0;

    for entry in &archive.entries {
        let name = recover_file_name(&entry.stored_name)?;
        let datetime = match entry.modified {
            Some(dt) => datetime_to_string(&dt),
            None => " ".repeat(19),
        };

        println!(
            "{:>12} {:>12} {datetime}  {name}",
            entry.uncompressed_size, entry.compressed_size,
        );

        file_count += 1;
        total_uncompressed += entry.uncompressed_size;
        total_compressed += entry.compressed_size;
    }

    println!("------------ ------------ -------------------  ------------------------");
    let plural = if file_count <= 1 { "" } else { "s" };
    println!("{total_uncompressed:>12} {total_compressed:>12}         Total {file_count} file{plural}");

    Ok(())
}

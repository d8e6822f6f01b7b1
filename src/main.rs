use chrono::Utc;
use clap::{Parser, Subcommand};
use rbxmesh_obj::{MeshConverter, sniff_version, version::read_header};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a mesh file to OBJ
    Convert {
        input: PathBuf,
        /// Defaults to the input path with an `.obj` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the OBJ instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print the mesh version and geometry counts
    Inspect { input: PathBuf },
}

fn convert_file(
    converter: &MeshConverter,
    input: &Path,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<bool, Box<dyn Error>> {
    let start = Utc::now();
    let data = fs::read(input)?;

    if stdout {
        return match converter.convert_to_obj(&data) {
            Ok(obj) => {
                print!("{}", obj);
                Ok(true)
            }
            Err(err) => {
                eprintln!("conversion failed: {}: {}", input.display(), err);
                Ok(false)
            }
        };
    }

    let path = output.unwrap_or_else(|| input.with_extension("obj"));
    if let Err(err) = converter.convert_to_file(&data, &path) {
        eprintln!("conversion failed: {}: {}", input.display(), err);
        return Ok(false);
    }

    let elapsed = Utc::now().signed_duration_since(start);
    println!(
        "{} -> {} in {} ms",
        input.display(),
        path.display(),
        elapsed.num_milliseconds()
    );
    Ok(true)
}

fn inspect_file(converter: &MeshConverter, input: &Path) -> Result<bool, Box<dyn Error>> {
    let data = fs::read(input)?;
    let header = read_header(&data)?;
    let format = sniff_version(&data)?;
    println!("header:   {}", header);
    println!("format:   {}", format);

    match converter.decode(&data) {
        Ok(mesh) => {
            println!("vertices: {}", mesh.vertex_count());
            println!("faces:    {}", mesh.face_count());
            Ok(true)
        }
        Err(err) => {
            println!("error:    {}", err);
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let converter = MeshConverter::new();
    let ok = match cli.command {
        Commands::Convert {
            input,
            output,
            stdout,
        } => convert_file(&converter, &input, output, stdout)?,
        Commands::Inspect { input } => inspect_file(&converter, &input)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

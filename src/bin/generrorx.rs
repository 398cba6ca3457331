//! generrorx CLI - error code generation from an annotated ErrorCode enum
//!
//! Workflow:
//!   1. generrorx create          # write an error.proto template
//!   2. edit error.proto
//!   3. generrorx build           # optional: compile with protoc
//!   4. generrorx gen -m <pkg>    # generate Go error codes

use clap::{Args, Parser, Subcommand};
use generrorx::codegen::project_config::{ProjectConfig, DEFAULT_SCHEMA_PATH};
use generrorx::codegen::orchestration::{entries_to_json, run_generate, GenOptions, InputSource};
use generrorx::codegen::{scaffold, GeneratorRegistry};
use generrorx::{compiler, Result};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "generrorx")]
#[command(version, about = "Generate framework-ready Go error codes from an annotated proto enum", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an error.proto template
    Create {
        /// Where to write the template
        #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
        path: PathBuf,
    },

    /// Compile the schema with protoc (writes the .pb.go binding)
    Build {
        /// Schema path
        #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
        path: PathBuf,
    },

    /// Generate error code sources
    ///
    /// Entries annotated with @http=STATUS are returned to clients with that
    /// status and message; all others become 500 with the default message.
    Gen(GenArgs),

    /// Compile the schema, then generate from it
    Auto {
        /// Schema path
        #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
        path: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the entries parsed from a schema or compiled binding
    Inspect {
        /// Schema path
        #[arg(long, conflicts_with = "pbfile")]
        proto: Option<PathBuf>,

        /// Compiled .pb.go binding (no @http classification)
        #[arg(long)]
        pbfile: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List supported targets
    Targets,
}

#[derive(Args)]
struct GenArgs {
    /// Schema path (recommended, supports @http annotations)
    #[arg(long, conflicts_with = "pbfile")]
    proto: Option<PathBuf>,

    /// Compiled .pb.go binding (legacy, every entry is internal)
    #[arg(long)]
    pbfile: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct CommonArgs {
    /// Package name of the generated code
    #[arg(short = 'm', long = "modelname")]
    package: Option<String>,

    /// Import path of the generated package [default: <package>/errorcode]
    #[arg(short, long = "importpath")]
    import_path: Option<String>,

    /// Target framework: default, gozero, goframe
    #[arg(short = 'f', long = "framework")]
    target: Option<String>,

    /// Output directory [default: .]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Client message for internal errors [default: 服务繁忙]
    #[arg(long = "default-msg")]
    default_message: Option<String>,

    /// Project file [default: ./generrorx.yaml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn overrides(&self, proto: Option<PathBuf>, pbfile: Option<PathBuf>) -> ProjectConfig {
        ProjectConfig {
            package: self.package.clone(),
            import_path: self.import_path.clone(),
            target: self.target.clone(),
            default_message: self.default_message.clone(),
            proto,
            pbfile,
            output: self.output.clone(),
        }
    }

    /// Merge flags over the project file and apply defaults.
    fn resolve(&self, proto: Option<PathBuf>, pbfile: Option<PathBuf>) -> Result<GenOptions> {
        let cwd = Path::new(".");
        let file = match &self.config {
            Some(path) => ProjectConfig::from_file(path)?,
            None => ProjectConfig::discover(cwd)?.unwrap_or_default(),
        };
        file.merge(self.overrides(proto, pbfile)).into_gen_options(cwd)
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generrorx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create { path } => create(&path),
        Commands::Build { path } => build(&path),
        Commands::Gen(args) => args
            .common
            .resolve(args.proto, args.pbfile)
            .and_then(|opts| generate(&opts)),
        Commands::Auto { path, common } => {
            build(&path).and_then(|_| common.resolve(Some(path), None)).and_then(|opts| generate(&opts))
        }
        Commands::Inspect { proto, pbfile, json } => inspect(proto, pbfile, json),
        Commands::Targets => {
            for target in GeneratorRegistry::with_builtin().targets() {
                println!("{}", target);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn create(path: &Path) -> Result<()> {
    if !scaffold::create_template(path)? {
        println!("⚠️  {} already exists, skipped", path.display());
        return Ok(());
    }

    println!("✅ Created {}", path.display());
    println!("📝 Add your error codes, then run:");
    println!("   generrorx build");
    println!("   generrorx gen -m <package> -f <framework>");
    Ok(())
}

fn build(path: &Path) -> Result<()> {
    println!("🚀 Compiling {}...", path.display());
    let dir = compiler::compile_schema(path)?;
    println!("✅ Generated .pb.go under {}", dir.display());
    Ok(())
}

fn generate(opts: &GenOptions) -> Result<()> {
    println!("📖 Reading {}...", opts.input.path().display());

    let Some(report) = run_generate(opts)? else {
        println!("⚠️  No error code entries found");
        return Ok(());
    };

    for file in &report.files {
        println!("  ✓ Generated {}", file.display());
    }
    println!(
        "🎉 Done! target: {}, package: {}, {} error codes ({} public)",
        report.target, opts.package_name, report.entries, report.public_entries
    );
    Ok(())
}

fn inspect(proto: Option<PathBuf>, pbfile: Option<PathBuf>, json: bool) -> Result<()> {
    let source = match (proto, pbfile) {
        (Some(proto), _) => InputSource::Schema(proto),
        (None, Some(pbfile)) => InputSource::LegacyBinding(pbfile),
        (None, None) => InputSource::Schema(PathBuf::from(DEFAULT_SCHEMA_PATH)),
    };

    let entries = source.load_entries()?;

    if json {
        println!("{}", entries_to_json(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("⚠️  No error code entries found in {}", source.path().display());
        return Ok(());
    }

    println!("{:<8} {:<32} {:<6} {}", "CODE", "IDENTIFIER", "HTTP", "MESSAGE");
    for entry in &entries {
        let http = if entry.is_internal() {
            "-".to_string()
        } else {
            entry.http_status.to_string()
        };
        println!(
            "{:<8} {:<32} {:<6} {}",
            entry.code,
            entry.generated_identifier(),
            http,
            entry.description()
        );
    }
    println!(
        "\n{} entries from {} ({})",
        entries.len(),
        source.path().display(),
        source.kind()
    );

    Ok(())
}

use clap::{Parser, ValueEnum};
use fontscale::{
    FontScaleError, FontScaleOptions, FontScalePlugin, ScalePolicy, TransformOutcome, to_json_bytes,
};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Parser, Debug)]
#[command(version, about = "Step up font sizes and typography classes in stylesheets")]
struct Args {
    /// Stylesheets or single-file components to transform
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON options file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write results into this directory instead of stdout
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Overwrite the input files
    #[arg(long)]
    in_place: bool,

    /// Write `<output>.map` next to each transformed stylesheet
    #[arg(long)]
    source_map: bool,

    /// How numeric sizes grow
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Pass every file through untouched
    #[arg(long)]
    disable: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Proportional,
    Additive,
}

impl From<PolicyArg> for ScalePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Proportional => ScalePolicy::Proportional,
            PolicyArg::Additive => ScalePolicy::Additive,
        }
    }
}

/// Where transformed text goes.
#[derive(Debug, Clone)]
enum Target {
    Stdout,
    InPlace,
    Dir(PathBuf),
}

impl Args {
    fn options(&self) -> Result<FontScaleOptions, FontScaleError> {
        let mut options = match &self.config {
            Some(path) => FontScaleOptions::from_json_file(path)?,
            None => FontScaleOptions::default(),
        };
        if self.source_map {
            options = options.with_source_map(true);
        }
        if let Some(policy) = self.policy {
            options = options.with_policy(policy.into());
        }
        if self.disable {
            options = options.with_enabled(false);
        }
        Ok(options)
    }

    fn target(&self) -> Result<Target, FontScaleError> {
        match (&self.out_dir, self.in_place) {
            (Some(_), true) => Err(FontScaleError::Config(
                "`--in-place` and `--out-dir` cannot be combined".to_string(),
            )),
            (Some(dir), false) => Ok(Target::Dir(dir.clone())),
            (None, true) => Ok(Target::InPlace),
            (None, false) => Ok(Target::Stdout),
        }
    }
}

fn output_path(target: &Target, input: &Path) -> Option<PathBuf> {
    match target {
        Target::Stdout => None,
        Target::InPlace => Some(input.to_path_buf()),
        Target::Dir(dir) => Some(dir.join(input.file_name().unwrap_or(input.as_os_str()))),
    }
}

/// Transforms one file. Returns the text to print when writing to stdout.
async fn run_file(
    plugin: FontScalePlugin,
    input: PathBuf,
    target: Target,
) -> Result<Option<String>, FontScaleError> {
    let content = fs::read_to_string(&input).await?;
    let id = input.to_string_lossy().into_owned();
    let dest = output_path(&target, &input);

    let output = match plugin.process_async(content.clone(), id).await {
        TransformOutcome::Skipped => {
            log::debug!("{} is not transformed", input.display());
            if let (Target::Dir(_), Some(dest)) = (&target, &dest) {
                fs::write(dest, &content).await?;
            }
            return Ok(None);
        }
        outcome => match outcome.into_output() {
            Some(output) => output,
            None => return Ok(None),
        },
    };

    let Some(dest) = dest else {
        if output.map.is_some() {
            log::warn!("Source map for {} is dropped when printing to stdout", input.display());
        }
        return Ok(Some(output.code));
    };

    fs::write(&dest, &output.code).await?;
    if let Some(map) = output.map {
        let mut map_path = dest.clone().into_os_string();
        map_path.push(".map");
        fs::write(PathBuf::from(map_path), to_json_bytes(&map)?).await?;
    }
    log::info!("Wrote {}", dest.display());
    Ok(None)
}

async fn run(args: Args) -> Result<(), FontScaleError> {
    let target = args.target()?;
    let plugin = FontScalePlugin::new(args.options()?)?;

    if let Target::Dir(dir) = &target {
        fs::create_dir_all(dir).await?;
    }

    let handles: Vec<_> = args
        .files
        .iter()
        .map(|input| tokio::spawn(run_file(plugin.clone(), input.clone(), target.clone())))
        .collect();

    // Awaited in argument order so stdout output is deterministic.
    for handle in handles {
        if let Some(code) = handle.await?? {
            print!("{}", code);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod args;
mod types;

use std::{process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{InputArgs, OutputArgs};
use clap::Parser;
use gamepack::{BundlerOptions, PartialBundleConfig, PartialInputConfig, PartialOutputConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn bundler_options(args: Commands) -> BundlerOptions {
  let InputArgs { config, input, ts } = args.input;
  let OutputArgs { file, format, bundle, minify } = args.output;

  let input = (input.is_some() || ts.is_some()).then_some(PartialInputConfig { file: input, ts });
  let output = (file.is_some() || format.is_some() || bundle.is_some() || minify.is_some()).then(|| {
    PartialOutputConfig {
      file,
      format: format.map(|format| gamepack::ModuleFormat::from(format).to_string()),
      bundle: bundle.map(|bundle| gamepack::BundleKind::from(bundle).to_string()),
      minify,
    }
  });

  BundlerOptions {
    config_location: config,
    bundler: (input.is_some() || output.is_some()).then_some(PartialBundleConfig { input, output }),
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .init();

  let options = bundler_options(Commands::parse());

  let start = Instant::now();
  match gamepack::bundle(options).await {
    Ok(output) => {
      let dim = Colour::White.dimmed();
      for asset in &output.assets {
        let size = format!("{:.2} kB", asset.content.len() as f64 / 1024.0);
        eprintln!("{} {}", Colour::Cyan.paint(asset.file.display().to_string()), dim.paint(size));
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      eprintln!("{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {error:#}", Colour::Red.paint("Error:"));
      }
      ExitCode::FAILURE
    }
  }
}

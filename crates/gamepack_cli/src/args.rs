use std::path::PathBuf;

use clap::Args;

use crate::types::{bundle_kind::BundleKind, module_format::ModuleFormat};

#[derive(Args)]
pub struct InputArgs {
  /// Directory searched for `regal.json` and `package.json`.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// Entry file, relative to the config directory.
  #[clap(long, short = 'i')]
  pub input: Option<PathBuf>,

  /// Whether the entry is compiled from TypeScript.
  #[clap(long)]
  pub ts: Option<bool>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'o')]
  pub file: Option<PathBuf>,

  #[clap(long, short = 'f')]
  pub format: Option<ModuleFormat>,

  #[clap(long, short = 'b')]
  pub bundle: Option<BundleKind>,

  #[clap(long, short = 'm')]
  pub minify: Option<bool>,
}

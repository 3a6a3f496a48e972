use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ModuleFormat {
  Cjs,
  Esm,
  Umd,
}

impl From<ModuleFormat> for gamepack::ModuleFormat {
  fn from(value: ModuleFormat) -> Self {
    match value {
      ModuleFormat::Cjs => gamepack::ModuleFormat::Cjs,
      ModuleFormat::Esm => gamepack::ModuleFormat::Esm,
      ModuleFormat::Umd => gamepack::ModuleFormat::Umd,
    }
  }
}

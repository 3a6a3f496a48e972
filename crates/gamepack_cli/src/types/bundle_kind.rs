use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BundleKind {
  Standard,
}

impl From<BundleKind> for gamepack::BundleKind {
  fn from(value: BundleKind) -> Self {
    match value {
      BundleKind::Standard => gamepack::BundleKind::Standard,
    }
  }
}

use std::{path::PathBuf, sync::Arc};

use arcstr::ArcStr;
use gamepack_common::{ModuleDefFormat, ResolvedId};
use gamepack_ecmascript::{EcmaCompiler, SourceType};
use gamepack_error::{BuildResult, BuildWarning};
use gamepack_fs::FileSystem;
use gamepack_plugin::SharedPluginDriver;
use oxc_index::IndexVec;
use tracing::debug;

use super::ast_scanner::{AstScanner, AstScannerReturn};
use crate::{
  types::{
    module::NormalModule,
    module_loader_msg::{ModuleLoaderMsg, NormalModuleTaskResult},
    ImportRecordIdx, ModuleIdx,
  },
  utils::{
    load_source::load_source,
    resolve_id::{is_relative_or_absolute, resolve_id},
    stable_id::stable_id,
  },
};

/// Used to store common data shared between all tasks.
pub struct TaskContext {
  pub fs: Arc<dyn FileSystem>,
  pub plugin_driver: SharedPluginDriver,
  pub cwd: PathBuf,
  pub tx: tokio::sync::mpsc::Sender<ModuleLoaderMsg>,
}

pub struct ModuleTask {
  ctx: Arc<TaskContext>,
  idx: ModuleIdx,
  resolved_id: ResolvedId,
  /// Stable id of the first module importing this one.
  importer: Option<String>,
}

impl ModuleTask {
  pub fn new(
    ctx: Arc<TaskContext>,
    idx: ModuleIdx,
    resolved_id: ResolvedId,
    importer: Option<String>,
  ) -> Self {
    Self { ctx, idx, resolved_id, importer }
  }

  pub async fn run(self) {
    let msg = match self.run_inner() {
      Ok(result) => ModuleLoaderMsg::NormalModuleDone(Box::new(result)),
      Err(errs) => ModuleLoaderMsg::BuildErrors(errs.0),
    };
    if self.ctx.tx.send(msg).await.is_err() {
      debug!("module loader is gone, dropping the result of {:?}", self.resolved_id.id.as_str());
    }
  }

  fn run_inner(&self) -> BuildResult<NormalModuleTaskResult> {
    let id = ArcStr::clone(&self.resolved_id.id);
    let stable_id = stable_id(&id, &self.ctx.cwd);
    let plugin_driver = &self.ctx.plugin_driver;

    let (source, module_def_format) =
      load_source(plugin_driver, self.ctx.fs.as_ref(), &self.resolved_id).map_err(|err| {
        anyhow::anyhow!(
          "Could not load {stable_id}{} - {err}.",
          self
            .importer
            .as_ref()
            .map(|importer| format!(" (imported by {importer})"))
            .unwrap_or_default(),
        )
      })?;

    let (source, module_def_format) = plugin_driver.transform(&id, source, module_def_format)?;
    let source = ArcStr::from(source);

    let ast = EcmaCompiler::parse(ArcStr::clone(&source), SourceType::mjs())
      .map_err(|err| anyhow::anyhow!("Failed to parse {stable_id}: {err}"))?;
    let AstScannerReturn { result: scan_result, import_records: raw_import_records } =
      AstScanner::new(module_def_format).scan(ast.program());

    let module_def_format = match module_def_format {
      ModuleDefFormat::Unknown if scan_result.has_module_syntax => ModuleDefFormat::Esm,
      format => format,
    };

    let mut warnings = vec![];
    let resolved_deps = raw_import_records
      .iter()
      .map(|record| self.resolve_dependency(&record.specifier, &stable_id, &mut warnings))
      .collect::<BuildResult<IndexVec<ImportRecordIdx, _>>>()?;

    debug!("Loaded {stable_id} as {module_def_format:?} with {} dependencies", resolved_deps.len());

    Ok(NormalModuleTaskResult {
      module: NormalModule {
        idx: self.idx,
        id,
        stable_id,
        source,
        module_def_format,
        scan_result,
        import_records: IndexVec::new(),
      },
      raw_import_records,
      resolved_deps,
      warnings,
    })
  }

  /// Unresolved bare specifiers are left to the host as externals, anything else must exist.
  fn resolve_dependency(
    &self,
    specifier: &str,
    importer_stable_id: &str,
    warnings: &mut Vec<BuildWarning>,
  ) -> BuildResult<ResolvedId> {
    let resolved = resolve_id(
      &self.ctx.plugin_driver,
      self.ctx.fs.as_ref(),
      &self.ctx.cwd,
      specifier,
      Some(&self.resolved_id.id),
    )?;

    match resolved {
      Some(resolved) => Ok(resolved),
      None if is_relative_or_absolute(specifier) => {
        Err(anyhow::anyhow!("Could not resolve '{specifier}' from {importer_stable_id}."))?
      }
      None => {
        let warning = BuildWarning::UnresolvedImport {
          specifier: specifier.to_string(),
          importer: importer_stable_id.to_string(),
        };
        // A module may import the same specifier more than once.
        if !warnings.contains(&warning) {
          warnings.push(warning);
        }
        Ok(ResolvedId::external(specifier))
      }
    }
  }
}

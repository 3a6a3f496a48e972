use std::{collections::hash_map::Entry, path::PathBuf, sync::Arc};

use arcstr::ArcStr;
use gamepack_common::ResolvedId;
use gamepack_error::{BuildResult, BuildWarning};
use gamepack_fs::FileSystem;
use gamepack_plugin::SharedPluginDriver;
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use tokio::sync::mpsc::Receiver;

use super::module_task::{ModuleTask, TaskContext};
use crate::types::{
  module::{ExternalModule, Module},
  module_loader_msg::{ModuleLoaderMsg, NormalModuleTaskResult},
  IndexModules, ModuleIdx,
};

pub struct ModuleLoader {
  rx: Receiver<ModuleLoaderMsg>,
  remaining: u32,
  shared_context: Arc<TaskContext>,
  modules: IndexVec<ModuleIdx, Option<Module>>,
  visited: FxHashMap<ArcStr, ModuleIdx>,
}

#[derive(Debug)]
pub struct ModuleLoaderOutput {
  pub modules: IndexModules,
  pub entry: ModuleIdx,
  pub warnings: Vec<BuildWarning>,
}

impl ModuleLoader {
  pub fn new(fs: Arc<dyn FileSystem>, plugin_driver: SharedPluginDriver, cwd: PathBuf) -> Self {
    // 1024 should be enough for most cases
    // over 1024 pending tasks are insane
    let (tx, rx) = tokio::sync::mpsc::channel(1024);

    let shared_context = Arc::new(TaskContext { fs, plugin_driver, cwd, tx });

    Self {
      rx,
      remaining: 0,
      shared_context,
      modules: IndexVec::new(),
      visited: FxHashMap::default(),
    }
  }

  fn try_spawn_new_task(&mut self, resolved_id: ResolvedId, importer: Option<&str>) -> ModuleIdx {
    match self.visited.entry(ArcStr::clone(&resolved_id.id)) {
      Entry::Occupied(visited) => *visited.get(),
      Entry::Vacant(not_visited) => {
        let idx = self.modules.push(None);
        if resolved_id.is_external {
          self.modules[idx] = Some(ExternalModule::new(idx, resolved_id.id).into());
        } else {
          self.remaining += 1;
          let task = ModuleTask::new(
            Arc::clone(&self.shared_context),
            idx,
            resolved_id,
            importer.map(ToString::to_string),
          );
          tokio::spawn(task.run());
        }
        not_visited.insert(idx);
        idx
      }
    }
  }

  pub async fn fetch_all_modules(mut self, entry: ResolvedId) -> BuildResult<ModuleLoaderOutput> {
    let entry = self.try_spawn_new_task(entry, None);

    let mut errors: Vec<anyhow::Error> = vec![];
    let mut warnings: Vec<BuildWarning> = vec![];

    while self.remaining > 0 {
      let Some(msg) = self.rx.recv().await else {
        break;
      };

      match msg {
        ModuleLoaderMsg::NormalModuleDone(task_result) => {
          let NormalModuleTaskResult {
            mut module,
            raw_import_records,
            resolved_deps,
            warnings: task_result_warnings,
          } = *task_result;

          warnings.extend(task_result_warnings);

          let import_records = raw_import_records
            .into_iter()
            .zip(resolved_deps)
            .map(|(raw_rec, info)| {
              let id = self.try_spawn_new_task(info, Some(&module.stable_id));
              raw_rec.into_resolved(id)
            })
            .collect();
          module.import_records = import_records;

          let module_idx = module.idx;
          self.modules[module_idx] = Some(module.into());
          self.remaining -= 1;
        }
        ModuleLoaderMsg::BuildErrors(errs) => {
          errors.extend(errs);
          self.remaining -= 1;
        }
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    let modules = self
      .modules
      .into_iter()
      .collect::<Option<IndexModules>>()
      .ok_or_else(|| anyhow::anyhow!("Module graph is incomplete, some modules were never loaded"))?;

    Ok(ModuleLoaderOutput { modules, entry, warnings })
  }
}

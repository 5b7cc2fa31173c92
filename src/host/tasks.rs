//! Merge tasks and the observer seam for post-merge processing.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};

/// A single emitted file, identified by its on-disk location and the public
/// root it is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
  public_root: PathBuf,
  path: PathBuf,
}

impl Artifact {
  /// Describe an emitted file below the given public root.
  pub fn new(public_root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
    Self {
      public_root: public_root.into(),
      path: path.into(),
    }
  }

  /// On-disk location of the artifact.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// The served path of the artifact, relative to the public root.
  ///
  /// Separators are reported as the platform produced them; canonicalising
  /// them to forward slashes is the engine's job at build completion.
  pub fn public_path(&self) -> String {
    let relative = self
      .path
      .strip_prefix(&self.public_root)
      .unwrap_or(&self.path);
    relative.to_string_lossy().into_owned()
  }

  /// Read the artifact's current content from disk.
  pub fn read(&self) -> Result<Vec<u8>> {
    fs::read(&self.path).with_context(|| format!("failed to read artifact {}", self.path.display()))
  }

  /// The artifact's file name without its final extension.
  pub fn name_without_extension(&self) -> String {
    self
      .path
      .file_stem()
      .map(|stem| stem.to_string_lossy().into_owned())
      .unwrap_or_default()
  }

  /// The artifact's final extension, without the leading dot.
  pub fn extension(&self) -> Option<String> {
    self
      .path
      .extension()
      .map(|ext| ext.to_string_lossy().into_owned())
  }

  /// Rename the artifact on disk within its directory, returning the renamed
  /// artifact.
  pub fn rename(&self, file_name: &str) -> Result<Artifact> {
    let target = match self.path.parent() {
      Some(parent) => parent.join(file_name),
      None => PathBuf::from(file_name),
    };

    fs::rename(&self.path, &target).with_context(|| {
      format!(
        "failed to rename artifact {} to {}",
        self.path.display(),
        target.display()
      )
    })?;

    Ok(Artifact {
      public_root: self.public_root.clone(),
      path: target,
    })
  }
}

/// A host task that concatenates several source files into one artifact.
#[derive(Debug)]
pub struct MergeTask {
  sources: Vec<PathBuf>,
  output: PathBuf,
  public_root: PathBuf,
  /// Artifacts produced by this task, most recent last.
  pub assets: Vec<Artifact>,
}

impl MergeTask {
  /// Create a merge task producing `output` below `public_root`.
  pub fn new(
    public_root: impl Into<PathBuf>,
    sources: Vec<PathBuf>,
    output: impl Into<PathBuf>,
  ) -> Self {
    Self {
      sources,
      output: output.into(),
      public_root: public_root.into(),
      assets: Vec::new(),
    }
  }

  /// Concatenate the source files into the output artifact.
  ///
  /// The merge itself is the host's concern; it is modelled here so that
  /// post-merge observers have a real artifact list to operate on.
  pub fn merge(&mut self) -> Result<()> {
    let mut merged = Vec::new();
    for source in &self.sources {
      let content = fs::read(source)
        .with_context(|| format!("failed to read merge source {}", source.display()))?;
      merged.extend_from_slice(&content);
    }

    if let Some(parent) = self.output.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    fs::write(&self.output, &merged)
      .with_context(|| format!("failed to write merged artifact {}", self.output.display()))?;

    self
      .assets
      .push(Artifact::new(self.public_root.clone(), self.output.clone()));
    Ok(())
  }
}

/// Capability implemented by hooks that run after a merge task completes.
///
/// Observers are registered on the [`TaskCollection`] rather than patched
/// onto individual tasks, so registration order relative to task creation
/// does not matter.
pub trait MergeObserver {
  /// Called once per task, immediately after its merge step finishes.
  fn merge_completed(&self, task: &mut MergeTask) -> Result<()>;
}

/// The host's collection of merge tasks plus registered observers.
#[derive(Default)]
pub struct TaskCollection {
  tasks: Vec<MergeTask>,
  observers: Vec<Rc<dyn MergeObserver>>,
}

impl TaskCollection {
  /// Create an empty task collection.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a merge task. Tasks may be added before or after observers are
  /// registered.
  pub fn add_task(&mut self, task: MergeTask) {
    self.tasks.push(task);
  }

  /// Register an observer notified after each task's merge step.
  pub fn observe(&mut self, observer: Rc<dyn MergeObserver>) {
    self.observers.push(observer);
  }

  /// Number of tasks currently in the collection.
  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  /// Whether the collection holds no tasks.
  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  /// Iterate over the tasks in registration order.
  pub fn tasks(&self) -> impl Iterator<Item = &MergeTask> {
    self.tasks.iter()
  }

  /// Run every task's merge step, notifying observers after each one.
  ///
  /// An observer failure is logged and skipped: a naming defect on one
  /// artifact must not abort the rest of the build.
  pub fn run(&mut self) -> Result<()> {
    for task in &mut self.tasks {
      task.merge()?;
      for observer in &self.observers {
        if let Err(err) = observer.merge_completed(task) {
          tracing::warn!(error = %err, "post-merge hook failed; artifact left as emitted");
        }
      }
    }
    Ok(())
  }
}

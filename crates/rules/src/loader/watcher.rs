//! Filesystem event handler for the notify watcher (hot-reload).

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use tracing::{info, warn};

use crate::schema::RulesConfig;

use super::core::parse_config;

/// Handle a single filesystem event from the notify watcher.
pub(super) fn handle_fs_event<F>(
    event: &Event,
    config: &Arc<RwLock<Option<RulesConfig>>>,
    config_path: &Path,
    on_change: &F,
) where
    F: Fn(Option<&RulesConfig>),
{
    for path in &event.paths {
        // Only the watched config file; the directory may hold other files.
        if path.file_name() != config_path.file_name() {
            continue;
        }

        match &event.kind {
            EventKind::Create(CreateKind::File)
            | EventKind::Create(CreateKind::Any)
            | EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Modify(ModifyKind::Name(_)) => {
                if !path.exists() {
                    // Rename away from the watched name.
                    clear_config(config, path, on_change);
                    continue;
                }
                match fs::read_to_string(path) {
                    Ok(contents) => match parse_config(path, &contents) {
                        Ok(parsed) => {
                            info!(path = %path.display(), "hot-reloaded rules config");
                            *config.write().expect("rules config lock poisoned") =
                                Some(parsed.clone());
                            on_change(Some(&parsed));
                        }
                        Err(e) => {
                            warn!(
                                path = %path.display(),
                                error = %e,
                                "failed to parse rules config during hot-reload, keeping previous version"
                            );
                        }
                    },
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to read file during hot-reload");
                    }
                }
            }
            EventKind::Remove(RemoveKind::File) | EventKind::Remove(RemoveKind::Any) => {
                clear_config(config, path, on_change);
            }
            _ => {}
        }
    }
}

fn clear_config<F>(config: &Arc<RwLock<Option<RulesConfig>>>, path: &Path, on_change: &F)
where
    F: Fn(Option<&RulesConfig>),
{
    let removed = config
        .write()
        .expect("rules config lock poisoned")
        .take();
    if removed.is_some() {
        info!(path = %path.display(), "rules config removed");
        on_change(None);
    }
}

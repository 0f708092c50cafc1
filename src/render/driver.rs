use super::renderer::Renderer;
use super::view::EntityView;
use crate::config::GeneratorConfig;
use crate::core::{GenError, Result};
use crate::model::Registry;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Render every entity of `registry` and write one file per entity.
///
/// Files are written one at a time in registry order. The first failure
/// stops the run; files written before it are left as they are. Each file is
/// written to a temporary file in the output directory and renamed into
/// place, so a failed write never leaves a truncated file behind.
pub fn render_all(
    registry: &Registry,
    renderer: &dyn Renderer,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|err| GenError::io(&config.output_dir, err))?;

    let mut written = Vec::with_capacity(registry.len());
    for entity in registry.iter() {
        let view = EntityView::new(entity);
        let text = renderer.render(&view)?;

        let path = config.output_path(view.name);
        write_atomic(&config.output_dir, &path, &text)?;
        debug!("Wrote '{}'", path.display());
        written.push(path);
    }

    info!(
        "Generated {} files in '{}'",
        written.len(),
        config.output_dir.display()
    );
    Ok(written)
}

fn write_atomic(dir: &Path, path: &Path, text: &str) -> Result<()> {
    let mut file = NamedTempFile::new_in(dir).map_err(|err| GenError::io(path, err))?;
    file.write_all(text.as_bytes())
        .map_err(|err| GenError::io(path, err))?;

    // Temp files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|err| GenError::io(path, err))?;
    }

    file.persist(path)
        .map_err(|err| GenError::io(path, err.error))?;
    Ok(())
}

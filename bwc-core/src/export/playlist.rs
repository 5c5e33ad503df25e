//! M3U playlist writer, one playlist per concurrent scene.

use crate::error::{CoreResult, export_error};
use crate::grouping::SceneGroup;

use std::path::{Path, PathBuf};

/// Renders the extended M3U text for a group.
///
/// Each member contributes an `#EXTINF:<seconds>,<file name>` line followed
/// by the absolute path of its source file.
pub fn render_playlist(group: &SceneGroup<'_>) -> CoreResult<String> {
    let mut out = String::from("#EXTM3U\n");
    for clip in &group.clips {
        let location = std::path::absolute(&clip.path)?;
        out.push_str(&format!(
            "#EXTINF:{},{}\n{}\n",
            clip.duration_secs,
            clip.file_name,
            location.display()
        ));
    }
    Ok(out)
}

/// Writes `<output_dir>/<case>_concurrentScene-<id>.m3u` and returns its path.
pub fn write_playlist(output_dir: &Path, group: &SceneGroup<'_>) -> CoreResult<PathBuf> {
    let path = output_dir.join(format!("{}.m3u", group.playlist_stem()));
    let content = render_playlist(group).map_err(|e| export_error(path.display(), e))?;
    std::fs::write(&path, content).map_err(|e| export_error(path.display(), e))?;
    log::info!(".m3u playlist created: {}", path.display());
    Ok(path)
}

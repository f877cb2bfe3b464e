//! Example tables for `fn-table`, rendered to standalone HTML pages.

pub mod data;
pub mod error;
pub mod stories;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use error::StoryError;

/// Render every story into `out_dir`, plus an `index.html` linking them.
/// Returns the written paths.
pub fn write_stories(out_dir: &Path) -> Result<Vec<PathBuf>, StoryError> {
    fs::create_dir_all(out_dir).map_err(|source| StoryError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    let mut links = String::new();
    for story in stories::all() {
        let table = (story.render)().map_err(|source| StoryError::Config {
            story: story.name,
            source,
        })?;
        let path = out_dir.join(format!("{}.html", story.name));
        write(&path, &stories::document(&story, &table))?;
        info!("wrote story '{}' to {}", story.name, path.display());

        links.push_str(&format!(
            "<li><a href=\"{}.html\">{}</a></li>\n",
            story.name,
            fn_table::markup::escape(story.title)
        ));
        written.push(path);
    }

    let index = out_dir.join("index.html");
    write(
        &index,
        &format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Table</title></head>\n<body>\n<h1>Table</h1>\n<ul>\n{links}</ul>\n</body>\n</html>\n"
        ),
    )?;
    written.push(index);
    Ok(written)
}

fn write(path: &Path, contents: &str) -> Result<(), StoryError> {
    fs::write(path, contents).map_err(|source| StoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// SPDX-License-Identifier: MPL-2.0
//! Loading a gallery from disk.
//!
//! A gallery is a directory. When it contains a `gallery.toml` manifest, the
//! manifest lists entries, filters and localized captions:
//!
//! ```toml
//! title = "Portfolio"
//!
//! [[filters]]
//! id = "all"
//! label = "All"
//! labels = { fr = "Tout" }
//!
//! [[entries]]
//! image = "nature/lake.jpg"
//! title = "Lake"
//! category = "nature"
//! captions = { fr = { title = "Lac" } }
//! ```
//!
//! Otherwise the directory is scanned: images at the top level are
//! `uncategorized`, images one level down take their folder name as category.

use crate::error::{Error, Result};
use crate::gallery::entry::{Caption, EntryId, GalleryEntry};
use crate::gallery::filter::{FilterControl, ALL_FILTER};
use crate::media::is_supported_image;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

pub const MANIFEST_FILE: &str = "gallery.toml";

/// Category of images found at the top level of a scanned directory.
pub const UNCATEGORIZED: &str = "uncategorized";

/// A loaded gallery, ready to be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub title: Option<String>,
    pub root: PathBuf,
    pub entries: Vec<GalleryEntry>,
    pub filters: Vec<FilterControl>,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    title: Option<String>,
    #[serde(default)]
    filters: Vec<FilterSpec>,
    #[serde(default)]
    entries: Vec<EntrySpec>,
}

#[derive(Debug, Deserialize)]
struct FilterSpec {
    id: String,
    label: Option<String>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct EntrySpec {
    id: Option<u32>,
    image: String,
    thumbnail: Option<String>,
    title: Option<String>,
    #[serde(default)]
    description: String,
    category: Option<String>,
    #[serde(default)]
    captions: BTreeMap<String, CaptionSpec>,
}

#[derive(Debug, Deserialize)]
struct CaptionSpec {
    title: Option<String>,
    description: Option<String>,
}

/// Loads the gallery in `dir`, from its manifest when there is one.
pub fn load(dir: &Path) -> Result<Gallery> {
    let manifest = dir.join(MANIFEST_FILE);
    if manifest.is_file() {
        load_manifest(&manifest)
    } else {
        tracing::debug!(dir = %dir.display(), "no manifest, scanning directory");
        scan(dir)
    }
}

/// Parses a `gallery.toml` file. Relative image paths resolve against its directory.
pub fn load_manifest(path: &Path) -> Result<Gallery> {
    let content = fs::read_to_string(path)?;
    let root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
    parse_manifest(&content, &root)
}

fn parse_manifest(content: &str, root: &Path) -> Result<Gallery> {
    let manifest: ManifestFile =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

    let mut used = HashSet::new();
    let mut entries = Vec::with_capacity(manifest.entries.len());
    let mut next_id = manifest
        .entries
        .iter()
        .filter_map(|e| e.id)
        .max()
        .map_or(0, |max| max.saturating_add(1));

    for spec in manifest.entries {
        let id = match spec.id {
            Some(id) => id,
            None => {
                let id = next_id;
                next_id = next_id.saturating_add(1);
                id
            }
        };
        if !used.insert(id) {
            return Err(Error::Manifest(format!("duplicate entry id {id}")));
        }
        entries.push(entry_from_spec(EntryId(id), spec, root));
    }

    let filters = if manifest.filters.is_empty() {
        derive_filters(&entries)
    } else {
        manifest
            .filters
            .into_iter()
            .map(|spec| {
                let label = spec.label.unwrap_or_else(|| spec.id.clone());
                localized(spec.labels, "filter label")
                    .fold(FilterControl::new(spec.id, label), |control, (locale, text)| {
                        control.with_label(locale, text)
                    })
            })
            .collect()
    };

    Ok(Gallery {
        title: manifest.title,
        root: root.to_path_buf(),
        entries,
        filters,
    })
}

fn entry_from_spec(id: EntryId, spec: EntrySpec, root: &Path) -> GalleryEntry {
    let title = spec.title.unwrap_or_else(|| file_stem(Path::new(&spec.image)));
    let category = spec.category.unwrap_or_else(|| UNCATEGORIZED.to_string());
    let mut entry = GalleryEntry::new(
        id,
        resolve(root, &spec.image),
        title,
        spec.description,
        category,
    );
    entry.thumbnail = spec.thumbnail.map(|thumb| resolve(root, &thumb));

    localized(spec.captions, "caption").fold(entry, |entry, (locale, caption)| {
        entry.with_caption(
            locale,
            Caption {
                title: caption.title,
                description: caption.description,
            },
        )
    })
}

/// Parses locale keys, dropping the ones that are not valid identifiers.
fn localized<T>(
    map: BTreeMap<String, T>,
    what: &'static str,
) -> impl Iterator<Item = (LanguageIdentifier, T)> {
    map.into_iter().filter_map(move |(key, value)| match key.parse() {
        Ok(locale) => Some((locale, value)),
        Err(_) => {
            tracing::warn!(locale = %key, "ignoring {what} for invalid locale");
            None
        }
    })
}

/// Builds a gallery from the images found in `dir` and its direct sub-directories.
pub fn scan(dir: &Path) -> Result<Gallery> {
    let mut images: Vec<(PathBuf, String)> = Vec::new();

    for item in fs::read_dir(dir)? {
        let path = item?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push((path, UNCATEGORIZED.to_string()));
        } else if path.is_dir() {
            let category = file_name(&path);
            // Unreadable sub-directories are skipped, not fatal.
            let Ok(children) = fs::read_dir(&path) else {
                tracing::warn!(dir = %path.display(), "cannot read sub-directory");
                continue;
            };
            for child in children.flatten() {
                let child = child.path();
                if child.is_file() && is_supported_image(&child) {
                    images.push((child, category.clone()));
                }
            }
        }
    }

    images.sort_by(|a, b| a.0.cmp(&b.0));

    let entries: Vec<GalleryEntry> = images
        .into_iter()
        .enumerate()
        .map(|(index, (path, category))| {
            let id = EntryId(u32::try_from(index).unwrap_or(u32::MAX));
            GalleryEntry::new(
                id,
                path.to_string_lossy().into_owned(),
                file_stem(&path),
                "",
                category,
            )
        })
        .collect();

    tracing::debug!(dir = %dir.display(), images = entries.len(), "directory scanned");

    Ok(Gallery {
        title: None,
        root: dir.to_path_buf(),
        filters: derive_filters(&entries),
        entries,
    })
}

/// `all` followed by one control per category, in order of first appearance.
#[must_use]
pub fn derive_filters(entries: &[GalleryEntry]) -> Vec<FilterControl> {
    let mut seen = HashSet::new();
    std::iter::once(FilterControl::new(ALL_FILTER, "All"))
        .chain(
            entries
                .iter()
                .filter(|entry| seen.insert(entry.category.as_str()))
                .map(|entry| FilterControl::new(entry.category.clone(), entry.category.clone())),
        )
        .collect()
}

fn resolve(root: &Path, relative: &str) -> String {
    root.join(relative).to_string_lossy().into_owned()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn parses_full_manifest() {
        let toml = r#"
            title = "Portfolio"

            [[filters]]
            id = "all"
            label = "All"
            labels = { fr = "Tout" }

            [[filters]]
            id = "nature"

            [[entries]]
            image = "lake.jpg"
            thumbnail = "thumbs/lake.jpg"
            title = "Lake"
            description = "Still water"
            category = "nature"
            captions = { fr = { title = "Lac" } }

            [[entries]]
            id = 7
            image = "street.png"
        "#;
        let gallery = parse_manifest(toml, Path::new("/g")).unwrap();

        assert_eq!(gallery.title.as_deref(), Some("Portfolio"));
        assert_eq!(gallery.filters.len(), 2);
        assert_eq!(gallery.filters[1].label, "nature");
        assert_eq!(gallery.filters[0].label_for(&"fr".parse().unwrap()), "Tout");

        let lake = &gallery.entries[0];
        assert_eq!(lake.id, EntryId(8));
        assert_eq!(Path::new(&lake.source), Path::new("/g/lake.jpg"));
        assert_eq!(
            lake.thumbnail.as_deref().map(Path::new),
            Some(Path::new("/g/thumbs/lake.jpg"))
        );
        assert_eq!(
            lake.caption(&"fr".parse().unwrap())
                .and_then(|c| c.title.as_deref()),
            Some("Lac")
        );

        let street = &gallery.entries[1];
        assert_eq!(street.id, EntryId(7));
        assert_eq!(street.title, "street");
        assert_eq!(street.category, UNCATEGORIZED);
    }

    #[test]
    fn manifest_without_filters_derives_them() {
        let toml = r#"
            [[entries]]
            image = "a.jpg"
            category = "city"
            [[entries]]
            image = "b.jpg"
            category = "nature"
            [[entries]]
            image = "c.jpg"
            category = "city"
        "#;
        let gallery = parse_manifest(toml, Path::new(".")).unwrap();
        let ids: Vec<_> = gallery.filters.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, [ALL_FILTER, "city", "nature"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let toml = r#"
            [[entries]]
            id = 1
            image = "a.jpg"
            [[entries]]
            id = 1
            image = "b.jpg"
        "#;
        assert!(matches!(
            parse_manifest(toml, Path::new(".")),
            Err(Error::Manifest(_))
        ));
    }

    #[test]
    fn malformed_manifest_is_a_manifest_error() {
        assert!(matches!(
            parse_manifest("entries = 3", Path::new(".")),
            Err(Error::Manifest(_))
        ));
    }

    #[test]
    fn invalid_caption_locale_is_skipped() {
        let toml = r#"
            [[entries]]
            image = "a.jpg"
            captions = { "not a locale!" = { title = "x" } }
        "#;
        let gallery = parse_manifest(toml, Path::new(".")).unwrap();
        assert!(gallery.entries[0].captions.is_empty());
    }

    #[test]
    fn scan_uses_subdirectories_as_categories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nature")).unwrap();
        File::create(dir.path().join("cover.jpg")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("nature").join("lake.png")).unwrap();

        let gallery = scan(dir.path()).unwrap();

        let found: Vec<_> = gallery
            .entries
            .iter()
            .map(|e| (e.title.as_str(), e.category.as_str()))
            .collect();
        assert_eq!(found, [("cover", UNCATEGORIZED), ("lake", "nature")]);
        let ids: Vec<_> = gallery.filters.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, [ALL_FILTER, UNCATEGORIZED, "nature"]);
    }

    #[test]
    fn load_prefers_manifest() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("ignored.jpg")).unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            "title = \"Curated\"\n[[entries]]\nimage = \"x.jpg\"\n",
        )
        .unwrap();

        let gallery = load(dir.path()).unwrap();
        assert_eq!(gallery.title.as_deref(), Some("Curated"));
        assert_eq!(gallery.entries.len(), 1);
    }

    #[test]
    fn load_of_missing_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("nope")),
            Err(Error::Io(_))
        ));
    }
}

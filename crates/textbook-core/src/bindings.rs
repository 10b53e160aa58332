//! TypeScript definitions for the types a web front end exchanges with the
//! session.

use crate::{config, model, progress, session, snapshot};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> Result<()> {
    T::export_all_to(out_dir).with_context(|| format!("Failed to export {}", T::name()))
}

/// Writes one `.ts` file per type plus an `index.ts` into `out_dir`,
/// replacing any `.ts` files already there.
pub fn export_ts_bindings(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for entry in
        fs::read_dir(out_dir).with_context(|| format!("Failed to list {}", out_dir.display()))?
    {
        let path = entry.context("Failed to read entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    export_single_type::<model::Section>(out_dir)?;
    export_single_type::<model::Chapter>(out_dir)?;
    export_single_type::<model::Textbook>(out_dir)?;
    export_single_type::<model::Selection>(out_dir)?;
    export_single_type::<config::FontSize>(out_dir)?;
    export_single_type::<progress::ChapterBadge>(out_dir)?;
    export_single_type::<session::SessionCommand>(out_dir)?;
    export_single_type::<snapshot::HeaderView>(out_dir)?;
    export_single_type::<snapshot::SectionEntry>(out_dir)?;
    export_single_type::<snapshot::ChapterEntry>(out_dir)?;
    export_single_type::<snapshot::SidebarView>(out_dir)?;
    export_single_type::<snapshot::SectionView>(out_dir)?;
    export_single_type::<snapshot::ContentView>(out_dir)?;
    export_single_type::<snapshot::GalleryCard>(out_dir)?;
    export_single_type::<snapshot::GalleryView>(out_dir)?;
    export_single_type::<snapshot::ReaderSnapshot>(out_dir)?;

    let index_content = r#"export type { Section } from "./Section";
export type { Chapter } from "./Chapter";
export type { Textbook } from "./Textbook";
export type { Selection } from "./Selection";
export type { FontSize } from "./FontSize";
export type { ChapterBadge } from "./ChapterBadge";
export type { SessionCommand } from "./SessionCommand";
export type { HeaderView } from "./HeaderView";
export type { SectionEntry } from "./SectionEntry";
export type { ChapterEntry } from "./ChapterEntry";
export type { SidebarView } from "./SidebarView";
export type { SectionView } from "./SectionView";
export type { ContentView } from "./ContentView";
export type { GalleryCard } from "./GalleryCard";
export type { GalleryView } from "./GalleryView";
export type { ReaderSnapshot } from "./ReaderSnapshot";
"#;
    let index_path = out_dir.join("index.ts");
    fs::write(&index_path, index_content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_every_listed_type() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Stale.ts"), "export type Stale = never;").unwrap();

        export_ts_bindings(dir.path()).unwrap();

        assert!(!dir.path().join("Stale.ts").exists());
        for name in ["ReaderSnapshot", "SessionCommand", "ContentView", "Textbook"] {
            assert!(dir.path().join(format!("{name}.ts")).exists(), "{name}.ts missing");
        }
        let index = fs::read_to_string(dir.path().join("index.ts")).unwrap();
        assert!(index.contains("ReaderSnapshot"));
    }
}

use std::path::Path;
use std::path::PathBuf;

use crate::types::Memo;

/// Plain-text representation of a memo: title line, blank line, body.
pub fn export_text(memo: &Memo) -> String {
    format!("Title: {}\n\n{}", memo.display_title(), memo.content)
}

/// Filename for an exported memo: the title (untitled label when blank)
/// with a `.txt` extension. Characters that cannot appear in a path
/// component are replaced with `_`.
pub fn export_filename(memo: &Memo) -> String {
    let name: String = memo
        .display_title()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{name}.txt")
}

/// Write the memo's plain-text export into `dir`, creating it if needed.
/// Returns the path of the written file.
pub fn write_export(memo: &Memo, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(memo));
    std::fs::write(&path, export_text(memo))?;
    Ok(path)
}

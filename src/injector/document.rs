//! Line-level edits on a page's text.

/// Markers whose joint presence means the page already carries a link.
const IMAGE_MARKER: &str = "![](";
const DOWNLOAD_MARKER: &str = "Download PDF";
/// Opening tag of the block itself; the pair above never matches a page we
/// linked ourselves unless it also happens to contain an image.
const BLOCK_SENTINEL: &str = "<div class=\"pdf-download\">";

const H1_PREFIX: &str = "# ";

/// True when `content` already looks linked.
///
/// Coarse on purpose: any markdown image placeholder together with any
/// mention of "Download PDF" counts, as does an existing download block.
pub fn has_download_link(content: &str) -> bool {
    (content.contains(IMAGE_MARKER) && content.contains(DOWNLOAD_MARKER))
        || content.contains(BLOCK_SENTINEL)
}

/// Inserts `block` as a new line right after the first H1.
///
/// Returns `None` when the page has no H1. Lines are split and rejoined on
/// `\n` only, so every other byte survives untouched.
pub fn insert_after_first_h1(content: &str, block: &str) -> Option<String> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let idx = lines.iter().position(|line| line.starts_with(H1_PREFIX))?;
    lines.insert(idx + 1, block);
    Some(lines.join("\n"))
}

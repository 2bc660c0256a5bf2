//! The download block inserted under a page's title.

use std::path::Path;

/// Href prefix where the documentation site serves generated PDFs.
pub const PDF_HREF_PREFIX: &str = "/pdf/";

const BLOCK_HEAD: &str = "\n<div class=\"pdf-download\">\n  <a href=\"";
const BLOCK_TAIL: &str = "\" class=\"md-button md-button--primary\" download>
    <span class=\"twemoji\">
      <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\"><path d=\"M5 20h14v-2H5v2zM19 9h-4V3H9v6H5l7 7 7-7z\"></path></svg>
    </span>
    Download PDF Version
  </a>
</div>

";

/// Replaces the final extension of `file_name` with `.pdf`.
///
/// `foo.bar.md` becomes `foo.bar.pdf`; a name with no stem (`.md`) keeps the
/// whole name as its stem.
pub fn pdf_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("{stem}.pdf")
}

/// Renders the block for a PDF called `pdf_name`.
///
/// The block starts and ends with blank lines so it stands apart from the
/// heading above and the prose below once spliced in as its own line.
pub fn download_block(pdf_name: &str) -> String {
    let mut block = String::with_capacity(BLOCK_HEAD.len() + BLOCK_TAIL.len() + 32);
    block.push_str(BLOCK_HEAD);
    block.push_str(PDF_HREF_PREFIX);
    block.push_str(pdf_name);
    block.push_str(BLOCK_TAIL);
    block
}

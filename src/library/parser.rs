/// One raw record from a library file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRecord {
    /// 1-based position in the input.
    pub ordinal: u32,
    pub title: String,
    /// Literal chapter token line, when present.
    pub chapters: Option<String>,
}

/// Split library text into records.
///
/// Records are separated by blank lines. The first line of a record is the
/// title and the second, when present, the chapter token string; any further
/// lines are ignored. Carriage returns are stripped so CRLF input parses the
/// same as LF. Blocks that are entirely whitespace are skipped.
pub fn parse_library(text: &str) -> Vec<LibraryRecord> {
    let cleaned = text.replace('\r', "");

    let mut records = Vec::new();
    for block in cleaned.trim().split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }
        // Odd-length blank-line runs leave a newline on the block boundary.
        let mut lines = block.trim_matches('\n').lines();
        let title = lines.next().unwrap_or_default().to_string();
        let chapters = lines.next().map(str::to_string);

        records.push(LibraryRecord {
            ordinal: records.len() as u32 + 1,
            title,
            chapters,
        });
    }
    records
}

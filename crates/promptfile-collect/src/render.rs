//! File rendering.

use std::path::Path;

use tracing::warn;

use promptfile_core::{Block, ReadFailure};

use crate::walker::WalkedFile;

/// Render a walked file as a block.
///
/// Failures to read or decode the file are turned into an error body, so
/// this never fails.
pub fn render(file: &WalkedFile) -> Block {
    match read_text(&file.absolute_path) {
        Ok(text) => Block::content(&file.relative_path, text),
        Err(failure) => {
            warn!(path = %file.absolute_path.display(), error = %failure, "cannot read file");
            Block::failed(&file.relative_path, &failure)
        }
    }
}

/// Read a whole file as UTF-8 text with `\r\n` and `\r` turned into `\n`.
pub fn read_text(path: &Path) -> Result<String, ReadFailure> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            chars.next_if_eq(&'\n');
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptfile_core::BlockBody;
    use std::fs;
    use tempfile::TempDir;

    fn walked(temp: &TempDir, name: &str) -> WalkedFile {
        WalkedFile {
            relative_path: name.to_string(),
            absolute_path: temp.path().join(name),
        }
    }

    #[test]
    fn test_render_text_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let block = render(&walked(&temp, "a.txt"));
        assert_eq!(block.to_string(), "File: a.txt\nhello\n");
    }

    #[test]
    fn test_render_binary_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("image.bin"), [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();

        let block = render(&walked(&temp, "image.bin"));
        assert!(block.is_error());

        let text = block.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "File: image.bin");
        assert!(lines[1].starts_with("Error reading file: invalid UTF-8"));
    }

    #[test]
    fn test_render_missing_file() {
        let temp = TempDir::new().unwrap();
        let block = render(&walked(&temp, "gone.txt"));

        assert!(matches!(block.body, BlockBody::Error(_)));
    }

    #[test]
    fn test_newlines_normalized() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dos.txt"), "one\r\ntwo\rthree\n").unwrap();

        let text = read_text(&temp.path().join("dos.txt")).unwrap();
        assert_eq!(text, "one\ntwo\nthree\n");
    }

    #[test]
    fn test_multibyte_content_kept() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("u.txt"), "\u{feff}héllo → wörld").unwrap();

        let text = read_text(&temp.path().join("u.txt")).unwrap();
        assert_eq!(text, "\u{feff}héllo → wörld");
    }
}

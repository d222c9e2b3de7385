//! FIGlet bitmap fonts.
//!
//! Text on the terminal is drawn as large glyphs built from cells. Fonts use
//! the FIGlet 2 layout: a `flf2a` header line, some comment lines, then one
//! glyph per printable ASCII character from space to `~`, each `height`
//! rows tall. Every row ends with an end mark character that is not part of
//! the glyph. Glyphs are placed side by side at full width.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};

const SIGNATURE: &str = "flf2a";
const FIRST_CHAR: u8 = b' ';
const LAST_CHAR: u8 = b'~';

#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    height: usize,
    glyphs: HashMap<char, Vec<String>>,
}

impl BitmapFont {
    /// Read and parse a font file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to load font {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Failed to parse font {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        let mut lines = source.lines().enumerate();

        let (_, header) = lines.next().context("Font file is empty")?;
        let header = Header::parse(header)?;

        for _ in 0..header.comment_lines {
            lines.next().context("Font ends inside its comment block")?;
        }

        let mut glyphs = HashMap::new();
        for code in FIRST_CHAR..=LAST_CHAR {
            let ch = code as char;
            let mut rows = Vec::with_capacity(header.height);

            for _ in 0..header.height {
                let Some((index, line)) = lines.next() else {
                    bail!("Font ends early: glyph {ch:?} is missing rows");
                };
                rows.push(
                    header
                        .glyph_row(line)
                        .with_context(|| format!("Bad row for glyph {ch:?} on line {}", index + 1))?,
                );
            }

            let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
            for row in &mut rows {
                let pad = width - row.chars().count();
                row.extend(std::iter::repeat(' ').take(pad));
            }
            glyphs.insert(ch, rows);
        }

        Ok(Self {
            height: header.height,
            glyphs,
        })
    }

    /// Rows per glyph
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph(&self, ch: char) -> Option<&[String]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }

    /// (columns, rows) the text covers. Characters the font lacks take no
    /// space.
    pub fn measure(&self, text: &str) -> (usize, usize) {
        let columns = text
            .chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|rows| rows.first().map_or(0, |row| row.chars().count()))
            .sum();
        (columns, self.height)
    }

    /// Lay the text out as rows of cells
    pub fn render(&self, text: &str) -> Vec<String> {
        let mut rows = vec![String::new(); self.height];
        for glyph in text.chars().filter_map(|ch| self.glyph(ch)) {
            for (row, part) in rows.iter_mut().zip(glyph) {
                row.push_str(part);
            }
        }
        rows
    }
}

struct Header {
    hardblank: char,
    height: usize,
    comment_lines: usize,
}

impl Header {
    fn parse(line: &str) -> Result<Self> {
        let Some(rest) = line.strip_prefix(SIGNATURE) else {
            bail!("Not a FIGlet font: header must start with {SIGNATURE:?}");
        };

        let mut chars = rest.chars();
        let hardblank = chars.next().context("Header has no hardblank character")?;

        let fields: Vec<&str> = chars.as_str().split_whitespace().collect();
        ensure!(
            fields.len() >= 5,
            "Header needs height, baseline, max length, layout and comment count"
        );

        let height: usize = fields[0].parse().context("Header height is not a number")?;
        ensure!(height > 0, "Header height must be positive");
        let comment_lines: usize = fields[4]
            .parse()
            .context("Header comment count is not a number")?;

        Ok(Self {
            hardblank,
            height,
            comment_lines,
        })
    }

    fn glyph_row(&self, line: &str) -> Result<String> {
        let line = line.trim_end_matches('\r');
        let end_mark = line.chars().last().context("Row has no end mark")?;
        Ok(line
            .trim_end_matches(end_mark)
            .chars()
            .map(|ch| if ch == self.hardblank { ' ' } else { ch })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A two-row font where every glyph is blank except `A` and `!`
    fn tiny_font() -> String {
        let mut source = String::from("flf2a$ 2 1 4 -1 1\ntest font\n");
        for code in FIRST_CHAR..=LAST_CHAR {
            match code as char {
                'A' => source.push_str("/\\$@\n/\\$@@\n"),
                '!' => source.push_str("|$@\n.$@@\n"),
                _ => source.push_str("$$@\n$$@@\n"),
            }
        }
        source
    }

    #[test]
    fn test_parse_header_and_glyphs() {
        let font = BitmapFont::parse(&tiny_font()).unwrap();
        assert_eq!(font.height(), 2);
        assert_eq!(font.glyph('A').unwrap(), &["/\\ ", "/\\ "]);
        assert_eq!(font.glyph('!').unwrap(), &["| ", ". "]);
        assert_eq!(font.glyph(' ').unwrap(), &["  ", "  "]);
        assert!(font.glyph('é').is_none());
    }

    #[test]
    fn test_measure_and_render() {
        let font = BitmapFont::parse(&tiny_font()).unwrap();

        assert_eq!(font.measure("A!"), (5, 2));
        assert_eq!(font.render("A!"), vec!["/\\ | ", "/\\ . "]);
        assert_eq!(font.measure(""), (0, 2));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        let font = BitmapFont::parse(&tiny_font()).unwrap();
        assert_eq!(font.measure("AéA"), font.measure("AA"));
        assert_eq!(font.render("é"), vec!["", ""]);
    }

    #[test]
    fn test_crlf_rows() {
        let font = BitmapFont::parse(&tiny_font().replace('\n', "\r\n")).unwrap();
        assert_eq!(font.glyph('A').unwrap(), &["/\\ ", "/\\ "]);
    }

    #[test]
    fn test_rejects_bad_signature() {
        let err = BitmapFont::parse("ttf 2 1 4 -1 0\n").unwrap_err();
        assert!(err.to_string().contains("Not a FIGlet font"));
    }

    #[test]
    fn test_rejects_truncated_font() {
        let source: String = tiny_font().lines().take(40).map(|l| format!("{l}\n")).collect();
        let err = BitmapFont::parse(&source).unwrap_err();
        assert!(err.to_string().contains("Font ends early"));
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(BitmapFont::parse("flf2a$ 0 0 4 -1 0\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = BitmapFont::load("does/not/exist.flf").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load font does/not/exist.flf"));
    }

    #[test]
    fn test_bundled_font_covers_game_text() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/font.flf");
        let font = BitmapFont::load(path).unwrap();

        for text in ["SNAKE!!!", "Points: 0123456789", "YOU LOST: 42", "PRESS SPACE"] {
            let (columns, rows) = font.measure(text);
            assert!(columns > 0);
            assert_eq!(rows, font.height());
            assert!(text.chars().all(|ch| font.glyph(ch).is_some()));
        }
    }
}

//! Loading boolean grids from text and PNG files
//!
//! Text grids hold one row per line or per innermost bracketed group, either
//! as cell characters (`#`/`1` set, `.`/`0` clear) or as `true`/`false` words
//! with any brackets, commas and whitespace between them. Blank lines and
//! lines starting with the comment prefix are skipped. PNG grids read dark pixels as set cells.

use crate::io::configuration::{COMMENT_PREFIX, PNG_DARK_THRESHOLD, PNG_EXTENSION};
use crate::io::error::{PreimageError, Result, file_system_error};
use crate::spatial::BoolImage;
use ndarray::Array2;
use std::path::Path;

/// Parse a text grid
///
/// A line holding bracketed groups contributes one row per innermost group,
/// so `[[1, 0], [0, 1]]` on one line reads as two rows. Lines without
/// complete groups are one row each.
///
/// # Errors
///
/// Returns `InvalidCell` for unrecognized characters or words, and
/// `EmptyImage`/`RaggedRows` when the rows do not form a rectangle
pub fn parse_grid(text: &str) -> Result<BoolImage> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let groups = innermost_groups(trimmed);
        let segments = if groups.is_empty() {
            vec![(0, trimmed)]
        } else {
            groups
        };

        for (offset, segment) in segments {
            let row = parse_row(segment, index + 1, offset)?;
            // Pure bracket lines such as the outer "[" of a nested list carry no cells
            if !row.is_empty() {
                rows.push(row);
            }
        }
    }

    BoolImage::from_rows(&rows)
}

/// Contents of every bracketed group on the line that holds no nested group,
/// each paired with its character offset in the line
fn innermost_groups(line: &str) -> Vec<(usize, &str)> {
    let mut groups = Vec::new();
    // Byte start, character start and whether a nested group was seen
    let mut open: Vec<(usize, usize, bool)> = Vec::new();

    for (position, (byte, symbol)) in line.char_indices().enumerate() {
        match symbol {
            '[' | '(' => {
                if let Some(parent) = open.last_mut() {
                    parent.2 = true;
                }
                open.push((byte + 1, position + 1, false));
            }
            ']' | ')' => {
                if let Some((start, offset, nested)) = open.pop()
                    && !nested
                    && let Some(content) = line.get(start..byte)
                {
                    groups.push((offset, content));
                }
            }
            _ => {}
        }
    }

    groups
}

fn parse_row(segment: &str, line_number: usize, offset: usize) -> Result<Vec<bool>> {
    if segment.chars().any(char::is_alphabetic) {
        parse_word_row(segment, line_number)
    } else {
        parse_symbol_row(segment, line_number, offset)
    }
}

fn parse_symbol_row(segment: &str, line_number: usize, offset: usize) -> Result<Vec<bool>> {
    let mut row = Vec::with_capacity(segment.len());
    for (position, symbol) in segment.chars().enumerate() {
        match symbol {
            '#' | '1' => row.push(true),
            '.' | '0' => row.push(false),
            c if c.is_whitespace() || is_separator(c) => {}
            other => {
                return Err(PreimageError::InvalidCell {
                    line: line_number,
                    column: offset + position + 1,
                    found: other.to_string(),
                });
            }
        }
    }
    Ok(row)
}

fn parse_word_row(segment: &str, line_number: usize) -> Result<Vec<bool>> {
    segment
        .split(|c: char| c.is_whitespace() || is_separator(c))
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(position, word)| match word.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PreimageError::InvalidCell {
                line: line_number,
                column: position + 1,
                found: word.to_string(),
            }),
        })
        .collect()
}

const fn is_separator(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '(' | ')')
}

/// Read a text grid from disk
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or any parse error
pub fn load_text_grid<P: AsRef<Path>>(path: P) -> Result<BoolImage> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read grid", e))?;
    parse_grid(&text)
}

/// Read a PNG as a grid; pixels darker than `PNG_DARK_THRESHOLD` are set
///
/// # Errors
///
/// Returns `ImageLoad` if the file is not a decodable image
pub fn load_png_grid<P: AsRef<Path>>(path: P) -> Result<BoolImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PreimageError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let luma = img.to_luma8();

    let (width, height) = (luma.width() as usize, luma.height() as usize);
    let mut cells = Array2::from_elem((height, width), false);
    for (x, y, pixel) in luma.enumerate_pixels() {
        if let Some(cell) = cells.get_mut((y as usize, x as usize)) {
            *cell = pixel.0.first().copied().unwrap_or(u8::MAX) < PNG_DARK_THRESHOLD;
        }
    }

    BoolImage::from_array(cells)
}

/// Load a grid, choosing the format from the file extension
///
/// # Errors
///
/// Propagates the errors of the selected loader
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<BoolImage> {
    let path = path.as_ref();
    if is_png(path) {
        load_png_grid(path)
    } else {
        load_text_grid(path)
    }
}

/// Whether the path carries the PNG extension
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION))
}

/// Write a grid as a black-on-white PNG, one pixel per cell
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageLoad` if encoding or writing the PNG fails
pub fn save_png_grid<P: AsRef<Path>>(grid: &BoolImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let img = image::GrayImage::from_fn(grid.cols() as u32, grid.rows() as u32, |x, y| {
        let set = grid.get(y as usize, x as usize).unwrap_or(false);
        image::Luma([if set { 0 } else { u8::MAX }])
    });

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(path).map_err(|e| PreimageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

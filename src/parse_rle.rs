use crate::{Cell, GridError};

/// Pattern decoded from RLE data: dimensions plus a row-major cell buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRle {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

/// Parses the run-length-encoded Life pattern format.
///
/// `#`-prefixed comment lines, then a `x = W, y = H` header line, then the
/// encoded rows: `b` is a dead run, `o` an alive run, `$` ends a row and
/// `!` the pattern, with an optional run count before each tag.
pub fn parse_rle(data: &[u8]) -> Result<ParsedRle, GridError> {
    let mut i = 0;
    // skipping comment lines
    while i < data.len() && data[i] == b'#' {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // header line must carry the sizes
    let width = parse_next_number(data, &mut i)?;
    let height = parse_next_number(data, &mut i)?;
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    i += 1;

    // run-length encoded pattern data
    let mut cells = vec![Cell::Dead; width * height];
    let (mut row, mut col, mut cnt) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(data, &mut i)?,
            b'o' => {
                if row >= height || col + cnt > width {
                    return Err(GridError::MalformedRle(format!(
                        "run at row {} overflows the {}x{} bounds",
                        row, width, height
                    )));
                }
                for _ in 0..cnt {
                    cells[row * width + col] = Cell::Alive;
                    col += 1;
                }
                (i, cnt) = (i + 1, 1);
            }
            b'b' => {
                col += cnt;
                if col > width {
                    return Err(GridError::MalformedRle(format!(
                        "run at row {} overflows the {}x{} bounds",
                        row, width, height
                    )));
                }
                (i, cnt) = (i + 1, 1);
            }
            b'$' => {
                (row, col) = (row + cnt, 0);
                if row > height {
                    return Err(GridError::MalformedRle(format!(
                        "pattern has more than {} rows",
                        height
                    )));
                }
                (i, cnt) = (i + 1, 1);
            }
            b'!' => break,
            other => {
                return Err(GridError::MalformedRle(format!(
                    "unexpected byte {:?}",
                    other as char
                )))
            }
        }
    }
    Ok(ParsedRle {
        width,
        height,
        cells,
    })
}

fn parse_next_number(data: &[u8], i: &mut usize) -> Result<usize, GridError> {
    while *i < data.len() && !data[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i == data.len() {
        return Err(GridError::MalformedRle("expected a number".into()));
    }
    let mut ans = 0usize;
    while *i < data.len() && data[*i].is_ascii_digit() {
        ans = ans * 10 + (data[*i] - b'0') as usize;
        *i += 1;
    }
    Ok(ans)
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_a_glider() {
        let rle = parse_rle(b"#C a glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!").unwrap();
        assert_eq!((rle.width, rle.height), (3, 3));
        let alive = rle
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| (i / 3, i % 3))
            .collect::<Vec<_>>();
        assert_eq!(alive, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn blank_rows_may_be_skipped_with_a_count() {
        let rle = parse_rle(b"x = 2, y = 3\noo$2$!").unwrap();
        assert_eq!(rle.cells.iter().filter(|c| c.is_alive()).count(), 2);
        assert_eq!(rle.height, 3);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            parse_rle(b"x = 0, y = 3\n!"),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn rejects_overflowing_runs() {
        assert!(matches!(
            parse_rle(b"x = 2, y = 2\n3o!"),
            Err(GridError::MalformedRle(_))
        ));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!(matches!(
            parse_rle(b"x = 2, y = 2\nzo!"),
            Err(GridError::MalformedRle(_))
        ));
    }
}

use super::PatternError;

/// Returns width, height and row-major cells of the parsed RLE pattern.
pub fn parse_rle(data: &[u8]) -> Result<(usize, usize, Vec<bool>), PatternError> {
    let parse_next_number = |i: &mut usize| -> Option<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return None;
            }
            *i += 1;
        }
        let start = *i;
        while *i < data.len() && data[*i].is_ascii_digit() {
            *i += 1;
        }
        // only ASCII digits, so the slice is valid UTF-8
        std::str::from_utf8(&data[start..*i]).ok()?.parse().ok()
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i] == b'\n' || data[i] == b'\r') {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(PatternError::MissingHeader);
    }
    let width = parse_next_number(&mut i).ok_or(PatternError::MissingHeader)?;
    let height = parse_next_number(&mut i).ok_or(PatternError::MissingHeader)?;
    let out_of_bounds = PatternError::OutOfBounds { width, height };
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    i += 1;

    let cell_count = width
        .checked_mul(height)
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or(PatternError::TooLarge { width, height })?;
    let mut result = vec![false; cell_count];
    // run-length encoded pattern data
    let (mut x, mut y, mut cnt): (usize, usize, usize) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => {
                let start = i;
                while i < data.len() && data[i].is_ascii_digit() {
                    i += 1;
                }
                cnt = std::str::from_utf8(&data[start..i])
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(PatternError::UnexpectedSymbol {
                        symbol: data[start] as char,
                        offset: start,
                    })?;
            }
            b'o' | b'b' => {
                let end = match x.checked_add(cnt) {
                    Some(end) if end <= width && y < height => end,
                    _ => return Err(out_of_bounds),
                };
                if data[i] == b'o' {
                    result[y * width + x..y * width + end].fill(true);
                }
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'$' => {
                y = match y.checked_add(cnt) {
                    Some(y) if y <= height => y,
                    _ => return Err(out_of_bounds),
                };
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => break,
            symbol => {
                return Err(PatternError::UnexpectedSymbol {
                    symbol: symbol as char,
                    offset: i,
                })
            }
        };
    }
    Ok((width, height, result))
}

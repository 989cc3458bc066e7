//! PNM (Portable Any Map) format support
//!
//! Reads and writes PBM (P4 binary), PGM (P5 binary), and
//! PPM (P6 binary) with a maxval of at most 255. ASCII variants
//! (P1/P2/P3) and PAM (P7) are not supported.

use crate::{IoError, IoResult};
use pixmaze_core::{ImageFormat, Pix, PixelDepth, color};
use std::io::{Read, Write};

/// Parsed PNM header
struct Header {
    magic: u8,
    width: u32,
    height: u32,
    maxval: u32,
    /// Offset of the first raster byte
    data_start: usize,
}

/// Read the next whitespace-delimited header token, skipping `#` comments.
fn next_token(data: &[u8], pos: &mut usize) -> IoResult<u32> {
    loop {
        while *pos < data.len() && data[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        if *pos < data.len() && data[*pos] == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
            continue;
        }
        break;
    }

    let start = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if start == *pos {
        return Err(IoError::InvalidData("malformed PNM header".to_string()));
    }

    std::str::from_utf8(&data[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| IoError::InvalidData("PNM header value out of range".to_string()))
}

fn parse_header(data: &[u8]) -> IoResult<Header> {
    if data.len() < 2 || data[0] != b'P' {
        return Err(IoError::InvalidData("missing PNM magic".to_string()));
    }
    let magic = data[1];
    if !matches!(magic, b'4' | b'5' | b'6') {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM variant P{}",
            magic as char
        )));
    }

    let mut pos = 2;
    let width = next_token(data, &mut pos)?;
    let height = next_token(data, &mut pos)?;
    let maxval = if magic == b'4' {
        1
    } else {
        next_token(data, &mut pos)?
    };
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} (only 1..=255 supported)",
            maxval
        )));
    }

    // Exactly one whitespace byte separates the header from the raster.
    if pos >= data.len() || !data[pos].is_ascii_whitespace() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }

    Ok(Header {
        magic,
        width,
        height,
        maxval,
        data_start: pos + 1,
    })
}

/// Read a PNM image (P4/P5/P6) from a reader.
///
/// Returns a `Pix` at 1 bpp (PBM), 8 bpp (PGM), or 32 bpp (PPM). Sample
/// values are rescaled to 0..=255 when maxval is below 255.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Pix> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let header = parse_header(&data)?;

    let depth = match header.magic {
        b'4' => PixelDepth::Bit1,
        b'5' => PixelDepth::Bit8,
        _ => PixelDepth::Bit32,
    };
    let bytes_per_row = match depth {
        PixelDepth::Bit1 => header.width.div_ceil(8) as usize,
        PixelDepth::Bit8 => header.width as usize,
        PixelDepth::Bit32 => header.width as usize * 3,
    };
    // The raster must be present before the image is allocated, so a tiny
    // file cannot request an arbitrarily large buffer.
    let raster = bytes_per_row
        .checked_mul(header.height as usize)
        .and_then(|needed| header.data_start.checked_add(needed))
        .and_then(|end| data.get(header.data_start..end))
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "truncated PNM raster for {}x{} image",
                header.width, header.height
            ))
        })?;

    let mut pix_mut = Pix::new(header.width, header.height, depth)?.to_mut();
    pix_mut.set_informat(ImageFormat::Pnm);

    let maxval = header.maxval;
    let scale = |v: u8| -> IoResult<u8> {
        let v = u32::from(v);
        if v > maxval {
            return Err(IoError::InvalidData(format!(
                "PNM sample {} exceeds maxval {}",
                v, maxval
            )));
        }
        Ok(((v * 255 + maxval / 2) / maxval) as u8)
    };

    for y in 0..header.height {
        let row = &raster[y as usize * bytes_per_row..(y as usize + 1) * bytes_per_row];
        for x in 0..header.width {
            let val = match depth {
                PixelDepth::Bit1 => ((row[(x / 8) as usize] >> (7 - (x % 8))) & 1) as u32,
                PixelDepth::Bit8 => scale(row[x as usize])? as u32,
                PixelDepth::Bit32 => {
                    let idx = x as usize * 3;
                    color::compose_rgb(
                        scale(row[idx])?,
                        scale(row[idx + 1])?,
                        scale(row[idx + 2])?,
                    )
                }
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P4 (1 bpp), P5 (8 bpp grayscale), or P6 (32 bpp RGB; alpha is
/// dropped) based on the pixel depth.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let mut out = Vec::new();
    match pix.depth() {
        PixelDepth::Bit1 => {
            write!(out, "P4\n{} {}\n", width, height)?;
            let bytes_per_row = width.div_ceil(8) as usize;
            for y in 0..height {
                let mut row = vec![0u8; bytes_per_row];
                for x in 0..width {
                    if pix.get_pixel_unchecked(x, y) != 0 {
                        row[(x / 8) as usize] |= 1 << (7 - (x % 8));
                    }
                }
                out.extend_from_slice(&row);
            }
        }
        PixelDepth::Bit8 => {
            write!(out, "P5\n{} {}\n255\n", width, height)?;
            out.extend(pix.data().iter().map(|&v| v as u8));
        }
        PixelDepth::Bit32 => {
            write!(out, "P6\n{} {}\n255\n", width, height)?;
            for &v in pix.data() {
                let (r, g, b) = color::extract_rgb(v);
                out.extend_from_slice(&[r, g, b]);
            }
        }
    }

    writer.write_all(&out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pbm() {
        // 10x2: first row starts with ON, second row ends with ON
        let data = b"P4\n# comment\n10 2\n\x80\x00\x00\x40";
        let pix = read_pnm(&data[..]).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit1);
        assert_eq!(pix.get_pixel(0, 0), Some(1));
        assert_eq!(pix.get_pixel(1, 0), Some(0));
        assert_eq!(pix.get_pixel(9, 1), Some(1));
        assert_eq!(pix.count_on(), 2);
    }

    #[test]
    fn test_read_ppm_scaled() {
        let data = b"P6 1 1 15\n\x0f\x00\x07";
        let pix = read_pnm(&data[..]).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((255, 0, 119)));
    }

    #[test]
    fn test_roundtrip_rgb() {
        let mut pm = Pix::new(3, 2, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(2, 1, 9, 8, 7).unwrap();
        let pix: Pix = pm.into();
        let mut buf = Vec::new();
        write_pnm(&pix, &mut buf).unwrap();
        let back = read_pnm(&buf[..]).unwrap();
        assert_eq!(back.get_rgb(2, 1), Some((9, 8, 7)));
        assert_eq!(back.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_truncated_raster() {
        let data = b"P5\n4 4\n255\n\x00\x00";
        assert!(matches!(
            read_pnm(&data[..]),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_oversized_header_rejected_before_allocation() {
        let data = b"P5 60000 60000 255\n\x00";
        assert!(matches!(
            read_pnm(&data[..]),
            Err(IoError::InvalidData(_))
        ));
        let data = b"P6 4294967295 4294967295 255\n\x00\x00\x00";
        assert!(matches!(
            read_pnm(&data[..]),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_sample_above_maxval_rejected() {
        let data = b"P5 1 1 100\n\xff";
        assert!(matches!(
            read_pnm(&data[..]),
            Err(IoError::InvalidData(_))
        ));
        let data = b"P6 1 1 100\n\x64\x00\x65";
        assert!(read_pnm(&data[..]).is_err());
        // the maxval itself maps to white
        let pix = read_pnm(&b"P5 1 1 100\n\x64"[..]).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(255));
    }

    #[test]
    fn test_ascii_variant_unsupported() {
        assert!(matches!(
            read_pnm(&b"P1\n1 1\n1"[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}

//! PNG image format support
//!
//! Decoding expands palettes and low bit depths and strips 16-bit samples,
//! so every PNG lands in one of three depths:
//!
//! - 1-bit grayscale -> 1 bpp `Pix` (black is ON)
//! - other grayscale -> 8 bpp `Pix`
//! - gray+alpha, RGB, RGBA, indexed -> 32 bpp `Pix`

use crate::{IoError, IoResult};
use pixmaze_core::{ImageFormat, Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let source_binary = info.color_type == ColorType::Grayscale && info.bit_depth == BitDepth::One;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let (pix_depth, spp, samples) = match output_info.color_type {
        ColorType::Grayscale if source_binary => (PixelDepth::Bit1, 1, 1),
        ColorType::Grayscale => (PixelDepth::Bit8, 1, 1),
        ColorType::GrayscaleAlpha => (PixelDepth::Bit32, 4, 2),
        ColorType::Rgb => (PixelDepth::Bit32, 3, 3),
        ColorType::Rgba => (PixelDepth::Bit32, 4, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let mut pix_mut = Pix::new(width, height, pix_depth)?.to_mut();
    pix_mut.set_spp(spp);
    pix_mut.set_informat(ImageFormat::Png);

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * samples;
            let val = match (output_info.color_type, pix_depth) {
                (ColorType::Grayscale, PixelDepth::Bit1) => u32::from(data[idx] == 0),
                (ColorType::Grayscale, _) => data[idx] as u32,
                (ColorType::GrayscaleAlpha, _) => {
                    let (g, a) = (data[idx], data[idx + 1]);
                    color::compose_rgba(g, g, g, a)
                }
                (ColorType::Rgb, _) => color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]),
                _ => color::compose_rgba(data[idx], data[idx + 1], data[idx + 2], data[idx + 3]),
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, bit_depth) = match pix.depth() {
        PixelDepth::Bit1 => (ColorType::Grayscale, BitDepth::One),
        PixelDepth::Bit8 => (ColorType::Grayscale, BitDepth::Eight),
        PixelDepth::Bit32 => {
            if pix.spp() == 4 {
                (ColorType::Rgba, BitDepth::Eight)
            } else {
                (ColorType::Rgb, BitDepth::Eight)
            }
        }
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = match color_type {
        ColorType::Grayscale if bit_depth == BitDepth::One => width.div_ceil(8),
        ColorType::Grayscale => width,
        ColorType::Rgb => width * 3,
        _ => width * 4,
    } as usize;

    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let val = pix.get_pixel_unchecked(x, y);
            match (color_type, bit_depth) {
                (ColorType::Grayscale, BitDepth::One) => {
                    // PNG grayscale stores white as 1; ON pixels are black.
                    if val == 0 {
                        data[row_start + (x / 8) as usize] |= 1 << (7 - (x % 8));
                    }
                }
                (ColorType::Grayscale, _) => data[row_start + x as usize] = val as u8,
                (ColorType::Rgb, _) => {
                    let (r, g, b) = color::extract_rgb(val);
                    let idx = row_start + x as usize * 3;
                    data[idx..idx + 3].copy_from_slice(&[r, g, b]);
                }
                _ => {
                    let (r, g, b, a) = color::extract_rgba(val);
                    let idx = row_start + x as usize * 4;
                    data[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

//! Image format regression test
//!
//! Reads the maze test images in both PNG and PNM form and checks
//! lossless write/read at 1, 8 and 32 bpp, to file and to memory.

use pixmaze_core::PixelDepth;
use pixmaze_io::{ImageFormat, detect_format, read_image_mem, write_image_mem};
use pixmaze_test::{RegParams, load_test_image, test_data_path};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    // Format detection from file contents
    rp.check(
        detect_format(test_data_path("maze-open.png")).ok() == Some(ImageFormat::Png),
        "png detected",
    );
    rp.check(
        detect_format(test_data_path("maze-open.ppm")).ok() == Some(ImageFormat::Pnm),
        "pnm detected",
    );

    let png = load_test_image("maze-open.png").expect("load png");
    let pnm = load_test_image("maze-open.ppm").expect("load ppm");
    rp.check(png.depth() == PixelDepth::Bit32, "png is 32 bpp");
    rp.compare_values(11.0, png.width() as f64, 0.0);
    rp.compare_values(7.0, png.height() as f64, 0.0);
    rp.compare_pix(&png, &pnm);

    let gray = png.convert_to_gray().expect("gray");
    let binary = png.convert_to_binary(128).expect("binary");

    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        eprintln!("  {:?}", format);
        for pix in [&binary, &gray, &png] {
            // file roundtrip
            rp.write_pix_and_check(pix, format).expect("write");

            // memory roundtrip
            let bytes = write_image_mem(pix, format).expect("write mem");
            match read_image_mem(&bytes) {
                Ok(back) => {
                    rp.check(back.depth() == pix.depth(), "depth preserved in memory");
                    rp.compare_pix(pix, &back);
                }
                Err(e) => {
                    rp.check(false, &format!("read back from memory: {}", e));
                }
            }
        }
    }

    assert!(rp.cleanup(), "ioformats regression test failed");
}

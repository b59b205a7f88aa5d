use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use png::{BitDepth, ColorType, Transformations};

use crate::error::DecodeError;
use crate::image::SourceImage;
use crate::palette::Color;

fn to_rgb(bytes: &[u8], color_type: ColorType) -> Option<Vec<Color>> {
    let pixels = match color_type {
        // Alpha is dropped, not blended.
        ColorType::Rgba => bytes
            .chunks_exact(4)
            .map(|px| Color::new(px[0], px[1], px[2]))
            .collect(),
        ColorType::Grayscale => bytes.iter().map(|&v| Color::new(v, v, v)).collect(),
        ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .map(|px| Color::new(px[0], px[0], px[0]))
            .collect(),
        ColorType::Rgb | ColorType::Indexed => return None,
    };
    Some(pixels)
}

pub fn decode_png<R: Read>(reader: R) -> Result<SourceImage, DecodeError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    let unsupported = DecodeError::UnsupportedLayout {
        color_type: info.color_type,
        bit_depth: info.bit_depth,
    };
    if info.bit_depth != BitDepth::Eight {
        return Err(unsupported);
    }
    let (width, height) = (info.width as usize, info.height as usize);
    if info.color_type == ColorType::Rgb {
        return SourceImage::from_rgb_bytes(width, height, bytes);
    }
    let pixels = to_rgb(bytes, info.color_type).ok_or(unsupported)?;
    SourceImage::new(width, height, pixels)
}

pub fn load_png_file(path: &Path) -> Result<SourceImage, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_png(BufReader::new(file))?;
    log::debug!(
        "decoded {} as {}x{}",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

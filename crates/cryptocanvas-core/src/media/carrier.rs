use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, RgbImage, RgbaImage};
use log::{debug, error};

use super::{has_extension, Persist, StegoOptions};
use crate::codec;
use crate::error::CanvasError;
use crate::positions::PositionRule;
use crate::Result;

/// file extensions accepted as carrier input
pub const CARRIER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pixels {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Pixels {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Pixels::Rgb(i) => i,
            Pixels::Rgba(i) => i,
        }
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Pixels::Rgb(i) => i,
            Pixels::Rgba(i) => i,
        }
    }

    fn channels(&self) -> usize {
        match self {
            Pixels::Rgb(_) => 3,
            Pixels::Rgba(_) => 4,
        }
    }
}

/// An image flattened into 8 bit color components, one hidden bit per component.
///
/// Components are taken row by row, pixel by pixel, in `R, G, B(, A)` order. With
/// `skip_alpha_channel` the alpha bytes are kept in the image but never used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pixels: Pixels,
    usable_channels: usize,
    rule: PositionRule,
}

impl Carrier {
    pub fn from_image(image: DynamicImage, options: &StegoOptions) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(CanvasError::UnsupportedCarrierFormat(
                "image has no pixels".to_string(),
            ));
        }
        let pixels = match image.color() {
            ColorType::L8 | ColorType::Rgb8 => Pixels::Rgb(image.into_rgb8()),
            ColorType::La8 | ColorType::Rgba8 => Pixels::Rgba(image.into_rgba8()),
            other => {
                return Err(CanvasError::UnsupportedCarrierFormat(format!(
                    "{other:?} is not an 8 bit color type"
                )))
            }
        };
        let usable_channels = if options.skip_alpha_channel {
            3
        } else {
            pixels.channels()
        };

        Ok(Self {
            pixels,
            usable_channels,
            rule: options.rule,
        })
    }

    /// decodes an encoded PNG or JPEG image
    pub fn from_bytes(encoded: &[u8], options: &StegoOptions) -> Result<Self> {
        let image = image::load_from_memory(encoded)
            .map_err(|e| CanvasError::UnsupportedCarrierFormat(e.to_string()))?;

        Self::from_image(image, options)
    }

    pub fn from_file(path: &Path, options: &StegoOptions) -> Result<Self> {
        if !has_extension(path, CARRIER_EXTENSIONS) {
            return Err(CanvasError::UnsupportedCarrierFormat(format!(
                "{} is neither a png nor a jpeg file",
                path.display()
            )));
        }
        let data = std::fs::read(path).map_err(|source| CanvasError::ReadError { source })?;
        let carrier = Self::from_bytes(&data, options)?;
        debug!(
            "Loaded carrier {} with a capacity of {} bits",
            path.display(),
            carrier.capacity_bits()
        );

        Ok(carrier)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match &self.pixels {
            Pixels::Rgb(i) => i.dimensions(),
            Pixels::Rgba(i) => i.dimensions(),
        }
    }

    /// number of component bytes, each carries one payload bit
    pub fn capacity_bits(&self) -> usize {
        self.pixels.as_bytes().len() / self.pixels.channels() * self.usable_channels
    }

    /// largest payload in bytes that [`Carrier::hide`] accepts
    pub fn max_payload_len(&self) -> usize {
        codec::max_payload_len(self.capacity_bits())
    }

    /// the usable component bytes in carrier order
    pub fn components(&self) -> Vec<u8> {
        let channels = self.pixels.channels();
        let bytes = self.pixels.as_bytes();
        if channels == self.usable_channels {
            return bytes.to_vec();
        }

        bytes
            .chunks_exact(channels)
            .flat_map(|pixel| pixel[..self.usable_channels].iter().copied())
            .collect()
    }

    fn set_components(&mut self, components: &[u8]) {
        let channels = self.pixels.channels();
        let usable = self.usable_channels;
        let bytes = self.pixels.as_bytes_mut();
        if channels == usable {
            bytes.copy_from_slice(components);
            return;
        }

        for (pixel, colors) in bytes
            .chunks_exact_mut(channels)
            .zip(components.chunks_exact(usable))
        {
            pixel[..usable].copy_from_slice(colors);
        }
    }

    /// hides `payload`, all or nothing: on error the pixels stay unchanged
    pub fn hide(&mut self, payload: &[u8]) -> Result<&mut Self> {
        let mut components = self.components();
        codec::hide_in_place(&mut components, payload, self.rule)?;
        self.set_components(&components);

        Ok(self)
    }

    pub fn reveal(&self) -> Result<Vec<u8>> {
        codec::reveal(&self.components(), self.rule)
    }

    pub fn into_image(self) -> DynamicImage {
        match self.pixels {
            Pixels::Rgb(i) => DynamicImage::ImageRgb8(i),
            Pixels::Rgba(i) => DynamicImage::ImageRgba8(i),
        }
    }

    /// writes the carrier as PNG, lossy formats would destroy the hidden bits
    pub fn save_to_writer<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        let written = match &self.pixels {
            Pixels::Rgb(i) => i.write_to(writer, ImageFormat::Png),
            Pixels::Rgba(i) => i.write_to(writer, ImageFormat::Png),
        };
        written.map_err(|e| {
            error!("Error saving image: {e}");
            CanvasError::ImageEncodingError
        })
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.save_to_writer(&mut buffer)?;

        Ok(buffer.into_inner())
    }
}

impl Persist for Carrier {
    fn save_as(&self, file: &Path) -> Result<()> {
        if !has_extension(file, &["png"]) {
            return Err(CanvasError::UnsupportedCarrierFormat(format!(
                "{} must be a png file",
                file.display()
            )));
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            CanvasError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| CanvasError::WriteError { source })
    }
}

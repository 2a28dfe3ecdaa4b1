use criterion::{criterion_group, criterion_main, Criterion};
use cryptocanvas_core::{Carrier, StegoOptions};
use image::{ImageBuffer, Rgb, RgbImage};

pub fn image_revealing(c: &mut Criterion) {
    c.bench_function("Image Revealing", |b| {
        let plain_image: RgbImage =
            ImageBuffer::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let mut carrier = Carrier::from_image(plain_image.into(), &StegoOptions::default())
            .expect("Carrier image is not usable.");
        carrier
            .hide(&[42_u8; 4096])
            .expect("Cannot hide secret message");

        b.iter(|| carrier.reveal().expect("Cannot reveal secret message"))
    });
}

criterion_group!(benches, image_revealing);
criterion_main!(benches);

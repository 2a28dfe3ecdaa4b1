use criterion::{criterion_group, criterion_main, Criterion};
use cryptocanvas_core::{Carrier, StegoOptions};
use image::{ImageBuffer, Rgb, RgbImage};

pub fn image_hiding(c: &mut Criterion) {
    c.bench_function("Image Hiding", |b| {
        let plain_image: RgbImage =
            ImageBuffer::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let carrier = Carrier::from_image(plain_image.into(), &StegoOptions::default())
            .expect("Carrier image is not usable.");
        let secret_message = b"Hello World!";

        b.iter(|| {
            carrier
                .clone()
                .hide(&secret_message[..])
                .expect("Cannot hide secret message")
                .capacity_bits()
        })
    });
}

criterion_group!(benches, image_hiding);
criterion_main!(benches);

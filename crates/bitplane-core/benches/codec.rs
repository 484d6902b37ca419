use bitplane_core::{BitplaneCodec, Image};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn gradient(width: u32, height: u32) -> Image {
    let pixels = (0..width as usize * height as usize)
        .map(|i| (i % 256) as u8)
        .collect();
    Image::from_pixels(width, height, pixels).expect("gradient has the right size")
}

pub fn embedding(c: &mut Criterion) {
    c.bench_function("Embed 512x512", |b| {
        let mut cover = gradient(512, 512);
        let secret = Image::filled(512, 512, 0xA5);

        b.iter(|| {
            BitplaneCodec::embed(black_box(&mut cover), black_box(&secret))
                .expect("Cannot embed secret image");
        })
    });
}

pub fn extraction(c: &mut Criterion) {
    c.bench_function("Extract 512x512", |b| {
        let stego = gradient(512, 512);

        b.iter(|| BitplaneCodec::extract(black_box(&stego)))
    });
}

criterion_group!(benches, embedding, extraction);
criterion_main!(benches);

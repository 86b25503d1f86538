use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vtf_view::{ImageFormat, ResourceType, TextureView};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: u16 = 1024;
const HEIGHT: u16 = 1024;
const NUM_MIPS: u8 = 11;
const NUM_FRAMES: u16 = 8;
const RECORD_SIZE: usize = 80;

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// An animated 1024x1024 DXT5 texture with a full mip chain and 3 resources.
fn synthetic_vtf() -> Vec<u8> {
    let header_size = RECORD_SIZE + 3 * 8;
    let mut image_size = 0usize;
    for mip in 0..NUM_MIPS {
        let width = usize::from(WIDTH >> mip).max(1);
        let height = usize::from(HEIGHT >> mip).max(1);
        image_size += width.div_ceil(4) * height.div_ceil(4) * 16 * usize::from(NUM_FRAMES);
    }

    let mut data = vec![0u8; header_size + image_size];
    data[..4].copy_from_slice(b"VTF\0");
    put_u32(&mut data, 0x04, 7);
    put_u32(&mut data, 0x08, 5);
    put_u32(&mut data, 0x0C, header_size as u32);
    data[0x10..0x12].copy_from_slice(&WIDTH.to_le_bytes());
    data[0x12..0x14].copy_from_slice(&HEIGHT.to_le_bytes());
    data[0x18..0x1A].copy_from_slice(&NUM_FRAMES.to_le_bytes());
    put_u32(&mut data, 0x34, ImageFormat::DXT5.0 as u32);
    data[0x38] = NUM_MIPS;
    put_u32(&mut data, 0x39, ImageFormat::UNKNOWN.0 as u32);
    data[0x3F] = 1;
    put_u32(&mut data, 0x44, 3);

    let resources = [
        (ResourceType::Crc32.tag() | 0x0200_0000, 0x1234_5678),
        (ResourceType::SettingsEx.tag() | 0x0200_0000, 0),
        (ResourceType::LegacyImage.tag(), header_size as u32),
    ];
    for (index, (info, value)) in resources.into_iter().enumerate() {
        put_u32(&mut data, RECORD_SIZE + index * 8, info);
        put_u32(&mut data, RECORD_SIZE + index * 8 + 4, value);
    }
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("VTF Layout");
    let data = synthetic_vtf();
    println!("Created synthetic VTF file ({} bytes) for benchmarking.", data.len());

    group.bench_function("parse_header", |b| {
        b.iter(|| TextureView::new(black_box(&data)))
    });

    let view = match TextureView::new(&data) {
        Ok(view) => view,
        Err(e) => panic!("Synthetic VTF file failed to parse: {e}"),
    };

    group.bench_function("image_data_all_images", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for mip in 0..NUM_MIPS {
                for frame in 0..NUM_FRAMES {
                    if let Ok(image) = view.image_data(black_box(frame), 0, black_box(mip)) {
                        total += image.len();
                    }
                }
            }
            total
        })
    });

    group.bench_function("crc32_lookup", |b| b.iter(|| black_box(&view).crc32()));

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);

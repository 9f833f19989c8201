use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mp_decoder::Decoder;
use mp_test_support::{array_header, fixnum, map_header, raw};
use mp_wire::SliceChannel;

fn bench_decode_scalar(c: &mut Criterion) {
    let payload = fixnum(42);

    c.bench_function("decode_fixnum", |b| {
        b.iter(|| {
            Decoder::new(SliceChannel::new(&payload)).read_int().unwrap();
        });
    });
}

fn bench_decode_small_map(c: &mut Criterion) {
    let mut payload = map_header(2);
    payload.extend(raw(b"name"));
    payload.extend(raw(b"value"));
    payload.extend(raw(b"count"));
    payload.extend(fixnum(7));

    c.bench_function("decode_small_map", |b| {
        b.iter(|| {
            let mut d = Decoder::new(SliceChannel::new(&payload));
            let entries = d.read_map_header().unwrap();
            for _ in 0..entries {
                d.read_string().unwrap();
                match d.next_type().unwrap() {
                    mp_decoder::ValueType::Integer => {
                        d.read_int().unwrap();
                    }
                    _ => {
                        d.read_string().unwrap();
                    }
                }
            }
        });
    });
}

fn bench_decode_nested_array(c: &mut Criterion) {
    let mut payload = array_header(100);
    for i in 0..100 {
        payload.extend(fixnum((i % 100) as i8));
    }

    c.bench_function("decode_nested_array", |b| {
        b.iter(|| {
            let mut d = Decoder::new(SliceChannel::new(&payload));
            let len = d.read_array_header().unwrap();
            for _ in 0..len {
                d.read_int().unwrap();
            }
        });
    });
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for size_kb in [1, 10, 100] {
        let payload = raw(&vec![b'x'; size_kb * 1024]);

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode_raw", format!("{size_kb}kb")),
            &payload,
            |b, p| {
                b.iter(|| {
                    Decoder::new(SliceChannel::new(p)).read_byte_array().unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_scalar,
    bench_decode_small_map,
    bench_decode_nested_array,
    bench_decode_throughput
);
criterion_main!(benches);

use ipvalue::{Address, Ipv4Address, Ipv6Address};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_format(c: &mut Criterion) {
    let v4 = Ipv4Address::new(203, 0, 113, 254);
    let v6 = Ipv6Address::new(0x2001, 0xdb8, 0, 0, 1, 0, 0, 1);

    c.bench_function("format ipv4", |b| b.iter(|| black_box(&v4).to_string()));

    c.bench_function("format ipv6 compressed", |b| {
        b.iter(|| black_box(&v6).to_string())
    });

    c.bench_function("ipv6 to decimal", |b| b.iter(|| black_box(&v6).to_decimal()));
}

criterion_group!(benches, bench_format);
criterion_main!(benches);

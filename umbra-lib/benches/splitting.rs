extern crate umbra_lib;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use umbra_lib::grid::Bitmap;
use umbra_lib::phase::GreyMap;
use umbra_lib::{GreyscaleSharing, MonochromeSharing, SplitScheme};

fn splitting_bench(c: &mut Criterion) {
	const SIDE: usize = 128;
	{
		let plaintext = Bitmap::random_insecure(SIDE, SIDE).unwrap();
		let mut group = c.benchmark_group("mono-128x128");
		group.throughput(Throughput::Elements((SIDE * SIDE) as u64));
		group.bench_function("mono-128x128", |bencher| {
			bencher.iter(|| {
				let mut engine = MonochromeSharing::insecure();
				engine.split(&plaintext).unwrap();
			});
		});
	}
	{
		let levels = vec![127u8; SIDE * SIDE];
		let img = GreyMap::new(SIDE, SIDE, levels).unwrap();
		let mut group = c.benchmark_group("grey-128x128");
		group.throughput(Throughput::Elements((SIDE * SIDE) as u64));
		group.bench_function("grey-128x128", |bencher| {
			bencher.iter(|| {
				let mut engine = GreyscaleSharing::insecure();
				engine.split(&img).unwrap();
			});
		});
	}
}

criterion_group!(benches, splitting_bench);
criterion_main!(benches);

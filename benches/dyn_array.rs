use criterion::{
	black_box,
	criterion_group,
	criterion_main,
	Criterion
};

use dyn_array::DynArray;

fn construction(c: &mut Criterion) {
	c.bench_function("DynArray::new", |b| b.iter(|| {
		DynArray::<u32>::new()
	}));
	c.bench_function("Vec::with_capacity(10)", |b| b.iter(|| {
		Vec::<u32>::with_capacity(10)
	}));
	c.bench_function("DynArray::with_capacity(64)", |b| b.iter(|| {
		DynArray::<u32>::with_capacity(64)
	}));
	c.bench_function("Vec::with_capacity(64)", |b| b.iter(|| {
		Vec::<u32>::with_capacity(64)
	}));
}

fn push(c: &mut Criterion) {
	c.bench_function("DynArray::push(100)", |b| b.iter(|| {
		let mut array = DynArray::new();
		for i in 0..100u32 {
			array.push(i).unwrap();
		}
		array
	}));
	c.bench_function("Vec::push(100)", |b| b.iter(|| {
		let mut vec = Vec::new();
		for i in 0..100u32 {
			vec.push(i);
		}
		vec
	}));
}

fn insert_front(c: &mut Criterion) {
	c.bench_function("DynArray::insert(0) x100", |b| b.iter(|| {
		let mut array = DynArray::new();
		for i in 0..100u32 {
			array.insert(0, i).unwrap();
		}
		array
	}));
	c.bench_function("Vec::insert(0) x100", |b| b.iter(|| {
		let mut vec = Vec::new();
		for i in 0..100u32 {
			vec.insert(0, i);
		}
		vec
	}));
}

fn index_of(c: &mut Criterion) {
	let array: DynArray<u32> = (0..100).collect();
	c.bench_function("DynArray::index_of last of 100", |b| b.iter(|| {
		black_box(array.index_of(black_box(&99)))
	}));

	let vec: Vec<u32> = (0..100).collect();
	c.bench_function("Vec position last of 100", |b| b.iter(|| {
		black_box(vec.iter().position(|item| item == black_box(&99)))
	}));
}

fn iteration(c: &mut Criterion) {
	let array: DynArray<u32> = (0..100).collect();
	c.bench_function("DynArray::iter sum 100", |b| b.iter(|| {
		array.iter().sum::<u32>()
	}));

	let vec: Vec<u32> = (0..100).collect();
	c.bench_function("Vec::iter sum 100", |b| b.iter(|| {
		vec.iter().sum::<u32>()
	}));
}

criterion_group!(benches, construction, push, insert_front, index_of, iteration);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use slot_list::LinkedList;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Singly Linked List");

    group.bench_function("push_back 1024", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();

            for i in 0..1024u64 {
                list.push_back(black_box(i));
            }

            list
        })
    });

    group.bench_function("insert and remove in the middle", |b| {
        let mut list = (0..1024u64).collect::<LinkedList<_>>();

        b.iter(|| {
            list.insert(512, black_box(42)).unwrap();
            list.remove(black_box(512)).unwrap()
        })
    });

    group.bench_function("swap ends", |b| {
        let mut list = (0..1024u64).collect::<LinkedList<_>>();

        b.iter(|| list.swap(black_box(0), black_box(1023)).unwrap())
    });

    group.bench_function("clone 1024", |b| {
        let list = (0..1024u64).collect::<LinkedList<_>>();

        b.iter(|| black_box(&list).clone())
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

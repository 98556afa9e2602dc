use std::cell::RefCell;
use std::cmp::Ordering;
use std::env;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::{patterns, Sort};

struct SlicesUnstable;

impl Sort for SlicesUnstable {
    fn name() -> String {
        "slices_pdqsort_unstable".into()
    }

    fn is_stable() -> bool {
        false
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        slices::sort(arr);
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], mut compare: F) {
        slices::sort_func(arr, |a, b| compare(a, b) == Ordering::Less);
    }
}

struct SlicesStable;

impl Sort for SlicesStable {
    fn name() -> String {
        "slices_symmerge_stable".into()
    }

    fn is_stable() -> bool {
        true
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        slices::sort_stable(arr);
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], mut compare: F) {
        slices::sort_stable_func(arr, |a, b| compare(a, b) == Ordering::Less);
    }
}

struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn is_stable() -> bool {
        false
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort_unstable();
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        arr.sort_unstable_by(compare);
    }
}

struct StdStable;

impl Sort for StdStable {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn is_stable() -> bool {
        true
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort();
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        arr.sort_by(compare);
    }
}

#[inline(never)]
fn bench_sort<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn measure_comp_count(
    name: &str,
    test_size: usize,
    instrumented_sort_func: impl Fn(),
    comp_count: Rc<RefCell<u64>>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else if test_size < 100_000 {
        1000
    } else {
        100
    };

    *comp_count.borrow_mut() = 0;
    for _ in 0..run_count {
        instrumented_sort_func();
    }

    // Less than one comparison on average rounds down to zero.
    let total = *comp_count.borrow() / (run_count as u64);
    let log_bound = (test_size as f64) * (test_size.max(2) as f64).log2();
    println!(
        "{name}: mean comparisons: {total} ({:.2} * n * log2(n))",
        total as f64 / log_bound.max(1.0)
    );
}

#[inline(never)]
fn bench_impl<T: Ord + std::fmt::Debug, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        if transform_name == "i32" && test_size <= 100_000 {
            let name = format!(
                "{}-comp-{}-{}-{}",
                bench_name, transform_name, pattern_name, test_size
            );
            // Instrument via sort_by so the counted type is the one being benchmarked.
            let comp_count = Rc::new(RefCell::new(0u64));
            let comp_count_copy = comp_count.clone();
            let instrumented_sort_func = || {
                let mut test_data = transform(pattern_provider(test_size));
                S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
                    *comp_count_copy.borrow_mut() += 1;
                    a.cmp(b)
                })
            };
            measure_comp_count(&name, test_size, instrumented_sort_func, comp_count);
        }
    } else {
        bench_sort(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

fn shuffle_vec<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    let mut rng = thread_rng();
    v.shuffle(&mut rng);

    v
}

fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}

fn bench_patterns<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if test_size > 100_000 && transform_name != "i32" {
        // These are just too expensive.
        return;
    }

    let mut pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("random_5p", |size| {
            let (len_95p, len_5p) = split_len(size, 95.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_95p)
                .chain(patterns::random(len_5p))
                .collect();

            shuffle_vec(v)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("saws_short", |size| {
            patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize)
        }),
    ];

    // Inputs known to push quicksort variants towards their worst case.
    let mut extra_pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("pipe_organ", patterns::pipe_organ),
        ("median_of_three_killer", patterns::median_of_three_killer),
        ("random_z1", |size| {
            if size == 0 {
                return Vec::new();
            }

            patterns::random_zipf(size, 1.0)
        }),
        ("90_zero_10_random", |size| {
            let (len_90, len_10) = split_len(size, 90.0);
            std::iter::repeat(0)
                .take(len_90)
                .chain(patterns::random(len_10))
                .collect()
        }),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        pattern_providers.append(&mut extra_pattern_providers);
    }

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        // --- Stable sorts ---

        bench_impl::<T, SlicesStable>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<T, StdStable>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        // --- Unstable sorts ---

        bench_impl::<T, SlicesUnstable>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<T, StdUnstable>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn bench_search(c: &mut Criterion) {
    for test_size in [16, 1_000, 1_000_000] {
        let mut haystack = patterns::random(test_size);
        slices::sort(&mut haystack);
        let needles = patterns::random_uniform(1_000, i32::MIN..=i32::MAX);

        c.bench_function(&format!("slices_binary_search-i32-{test_size}"), |b| {
            b.iter(|| {
                needles
                    .iter()
                    .filter(|needle| slices::binary_search(black_box(&haystack[..]), *needle).1)
                    .count()
            })
        });
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 7, 8, 9, 11, 13, 15, 16, 17, 19, 20, 24, 28, 31, 36, 50, 101, 200, 500,
        1_000, 2_048, 10_000, 100_000, 1_000_000,
    ];

    for test_size in test_sizes {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_size, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        // Sorting indices is very common.
        bench_patterns(c, test_size, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        // Strings are compared lexicographically, so we zero extend them to maintain the input
        // order.
        bench_patterns(c, test_size, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }

    if env::var("MEASURE_COMP").is_err() {
        bench_search(c);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

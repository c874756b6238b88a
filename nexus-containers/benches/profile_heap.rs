//! Per-operation latency profile for Heap and Queue.
//!
//! For best results, disable turbo boost and pin to one core:
//!   echo 1 | sudo tee /sys/devices/system/cpu/intel_pstate/no_turbo
//!   sudo taskset -c 2 ./target/release/deps/profile_heap-*

use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use hdrhistogram::Histogram;
use nexus_containers::{Heap, MinFirst, Queue};

const HEAP_SIZE: u64 = 1024;
const WARMUP: usize = 100_000;
const SAMPLES: usize = 1_000_000;

#[cfg(target_arch = "x86_64")]
#[inline]
fn rdtscp() -> u64 {
    unsafe {
        let mut aux: u32 = 0;
        core::arch::x86_64::__rdtscp(&mut aux)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn rdtscp() -> u64 {
    use std::sync::OnceLock;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

fn new_histogram() -> Histogram<u64> {
    Histogram::<u64>::new_with_max(1_000_000, 3).unwrap()
}

fn print_stats(name: &str, hist: &Histogram<u64>, cpu_ghz: f64) {
    println!(
        "{:14} | p50: {:5} | p90: {:5} | p99: {:5} | p999: {:6} | max: {:7} cycles | p50 {:6.1} ns",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.90),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.max(),
        hist.value_at_quantile(0.50) as f64 / cpu_ghz,
    );
}

fn heap_profile(cpu_ghz: f64) {
    println!("=== Heap<u64, MinFirst> (size {}) ===", HEAP_SIZE);

    let mut heap = Heap::with_capacity(HEAP_SIZE as usize + 1, MinFirst);
    for i in 0..HEAP_SIZE {
        heap.insert((i * 7 + 13) % HEAP_SIZE);
    }

    let mut insert_hist = new_histogram();
    let mut remove_root_hist = new_histogram();
    let mut remove_at_hist = new_histogram();

    for i in 0..WARMUP + SAMPLES {
        let priority = (i as u64 * 31) % HEAP_SIZE;

        let start = rdtscp();
        let root = black_box(heap.remove_root());
        let remove_root_cycles = rdtscp().wrapping_sub(start);

        let start = rdtscp();
        heap.insert(black_box(root.unwrap_or(priority) ^ priority));
        let insert_cycles = rdtscp().wrapping_sub(start);

        let pos = heap.len() / 2;
        let start = rdtscp();
        let victim = black_box(heap.remove_at(pos));
        let remove_at_cycles = rdtscp().wrapping_sub(start);
        heap.insert(victim.unwrap_or(priority));

        if i >= WARMUP {
            let _ = remove_root_hist.record(remove_root_cycles.min(1_000_000));
            let _ = insert_hist.record(insert_cycles.min(1_000_000));
            let _ = remove_at_hist.record(remove_at_cycles.min(1_000_000));
        }
    }

    print_stats("insert", &insert_hist, cpu_ghz);
    print_stats("remove_root", &remove_root_hist, cpu_ghz);
    print_stats("remove_at", &remove_at_hist, cpu_ghz);
}

fn queue_profile(cpu_ghz: f64) {
    println!("=== Queue<u64> (steady occupancy 256) ===");

    let mut queue: Queue<u64> = (0..256).collect();
    let mut dequeue_hist = new_histogram();

    for i in 0..WARMUP + SAMPLES {
        let start = rdtscp();
        let v = black_box(queue.dequeue());
        let cycles = rdtscp().wrapping_sub(start);
        queue.enqueue(v.unwrap_or(i as u64));

        if i >= WARMUP {
            let _ = dequeue_hist.record(cycles.min(1_000_000));
        }
    }

    // Tail latency here is the compaction pass.
    print_stats("dequeue", &dequeue_hist, cpu_ghz);
}

fn estimate_cpu_freq_ghz() -> f64 {
    let start_cycles = rdtscp();
    let start_time = Instant::now();

    thread::sleep(Duration::from_millis(10));

    let end_cycles = rdtscp();
    let elapsed = start_time.elapsed();

    end_cycles.wrapping_sub(start_cycles) as f64 / elapsed.as_nanos() as f64
}

fn main() {
    let cpu_ghz = estimate_cpu_freq_ghz();
    println!("Estimated CPU freq: {:.2} GHz", cpu_ghz);
    println!();

    heap_profile(cpu_ghz);
    println!();
    queue_profile(cpu_ghz);
}

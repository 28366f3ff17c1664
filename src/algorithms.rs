// Algorithm workloads - the placeholder bodies the harness times.
// Each burns CPU proportional to its asymptotic class; the return values
// exist so the optimizer cannot discard the work.

use rand::Rng;

/// O(n): scan a generated vector for its final element, returning the
/// matching index.
pub fn linear_scan(n: usize) -> Option<usize> {
    let haystack: Vec<usize> = (0..n).collect();
    let needle = n.saturating_sub(1);
    haystack.iter().position(|&value| value == needle)
}

/// O(n²): bubble sort `n` internally generated random values and return
/// the sorted vector.
pub fn bubble_sort(n: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    let mut values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..100_000)).collect();

    for pass in 0..values.len() {
        let mut swapped = false;
        for i in 0..values.len().saturating_sub(pass + 1) {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    values
}

/// O(log n): classic iterative binary search over a sorted slice.
///
/// Returns the index of `target` when present. The overflow-safe midpoint
/// form is used rather than `(left + right) / 2`.
pub fn binary_search(sorted: &[i64], target: i64) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }

    let mut left = 0usize;
    let mut right = sorted.len() - 1;

    loop {
        let mid = left + (right - left) / 2;
        match sorted[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => {
                if mid == sorted.len() - 1 {
                    return None;
                }
                left = mid + 1;
            }
            std::cmp::Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
        if left > right {
            return None;
        }
    }
}

/// O(n²): generic double iteration accumulating into a counter.
pub fn nested_loops(n: usize) -> u64 {
    let mut acc: u64 = 0;
    for i in 0..n {
        for j in 0..n {
            acc = acc.wrapping_add((i ^ j) as u64);
        }
    }
    acc
}
